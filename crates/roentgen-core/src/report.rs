// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Report text assembly — the pure mapping from a ReportRequest to the ordered
// line sequence both exporters consume. No clock access, no side effects;
// identical requests always assemble to identical lines.

use chrono::NaiveDate;

use crate::types::ReportRequest;

/// Title line of every report, also used as the PDF metadata title and the
/// DOCX heading.
pub const REPORT_TITLE: &str = "MLC X-RAY REPORT";

/// Rendered in place of findings/impression text when the field is empty.
pub const PLACEHOLDER: &str = "-";

const VALIDITY_NOTICE: &str = "Note: This report is generated electronically \
and is valid without a wet signature unless otherwise required.";

/// Format an exam date the way the report template expects: DD-MM-YYYY.
pub fn format_exam_date(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// Produce the ordered report lines for a request.
///
/// Template: title, identification block, then optional clinical history,
/// findings, impression, reporting doctor, and the validity notice. Sections
/// are separated by single blank lines. The clinical-history block is omitted
/// entirely when the field is empty; findings and impression always appear,
/// with a `-` placeholder when empty.
pub fn report_lines(request: &ReportRequest) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(REPORT_TITLE.to_string());
    lines.push(String::new());
    lines.push(format!("Patient Name: {}", request.patient_name));
    lines.push(format!("Age / Sex: {} / {}", request.age, request.sex));
    lines.push(format!("Hospital / OPD No.: {}", request.hospital_no));
    lines.push(format!(
        "Referring Physician: {}",
        request.referring_physician
    ));
    lines.push(format!(
        "Date of Exam: {}",
        format_exam_date(request.date_of_exam)
    ));
    lines.push(format!("Examination: {}", request.xray_type.label()));
    lines.push(String::new());

    if !request.clinical_history.is_empty() {
        lines.push("Clinical History:".to_string());
        push_block(&mut lines, &request.clinical_history);
        lines.push(String::new());
    }

    lines.push("Findings:".to_string());
    push_block_or_placeholder(&mut lines, &request.findings);
    lines.push(String::new());

    lines.push("Impression:".to_string());
    push_block_or_placeholder(&mut lines, &request.impression);
    lines.push(String::new());

    lines.push(format!("Reporting Doctor: {}", request.doctor_name));
    lines.push(String::new());
    lines.push(VALIDITY_NOTICE.to_string());

    lines
}

/// The full report as a single newline-joined string — the preview/copy
/// surface shown to the user.
pub fn report_text(request: &ReportRequest) -> String {
    report_lines(request).join("\n")
}

/// Append user free text, one assembled line per input line.
fn push_block(lines: &mut Vec<String>, text: &str) {
    for line in text.lines() {
        lines.push(line.to_string());
    }
}

fn push_block_or_placeholder(lines: &mut Vec<String>, text: &str) {
    if text.is_empty() {
        lines.push(PLACEHOLDER.to_string());
    } else {
        push_block(lines, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::XrayType;

    fn request() -> ReportRequest {
        let mut req = ReportRequest::dated(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        req.patient_name = "Jane Doe".into();
        req.age = "34".into();
        req.sex = "Female".into();
        req.hospital_no = "OPD-1042".into();
        req.referring_physician = "Dr. Rao".into();
        req.xray_type = XrayType::ChestPa;
        req.doctor_name = "Dr. Iyer".into();
        req
    }

    #[test]
    fn exam_date_renders_day_month_year() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_exam_date(date), "05-03-2024");
    }

    #[test]
    fn empty_findings_and_impression_render_placeholder() {
        let lines = report_lines(&request());

        let findings_at = lines.iter().position(|l| l == "Findings:").unwrap();
        assert_eq!(lines[findings_at + 1], PLACEHOLDER);

        let impression_at = lines.iter().position(|l| l == "Impression:").unwrap();
        assert_eq!(lines[impression_at + 1], PLACEHOLDER);
    }

    #[test]
    fn assembly_is_deterministic() {
        let req = request();
        assert_eq!(report_lines(&req), report_lines(&req));
        assert_eq!(report_text(&req), report_text(&req));
    }

    #[test]
    fn empty_clinical_history_omits_section() {
        let lines = report_lines(&request());
        assert!(!lines.iter().any(|l| l == "Clinical History:"));
    }

    #[test]
    fn clinical_history_follows_identification_block() {
        let mut req = request();
        req.clinical_history = "cough".into();
        let lines = report_lines(&req);

        // Identification block is lines 0..=8: title, blank, six fields, blank.
        assert_eq!(lines[8], "");
        assert_eq!(lines[9], "Clinical History:");
        assert_eq!(lines[10], "cough");
        assert_eq!(lines[11], "");
        assert_eq!(lines[12], "Findings:");
    }

    #[test]
    fn multi_line_findings_split_into_lines() {
        let mut req = request();
        req.findings = "Opacity in left lower zone.\nNo rib fracture.".into();
        let lines = report_lines(&req);

        let at = lines.iter().position(|l| l == "Findings:").unwrap();
        assert_eq!(lines[at + 1], "Opacity in left lower zone.");
        assert_eq!(lines[at + 2], "No rib fracture.");
        assert_eq!(lines[at + 3], "");
    }

    #[test]
    fn report_text_ends_with_validity_notice() {
        let text = report_text(&request());
        assert!(text.starts_with(REPORT_TITLE));
        assert!(text.ends_with("unless otherwise required."));
    }

    #[test]
    fn identification_block_contains_all_fields() {
        let lines = report_lines(&request());
        assert_eq!(lines[2], "Patient Name: Jane Doe");
        assert_eq!(lines[3], "Age / Sex: 34 / Female");
        assert_eq!(lines[4], "Hospital / OPD No.: OPD-1042");
        assert_eq!(lines[5], "Referring Physician: Dr. Rao");
        assert_eq!(lines[6], "Date of Exam: 05-03-2024");
        assert_eq!(lines[7], "Examination: Chest PA");
    }
}
