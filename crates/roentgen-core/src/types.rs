// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Roentgen report builder.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Examination types offered by the entry form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum XrayType {
    ChestPa,
    ChestAp,
    Skull,
    Kub,
    Spine,
    /// Free-text examination name, used when none of the fixed types fit.
    Other(String),
}

impl XrayType {
    /// The fixed choices shown in the examination dropdown, in display order.
    pub const STANDARD: [XrayType; 5] = [
        XrayType::ChestPa,
        XrayType::ChestAp,
        XrayType::Skull,
        XrayType::Kub,
        XrayType::Spine,
    ];

    /// Human-readable examination name as it appears in the report.
    pub fn label(&self) -> &str {
        match self {
            Self::ChestPa => "Chest PA",
            Self::ChestAp => "Chest AP",
            Self::Skull => "Skull",
            Self::Kub => "KUB",
            Self::Spine => "Spine",
            Self::Other(name) => name,
        }
    }

    /// Resolve a dropdown value back to a fixed examination type.
    ///
    /// Returns `None` for unknown values, including the "Other" choice —
    /// the form turns that into `XrayType::Other` with whatever the user typed.
    pub fn from_label(value: &str) -> Option<Self> {
        match value {
            "Chest PA" => Some(Self::ChestPa),
            "Chest AP" => Some(Self::ChestAp),
            "Skull" => Some(Self::Skull),
            "KUB" => Some(Self::Kub),
            "Spine" => Some(Self::Spine),
            _ => None,
        }
    }
}

impl std::fmt::Display for XrayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The immutable set of user-supplied fields describing one report instance.
///
/// Constructed once at form submission and passed by reference into the
/// assembler and both exporters; nothing downstream mutates it. All text
/// fields are optional in the sense that empty strings are valid input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub patient_name: String,
    pub age: String,
    pub sex: String,
    pub hospital_no: String,
    pub referring_physician: String,
    pub date_of_exam: NaiveDate,
    pub xray_type: XrayType,
    pub clinical_history: String,
    pub findings: String,
    pub impression: String,
    pub doctor_name: String,
    /// Raw PNG/JPEG bytes of the uploaded signature image, if any.
    /// Owned by this request and discarded with it.
    pub signature_image: Option<Vec<u8>>,
}

impl ReportRequest {
    /// Blank request dated today, as presented by a fresh entry form.
    pub fn new() -> Self {
        Self::dated(chrono::Local::now().date_naive())
    }

    /// Blank request with an explicit exam date.
    pub fn dated(date_of_exam: NaiveDate) -> Self {
        Self {
            patient_name: String::new(),
            age: String::new(),
            sex: String::new(),
            hospital_no: String::new(),
            referring_physician: String::new(),
            date_of_exam,
            xray_type: XrayType::ChestPa,
            clinical_history: String::new(),
            findings: String::new(),
            impression: String::new(),
            doctor_name: String::new(),
            signature_image: None,
        }
    }
}

impl Default for ReportRequest {
    fn default() -> Self {
        Self::new()
    }
}

/// Output document formats offered for download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    Pdf,
    Docx,
}

impl ExportFormat {
    /// MIME type string for the download response.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }

    /// Download filename for a report: `MLC_Xray_Report_<patient>.<ext>`.
    ///
    /// The patient name is sanitized for filesystem use; an empty name falls
    /// back to the literal `patient`.
    pub fn suggested_filename(&self, patient_name: &str) -> String {
        let stem = sanitize_filename_stem(patient_name);
        let stem = if stem.is_empty() { "patient" } else { stem.as_str() };
        format!("MLC_Xray_Report_{stem}.{}", self.extension())
    }
}

/// Replace whitespace with underscores and drop path-hostile characters.
fn sanitize_filename_stem(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| !matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|'))
        .collect()
}

/// Standard paper sizes for the PDF exporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperSize {
    A4,
    A5,
    Letter,
    Legal,
}

impl PaperSize {
    /// Dimensions in millimetres (width, height).
    pub fn dimensions_mm(&self) -> (u32, u32) {
        match self {
            Self::A4 => (210, 297),
            Self::A5 => (148, 210),
            Self::Letter => (216, 279),
            Self::Legal => (216, 356),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_uses_patient_name() {
        let name = ExportFormat::Pdf.suggested_filename("Jane Doe");
        assert_eq!(name, "MLC_Xray_Report_Jane_Doe.pdf");
    }

    #[test]
    fn filename_falls_back_for_empty_name() {
        assert_eq!(
            ExportFormat::Docx.suggested_filename(""),
            "MLC_Xray_Report_patient.docx"
        );
        // A name that sanitizes to nothing gets the same fallback.
        assert_eq!(
            ExportFormat::Docx.suggested_filename("///"),
            "MLC_Xray_Report_patient.docx"
        );
    }

    #[test]
    fn filename_strips_path_separators() {
        let name = ExportFormat::Pdf.suggested_filename("a/b\\c");
        assert_eq!(name, "MLC_Xray_Report_abc.pdf");
    }

    #[test]
    fn xray_labels_round_trip() {
        for xray in XrayType::STANDARD {
            assert_eq!(XrayType::from_label(xray.label()), Some(xray.clone()));
        }
        assert_eq!(XrayType::from_label("Other"), None);
        assert_eq!(XrayType::Other("Left wrist".into()).label(), "Left wrist");
    }

    #[test]
    fn mime_types_match_formats() {
        assert_eq!(ExportFormat::Pdf.mime_type(), "application/pdf");
        assert!(ExportFormat::Docx.mime_type().contains("wordprocessingml"));
    }
}
