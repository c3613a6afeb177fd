// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Output orchestration — one request in, every deliverable out.
//
// This is the graceful-degradation boundary: exporter failures become warning
// values on the result instead of errors, and the assembled text is always
// produced. The caller decides whether to log or surface the warnings.

use serde::Serialize;
use tracing::{info, instrument};

use roentgen_core::AppConfig;
use roentgen_core::report;
use roentgen_core::types::{ExportFormat, ReportRequest};

use crate::docx::DocxExporter;
use crate::pdf::PdfExporter;
use crate::signature::SignatureImage;

/// A generated document plus the metadata the delivery surface needs.
#[derive(Debug, Clone, Serialize)]
pub struct NamedDocument {
    pub filename: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Non-fatal problems encountered while producing outputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ExportWarning {
    /// The uploaded signature could not be decoded; the PDF was produced
    /// without it.
    SignatureUnusable { reason: String },
    /// PDF generation failed; that download is unavailable.
    PdfFailed { reason: String },
    /// DOCX generation failed; that download is unavailable.
    DocxFailed { reason: String },
}

impl std::fmt::Display for ExportWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SignatureUnusable { reason } => {
                write!(f, "Signature image unusable ({reason}); PDF generated without it")
            }
            Self::PdfFailed { reason } => write!(f, "PDF export failed: {reason}"),
            Self::DocxFailed { reason } => write!(f, "DOCX export failed: {reason}"),
        }
    }
}

/// Everything produced for one submission.
#[derive(Debug, Clone, Serialize)]
pub struct ReportOutputs {
    /// Plain-text rendering, always present. The preview/copy surface.
    pub text: String,
    pub pdf: Option<NamedDocument>,
    pub docx: Option<NamedDocument>,
    pub warnings: Vec<ExportWarning>,
}

/// Assemble the report text and run both exporters.
///
/// Never fails: a missing output is represented as `None` plus a warning
/// naming the reason.
#[instrument(skip_all, fields(exam = %request.xray_type))]
pub fn build_outputs(request: &ReportRequest, config: &AppConfig) -> ReportOutputs {
    let lines = report::report_lines(request);
    let text = lines.join("\n");
    let mut warnings = Vec::new();

    let signature = match (&request.signature_image, config.embed_signature) {
        (Some(bytes), true) => match SignatureImage::decode(bytes) {
            Ok(sig) => Some(sig),
            Err(err) => {
                warnings.push(ExportWarning::SignatureUnusable {
                    reason: err.to_string(),
                });
                None
            }
        },
        _ => None,
    };

    let pdf = match PdfExporter::new(config.paper_size).export(&lines, signature.as_ref()) {
        Ok(bytes) => Some(named(ExportFormat::Pdf, request, bytes)),
        Err(err) => {
            warnings.push(ExportWarning::PdfFailed {
                reason: err.to_string(),
            });
            None
        }
    };

    let docx = match DocxExporter::export(&lines, signature.as_ref()) {
        Ok(bytes) => Some(named(ExportFormat::Docx, request, bytes)),
        Err(err) => {
            warnings.push(ExportWarning::DocxFailed {
                reason: err.to_string(),
            });
            None
        }
    };

    info!(
        pdf = pdf.is_some(),
        docx = docx.is_some(),
        warnings = warnings.len(),
        "report outputs assembled"
    );

    ReportOutputs {
        text,
        pdf,
        docx,
        warnings,
    }
}

fn named(format: ExportFormat, request: &ReportRequest, bytes: Vec<u8>) -> NamedDocument {
    NamedDocument {
        filename: format.suggested_filename(&request.patient_name),
        mime_type: format.mime_type(),
        bytes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use roentgen_core::types::XrayType;

    fn sample_request() -> ReportRequest {
        let mut req = ReportRequest::dated(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        req.patient_name = "Jane Doe".into();
        req.xray_type = XrayType::Skull;
        req.findings = "No fracture seen.".into();
        req
    }

    #[test]
    fn both_outputs_present_on_the_happy_path() {
        let outputs = build_outputs(&sample_request(), &AppConfig::default());

        assert_eq!(outputs.text, report::report_text(&sample_request()));
        assert!(outputs.warnings.is_empty());

        let pdf = outputs.pdf.expect("PDF output");
        assert_eq!(pdf.filename, "MLC_Xray_Report_Jane_Doe.pdf");
        assert_eq!(pdf.mime_type, "application/pdf");
        assert!(pdf.bytes.starts_with(b"%PDF"));

        let docx = outputs.docx.expect("DOCX output");
        assert_eq!(docx.filename, "MLC_Xray_Report_Jane_Doe.docx");
        assert!(docx.bytes.starts_with(b"PK"));
    }

    #[test]
    fn corrupt_signature_degrades_to_pdf_without_image() {
        let mut req = sample_request();
        req.signature_image = Some(b"not an image at all".to_vec());

        let outputs = build_outputs(&req, &AppConfig::default());

        // The PDF is still produced and valid.
        let pdf = outputs.pdf.expect("PDF output despite bad signature");
        assert!(pdf.bytes.starts_with(b"%PDF"));

        assert_eq!(outputs.warnings.len(), 1);
        assert!(matches!(
            outputs.warnings[0],
            ExportWarning::SignatureUnusable { .. }
        ));
    }

    #[test]
    fn signature_embedding_can_be_disabled() {
        let mut req = sample_request();
        // Would fail to decode, but embedding is off so it is never touched.
        req.signature_image = Some(b"junk".to_vec());

        let config = AppConfig {
            embed_signature: false,
            ..AppConfig::default()
        };
        let outputs = build_outputs(&req, &config);

        assert!(outputs.warnings.is_empty());
        assert!(outputs.pdf.is_some());
    }

    #[test]
    fn text_is_always_present() {
        let outputs = build_outputs(&ReportRequest::dated(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        ), &AppConfig::default());
        assert!(outputs.text.contains("MLC X-RAY REPORT"));
        assert!(outputs.text.contains("Findings:"));
    }

    #[test]
    fn warning_messages_are_presentable() {
        let warning = ExportWarning::DocxFailed {
            reason: "zip error".into(),
        };
        assert_eq!(warning.to_string(), "DOCX export failed: zip error");
    }
}
