// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// DOCX exporter — render assembled report lines into a Word document using
// `docx-rs`: one heading, then one paragraph per line, in order. Pagination is
// the consuming word processor's concern, not ours.

use std::io::Cursor;
use std::path::Path;

use docx_rs::{AlignmentType, Docx, Paragraph, Run};
use roentgen_core::error::{Result, RoentgenError};
use roentgen_core::report::REPORT_TITLE;
use tracing::{info, instrument};

use crate::signature::SignatureImage;

/// Heading run size in half-points (16pt).
const HEADING_SIZE_HALF_PT: usize = 32;

/// Renders assembled report lines into a Word document.
pub struct DocxExporter;

impl DocxExporter {
    /// Render report lines to DOCX bytes.
    ///
    /// The signature parameter is part of the shared exporter contract but is
    /// not embedded in the document body; the PDF rendering carries the image.
    #[instrument(skip_all, fields(line_count = lines.len()))]
    pub fn export(lines: &[String], _signature: Option<&SignatureImage>) -> Result<Vec<u8>> {
        let docx = build_document(lines);

        let mut cursor = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut cursor)
            .map_err(|err| RoentgenError::DocxError(err.to_string()))?;

        let bytes = cursor.into_inner();
        info!(bytes = bytes.len(), "Report DOCX serialised");
        Ok(bytes)
    }

    /// Render the report and write it directly to a file.
    pub fn write_to_file(
        lines: &[String],
        signature: Option<&SignatureImage>,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let bytes = Self::export(lines, signature)?;
        std::fs::write(path.as_ref(), &bytes)?;
        info!("Wrote report DOCX to {}", path.as_ref().display());
        Ok(())
    }
}

/// Heading first, then one paragraph per assembled line.
fn build_document(lines: &[String]) -> Docx {
    let heading = Paragraph::new().align(AlignmentType::Center).add_run(
        Run::new()
            .add_text(REPORT_TITLE)
            .bold()
            .size(HEADING_SIZE_HALF_PT),
    );

    let mut docx = Docx::new().add_paragraph(heading);
    for line in lines {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(line.as_str())));
    }
    docx
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::DocumentChild;

    #[test]
    fn one_heading_plus_one_paragraph_per_line() {
        let lines: Vec<String> = vec!["first".into(), String::new(), "third".into()];
        let docx = build_document(&lines);
        assert_eq!(docx.document.children.len(), lines.len() + 1);
    }

    #[test]
    fn heading_carries_the_report_title() {
        let docx = build_document(&["body".to_string()]);
        match &docx.document.children[0] {
            DocumentChild::Paragraph(para) => {
                assert_eq!(para.raw_text(), REPORT_TITLE);
            }
            other => panic!("expected heading paragraph, got {other:?}"),
        }
    }

    #[test]
    fn paragraphs_preserve_line_order() {
        let lines: Vec<String> = vec!["alpha".into(), "beta".into()];
        let docx = build_document(&lines);

        let texts: Vec<String> = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(para) => Some(para.raw_text()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec![REPORT_TITLE.to_string(), "alpha".into(), "beta".into()]);
    }

    #[test]
    fn empty_line_sequence_yields_heading_only() {
        let docx = build_document(&[]);
        assert_eq!(docx.document.children.len(), 1);
    }

    #[test]
    fn export_produces_a_zip_container() {
        let lines: Vec<String> = vec!["body".into()];
        let bytes = DocxExporter::export(&lines, None).unwrap();
        assert!(!bytes.is_empty());
        // DOCX is a ZIP archive.
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn write_to_file_creates_the_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.docx");

        DocxExporter::write_to_file(&["body".to_string()], None, &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert!(written.starts_with(b"PK"));
    }
}
