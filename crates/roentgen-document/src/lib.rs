// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// roentgen-document — Report rendering for Roentgen.
//
// Provides the PDF and DOCX exporters, signature image decoding, and the
// output orchestration that turns one ReportRequest into every deliverable.

pub mod docx;
pub mod export;
pub mod pdf;
pub mod signature;

// Re-export the primary types so callers can use `roentgen_document::PdfExporter` etc.
pub use docx::DocxExporter;
pub use export::{ExportWarning, NamedDocument, ReportOutputs, build_outputs};
pub use pdf::PdfExporter;
pub use signature::SignatureImage;
