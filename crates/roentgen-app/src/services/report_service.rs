// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Report service — synchronous by design: one submission triggers one
// assembly pass and two export passes on the UI task, with no shared state
// between invocations.

use std::path::Path;

use roentgen_core::AppConfig;
use roentgen_core::error::Result;
use roentgen_core::types::ReportRequest;
use roentgen_document::{NamedDocument, ReportOutputs, build_outputs};
use tracing::{info, warn};

/// Generate every output for a submitted request.
///
/// Non-fatal export warnings are logged here; whether they are also shown to
/// the user is the report page's decision (gated by config).
pub fn generate(request: &ReportRequest, config: &AppConfig) -> ReportOutputs {
    let outputs = build_outputs(request, config);

    for warning in &outputs.warnings {
        warn!(%warning, "export degraded");
    }
    info!(
        pdf = outputs.pdf.is_some(),
        docx = outputs.docx.is_some(),
        "report generated"
    );

    outputs
}

/// Write a generated document to the path the user picked.
pub fn save_document(document: &NamedDocument, path: &Path) -> Result<()> {
    std::fs::write(path, &document.bytes)?;
    info!(
        file = %path.display(),
        bytes = document.bytes.len(),
        "document saved"
    );
    Ok(())
}
