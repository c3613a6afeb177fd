// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use serde::{Deserialize, Serialize};

/// Session-scoped application settings.
///
/// The tool keeps no state across sessions, so these live in memory for the
/// lifetime of the window and are never written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Paper size used by the PDF exporter.
    pub paper_size: crate::PaperSize,
    /// Embed the uploaded signature image in the PDF output.
    pub embed_signature: bool,
    /// Surface non-fatal export warnings on the report page.
    pub show_export_warnings: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            paper_size: crate::PaperSize::A4,
            embed_signature: true,
            show_export_warnings: true,
        }
    }
}
