// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Global application state — reactive signals for the Dioxus UI.

use roentgen_core::AppConfig;
use roentgen_document::ReportOutputs;

/// Shared state accessible to all pages via `use_context`.
///
/// One submission produces one `ReportOutputs`, replaced wholesale by the
/// next; nothing here survives the window.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Session settings.
    pub config: AppConfig,
    /// Outputs of the most recent generation.
    pub outputs: Option<ReportOutputs>,
    /// Status message for user feedback.
    pub status_message: Option<String>,
}
