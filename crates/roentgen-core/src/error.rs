// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Roentgen.

use thiserror::Error;

/// Top-level error type for all Roentgen operations.
#[derive(Debug, Error)]
pub enum RoentgenError {
    // -- Document errors --
    #[error("image decoding failed: {0}")]
    ImageError(String),

    #[error("PDF generation failed: {0}")]
    PdfError(String),

    #[error("DOCX generation failed: {0}")]
    DocxError(String),

    // -- File output --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, RoentgenError>;
