// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Roentgen — Core types, report assembly, and error definitions shared across
// all crates.

pub mod config;
pub mod error;
pub mod report;
pub mod types;

pub use config::AppConfig;
pub use error::RoentgenError;
pub use types::*;
