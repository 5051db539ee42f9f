//! Error types for millrace operations.
//!
//! This module provides the main error type [`MillraceError`] which wraps
//! the error conditions that can occur while importing a diagram and
//! building its process model.

use std::io;

use thiserror::Error;

use millrace_convert::{ConvertError, RegistryError};

/// The main error type for millrace operations.
///
/// The `Convert` variant is raised only in strict mode; by default
/// per-shape construction failures are collected as diagnostics on the
/// assembly instead of aborting the run.
#[derive(Debug, Error)]
pub enum MillraceError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Import error: {0}")]
    Import(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Conversion error: {0}")]
    Convert(#[from] ConvertError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_variant_displays_the_cause() {
        let err = MillraceError::Convert(ConvertError::UnknownStencil {
            stencil_id: "Pool".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Conversion error: no construction routine registered for stencil 'Pool'"
        );
    }
}
