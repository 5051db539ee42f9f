//! Error types for the conversion engine.
//!
//! Construction failures are normalized into exactly two kinds: an
//! unresolvable stencil id ([`ConvertError::UnknownStencil`]) and a
//! failure inside a construction routine
//! ([`ConvertError::ElementConstruction`], carrying the original cause).
//! These are the only error kinds the graph assembler has to handle.
//! Registry construction has its own error type ([`RegistryError`])
//! because its failures are programming errors surfaced at start-up, not
//! per-shape conditions.

use thiserror::Error;

/// The boxed cause of a routine-internal failure.
pub type RoutineError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while converting a single shape.
///
/// Both variants are fatal to that one shape's construction only; sibling
/// shapes are unaffected.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// No construction routine is registered for the stencil id and its
    /// family declares no default.
    #[error("no construction routine registered for stencil '{stencil_id}'")]
    UnknownStencil {
        /// The unresolvable stencil id.
        stencil_id: String,
    },

    /// A construction routine failed. All internal causes are wrapped
    /// into this one kind so callers see a single error regardless of the
    /// failure's origin.
    #[error("error while creating the process element of {stencil_id}")]
    ElementConstruction {
        /// The stencil id whose routine failed.
        stencil_id: String,
        /// The original cause, preserved for diagnostics.
        #[source]
        source: RoutineError,
    },
}

impl ConvertError {
    /// The stencil id the error relates to.
    pub fn stencil_id(&self) -> &str {
        match self {
            ConvertError::UnknownStencil { stencil_id } => stencil_id,
            ConvertError::ElementConstruction { stencil_id, .. } => stencil_id,
        }
    }
}

/// Errors raised while building the stencil registry.
///
/// These indicate conflicting registration tables and are reported at
/// start-up, before any diagram is processed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A stencil id was claimed by two families (or twice by one).
    #[error("stencil '{stencil_id}' is claimed by both '{previous}' and '{family}'")]
    DuplicateStencil {
        stencil_id: &'static str,
        family: &'static str,
        previous: &'static str,
    },

    /// A family declared a specific routine for a stencil id outside its
    /// claimed set.
    #[error("family '{family}' declares a routine for stencil '{stencil_id}' it does not claim")]
    RoutineOutsideFamily {
        stencil_id: &'static str,
        family: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_stencil_display_names_the_id() {
        let err = ConvertError::UnknownStencil {
            stencil_id: "FancyEvent".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no construction routine registered for stencil 'FancyEvent'"
        );
        assert_eq!(err.stencil_id(), "FancyEvent");
    }

    #[test]
    fn element_construction_preserves_the_cause() {
        let cause: RoutineError = "unsupported task type 'Robot'".into();
        let err = ConvertError::ElementConstruction {
            stencil_id: "Task".to_string(),
            source: cause,
        };

        assert_eq!(
            err.to_string(),
            "error while creating the process element of Task"
        );
        let source = std::error::Error::source(&err).expect("cause should be preserved");
        assert_eq!(source.to_string(), "unsupported task type 'Robot'");
    }
}
