//! Millrace - typed BPMN process models from untyped diagram shape trees.
//!
//! Importing, dispatching, and assembling for diagram-editor shape trees:
//! a JSON shape document goes in, a typed process-model graph with paired
//! visual nodes comes out.

pub mod config;

mod error;
mod import;
mod summary;

pub use millrace_convert::{Assembly, ConvertError, ProcessModel, StencilRegistry};
pub use millrace_core::{diagram, element, geometry, process, shape};

pub use error::MillraceError;
pub use summary::{ElementSummary, ModelSummary};

use log::{debug, info};

use millrace_convert::GraphAssembler;
use millrace_core::shape::Shape;

use config::AppConfig;

/// Builder for importing diagrams and assembling process models.
///
/// The builder owns the stencil registry, built once from the element
/// family tables, and reuses it across runs.
///
/// # Examples
///
/// ```rust
/// use millrace::{ModelBuilder, config::AppConfig};
///
/// let source = r#"{
///     "resourceId": "canvas",
///     "stencil": {"id": "BPMNDiagram"},
///     "childShapes": [
///         {"resourceId": "t1", "stencil": {"id": "Task"}}
///     ]
/// }"#;
///
/// let builder = ModelBuilder::new(AppConfig::default())
///     .expect("built-in families must register");
/// let canvas = builder.import(source).expect("valid document");
/// let assembly = builder.build(&canvas).expect("conversion succeeds");
///
/// assert_eq!(assembly.model().len(), 1);
/// ```
pub struct ModelBuilder {
    config: AppConfig,
    registry: StencilRegistry,
}

impl ModelBuilder {
    /// Create a model builder with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `MillraceError::Registry` if the built-in element family
    /// tables conflict; this indicates a programming error, not bad input.
    pub fn new(config: AppConfig) -> Result<Self, MillraceError> {
        let registry = StencilRegistry::with_default_families()?;
        Ok(Self { config, registry })
    }

    /// Parse a diagram JSON document into its canvas shape tree.
    ///
    /// # Errors
    ///
    /// Returns `MillraceError::Import` when the document is not valid
    /// JSON or misses a required field.
    pub fn import(&self, source: &str) -> Result<Shape, MillraceError> {
        info!("Importing diagram document");
        let canvas = import::from_json(source)?;
        debug!(
            resource_id = canvas.resource_id(),
            top_level_shapes = canvas.children().len();
            "Diagram imported"
        );
        Ok(canvas)
    }

    /// Assemble the process model for an imported canvas.
    ///
    /// By default, per-shape construction failures are collected as
    /// diagnostics on the returned [`Assembly`] and the remaining shapes
    /// are converted. In strict mode the first failure aborts the run.
    ///
    /// # Errors
    ///
    /// Returns `MillraceError::Convert` in strict mode when any shape
    /// fails to convert.
    pub fn build(&self, canvas: &Shape) -> Result<Assembly, MillraceError> {
        let assembler = GraphAssembler::new(&self.registry);
        let assembly = assembler.assemble(canvas);

        if self.config.conversion().strict() && !assembly.diagnostics().is_empty() {
            let (_, mut diagnostics) = assembly.into_parts();
            return Err(MillraceError::Convert(diagnostics.remove(0)));
        }
        Ok(assembly)
    }

    /// Project an assembly into its serializable summary.
    pub fn summarize(&self, assembly: &Assembly) -> ModelSummary {
        ModelSummary::from_assembly(assembly)
    }

    /// Borrow the stencil registry backing this builder.
    pub fn registry(&self) -> &StencilRegistry {
        &self.registry
    }
}
