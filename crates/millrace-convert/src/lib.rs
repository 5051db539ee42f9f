//! Conversion engine for the millrace BPMN converter.
//!
//! This crate turns untyped [`Shape`](millrace_core::shape::Shape) trees
//! into typed process-model graphs. It provides:
//!
//! - [`StencilRegistry`]: the stencil-id to construction-routine mapping,
//!   built once at start-up from per-family registration tables
//! - [`ElementFactory`]: the per-shape construction contract producing
//!   paired [`BpmnElement`](millrace_core::element::BpmnElement)s
//! - [`GraphAssembler`]: the tree walk that builds a [`ProcessModel`],
//!   wires sequence flows, and triggers boundary-event reclassification
//! - [`boundary`]: the post-construction transform that reclassifies a
//!   catching event nested inside an activity into a boundary event

pub mod assembler;
pub mod boundary;
pub mod error;
pub mod factory;
pub mod families;
pub mod registry;

pub use assembler::{Assembly, GraphAssembler, ProcessModel};
pub use error::{ConvertError, RegistryError};
pub use factory::ElementFactory;
pub use registry::StencilRegistry;
