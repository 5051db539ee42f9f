//! Millrace Core Types and Definitions
//!
//! This crate provides the foundational types for the millrace BPMN
//! converter. It includes:
//!
//! - **Geometry**: Positional primitives copied from diagram shapes
//!   ([`geometry`] module)
//! - **Shape**: The untyped diagram input tree ([`shape::Shape`])
//! - **Diagram**: Visual counterparts of process nodes
//!   ([`diagram::DiagramNode`])
//! - **Process**: The typed process-model node hierarchy
//!   ([`process`] module)
//! - **Element**: The paired (diagram, process) unit produced by
//!   construction ([`element::BpmnElement`])

pub mod diagram;
pub mod element;
pub mod geometry;
pub mod process;
pub mod shape;
