//! Gateways. Every stencil has a specific routine; the family declares
//! no default, so only the listed ids resolve.

use millrace_core::{
    diagram::DiagramNodeKind,
    process::{Gateway, GatewayKind, ProcessNode},
    shape::Shape,
};

use crate::{
    error::RoutineError,
    registry::{FamilySpec, Routine},
};

const STENCILS: &[&str] = &[
    "Exclusive_Databased_Gateway",
    "ParallelGateway",
    "InclusiveGateway",
    "EventbasedGateway",
    "ComplexGateway",
];

const ROUTINES: &[(&str, Routine)] = &[
    ("Exclusive_Databased_Gateway", create_exclusive_gateway),
    ("ParallelGateway", create_parallel_gateway),
    ("InclusiveGateway", create_inclusive_gateway),
    ("EventbasedGateway", create_event_based_gateway),
    ("ComplexGateway", create_complex_gateway),
];

/// Registration table for gateways.
pub fn family() -> FamilySpec {
    FamilySpec {
        name: "gateway",
        diagram_kind: DiagramNodeKind::Gateway,
        stencils: STENCILS,
        routines: ROUTINES,
        default_routine: None,
    }
}

fn gateway(kind: GatewayKind) -> Result<ProcessNode, RoutineError> {
    Ok(ProcessNode::Gateway(Gateway::new(kind)))
}

fn create_exclusive_gateway(_shape: &Shape) -> Result<ProcessNode, RoutineError> {
    gateway(GatewayKind::Exclusive)
}

fn create_parallel_gateway(_shape: &Shape) -> Result<ProcessNode, RoutineError> {
    gateway(GatewayKind::Parallel)
}

fn create_inclusive_gateway(_shape: &Shape) -> Result<ProcessNode, RoutineError> {
    gateway(GatewayKind::Inclusive)
}

fn create_event_based_gateway(_shape: &Shape) -> Result<ProcessNode, RoutineError> {
    gateway(GatewayKind::EventBased)
}

fn create_complex_gateway(_shape: &Shape) -> Result<ProcessNode, RoutineError> {
    gateway(GatewayKind::Complex)
}
