//! Per-family construction routines and registration tables.
//!
//! Each module contributes one [`FamilySpec`](crate::registry::FamilySpec):
//! the stencil ids the family claims, specific routines for ids that need
//! to read extra shape properties, and a default routine for the rest.

pub mod activity;
pub mod catch_event;
pub mod end_event;
pub mod gateway;
pub mod sequence_flow;
pub mod start_event;
pub mod throw_event;

use crate::registry::FamilySpec;

/// The registration tables of every built-in element family.
pub fn default_families() -> Vec<FamilySpec> {
    vec![
        catch_event::family(),
        start_event::family(),
        end_event::family(),
        throw_event::family(),
        activity::family(),
        gateway::family(),
        sequence_flow::family(),
    ]
}
