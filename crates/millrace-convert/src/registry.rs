//! The stencil-id to construction-routine registry.
//!
//! Each element family contributes a declarative [`FamilySpec`]: the
//! stencil ids it claims, specific routines for some of those ids, and an
//! optional default routine covering the rest. The registry flattens the
//! specs into one validated map at start-up and is read-only afterwards,
//! so it can be shared freely across conversion runs.

use indexmap::IndexMap;
use log::debug;

use millrace_core::{diagram::DiagramNodeKind, process::ProcessNode, shape::Shape};

use crate::{
    error::{ConvertError, RegistryError, RoutineError},
    families,
};

/// A construction routine: builds a bare process node from a shape.
///
/// Routines do not assign the node's id or name; the element factory does
/// that after invocation. Any failure is returned as a boxed cause and
/// wrapped by the factory.
pub type Routine = fn(&Shape) -> Result<ProcessNode, RoutineError>;

/// Declarative registration table for one element family.
pub struct FamilySpec {
    /// Family name, used in registration diagnostics.
    pub name: &'static str,
    /// Visual kind of the diagram nodes this family produces.
    pub diagram_kind: DiagramNodeKind,
    /// Stencil ids claimed by this family.
    pub stencils: &'static [&'static str],
    /// Specific routines for individual stencil ids.
    pub routines: &'static [(&'static str, Routine)],
    /// Catch-all routine for claimed ids without a specific routine.
    pub default_routine: Option<Routine>,
}

/// A resolved registration: the routine for one stencil id.
#[derive(Debug)]
pub struct Registration {
    family: &'static str,
    diagram_kind: DiagramNodeKind,
    routine: Routine,
}

impl Registration {
    /// The name of the family that claimed the stencil.
    pub fn family(&self) -> &'static str {
        self.family
    }

    /// The visual kind the stencil's diagram node gets.
    pub fn diagram_kind(&self) -> DiagramNodeKind {
        self.diagram_kind
    }

    /// Invoke the construction routine on a shape.
    pub fn construct(&self, shape: &Shape) -> Result<ProcessNode, RoutineError> {
        (self.routine)(shape)
    }
}

/// The process-wide stencil registry.
///
/// Built once during start-up from the family registration tables and
/// read-only thereafter. A stencil id resolves to at most one routine;
/// conflicting claims are a build-time error.
pub struct StencilRegistry {
    entries: IndexMap<&'static str, Registration>,
    claimed: IndexMap<&'static str, &'static str>,
}

impl StencilRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
            claimed: IndexMap::new(),
        }
    }

    /// Build the registry with every built-in element family registered.
    pub fn with_default_families() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for spec in families::default_families() {
            registry.register_family(spec)?;
        }
        debug!(
            stencils = registry.entries.len();
            "Stencil registry built"
        );
        Ok(registry)
    }

    /// Register one family's table.
    ///
    /// Validation: every claimed stencil id must be unclaimed so far, and
    /// every specific routine must target a claimed id. Claimed ids
    /// without a specific routine fall back to the family default; if the
    /// family has none, those ids stay unregistered and resolve to
    /// [`ConvertError::UnknownStencil`].
    pub fn register_family(&mut self, spec: FamilySpec) -> Result<(), RegistryError> {
        for &stencil_id in spec.stencils {
            if let Some(&previous) = self.claimed.get(stencil_id) {
                return Err(RegistryError::DuplicateStencil {
                    stencil_id,
                    family: spec.name,
                    previous,
                });
            }
            self.claimed.insert(stencil_id, spec.name);
        }

        for &(stencil_id, _) in spec.routines {
            if !spec.stencils.contains(&stencil_id) {
                return Err(RegistryError::RoutineOutsideFamily {
                    stencil_id,
                    family: spec.name,
                });
            }
        }

        for &stencil_id in spec.stencils {
            let routine = spec
                .routines
                .iter()
                .find(|&&(candidate, _)| candidate == stencil_id)
                .map(|&(_, routine)| routine)
                .or(spec.default_routine);

            if let Some(routine) = routine {
                self.entries.insert(
                    stencil_id,
                    Registration {
                        family: spec.name,
                        diagram_kind: spec.diagram_kind,
                        routine,
                    },
                );
            }
        }

        Ok(())
    }

    /// Resolve a stencil id to its registration.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::UnknownStencil`] when no routine is
    /// registered for the id and no family default covers it.
    pub fn resolve(&self, stencil_id: &str) -> Result<&Registration, ConvertError> {
        self.entries
            .get(stencil_id)
            .ok_or_else(|| ConvertError::UnknownStencil {
                stencil_id: stencil_id.to_string(),
            })
    }

    /// The visual kind a stencil's diagram node gets, or
    /// [`DiagramNodeKind::Unknown`] for unregistered ids.
    pub fn diagram_kind(&self, stencil_id: &str) -> DiagramNodeKind {
        self.entries
            .get(stencil_id)
            .map(Registration::diagram_kind)
            .unwrap_or(DiagramNodeKind::Unknown)
    }

    /// Returns `true` if the stencil id resolves to a routine.
    pub fn is_registered(&self, stencil_id: &str) -> bool {
        self.entries.contains_key(stencil_id)
    }

    /// Iterate over all registered stencil ids.
    pub fn stencil_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }
}

impl Default for StencilRegistry {
    fn default() -> Self {
        Self::new()
    }
}
