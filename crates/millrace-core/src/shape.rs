//! The untyped diagram input tree.
//!
//! A [`Shape`] is a node of the attribute-bag representation produced by a
//! diagram editor: a stencil id naming its semantic kind, a resource id, a
//! free-form string property map, raw bounds, outgoing references, and
//! nested child shapes. Shapes are read-only inputs to conversion and are
//! never mutated.

use indexmap::IndexMap;

use crate::geometry::Bounds;

/// An untyped diagram shape.
///
/// Shapes form an ordered tree; child order is preserved from the input
/// document. All semantic interpretation (which process element a shape
/// becomes, which properties matter) happens downstream, driven by the
/// stencil id.
///
/// # Examples
///
/// ```
/// # use millrace_core::shape::Shape;
/// let shape = Shape::new("IntermediateTimerEvent", "sid-1")
///     .with_property("name", "wait for invoice");
///
/// assert_eq!(shape.stencil_id(), "IntermediateTimerEvent");
/// assert_eq!(shape.property("name"), Some("wait for invoice"));
/// assert_eq!(shape.property("missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shape {
    stencil_id: String,
    resource_id: String,
    properties: IndexMap<String, String>,
    bounds: Bounds,
    outgoing: Vec<String>,
    children: Vec<Shape>,
}

impl Shape {
    /// Create a new shape with the given stencil and resource ids.
    pub fn new(stencil_id: impl Into<String>, resource_id: impl Into<String>) -> Self {
        Self {
            stencil_id: stencil_id.into(),
            resource_id: resource_id.into(),
            ..Self::default()
        }
    }

    /// Set a string property, consuming and returning the shape.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Set the shape's bounds, consuming and returning the shape.
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Append an outgoing reference (a resource id), consuming and
    /// returning the shape.
    pub fn with_outgoing(mut self, resource_id: impl Into<String>) -> Self {
        self.outgoing.push(resource_id.into());
        self
    }

    /// Append a child shape, consuming and returning the shape.
    pub fn with_child(mut self, child: Shape) -> Self {
        self.children.push(child);
        self
    }

    /// Get the stencil id naming this shape's semantic kind.
    pub fn stencil_id(&self) -> &str {
        &self.stencil_id
    }

    /// Get the resource id uniquely identifying this shape in the diagram.
    pub fn resource_id(&self) -> &str {
        &self.resource_id
    }

    /// Look up a string property. A missing key yields `None`, never an
    /// error.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Borrow the full property map.
    pub fn properties(&self) -> &IndexMap<String, String> {
        &self.properties
    }

    /// Get the raw bounds of this shape.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Borrow the outgoing references (resource ids of connected shapes).
    pub fn outgoing(&self) -> &[String] {
        &self.outgoing
    }

    /// Borrow the ordered child shapes.
    pub fn children(&self) -> &[Shape] {
        &self.children
    }
}
