//! Diagram JSON import.
//!
//! Reads the shape-tree interchange format produced by diagram editors:
//! every shape carries a `resourceId`, a `stencil.id`, a free-form
//! `properties` bag, `childShapes`, `outgoing` references, and `bounds`.
//! The importer turns that document into the untyped
//! [`Shape`](millrace_core::shape::Shape) tree the conversion engine
//! consumes; it does no semantic interpretation of its own.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use millrace_core::{
    geometry::{Bounds, Point},
    shape::Shape,
};

/// Parse a diagram JSON document into the canvas shape.
///
/// # Errors
///
/// Returns the underlying deserialization error when the document is not
/// valid JSON or misses a required field.
pub fn from_json(source: &str) -> Result<Shape, serde_json::Error> {
    let dto: ShapeDto = serde_json::from_str(source)?;
    Ok(dto.into_shape())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ShapeDto {
    resource_id: String,
    stencil: StencilDto,
    #[serde(default)]
    properties: IndexMap<String, Value>,
    #[serde(default)]
    child_shapes: Vec<ShapeDto>,
    #[serde(default)]
    outgoing: Vec<ReferenceDto>,
    #[serde(default)]
    bounds: Option<BoundsDto>,
}

#[derive(Debug, Deserialize)]
struct StencilDto {
    id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReferenceDto {
    resource_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BoundsDto {
    upper_left: PointDto,
    lower_right: PointDto,
}

#[derive(Debug, Deserialize)]
struct PointDto {
    x: f32,
    y: f32,
}

impl ShapeDto {
    fn into_shape(self) -> Shape {
        let mut shape = Shape::new(self.stencil.id, self.resource_id);
        for (key, value) in self.properties {
            if let Some(value) = coerce_property(value) {
                shape = shape.with_property(key, value);
            }
        }
        if let Some(bounds) = self.bounds {
            shape = shape.with_bounds(Bounds::new(
                Point::new(bounds.upper_left.x, bounds.upper_left.y),
                Point::new(bounds.lower_right.x, bounds.lower_right.y),
            ));
        }
        for reference in self.outgoing {
            shape = shape.with_outgoing(reference.resource_id);
        }
        for child in self.child_shapes {
            shape = shape.with_child(child.into_shape());
        }
        shape
    }
}

/// Flatten a JSON property value into the string form downstream routines
/// read. Editors emit numbers and booleans alongside strings; null values
/// are dropped, compound values keep their JSON text.
fn coerce_property(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        compound => Some(compound.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_tree_is_imported_with_properties_and_children() {
        let source = r#"{
            "resourceId": "canvas",
            "stencil": {"id": "BPMNDiagram"},
            "childShapes": [
                {
                    "resourceId": "sid-1",
                    "stencil": {"id": "IntermediateTimerEvent"},
                    "properties": {"name": "wait", "timeduration": "PT5M"},
                    "bounds": {
                        "upperLeft": {"x": 100, "y": 200},
                        "lowerRight": {"x": 130, "y": 230}
                    },
                    "outgoing": [{"resourceId": "sid-2"}]
                }
            ]
        }"#;

        let canvas = from_json(source).expect("document should parse");
        assert_eq!(canvas.stencil_id(), "BPMNDiagram");
        assert_eq!(canvas.children().len(), 1);

        let child = &canvas.children()[0];
        assert_eq!(child.resource_id(), "sid-1");
        assert_eq!(child.property("name"), Some("wait"));
        assert_eq!(child.outgoing(), ["sid-2".to_string()]);
        assert_eq!(child.bounds().upper_left(), Point::new(100.0, 200.0));
        assert_eq!(child.bounds().width(), 30.0);
    }

    #[test]
    fn scalar_properties_are_coerced_to_strings() {
        let source = r#"{
            "resourceId": "sid-3",
            "stencil": {"id": "Task"},
            "properties": {"name": "review", "looping": false, "priority": 2, "docs": null}
        }"#;

        let shape = from_json(source).expect("document should parse");
        assert_eq!(shape.property("looping"), Some("false"));
        assert_eq!(shape.property("priority"), Some("2"));
        assert_eq!(shape.property("docs"), None);
    }

    #[test]
    fn missing_required_field_is_an_import_error() {
        let source = r#"{"stencil": {"id": "Task"}}"#;
        assert!(from_json(source).is_err());
    }
}
