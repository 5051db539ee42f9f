//! Integration tests for the ModelBuilder API
//!
//! These tests drive the full pipeline: JSON import, assembly, and
//! summary projection through the public API.

use millrace::{
    ModelBuilder, MillraceError,
    config::{AppConfig, ConversionConfig},
    process::EventKind,
};

fn builder() -> ModelBuilder {
    ModelBuilder::new(AppConfig::default()).expect("built-in families must register")
}

const ORDER_PROCESS: &str = r#"{
    "resourceId": "canvas",
    "stencil": {"id": "BPMNDiagram"},
    "childShapes": [
        {
            "resourceId": "start",
            "stencil": {"id": "StartNoneEvent"},
            "outgoing": [{"resourceId": "f1"}]
        },
        {
            "resourceId": "f1",
            "stencil": {"id": "SequenceFlow"},
            "outgoing": [{"resourceId": "review"}]
        },
        {
            "resourceId": "review",
            "stencil": {"id": "Task"},
            "properties": {"name": "Review order", "tasktype": "User"},
            "outgoing": [{"resourceId": "f2"}],
            "childShapes": [
                {
                    "resourceId": "deadline",
                    "stencil": {"id": "IntermediateTimerEvent"},
                    "properties": {"name": "48h", "timeduration": "PT48H"}
                }
            ]
        },
        {
            "resourceId": "f2",
            "stencil": {"id": "SequenceFlow"},
            "outgoing": [{"resourceId": "done"}]
        },
        {
            "resourceId": "done",
            "stencil": {"id": "EndNoneEvent"}
        }
    ]
}"#;

#[test]
fn full_pipeline_builds_the_expected_graph() {
    let builder = builder();
    let canvas = builder.import(ORDER_PROCESS).expect("document should parse");
    let assembly = builder.build(&canvas).expect("conversion should succeed");

    assert!(assembly.diagnostics().is_empty());
    assert_eq!(assembly.model().len(), 6);

    let review = assembly.model().get("review").expect("task must exist");
    assert_eq!(review.node().borrow().kind_name(), "user_task");
    assert_eq!(review.node().borrow().name(), Some("Review order"));
}

#[test]
fn nested_timer_becomes_a_boundary_event() {
    let builder = builder();
    let canvas = builder.import(ORDER_PROCESS).expect("document should parse");
    let assembly = builder.build(&canvas).expect("conversion should succeed");

    let deadline = assembly
        .model()
        .get("deadline")
        .expect("nested event must exist");
    let node = deadline.node().borrow();
    let event = node.as_event().expect("should be an event");
    assert_eq!(event.kind(), EventKind::Boundary);

    let attached = event.attached_to().expect("must be attached");
    assert_eq!(attached.borrow().id(), "review");
    assert!(deadline.is_consistent());
}

#[test]
fn sequence_flows_are_wired_end_to_end() {
    let builder = builder();
    let canvas = builder.import(ORDER_PROCESS).expect("document should parse");
    let assembly = builder.build(&canvas).expect("conversion should succeed");

    let flow = assembly.model().get("f1").expect("flow must exist");
    let node = flow.node().borrow();
    let flow = node.as_sequence_flow().expect("should be a flow");
    assert_eq!(flow.source_ref(), Some("start"));
    assert_eq!(flow.target_ref(), Some("review"));
}

#[test]
fn unknown_stencils_become_diagnostics_by_default() {
    let source = r#"{
        "resourceId": "canvas",
        "stencil": {"id": "BPMNDiagram"},
        "childShapes": [
            {"resourceId": "t1", "stencil": {"id": "Task"}},
            {"resourceId": "p1", "stencil": {"id": "Pool"}}
        ]
    }"#;

    let builder = builder();
    let canvas = builder.import(source).expect("document should parse");
    let assembly = builder.build(&canvas).expect("lenient mode should not fail");

    assert_eq!(assembly.model().len(), 1);
    assert_eq!(assembly.diagnostics().len(), 1);
}

#[test]
fn strict_mode_aborts_on_the_first_failure() {
    let source = r#"{
        "resourceId": "canvas",
        "stencil": {"id": "BPMNDiagram"},
        "childShapes": [
            {"resourceId": "p1", "stencil": {"id": "Pool"}}
        ]
    }"#;

    let config = AppConfig::new(ConversionConfig::new(true));
    let builder = ModelBuilder::new(config).expect("built-in families must register");
    let canvas = builder.import(source).expect("document should parse");

    let err = builder.build(&canvas).expect_err("strict mode must fail");
    match err {
        MillraceError::Convert(cause) => assert_eq!(cause.stencil_id(), "Pool"),
        other => panic!("expected a conversion error, got {other:?}"),
    }
}

#[test]
fn invalid_document_returns_an_import_error() {
    let builder = builder();
    let result = builder.import("this is not valid JSON!!!");
    assert!(matches!(result, Err(MillraceError::Import(_))));
}

#[test]
fn summary_projects_kinds_connections_and_attachments() {
    let builder = builder();
    let canvas = builder.import(ORDER_PROCESS).expect("document should parse");
    let assembly = builder.build(&canvas).expect("conversion should succeed");

    let summary = builder.summarize(&assembly);
    assert_eq!(summary.elements().len(), 6);
    assert!(summary.diagnostics().is_empty());

    let deadline = summary
        .elements()
        .iter()
        .find(|element| element.resource_id() == "deadline")
        .expect("summary must include the nested event");
    assert_eq!(deadline.kind(), "boundary_event");
    assert_eq!(deadline.attached_to(), Some("review"));

    let json = serde_json::to_string(&summary).expect("summary must serialize");
    assert!(json.contains("\"boundary_event\""));
}
