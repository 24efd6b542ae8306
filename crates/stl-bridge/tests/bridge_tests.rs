use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use stl_bridge::*;
use stl_codec::{DeserializeOptions, Geometry, OutputFormat, SerializeOptions};
use test_harness::fixtures::{cube_10mm_binary, cube_mesh, unit_cube_ascii};

// ── Helper functions ─────────────────────────────────────────────────────

fn base64_cube() -> Payload {
    Payload::Base64 {
        data: STANDARD.encode(cube_10mm_binary()),
    }
}

fn send(json: &str) -> Response {
    serde_json::from_str(&process_message(json)).unwrap()
}

// ── Serde Round-Trip Tests ───────────────────────────────────────────────

#[test]
fn serde_roundtrip_deserialize_request() {
    let msg = Request::Deserialize {
        payload: base64_cube(),
        filename: Some("cube.stl".to_string()),
        options: DeserializeOptions::script(),
    };
    let json = serde_json::to_string(&msg).unwrap();
    let deserialized: Request = serde_json::from_str(&json).unwrap();
    assert!(json.contains("\"type\":\"Deserialize\""));
    assert!(json.contains("\"encoding\":\"base64\""));
    assert_eq!(deserialized, msg);
}

#[test]
fn serde_roundtrip_serialize_request() {
    let msg = Request::Serialize {
        options: SerializeOptions::ascii(),
        geometries: vec![Geometry::from(cube_mesh(1.0))],
    };
    let json = serde_json::to_string(&msg).unwrap();
    let deserialized: Request = serde_json::from_str(&json).unwrap();
    assert!(json.contains("\"type\":\"Serialize\""));
    assert_eq!(deserialized, msg);
}

#[test]
fn request_fields_default_when_missing() {
    let msg: Request = serde_json::from_str(
        r#"{"type":"Deserialize","payload":{"encoding":"text","data":"solid x\nendsolid x\n"}}"#,
    )
    .unwrap();
    match msg {
        Request::Deserialize {
            filename, options, ..
        } => {
            assert_eq!(filename, None);
            assert_eq!(options, DeserializeOptions::default());
        }
        other => panic!("expected Deserialize, got {:?}", other),
    }
}

#[test]
fn serde_roundtrip_error_response() {
    let msg = Response::Error {
        kind: "ParseError".to_string(),
        message: "something went wrong".to_string(),
    };
    let json = serde_json::to_string(&msg).unwrap();
    let deserialized: Response = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized, msg);
}

// ── Dispatch Tests ───────────────────────────────────────────────────────

#[test]
fn dispatch_base64_cube_returns_meshes() {
    let response = dispatch(Request::Deserialize {
        payload: base64_cube(),
        filename: None,
        options: DeserializeOptions::default(),
    });
    match response {
        Response::Meshes { meshes } => {
            assert_eq!(meshes.len(), 1);
            assert_eq!(meshes[0].face_count(), 12);
            assert_eq!(meshes[0].vertex_count(), 8);
        }
        other => panic!("expected Meshes, got {:?}", other),
    }
}

#[test]
fn dispatch_text_cube_returns_script() {
    let response = dispatch(Request::Deserialize {
        payload: Payload::Text {
            data: unit_cube_ascii(),
        },
        filename: Some("cube.stl".to_string()),
        options: DeserializeOptions {
            output: OutputFormat::Jscad,
            ..DeserializeOptions::default()
        },
    });
    match response {
        Response::Script { source } => {
            assert!(source.contains("// source: cube.stl\n"));
            assert!(source.contains("primitives.polyhedron("));
        }
        other => panic!("expected Script, got {:?}", other),
    }
}

#[test]
fn dispatch_serialize_binary_is_base64() {
    let response = dispatch(Request::Serialize {
        options: SerializeOptions::default(),
        geometries: vec![Geometry::from(cube_mesh(10.0))],
    });
    match response {
        Response::Serialized { mime_type, data } => {
            assert_eq!(mime_type, "application/sla");
            let Payload::Base64 { data } = data else {
                panic!("binary output should be base64");
            };
            assert_eq!(STANDARD.decode(data).unwrap().len(), 84 + 12 * 50);
        }
        other => panic!("expected Serialized, got {:?}", other),
    }
}

#[test]
fn dispatch_serialize_ascii_is_text() {
    let response = dispatch(Request::Serialize {
        options: SerializeOptions::ascii(),
        geometries: vec![Geometry::from(cube_mesh(1.0))],
    });
    assert!(matches!(
        response,
        Response::Serialized { data: Payload::Text { ref data }, .. }
            if data.starts_with("solid object #1: triangles: 12\n")
    ));
}

#[test]
fn dispatch_empty_serialize_returns_error() {
    let response = dispatch(Request::Serialize {
        options: SerializeOptions::default(),
        geometries: vec![],
    });
    match response {
        Response::Error { kind, message } => {
            assert_eq!(kind, "UnsupportedGeometry");
            assert!(message.contains("3D"), "got: {}", message);
        }
        other => panic!("expected Error, got {:?}", other),
    }
}

#[test]
fn dispatch_malformed_text_returns_parse_error() {
    let response = dispatch(Request::Deserialize {
        payload: Payload::Text {
            data: "solid x\nfacet normal 0 0 1\nouter loop\nvertex 0 0 0\nendloop\n".to_string(),
        },
        filename: None,
        options: DeserializeOptions::default(),
    });
    assert!(matches!(
        response,
        Response::Error { ref kind, .. } if kind == "ParseError"
    ));
}

#[test]
fn deserialize_bytes_skips_base64() {
    let response = deserialize_bytes(&cube_10mm_binary(), None, &DeserializeOptions::bare());
    match response {
        Response::Meshes { meshes } => assert!(meshes[0].metadata.is_none()),
        other => panic!("expected Meshes, got {:?}", other),
    }
}

// ── JSON Entry Point Tests ───────────────────────────────────────────────

#[test]
fn process_message_round_trips_through_base64() {
    let request = Request::Serialize {
        options: SerializeOptions::default(),
        geometries: vec![Geometry::from(cube_mesh(4.0))],
    };
    let exported = send(&serde_json::to_string(&request).unwrap());
    let Response::Serialized { data, .. } = exported else {
        panic!("expected Serialized, got {:?}", exported);
    };

    let reimport = Request::Deserialize {
        payload: data,
        filename: None,
        options: DeserializeOptions::bare(),
    };
    match send(&serde_json::to_string(&reimport).unwrap()) {
        Response::Meshes { meshes } => {
            assert_eq!(meshes.len(), 1);
            assert_eq!(meshes[0].vertex_count(), 8);
            assert_eq!(meshes[0].face_count(), 12);
        }
        other => panic!("expected Meshes, got {:?}", other),
    }
}

#[test]
fn process_message_reads_camel_case_options() {
    let json = format!(
        r#"{{"type":"Deserialize","payload":{{"encoding":"text","data":{}}},"options":{{"output":"jscad","addMetaData":false}}}}"#,
        serde_json::to_string(&unit_cube_ascii()).unwrap()
    );
    match send(&json) {
        Response::Script { source } => {
            assert!(source.starts_with("function main() { return [\n// object #1"));
        }
        other => panic!("expected Script, got {:?}", other),
    }
}

#[test]
fn process_message_rejects_garbage() {
    match send("{not json") {
        Response::Error { kind, message } => {
            assert_eq!(kind, "InvalidMessage");
            assert!(message.contains("failed to parse message"));
        }
        other => panic!("expected Error, got {:?}", other),
    }
}
