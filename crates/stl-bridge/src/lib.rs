//! JSON message layer over the STL codec.
//!
//! A host (typically a JavaScript web worker) sends a [`Request`] as JSON and
//! gets a [`Response`] back. Binary files travel base64-encoded. On `wasm32`
//! the same entry points are exported through `wasm-bindgen`.

pub mod dispatch;
pub mod messages;

#[cfg(target_arch = "wasm32")]
pub mod wasm_api;

pub use dispatch::{deserialize_bytes, dispatch, BridgeError};
pub use messages::{Payload, Request, Response};

/// Process a JSON-encoded [`Request`] and return a JSON-encoded [`Response`].
pub fn process_message(json_input: &str) -> String {
    let response = match serde_json::from_str::<Request>(json_input) {
        Ok(request) => dispatch(request),
        Err(e) => BridgeError::from(e).into(),
    };
    to_json(&response)
}

/// Encode a response, falling back to a hand-written error object.
pub fn to_json(response: &Response) -> String {
    serde_json::to_string(response).unwrap_or_else(|e| {
        format!(
            r#"{{"type":"Error","kind":"Serialization","message":"Serialization failed: {}"}}"#,
            e
        )
    })
}
