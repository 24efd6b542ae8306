//! WASM entry points for the web worker.
//!
//! This module is only compiled for the `wasm32` target.

use wasm_bindgen::prelude::*;

use stl_codec::DeserializeOptions;

use crate::dispatch::deserialize_bytes;
use crate::messages::Response;

/// Install the panic hook. Call once before anything else.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Process a JSON message from the host and return a JSON response.
#[wasm_bindgen]
pub fn process_message(json_input: &str) -> String {
    crate::process_message(json_input)
}

/// Decode an STL file handed over as a `Uint8Array`.
///
/// `options_json` may be empty, in which case defaults apply.
#[wasm_bindgen]
pub fn deserialize_stl(data: &[u8], filename: Option<String>, options_json: &str) -> String {
    let options = if options_json.trim().is_empty() {
        Ok(DeserializeOptions::default())
    } else {
        serde_json::from_str::<DeserializeOptions>(options_json)
    };
    let response = match options {
        Ok(options) => deserialize_bytes(data, filename.as_deref(), &options),
        Err(e) => Response::Error {
            kind: "InvalidMessage".to_string(),
            message: format!("Failed to parse options: {}", e),
        },
    };
    crate::to_json(&response)
}
