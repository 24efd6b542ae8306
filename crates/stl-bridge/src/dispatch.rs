use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::{debug, warn};

use mesh_types::Geometry;
use stl_codec::{
    DeserializeOptions, Deserialized, SerializeOptions, StlError, StlInput, MIME_TYPE,
};

use crate::messages::{Payload, Request, Response};

/// Errors that can occur while handling a bridge message.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("failed to parse message: {0}")]
    InvalidMessage(#[from] serde_json::Error),

    #[error("payload is not valid base64: {0}")]
    InvalidPayload(#[from] base64::DecodeError),

    #[error("serialization error: {reason}")]
    Serialization { reason: String },

    #[error(transparent)]
    Stl(#[from] StlError),
}

impl BridgeError {
    /// Stable identifier reported in [`Response::Error`].
    pub fn kind(&self) -> &'static str {
        match self {
            BridgeError::InvalidMessage(_) => "InvalidMessage",
            BridgeError::InvalidPayload(_) => "InvalidPayload",
            BridgeError::Serialization { .. } => "Serialization",
            BridgeError::Stl(err) => err.kind(),
        }
    }
}

impl From<BridgeError> for Response {
    fn from(err: BridgeError) -> Self {
        Response::Error {
            kind: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}

/// Dispatch a host request to the codec and return a response.
///
/// Failures come back as [`Response::Error`]; this never panics on bad input.
pub fn dispatch(request: Request) -> Response {
    let result = match request {
        Request::Deserialize {
            payload,
            filename,
            options,
        } => handle_deserialize(&payload, filename.as_deref(), &options),
        Request::Serialize {
            options,
            geometries,
        } => handle_serialize(&options, &geometries),
    };
    result.unwrap_or_else(|err| {
        warn!(kind = err.kind(), error = %err, "request failed");
        err.into()
    })
}

/// Decode raw bytes without the base64 detour.
pub fn deserialize_bytes(
    bytes: &[u8],
    filename: Option<&str>,
    options: &DeserializeOptions,
) -> Response {
    decode(StlInput::Bytes(bytes), filename, options).unwrap_or_else(|err| {
        warn!(kind = err.kind(), error = %err, "deserialize failed");
        err.into()
    })
}

fn handle_deserialize(
    payload: &Payload,
    filename: Option<&str>,
    options: &DeserializeOptions,
) -> Result<Response, BridgeError> {
    match payload {
        Payload::Text { data } => {
            debug!(len = data.len(), "text payload");
            decode(StlInput::Text(data), filename, options)
        }
        Payload::Base64 { data } => {
            let bytes = STANDARD.decode(data)?;
            debug!(len = bytes.len(), "base64 payload");
            decode(StlInput::Bytes(&bytes), filename, options)
        }
    }
}

fn decode(
    input: StlInput<'_>,
    filename: Option<&str>,
    options: &DeserializeOptions,
) -> Result<Response, BridgeError> {
    Ok(match stl_codec::deserialize(input, filename, options)? {
        Deserialized::Meshes(meshes) => Response::Meshes { meshes },
        Deserialized::Script(source) => Response::Script { source },
    })
}

fn handle_serialize(
    options: &SerializeOptions,
    geometries: &[Geometry],
) -> Result<Response, BridgeError> {
    let bytes = stl_codec::serialize(options, geometries)?;
    let data = if options.binary {
        Payload::Base64 {
            data: STANDARD.encode(&bytes),
        }
    } else {
        Payload::Text {
            data: String::from_utf8(bytes).map_err(|e| BridgeError::Serialization {
                reason: e.to_string(),
            })?,
        }
    };
    Ok(Response::Serialized {
        mime_type: MIME_TYPE.to_string(),
        data,
    })
}
