use serde::Deserialize;
use serde_json::value::RawValue;

use super::error::{DecodeError, from_json};
use super::scalar::TransportText;
use crate::domain::ActionResponse;

const SUCCESS: &str = "success";

#[derive(Debug, Deserialize)]
struct EnvelopeJson {
    result: String,
    #[serde(default)]
    code: Option<TransportText>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<Box<RawValue>>,
    #[serde(default)]
    error_code: Option<TransportText>,
    #[serde(default)]
    error_text: Option<String>,
    #[serde(default)]
    error_text_ru: Option<String>,
}

#[derive(Debug)]
pub enum Envelope {
    Success(SuccessEnvelope),
    Failure(FailureEnvelope),
}

#[derive(Debug)]
pub struct SuccessEnvelope {
    pub code: String,
    pub message: String,
    data: Option<Box<RawValue>>,
}

impl SuccessEnvelope {
    /// Raw `data` payload; `null` when the service sent none.
    pub fn data(&self) -> &str {
        self.data.as_deref().map_or("null", RawValue::get)
    }

    pub fn into_action_response(self) -> ActionResponse {
        ActionResponse {
            code: self.code,
            message: self.message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureEnvelope {
    pub code: String,
    pub message: Option<String>,
    pub error_code: Option<String>,
    pub error_text: Option<String>,
    pub error_text_ru: Option<String>,
}

pub fn decode_envelope(json: &str) -> Result<Envelope, DecodeError> {
    let parsed: EnvelopeJson = from_json("envelope", json)?;
    let code = parsed
        .code
        .map(TransportText::into_string)
        .unwrap_or_default();

    if parsed.result == SUCCESS {
        return Ok(Envelope::Success(SuccessEnvelope {
            code,
            message: parsed.message.unwrap_or_default(),
            data: parsed.data,
        }));
    }

    Ok(Envelope::Failure(FailureEnvelope {
        code,
        message: parsed.message,
        error_code: parsed.error_code.map(TransportText::into_string),
        error_text: parsed.error_text,
        error_text_ru: parsed.error_text_ru,
    }))
}
