use base64::{engine::general_purpose::STANDARD, Engine as _};
use regex::Regex;
use std::sync::OnceLock;

fn data_uri_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^data:([A-Za-z0-9.+/-]+);base64,(.+)$").expect("data-uri pattern is valid")
    })
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataUriError {
    #[error("Value is not a base64 data-URI")]
    Malformed,

    #[error("Invalid base64 payload: {0}")]
    InvalidPayload(String),
}

/// A `data:<mime>;base64,<payload>` string whose prefix shape has been
/// checked. The payload is decoded lazily.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    raw: String,
    mime_len: usize,
}

impl DataUri {
    const PREFIX: &'static str = "data:";

    pub fn parse(value: impl Into<String>) -> Result<Self, DataUriError> {
        let raw = value.into();

        let mime_len = data_uri_pattern()
            .captures(&raw)
            .and_then(|caps| caps.get(1))
            .map(|m| m.len())
            .ok_or(DataUriError::Malformed)?;

        Ok(Self { raw, mime_len })
    }

    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Result<Self, DataUriError> {
        Self::parse(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
    }

    pub fn mime(&self) -> &str {
        &self.raw[Self::PREFIX.len()..Self::PREFIX.len() + self.mime_len]
    }

    fn payload(&self) -> &str {
        // "data:" + mime + ";base64,"
        &self.raw[Self::PREFIX.len() + self.mime_len + ";base64,".len()..]
    }

    pub fn decode(&self) -> Result<Vec<u8>, DataUriError> {
        STANDARD
            .decode(self.payload())
            .map_err(|e| DataUriError::InvalidPayload(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn into_string(self) -> String {
        self.raw
    }
}
