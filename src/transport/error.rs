#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid {entity} JSON: {source}")]
    Json {
        entity: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid {entity}.{field}: {reason}")]
    Field {
        entity: &'static str,
        field: &'static str,
        reason: String,
    },

    #[error("unknown {entity}.{field} value: {value:?}")]
    UnknownVariant {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("tariff entry {key:?} is neither an operator table nor a service list")]
    TariffShape { key: String },
}

impl DecodeError {
    pub fn field(entity: &'static str, field: &'static str, reason: impl Into<String>) -> Self {
        Self::Field {
            entity,
            field,
            reason: reason.into(),
        }
    }
}

/// Deserialize `json` and tag a failure with the entity name.
pub fn from_json<'a, T>(entity: &'static str, json: &'a str) -> Result<T, DecodeError>
where
    T: serde::Deserialize<'a>,
{
    serde_json::from_str(json).map_err(|source| DecodeError::Json { entity, source })
}
