use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("userUuid must be a well-formed UUID, got '{0}'")]
    InvalidUserUuid(String),
    #[error("feature id must be a well-formed UUID, got '{0}'")]
    InvalidFeatureId(String),
}

/// The identity is client-asserted and never resolved against a registry;
/// syntax is all we check.
pub fn parse_user_uuid(raw: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(raw).map_err(|_| ValidationError::InvalidUserUuid(raw.to_string()))
}

pub fn parse_feature_id(raw: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(raw).map_err(|_| ValidationError::InvalidFeatureId(raw.to_string()))
}
