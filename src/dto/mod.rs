pub mod employee_dto;
pub mod user_dto;

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize, Serializer};

/// `{ "message": ... }` body used by every message-only response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new<T: Into<String>>(message: T) -> Self {
        MessageResponse { message: message.into() }
    }
}

/// Writes an id as its 24-character hex string instead of `{ "$oid": ... }`.
/// Only for HTTP bodies; stored documents keep the native ObjectId.
pub fn serialize_optional_oid_as_hex<S>(id: &Option<ObjectId>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match id {
        Some(oid) => serializer.serialize_str(&oid.to_hex()),
        None => serializer.serialize_none(),
    }
}
