use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::validation::{validate_email_address, validate_mobile_number, validate_password, Schema};

/// A user account document. Credentials are stored as given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[validate(length(min = 1, code = "required"))]
    pub first_name: String,
    #[validate(length(min = 1, code = "required"))]
    pub last_name: String,
    #[validate(length(min = 1, code = "required"), custom(function = "validate_mobile_number"))]
    pub mobile_number: String,
    #[validate(length(min = 1, code = "required"), custom(function = "validate_email_address"))]
    pub email: String,
    #[validate(length(min = 1, code = "required"))]
    pub role: String, // e.g. "Admin", "user"
    #[validate(length(min = 1, code = "required"), custom(function = "validate_password"))]
    pub password: String,
}

impl Schema for User {
    const MODEL: &'static str = "User";
}

/// Public view of a user, without the password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::dto::serialize_optional_oid_as_hex"
    )]
    pub id: Option<ObjectId>,
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    pub email: String,
    pub role: String,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        UserProfile {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            mobile_number: user.mobile_number,
            email: user.email,
            role: user.role,
        }
    }
}
