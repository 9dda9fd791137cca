use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::validation::{validate_email_address, validate_mobile_number, Schema};

/// An employee record owned by (reporting to) a user through `userId`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct Employee {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[validate(length(min = 1, code = "required"))]
    pub first_name: String,
    #[validate(length(min = 1, code = "required"))]
    pub last_name: String,
    #[validate(length(min = 1, code = "required"), custom(function = "validate_mobile_number"))]
    pub mobile_number: String,
    #[validate(length(min = 1, code = "required"), custom(function = "validate_email_address"))]
    pub mail_id: String,
    #[validate(length(min = 1, code = "required"))]
    pub date_of_birth: String,
    #[validate(length(min = 1, code = "required"))]
    pub age: String,
    #[validate(length(min = 1, code = "required"))]
    pub gender: String,
    #[validate(length(min = 1, code = "required"))]
    pub education: String,
    /// Years of experience; stored as text and compared as text when sorting.
    #[validate(length(min = 1, code = "required"))]
    pub experience: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(required)]
    pub user_id: Option<ObjectId>,
}

impl Schema for Employee {
    const MODEL: &'static str = "Employee";
}
