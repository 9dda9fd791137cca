use crate::dto::serialize_optional_oid_as_hex;
use crate::model::employee::Employee;
use crate::repository::employee_repo::SortDirection;
use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeListRequest {
    pub search_value: String,
    pub sort_value: Option<SortDirection>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeesByUserRequest {
    pub user_id: ObjectId,
    #[serde(default)]
    pub search_value: String,
    #[serde(default)]
    pub sort_value: Option<SortDirection>,
}

/// Employee as returned over HTTP, ids as plain hex strings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_optional_oid_as_hex"
    )]
    pub id: Option<ObjectId>,
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    pub mail_id: String,
    pub date_of_birth: String,
    pub age: String,
    pub gender: String,
    pub education: String,
    pub experience: String,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "serialize_optional_oid_as_hex")]
    pub user_id: Option<ObjectId>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        EmployeeResponse {
            id: employee.id,
            first_name: employee.first_name,
            last_name: employee.last_name,
            mobile_number: employee.mobile_number,
            mail_id: employee.mail_id,
            date_of_birth: employee.date_of_birth,
            age: employee.age,
            gender: employee.gender,
            education: employee.education,
            experience: employee.experience,
            user_id: employee.user_id,
        }
    }
}

pub fn to_responses(employees: Vec<Employee>) -> Vec<EmployeeResponse> {
    employees.into_iter().map(EmployeeResponse::from).collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct EmployeeListResponse {
    pub data: Vec<EmployeeResponse>,
}
