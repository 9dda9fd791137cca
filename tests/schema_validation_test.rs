mod common;

use bson::oid::ObjectId;
use common::{sample_employee, sample_user};
use staff_backend::model::employee::Employee;
use staff_backend::model::user::User;
use staff_backend::model::validation::{Schema, SchemaViolation};

fn violations(err: &staff_backend::model::validation::SchemaError) -> Vec<SchemaViolation> {
    err.violations.iter().map(|v| v.violation.clone()).collect()
}

// --- User ---

#[test]
fn test_user_with_valid_data_passes() {
    assert!(sample_user().check_schema().is_ok());

    let mut lower_role = sample_user();
    lower_role.role = "user".to_string();
    assert!(lower_role.check_schema().is_ok());
}

#[test]
fn test_user_with_missing_fields_fails() {
    let err = User::default().check_schema().unwrap_err();
    assert!(err.has_missing_field());
    let missing = violations(&err)
        .iter()
        .filter(|v| matches!(v, SchemaViolation::MissingField(_)))
        .count();
    // firstName, lastName, mobileNumber, email, role, password
    assert_eq!(missing, 6);
    // Format rules do not pile on top of a missing value.
    assert!(violations(&err)
        .iter()
        .all(|v| matches!(v, SchemaViolation::MissingField(_))));
}

#[test]
fn test_user_with_invalid_mobile_number_fails() {
    let mut user = sample_user();
    user.mobile_number = "not-a-number".to_string();
    let err = user.check_schema().unwrap_err();
    assert_eq!(
        violations(&err),
        vec![SchemaViolation::InvalidFormat("not-a-number is not a valid mobile number".to_string())]
    );
    assert!(err.to_string().contains("is not a valid mobile number"));
}

#[test]
fn test_user_with_invalid_email_fails() {
    let mut user = sample_user();
    user.email = "invalid-email".to_string();
    let err = user.check_schema().unwrap_err();
    assert_eq!(
        violations(&err),
        vec![SchemaViolation::InvalidFormat("invalid-email is not a valid email address".to_string())]
    );
}

#[test]
fn test_user_with_short_password_fails() {
    let mut user = sample_user();
    user.password = "short".to_string();
    let err = user.check_schema().unwrap_err();
    assert_eq!(
        violations(&err),
        vec![SchemaViolation::TooShort("Password must be at least 8 characters long".to_string())]
    );
}

#[test]
fn test_user_with_long_password_fails() {
    let mut user = sample_user();
    user.password = "a".repeat(256);
    let err = user.check_schema().unwrap_err();
    assert_eq!(
        violations(&err),
        vec![SchemaViolation::TooLong("Password must be at most 32 characters long".to_string())]
    );
    assert!(err.to_string().contains("Password must be at most 32 characters long"));
}

#[test]
fn test_user_reports_every_failing_field() {
    let mut user = sample_user();
    user.mobile_number = "123".to_string();
    user.email = "nope".to_string();
    user.password = "x".to_string();
    let err = user.check_schema().unwrap_err();
    assert_eq!(err.violations.len(), 3);
    assert!(err.to_string().starts_with("User validation failed: "));
}

// --- Employee ---

#[test]
fn test_employee_with_valid_data_passes() {
    assert!(sample_employee("John", "1", ObjectId::new()).check_schema().is_ok());
}

#[test]
fn test_employee_without_required_fields_fails() {
    let err = Employee::default().check_schema().unwrap_err();
    assert!(err.has_missing_field());
    let missing = violations(&err)
        .iter()
        .filter(|v| matches!(v, SchemaViolation::MissingField(_)))
        .count();
    // nine string fields plus userId
    assert_eq!(missing, 10);
}

#[test]
fn test_employee_with_invalid_mobile_number_fails() {
    let mut employee = sample_employee("John", "1", ObjectId::new());
    employee.mobile_number = "not-a-number".to_string();
    employee.mail_id = "invalid-email".to_string();
    let err = employee.check_schema().unwrap_err();
    let messages: Vec<String> = violations(&err).iter().map(|v| v.message().to_string()).collect();
    assert!(messages.iter().any(|m| m.contains("is not a valid mobile number")));
    assert!(messages.iter().any(|m| m.contains("is not a valid email address")));
}

#[test]
fn test_employee_without_owner_fails() {
    let mut employee = sample_employee("John", "1", ObjectId::new());
    employee.user_id = None;
    let err = employee.check_schema().unwrap_err();
    assert_eq!(err.violations.len(), 1);
    assert!(matches!(err.violations[0].violation, SchemaViolation::MissingField(_)));
}
