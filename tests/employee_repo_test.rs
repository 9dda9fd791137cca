mod common;

use bson::oid::ObjectId;
use common::sample_employee;
use staff_backend::config::mongo_conf::MongoConfig;
use staff_backend::repository::employee_repo::{EmployeeQuery, EmployeeRepository, MongoEmployeeRepository, SortDirection};

async fn setup_employee_repository() -> MongoEmployeeRepository {
    let _ = dotenv::dotenv();
    let config = MongoConfig::from_env().unwrap_or_else(|_| MongoConfig::from_test_env());
    let db = config.connect().await.expect("Failed to connect to MongoDB");
    MongoEmployeeRepository::new(&db, &config.employee_collection)
}

#[tokio::test]
#[ignore = "requires a running MongoDB (MONGO_URI / MONGO_DATABASE)"]
async fn test_employee_repository_workflow() {
    let repo = setup_employee_repository().await;
    let owner = ObjectId::new();

    let first = repo.create(sample_employee("Workflow", "1", owner)).await.expect("Failed to insert employee");
    let second = repo.create(sample_employee("workflowSecond", "5", owner)).await.expect("Failed to insert employee");
    let first_id = first.id.unwrap();
    let second_id = second.id.unwrap();

    // Owner filter, case-insensitive name match, ascending experience
    let query = EmployeeQuery {
        user_id: Some(owner),
        search: "WORKFLOW".to_string(),
        sort: Some(SortDirection::Ascending),
    };
    let found = repo.find(query).await.expect("Failed to query employees");
    let experience: Vec<&str> = found.iter().map(|e| e.experience.as_str()).collect();
    assert_eq!(experience, vec!["1", "5"]);

    // Projection drops the id
    let fetched = repo.find_by_id(first_id).await.expect("Failed to fetch").expect("missing employee");
    assert!(fetched.id.is_none());
    assert_eq!(fetched.first_name, "Workflow");

    // Replace returns the post-update document
    let updated = repo
        .find_by_id_and_update(first_id, sample_employee("Workflow", "3", owner))
        .await
        .expect("Failed to update")
        .expect("missing employee");
    assert_eq!(updated.experience, "3");
    assert_eq!(updated.id, Some(first_id));

    // Delete returns the removed document, then nothing
    for id in [first_id, second_id] {
        assert!(repo.find_by_id_and_delete(id).await.expect("Failed to delete").is_some());
        assert!(repo.find_by_id_and_delete(id).await.expect("Failed to delete").is_none());
    }
}
