use crate::model::employee::Employee;
use crate::model::validation::Schema;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures::stream::TryStreamExt;
use mongodb::options::{FindOneAndReplaceOptions, FindOneOptions, FindOptions, ReturnDocument};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Direction applied to the `experience` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SortValue", into = "i32")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Accepted wire forms: `1` / `-1`, or `"asc"` / `"desc"` and their long spellings.
#[derive(Deserialize)]
#[serde(untagged)]
enum SortValue {
    Number(i64),
    Text(String),
}

impl TryFrom<SortValue> for SortDirection {
    type Error = String;

    fn try_from(value: SortValue) -> Result<Self, Self::Error> {
        match value {
            SortValue::Number(1) => Ok(SortDirection::Ascending),
            SortValue::Number(-1) => Ok(SortDirection::Descending),
            SortValue::Number(n) => Err(format!("invalid sort value {}, expected 1 or -1", n)),
            SortValue::Text(s) => match s.to_ascii_lowercase().as_str() {
                "1" | "asc" | "ascending" => Ok(SortDirection::Ascending),
                "-1" | "desc" | "descending" => Ok(SortDirection::Descending),
                _ => Err(format!("invalid sort value '{}'", s)),
            },
        }
    }
}

impl From<SortDirection> for i32 {
    fn from(dir: SortDirection) -> Self {
        match dir {
            SortDirection::Ascending => 1,
            SortDirection::Descending => -1,
        }
    }
}

/// Filter and ordering for a bulk employee lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeQuery {
    /// Exact owner match when set.
    pub user_id: Option<ObjectId>,
    /// Case-insensitive substring of `firstName`; empty matches everything.
    pub search: String,
    /// Sort on `experience`; `None` keeps natural storage order.
    pub sort: Option<SortDirection>,
}

impl EmployeeQuery {
    pub fn filter_document(&self) -> Document {
        let mut filter = doc! {
            "firstName": { "$regex": regex::escape(&self.search), "$options": "i" }
        };
        if let Some(user_id) = self.user_id {
            filter.insert("userId", user_id);
        }
        filter
    }

    pub fn sort_document(&self) -> Option<Document> {
        self.sort.map(|dir| doc! { "experience": i32::from(dir) })
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        if let Some(user_id) = self.user_id {
            if employee.user_id != Some(user_id) {
                return false;
            }
        }
        employee
            .first_name
            .to_lowercase()
            .contains(&self.search.to_lowercase())
    }
}

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find(&self, query: EmployeeQuery) -> RepositoryResult<Vec<Employee>>;
    /// Lookup by id with the identity field projected out.
    async fn find_by_id(&self, id: ObjectId) -> RepositoryResult<Option<Employee>>;
    async fn create(&self, employee: Employee) -> RepositoryResult<Employee>;
    /// Replaces the whole document and returns its post-update state.
    async fn find_by_id_and_update(&self, id: ObjectId, employee: Employee) -> RepositoryResult<Option<Employee>>;
    /// Removes the document and returns what was removed.
    async fn find_by_id_and_delete(&self, id: ObjectId) -> RepositoryResult<Option<Employee>>;
}

pub struct MongoEmployeeRepository {
    collection: mongodb::Collection<Employee>,
}

impl MongoEmployeeRepository {
    pub fn new(db: &mongodb::Database, collection_name: &str) -> Self {
        let collection = db.collection::<Employee>(collection_name);
        MongoEmployeeRepository { collection }
    }
}

#[async_trait]
impl EmployeeRepository for MongoEmployeeRepository {
    #[tracing::instrument(skip(self))]
    async fn find(&self, query: EmployeeQuery) -> RepositoryResult<Vec<Employee>> {
        let options = FindOptions::builder().sort(query.sort_document()).build();
        let cursor = self
            .collection
            .find(query.filter_document(), options)
            .await
            .map_err(|e| {
                error!("Failed to query employees: {}", e);
                RepositoryError::from(e)
            })?;
        let employees: Vec<Employee> = cursor.try_collect().await?;
        info!("Fetched {} employees", employees.len());
        Ok(employees)
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn find_by_id(&self, id: ObjectId) -> RepositoryResult<Option<Employee>> {
        let options = FindOneOptions::builder().projection(doc! { "_id": 0 }).build();
        let employee = self
            .collection
            .find_one(doc! { "_id": id }, options)
            .await
            .map_err(|e| {
                error!("Failed to fetch employee by ID: {}", e);
                RepositoryError::from(e)
            })?;
        Ok(employee)
    }

    #[tracing::instrument(skip(self, employee), fields(first_name = %employee.first_name))]
    async fn create(&self, mut employee: Employee) -> RepositoryResult<Employee> {
        employee.check_schema().map_err(|e| {
            error!("Employee rejected by schema: {}", e);
            RepositoryError::from(e)
        })?;
        employee.id = Some(ObjectId::new());
        match self.collection.insert_one(&employee, None).await {
            Ok(_) => {
                info!("Employee created successfully");
                Ok(employee)
            }
            Err(e) => {
                error!("Failed to create employee: {}", e);
                Err(e.into())
            }
        }
    }

    #[tracing::instrument(skip(self, employee), fields(id = %id))]
    async fn find_by_id_and_update(&self, id: ObjectId, mut employee: Employee) -> RepositoryResult<Option<Employee>> {
        // The stored _id is kept by the replace.
        employee.id = None;
        let options = FindOneAndReplaceOptions::builder()
            .return_document(ReturnDocument::After)
            .build();
        let updated = self
            .collection
            .find_one_and_replace(doc! { "_id": id }, &employee, options)
            .await
            .map_err(|e| {
                error!("Failed to update employee: {}", e);
                RepositoryError::from(e)
            })?;
        match &updated {
            Some(_) => info!("Employee updated successfully"),
            None => info!("No employee found to update"),
        }
        Ok(updated)
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn find_by_id_and_delete(&self, id: ObjectId) -> RepositoryResult<Option<Employee>> {
        let deleted = self
            .collection
            .find_one_and_delete(doc! { "_id": id }, None)
            .await
            .map_err(|e| {
                error!("Failed to delete employee: {}", e);
                RepositoryError::from(e)
            })?;
        match &deleted {
            Some(_) => info!("Employee deleted successfully"),
            None => info!("No employee found to delete"),
        }
        Ok(deleted)
    }
}
