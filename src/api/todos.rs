//! `/todos` endpoints

use super::client::ApiClient;
use super::types::{Ack, Todo, TodoCreate, TodoPatch};
use crate::error::Result;

pub struct TodosApi<'a> {
    client: &'a ApiClient,
}

impl<'a> TodosApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /todos`
    pub async fn list(&self) -> Result<Vec<Todo>> {
        self.client.get("/todos").await
    }

    /// `POST /todos`
    pub async fn create(&self, todo: &TodoCreate) -> Result<Todo> {
        self.client.post("/todos", todo).await
    }

    /// `PATCH /todos/{id}`
    pub async fn update(&self, id: &str, patch: &TodoPatch) -> Result<Todo> {
        self.client.patch(&format!("/todos/{}", id), patch).await
    }

    /// `DELETE /todos/{id}`
    pub async fn delete(&self, id: &str) -> Result<Ack> {
        self.client.delete(&format!("/todos/{}", id)).await
    }
}
