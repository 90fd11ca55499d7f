// src/api/users.rs
use super::client::NotionClient;
use super::pagination::PaginationParams;
use super::responses::UserList;
use super::transport::{ApiRequest, Transport};
use crate::error::Result;
use crate::types::{User, UserId};

/// Operations under `users/`.
pub struct UsersEndpoint<'a, T: Transport> {
    client: &'a NotionClient<T>,
}

impl<'a, T: Transport> UsersEndpoint<'a, T> {
    pub(crate) fn new(client: &'a NotionClient<T>) -> Self {
        Self { client }
    }

    pub async fn retrieve(&self, id: &UserId) -> Result<User> {
        let request = ApiRequest::get(format!("users/{}", id));
        self.client.send(request, "user", "User").await
    }

    pub async fn list(&self, params: &PaginationParams) -> Result<UserList> {
        let request = ApiRequest::get("users/").with_query(params.to_query());
        self.client.send(request, "results", "UserList").await
    }
}
