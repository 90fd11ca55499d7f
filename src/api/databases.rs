// src/api/databases.rs
use super::client::NotionClient;
use super::pagination::PaginationParams;
use super::responses::{DatabaseList, PageList};
use super::transport::{ApiRequest, Transport};
use crate::constants::NOTION_API_PAGE_SIZE;
use crate::error::Result;
use crate::model::{Database, Filter, Sort};
use crate::types::DatabaseId;
use serde::Serialize;

/// Body of a database query.
///
/// Sorts apply in order: the first decides, later ones only break ties.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryDatabaseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sorts: Vec<Sort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl QueryDatabaseRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn sort(mut self, sort: Sort) -> Self {
        self.sorts.push(sort);
        self
    }

    pub fn start_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.start_cursor = Some(cursor.into());
        self
    }

    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size.min(NOTION_API_PAGE_SIZE));
        self
    }

    /// Continues from a previous page, keeping the filter and sorts.
    pub fn with_pagination(mut self, params: PaginationParams) -> Self {
        self.start_cursor = params.start_cursor;
        self.page_size = params.page_size.or(self.page_size);
        self
    }
}

/// Operations under `databases/`.
pub struct DatabasesEndpoint<'a, T: Transport> {
    client: &'a NotionClient<T>,
}

impl<'a, T: Transport> DatabasesEndpoint<'a, T> {
    pub(crate) fn new(client: &'a NotionClient<T>) -> Self {
        Self { client }
    }

    pub async fn retrieve(&self, id: &DatabaseId) -> Result<Database> {
        let request = ApiRequest::get(format!("databases/{}", id));
        self.client.send(request, "database", "Database").await
    }

    /// Lists the databases shared with the integration.
    pub async fn list(&self, params: &PaginationParams) -> Result<DatabaseList> {
        let request = ApiRequest::get("databases/").with_query(params.to_query());
        self.client.send(request, "databases", "DatabaseList").await
    }

    /// Returns one page of the database's rows matching `query`.
    pub async fn query(&self, id: &DatabaseId, query: &QueryDatabaseRequest) -> Result<PageList> {
        let body = serde_json::to_value(query)?;
        let request = ApiRequest::post(format!("databases/{}/query", id), body);
        self.client.send(request, "results", "PageList").await
    }
}
