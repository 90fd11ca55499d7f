// src/api/search.rs
//! Search over the pages and databases shared with the integration.

use super::client::NotionClient;
use super::pagination::PaginationParams;
use super::responses::{DatabaseList, PageList, SearchResults};
use super::transport::{ApiRequest, Transport};
use crate::constants::NOTION_API_PAGE_SIZE;
use crate::error::Result;
use crate::model::{Direction, Sort};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    Page,
    Database,
}

/// Limits results to one object kind. The API only filters on `object`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    pub value: ObjectKind,
    pub property: String,
}

impl SearchFilter {
    pub fn object(kind: ObjectKind) -> Self {
        Self {
            value: kind,
            property: "object".to_string(),
        }
    }
}

/// Body of a search. Every field is optional; an empty search returns
/// everything the integration can see.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Search only orders by last edit time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Sort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<SearchFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl SearchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn sort(mut self, direction: Direction) -> Self {
        self.sort = Some(Sort::last_edited(direction));
        self
    }

    pub fn filter(mut self, kind: ObjectKind) -> Self {
        self.filter = Some(SearchFilter::object(kind));
        self
    }

    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size.min(NOTION_API_PAGE_SIZE));
        self
    }

    pub fn with_pagination(mut self, params: PaginationParams) -> Self {
        self.start_cursor = params.start_cursor;
        self.page_size = params.page_size.or(self.page_size);
        self
    }

    fn narrowed(&self, kind: ObjectKind) -> Self {
        self.clone().filter(kind)
    }
}

pub struct SearchEndpoint<'a, T: Transport> {
    client: &'a NotionClient<T>,
}

impl<'a, T: Transport> SearchEndpoint<'a, T> {
    pub(crate) fn new(client: &'a NotionClient<T>) -> Self {
        Self { client }
    }

    /// Searches everything; results mix pages and databases.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResults> {
        self.post(request, "SearchResults").await
    }

    /// Searches pages only, replacing any object filter on `request`.
    pub async fn pages(&self, request: &SearchRequest) -> Result<PageList> {
        self.post(&request.narrowed(ObjectKind::Page), "PageList").await
    }

    /// Searches databases only, replacing any object filter on `request`.
    pub async fn databases(&self, request: &SearchRequest) -> Result<DatabaseList> {
        self.post(&request.narrowed(ObjectKind::Database), "DatabaseList")
            .await
    }

    async fn post<R: serde::de::DeserializeOwned>(
        &self,
        request: &SearchRequest,
        expected: &str,
    ) -> Result<R> {
        let body = serde_json::to_value(request)?;
        self.client
            .send(ApiRequest::post("search/", body), "results", expected)
            .await
    }
}
