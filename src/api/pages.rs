// src/api/pages.rs
use super::client::NotionClient;
use super::transport::{ApiRequest, Transport};
use crate::error::Result;
use crate::model::wire::{encode_create_page_body, encode_update_page_properties, PropertyValues};
use crate::model::{Block, Page, Parent};
use crate::types::PageId;

/// Operations under `pages/`.
pub struct PagesEndpoint<'a, T: Transport> {
    client: &'a NotionClient<T>,
}

impl<'a, T: Transport> PagesEndpoint<'a, T> {
    pub(crate) fn new(client: &'a NotionClient<T>) -> Self {
        Self { client }
    }

    pub async fn retrieve(&self, id: &PageId) -> Result<Page> {
        let request = ApiRequest::get(format!("pages/{}", id));
        self.client.send(request, "page", "Page").await
    }

    /// Creates a page under `parent`. The server assigns the id and timestamps.
    ///
    /// `properties` hold partial values: only the payload for each property's
    /// type, e.g. a title property needs nothing but its rich text.
    pub async fn create(
        &self,
        parent: Parent,
        properties: PropertyValues,
        children: Vec<Block>,
    ) -> Result<Page> {
        let body = encode_create_page_body(parent, properties, children)?;
        self.client
            .send(ApiRequest::post("pages/", body), "page", "Page")
            .await
    }

    /// Updates only the named properties; every other property keeps its value.
    pub async fn update_properties(&self, id: &PageId, properties: PropertyValues) -> Result<Page> {
        let body = encode_update_page_properties(properties)?;
        let request = ApiRequest::patch(format!("pages/{}", id), body);
        self.client.send(request, "page", "Page").await
    }
}
