// src/api/client.rs
//! The Notion API client.
//!
//! A client owns one transport and nothing else. Every operation builds its
//! own request, so one client can serve any number of concurrent calls.

use super::blocks::BlocksEndpoint;
use super::databases::DatabasesEndpoint;
use super::pages::PagesEndpoint;
use super::parser::interpret;
use super::search::SearchEndpoint;
use super::transport::{ApiRequest, HttpTransport, Transport};
use super::users::UsersEndpoint;
use crate::config::ClientConfig;
use crate::error::Result;
use serde::de::DeserializeOwned;

pub struct NotionClient<T: Transport = HttpTransport> {
    transport: T,
}

impl NotionClient<HttpTransport> {
    /// Creates a client speaking HTTP to the configured API.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::new(&config)?))
    }

    /// Creates a client from `NOTION_API_KEY` and the optional overrides.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }
}

impl<T: Transport> NotionClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn pages(&self) -> PagesEndpoint<'_, T> {
        PagesEndpoint::new(self)
    }

    pub fn databases(&self) -> DatabasesEndpoint<'_, T> {
        DatabasesEndpoint::new(self)
    }

    pub fn blocks(&self) -> BlocksEndpoint<'_, T> {
        BlocksEndpoint::new(self)
    }

    pub fn users(&self) -> UsersEndpoint<'_, T> {
        UsersEndpoint::new(self)
    }

    pub fn search(&self) -> SearchEndpoint<'_, T> {
        SearchEndpoint::new(self)
    }

    /// Executes `request` and decodes the response as `R`.
    pub(crate) async fn send<R: DeserializeOwned>(
        &self,
        request: ApiRequest,
        field: &str,
        expected: &str,
    ) -> Result<R> {
        let outcome = self.transport.execute(request).await;
        interpret(outcome, field, expected)
    }
}

impl<T: Transport + std::fmt::Debug> std::fmt::Debug for NotionClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotionClient")
            .field("transport", &self.transport)
            .finish()
    }
}
