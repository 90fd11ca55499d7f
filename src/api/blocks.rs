// src/api/blocks.rs
use super::client::NotionClient;
use super::pagination::PaginationParams;
use super::responses::BlockList;
use super::transport::{ApiRequest, Transport};
use crate::error::Result;
use crate::model::Block;
use crate::types::BlockId;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
struct AppendChildrenBody<'a> {
    children: &'a [Block],
}

/// Operations under `blocks/`.
pub struct BlocksEndpoint<'a, T: Transport> {
    client: &'a NotionClient<T>,
}

impl<'a, T: Transport> BlocksEndpoint<'a, T> {
    pub(crate) fn new(client: &'a NotionClient<T>) -> Self {
        Self { client }
    }

    /// One page of the block's direct children. Pages are blocks too, so a
    /// page id works here.
    pub async fn children(&self, id: &BlockId, params: &PaginationParams) -> Result<BlockList> {
        let request =
            ApiRequest::get(format!("blocks/{}/children", id)).with_query(params.to_query());
        self.client.send(request, "results", "BlockList").await
    }

    /// Appends `children` after the block's existing children.
    ///
    /// The response is the parent block, not the new children. To learn the
    /// ids the server assigned them, fetch [`children`](Self::children) again.
    /// Appended blocks are permanent: the API offers no way to edit or remove
    /// them afterwards.
    pub async fn append_children(&self, id: &BlockId, children: &[Block]) -> Result<Block> {
        let body = serde_json::to_value(AppendChildrenBody { children })?;
        let request = ApiRequest::patch(format!("blocks/{}/children", id), body);
        self.client.send(request, "block", "Block").await
    }
}
