// src/api/pagination.rs
//! Cursor pagination.
//!
//! List and query responses carry one page of results plus a continuation
//! cursor. Walking the pages is left to the caller:
//!
//! ```no_run
//! # use notion_typed::{NotionClient, PaginationParams, Paginated};
//! # async fn run(client: NotionClient) -> notion_typed::Result<()> {
//! let mut params = PaginationParams::new().page_size(50);
//! loop {
//!     let page = client.users().list(&params).await?;
//!     for user in page.results() {
//!         println!("{:?}", user.name);
//!     }
//!     match page.next_page(params.page_size) {
//!         Some(next) => params = next,
//!         None => break,
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use crate::constants::NOTION_API_PAGE_SIZE;
use serde::{Deserialize, Deserializer, Serialize};

/// Where a list or query starts, and how much it returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl PaginationParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.start_cursor = Some(cursor.into());
        self
    }

    /// Requests `size` results per page, capped at the API maximum.
    pub fn page_size(mut self, size: u32) -> Self {
        if size > NOTION_API_PAGE_SIZE {
            log::debug!(
                "page_size {} exceeds the API maximum, using {}",
                size,
                NOTION_API_PAGE_SIZE
            );
        }
        self.page_size = Some(size.min(NOTION_API_PAGE_SIZE));
        self
    }

    /// Query-string form for GET endpoints. Unset parameters are left out.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(cursor) = &self.start_cursor {
            query.push(("start_cursor".to_string(), cursor.clone()));
        }
        if let Some(size) = self.page_size {
            query.push(("page_size".to_string(), size.to_string()));
        }
        query
    }
}

/// A single page of a paginated response.
pub trait Paginated {
    type Item;

    fn results(&self) -> &[Self::Item];

    /// Cursor for the following page. Never `Some("")`.
    fn next_cursor(&self) -> Option<&str>;

    fn has_more(&self) -> bool;

    /// Parameters for the following page, or `None` when this was the last.
    fn next_page(&self, page_size: Option<u32>) -> Option<PaginationParams> {
        if !self.has_more() {
            return None;
        }
        self.next_cursor().map(|cursor| PaginationParams {
            start_cursor: Some(cursor.to_string()),
            page_size,
        })
    }
}

/// Reads a cursor, treating `null`, a missing key and `""` alike.
pub(crate) fn deserialize_cursor<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let cursor = Option::<String>::deserialize(deserializer)?;
    Ok(cursor.filter(|c| !c.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_omits_unset_parameters() {
        assert!(PaginationParams::new().to_query().is_empty());
        assert_eq!(
            PaginationParams::new().page_size(20).to_query(),
            vec![("page_size".to_string(), "20".to_string())]
        );
    }

    #[test]
    fn page_size_is_capped() {
        assert_eq!(PaginationParams::new().page_size(500).page_size, Some(100));
    }

    #[test]
    fn body_form_skips_unset_parameters() {
        let params = PaginationParams::new().start_cursor("abc");
        assert_eq!(
            serde_json::to_string(&params).unwrap(),
            r#"{"start_cursor":"abc"}"#
        );
    }
}
