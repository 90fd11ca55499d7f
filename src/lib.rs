// src/lib.rs
//! notion-typed: a typed client for the Notion REST API.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `ClientError`, `ApiError`, `TransportError`, `DecodeError`
//! - **Configuration**: `ClientConfig`
//! - **Domain model**: `Page`, `Database`, `Block`, `PropertyValue`, `Filter`, `Sort`
//! - **Domain types**: `RichText`, `User`, ids, `Color`, `ApiKey`
//! - **API client**: `NotionClient` and its per-resource endpoints
//! - **OAuth**: `OAuthConfig`, `AccessToken`
//!
//! ```no_run
//! use notion_typed::{Filter, FilterCondition, NotionClient, QueryDatabaseRequest, TextCondition};
//! use notion_typed::DatabaseId;
//!
//! # async fn run() -> notion_typed::Result<()> {
//! let client = NotionClient::from_env()?;
//! let query = QueryDatabaseRequest::new().filter(Filter::property(
//!     "Name",
//!     FilterCondition::Title(TextCondition::Contains("launch".into())),
//! ));
//! let rows = client
//!     .databases()
//!     .query(&DatabaseId::parse("897e5a76ae524b489fdfe71f5945d1af")?, &query)
//!     .await?;
//! for page in &rows.results {
//!     println!("{}", page.title_plain_text());
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod codec;
mod config;
mod constants;
mod error;
pub mod model;
mod oauth;
pub mod types;

// --- Error Handling ---
pub use crate::error::{ApiError, ClientError, ErrorCode, Result, TransportError};
pub use crate::codec::DecodeError;
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::ClientConfig;
pub use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_NOTION_VERSION, NOTION_API_PAGE_SIZE};

// --- Domain Model ---
pub use crate::model::{
    Block, BlockCommon, BlockKind, Database, FormulaValue, NotionObject, Page, PageProperty,
    Parent, PropertyConfig, PropertySchema, PropertyValue, RollupElement, RollupValue,
};

// --- Block Payloads ---
pub use crate::model::blocks::{
    BookmarkContent, ChildDatabaseContent, ChildPageContent, CodeContent, EquationContent,
    TextBlockContent, ToDoContent,
};

// --- Queries ---
pub use crate::model::{
    CheckboxCondition, DateCondition, Direction, FilesCondition, Filter, FilterCondition,
    FormulaCondition, MultiSelectCondition, NumberCondition, PeopleCondition, PropertyFilter,
    RelationCondition, SelectCondition, Sort, SortKey, TextCondition, TimestampField, True,
};

// --- Wire Entry Points ---
pub use crate::model::wire::{
    decode_block, decode_database, decode_page, encode_create_page_body,
    encode_update_page_properties, PropertyValues,
};

// --- Domain Types ---
pub use crate::types::{
    Annotations, ApiKey, BlockId, Color, DatabaseId, DatabaseReference, DateValue, FileReference,
    FileSource, Hue, Id, Mention, PageId, PageReference, RichText, RichTextContent, SelectOption,
    TextContent, User, UserId, UserKind,
};

// --- API Client ---
pub use crate::api::{
    ApiRequest, BlockList, DatabaseList, HttpTransport, Method, NotionClient, ObjectKind, PageList,
    Paginated, PaginationParams, QueryDatabaseRequest, RawResponse, SearchFilter, SearchRequest,
    SearchResults, Transport, UserList,
};

// --- OAuth ---
pub use crate::oauth::{AccessToken, OAuthConfig};
