//! Notion API interaction: one typed operation per endpoint.
//!
//! Each operation assembles its request from domain values, hands it to the
//! [`Transport`], and decodes the response through [`parser::interpret`].
//! Nothing here retries, caches, or walks pagination on the caller's behalf.

mod blocks;
mod client;
mod databases;
mod pages;
pub mod pagination;
pub mod parser;
mod responses;
mod search;
pub mod transport;
mod users;

pub use blocks::BlocksEndpoint;
pub use client::NotionClient;
pub use databases::{DatabasesEndpoint, QueryDatabaseRequest};
pub use pages::PagesEndpoint;
pub use pagination::{Paginated, PaginationParams};
pub use responses::{BlockList, DatabaseList, PageList, SearchResults, UserList};
pub use search::{ObjectKind, SearchEndpoint, SearchFilter, SearchRequest};
pub use transport::{ApiRequest, HttpTransport, Method, RawResponse, Transport};
pub use users::UsersEndpoint;
