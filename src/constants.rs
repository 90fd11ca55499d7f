// src/constants.rs
//! Domain constants that define the boundaries of the API surface.
//!
//! Each constant is named for the concept it constrains. Reading them should
//! tell you where the client talks to and how much it asks for at once.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// Most objects the Notion API returns in one page of a list or query.
pub const NOTION_API_PAGE_SIZE: u32 = 100;

/// Base URL every resource path is joined onto. The trailing slash matters:
/// `Url::join` replaces the last segment of a base without one.
pub const DEFAULT_API_BASE_URL: &str = "https://api.notion.com/v1/";

/// Value sent in the `Notion-Version` header.
pub const DEFAULT_NOTION_VERSION: &str = "2021-05-13";

/// Header naming the API version a request was written against.
pub const NOTION_VERSION_HEADER: &str = "Notion-Version";

// ---------------------------------------------------------------------------
// OAuth endpoints
// ---------------------------------------------------------------------------

pub const OAUTH_AUTHORIZE_URL: &str = "https://api.notion.com/v1/oauth/authorize";

pub const OAUTH_TOKEN_URL: &str = "https://api.notion.com/v1/oauth/token";

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

pub const ENV_API_KEY: &str = "NOTION_API_KEY";
pub const ENV_API_BASE_URL: &str = "NOTION_API_BASE_URL";
pub const ENV_NOTION_VERSION: &str = "NOTION_VERSION";

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters kept when an unparseable error body becomes a message.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
