// src/api/responses.rs
//! List and query response envelopes.
//!
//! Each resource pages its results a little differently: some responses name
//! their `object`, some leave out `has_more` or the cursor, and only the user
//! list always includes `results`. Each envelope follows its own resource's shape rather
//! than sharing one generic wrapper.

use super::pagination::{deserialize_cursor, Paginated};
use crate::model::{Block, Database, NotionObject, Page};
use crate::types::User;
use serde::{Deserialize, Serialize};

/// `GET users/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    pub results: Vec<User>,
    #[serde(default, deserialize_with = "deserialize_cursor")]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

/// `GET databases/`. This response carries no `object` marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseList {
    #[serde(default)]
    pub results: Vec<Database>,
    #[serde(default, deserialize_with = "deserialize_cursor")]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

/// `POST databases/{id}/query`, and page-narrowed search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    #[serde(default)]
    pub results: Vec<Page>,
    #[serde(default, deserialize_with = "deserialize_cursor")]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

/// `GET blocks/{id}/children`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    #[serde(default)]
    pub results: Vec<Block>,
    #[serde(default, deserialize_with = "deserialize_cursor")]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

/// `POST search/` without an object filter: pages and databases mixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    #[serde(default)]
    pub results: Vec<NotionObject>,
    #[serde(default, deserialize_with = "deserialize_cursor")]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

impl SearchResults {
    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.results.iter().filter_map(|object| match object {
            NotionObject::Page(page) => Some(page),
            _ => None,
        })
    }

    pub fn databases(&self) -> impl Iterator<Item = &Database> {
        self.results.iter().filter_map(|object| match object {
            NotionObject::Database(database) => Some(database),
            _ => None,
        })
    }
}

macro_rules! impl_paginated {
    ($($list:ty => $item:ty),* $(,)?) => {
        $(
            impl Paginated for $list {
                type Item = $item;

                fn results(&self) -> &[$item] {
                    &self.results
                }

                fn next_cursor(&self) -> Option<&str> {
                    self.next_cursor.as_deref()
                }

                fn has_more(&self) -> bool {
                    self.has_more
                }
            }
        )*
    };
}

impl_paginated! {
    UserList => User,
    DatabaseList => Database,
    PageList => Page,
    BlockList => Block,
    SearchResults => NotionObject,
}
