use crate::types::{parse_timestamp, BlockId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fields every block carries besides its payload.
///
/// Blocks built locally for an append leave all of these unset except
/// `object`; the server assigns the rest.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BlockCommon {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BlockId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_edited_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_children: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

impl BlockCommon {
    pub fn new() -> Self {
        Self {
            object: Some("block".to_string()),
            ..Self::default()
        }
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_time.as_deref().and_then(parse_timestamp)
    }

    pub fn last_edited_at(&self) -> Option<DateTime<Utc>> {
        self.last_edited_time.as_deref().and_then(parse_timestamp)
    }
}
