// src/types/properties.rs
//! Small value shapes shared by property values, schemas and mentions.

use super::{Color, DatabaseId, PageId};
use crate::codec::discriminated_union;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Select option
///
/// Responses fill every field. Requests usually name an option by `name` alone.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl SelectOption {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// A date or a date range.
///
/// `start` and `end` are kept as the server wrote them (a date or a datetime)
/// so they re-encode unchanged; [`DateValue::start_time`] parses on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateValue {
    pub start: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl DateValue {
    pub fn on(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: None,
            time_zone: None,
        }
    }

    pub fn is_range(&self) -> bool {
        self.end.is_some()
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.start)
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end.as_deref().and_then(parse_timestamp)
    }
}

/// Parses an API timestamp or a bare `YYYY-MM-DD` date (taken as midnight UTC).
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(time) = DateTime::parse_from_rfc3339(value) {
        return Some(time.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageReference {
    pub id: PageId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseReference {
    pub id: DatabaseId,
}

/// An entry of a files property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReference {
    pub name: String,
    #[serde(flatten, with = "crate::codec::optional")]
    pub source: Option<FileSource>,
}

discriminated_union! {
    /// Where a file's bytes live.
    pub enum FileSource : "type" {
        /// Uploaded to Notion; the URL expires.
        File(HostedFile) = "file",
        External(ExternalFile) = "external",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostedFile {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalFile {
    pub url: String,
}
