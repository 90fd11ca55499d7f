mod block;
pub mod blocks;
pub mod common;
pub mod filter;
pub mod properties;
mod property_value;
pub mod sort;
pub mod wire;

pub use block::{Block, BlockKind};
pub use blocks::*;
pub use common::*;
pub use filter::*;
pub use properties::*;
pub use property_value::{FormulaValue, PageProperty, PropertyValue, RollupElement, RollupValue};
pub use sort::*;

use crate::codec::{decode_payload, DecodeError, JsonObject};
use crate::types::{parse_timestamp, plain_text_of, BlockId, DatabaseId, PageId, RichText, User};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A result from search: a page, a database, or an object kind this client
/// does not model, kept as raw JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum NotionObject {
    Page(Page),
    Database(Database),
    Unknown(Value),
}

impl NotionObject {
    pub fn object_type_name(&self) -> &str {
        match self {
            NotionObject::Page(_) => "page",
            NotionObject::Database(_) => "database",
            NotionObject::Unknown(raw) => raw.get("object").and_then(Value::as_str).unwrap_or(""),
        }
    }
}

impl Serialize for NotionObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            NotionObject::Page(page) => page.serialize(serializer),
            NotionObject::Database(database) => database.serialize(serializer),
            NotionObject::Unknown(raw) => raw.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for NotionObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        match raw.get("object").and_then(Value::as_str) {
            Some("page") => serde_json::from_value(raw)
                .map(NotionObject::Page)
                .map_err(D::Error::custom),
            Some("database") => serde_json::from_value(raw)
                .map(NotionObject::Database)
                .map_err(D::Error::custom),
            _ => Ok(NotionObject::Unknown(raw)),
        }
    }
}

/// A Notion page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    pub id: PageId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_edited_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_edited_by: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub parent: Parent,
    pub properties: IndexMap<String, PageProperty>,
}

impl Page {
    /// The page's title, wherever it lives.
    ///
    /// Pages under a database keep the title in whichever column has the
    /// title type, under that column's name. Pages under a page or the
    /// workspace have the single key `title`.
    pub fn title(&self) -> Option<&[RichText]> {
        let by_type = || self.properties.values().find_map(|p| p.value.as_title());
        match self.parent {
            Parent::Database(_) => by_type(),
            _ => self
                .properties
                .get("title")
                .and_then(|p| p.value.as_title())
                .or_else(by_type),
        }
    }

    pub fn title_plain_text(&self) -> String {
        self.title().map(plain_text_of).unwrap_or_default()
    }

    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name).map(|p| &p.value)
    }

    pub fn is_archived(&self) -> bool {
        self.archived.unwrap_or(false)
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_time.as_deref().and_then(parse_timestamp)
    }

    pub fn last_edited_at(&self) -> Option<DateTime<Utc>> {
        self.last_edited_time.as_deref().and_then(parse_timestamp)
    }
}

/// A Notion database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Database {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    pub id: DatabaseId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_edited_time: Option<String>,
    pub title: Vec<RichText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Parent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub properties: IndexMap<String, PropertySchema>,
}

impl Database {
    pub fn title_plain_text(&self) -> String {
        plain_text_of(&self.title)
    }

    /// Name and schema of the title column.
    pub fn title_property(&self) -> Option<(&str, &PropertySchema)> {
        self.properties
            .iter()
            .find(|(_, schema)| schema.is_title())
            .map(|(name, schema)| (name.as_str(), schema))
    }
}

/// Where a page or database lives.
///
/// The wire form is `{"type": "<key>", "<key>": <id>}`, but some responses
/// omit `type`, so the key that is present decides.
#[derive(Debug, Clone, PartialEq)]
pub enum Parent {
    Database(DatabaseId),
    Page(PageId),
    Block(BlockId),
    Workspace,
    Unknown { tag: String, payload: Option<Value> },
}

const PARENT_KEYS: &[&str] = &["database_id", "page_id", "block_id", "workspace"];

impl Parent {
    pub fn tag(&self) -> &str {
        match self {
            Parent::Database(_) => "database_id",
            Parent::Page(_) => "page_id",
            Parent::Block(_) => "block_id",
            Parent::Workspace => "workspace",
            Parent::Unknown { tag, .. } => tag.as_str(),
        }
    }
}

impl Serialize for Parent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let payload = match self {
            Parent::Database(id) => Some(Value::String(id.as_str().to_string())),
            Parent::Page(id) => Some(Value::String(id.as_str().to_string())),
            Parent::Block(id) => Some(Value::String(id.as_str().to_string())),
            Parent::Workspace => Some(Value::Bool(true)),
            Parent::Unknown { payload, .. } => payload.clone(),
        };

        let mut object = JsonObject::new();
        object.insert("type".to_string(), Value::String(self.tag().to_string()));
        if let Some(payload) = payload {
            object.insert(self.tag().to_string(), payload);
        }
        object.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Parent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let object = JsonObject::deserialize(deserializer)?;

        let tag = match object.get("type") {
            Some(Value::String(tag)) => tag.clone(),
            Some(other) => {
                return Err(D::Error::custom(format!(
                    "parent `type` must be a string, found {}",
                    other
                )))
            }
            None => {
                let mut present = PARENT_KEYS.iter().filter(|key| object.contains_key(**key));
                match (present.next(), present.next()) {
                    (Some(key), None) => (*key).to_string(),
                    _ => {
                        return Err(D::Error::custom(format!(
                            "parent needs exactly one of {}",
                            PARENT_KEYS.join(", ")
                        )))
                    }
                }
            }
        };

        let payload = object.get(&tag).cloned();
        Parent::from_tagged(tag, payload).map_err(D::Error::custom)
    }
}

impl Parent {
    fn from_tagged(tag: String, payload: Option<Value>) -> Result<Self, DecodeError> {
        Ok(match tag.as_str() {
            "database_id" => Parent::Database(decode_payload(&tag, "DatabaseId", payload)?),
            "page_id" => Parent::Page(decode_payload(&tag, "PageId", payload)?),
            "block_id" => Parent::Block(decode_payload(&tag, "BlockId", payload)?),
            "workspace" => Parent::Workspace,
            _ => Parent::Unknown { tag, payload },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn page(parent: Value, properties: Value) -> Page {
        serde_json::from_value(json!({
            "object": "page",
            "id": "5678",
            "parent": parent,
            "properties": properties
        }))
        .unwrap()
    }

    #[test]
    fn parent_detected_by_key_without_type() {
        let parent: Parent = serde_json::from_value(json!({"database_id": "38923"})).unwrap();
        assert_eq!(parent, Parent::Database(DatabaseId::from_raw("38923")));

        let parent: Parent = serde_json::from_value(json!({"type": "workspace"})).unwrap();
        assert_eq!(parent, Parent::Workspace);
    }

    #[test]
    fn parent_encodes_tagged() {
        assert_eq!(
            serde_json::to_value(Parent::Page(PageId::from_raw("p1"))).unwrap(),
            json!({"type": "page_id", "page_id": "p1"})
        );
        assert_eq!(
            serde_json::to_value(Parent::Workspace).unwrap(),
            json!({"type": "workspace", "workspace": true})
        );
    }

    #[test]
    fn parent_without_any_key_is_rejected() {
        assert!(serde_json::from_value::<Parent>(json!({"id": "x"})).is_err());
        assert!(serde_json::from_value::<Parent>(json!({"type": "page_id"})).is_err());
    }

    #[test]
    fn title_under_page_parent_uses_title_key() {
        let page = page(
            json!({"type": "page_id", "page_id": "p0"}),
            json!({"title": {"id": "title", "type": "title", "title": [{"type": "text", "text": {"content": "Notes"}}]}}),
        );
        assert_eq!(page.title_plain_text(), "Notes");
    }

    #[test]
    fn title_under_database_parent_uses_title_typed_column() {
        let page = page(
            json!({"type": "database_id", "database_id": "38923"}),
            json!({
                "Recommended": {"id": "EZMA", "type": "checkbox", "checkbox": true},
                "Name": {"id": "title", "type": "title", "title": [{"type": "text", "text": {"content": "Jamboree"}, "plain_text": "Jamboree"}]}
            }),
        );
        assert_eq!(page.title_plain_text(), "Jamboree");
        assert_eq!(page.property("Recommended").and_then(|v| v.as_checkbox()), Some(true));
    }

    #[test]
    fn search_results_dispatch_on_object() {
        let results: Vec<NotionObject> = serde_json::from_value(json!([
            {"object": "page", "id": "1", "parent": {"workspace": true}, "properties": {}},
            {"object": "database", "id": "2", "title": [], "properties": {}},
            {"object": "comment", "id": "3"}
        ]))
        .unwrap();

        let kinds: Vec<&str> = results.iter().map(NotionObject::object_type_name).collect();
        assert_eq!(kinds, vec!["page", "database", "comment"]);
    }
}
