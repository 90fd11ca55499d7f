// src/model/wire.rs
//! Entry points between raw JSON and the entity types.
//!
//! Decoding goes through the entities' serde impls, which route every
//! polymorphic field through the codec. Request bodies encode property values
//! in their partial form: only the active key, no `type` and no `id`.

use super::{Block, Database, Page, Parent, PropertyValue};
use crate::codec::{serialize_keyed_map, DecodeError};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Property values keyed by property name, in caller order.
pub type PropertyValues = IndexMap<String, PropertyValue>;

pub fn decode_page(raw: Value) -> Result<Page, DecodeError> {
    decode_entity(raw, "page", "Page")
}

pub fn decode_database(raw: Value) -> Result<Database, DecodeError> {
    decode_entity(raw, "database", "Database")
}

/// Decodes a block and, recursively, any children carried in its payload.
pub fn decode_block(raw: Value) -> Result<Block, DecodeError> {
    decode_entity(raw, "block", "Block")
}

pub(crate) fn decode_entity<T: DeserializeOwned>(
    raw: Value,
    field: &str,
    expected: &str,
) -> Result<T, DecodeError> {
    serde_json::from_value(raw).map_err(|e| DecodeError::from_serde(field, expected, e))
}

/// Body of a page creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatePageBody {
    pub parent: Parent,
    #[serde(serialize_with = "serialize_keyed_map")]
    pub properties: PropertyValues,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Block>,
}

/// Body of a property update. Properties left out keep their values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdatePagePropertiesBody {
    #[serde(serialize_with = "serialize_keyed_map")]
    pub properties: PropertyValues,
}

pub fn encode_create_page_body(
    parent: Parent,
    properties: PropertyValues,
    children: Vec<Block>,
) -> Result<Value, serde_json::Error> {
    serde_json::to_value(CreatePageBody {
        parent,
        properties,
        children,
    })
}

pub fn encode_update_page_properties(properties: PropertyValues) -> Result<Value, serde_json::Error> {
    serde_json::to_value(UpdatePagePropertiesBody { properties })
}
