// src/model/properties.rs
//! Database column definitions.

use crate::codec::{discriminated_union, EmptyObject};
use crate::types::{DatabaseId, SelectOption};
use serde::{Deserialize, Serialize};

/// One column of a database: its identity plus the type-specific configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub config: PropertyConfig,
}

discriminated_union! {
    /// Column configuration, selected by the column's `type`.
    pub enum PropertyConfig : "type" {
        Title(EmptyObject) = "title",
        RichText(EmptyObject) = "rich_text",
        Number(NumberConfig) = "number",
        Select(SelectConfig) = "select",
        MultiSelect(SelectConfig) = "multi_select",
        Date(EmptyObject) = "date",
        People(EmptyObject) = "people",
        Files(EmptyObject) = "files",
        Checkbox(EmptyObject) = "checkbox",
        Url(EmptyObject) = "url",
        Email(EmptyObject) = "email",
        PhoneNumber(EmptyObject) = "phone_number",
        Formula(FormulaConfig) = "formula",
        Relation(RelationConfig) = "relation",
        Rollup(RollupConfig) = "rollup",
        CreatedTime(EmptyObject) = "created_time",
        CreatedBy(EmptyObject) = "created_by",
        LastEditedTime(EmptyObject) = "last_edited_time",
        LastEditedBy(EmptyObject) = "last_edited_by",
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NumberConfig {
    /// Display format such as `number_with_commas` or `dollar`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectConfig {
    #[serde(default)]
    pub options: Vec<SelectOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaConfig {
    pub expression: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationConfig {
    pub database_id: DatabaseId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synced_property_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synced_property_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RollupConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_property_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_property_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rollup_property_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rollup_property_id: Option<String>,
    /// Aggregation such as `count`, `sum` or `show_original`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
}

impl PropertySchema {
    pub fn type_name(&self) -> &str {
        crate::codec::Discriminated::tag(&self.config)
    }

    pub fn is_title(&self) -> bool {
        matches!(self.config, PropertyConfig::Title(_))
    }
}
