// src/model/filter.rs
//! Database query filters.
//!
//! A filter is either a condition on one property or an `and`/`or`
//! combination of further filters, nested to any depth. The condition's
//! shape depends on the property's type and is keyed by that type:
//!
//! ```json
//! { "property": "Tags", "multi_select": { "contains": "Tag1" } }
//! ```

use crate::codec::{discriminated_union, EmptyObject, JsonObject};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Property(PropertyFilter),
    And(Vec<Filter>),
    Or(Vec<Filter>),
}

/// A single condition on a named property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyFilter {
    pub property: String,
    #[serde(flatten)]
    pub condition: FilterCondition,
}

discriminated_union! {
    /// A condition, keyed by the type of the property it tests.
    pub enum FilterCondition : keyed {
        Title(TextCondition) = "title",
        RichText(TextCondition) = "rich_text",
        Url(TextCondition) = "url",
        Email(TextCondition) = "email",
        PhoneNumber(TextCondition) = "phone_number",
        Number(NumberCondition) = "number",
        Checkbox(CheckboxCondition) = "checkbox",
        Select(SelectCondition) = "select",
        MultiSelect(MultiSelectCondition) = "multi_select",
        Date(DateCondition) = "date",
        CreatedTime(DateCondition) = "created_time",
        LastEditedTime(DateCondition) = "last_edited_time",
        People(PeopleCondition) = "people",
        CreatedBy(PeopleCondition) = "created_by",
        LastEditedBy(PeopleCondition) = "last_edited_by",
        Files(FilesCondition) = "files",
        Relation(RelationCondition) = "relation",
        Formula(FormulaCondition) = "formula",
    }
}

discriminated_union! {
    /// A condition on a formula's result, keyed by the result type.
    pub enum FormulaCondition : keyed {
        Text(TextCondition) = "text",
        Checkbox(CheckboxCondition) = "checkbox",
        Number(NumberCondition) = "number",
        Date(DateCondition) = "date",
    }
}

/// The literal `true` that `is_empty` and `is_not_empty` require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct True;

impl Serialize for True {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(true)
    }
}

impl<'de> Deserialize<'de> for True {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if bool::deserialize(deserializer)? {
            Ok(True)
        } else {
            Err(D::Error::custom("emptiness checks only accept `true`"))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextCondition {
    Equals(String),
    DoesNotEqual(String),
    Contains(String),
    DoesNotContain(String),
    StartsWith(String),
    EndsWith(String),
    IsEmpty(True),
    IsNotEmpty(True),
}

/// Operands keep their JSON form, so integers are sent as integers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberCondition {
    Equals(Number),
    DoesNotEqual(Number),
    GreaterThan(Number),
    LessThan(Number),
    GreaterThanOrEqualTo(Number),
    LessThanOrEqualTo(Number),
    IsEmpty(True),
    IsNotEmpty(True),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckboxCondition {
    Equals(bool),
    DoesNotEqual(bool),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectCondition {
    Equals(String),
    DoesNotEqual(String),
    IsEmpty(True),
    IsNotEmpty(True),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiSelectCondition {
    Contains(String),
    DoesNotContain(String),
    IsEmpty(True),
    IsNotEmpty(True),
}

/// Date comparisons take ISO 8601 dates or datetimes. The relative
/// windows take an empty object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateCondition {
    Equals(String),
    Before(String),
    After(String),
    OnOrBefore(String),
    OnOrAfter(String),
    IsEmpty(True),
    IsNotEmpty(True),
    PastWeek(EmptyObject),
    PastMonth(EmptyObject),
    PastYear(EmptyObject),
    NextWeek(EmptyObject),
    NextMonth(EmptyObject),
    NextYear(EmptyObject),
}

/// People conditions compare against a user ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeopleCondition {
    Contains(String),
    DoesNotContain(String),
    IsEmpty(True),
    IsNotEmpty(True),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilesCondition {
    IsEmpty(True),
    IsNotEmpty(True),
}

/// Relation conditions compare against a page ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationCondition {
    Contains(String),
    DoesNotContain(String),
    IsEmpty(True),
    IsNotEmpty(True),
}

impl Filter {
    pub fn property(property: impl Into<String>, condition: FilterCondition) -> Self {
        Filter::Property(PropertyFilter {
            property: property.into(),
            condition,
        })
    }

    pub fn and(filters: Vec<Filter>) -> Self {
        Filter::And(filters)
    }

    pub fn or(filters: Vec<Filter>) -> Self {
        Filter::Or(filters)
    }
}

impl Serialize for Filter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        match self {
            Filter::Property(filter) => filter.serialize(serializer),
            Filter::And(filters) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("and", filters)?;
                map.end()
            }
            Filter::Or(filters) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("or", filters)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Filter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut object = JsonObject::deserialize(deserializer)?;

        if object.contains_key("property") {
            return serde_json::from_value(Value::Object(object))
                .map(Filter::Property)
                .map_err(D::Error::custom);
        }

        match (object.remove("and"), object.remove("or")) {
            (Some(filters), None) => serde_json::from_value(filters)
                .map(Filter::And)
                .map_err(D::Error::custom),
            (None, Some(filters)) => serde_json::from_value(filters)
                .map(Filter::Or)
                .map_err(D::Error::custom),
            (Some(_), Some(_)) => Err(D::Error::custom(
                "a compound filter combines with `and` or `or`, not both",
            )),
            (None, None) => Err(D::Error::custom(
                "a filter needs `property`, `and` or `or`",
            )),
        }
    }
}
