use crate::codec::discriminated_union;
use crate::types::*;
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A page property as returned by the API: its ID plus the typed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageProperty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub value: PropertyValue,
}

discriminated_union! {
    /// The content of one page property, selected by its `type`.
    ///
    /// Numbers keep their JSON representation so integer values re-encode as
    /// integers. Nullable cells (`number`, `select`, `date`, `url`, ...) decode
    /// `null` as `None` and encode `None` as an explicit `null`, which is how a
    /// partial update clears a cell.
    pub enum PropertyValue : "type" {
        Title(Vec<RichText>) = "title",
        RichText(Vec<RichText>) = "rich_text",
        Number(Option<Number>) = "number",
        Select(Option<SelectOption>) = "select",
        MultiSelect(Vec<SelectOption>) = "multi_select",
        Date(Option<DateValue>) = "date",
        Checkbox(bool) = "checkbox",
        Url(Option<String>) = "url",
        Email(Option<String>) = "email",
        PhoneNumber(Option<String>) = "phone_number",
        Files(Vec<FileReference>) = "files",
        Relation(Vec<PageReference>) = "relation",
        People(Vec<User>) = "people",
        Formula(FormulaValue) = "formula",
        Rollup(RollupValue) = "rollup",
        CreatedTime(String) = "created_time",
        CreatedBy(User) = "created_by",
        LastEditedTime(String) = "last_edited_time",
        LastEditedBy(User) = "last_edited_by",
    }
}

discriminated_union! {
    /// Computed result of a formula property.
    pub enum FormulaValue : "type" {
        String(Option<String>) = "string",
        Number(Option<Number>) = "number",
        Boolean(Option<bool>) = "boolean",
        Date(Option<DateValue>) = "date",
    }
}

discriminated_union! {
    /// Aggregate computed by a rollup property.
    pub enum RollupValue : "type" {
        Number(Option<Number>) = "number",
        Date(Option<DateValue>) = "date",
        Array(Vec<RollupElement>) = "array",
    }
}

/// One element of a rollup array.
///
/// The API shapes these exactly like property values (`{"type": "title",
/// "title": [...]}`) minus the property ID, so they share the codec table.
pub type RollupElement = PropertyValue;

impl PropertyValue {
    pub fn title(text: impl Into<String>) -> Self {
        Self::Title(vec![RichText::text(text)])
    }

    pub fn rich_text(text: impl Into<String>) -> Self {
        Self::RichText(vec![RichText::text(text)])
    }

    pub fn number(value: impl Into<Number>) -> Self {
        Self::Number(Some(value.into()))
    }

    /// A fractional number. Non-finite inputs have no JSON form and clear the cell.
    pub fn number_f64(value: f64) -> Self {
        Self::Number(Number::from_f64(value))
    }

    pub fn select(name: impl Into<String>) -> Self {
        Self::Select(Some(SelectOption::named(name)))
    }

    pub fn multi_select<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MultiSelect(names.into_iter().map(SelectOption::named).collect())
    }

    /// The wire `type` of this value.
    pub fn type_name(&self) -> &str {
        crate::codec::Discriminated::tag(self)
    }

    pub fn as_title(&self) -> Option<&[RichText]> {
        match self {
            Self::Title(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(Some(n))
            | Self::Formula(FormulaValue::Number(Some(n)))
            | Self::Rollup(RollupValue::Number(Some(n))) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_checkbox(&self) -> Option<bool> {
        match self {
            Self::Checkbox(checked) => Some(*checked),
            Self::Formula(FormulaValue::Boolean(value)) => *value,
            _ => None,
        }
    }

    /// Names of the chosen options for select and multi-select values.
    pub fn option_names(&self) -> Vec<&str> {
        let options: &[SelectOption] = match self {
            Self::Select(Some(option)) => std::slice::from_ref(option),
            Self::MultiSelect(options) => options,
            _ => &[],
        };
        options.iter().filter_map(|o| o.name.as_deref()).collect()
    }
}
