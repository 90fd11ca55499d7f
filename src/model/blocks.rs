use super::Block;
use crate::types::{Color, RichText};
use serde::{Deserialize, Serialize};

/// Payload shared by every text-bearing block: paragraphs, headings, list
/// items, toggles and quotes.
///
/// Rich text lives under `text` on the wire; `rich_text` is accepted when decoding.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextBlockContent {
    #[serde(alias = "rich_text")]
    pub text: Vec<RichText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Block>>,
}

impl TextBlockContent {
    pub fn new(text: Vec<RichText>) -> Self {
        Self {
            text,
            ..Self::default()
        }
    }
}

/// To-do block
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ToDoContent {
    #[serde(alias = "rich_text")]
    pub text: Vec<RichText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Block>>,
}

/// A page nested in another page. Only the title is exposed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildPageContent {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildDatabaseContent {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeContent {
    #[serde(alias = "rich_text")]
    pub text: Vec<RichText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<Vec<RichText>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationContent {
    pub expression: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmarkContent {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<Vec<RichText>>,
}
