// src/types/rich_text.rs
//! Rich text spans and the mentions they can carry.

use super::{Color, DatabaseReference, DateValue, PageReference, User};
use crate::codec::discriminated_union;
use serde::{Deserialize, Serialize};

/// A span of formatted text.
///
/// At most one content variant is active, selected by the span's `type`.
/// Request bodies may name only the content key (`{"text": {...}}`) and still
/// decode. Some older payloads carry nothing but `plain_text`; those spans
/// have no content at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichText {
    #[serde(flatten, with = "crate::codec::optional")]
    pub content: Option<RichTextContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Annotations>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plain_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

discriminated_union! {
    /// What a rich text span renders.
    pub enum RichTextContent : "type" {
        Text(TextContent) = "text",
        Mention(Mention) = "mention",
        Equation(Equation) = "equation",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equation {
    pub expression: String,
}

/// Style flags on a span. Unset flags are omitted on the wire.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Annotations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

discriminated_union! {
    /// The target of an inline mention.
    pub enum Mention : "type" {
        User(User) = "user",
        Page(PageReference) = "page",
        Database(DatabaseReference) = "database",
        Date(DateValue) = "date",
        LinkPreview(LinkPreview) = "link_preview",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkPreview {
    pub url: String,
}

impl RichText {
    /// A plain, unstyled text span. This is what request bodies usually need.
    pub fn text(content: impl Into<String>) -> Self {
        Self::from_content(RichTextContent::Text(TextContent {
            content: content.into(),
            link: None,
        }))
    }

    /// A text span linking to `url`.
    pub fn link(content: impl Into<String>, url: impl Into<String>) -> Self {
        Self::from_content(RichTextContent::Text(TextContent {
            content: content.into(),
            link: Some(Link { url: url.into() }),
        }))
    }

    pub fn equation(expression: impl Into<String>) -> Self {
        Self::from_content(RichTextContent::Equation(Equation {
            expression: expression.into(),
        }))
    }

    pub fn from_content(content: RichTextContent) -> Self {
        Self {
            content: Some(content),
            annotations: None,
            plain_text: None,
            href: None,
        }
    }

    /// The server-rendered text, or the literal content for spans built locally.
    pub fn plain_text(&self) -> &str {
        if let Some(rendered) = &self.plain_text {
            return rendered;
        }
        match &self.content {
            Some(RichTextContent::Text(text)) => &text.content,
            Some(RichTextContent::Equation(equation)) => &equation.expression,
            _ => "",
        }
    }
}

/// Concatenates the plain text of a sequence of spans.
pub fn plain_text_of(spans: &[RichText]) -> String {
    spans.iter().map(RichText::plain_text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserKind;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn decodes_response_span() {
        let raw = json!({
            "plain_text": "TestDB",
            "annotations": {"color": "default"},
            "type": "text",
            "text": {"content": "TestDB"}
        });
        let span: RichText = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(span.plain_text(), "TestDB");
        assert_eq!(
            span.annotations.as_ref().and_then(|a| a.color.clone()),
            Some(Color::default())
        );
        assert_eq!(serde_json::to_value(&span).unwrap(), raw);
    }

    #[test]
    fn local_span_encodes_minimal_shape() {
        let encoded = serde_json::to_value(RichText::text("Jamboree")).unwrap();
        assert_eq!(encoded, json!({"type": "text", "text": {"content": "Jamboree"}}));
    }

    #[test]
    fn request_span_without_type_decodes() {
        let span: RichText = serde_json::from_value(json!({"text": {"content": "x"}})).unwrap();
        assert_eq!(span, RichText::text("x"));
    }

    #[test]
    fn decodes_user_mention() {
        let raw = json!({
            "type": "mention",
            "mention": {
                "type": "user",
                "user": {"object": "user", "id": "123abc", "type": "person", "person": {}}
            },
            "plain_text": "@John Doe"
        });
        let span: RichText = serde_json::from_value(raw).unwrap();

        match span.content {
            Some(RichTextContent::Mention(Mention::User(user))) => {
                assert_eq!(user.id.as_str(), "123abc");
                assert!(matches!(user.kind, Some(UserKind::Person(_))));
            }
            other => panic!("unexpected content: {:?}", other),
        }
    }

    #[test]
    fn plain_text_only_span_has_no_content() {
        let span: RichText = serde_json::from_value(json!({"plain_text": "Jamboree"})).unwrap();
        assert_eq!(span.content, None);
        assert_eq!(span.plain_text(), "Jamboree");
        assert_eq!(serde_json::to_value(&span).unwrap(), json!({"plain_text": "Jamboree"}));
    }

    #[test]
    fn concatenates_plain_text() {
        let spans = vec![RichText::text("Hello, "), RichText::equation("E=mc^2")];
        assert_eq!(plain_text_of(&spans), "Hello, E=mc^2");
    }
}
