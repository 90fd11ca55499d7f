use super::UserId;
use crate::codec::discriminated_union;
use serde::{Deserialize, Serialize};

/// A workspace member or integration.
///
/// Partial user references (`created_by`, mentions, people values) carry only
/// `object` and `id`, so every other field is optional, including the kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    pub id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(flatten, with = "crate::codec::optional")]
    pub kind: Option<UserKind>,
}

discriminated_union! {
    pub enum UserKind : "type" {
        Person(Person) = "person",
        Bot(Bot) = "bot",
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Person {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Bot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_name: Option<String>,
}

impl User {
    /// A bare `{"object": "user", "id": ...}` reference, as accepted by people properties.
    pub fn reference(id: UserId) -> Self {
        Self {
            object: Some("user".to_string()),
            id,
            name: None,
            avatar_url: None,
            kind: None,
        }
    }

    pub fn is_bot(&self) -> bool {
        matches!(self.kind, Some(UserKind::Bot(_)))
    }

    pub fn email(&self) -> Option<&str> {
        match &self.kind {
            Some(UserKind::Person(person)) => person.email.as_deref(),
            _ => None,
        }
    }
}
