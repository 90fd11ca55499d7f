use serde::{Deserialize, Serialize};

/// One ordering criterion of a database query or search.
///
/// Queries take a sequence of sorts; earlier sorts take precedence and later
/// ones only break ties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    #[serde(flatten)]
    pub key: SortKey,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Sort by a named property's value.
    Property(String),
    /// Sort by an object timestamp.
    Timestamp(TimestampField),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampField {
    CreatedTime,
    LastEditedTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Sort {
    pub fn property(name: impl Into<String>, direction: Direction) -> Self {
        Self {
            key: SortKey::Property(name.into()),
            direction,
        }
    }

    pub fn timestamp(field: TimestampField, direction: Direction) -> Self {
        Self {
            key: SortKey::Timestamp(field),
            direction,
        }
    }

    /// The only ordering search accepts.
    pub fn last_edited(direction: Direction) -> Self {
        Self::timestamp(TimestampField::LastEditedTime, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn property_and_timestamp_sorts() {
        let sorts = vec![
            Sort::property("Name", Direction::Ascending),
            Sort::last_edited(Direction::Descending),
        ];
        assert_eq!(
            serde_json::to_value(&sorts).unwrap(),
            json!([
                {"property": "Name", "direction": "ascending"},
                {"timestamp": "last_edited_time", "direction": "descending"}
            ])
        );

        let decoded: Vec<Sort> = serde_json::from_value(serde_json::to_value(&sorts).unwrap()).unwrap();
        assert_eq!(decoded, sorts);
    }
}
