//! Text, block and option colors.
//!
//! The API names a color by its hue, with a `_background` suffix when it
//! shades the background instead of the text: `red`, `red_background`,
//! `default_background`. Names outside the known palette are kept as-is.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const BACKGROUND_SUFFIX: &str = "_background";

/// One of the palette's hues, including the theme default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Hue {
    #[default]
    Default,
    Gray,
    Brown,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    Red,
}

impl Hue {
    pub const ALL: [Hue; 10] = [
        Hue::Default,
        Hue::Gray,
        Hue::Brown,
        Hue::Orange,
        Hue::Yellow,
        Hue::Green,
        Hue::Blue,
        Hue::Purple,
        Hue::Pink,
        Hue::Red,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Hue::Default => "default",
            Hue::Gray => "gray",
            Hue::Brown => "brown",
            Hue::Orange => "orange",
            Hue::Yellow => "yellow",
            Hue::Green => "green",
            Hue::Blue => "blue",
            Hue::Purple => "purple",
            Hue::Pink => "pink",
            Hue::Red => "red",
        }
    }

    fn from_name(name: &str) -> Option<Hue> {
        Hue::ALL.into_iter().find(|hue| hue.name() == name)
    }
}

/// A color as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Color {
    Text(Hue),
    Background(Hue),
    /// A color name this client does not know, written back unchanged.
    Unknown(String),
}

impl Default for Color {
    fn default() -> Self {
        Color::Text(Hue::Default)
    }
}

impl Color {
    /// Reads an API color name. Never fails: unrecognized names become `Unknown`.
    pub fn from_wire(name: &str) -> Self {
        let parsed = match name.strip_suffix(BACKGROUND_SUFFIX) {
            Some(hue) => Hue::from_name(hue).map(Color::Background),
            None => Hue::from_name(name).map(Color::Text),
        };
        parsed.unwrap_or_else(|| Color::Unknown(name.to_string()))
    }

    pub fn hue(&self) -> Option<Hue> {
        match self {
            Color::Text(hue) | Color::Background(hue) => Some(*hue),
            Color::Unknown(_) => None,
        }
    }

    pub fn is_background(&self) -> bool {
        match self {
            Color::Background(_) => true,
            Color::Text(_) => false,
            Color::Unknown(name) => name.ends_with(BACKGROUND_SUFFIX),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Color::Unknown(_))
    }
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Color::from_wire(name)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Text(hue) => f.write_str(hue.name()),
            Color::Background(hue) => write!(f, "{}{}", hue.name(), BACKGROUND_SUFFIX),
            Color::Unknown(name) => f.write_str(name),
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        let color = Color::from_wire(&name);
        if !color.is_known() {
            log::debug!("color '{}' is not in the palette, keeping it verbatim", name);
        }
        Ok(color)
    }
}
