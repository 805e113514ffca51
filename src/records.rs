//! Typed records extracted from a DikuMUD area file.
//!
//! These are the handoff schema between the parsers and the document
//! renderer: immutable once built, keyed by their legacy vnum strings.
//! Serde renames keep the serialized field names identical to the keys
//! the legacy converter emitted.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Exit direction. The legacy format encodes directions as `D0`..`D5`;
/// anything else is kept as `Unknown` rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    East,
    South,
    West,
    Up,
    Down,
    Unknown,
}

impl Direction {
    /// Maps a raw `D<digit>` exit code to a direction.
    pub fn from_exit_code(code: &str) -> Self {
        match code {
            "D0" => Direction::North,
            "D1" => Direction::East,
            "D2" => Direction::South,
            "D3" => Direction::West,
            "D4" => Direction::Up,
            "D5" => Direction::Down,
            _ => Direction::Unknown,
        }
    }

    /// The raw exit code this direction came from. `None` for `Unknown`,
    /// which has no single source code.
    pub fn exit_code(&self) -> Option<&'static str> {
        match self {
            Direction::North => Some("D0"),
            Direction::East => Some("D1"),
            Direction::South => Some("D2"),
            Direction::West => Some("D3"),
            Direction::Up => Some("D4"),
            Direction::Down => Some("D5"),
            Direction::Unknown => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Unknown => "unknown",
        }
    }
}

/// A room exit. `destination` is a weak reference by vnum; it may name a
/// room outside this document and is never resolved at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exit {
    #[serde(rename = "id")]
    pub destination: String,
    pub description: String,
}

/// A keyword-triggered description block attached to a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraDescription {
    pub keywords: Vec<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    pub description: String,
    /// Exits in source order. Closed exits (destination `-1`) are never
    /// stored.
    #[serde(skip_serializing_if = "IndexMap::is_empty", default)]
    pub exits: IndexMap<Direction, Exit>,
    /// Extra descriptions in source order; first match wins downstream.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub environment: Vec<ExtraDescription>,
}

/// A mobile template. Vnum `0` is the end-of-section marker and is never
/// stored. Truncated records keep empty/zero defaults for the missing
/// trailing fields, matching the legacy converter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MobileTemplate {
    pub keywords: Vec<String>,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub long_description: String,
    #[serde(rename = "description", default)]
    pub full_description: String,
    #[serde(default)]
    pub race: String,
    #[serde(default)]
    pub level: i32,
}

/// A mobile reset instruction: spawn `mobile_id` in `room_id` up to the
/// stated limits. References are unresolved vnum strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MobileReset {
    #[serde(rename = "mob_vnum")]
    pub mobile_id: String,
    #[serde(rename = "room_vnum")]
    pub room_id: String,
    #[serde(rename = "limit")]
    pub local_limit: String,
    #[serde(rename = "max_world")]
    pub global_limit: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub comment: String,
}

/// Rooms keyed by vnum string, in source order.
pub type RoomSet = IndexMap<String, Room>;

/// Mobile templates keyed by vnum string, in source order.
pub type MobileSet = IndexMap<String, MobileTemplate>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_table_round_trip() {
        // Every real direction maps back to itself through its exit code.
        for dir in [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
            Direction::Up,
            Direction::Down,
        ] {
            let code = dir.exit_code().unwrap();
            assert_eq!(Direction::from_exit_code(code), dir);
        }
    }

    #[test]
    fn test_unknown_direction_codes() {
        assert_eq!(Direction::from_exit_code("D6"), Direction::Unknown);
        assert_eq!(Direction::from_exit_code("D9"), Direction::Unknown);
        assert_eq!(Direction::from_exit_code("D"), Direction::Unknown);
        assert_eq!(Direction::Unknown.exit_code(), None);
    }

    #[test]
    fn test_direction_serializes_lowercase() {
        let yaml = serde_yaml::to_string(&Direction::North).unwrap();
        assert_eq!(yaml.trim(), "north");
    }

    #[test]
    fn test_room_schema_keys() {
        let mut exits = IndexMap::new();
        exits.insert(
            Direction::North,
            Exit {
                destination: "101".to_string(),
                description: "a path".to_string(),
            },
        );
        let room = Room {
            name: "Temple".to_string(),
            description: "A holy place.".to_string(),
            exits,
            environment: Vec::new(),
        };

        let value = serde_yaml::to_value(&room).unwrap();
        // Exit destination serializes under the legacy key `id`.
        assert_eq!(value["exits"]["north"]["id"], serde_yaml::Value::from("101"));
        // Empty environment is omitted entirely.
        assert!(value.get("environment").is_none());
    }
}
