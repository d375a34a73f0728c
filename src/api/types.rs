//! Wire types for the character API
//!
//! These mirror the JSON body of `GET <base>/character?page={n}`. Fields the
//! UI never reads (episode lists, resource URLs, pagination cursors) are left
//! out; serde ignores them on deserialization.

use serde::{Deserialize, Serialize};

/// One page of characters plus the total page count reported by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterPage {
    pub info: PageInfo,
    pub results: Vec<Character>,
}

/// Pagination metadata for a character page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Total number of pages available, >= 1
    pub pages: u32,
}

/// A single character record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub status: CharacterStatus,

    /// Portrait URL
    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub species: String,

    /// Sub-species or variant; frequently empty in the live API
    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default)]
    pub gender: String,

    #[serde(default)]
    pub origin: Option<LocationRef>,

    #[serde(default)]
    pub location: Option<LocationRef>,
}

/// Named reference to an origin or last-known location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRef {
    #[serde(default)]
    pub name: String,
}

/// Life status of a character
///
/// The API sends `"Alive"`, `"Dead"` or `"unknown"`; anything else is kept
/// verbatim in `Other` so the original text can still be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CharacterStatus {
    Alive,
    Dead,
    Other(String),
}

impl CharacterStatus {
    /// Glyph shown next to the status text
    pub fn glyph(&self) -> &'static str {
        match self {
            CharacterStatus::Alive => "❤️",
            CharacterStatus::Dead => "☠️",
            CharacterStatus::Other(_) => "❓",
        }
    }

    /// The status text as the API sent it
    pub fn as_str(&self) -> &str {
        match self {
            CharacterStatus::Alive => "Alive",
            CharacterStatus::Dead => "Dead",
            CharacterStatus::Other(text) => text,
        }
    }
}

impl Default for CharacterStatus {
    fn default() -> Self {
        CharacterStatus::Other(String::new())
    }
}

impl From<String> for CharacterStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Alive" => CharacterStatus::Alive,
            "Dead" => CharacterStatus::Dead,
            _ => CharacterStatus::Other(value),
        }
    }
}

impl From<CharacterStatus> for String {
    fn from(value: CharacterStatus) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_character_page() {
        let body = r#"{
            "info": {"count": 826, "pages": 42, "next": "x", "prev": null},
            "results": [{
                "id": 1,
                "name": "Rick Sanchez",
                "status": "Alive",
                "species": "Human",
                "type": "",
                "gender": "Male",
                "origin": {"name": "Earth (C-137)", "url": ""},
                "location": {"name": "Citadel of Ricks", "url": ""},
                "image": "https://example.test/rick.jpeg"
            }]
        }"#;

        let page: CharacterPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.info.pages, 42);
        assert_eq!(page.results.len(), 1);

        let rick = &page.results[0];
        assert_eq!(rick.name, "Rick Sanchez");
        assert_eq!(rick.status, CharacterStatus::Alive);
        assert_eq!(rick.kind, "");
        assert_eq!(rick.origin.as_ref().unwrap().name, "Earth (C-137)");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(CharacterStatus::from("Alive".to_string()).glyph(), "❤️");
        assert_eq!(CharacterStatus::from("Dead".to_string()).glyph(), "☠️");

        let unknown = CharacterStatus::from("unknown".to_string());
        assert_eq!(unknown.glyph(), "❓");
        assert_eq!(unknown.as_str(), "unknown");
    }

    #[test]
    fn test_missing_fields_default() {
        let body = r#"{"name": "Birdperson", "status": "Dead"}"#;
        let character: Character = serde_json::from_str(body).unwrap();

        assert_eq!(character.species, "");
        assert!(character.origin.is_none());
        assert!(character.location.is_none());
    }

    #[test]
    fn test_null_location_ref() {
        let body = r#"{"name": "X", "origin": null, "location": {"name": ""}}"#;
        let character: Character = serde_json::from_str(body).unwrap();

        assert!(character.origin.is_none());
        assert_eq!(character.location.as_ref().unwrap().name, "");
    }
}
