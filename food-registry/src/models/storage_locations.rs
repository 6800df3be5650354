use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StorageLocation {
    Refrigerator,
    Freezer,
    Pantry,
    /// A stored value this build does not recognise, kept as written.
    Unknown(String),
}

impl StorageLocation {
    pub const ALL: [StorageLocation; 3] = [
        StorageLocation::Refrigerator,
        StorageLocation::Freezer,
        StorageLocation::Pantry,
    ];

    pub fn slug(&self) -> &str {
        match self {
            StorageLocation::Refrigerator => "geladeira",
            StorageLocation::Freezer => "freezer",
            StorageLocation::Pantry => "despensa",
            StorageLocation::Unknown(raw) => raw.as_str(),
        }
    }

    fn english_name(&self) -> Option<&'static str> {
        match self {
            StorageLocation::Refrigerator => Some("refrigerator"),
            StorageLocation::Freezer => Some("freezer"),
            StorageLocation::Pantry => Some("pantry"),
            StorageLocation::Unknown(_) => None,
        }
    }

    pub fn from_slug(slug: &str) -> Self {
        let needle = slug.trim();
        StorageLocation::ALL
            .into_iter()
            .find(|location| {
                location.slug().eq_ignore_ascii_case(needle)
                    || location
                        .english_name()
                        .is_some_and(|name| name.eq_ignore_ascii_case(needle))
            })
            .unwrap_or_else(|| StorageLocation::Unknown(slug.to_string()))
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, StorageLocation::Unknown(_))
    }

    pub fn icon(&self) -> &'static str {
        match self {
            StorageLocation::Refrigerator => "🧊",
            StorageLocation::Freezer => "❄️",
            StorageLocation::Pantry => "🗄️",
            StorageLocation::Unknown(_) => "📦",
        }
    }

    pub fn label(&self) -> &str {
        match self {
            StorageLocation::Refrigerator => "Geladeira",
            StorageLocation::Freezer => "Freezer",
            StorageLocation::Pantry => "Despensa",
            StorageLocation::Unknown(raw) => raw.as_str(),
        }
    }
}

impl fmt::Display for StorageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for StorageLocation {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let location = StorageLocation::from_slug(s);
        if location.is_known() {
            Ok(location)
        } else {
            Err(ValidationError::UnknownStorage(s.to_string()))
        }
    }
}

impl Serialize for StorageLocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.slug())
    }
}

impl<'de> Deserialize<'de> for StorageLocation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let slug = String::deserialize(deserializer)?;
        Ok(StorageLocation::from_slug(&slug))
    }
}
