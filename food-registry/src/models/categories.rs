use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// A food category. Stored and displayed through [`FoodCategory::slug`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FoodCategory {
    Meat,
    Fruit,
    Vegetable,
    Seafood,
    Pasta,
    Sweet,
    Dairy,
    Condiment,
    Grain,
    Beverage,
    Egg,
    Other,
    /// A stored value this build does not recognise, kept as written.
    Unknown(String),
}

impl FoodCategory {
    /// Every known category, in the order the category picker lists them.
    pub const ALL: [FoodCategory; 12] = [
        FoodCategory::Meat,
        FoodCategory::Fruit,
        FoodCategory::Vegetable,
        FoodCategory::Seafood,
        FoodCategory::Pasta,
        FoodCategory::Sweet,
        FoodCategory::Dairy,
        FoodCategory::Condiment,
        FoodCategory::Grain,
        FoodCategory::Beverage,
        FoodCategory::Egg,
        FoodCategory::Other,
    ];

    /// The slug written to the persisted blob.
    pub fn slug(&self) -> &str {
        match self {
            FoodCategory::Meat => "carne",
            FoodCategory::Fruit => "fruta",
            FoodCategory::Vegetable => "vegetal",
            FoodCategory::Seafood => "fruto-do-mar",
            FoodCategory::Pasta => "massas",
            FoodCategory::Sweet => "doce",
            FoodCategory::Dairy => "laticinio",
            FoodCategory::Condiment => "condimentos",
            FoodCategory::Grain => "graos",
            FoodCategory::Beverage => "bebidas",
            FoodCategory::Egg => "ovos",
            FoodCategory::Other => "outros",
            FoodCategory::Unknown(raw) => raw.as_str(),
        }
    }

    fn english_name(&self) -> Option<&'static str> {
        let name = match self {
            FoodCategory::Meat => "meat",
            FoodCategory::Fruit => "fruit",
            FoodCategory::Vegetable => "vegetable",
            FoodCategory::Seafood => "seafood",
            FoodCategory::Pasta => "pasta",
            FoodCategory::Sweet => "sweet",
            FoodCategory::Dairy => "dairy",
            FoodCategory::Condiment => "condiment",
            FoodCategory::Grain => "grain",
            FoodCategory::Beverage => "beverage",
            FoodCategory::Egg => "egg",
            FoodCategory::Other => "other",
            FoodCategory::Unknown(_) => return None,
        };
        Some(name)
    }

    /// Maps a slug or English name onto a category, keeping anything else as `Unknown`.
    pub fn from_slug(slug: &str) -> Self {
        let needle = slug.trim();
        FoodCategory::ALL
            .into_iter()
            .find(|category| {
                category.slug().eq_ignore_ascii_case(needle)
                    || category
                        .english_name()
                        .is_some_and(|name| name.eq_ignore_ascii_case(needle))
            })
            .unwrap_or_else(|| FoodCategory::Unknown(slug.to_string()))
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, FoodCategory::Unknown(_))
    }

    pub fn icon(&self) -> &'static str {
        match self {
            FoodCategory::Meat => "🥩",
            FoodCategory::Fruit => "🍎",
            FoodCategory::Vegetable => "🥬",
            FoodCategory::Seafood => "🦐",
            FoodCategory::Pasta => "🍝",
            FoodCategory::Sweet => "🍰",
            FoodCategory::Dairy => "🥛",
            FoodCategory::Condiment => "🧂",
            FoodCategory::Grain => "🌾",
            FoodCategory::Beverage => "🥤",
            FoodCategory::Egg => "🥚",
            FoodCategory::Other | FoodCategory::Unknown(_) => "📦",
        }
    }

    pub fn label(&self) -> &str {
        match self {
            FoodCategory::Meat => "Carne",
            FoodCategory::Fruit => "Fruta",
            FoodCategory::Vegetable => "Vegetal",
            FoodCategory::Seafood => "Fruto do Mar",
            FoodCategory::Pasta => "Massas",
            FoodCategory::Sweet => "Doce",
            FoodCategory::Dairy => "Laticínio",
            FoodCategory::Condiment => "Condimentos",
            FoodCategory::Grain => "Grãos",
            FoodCategory::Beverage => "Bebidas",
            FoodCategory::Egg => "Ovos",
            FoodCategory::Other => "Outros",
            FoodCategory::Unknown(raw) => raw.as_str(),
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Strict parse for user input: unrecognised text is an error.
impl FromStr for FoodCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let category = FoodCategory::from_slug(s);
        if category.is_known() {
            Ok(category)
        } else {
            Err(ValidationError::UnknownCategory(s.to_string()))
        }
    }
}

impl Serialize for FoodCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.slug())
    }
}

impl<'de> Deserialize<'de> for FoodCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let slug = String::deserialize(deserializer)?;
        Ok(FoodCategory::from_slug(&slug))
    }
}
