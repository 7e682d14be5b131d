use serde::{Deserialize, Serialize};

/// Difficulty given to every remote recipe; the meal database has no such field.
pub const DEFAULT_DIFFICULTY: Difficulty = Difficulty::Medium;

/// Preparation time in minutes given to every remote recipe.
pub const DEFAULT_TIME_MINUTES: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub measure: String,
}

/// A recipe as handed to the UI.
///
/// Records built from the category listing are partial: they carry no
/// ingredients, area, instructions or tags.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    /// Course or dish type, e.g. "Seafood"
    pub category: String,
    /// Cuisine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    /// Minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<u32>,
}
