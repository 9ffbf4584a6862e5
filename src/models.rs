use serde::{Deserialize, Serialize};

/// A generated or manually entered dish, as persisted in the saved collection.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct Recipe {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
    /// Base serving count the ingredient quantities refer to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    /// Serving count last chosen in the recipe view. Quantities stay at the base.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_servings: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}

impl Recipe {
    /// Case-insensitive name comparison used for uniqueness in the collection.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    pub fn base_servings(&self) -> Option<u32> {
        self.servings.filter(|s| *s > 0)
    }

    /// Serving count to show first: the chosen one, else the base.
    pub fn shown_servings(&self) -> Option<u32> {
        let base = self.base_servings()?;
        Some(self.preferred_servings.filter(|s| *s > 0).unwrap_or(base))
    }
}

/// The single unsaved request kept in storage between visits.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Draft {
    pub prompt: String,
    pub difficulty: String,
    pub wishes: String,
    pub servings: u32,
}

/// Live values of the request form. Servings stays as typed text.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FormState {
    pub prompt: String,
    pub difficulty: String,
    pub wishes: String,
    pub servings: String,
}

/// Display state of the saved-recipes badge.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct CountBadge {
    pub text: String,
    pub visible: bool,
}

impl CountBadge {
    pub fn from_count(count: usize) -> Self {
        Self {
            text: if count == 0 { String::new() } else { count.to_string() },
            visible: count > 0,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(default)] // Older stored settings may lack newer fields
pub struct AppSettings {
    pub endpoint: String,
    pub default_difficulty: String,
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            endpoint: "/api/generate-recipe".to_string(),
            default_difficulty: "medium".to_string(),
            log_level: "info".to_string(),
        }
    }
}

// API DTOs
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RecipeRequest {
    pub prompt: String,
    pub difficulty: String,
    pub wishes: String,
    pub servings: u32,
}

#[derive(Deserialize, Debug)]
pub struct ApiErrorBody {
    pub error: Option<String>,
}
