//! Reading materials: tokenization, the material record, and the
//! abstract store the library is loaded from.

use serde::{Deserialize, Serialize};

/// Split raw text into display tokens.
///
/// Splits on runs of whitespace, drops empty fragments, and preserves
/// source order. Empty or all-whitespace input yields an empty
/// sequence, which playback treats as instantly complete.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}

/// Word count of a text without materializing the tokens.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Literature,
    News,
    Science,
    Skills,
    Custom,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Literature,
        Category::News,
        Category::Science,
        Category::Skills,
        Category::Custom,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Literature => "Literature",
            Category::News => "News",
            Category::Science => "Science",
            Category::Skills => "Skills",
            Category::Custom => "Custom",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn cycled(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextLength {
    Short,
    Medium,
    Long,
}

/// One library entry. `content` is the raw text fed to the tokenizer;
/// the remaining fields are pass-through metadata for display and
/// history tagging.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub content: String,
    pub difficulty: Difficulty,
    pub length: TextLength,
}

/// Material payload without an id, used for creation. The store assigns
/// the id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialDraft {
    pub title: String,
    pub category: Category,
    pub content: String,
    pub difficulty: Difficulty,
    pub length: TextLength,
}

/// Abstract CRUD store for reading materials.
///
/// A failing or empty store is a valid degenerate state: callers fall
/// back to built-in samples rather than surfacing the error into the
/// playback engine.
pub trait MaterialStore {
    type Error;

    fn fetch_all(&mut self) -> Result<Vec<Material>, Self::Error>;
    fn create(&mut self, draft: &MaterialDraft) -> Result<Material, Self::Error>;
    fn update(&mut self, material: &Material) -> Result<(), Self::Error>;
    fn delete(&mut self, id: &str) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests;
