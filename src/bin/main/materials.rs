use std::{fs, path::Path};

use anyhow::ensure;
use log::warn;
use swiftread_core::content::{
    Category, Difficulty, Material, MaterialDraft, MaterialStore, TextLength, count_words,
};

fn sample(
    id: &str,
    title: &str,
    category: Category,
    difficulty: Difficulty,
    content: &str,
) -> Material {
    Material {
        id: id.to_owned(),
        title: title.to_owned(),
        category,
        content: content.to_owned(),
        difficulty,
        length: TextLength::Short,
    }
}

/// Starter catalog used whenever the material service is absent or
/// unreachable.
pub(super) fn builtin_materials() -> Vec<Material> {
    vec![
        sample(
            "builtin-1",
            "How Eyes Read",
            Category::Science,
            Difficulty::Easy,
            "When you read, your eyes do not glide smoothly across the page. They jump \
             in quick bursts called saccades, pausing briefly at each landing point to \
             take in a few words at once. Most of the time spent reading is spent in \
             these pauses, not in motion. Training yourself to take in wider groups of \
             words per pause is the single most effective way to raise reading speed \
             without losing comprehension.",
        ),
        sample(
            "builtin-2",
            "The Subvocalization Habit",
            Category::Skills,
            Difficulty::Medium,
            "Most readers silently pronounce every word in their head, a habit called \
             subvocalization. It anchors reading speed to speaking speed, roughly two \
             hundred and fifty words per minute. Rapid serial presentation breaks the \
             habit by showing words faster than inner speech can follow, forcing the \
             visual system to carry meaning directly. At first this feels like losing \
             the thread. With practice, comprehension returns at far higher speeds.",
        ),
        sample(
            "builtin-3",
            "A River in the Morning",
            Category::Literature,
            Difficulty::Medium,
            "The river was grey before sunrise, and the fishermen pushed their boats \
             out without speaking. Mist stood over the water like a second, slower \
             river. By the time the sun cleared the hills the nets were already heavy, \
             and the village behind them had begun to smoke and stir. Nobody hurried. \
             The day would be long, and the river had been there longer than any of \
             them could say.",
        ),
        sample(
            "builtin-4",
            "Reading the News Faster",
            Category::News,
            Difficulty::Easy,
            "News writing puts the most important facts first. The opening paragraph \
             of a wire story answers who, what, where, and when; each following \
             paragraph adds detail in decreasing order of importance. A fast reader \
             can exploit this structure, reading openings at full attention and \
             accelerating through the tail of each story. Editors call the shape an \
             inverted pyramid, and it was designed for exactly this kind of reading.",
        ),
    ]
}

/// Fetch the catalog, falling back to the built-in texts when the
/// service is missing, failing, or empty.
pub(super) fn load_materials<S>(catalog: &mut Option<S>) -> Vec<Material>
where
    S: MaterialStore,
    S::Error: std::fmt::Display,
{
    if let Some(catalog) = catalog.as_mut() {
        match catalog.fetch_all() {
            Ok(materials) if !materials.is_empty() => return materials,
            Ok(_) => warn!("material service returned an empty catalog; using built-in texts"),
            Err(err) => warn!("material service unreachable ({err}); using built-in texts"),
        }
    }
    builtin_materials()
}

/// Build a creation draft from a plain-text file, titled after the
/// file name.
pub(super) fn draft_from_file(path: &Path) -> anyhow::Result<MaterialDraft> {
    let content = fs::read_to_string(path)?;
    ensure!(!content.trim().is_empty(), "imported file is empty");

    let title = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("Imported text")
        .to_owned();
    let words = count_words(&content);
    let length = if words < 150 {
        TextLength::Short
    } else if words < 400 {
        TextLength::Medium
    } else {
        TextLength::Long
    };

    Ok(MaterialDraft {
        title,
        category: Category::Custom,
        content,
        difficulty: Difficulty::Medium,
        length,
    })
}
