use super::*;

#[test]
fn tokenize_splits_on_whitespace_runs() {
    let tokens = tokenize("one  two\tthree\n\nfour");
    assert_eq!(tokens, ["one", "two", "three", "four"]);
}

#[test]
fn tokenize_produces_no_empty_tokens() {
    let tokens = tokenize("  leading and trailing   ");
    assert!(tokens.iter().all(|t| !t.is_empty()));
    assert_eq!(tokens, ["leading", "and", "trailing"]);
}

#[test]
fn tokenize_of_blank_input_is_empty() {
    assert!(tokenize("").is_empty());
    assert!(tokenize(" \t\r\n ").is_empty());
}

#[test]
fn tokenize_round_trips_normalized_text() {
    let source = "  the   quick\nbrown\t fox ";
    let joined = tokenize(source).join(" ");
    assert_eq!(joined, "the quick brown fox");
}

#[test]
fn count_words_matches_tokenizer() {
    let source = "a b  c\nd";
    assert_eq!(count_words(source), tokenize(source).len());
    assert_eq!(count_words(""), 0);
}

#[test]
fn difficulty_cycles_through_every_tag() {
    assert_eq!(Difficulty::Easy.cycled(), Difficulty::Medium);
    assert_eq!(Difficulty::Medium.cycled(), Difficulty::Hard);
    assert_eq!(Difficulty::Hard.cycled(), Difficulty::Easy);
}

#[test]
fn category_serializes_lowercase() {
    let json = serde_json::to_string(&Category::Literature).unwrap();
    assert_eq!(json, "\"literature\"");
    let back: Category = serde_json::from_str("\"skills\"").unwrap();
    assert_eq!(back, Category::Skills);
}

#[test]
fn material_round_trips_through_json() {
    let material = Material {
        id: "7".to_owned(),
        title: "On Reading".to_owned(),
        category: Category::Skills,
        content: "Reading is a skill that rewards practice.".to_owned(),
        difficulty: Difficulty::Easy,
        length: TextLength::Short,
    };
    let json = serde_json::to_string(&material).unwrap();
    let back: Material = serde_json::from_str(&json).unwrap();
    assert_eq!(back, material);
}
