use potter_domain::catalog::{Category, Language};
use std::str::FromStr;
use strum::IntoEnumIterator;

#[test]
fn categories_parse_from_lowercase_segments() {
    assert_eq!(Category::from_str("books"), Ok(Category::Books));
    assert_eq!(Category::from_str("characters"), Ok(Category::Characters));
    assert_eq!(Category::from_str("houses"), Ok(Category::Houses));
    assert_eq!(Category::from_str("spells"), Ok(Category::Spells));
    assert!(Category::from_str("Books").is_err());
    assert!(Category::from_str("potions").is_err());
}

#[test]
fn category_display_round_trips() {
    for category in Category::iter() {
        assert_eq!(Category::from_str(&category.to_string()), Ok(category));
    }
    assert_eq!(Category::iter().count(), 4);
}

#[test]
fn name_fields_match_record_shapes() {
    assert_eq!(Category::Books.name_field(), "title");
    assert_eq!(Category::Characters.name_field(), "fullName");
    assert_eq!(Category::Houses.name_field(), "house");
    assert_eq!(Category::Spells.name_field(), "spell");
}

#[test]
fn language_allowlist() {
    let codes: Vec<&str> = Language::iter().map(Into::into).collect();
    assert_eq!(codes, ["en", "es", "fr", "it", "pt", "uk"]);
    assert!(Language::from_str("de").is_err());
    assert_eq!(Language::default(), Language::En);
}

#[test]
fn category_serializes_lowercase() {
    let json = serde_json::to_string(&Category::Spells).expect("serialize");
    assert_eq!(json, "\"spells\"");
}
