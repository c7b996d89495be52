//! Record shapes of the four datasets.
//!
//! Optional fields are skipped when absent so the JSON output never carries `null`.

use potter_derive::api_model;
use potter_domain::catalog::Category;
use serde::{Deserialize, Serialize};

#[api_model]
#[derive(Clone, PartialEq, Eq)]
/// A novel or play of the series
pub struct Book {
    /// Position in the series
    pub number: u32,
    pub title: String,
    /// Title of the first (UK) edition
    pub original_title: String,
    pub release_date: String,
    pub description: String,
    pub pages: u32,
    /// Cover image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    /// Zero-based position in the dataset
    pub index: usize,
}

#[api_model]
#[derive(Clone, PartialEq, Eq)]
/// A character of the series
pub struct Character {
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hogwarts_house: Option<String>,
    /// Actor(s) who played the character on screen
    pub interpreted_by: String,
    #[serde(default)]
    pub children: Vec<String>,
    /// Portrait URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
    pub index: usize,
}

#[api_model]
#[derive(Clone, PartialEq, Eq)]
/// One of the four Hogwarts houses
pub struct House {
    pub house: String,
    pub emoji: String,
    pub founder: String,
    pub colors: Vec<String>,
    pub animal: String,
    pub index: usize,
}

#[api_model]
#[derive(Clone, PartialEq, Eq)]
/// A spell and what it does
pub struct Spell {
    pub spell: String,
    #[serde(rename = "use")]
    pub usage: String,
    pub index: usize,
}

/// Any record, serialized as its bare object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(untagged)]
pub enum Record {
    Book(Book),
    Character(Character),
    House(House),
    Spell(Spell),
}

impl Record {
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Book(_) => Category::Books,
            Self::Character(_) => Category::Characters,
            Self::House(_) => Category::Houses,
            Self::Spell(_) => Category::Spells,
        }
    }

    /// Value of the field named by [`Category::name_field`].
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Book(book) => &book.title,
            Self::Character(character) => &character.full_name,
            Self::House(house) => &house.house,
            Self::Spell(spell) => &spell.spell,
        }
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Book(book) => book.index,
            Self::Character(character) => character.index,
            Self::House(house) => house.index,
            Self::Spell(spell) => spell.index,
        }
    }
}
