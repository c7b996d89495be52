//! Closed vocabularies of the API path: languages and categories.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Dataset partition addressed by the `{type}` path segment.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    IntoStaticStr,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Books,
    Characters,
    Houses,
    Spells,
}

impl Category {
    /// Field holding the record's display name; searched and used as the card title.
    #[must_use]
    pub const fn name_field(self) -> &'static str {
        match self {
            Self::Books => "title",
            Self::Characters => "fullName",
            Self::Houses => "house",
            Self::Spells => "spell",
        }
    }
}

/// Allowed values of the leading `{lang}` path segment.
///
/// The language is validated only; every language serves the same records.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    IntoStaticStr,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    It,
    Pt,
    Uk,
}
