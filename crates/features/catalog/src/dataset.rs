use crate::error::{CatalogError, CatalogErrorExt};
use crate::model::{Book, Character, House, Record, Spell};
use potter_domain::catalog::Category;
use serde::de::DeserializeOwned;

const BOOKS: &str = include_str!("../data/books.json");
const CHARACTERS: &str = include_str!("../data/characters.json");
const HOUSES: &str = include_str!("../data/houses.json");
const SPELLS: &str = include_str!("../data/spells.json");

/// The four immutable record lists, in dataset order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    books: Vec<Record>,
    characters: Vec<Record>,
    houses: Vec<Record>,
    spells: Vec<Record>,
}

/// Raw JSON documents, one array per category.
#[derive(Debug, Clone, Copy)]
pub struct Sources<'a> {
    pub books: &'a str,
    pub characters: &'a str,
    pub houses: &'a str,
    pub spells: &'a str,
}

impl Sources<'static> {
    /// The documents compiled into the binary.
    #[must_use]
    pub const fn embedded() -> Self {
        Self { books: BOOKS, characters: CHARACTERS, houses: HOUSES, spells: SPELLS }
    }
}

impl Dataset {
    /// Parses the datasets compiled into the binary.
    ///
    /// # Errors
    /// See [`Dataset::parse`].
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::parse(Sources::embedded())
    }

    /// Parses and validates every category document.
    ///
    /// # Errors
    /// * [`CatalogError::Dataset`] when a document is not an array of well-formed records.
    /// * [`CatalogError::Internal`] when a record's `index` differs from its position.
    pub fn parse(sources: Sources<'_>) -> Result<Self, CatalogError> {
        Ok(Self {
            books: parse_category::<Book>(Category::Books, sources.books, Record::Book)?,
            characters: parse_category::<Character>(
                Category::Characters,
                sources.characters,
                Record::Character,
            )?,
            houses: parse_category::<House>(Category::Houses, sources.houses, Record::House)?,
            spells: parse_category::<Spell>(Category::Spells, sources.spells, Record::Spell)?,
        })
    }

    #[must_use]
    pub fn records(&self, category: Category) -> &[Record] {
        match category {
            Category::Books => &self.books,
            Category::Characters => &self.characters,
            Category::Houses => &self.houses,
            Category::Spells => &self.spells,
        }
    }
}

fn parse_category<T: DeserializeOwned>(
    category: Category,
    raw: &str,
    wrap: fn(T) -> Record,
) -> Result<Vec<Record>, CatalogError> {
    let records: Vec<Record> = serde_json::from_str::<Vec<T>>(raw)
        .context(format!("Parsing {category} dataset"))?
        .into_iter()
        .map(wrap)
        .collect();

    if let Some((position, record)) =
        records.iter().enumerate().find(|(position, record)| record.index() != *position)
    {
        return Err(CatalogError::Internal {
            message: format!(
                "record '{}' declares index {} at position {position}",
                record.name(),
                record.index()
            )
            .into(),
            context: Some(format!("Validating {category} dataset").into()),
        });
    }

    Ok(records)
}
