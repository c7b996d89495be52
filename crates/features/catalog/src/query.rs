use crate::Catalog;
use crate::error::CatalogError;
use crate::model::Record;
use potter_domain::catalog::{Category, Language};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::str::FromStr;
use strum::IntoEnumIterator;

/// Query string of the list and cards routes.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::IntoParams), into_params(parameter_in = Query))]
pub struct ListQuery {
    /// Case-insensitive substring of the record's name
    pub search: Option<String>,
    /// Zero-based position in the filtered list; returns a single object
    pub index: Option<usize>,
    /// Maximum number of records, also the page size
    #[cfg_attr(feature = "server", param(value_type = Option<usize>, minimum = 1))]
    pub max: Option<NonZeroUsize>,
    /// One-based page number
    #[cfg_attr(feature = "server", param(value_type = Option<usize>, minimum = 1))]
    pub page: Option<NonZeroUsize>,
}

impl ListQuery {
    #[must_use]
    pub fn search(term: impl Into<String>) -> Self {
        Self { search: Some(term.into()), ..Self::default() }
    }

    /// Lowercased search term, `None` when blank.
    fn needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase)
    }
}

/// Result of a list query: an array, or one object when `index` was given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(untagged)]
pub enum Listing {
    Many(Vec<Record>),
    One(Record),
}

impl Listing {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Many(records) => records.len(),
            Self::One(_) => 1,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        match self {
            Self::Many(records) => records,
            Self::One(record) => std::slice::from_ref(record),
        }
    }
}

/// Validates the `{lang}` path segment.
///
/// # Errors
/// Returns [`CatalogError::UnknownLanguage`] for anything off the allowlist.
pub fn resolve_language(segment: &str) -> Result<Language, CatalogError> {
    Language::from_str(segment).map_err(|_| CatalogError::UnknownLanguage {
        message: format!("'{segment}' (expected one of {})", expected::<Language>()).into(),
        context: None,
    })
}

/// Resolves the `{type}` path segment.
///
/// # Errors
/// Returns [`CatalogError::UnknownCategory`] unless the segment names one of the four categories.
pub fn resolve_category(segment: &str) -> Result<Category, CatalogError> {
    Category::from_str(segment).map_err(|_| CatalogError::UnknownCategory {
        message: format!("'{segment}' (expected one of {})", expected::<Category>()).into(),
        context: None,
    })
}

fn expected<E: IntoEnumIterator + AsRef<str>>() -> String {
    E::iter().map(|value| value.as_ref().to_owned()).collect::<Vec<_>>().join(", ")
}

impl Catalog {
    /// Every record of a category, in dataset order.
    #[must_use]
    pub fn records(&self, category: Category) -> &[Record] {
        self.dataset.records(category)
    }

    /// Applies `search`, then `index`, then `page`, then `max`.
    ///
    /// # Errors
    /// Returns [`CatalogError::NotFound`] when `index` is past the end of the filtered list.
    pub fn list(&self, category: Category, query: &ListQuery) -> Result<Listing, CatalogError> {
        let records = self.records(category);
        let matched: Vec<&Record> = match query.needle() {
            Some(needle) => records
                .iter()
                .filter(|record| record.name().to_lowercase().contains(&needle))
                .collect(),
            None => records.iter().collect(),
        };

        if let Some(index) = query.index {
            return matched.get(index).map(|record| Listing::One((*record).clone())).ok_or_else(
                || CatalogError::NotFound {
                    message: format!(
                        "{category} index {index} is out of range ({} records)",
                        matched.len()
                    )
                    .into(),
                    context: None,
                },
            );
        }

        let selected: Vec<Record> = match (query.page, query.max) {
            (Some(page), max) => {
                let size = max.unwrap_or(self.default_page_size).get();
                let start = (page.get() - 1).saturating_mul(size);
                matched.into_iter().skip(start).take(size).cloned().collect()
            }
            (None, Some(max)) => matched.into_iter().take(max.get()).cloned().collect(),
            (None, None) => matched.into_iter().cloned().collect(),
        };

        Ok(Listing::Many(selected))
    }

    /// One record drawn uniformly from the category.
    ///
    /// # Errors
    /// Returns [`CatalogError::NotFound`] if the category holds no records.
    pub fn random<R: Rng + ?Sized>(
        &self,
        category: Category,
        rng: &mut R,
    ) -> Result<Record, CatalogError> {
        self.records(category).choose(rng).cloned().ok_or_else(|| CatalogError::NotFound {
            message: format!("{category} has no records").into(),
            context: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, Sources};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn catalog() -> Catalog {
        Catalog::from_dataset(Dataset::embedded().expect("embedded data"), NonZeroUsize::MIN)
    }

    fn names(listing: &Listing) -> Vec<&str> {
        listing.records().iter().map(Record::name).collect()
    }

    #[test]
    fn resolves_known_segments_only() {
        assert_eq!(resolve_language("uk").expect("uk"), Language::Uk);
        assert_eq!(resolve_category("spells").expect("spells"), Category::Spells);

        let err = resolve_language("de").expect_err("de is not served");
        assert!(matches!(err, CatalogError::UnknownLanguage { .. }));
        assert!(err.to_string().contains("en, es, fr, it, pt, uk"));

        assert!(matches!(resolve_category("Books"), Err(CatalogError::UnknownCategory { .. })));
        assert!(matches!(resolve_category("wands"), Err(CatalogError::UnknownCategory { .. })));
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let catalog = catalog();
        let listing = catalog.list(Category::Houses, &ListQuery::default()).expect("list");
        assert_eq!(names(&listing), ["Gryffindor", "Hufflepuff", "Ravenclaw", "Slytherin"]);
    }

    #[test]
    fn search_is_case_insensitive_and_blank_is_ignored() {
        let catalog = catalog();
        let listing = catalog.list(Category::Houses, &ListQuery::search("CLAW")).expect("list");
        assert_eq!(names(&listing), ["Ravenclaw"]);

        let blank = catalog.list(Category::Houses, &ListQuery::search("   ")).expect("list");
        assert_eq!(blank.len(), 4);

        let none = catalog.list(Category::Houses, &ListQuery::search("durmstrang")).expect("list");
        assert!(none.is_empty());
    }

    #[test]
    fn index_selects_within_filtered_list() {
        let catalog = catalog();
        let query = ListQuery { search: Some("in".into()), index: Some(1), ..ListQuery::default() };
        let listing = catalog.list(Category::Houses, &query).expect("list");
        assert_eq!(listing, Listing::One(catalog.records(Category::Houses)[3].clone()));

        let query = ListQuery { index: Some(4), ..ListQuery::default() };
        assert!(matches!(
            catalog.list(Category::Houses, &query),
            Err(CatalogError::NotFound { .. })
        ));
    }

    #[test]
    fn page_uses_max_or_default_size() {
        let catalog = catalog();
        let page = |page, max| ListQuery {
            page: NonZeroUsize::new(page),
            max: NonZeroUsize::new(max),
            ..ListQuery::default()
        };

        let second = catalog.list(Category::Houses, &page(2, 3)).expect("list");
        assert_eq!(names(&second), ["Slytherin"]);

        // default page size is one in this fixture
        let third = catalog.list(Category::Houses, &page(3, 0)).expect("list");
        assert_eq!(names(&third), ["Ravenclaw"]);

        let past_end = catalog.list(Category::Houses, &page(9, 2)).expect("list");
        assert!(past_end.is_empty());
    }

    #[test]
    fn max_truncates() {
        let catalog = catalog();
        let query = ListQuery { max: NonZeroUsize::new(2), ..ListQuery::default() };
        assert_eq!(
            names(&catalog.list(Category::Houses, &query).expect("list")),
            ["Gryffindor", "Hufflepuff"]
        );
    }

    #[test]
    fn random_is_deterministic_under_a_seed() {
        let catalog = catalog();
        let first = catalog.random(Category::Spells, &mut StdRng::seed_from_u64(7)).expect("pick");
        let again = catalog.random(Category::Spells, &mut StdRng::seed_from_u64(7)).expect("pick");
        assert_eq!(first, again);
        assert!(catalog.records(Category::Spells).contains(&first));
    }

    #[test]
    fn random_from_empty_category_is_not_found() {
        let empty = Dataset::parse(Sources {
            books: "[]",
            characters: "[]",
            houses: "[]",
            spells: "[]",
        })
        .expect("empty data");
        let catalog = Catalog::from_dataset(empty, NonZeroUsize::MIN);
        assert!(matches!(
            catalog.random(Category::Books, &mut StdRng::seed_from_u64(1)),
            Err(CatalogError::NotFound { .. })
        ));
    }
}
