//! Listing filters
//!
//! Built from raw query-string values so an HTTP handler can pass its
//! `?category=&search=` parameters through unchanged.

use serde::Deserialize;

use crate::model::{Category, Product};

/// Sentinel category meaning "no category filter"
pub const ALL_CATEGORIES: &str = "all";

/// Category restriction of a listing query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No restriction
    #[default]
    Any,

    /// Only listings in this category
    Only(Category),

    /// A category name that no listing can carry; matches nothing
    Unmatched,
}

impl CategoryFilter {
    /// Absent, empty and `"all"` mean no restriction; names are case-sensitive
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") | Some(ALL_CATEGORIES) => CategoryFilter::Any,
            Some(name) => match name.parse::<Category>() {
                Ok(category) => CategoryFilter::Only(category),
                Err(_) => CategoryFilter::Unmatched,
            },
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::Any => true,
            CategoryFilter::Only(wanted) => *wanted == category,
            CategoryFilter::Unmatched => false,
        }
    }
}

/// Raw listing parameters as they arrive from a query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductParams {
    pub category: Option<String>,
    pub search: Option<String>,
}

/// Filter for `Storage::get_products`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    category: CategoryFilter,
    /// Lower-cased search term; `None` when absent or empty
    search: Option<String>,
}

impl ProductFilter {
    /// Filter that keeps every active listing
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_params(category: Option<&str>, search: Option<&str>) -> Self {
        let mut filter = Self::new();
        filter.category = CategoryFilter::parse(category);
        if let Some(term) = search {
            filter = filter.with_search(term);
        }
        filter
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = CategoryFilter::parse(Some(category));
        self
    }

    pub fn with_search(mut self, term: &str) -> Self {
        self.search = if term.is_empty() {
            None
        } else {
            Some(term.to_lowercase())
        };
        self
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Active, in the requested category, and matching the search term
    pub fn matches(&self, product: &Product) -> bool {
        if !product.is_active || !self.category.matches(product.category) {
            return false;
        }

        match &self.search {
            None => true,
            Some(term) => {
                product.title.to_lowercase().contains(term.as_str())
                    || product.description.to_lowercase().contains(term.as_str())
            }
        }
    }
}

impl From<&ProductParams> for ProductFilter {
    fn from(params: &ProductParams) -> Self {
        ProductFilter::from_params(params.category.as_deref(), params.search.as_deref())
    }
}
