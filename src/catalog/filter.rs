//! Search and category filtering

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{Category, Course};
use crate::error::Result;

/// Category chip selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl FromStr for CategoryFilter {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Only(s.parse()?))
        }
    }
}

/// Search text plus category selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseFilter {
    pub query: String,
    pub category: CategoryFilter,
}

impl CourseFilter {
    pub fn new(query: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            query: query.into(),
            category,
        }
    }

    /// Title contains the query (ignoring case) and the category matches
    pub fn matches(&self, course: &Course) -> bool {
        let matches_search = course
            .title
            .to_lowercase()
            .contains(&self.query.to_lowercase());
        let matches_category = match self.category {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => course.category == category,
        };
        matches_search && matches_category
    }
}
