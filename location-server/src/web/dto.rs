//! Data transfer objects for web responses.
//!
//! Search requests and responses use [`crate::search::LocationQuery`] and
//! [`crate::search::SearchResponse`] directly.

use serde::Serialize;

use crate::gazetteer::SearchCategory;

/// A category in the category listing.
#[derive(Debug, Serialize)]
pub struct CategoryResult {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

impl From<&SearchCategory> for CategoryResult {
    fn from(c: &SearchCategory) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
        }
    }
}

/// Response listing all categories.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryResult>,
}
