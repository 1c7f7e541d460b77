use crate::models::Product;

/// Catalog filter as the product listing uses it: an exact category match
/// combined with a case-insensitive substring search over name and
/// description. Absent fields match everything.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub query: Option<String>,
}

impl ProductFilter {
    pub fn by_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            query: None,
        }
    }

    pub fn search(query: impl Into<String>) -> Self {
        Self {
            category: None,
            query: Some(query.into()),
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        let category_ok = match &self.category {
            Some(category) => product.category == *category,
            None => true,
        };
        let query_ok = match &self.query {
            Some(query) => {
                let needle = query.to_lowercase();
                product.name.to_lowercase().contains(&needle)
                    || product.description.to_lowercase().contains(&needle)
            }
            None => true,
        };
        category_ok && query_ok
    }
}
