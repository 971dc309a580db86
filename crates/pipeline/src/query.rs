//! Request model for the catalog page.
//!
//! The HTML form submits every field as a string, and an empty string means
//! "no filter". `FilterForm` captures the raw fields exactly as submitted and
//! `FilterForm::into_query` turns them into a typed `CatalogQuery` where
//! "no filter" is `None`.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Direction of the price sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// Parse the form value (`"asc"` or `"desc"`).
    ///
    /// Anything else, including the empty "Aucun tri" option, is `None`:
    /// an unrecognized sort value never falls back to a direction.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "asc" => Some(SortOrder::Ascending),
            "desc" => Some(SortOrder::Descending),
            _ => None,
        }
    }

    /// The form value for this order
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }
}

/// Parsed filters and sort order for one request.
///
/// Every field is optional and `None` means the matching stage is the
/// identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogQuery {
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort: Option<SortOrder>,
}

impl CatalogQuery {
    /// A query that applies no filter and no sort
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_min_price(mut self, min_price: f64) -> Self {
        self.min_price = Some(min_price);
        self
    }

    pub fn with_max_price(mut self, max_price: f64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    /// True when the pipeline would return its input unchanged
    pub fn is_unfiltered(&self) -> bool {
        self.category.as_deref().is_none_or(str::is_empty)
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.sort.is_none()
    }
}

/// Raw filter form fields, as posted by the page or passed in a query string.
///
/// Field names match the HTML form: `category`, `min_price`, `max_price`,
/// `sort`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterForm {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub min_price: Option<String>,
    #[serde(default)]
    pub max_price: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
}

impl FilterForm {
    /// Convert the raw fields into a typed query.
    ///
    /// ## Rules
    /// - empty category ⇒ no category filter (the category itself is
    ///   compared verbatim, so it is not trimmed)
    /// - a price bound that is empty, not a number, negative or not finite
    ///   ⇒ that bound is absent
    /// - a sort value other than `asc`/`desc` ⇒ no sort
    pub fn into_query(self) -> CatalogQuery {
        CatalogQuery {
            category: self.category.filter(|c| !c.is_empty()),
            min_price: self.min_price.as_deref().and_then(|v| parse_price("min_price", v)),
            max_price: self.max_price.as_deref().and_then(|v| parse_price("max_price", v)),
            sort: self.sort.as_deref().and_then(SortOrder::parse),
        }
    }
}

/// Parse one price bound, treating anything unusable as absent
fn parse_price(field: &str, raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Some(value),
        _ => {
            debug!("Ignoring invalid {} value: {:?}", field, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(category: &str, min: &str, max: &str, sort: &str) -> FilterForm {
        FilterForm {
            category: Some(category.to_string()),
            min_price: Some(min.to_string()),
            max_price: Some(max.to_string()),
            sort: Some(sort.to_string()),
        }
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!(SortOrder::parse("asc"), Some(SortOrder::Ascending));
        assert_eq!(SortOrder::parse("desc"), Some(SortOrder::Descending));
        assert_eq!(SortOrder::parse(""), None);
        assert_eq!(SortOrder::parse("ASC"), None);
        assert_eq!(SortOrder::parse("price"), None);
        assert_eq!(SortOrder::Descending.as_str(), "desc");
    }

    #[test]
    fn test_empty_form_is_unfiltered() {
        let query = form("", "", "", "").into_query();
        assert_eq!(query, CatalogQuery::new());
        assert!(query.is_unfiltered());

        let query = FilterForm::default().into_query();
        assert!(query.is_unfiltered());
    }

    #[test]
    fn test_full_form() {
        let query = form("jewelery", "10", "99.5", "desc").into_query();

        assert_eq!(query.category.as_deref(), Some("jewelery"));
        assert_eq!(query.min_price, Some(10.0));
        assert_eq!(query.max_price, Some(99.5));
        assert_eq!(query.sort, Some(SortOrder::Descending));
        assert!(!query.is_unfiltered());
    }

    #[test]
    fn test_invalid_prices_are_absent() {
        assert_eq!(form("", "abc", "-3", "").into_query().min_price, None);
        assert_eq!(form("", "abc", "-3", "").into_query().max_price, None);
        assert_eq!(form("", "inf", "NaN", "").into_query().min_price, None);
        assert_eq!(form("", "inf", "NaN", "").into_query().max_price, None);
        assert_eq!(form("", " 12 ", "0", "").into_query().min_price, Some(12.0));
        assert_eq!(form("", " 12 ", "0", "").into_query().max_price, Some(0.0));
    }

    #[test]
    fn test_category_not_trimmed() {
        let query = form(" a", "", "", "").into_query();
        assert_eq!(query.category.as_deref(), Some(" a"));
    }

    #[test]
    fn test_builder() {
        let query = CatalogQuery::new()
            .with_category("a")
            .with_min_price(6.0)
            .with_max_price(15.0)
            .with_sort(SortOrder::Ascending);

        assert_eq!(query.category.as_deref(), Some("a"));
        assert_eq!(query.min_price, Some(6.0));
        assert_eq!(query.max_price, Some(15.0));
        assert_eq!(query.sort, Some(SortOrder::Ascending));
    }
}
