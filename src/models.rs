use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{ErrorKind, ScrapeError};

/// Substituted for any field whose element is missing from the page.
pub const NOT_AVAILABLE: &str = "N/A";

/// A tag name plus one or more space-separated class names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSelector {
    pub tag: String,
    pub class: String,
}

impl FieldSelector {
    pub fn new(tag: &str, class: &str) -> Self {
        Self {
            tag: tag.to_string(),
            class: class.to_string(),
        }
    }

    /// CSS form. A single class matches any of the element's classes
    /// (`p.description`); several classes must equal the whole attribute
    /// (`h4[class="title card-title"]`).
    pub fn to_css(&self) -> String {
        let class = self.class.trim();
        if class.contains(char::is_whitespace) {
            let quoted = class.replace('\\', "\\\\").replace('"', "\\\"");
            format!("{}[class=\"{}\"]", self.tag, quoted)
        } else {
            format!("{}.{}", self.tag, class)
        }
    }
}

/// Which key the third field is published under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailField {
    Availability,
    Description,
}

impl DetailField {
    pub fn key(self) -> &'static str {
        match self {
            DetailField::Availability => "availability",
            DetailField::Description => "description",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorSet {
    pub name: FieldSelector,
    pub price: FieldSelector,
    pub detail: FieldSelector,
    pub detail_field: DetailField,
}

impl SelectorSet {
    /// Placeholder markup for a typical storefront.
    pub fn generic() -> Self {
        Self {
            name: FieldSelector::new("h1", "product-title"),
            price: FieldSelector::new("span", "product-price"),
            detail: FieldSelector::new("div", "product-availability"),
            detail_field: DetailField::Availability,
        }
    }

    /// Markup of the webscraper.io e-commerce test site.
    pub fn webscraper() -> Self {
        Self {
            name: FieldSelector::new("h4", "title card-title"),
            price: FieldSelector::new("h4", "pull-right price"),
            detail: FieldSelector::new("p", "description"),
            detail_field: DetailField::Description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    pub name: String,
    pub price: String,
    pub detail_field: DetailField,
    pub detail: String,
    pub url: String,
}

impl Serialize for ProductRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("price", &self.price)?;
        map.serialize_entry(self.detail_field.key(), &self.detail)?;
        map.serialize_entry("url", &self.url)?;
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ErrorRecord {
    #[serde(skip_serializing)]
    pub kind: ErrorKind,
    pub error: String,
}

impl From<&ScrapeError> for ErrorRecord {
    fn from(err: &ScrapeError) -> Self {
        Self {
            kind: err.kind(),
            error: err.to_string(),
        }
    }
}

/// What a caller sees: one record or the other, never both.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum ScrapeOutcome {
    Product(ProductRecord),
    Error(ErrorRecord),
}

impl From<Result<ProductRecord, ScrapeError>> for ScrapeOutcome {
    fn from(result: Result<ProductRecord, ScrapeError>) -> Self {
        match result {
            Ok(product) => ScrapeOutcome::Product(product),
            Err(err) => ScrapeOutcome::Error(ErrorRecord::from(&err)),
        }
    }
}
