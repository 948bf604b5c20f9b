use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::error::ScrapeError;
use crate::models::{FieldSelector, NOT_AVAILABLE, ProductRecord, SelectorSet};

pub fn parse_product(url: &str, html: &str, selectors: &SelectorSet) -> Result<ProductRecord, ScrapeError> {
    let doc = Html::parse_document(html);

    Ok(ProductRecord {
        name: extract_field(&doc, &selectors.name)?,
        price: extract_field(&doc, &selectors.price)?,
        detail_field: selectors.detail_field,
        detail: extract_field(&doc, &selectors.detail)?,
        url: url.to_string(),
    })
}

/// Text of the first element matching `field`, or the sentinel.
fn extract_field(doc: &Html, field: &FieldSelector) -> Result<String, ScrapeError> {
    let css = field.to_css();
    let selector = Selector::parse(&css)
        .map_err(|e| ScrapeError::Unexpected(format!("invalid selector `{css}`: {e}")))?;

    let text = doc
        .select(&selector)
        .next()
        .map(stripped_text)
        .unwrap_or_else(|| {
            debug!(selector = %css, "element not found");
            NOT_AVAILABLE.into()
        });
    Ok(text)
}

// Each text node is trimmed on its own and the pieces are joined with no separator.
fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DetailField;

    const URL: &str = "https://shop.test/item/1";

    #[test]
    fn extracts_all_generic_fields() {
        let html = r#"
            <html><body>
              <h1 class="product-title">  Blue Kettle </h1>
              <span class="product-price">
                 $24.00
              </span>
              <div class="product-availability">In stock</div>
            </body></html>"#;
        let record = parse_product(URL, html, &SelectorSet::generic()).unwrap();
        assert_eq!(record.name, "Blue Kettle");
        assert_eq!(record.price, "$24.00");
        assert_eq!(record.detail, "In stock");
        assert_eq!(record.detail_field, DetailField::Availability);
        assert_eq!(record.url, URL);
    }

    #[test]
    fn missing_elements_become_sentinel() {
        let html = r#"<h1 class="product-title">Only a name</h1>"#;
        let record = parse_product(URL, html, &SelectorSet::generic()).unwrap();
        assert_eq!(record.name, "Only a name");
        assert_eq!(record.price, NOT_AVAILABLE);
        assert_eq!(record.detail, NOT_AVAILABLE);
    }

    #[test]
    fn first_match_in_document_order_wins() {
        let html = r#"
            <span class="product-price">$1</span>
            <span class="product-price">$2</span>"#;
        let record = parse_product(URL, html, &SelectorSet::generic()).unwrap();
        assert_eq!(record.price, "$1");
    }

    #[test]
    fn tag_must_match_as_well_as_class() {
        let html = r#"<div class="product-title">Not a heading</div>"#;
        let record = parse_product(URL, html, &SelectorSet::generic()).unwrap();
        assert_eq!(record.name, NOT_AVAILABLE);
    }

    #[test]
    fn nested_text_is_stripped_per_fragment() {
        let html = r#"<p class="description">
              Fast laptop
              <b> 16GB </b>
            </p>"#;
        let record = parse_product(URL, html, &SelectorSet::webscraper()).unwrap();
        assert_eq!(record.detail, "Fast laptop16GB");
    }

    #[test]
    fn empty_element_is_not_sentinel() {
        let html = r#"<h4 class="pull-right price">   </h4>"#;
        let record = parse_product(URL, html, &SelectorSet::webscraper()).unwrap();
        assert_eq!(record.price, "");
    }

    #[test]
    fn webscraper_fixture_page() {
        let html = r#"
            <div class="caption">
              <h4 class="pull-right price">$9.99</h4>
              <h4 class="title card-title">Product X</h4>
            </div>"#;
        let record = parse_product(URL, html, &SelectorSet::webscraper()).unwrap();
        assert_eq!(record.name, "Product X");
        assert_eq!(record.price, "$9.99");
        assert_eq!(record.detail, NOT_AVAILABLE);
    }

    #[test]
    fn multi_class_match_ignores_reordered_or_extra_classes() {
        let html = r#"
            <h4 class="card-title title featured">Decoy</h4>
            <h4 class="price pull-right">$0.01</h4>
            <h4 class="title card-title">Product X</h4>
            <h4 class="pull-right price">$9.99</h4>"#;
        let record = parse_product(URL, html, &SelectorSet::webscraper()).unwrap();
        assert_eq!(record.name, "Product X");
        assert_eq!(record.price, "$9.99");
    }

    #[test]
    fn single_class_matches_among_other_classes() {
        let html = r#"<p class="lead description small">Sturdy</p>"#;
        let record = parse_product(URL, html, &SelectorSet::webscraper()).unwrap();
        assert_eq!(record.detail, "Sturdy");
    }

    #[test]
    fn invalid_class_is_unexpected_error() {
        let mut selectors = SelectorSet::generic();
        selectors.price = FieldSelector::new("span", "9lives");
        let err = parse_product(URL, "<p>hi</p>", &selectors).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::UnexpectedError);
    }
}
