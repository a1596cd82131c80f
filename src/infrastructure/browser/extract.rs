use crate::domain::error::{AppError, Result};
use crate::infrastructure::response::clean_review_text;
use scraper::{ElementRef, Html, Selector};

/// Elements whose text content is never rendered.
const HIDDEN_ELEMENTS: [&str; 3] = ["script", "style", "noscript"];

/// Concatenates the rendered text nodes under `el`, as the browser shows them.
fn visible_text(el: ElementRef<'_>) -> String {
    el.descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node
                .parent()
                .and_then(|parent| parent.value().as_element())
                .is_some_and(|parent| HIDDEN_ELEMENTS.contains(&parent.name()));
            (!hidden).then_some(&**text)
        })
        .collect()
}

/// Visible text of the first `max` elements carrying `marker` as a class.
/// Elements whose text is blank are skipped and do not count.
pub fn extract_reviews(html: &str, marker: &str, max: usize) -> Result<Vec<String>> {
    let selector = Selector::parse(&format!(".{}", marker))
        .map_err(|e| AppError::ParseError(format!("Invalid review marker {}: {:?}", marker, e)))?;

    let document = Html::parse_document(html);
    let reviews = document
        .select(&selector)
        .map(|el| clean_review_text(&visible_text(el)))
        .filter(|text| !text.is_empty())
        .take(max)
        .collect();

    Ok(reviews)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKER: &str = "comment__09f24__D0cxf";

    fn page(count: usize) -> String {
        let items: String = (0..count)
            .map(|i| {
                format!(
                    r#"<li><p class="{} extra"><span lang="en">Review <b>{}</b></span></p></li>"#,
                    MARKER, i
                )
            })
            .collect();
        format!("<html><body><ul>{}</ul></body></html>", items)
    }

    #[test]
    fn test_extracts_marked_elements_in_order() {
        let reviews = extract_reviews(&page(3), MARKER, 10).unwrap();
        assert_eq!(reviews, vec!["Review 0", "Review 1", "Review 2"]);
    }

    #[test]
    fn test_takes_at_most_max() {
        let reviews = extract_reviews(&page(14), MARKER, 10).unwrap();
        assert_eq!(reviews.len(), 10);
        assert_eq!(reviews[9], "Review 9");
    }

    #[test]
    fn test_missing_marker_yields_empty_list() {
        let html = "<html><body><p class=\"other\">Nothing here</p></body></html>";
        assert!(extract_reviews(html, MARKER, 10).unwrap().is_empty());
    }

    #[test]
    fn test_blank_elements_are_skipped() {
        let html = format!(
            r#"<div class="{m}">  </div><div class="{m}">Délicieux</div>"#,
            m = MARKER
        );
        assert_eq!(extract_reviews(&html, MARKER, 10).unwrap(), vec!["Délicieux"]);
    }

    #[test]
    fn test_inline_markup_does_not_split_words() {
        let html = r#"<p class="m">Tr<b>ès</b> bon<span>!</span></p>"#;
        assert_eq!(extract_reviews(html, "m", 10).unwrap(), vec!["Très bon!"]);
    }

    #[test]
    fn test_script_and_style_text_is_not_visible() {
        let html = r#"<p class="m"><script>var x=1;</script><style>.a{color:red}</style>Hidden?</p>
            <p class="m"><script>track();</script></p>"#;
        assert_eq!(extract_reviews(html, "m", 10).unwrap(), vec!["Hidden?"]);
    }

    #[test]
    fn test_invalid_marker_is_parse_error() {
        let err = extract_reviews("<html></html>", "9bad[", 10).unwrap_err();
        assert!(matches!(err, AppError::ParseError(_)));
    }
}
