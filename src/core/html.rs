// src/core/html.rs
//
// Thin helpers over `scraper`: compile selectors without panicking, read
// element text the way the pages render it, and hand out repeated matches by
// position.

use scraper::{ElementRef, Html, Selector};

use crate::error::ScrapeError;

pub fn selector(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector {
        css: s!(css),
        reason: e.to_string(),
    })
}

/// All descendant text nodes, concatenated, untrimmed.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Text of every match, in document order.
pub fn texts(doc: &Html, sel: &Selector) -> Vec<String> {
    doc.select(sel).map(text_of).collect()
}

/// Text of the last match, or "" when nothing matches.
/// Single-value fields read this way: a later duplicate overwrites an earlier one.
pub fn last_text(doc: &Html, sel: &Selector) -> String {
    doc.select(sel).last().map(text_of).unwrap_or_default()
}

/// Matches of one unlabeled, repeated pattern, in document order.
///
/// Index `i` is the `i`-th occurrence on the page. Callers give each index a
/// meaning (e.g. `0 = low`, `1 = high`) and call [`Ordered::split`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ordered {
    label: &'static str,
    values: Vec<String>,
}

impl Ordered {
    pub fn collect(doc: &Html, sel: &Selector, label: &'static str) -> Self {
        Self { label, values: texts(doc, sel) }
    }

    pub fn from_values(label: &'static str, values: Vec<String>) -> Self {
        Self { label, values }
    }

    /// First `N` matches into `N` slots; missing slots are "".
    /// Returns the number of surplus matches, which are dropped and logged.
    pub fn split<const N: usize>(self) -> ([String; N], usize) {
        let (want, found) = (N, self.values.len());
        let extra = found.saturating_sub(want);
        if extra > 0 {
            logw!(
                "{}: expected at most {want} matches, found {found}; ignoring the last {extra}",
                self.label
            );
        } else if found < want {
            logd!("{}: {found} of {want} matches, trailing fields left empty", self.label);
        }
        let mut it = self.values.into_iter();
        let slots = std::array::from_fn(|_| it.next().unwrap_or_default());
        (slots, extra)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(body: &str) -> Html {
        Html::parse_document(&format!("<html><body>{body}</body></html>"))
    }

    #[test]
    fn text_concatenates_nested_nodes() {
        let d = doc(r#"<span class="x"><span class="icon"></span>2.91<!-- -->%</span>"#);
        let sel = selector("span.x").unwrap();
        assert_eq!(last_text(&d, &sel), "2.91%");
    }

    #[test]
    fn last_text_prefers_later_match() {
        let d = doc(r#"<p class="v">one</p><p class="v">two</p>"#);
        assert_eq!(last_text(&d, &selector("p.v").unwrap()), "two");
        assert_eq!(last_text(&d, &selector("p.none").unwrap()), "");
    }

    #[test]
    fn split_pads_and_counts_surplus() {
        let ([a, b, c], extra) =
            Ordered::from_values("t", vec![s!("x")]).split::<3>();
        assert_eq!((a.as_str(), b.as_str(), c.as_str(), extra), ("x", "", "", 0));

        let ([a, b], extra) =
            Ordered::from_values("t", vec![s!("1"), s!("2"), s!("3")]).split::<2>();
        assert_eq!((a.as_str(), b.as_str(), extra), ("1", "2", 1));
    }

    #[test]
    fn bad_selector_is_an_error() {
        assert!(matches!(selector("div..x"), Err(ScrapeError::Selector { .. })));
    }
}
