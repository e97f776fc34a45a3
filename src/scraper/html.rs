// html.rs
use scraper::{ElementRef, Html, Selector};
use tracing::warn;

/// The two lookups listing extraction needs from an HTML tree.
///
/// Extraction code is written against this trait only, so swapping the parser
/// means one new impl, not a rewrite of the field rules.
pub trait Markup: Sized {
    /// Text of the first element matching `selector`, with every text node
    /// trimmed and the pieces joined. `None` when nothing matches.
    fn select_first(&self, selector: &str) -> Option<String>;

    /// Every element matching `selector`, in document order.
    fn select_all(&self, selector: &str) -> Vec<Self>;
}

/// A parsed listing-index page.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }
}

impl<'a> Markup for ElementRef<'a> {
    fn select_first(&self, selector: &str) -> Option<String> {
        let selector = parse_selector(selector)?;
        self.select(&selector).next().map(stripped_text)
    }

    fn select_all(&self, selector: &str) -> Vec<Self> {
        match parse_selector(selector) {
            Some(selector) => self.select(&selector).collect(),
            None => Vec::new(),
        }
    }
}

fn parse_selector(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!(selector, error = ?e, "Unparsable selector, treating as no match");
            None
        }
    }
}

fn stripped_text(element: ElementRef<'_>) -> String {
    element.text().map(str::trim).collect()
}
