use scraper::{ElementRef, Selector};

pub fn extract_text(node: ElementRef) -> String {
    node.text().collect::<String>()
}

/// Cell text with non-breaking spaces folded and the ends trimmed.
pub fn clean_text(node: ElementRef) -> String {
    extract_text(node).replace('\u{a0}', " ").trim().to_string()
}

pub fn selector(css: &str) -> anyhow::Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow::anyhow!("invalid selector {css:?}: {e:?}"))
}
