// src/core/html.rs
use log::warn;
use scraper::{ElementRef, Html, Selector};

use super::sanitize::{normalize_entities, normalize_ws};

/// Parsed page. html5ever recovers from any input, so parsing cannot fail.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(text: &str) -> Self {
        Self { html: Html::parse_document(text) }
    }

    /// First element `<tag attr="value">` (exact, case-sensitive value), or `None`.
    pub fn locate(&self, tag: &str, attr: &str, value: &str) -> Option<Fragment<'_>> {
        let sel = compile(tag, attr, value)?;
        self.html.select(&sel).next().map(Fragment)
    }
}

fn compile(tag: &str, attr: &str, value: &str) -> Option<Selector> {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    let css = format!(r#"{tag}[{attr}="{escaped}"]"#);
    match Selector::parse(&css) {
        Ok(sel) => Some(sel),
        Err(e) => {
            warn!("bad selector {css}: {e:?}");
            None
        }
    }
}

/// One located element.
#[derive(Clone, Copy)]
pub struct Fragment<'a>(ElementRef<'a>);

impl<'a> Fragment<'a> {
    /// Serialized outer markup, the input of the token grammars.
    pub fn markup(&self) -> String {
        self.0.html()
    }

    /// Serialized markup between the opening and closing tag.
    pub fn inner_markup(&self) -> String {
        self.0.inner_html()
    }

    /// Everything between the opening and closing tag, tags stripped.
    pub fn inner_text(&self) -> String {
        normalize_ws(&self.0.text().collect::<String>())
    }

    pub fn first_text(&self) -> Option<&'a str> {
        self.0.text().next()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.0.value().attr(name)
    }

    pub fn find(&self, tag: &str) -> Option<Fragment<'a>> {
        let sel = Selector::parse(tag).ok()?;
        self.0.select(&sel).next().map(Fragment)
    }
}

/// Drop `<...>` runs; an unterminated `<` swallows the rest.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&normalize_entities(&out))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <span class="avg_rating_friends">1.00</span>
          <span class="avg_rating" itemprop="ratingValue">
            4.21
          </span>
          <span class="num_ratings">from <span>2,500</span> ratings</span>
          <a class="artist" href="/artist/boris">Boris</a>
          <a class="Artist" href="/artist/other">Other</a>
          <meta itemprop="name" content="Flood &amp; More">
        </body></html>
    "#;

    #[test]
    fn locate_is_exact_on_value() {
        let doc = Document::parse(PAGE);
        let rating = doc.locate("span", "class", "avg_rating").unwrap();
        assert_eq!(rating.first_text().map(str::trim), Some("4.21"));
        assert!(doc.locate("span", "class", "avg").is_none());
        assert!(doc.locate("div", "class", "avg_rating").is_none());
    }

    #[test]
    fn locate_is_case_sensitive() {
        let doc = Document::parse(PAGE);
        assert_eq!(doc.locate("a", "class", "artist").unwrap().inner_text(), "Boris");
        assert_eq!(doc.locate("a", "class", "Artist").unwrap().inner_text(), "Other");
    }

    #[test]
    fn absent_and_unparsable_selectors_are_none() {
        let doc = Document::parse(PAGE);
        assert!(doc.locate("span", "class", "tracklist_total").is_none());
        assert!(doc.locate("span", "cl ass", "x").is_none());
    }

    #[test]
    fn quotes_in_value_do_not_break_selector() {
        let doc = Document::parse(r#"<b title='say "hi"'>ok</b>"#);
        assert_eq!(doc.locate("b", "title", r#"say "hi""#).unwrap().inner_text(), "ok");
    }

    #[test]
    fn fragment_accessors() {
        let doc = Document::parse(PAGE);
        let meta = doc.locate("meta", "itemprop", "name").unwrap();
        assert_eq!(meta.attr("content"), Some("Flood & More"));

        let count = doc.locate("span", "class", "num_ratings").unwrap();
        assert_eq!(count.first_text(), Some("from "));
        assert_eq!(count.find("span").and_then(|f| f.first_text()), Some("2,500"));
        assert_eq!(count.inner_text(), "from 2,500 ratings");
        assert!(count.markup().starts_with(r#"<span class="num_ratings">"#));
        assert_eq!(count.inner_markup(), "from <span>2,500</span> ratings");
    }

    #[test]
    fn strip_tags_drops_markup() {
        assert_eq!(strip_tags("Total length: <b>45:12</b></span>"), "Total length: 45:12");
        assert_eq!(strip_tags("a &amp; b <i"), "a & b");
    }
}
