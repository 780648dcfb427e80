// src/fields/duration.rs
use crate::config::consts::{DURATION_LABEL, DURATION_TRAILER};
use crate::core::html::strip_tags;
use crate::error::FieldError;

/// `"Total length: 45:12</span>"` (or the full `<span ...>` element) → `Some("45:12")`.
pub fn parse(fragment: Option<&str>) -> Option<String> {
    extract(fragment).ok()
}

pub(crate) fn extract(fragment: Option<&str>) -> Result<String, FieldError> {
    let markup = fragment.ok_or(FieldError::Missing)?;

    // Value segment: past the opening tag, if the fragment carries one.
    let value = match markup.trim_start().strip_prefix('<') {
        Some(tagged) => tagged.split_once('>').map_or("", |(_, after)| after),
        None => markup,
    };
    let value = value.split(DURATION_TRAILER).next().unwrap_or("");
    let text = strip_tags(value);
    let text = text.strip_prefix(DURATION_LABEL).unwrap_or(&text).trim();

    if is_duration(text) {
        Ok(s!(text))
    } else {
        Err(FieldError::Malformed(format!("not a duration: {text:?}")))
    }
}

/// `m:ss`, `mm:ss` or `h:mm:ss`; every group after the first is two digits.
fn is_duration(s: &str) -> bool {
    let groups: Vec<&str> = s.split(':').collect();
    if !(2..=3).contains(&groups.len()) {
        return false;
    }
    groups.iter().enumerate().all(|(i, g)| {
        let digits = !g.is_empty() && g.bytes().all(|b| b.is_ascii_digit());
        digits && (i == 0 || g.len() == 2)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labeled_value() {
        assert_eq!(parse(Some("Total length: 45:12</span>")).as_deref(), Some("45:12"));
    }

    #[test]
    fn whole_element() {
        let m = r#"<span class="tracklist_total">Total length: 70:00</span>"#;
        assert_eq!(parse(Some(m)).as_deref(), Some("70:00"));
        let m = "<span class=\"tracklist_total\">\n  Total length: 1:02:33\n</span>";
        assert_eq!(parse(Some(m)).as_deref(), Some("1:02:33"));
    }

    #[test]
    fn nested_markup_in_value() {
        let m = r#"<span class="tracklist_total">Total length: <b>38:05</b></span>"#;
        assert_eq!(parse(Some(m)).as_deref(), Some("38:05"));
    }

    #[test]
    fn label_is_optional() {
        assert_eq!(parse(Some("<span>12:00</span>")).as_deref(), Some("12:00"));
    }

    #[test]
    fn absent_is_none() {
        assert_eq!(parse(None), None);
        assert_eq!(extract(None), Err(FieldError::Missing));
    }

    #[test]
    fn wrong_shape_is_none() {
        assert_eq!(parse(Some("")), None);
        assert_eq!(parse(Some("Total length: </span>")), None);
        assert_eq!(parse(Some("Total length: soon</span>")), None);
        assert_eq!(parse(Some("Total length: 45:1</span>")), None);
        assert_eq!(parse(Some("Total length: 1:2:3:4</span>")), None);
        assert_eq!(parse(Some("<span class=\"tracklist_total\"")), None);
    }
}
