// src/fields/genres.rs
use crate::config::consts::LINK_CLOSE;
use crate::core::sanitize::{normalize_entities, normalize_ws};

use super::push_item;

/// `<span><a ..>Drone Metal</a>, <a ..>Post-Rock</a></span>` → `"Drone Metal:Post-Rock:"`.
///
/// Every `>`-delimited token that ends in a link close contributes one item,
/// in source order, duplicates included. Text inside tags nested in the link
/// joins the label.
pub fn parse(fragment: Option<&str>) -> String {
    let mut out = s!();
    let Some(markup) = fragment else { return out };

    let mut label = s!();
    let mut in_link = false;
    for token in markup.split('>') {
        if let Some(text) = token.strip_suffix(LINK_CLOSE) {
            label.push_str(text);
            push_item(&mut out, &normalize_ws(&normalize_entities(&label)));
            label.clear();
            in_link = false;
            continue;
        }
        let (text, tag) = token.split_once('<').unwrap_or((token, ""));
        if in_link {
            label.push_str(text);
        }
        if opens_link(tag) {
            label.clear();
            in_link = true;
        }
    }
    out
}

fn opens_link(tag: &str) -> bool {
    tag.strip_prefix('a')
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
}
