// src/fields/descriptors.rs
use crate::core::sanitize::normalize_entities;

use super::push_item;

/// `<span class="release_pri_descriptors"> atmospheric, heavy, </span>` → `"atmospheric:heavy:"`.
///
/// The whole opening tag is the wrapper, whatever attributes it carries; the
/// body after its first `>` goes to [`parse_body`].
pub fn parse(fragment: Option<&str>) -> String {
    parse_body(fragment.and_then(|m| m.split_once('>')).map(|(_, body)| body))
}

/// Whitespace token grammar over the element body:
/// 1. text glued to the opening tag shares the wrapper's token, otherwise the
///    wrapper counts as a token of its own;
/// 2. fewer than two tokens, wrapper included → `""`;
/// 3. the last token keeps only what precedes its first `<`;
/// 4. every token ending in `,` is one item, comma stripped.
///
/// A trailing descriptor without a comma is dropped, as is every word of a
/// multi-word descriptor but the last.
pub fn parse_body(body: Option<&str>) -> String {
    let mut out = s!();
    let Some(body) = body else { return out };

    let mut tokens: Vec<&str> = body.split_whitespace().collect();
    let glued = body.starts_with(|c: char| !c.is_whitespace());
    if tokens.len() + usize::from(!glued) < 2 {
        return out;
    }

    if let Some(last) = tokens.last_mut() {
        *last = last.split('<').next().unwrap_or("");
    }

    for token in tokens {
        if let Some(item) = token.strip_suffix(',') {
            push_item(&mut out, &normalize_entities(item));
        }
    }
    out
}
