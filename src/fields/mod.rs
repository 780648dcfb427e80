// src/fields/mod.rs
//! Field grammars. Each parser takes the raw fragment (or `None` when the
//! locator found nothing) and yields a typed value. Missing or malformed input
//! maps to a sentinel: `""` for list fields, `None` for scalars.

pub mod descriptors;
pub mod duration;
pub mod genres;
pub mod rating;

use crate::config::consts::LIST_SEP;

/// Append one list item in the colon-terminated encoding.
pub(crate) fn push_item(out: &mut String, item: &str) {
    out.push_str(item);
    out.push(LIST_SEP);
}
