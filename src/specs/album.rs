// src/specs/album.rs
//! Album page: where each field lives and how it is read.
//!
//! Column shape is fixed (see `AlbumRecord::HEADERS`). Every lookup tolerates
//! absence; a missing or malformed fragment becomes that field's sentinel and
//! is logged at debug level only.

use std::path::Path;

use log::debug;

use crate::core::html::{Document, Fragment};
use crate::core::sanitize::{first_year, last_year, normalize_ws};
use crate::error::{DocumentError, FieldError};
use crate::fields::{descriptors, duration, genres, rating};
use crate::record::AlbumRecord;
use crate::source::read_document;

/// `tag[attr="value"]`, matched exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSelector {
    pub field: &'static str,
    pub tag: &'static str,
    pub attr: &'static str,
    pub value: &'static str,
}

const fn sel(field: &'static str, tag: &'static str, attr: &'static str, value: &'static str) -> FieldSelector {
    FieldSelector { field, tag, attr, value }
}

pub const ARTIST: FieldSelector = sel("artist", "a", "class", "artist");
pub const ALBUM: FieldSelector = sel("album", "meta", "itemprop", "name");
pub const RELEASE: FieldSelector = sel("year", "div", "class", "issue_info_bottom");
pub const RATING: FieldSelector = sel("rating", "span", "class", "avg_rating");
pub const COUNT: FieldSelector = sel("rating_count", "span", "class", "num_ratings");
pub const PRIMARY_GENRES: FieldSelector = sel("primary_genres", "span", "class", "release_pri_genres");
pub const SECONDARY_GENRES: FieldSelector = sel("secondary_genres", "span", "class", "release_sec_genres");
pub const DESCRIPTORS: FieldSelector = sel("descriptors", "span", "class", "release_pri_descriptors");
pub const LENGTH: FieldSelector = sel("total_length", "span", "class", "tracklist_total");

/// Lookup order, which is also column order.
pub const SELECTORS: [FieldSelector; AlbumRecord::FIELD_COUNT] = [
    ARTIST, ALBUM, RELEASE, RATING, COUNT, PRIMARY_GENRES, SECONDARY_GENRES, DESCRIPTORS, LENGTH,
];

/// Read one saved page and assemble it. Only an unreadable file is an error.
pub fn assemble_file(path: &Path) -> Result<AlbumRecord, DocumentError> {
    let text = read_document(path)?;
    Ok(assemble(&text))
}

/// Assemble one record from page text. Never fails.
pub fn assemble(text: &str) -> AlbumRecord {
    let doc = Document::parse(text);
    let find = |s: &FieldSelector| doc.locate(s.tag, s.attr, s.value);

    let artist = text_or_empty(&ARTIST, find(&ARTIST).map(|f| f.inner_text()));
    let album = text_or_empty(&ALBUM, find(&ALBUM).map(|f| album_title(&f)));
    let year = text_or_empty(&RELEASE, release_year(find(&RELEASE)));

    let avg = find(&RATING);
    let rating = sentinel(&RATING, rating::rating(avg.and_then(|f| f.first_text())));

    let count = find(&COUNT);
    let nested = count.map(|f| f.find("span").unwrap_or(f));
    let rating_count = sentinel(&COUNT, rating::count(nested.and_then(|f| f.first_text())));

    let markup = |s: &FieldSelector| find(s).map(|f| f.markup());
    let primary_genres = genres::parse(markup(&PRIMARY_GENRES).as_deref());
    let secondary_genres = genres::parse(markup(&SECONDARY_GENRES).as_deref());
    let body = find(&DESCRIPTORS).map(|f| f.inner_markup());
    let descriptors = descriptors::parse_body(body.as_deref());
    let total_length = sentinel(&LENGTH, duration::extract(markup(&LENGTH).as_deref()));

    AlbumRecord::new(
        artist,
        album,
        year,
        rating,
        rating_count,
        primary_genres,
        secondary_genres,
        descriptors,
        total_length,
    )
}

fn album_title(f: &Fragment<'_>) -> String {
    match f.attr("content") {
        Some(content) => normalize_ws(content),
        None => f.inner_text(),
    }
}

/// The release element also carries label and catalog number, so the date
/// child wins: its `title` (the full date), then its text. Without one, the
/// first titled child, then the first four-digit run of the text.
fn release_year(f: Option<Fragment<'_>>) -> Option<String> {
    let f = f?;
    if let Some(date) = f.find(".issue_year") {
        let year = date.attr("title").and_then(last_year).map(str::to_owned);
        if let Some(year) = year.or_else(|| first_year(&date.inner_text()).map(str::to_owned)) {
            return Some(year);
        }
    }
    if let Some(year) = f.find("[title]").and_then(|t| t.attr("title")).and_then(last_year) {
        return Some(s!(year));
    }
    first_year(&f.inner_text()).map(str::to_owned)
}

fn text_or_empty(s: &FieldSelector, value: Option<String>) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => {
            debug!("{}: {}", s.field, FieldError::Missing);
            s!()
        }
    }
}

fn sentinel<T>(s: &FieldSelector, value: Result<T, FieldError>) -> Option<T> {
    value.map_err(|e| debug!("{}: {e}", s.field)).ok()
}
