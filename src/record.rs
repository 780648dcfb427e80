// src/record.rs

/// One extracted album page. Built once by the assembler, written once, then dropped.
#[derive(Clone, Debug, PartialEq)]
pub struct AlbumRecord {
    artist: String,
    album: String,
    year: String,
    rating: Option<f64>,
    rating_count: Option<u64>,
    primary_genres: String,
    secondary_genres: String,
    descriptors: String,
    total_length: Option<String>,
}

impl AlbumRecord {
    pub const FIELD_COUNT: usize = 9;

    pub const HEADERS: [&'static str; Self::FIELD_COUNT] = [
        "Artist",
        "Album",
        "Year",
        "Rating",
        "Ratings",
        "Primary genres",
        "Secondary genres",
        "Descriptors",
        "Length",
    ];

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        artist: String,
        album: String,
        year: String,
        rating: Option<f64>,
        rating_count: Option<u64>,
        primary_genres: String,
        secondary_genres: String,
        descriptors: String,
        total_length: Option<String>,
    ) -> Self {
        Self {
            artist,
            album,
            year,
            rating,
            rating_count,
            primary_genres,
            secondary_genres,
            descriptors,
            total_length,
        }
    }

    pub fn artist(&self) -> &str { &self.artist }
    pub fn album(&self) -> &str { &self.album }
    pub fn year(&self) -> &str { &self.year }
    pub fn rating(&self) -> Option<f64> { self.rating }
    pub fn rating_count(&self) -> Option<u64> { self.rating_count }
    pub fn primary_genres(&self) -> &str { &self.primary_genres }
    pub fn secondary_genres(&self) -> &str { &self.secondary_genres }
    pub fn descriptors(&self) -> &str { &self.descriptors }
    pub fn total_length(&self) -> Option<&str> { self.total_length.as_deref() }

    /// Row cells in column order; `None` becomes an empty cell.
    pub fn to_row(&self) -> [String; Self::FIELD_COUNT] {
        [
            self.artist.clone(),
            self.album.clone(),
            self.year.clone(),
            self.rating.map(|r| r.to_string()).unwrap_or_default(),
            self.rating_count.map(|c| c.to_string()).unwrap_or_default(),
            self.primary_genres.clone(),
            self.secondary_genres.clone(),
            self.descriptors.clone(),
            self.total_length.clone().unwrap_or_default(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_renders_none_as_empty_cells() {
        let r = AlbumRecord::new(
            s!("Boris"), s!("Flood"), s!(), None, None, s!(), s!(), s!(), None,
        );
        assert_eq!(
            r.to_row(),
            ["Boris", "Flood", "", "", "", "", "", "", ""].map(String::from)
        );
    }

    #[test]
    fn row_renders_numbers_plainly() {
        let r = AlbumRecord::new(
            s!("A"), s!("B"), s!("1971"), Some(4.0), Some(12_000),
            s!("Rock:"), s!(), s!("warm:"), Some(s!("40:00")),
        );
        let row = r.to_row();
        assert_eq!(row[3], "4");
        assert_eq!(row[4], "12000");
        assert_eq!(row[8], "40:00");
    }
}
