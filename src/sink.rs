// src/sink.rs
use std::{
    fs::{File, OpenOptions},
    io::{Read, Seek, SeekFrom, Write},
    path::{Path, PathBuf},
};

use csv::{QuoteStyle, WriterBuilder};
use log::{debug, warn};

use crate::config::options::{ExportFormat, ExportOptions};
use crate::error::SinkError;
use crate::record::AlbumRecord;

/// Append-only row destination. Existing content is never truncated.
///
/// Each row is encoded in memory and handed to the file in one write. The
/// handle is kept between rows; after any failure it is dropped and the next
/// `append` reopens the file, closing off whatever partial line is left.
pub struct TabularSink {
    path: PathBuf,
    format: ExportFormat,
    include_headers: bool,
    file: Option<File>,
}

impl TabularSink {
    /// Open `path` for appending (creating it if missing). Headers are written
    /// only when requested and the file starts out empty.
    pub fn open(path: &Path, export: &ExportOptions) -> Result<Self, SinkError> {
        let mut sink = Self {
            path: path.to_path_buf(),
            format: export.format,
            include_headers: export.include_headers,
            file: None,
        };
        sink.connect()?;
        Ok(sink)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write one record as a row and flush it before returning.
    pub fn append(&mut self, record: &AlbumRecord) -> Result<(), SinkError> {
        let line = self.encode(record.to_row())?;
        let result = self.write_line(&line);
        if result.is_err() {
            self.file = None;
        }
        result
    }

    fn encode<I, T>(&self, row: I) -> Result<Vec<u8>, SinkError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        let mut enc = WriterBuilder::new()
            .delimiter(self.format.delim())
            .quote_style(QuoteStyle::Necessary)
            .from_writer(Vec::new());
        enc.write_record(row).map_err(|source| self.write_err(source))?;
        enc.into_inner()
            .map_err(|e| self.write_err(e.into_error().into()))
    }

    fn write_line(&mut self, line: &[u8]) -> Result<(), SinkError> {
        let path = self.path.clone();
        let file = self.connect()?;
        file.write_all(line).map_err(|source| SinkError::Write {
            path: path.clone(),
            source: source.into(),
        })?;
        file.flush().map_err(|source| SinkError::Flush { path, source })
    }

    fn connect(&mut self) -> Result<&mut File, SinkError> {
        let file = match self.file.take() {
            Some(f) => f,
            None => self.open_file()?,
        };
        Ok(self.file.insert(file))
    }

    fn open_file(&self) -> Result<File, SinkError> {
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.open_err(source))?;
        let len = file.metadata().map_err(|source| self.open_err(source))?.len();

        if len == 0 {
            if self.include_headers {
                debug!("writing headers to {}", self.path.display());
                let headers = self.encode(AlbumRecord::HEADERS)?;
                file.write_all(&headers)
                    .map_err(|source| self.write_err(source.into()))?;
            }
            return Ok(file);
        }

        debug!("appending to existing {}", self.path.display());
        if !ends_with_newline(&mut file).map_err(|source| self.open_err(source))? {
            warn!("{}: closing off a partial last line", self.path.display());
            file.write_all(b"\n").map_err(|source| self.write_err(source.into()))?;
        }
        Ok(file)
    }

    fn write_err(&self, source: csv::Error) -> SinkError {
        SinkError::Write { path: self.path.clone(), source }
    }

    fn open_err(&self, source: std::io::Error) -> SinkError {
        SinkError::Open { path: self.path.clone(), source }
    }
}

/// Appends ignore the cursor, so seeking to peek at the tail is harmless.
fn ends_with_newline(file: &mut File) -> std::io::Result<bool> {
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
