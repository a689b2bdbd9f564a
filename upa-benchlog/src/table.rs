//! Minimal CSV tables
//!
//! Fields are quoted only when they contain a comma, a quote or a line break.
//! Config strings are full of commas, so most `configuration` cells end up
//! quoted.

use crate::error::BenchLogError;
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Short rows are padded with empty fields.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        debug_assert!(row.len() <= self.header.len());
        row.resize(self.header.len(), String::new());
        self.rows.push(row);
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        for record in std::iter::once(&self.header).chain(self.rows.iter()) {
            let line: Vec<Cow<'_, str>> = record.iter().map(|field| escape(field)).collect();
            out.push_str(&line.join(","));
            out.push('\n');
        }
        out
    }

    pub fn write(&self, path: &Path) -> Result<(), BenchLogError> {
        info!(path = %path.display(), rows = self.rows.len(), "writing csv");
        fs::write(path, self.to_csv()).map_err(|source| BenchLogError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
