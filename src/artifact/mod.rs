//! Tabular export artifact.
//!
//! A [`Sheet`] holds the rows for one resource file: header, base rows
//! (comments, plural groups, keys) and one column per merged locale. Sheets
//! are format-agnostic; a [`SheetWriter`] serializes them.
//!
//! ## Module Structure
//!
//! - `csv_writer`: CSV writer (one file per sheet)

pub mod csv_writer;

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::{
    canonicalize::{BaseRow, Canonicalized, FIRST_ROW, KeyIndex},
    merge::LocaleResult,
};

pub const KEY_HEADER: &str = "KEY";
pub const DEFAULT_HEADER: &str = "default";
pub const UNTRANSLATABLE_HEADER: &str = "Untranslatable";
/// Marker shown for untranslatable keys.
pub const UNTRANSLATABLE_MARK: &str = "\u{2713}"; // ✓
/// Marker shown in a locale cell for a missing-reportable key.
pub const MISSING_MARK: &str = "MISSING";

/// Extension appended to output paths that lack it.
pub const ARTIFACT_EXTENSION: &str = "csv";

/// Number of leading columns before the first locale column.
const BASE_COLUMNS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Header,
    Comment { is_section_header: bool },
    PluralGroup,
    Key { untranslatable: bool, is_reference: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    /// Absent in the locale and needs translating.
    Missing,
    /// Absent in the locale but untranslatable.
    Suppressed,
    Empty,
}

impl Cell {
    pub fn render(&self) -> &str {
        match self {
            Cell::Text(text) => text.as_str(),
            Cell::Missing => MISSING_MARK,
            Cell::Suppressed => UNTRANSLATABLE_MARK,
            Cell::Empty => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub kind: RowKind,
    pub cells: Vec<Cell>,
}

impl Row {
    fn text(kind: RowKind, text: String) -> Self {
        Self {
            kind,
            cells: vec![Cell::Text(text)],
        }
    }

    fn set(&mut self, column: usize, cell: Cell) {
        if self.cells.len() <= column {
            self.cells.resize(column + 1, Cell::Empty);
        }
        self.cells[column] = cell;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    /// Resource file name the sheet was built from.
    pub name: String,
    /// `rows[0]` is the header.
    pub rows: Vec<Row>,
}

impl Sheet {
    /// Build the header and base rows from a canonicalized base file.
    pub fn from_base(name: &str, base: &Canonicalized) -> Self {
        let header = Row {
            kind: RowKind::Header,
            cells: [KEY_HEADER, DEFAULT_HEADER, UNTRANSLATABLE_HEADER]
                .map(|h| Cell::Text(h.to_string()))
                .to_vec(),
        };

        let mut rows = Vec::with_capacity(base.rows.len() + FIRST_ROW);
        rows.push(header);
        rows.extend(base.rows.iter().map(base_row));

        Self {
            name: name.to_string(),
            rows,
        }
    }

    /// Locale columns added so far, in order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.rows[0].cells.iter().skip(BASE_COLUMNS).map(Cell::render)
    }

    pub fn width(&self) -> usize {
        self.rows[0].cells.len()
    }

    /// Append one locale column, placing each key's cell at the row the
    /// index assigned to it.
    pub fn add_locale(&mut self, index: &KeyIndex, result: &LocaleResult) {
        let column = self.width();
        self.rows[0].set(column, Cell::Text(result.locale.clone()));

        for (key, slot) in index.iter() {
            let cell = match result.translations.get(key) {
                Some(text) => Cell::Text(text.clone()),
                None if result.missing_reportable.contains(key) => Cell::Missing,
                None if slot.untranslatable.is_some() => Cell::Suppressed,
                None => Cell::Empty,
            };
            if let Some(row) = self.rows.get_mut(slot.row) {
                row.set(column, cell);
            }
        }
    }

    /// Rows rendered as strings, padded to the header width.
    pub fn render(&self) -> Vec<Vec<String>> {
        let width = self.width();
        self.rows
            .iter()
            .map(|row| {
                let mut cells: Vec<String> =
                    row.cells.iter().map(|c| c.render().to_string()).collect();
                cells.resize(width.max(cells.len()), String::new());
                cells
            })
            .collect()
    }
}

fn base_row(row: &BaseRow) -> Row {
    match row {
        BaseRow::Comment {
            text,
            is_section_header,
        } => Row::text(
            RowKind::Comment {
                is_section_header: *is_section_header,
            },
            format!("/** {} **/", text),
        ),
        BaseRow::PluralGroup { name } => {
            Row::text(RowKind::PluralGroup, format!("//plurals: {}", name))
        }
        BaseRow::Key {
            key,
            text,
            is_reference,
            untranslatable,
        } => Row {
            kind: RowKind::Key {
                untranslatable: untranslatable.is_some(),
                is_reference: *is_reference,
            },
            cells: vec![
                Cell::Text(key.to_string()),
                Cell::Text(text.clone()),
                if untranslatable.is_some() {
                    Cell::Suppressed
                } else {
                    Cell::Empty
                },
            ],
        },
    }
}

/// Serializes sheets to some output.
pub trait SheetWriter {
    /// Write one sheet, returning where it went.
    fn write_sheet(&mut self, sheet: &Sheet) -> Result<PathBuf>;
}

/// Default artifact name for a run started at `timestamp_millis`.
pub fn default_output_path(timestamp_millis: i64) -> PathBuf {
    PathBuf::from(format!(
        "exported_strings_{}.{}",
        timestamp_millis, ARTIFACT_EXTENSION
    ))
}

/// Append the artifact extension unless the path already carries it.
///
/// ```
/// use std::path::{Path, PathBuf};
/// use langsheet::artifact::normalize_output_path;
///
/// assert_eq!(normalize_output_path(Path::new("out")), PathBuf::from("out.csv"));
/// assert_eq!(normalize_output_path(Path::new("out.csv")), PathBuf::from("out.csv"));
/// assert_eq!(normalize_output_path(Path::new("out.v2")), PathBuf::from("out.v2.csv"));
/// ```
pub fn normalize_output_path(path: &Path) -> PathBuf {
    if path.extension().and_then(|e| e.to_str()) == Some(ARTIFACT_EXTENSION) {
        return path.to_path_buf();
    }
    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(ARTIFACT_EXTENSION);
    PathBuf::from(name)
}
