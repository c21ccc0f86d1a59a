//! Persona extraction from an xlsx workbook.
//!
//! Every row of the sheet is a persona: column A is the username, column B the
//! password. Rows count from row 1 even when the sheet starts lower. Header
//! rows are not skipped and cells are not trimmed.

use calamine::{open_workbook_from_rs, Data, Range, Reader, Xlsx};
use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::Path;

use crate::error::PersonaError;

/// Username to password, in the order usernames first appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Personas {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl Personas {
    pub fn load(path: &Path, sheet: &str) -> Result<Self, PersonaError> {
        let bytes = fs::read(path).map_err(|source| PersonaError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut workbook: Xlsx<_> =
            open_workbook_from_rs(Cursor::new(bytes)).map_err(|source| PersonaError::Workbook {
                path: path.to_path_buf(),
                source,
            })?;

        let available = workbook.sheet_names();
        if !available.iter().any(|name| name == sheet) {
            return Err(PersonaError::MissingSheet {
                path: path.to_path_buf(),
                sheet: sheet.to_string(),
                available,
            });
        }

        let range = workbook
            .worksheet_range(sheet)
            .map_err(|source| PersonaError::Workbook {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self::from_range(&range))
    }

    /// Build from a worksheet range, addressing cells by absolute position.
    ///
    /// calamine trims a range to its used cells, so A1 is not necessarily the
    /// range origin. Cells outside the range read as empty.
    pub fn from_range(range: &Range<Data>) -> Self {
        let Some((last_row, _)) = range.end() else {
            return Self::default();
        };
        let cell = |row: u32, col: u32| range.get_value((row, col)).cloned().unwrap_or_default();
        let rows: Vec<[Data; 2]> = (0..=last_row)
            .map(|row| [cell(row, 0), cell(row, 1)])
            .collect();
        Self::from_rows(rows.iter().map(|row| row.as_slice()))
    }

    /// Build from rows that start at column A. Missing cells read as empty strings.
    pub fn from_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a [Data]>,
    {
        let mut personas = Self::default();
        for row in rows {
            personas.insert(cell_text(row.first()), cell_text(row.get(1)));
        }
        personas
    }

    /// Insert or replace. A repeated username keeps its original position.
    pub fn insert(&mut self, user: String, password: String) {
        match self.index.get(&user) {
            Some(&i) => self.entries[i].1 = password,
            None => {
                self.index.insert(user.clone(), self.entries.len());
                self.entries.push((user, password));
            }
        }
    }

    pub fn get(&self, user: &str) -> Option<&str> {
        self.index
            .get(user)
            .map(|&i| self.entries[i].1.as_str())
    }

    pub fn contains(&self, user: &str) -> bool {
        self.index.contains_key(user)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(user, password)| (user.as_str(), password.as_str()))
    }
}

fn cell_text(cell: Option<&Data>) -> String {
    cell.map(|data| data.to_string()).unwrap_or_default()
}
