pub mod layout;

use std::path::{Path, PathBuf};

use umya_spreadsheet::{Spreadsheet, Worksheet};

#[derive(Debug)]
pub enum WorkbookError {
    TemplateMissing(PathBuf),
    SheetMissing(String),
    Read(String),
    Write(String),
    Io(std::io::Error),
}

impl std::fmt::Display for WorkbookError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkbookError::TemplateMissing(path) => {
                write!(f, "Template not found: {}", path.display())
            }
            WorkbookError::SheetMissing(name) => write!(f, "Sheet not found: {name}"),
            WorkbookError::Read(msg) => write!(f, "Failed to read workbook: {msg}"),
            WorkbookError::Write(msg) => write!(f, "Failed to write workbook: {msg}"),
            WorkbookError::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for WorkbookError {}

impl From<std::io::Error> for WorkbookError {
    fn from(err: std::io::Error) -> Self {
        WorkbookError::Io(err)
    }
}

/// Cell access by A1 address. The layout code only talks to this trait.
pub trait Sheet {
    /// Raw cell content; empty string for a cell that was never set.
    fn text(&self, address: &str) -> String;
    fn set_text(&mut self, address: &str, value: &str);
    fn set_number(&mut self, address: &str, value: f64);
}

impl Sheet for Worksheet {
    fn text(&self, address: &str) -> String {
        self.get_cell(address)
            .map(|cell| cell.get_value().to_string())
            .unwrap_or_default()
    }

    fn set_text(&mut self, address: &str, value: &str) {
        self.get_cell_mut(address).set_value_string(value);
    }

    fn set_number(&mut self, address: &str, value: f64) {
        self.get_cell_mut(address).set_value_number(value);
    }
}

/// A workbook loaded from the template file. Every load is a fresh copy, so
/// edits never reach the template itself.
pub struct Workbook {
    book: Spreadsheet,
}

impl Workbook {
    pub fn open(path: &Path) -> Result<Self, WorkbookError> {
        if !path.is_file() {
            return Err(WorkbookError::TemplateMissing(path.to_path_buf()));
        }
        let book = umya_spreadsheet::reader::xlsx::read(path)
            .map_err(|e| WorkbookError::Read(format!("{}: {e}", path.display())))?;
        Ok(Self { book })
    }

    pub fn sheet(&self, name: &str) -> Result<&Worksheet, WorkbookError> {
        self.book
            .get_sheet_by_name(name)
            .ok_or_else(|| WorkbookError::SheetMissing(name.to_string()))
    }

    pub fn sheet_mut(&mut self, name: &str) -> Result<&mut Worksheet, WorkbookError> {
        self.book
            .get_sheet_by_name_mut(name)
            .ok_or_else(|| WorkbookError::SheetMissing(name.to_string()))
    }

    pub fn save(&self, path: &Path) -> Result<(), WorkbookError> {
        umya_spreadsheet::writer::xlsx::write(&self.book, path)
            .map_err(|e| WorkbookError::Write(format!("{}: {e}", path.display())))
    }
}
