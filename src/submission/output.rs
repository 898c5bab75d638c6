use std::path::Path;

use chrono::NaiveDateTime;

/// Every saved report is named `book_<timestamp>`.
pub const FILE_PREFIX: &str = "book";
const DEFAULT_EXTENSION: &str = "xlsm";

/// URL prefix under which the reports directory is served.
pub const REPORTS_ROUTE: &str = "/reports";

/// `book_20240131_154502.xlsm`, keeping the template's extension so macro
/// workbooks stay macro workbooks.
pub fn file_name(template: &Path, at: NaiveDateTime) -> String {
    let extension = template
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .unwrap_or(DEFAULT_EXTENSION);
    format!("{FILE_PREFIX}_{}.{extension}", at.format("%Y%m%d_%H%M%S"))
}

pub fn download_url(file_name: &str) -> String {
    format!("{REPORTS_ROUTE}/{file_name}")
}
