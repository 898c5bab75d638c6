use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateOptions {
    pub owners: Vec<String>,
    pub assistants: Vec<String>,
}

/// Result of a processed submission. `a14` and `c26` are named after the
/// template cells that hold the total and the rounded total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputReport {
    pub status: String,
    pub a14: f64,
    pub c26: f64,
    pub download_url: String,
    #[serde(skip)]
    pub file_name: String,
}
