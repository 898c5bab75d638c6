use std::net::IpAddr;
use std::path::PathBuf;

use crate::money::AmountStyle;

#[derive(Debug, Clone)]
pub struct Config {
    pub template_path: PathBuf,
    pub reports_dir: PathBuf,
    pub index_path: PathBuf,
    pub options_sheet: String,
    pub report_sheet: String,
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub amount_style: AmountStyle,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let template_path = PathBuf::from(env_or("EXCEL_FILE", "book.xlsm"));
        let reports_dir = PathBuf::from(env_or("REPORTS_DIR", "reports"));
        let index_path = PathBuf::from(env_or("INDEX_FILE", "index.html"));

        let options_sheet = env_or("SHEET1_NAME", "Лист1");
        let report_sheet = env_or("SHEET2_NAME", "Лист2");

        let host: IpAddr = env_or("EXPENSES_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid EXPENSES_HOST: {e}"))?;

        let port: u16 = env_or("EXPENSES_PORT", "8000")
            .parse()
            .map_err(|e| format!("Invalid EXPENSES_PORT: {e}"))?;

        let max_body_size: usize = env_or("EXPENSES_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid EXPENSES_MAX_BODY_SIZE: {e}"))?;

        let amount_style = AmountStyle::parse(&env_or("AMOUNT_STYLE", "digits"))
            .ok_or_else(|| "Invalid AMOUNT_STYLE: expected 'digits' or 'words'".to_string())?;

        let log_level = env_or("EXPENSES_LOG_LEVEL", "info");

        Ok(Config {
            template_path,
            reports_dir,
            index_path,
            options_sheet,
            report_sheet,
            host,
            port,
            max_body_size,
            amount_style,
            log_level,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
