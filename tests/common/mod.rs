use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tempfile::TempDir;
use umya_spreadsheet::Worksheet;

use expense_sheets::config::Config;
use expense_sheets::money::AmountStyle;

pub const OWNERS: [&str; 3] = ["Иванов И.И.", "Петров П.П.", "Сидоров С.С."];
pub const ASSISTANTS: [&str; 2] = ["Смирнова А.А.", "Кузнецова Е.В."];

/// A running test server backed by its own temporary directory.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub config: Config,
    /// Removed when the test ends.
    #[allow(dead_code)]
    pub dir: TempDir,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    #[allow(dead_code)]
    pub async fn get_json(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    #[allow(dead_code)]
    pub async fn submit(&self, form: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/submit"))
            .json(form)
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Path on disk of a report returned by `/api/submit`.
    #[allow(dead_code)]
    pub fn report_path(&self, body: &Value) -> PathBuf {
        let url = body["download_url"].as_str().expect("download_url missing");
        let name = url
            .strip_prefix("/reports/")
            .expect("unexpected download_url");
        self.config.reports_dir.join(name)
    }
}

/// A form with every required field and nothing else.
#[allow(dead_code)]
pub fn minimal_form() -> Value {
    json!({
        "card_owner": OWNERS[0],
        "assistant": ASSISTANTS[0],
        "restaurant": "Пушкин",
        "address": "Тверской бульвар, 26А",
        "check1_number": "0042",
        "check1_date": "2024-03-15",
        "check1_time_decimal": 19.5,
        "check1_sum": 2500,
    })
}

/// Build a template with an options sheet and a report sheet. The report
/// sheet carries a fixed 1000 in A11, a text caption in A12 and a company
/// placeholder in B33.
pub fn write_template(path: &Path, with_report_sheet: impl FnOnce(&mut Worksheet)) {
    let mut book = umya_spreadsheet::new_file();

    let options = book
        .get_sheet_by_name_mut("Sheet1")
        .expect("default sheet");
    options.set_name("Лист1");
    options.get_cell_mut("A1").set_value_string("Владельцы карт");
    // A3 stays blank so the gap has to be skipped.
    options.get_cell_mut("A2").set_value_string(OWNERS[0]);
    options.get_cell_mut("A4").set_value_string(OWNERS[1]);
    options.get_cell_mut("A6").set_value_string(OWNERS[2]);
    options.get_cell_mut("A7").set_value_string("Ассистенты");
    options.get_cell_mut("A8").set_value_string(ASSISTANTS[0]);
    options.get_cell_mut("A13").set_value_string(ASSISTANTS[1]);
    // Outside both ranges.
    options.get_cell_mut("A14").set_value_string("Не читается");

    let report = book.new_sheet("Лист2").expect("add report sheet");
    report.get_cell_mut("A11").set_value_number(1000);
    report.get_cell_mut("A12").set_value_string("Итого");
    report.get_cell_mut("B33").set_value_string("ООО Шаблон");
    with_report_sheet(report);

    umya_spreadsheet::writer::xlsx::write(&book, path).expect("write template");
}

pub fn test_config(dir: &Path) -> Config {
    Config {
        template_path: dir.join("book.xlsx"),
        reports_dir: dir.join("reports"),
        index_path: dir.join("index.html"),
        options_sheet: "Лист1".to_string(),
        report_sheet: "Лист2".to_string(),
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        max_body_size: 65_536,
        amount_style: AmountStyle::Digits,
        log_level: "warn".to_string(),
    }
}

/// Spawn an app with the default template in place.
#[allow(dead_code)]
pub async fn spawn_app() -> TestApp {
    spawn_app_with(|config| write_template(&config.template_path, |_| {})).await
}

/// Spawn an app, letting the caller prepare (or skip) the template and tweak
/// the config first.
pub async fn spawn_app_with(prepare: impl FnOnce(&mut Config)) -> TestApp {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mut config = test_config(dir.path());
    prepare(&mut config);

    let app = expense_sheets::build_app(config.clone());

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        client: Client::new(),
        config,
        dir,
    }
}

/// Read a single cell of a saved workbook.
#[allow(dead_code)]
pub fn cell(path: &Path, sheet: &str, address: &str) -> String {
    let book = umya_spreadsheet::reader::xlsx::read(path).expect("read workbook");
    let sheet = book.get_sheet_by_name(sheet).expect("sheet missing");
    sheet
        .get_cell(address)
        .map(|c| c.get_value().to_string())
        .unwrap_or_default()
}
