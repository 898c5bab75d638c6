use chrono::NaiveDateTime;

use crate::config::Config;
use crate::models::{FormSubmission, OutputReport, TemplateOptions};
use crate::money;
use crate::workbook::{layout, Workbook, WorkbookError};

use super::output;

/// Read owner and assistant names from the options sheet of the template.
pub fn load_options(config: &Config) -> Result<TemplateOptions, WorkbookError> {
    let workbook = Workbook::open(&config.template_path)?;
    let sheet = workbook.sheet(&config.options_sheet)?;
    Ok(layout::read_options(sheet))
}

/// Fill a fresh copy of the template with the form, compute both totals and
/// save it to the reports directory under a name derived from `now`.
pub fn run(
    config: &Config,
    form: &FormSubmission,
    now: NaiveDateTime,
) -> Result<OutputReport, WorkbookError> {
    let mut workbook = Workbook::open(&config.template_path)?;
    let sheet = workbook.sheet_mut(&config.report_sheet)?;

    layout::write_submission(sheet, form);

    let total = layout::receipts_total(sheet);
    let rounded_total = money::round_up_to_thousand(total);

    layout::write_amount_phrases(
        sheet,
        &money::money_to_words(total, config.amount_style),
        &money::money_to_words(rounded_total, config.amount_style),
    );

    std::fs::create_dir_all(&config.reports_dir)?;
    let file_name = output::file_name(&config.template_path, now);
    let path = config.reports_dir.join(&file_name);
    workbook.save(&path)?;

    let report = OutputReport {
        status: "ok".to_string(),
        a14: total.to_f64(),
        c26: rounded_total.to_f64(),
        download_url: output::download_url(&file_name),
        file_name,
    };

    tracing::info!(
        file = %report.file_name,
        total = %total,
        rounded_total = %rounded_total,
        "Report saved"
    );

    Ok(report)
}
