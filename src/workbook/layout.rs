//! Fixed cell positions of the expense report template.
//!
//! The options sheet lists card owners and assistants in column A. The report
//! sheet receives the submitted form, the receipt total (A14 area, phrase in
//! B15) and the total rounded up to thousands (C26 area, phrase in B27).

use super::Sheet;
use crate::models::{FormSubmission, ReceiptRecord, TemplateOptions};
use crate::money::{self, Amount};

pub const OWNER_ROWS: std::ops::RangeInclusive<u32> = 2..=6;
pub const ASSISTANT_ROWS: std::ops::RangeInclusive<u32> = 8..=13;

pub const CARD_OWNER: &str = "B5";
pub const ASSISTANT: &str = "B6";
pub const RESTAURANT: &str = "B9";
pub const ADDRESS: &str = "B17";

pub const COMPANY: &str = "B33";
pub const GOAL: &str = "B34";
pub const TOPIC: &str = "C37";
pub const TOTALS: &str = "A44";

/// Receipt rows start here; one row per receipt.
pub const FIRST_RECEIPT_ROW: u32 = 9;
/// Column A rows summed into the total, including template-filled rows.
pub const SUM_ROWS: std::ops::RangeInclusive<u32> = 9..=13;

pub const GUEST_FIRST_ROW: u32 = 37;

pub const TOTAL_WORDS: &str = "B15";
pub const ROUNDED_TOTAL_WORDS: &str = "B27";

/// Read the owner and assistant lists, skipping blank cells.
pub fn read_options(sheet: &impl Sheet) -> TemplateOptions {
    TemplateOptions {
        owners: column_values(sheet, "A", OWNER_ROWS),
        assistants: column_values(sheet, "A", ASSISTANT_ROWS),
    }
}

fn column_values(
    sheet: &impl Sheet,
    column: &str,
    rows: std::ops::RangeInclusive<u32>,
) -> Vec<String> {
    rows.map(|row| sheet.text(&format!("{column}{row}")))
        .filter(|value| !value.is_empty())
        .collect()
}

/// Copy the form onto the report sheet. Optional fields that are empty leave
/// the template cell untouched; guest rows are always rewritten.
pub fn write_submission(sheet: &mut impl Sheet, form: &FormSubmission) {
    sheet.set_text(CARD_OWNER, &form.card_owner);
    sheet.set_text(ASSISTANT, &form.assistant);
    sheet.set_text(RESTAURANT, &form.restaurant);
    sheet.set_text(ADDRESS, &form.address);

    write_receipt(sheet, FIRST_RECEIPT_ROW, &form.first_receipt());
    write_receipt(sheet, FIRST_RECEIPT_ROW + 1, &form.second_receipt());

    set_text_if_present(sheet, COMPANY, &form.company);
    set_text_if_present(sheet, GOAL, &form.goal);
    set_text_if_present(sheet, TOPIC, &form.topic);
    set_text_if_present(sheet, TOTALS, &form.totals);

    for (offset, guest) in form.guest_rows().iter().enumerate() {
        let row = GUEST_FIRST_ROW + offset as u32;
        sheet.set_text(&format!("A{row}"), &guest.fio);
        sheet.set_text(&format!("B{row}"), &guest.position);
    }
}

fn write_receipt(sheet: &mut impl Sheet, row: u32, receipt: &ReceiptRecord<'_>) {
    if let Some(number) = receipt.number {
        sheet.set_text(&format!("C{row}"), number);
    }
    if let Some(date) = receipt.date {
        sheet.set_text(&format!("D{row}"), date);
    }
    if let Some(time) = receipt.time_decimal {
        sheet.set_number(&format!("E{row}"), time);
    }
    if let Some(sum) = receipt.sum {
        sheet.set_number(&format!("A{row}"), sum);
    }
}

fn set_text_if_present(sheet: &mut impl Sheet, address: &str, value: &str) {
    if !value.is_empty() {
        sheet.set_text(address, value);
    }
}

/// Sum of the receipt column. Blank and non-numeric cells count as zero.
pub fn receipts_total(sheet: &impl Sheet) -> Amount {
    money::sum(SUM_ROWS.map(|row| money::parse_amount(&sheet.text(&format!("A{row}")))))
}

pub fn write_amount_phrases(sheet: &mut impl Sheet, total: &str, rounded_total: &str) {
    sheet.set_text(TOTAL_WORDS, total);
    sheet.set_text(ROUNDED_TOTAL_WORDS, rounded_total);
}
