pub mod form;
pub mod report;

pub use form::{FormSubmission, Guest, ReceiptRecord, MAX_GUESTS};
pub use report::{OutputReport, TemplateOptions};
