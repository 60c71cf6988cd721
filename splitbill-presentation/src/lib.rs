#![warn(clippy::uninlined_format_args)]

pub mod email_draft;
pub mod error_presenter;
pub mod number_format;
pub mod settlement_presenter;
pub mod summary_presenter;
pub mod summary_svg;
pub mod svg_table;

pub use email_draft::{EmailDraft, email_drafts, email_subject, mailto_link};
pub use error_presenter::{format_bill_error, format_snapshot_error, format_validation_error};
pub use number_format::{format_display, format_number};
pub use settlement_presenter::{SettlementPresenter, SettlementView};
pub use summary_presenter::{accounts_text, email_body, summary_lines};
pub use summary_svg::summary_svg;
