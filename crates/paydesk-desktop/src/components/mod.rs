//! UI Components
//!
//! Table, dialogs and notices for the salaries view.

mod confirm_dialog;
mod notice_banner;
mod salary_dialog;
mod salary_table;

pub use confirm_dialog::ConfirmDialog;
pub use notice_banner::NoticeBanner;
pub use salary_dialog::SalaryDialog;
pub use salary_table::SalaryTable;
