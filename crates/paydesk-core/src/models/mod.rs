//! Data models for Paydesk

mod draft;
mod salary;

pub use draft::{is_valid_amount, truncate_salary_date, SalaryDraft, SALARY_DATE_FORMAT, SALARY_DATE_LEN};
pub use salary::{Link, SalaryEnvelope, SalaryId, SalaryRecord};
