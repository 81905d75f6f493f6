//! Draft model: a not-yet-submitted salary held by a form

use std::sync::OnceLock;

use chrono::NaiveDateTime;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::SalaryRecord;
use crate::error::{Error, Result};

/// Length of a whole-second ISO date-time, `YYYY-MM-DDTHH:MM:SS`
pub const SALARY_DATE_LEN: usize = 19;

/// Format used for draft date-times
pub const SALARY_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Check whether an amount string may be stored in a draft.
///
/// Accepts the empty string (a cleared field) and digits optionally followed
/// by a decimal point and at most two fractional digits.
///
/// # Examples
///
/// ```
/// use paydesk_core::models::is_valid_amount;
///
/// assert!(is_valid_amount("1000.5"));
/// assert!(!is_valid_amount("12.999"));
/// ```
#[must_use]
pub fn is_valid_amount(value: &str) -> bool {
    value.is_empty() || amount_pattern().is_match(value)
}

/// Cut a date-time string down to whole-second precision.
#[must_use]
pub fn truncate_salary_date(value: &str) -> String {
    value.chars().take(SALARY_DATE_LEN).collect()
}

fn amount_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]+(\.[0-9]{0,2})?$").expect("Invalid regex"))
}

/// Candidate salary record collected by the add/edit forms.
///
/// Fields are private so every write goes through the input rules: the
/// amount only changes to a valid value and the date is always truncated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawDraft")]
pub struct SalaryDraft {
    employee: String,
    salary: String,
    salary_date: String,
}

/// Wire shape of a draft before the input rules are applied
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDraft {
    employee: String,
    salary: String,
    salary_date: String,
}

impl TryFrom<RawDraft> for SalaryDraft {
    type Error = Error;

    fn try_from(raw: RawDraft) -> Result<Self> {
        Self::new(&raw.employee, &raw.salary, &raw.salary_date)
    }
}

impl SalaryDraft {
    /// Empty draft dated at `now`
    #[must_use]
    pub fn fresh_at(now: NaiveDateTime) -> Self {
        Self {
            employee: String::new(),
            salary: String::new(),
            salary_date: now.format(SALARY_DATE_FORMAT).to_string(),
        }
    }

    /// Empty draft dated at the current local time
    #[must_use]
    pub fn fresh() -> Self {
        Self::fresh_at(chrono::Local::now().naive_local())
    }

    /// Draft seeded from an existing record.
    ///
    /// Records without a date fall back to `now`.
    #[must_use]
    pub fn from_record_at(record: &SalaryRecord, now: NaiveDateTime) -> Self {
        let date = record.salary_date.unwrap_or(now);
        Self {
            employee: record.employee.clone(),
            salary: record.amount_text(),
            salary_date: date.format(SALARY_DATE_FORMAT).to_string(),
        }
    }

    /// Draft seeded from an existing record, using the current local time
    /// when the record carries no date.
    #[must_use]
    pub fn from_record(record: &SalaryRecord) -> Self {
        Self::from_record_at(record, chrono::Local::now().naive_local())
    }

    /// Build a complete draft, rejecting an invalid amount.
    pub fn new(employee: &str, amount: &str, salary_date: &str) -> Result<Self> {
        let mut draft = Self {
            employee: String::new(),
            salary: String::new(),
            salary_date: String::new(),
        };
        draft.set_employee(employee);
        if !draft.set_amount(amount) {
            return Err(Error::InvalidInput(format!(
                "amount '{amount}' must be digits with at most two decimals"
            )));
        }
        draft.set_salary_date(salary_date);
        Ok(draft)
    }

    pub fn employee(&self) -> &str {
        &self.employee
    }

    pub fn amount(&self) -> &str {
        &self.salary
    }

    pub fn salary_date(&self) -> &str {
        &self.salary_date
    }

    /// Store the employee name verbatim
    pub fn set_employee(&mut self, value: &str) {
        value.clone_into(&mut self.employee);
    }

    /// Store the amount if it is empty or a valid monetary value.
    ///
    /// Returns `false` and keeps the previous value otherwise.
    pub fn set_amount(&mut self, value: &str) -> bool {
        if !is_valid_amount(value) {
            tracing::debug!("Rejected amount input {value:?}");
            return false;
        }
        value.clone_into(&mut self.salary);
        true
    }

    /// Store the date-time truncated to whole seconds
    pub fn set_salary_date(&mut self, value: &str) {
        self.salary_date = truncate_salary_date(value);
    }

    /// Check the required fields before submission
    pub fn validate(&self) -> Result<()> {
        if self.employee.trim().is_empty() {
            return Err(Error::InvalidInput("employee is required".into()));
        }
        if self.salary.is_empty() {
            return Err(Error::InvalidInput("amount is required".into()));
        }
        if self.salary_date.trim().is_empty() {
            return Err(Error::InvalidInput("salary date is required".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    use super::*;
    use crate::models::SalaryId;

    fn at(hour: u32, min: u32, sec: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(hour, min, sec)
            .unwrap()
    }

    fn ann() -> SalaryRecord {
        SalaryRecord {
            salary_id: SalaryId::new(1),
            employee: "Ann".to_string(),
            amount: Decimal::new(100_050, 2),
            salary_date: Some(at(9, 15, 0)),
            message: None,
            links: Vec::new(),
        }
    }

    #[test]
    fn amount_pattern_accepts_money_values() {
        for value in ["", "0", "1000", "1000.", "1000.5", "1000.50", "007"] {
            assert!(is_valid_amount(value), "{value:?} should be accepted");
        }
    }

    #[test]
    fn amount_pattern_rejects_malformed_values() {
        for value in ["12.999", "-1", "1,5", ".5", "1.2.3", "abc", " 12", "12 ", "١٢"] {
            assert!(!is_valid_amount(value), "{value:?} should be rejected");
        }
    }

    #[test]
    fn set_amount_keeps_previous_value_on_rejection() {
        let mut draft = SalaryDraft::fresh_at(at(0, 0, 0));
        assert!(draft.set_amount("12.99"));
        assert!(!draft.set_amount("12.999"));
        assert_eq!(draft.amount(), "12.99");

        assert!(draft.set_amount(""));
        assert_eq!(draft.amount(), "");
    }

    #[test]
    fn salary_date_is_truncated_to_whole_seconds() {
        let mut draft = SalaryDraft::fresh_at(at(0, 0, 0));
        draft.set_salary_date("2024-03-05T10:20:30.123Z");
        assert_eq!(draft.salary_date(), "2024-03-05T10:20:30");
        assert_eq!(draft.salary_date().len(), SALARY_DATE_LEN);

        draft.set_salary_date("2024-03-05T10:20");
        assert_eq!(draft.salary_date(), "2024-03-05T10:20");
    }

    #[test]
    fn fresh_draft_defaults_to_now_without_subseconds() {
        let draft = SalaryDraft::fresh_at(at(13, 45, 7));
        assert_eq!(draft.employee(), "");
        assert_eq!(draft.amount(), "");
        assert_eq!(draft.salary_date(), "2024-01-01T13:45:07");
    }

    #[test]
    fn draft_seeded_from_record() {
        let draft = SalaryDraft::from_record_at(&ann(), at(0, 0, 0));
        assert_eq!(draft.employee(), "Ann");
        assert_eq!(draft.amount(), "1000.5");
        assert_eq!(draft.salary_date(), "2024-01-01T09:15:00");
    }

    #[test]
    fn draft_seeded_from_undated_record_uses_now() {
        let mut record = ann();
        record.salary_date = None;
        let draft = SalaryDraft::from_record_at(&record, at(7, 0, 0));
        assert_eq!(draft.salary_date(), "2024-01-01T07:00:00");
    }

    #[test]
    fn draft_serializes_as_backend_request() {
        let draft = SalaryDraft::new("Ann", "1000.5", "2024-01-01T00:00:00.000").unwrap();
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "employee": "Ann",
                "salary": "1000.5",
                "salaryDate": "2024-01-01T00:00:00",
            })
        );
    }

    #[test]
    fn deserialized_draft_follows_input_rules() {
        let draft: SalaryDraft = serde_json::from_str(
            r#"{"employee":"Ann","salary":"12.99","salaryDate":"2024-01-01T00:00:00.123456Z"}"#,
        )
        .unwrap();
        assert_eq!(draft.amount(), "12.99");
        assert_eq!(draft.salary_date(), "2024-01-01T00:00:00");

        let error = serde_json::from_str::<SalaryDraft>(
            r#"{"employee":"Ann","salary":"12.999","salaryDate":"2024-01-01T00:00:00"}"#,
        )
        .unwrap_err();
        assert!(error.to_string().contains("12.999"));
    }

    #[test]
    fn new_rejects_invalid_amount() {
        let error = SalaryDraft::new("Ann", "12.999", "2024-01-01T00:00:00").unwrap_err();
        assert!(matches!(error, Error::InvalidInput(_)));
    }

    #[test]
    fn validate_requires_every_field() {
        let mut draft = SalaryDraft::fresh_at(at(0, 0, 0));
        assert!(draft.validate().is_err());

        draft.set_employee("Ann");
        assert!(draft.validate().is_err());

        draft.set_amount("10");
        assert!(draft.validate().is_ok());

        draft.set_salary_date("");
        assert!(draft.validate().is_err());
    }
}
