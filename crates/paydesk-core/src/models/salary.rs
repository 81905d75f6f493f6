//! Salary record model as served by the backend

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Server-assigned salary identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SalaryId(i64);

impl SalaryId {
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Whether this id marks a placeholder rather than a stored record
    #[must_use]
    pub const fn is_placeholder(self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for SalaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SalaryId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

impl From<i64> for SalaryId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Hypermedia descriptor of a follow-up action.
///
/// Received from the server and passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
    pub method: String,
    pub version: String,
}

/// A stored salary record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRecord {
    /// Server-assigned identifier
    pub salary_id: SalaryId,
    /// Employee name
    pub employee: String,
    /// Paid amount
    #[serde(rename = "salary")]
    pub amount: Decimal,
    /// Effective timestamp, absent on placeholder records
    #[serde(default)]
    pub salary_date: Option<NaiveDateTime>,
    /// Optional server message
    #[serde(default)]
    pub message: Option<String>,
    /// Permitted follow-up actions
    #[serde(default)]
    pub links: Vec<Link>,
}

impl SalaryRecord {
    /// Amount without trailing fractional zeros, e.g. `1000.50` as `1000.5`
    #[must_use]
    pub fn amount_text(&self) -> String {
        self.amount.normalize().to_string()
    }
}

/// Collection wrapper returned by the list endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryEnvelope {
    #[serde(default)]
    pub data: Vec<SalaryRecord>,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl SalaryEnvelope {
    /// Find a record by id
    #[must_use]
    pub fn find(&self, id: SalaryId) -> Option<&SalaryRecord> {
        self.data.iter().find(|record| record.salary_id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const LIST_PAYLOAD: &str = r#"
    {
      "data": [
        {
          "salaryId": 1,
          "salary": 1000,
          "employee": "Ann",
          "salaryDate": "2024-01-01T00:00:00",
          "message": null,
          "links": [
            { "rel": "self", "href": "/api/v1/salaries", "method": "GET", "version": "v1" },
            { "rel": "edit", "href": "/api/v1/salaries/edit/1", "method": "PATCH", "version": "v1" }
          ]
        },
        {
          "salaryId": 2,
          "salary": 2500.5,
          "employee": "Bob",
          "salaryDate": "2024-02-15T08:30:00"
        }
      ],
      "links": [
        { "rel": "self", "href": "/api/v1/salaries", "method": "GET", "version": "v1" }
      ]
    }
    "#;

    #[test]
    fn envelope_parses_backend_payload() {
        let envelope: SalaryEnvelope = serde_json::from_str(LIST_PAYLOAD).unwrap();

        assert_eq!(envelope.len(), 2);
        assert_eq!(envelope.links.len(), 1);

        let ann = &envelope.data[0];
        assert_eq!(ann.salary_id, SalaryId::new(1));
        assert_eq!(ann.employee, "Ann");
        assert_eq!(ann.amount_text(), "1000");
        assert_eq!(
            ann.salary_date.unwrap().to_string(),
            "2024-01-01 00:00:00".to_string()
        );
        assert_eq!(ann.message, None);
        assert_eq!(ann.links.len(), 2);

        let bob = &envelope.data[1];
        assert_eq!(bob.amount_text(), "2500.5");
        assert!(bob.links.is_empty());
    }

    #[test]
    fn placeholder_record_tolerates_null_date() {
        let payload = r#"{
            "salaryId": -1,
            "salary": 0,
            "employee": "-",
            "salaryDate": null,
            "message": "Couldn't find any salary. Add a salary first.",
            "links": []
        }"#;

        let record: SalaryRecord = serde_json::from_str(payload).unwrap();
        assert!(record.salary_id.is_placeholder());
        assert!(!SalaryId::new(0).is_placeholder());
        assert_eq!(record.salary_date, None);
        assert_eq!(
            record.message.as_deref(),
            Some("Couldn't find any salary. Add a salary first.")
        );
    }

    #[test]
    fn salary_id_parses_trimmed_text() {
        assert_eq!(" 42 ".parse::<SalaryId>().unwrap(), SalaryId::new(42));
        assert!("abc".parse::<SalaryId>().is_err());
    }
}
