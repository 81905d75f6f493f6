use std::io::{self, BufRead, Write};

use chrono::{NaiveDate, NaiveDateTime};
use paydesk_core::config::ClientConfig;
use paydesk_core::models::{truncate_salary_date, SALARY_DATE_FORMAT};
use paydesk_core::screen::{
    DeletePrompt, FetchOutcome, SalariesScreen, SortColumn, SortDirection, SortSpec,
    SubmitOutcome, TableRow,
};
use paydesk_core::{SalariesClient, SalaryApi, SalaryId, ScreenController};
use serde::Serialize;

use crate::cli::ListArgs;
use crate::error::CliError;

const DATE_ONLY_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Serialize)]
pub struct SalaryListItem {
    pub id: i64,
    pub employee: String,
    pub amount: String,
    pub salary_date: Option<String>,
    pub display_date: String,
}

/// Field values given on the command line for add/edit
#[derive(Debug, Clone, Copy, Default)]
pub struct FormFields<'a> {
    pub employee: Option<&'a str>,
    pub amount: Option<&'a str>,
    pub date: Option<&'a str>,
}

impl FormFields<'_> {
    pub const fn is_empty(&self) -> bool {
        self.employee.is_none() && self.amount.is_none() && self.date.is_none()
    }
}

pub fn connect(api_url: Option<String>) -> Result<SalariesClient, CliError> {
    let config = ClientConfig::resolve(api_url)?;
    tracing::debug!("Using salaries API at {}", config.api_base_url);
    Ok(SalariesClient::from_config(&config)?)
}

pub fn parse_salary_id(raw: &str) -> Result<SalaryId, CliError> {
    raw.parse::<SalaryId>()
        .map_err(|_| CliError::InvalidId(raw.trim().to_string()))
}

/// Accept a full date-time or a bare date (midnight), returned in draft format.
pub fn normalize_salary_date(raw: &str) -> Result<String, CliError> {
    let value = truncate_salary_date(raw.trim());
    if let Ok(date_time) = NaiveDateTime::parse_from_str(&value, SALARY_DATE_FORMAT) {
        return Ok(date_time.format(SALARY_DATE_FORMAT).to_string());
    }

    NaiveDate::parse_from_str(&value, DATE_ONLY_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|date_time| date_time.format(SALARY_DATE_FORMAT).to_string())
        .ok_or_else(|| CliError::InvalidDate(raw.trim().to_string()))
}

/// Initial list fetch; a failure leaves the table empty.
pub async fn load_salaries<A: SalaryApi>(controller: &mut ScreenController<A>) {
    if let FetchOutcome::Failed(message) = controller.mount().await {
        tracing::warn!("Showing an empty salary list: {message}");
    }
}

/// Fail unless `id` names a stored record in the held list.
pub fn ensure_listed<A: SalaryApi>(
    controller: &ScreenController<A>,
    id: SalaryId,
) -> Result<(), CliError> {
    match controller.screen().record(id) {
        Some(record) if !record.salary_id.is_placeholder() => Ok(()),
        _ => Err(CliError::SalaryNotFound(id.to_string())),
    }
}

/// Copy command-line fields into the open dialog.
pub fn fill_form(screen: &mut SalariesScreen, fields: &FormFields<'_>) -> Result<(), CliError> {
    let date = fields.date.map(normalize_salary_date).transpose()?;
    let Some(form) = screen.form_mut() else {
        return Err(CliError::SaveFailed("no salary dialog is open".to_string()));
    };

    if let Some(employee) = fields.employee {
        form.set_employee(employee);
    }
    if let Some(amount) = fields.amount {
        let amount = amount.trim();
        if !form.set_amount(amount) {
            return Err(CliError::InvalidAmount(amount.to_string()));
        }
    }
    if let Some(date) = date {
        form.set_salary_date(&date);
    }
    Ok(())
}

pub async fn submit_form<A: SalaryApi>(
    controller: &mut ScreenController<A>,
) -> Result<(), CliError> {
    match controller.submit().await? {
        SubmitOutcome::Saved(_) => Ok(()),
        SubmitOutcome::Failed(message) => Err(CliError::SaveFailed(message)),
        SubmitOutcome::Stale => Err(CliError::SaveFailed(
            "dialog closed before the save finished".to_string(),
        )),
    }
}

pub fn apply_list_args(screen: &mut SalariesScreen, args: &ListArgs) {
    screen.set_rows_per_page(args.per_page);
    if let Some(key) = args.sort {
        let direction = if args.desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        screen.set_sort(Some(SortSpec {
            column: key.into(),
            direction,
        }));
    }
    screen.set_page(args.page.saturating_sub(1));
}

pub fn format_salary_lines(rows: &[TableRow]) -> Vec<String> {
    rows.iter()
        .map(|row| {
            let id = if row.record.salary_id.is_placeholder() {
                "-".to_string()
            } else {
                row.record.salary_id.to_string()
            };
            format!(
                "{:>6}  {:<32}  {:>16}  {}",
                id,
                row.employee,
                row.amount,
                row.date
            )
        })
        .collect()
}

pub fn salary_to_list_item(row: &TableRow) -> SalaryListItem {
    SalaryListItem {
        id: row.record.salary_id.get(),
        employee: row.employee_full.clone(),
        amount: row.record.amount_text(),
        salary_date: row
            .record
            .salary_date
            .map(|date| date.format(SALARY_DATE_FORMAT).to_string()),
        display_date: row.date.clone(),
    }
}

/// Print the current page of the held collection.
pub fn write_salaries(
    screen: &SalariesScreen,
    as_json: bool,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let rows = screen.rows();

    if as_json {
        let items = rows
            .iter()
            .map(salary_to_list_item)
            .collect::<Vec<SalaryListItem>>();
        writeln!(out, "{}", serde_json::to_string_pretty(&items)?)?;
        return Ok(());
    }

    if rows.is_empty() {
        writeln!(out, "No salaries")?;
        return Ok(());
    }

    writeln!(
        out,
        "{:>6}  {:<32}  {:>16}  {}",
        "ID",
        SortColumn::Employee.header(),
        SortColumn::Amount.header(),
        SortColumn::Date.header()
    )?;
    for line in format_salary_lines(&rows) {
        writeln!(out, "{line}")?;
    }
    writeln!(
        out,
        "Page {} of {} ({} salaries)",
        screen.table().page() + 1,
        screen.page_count(),
        screen.records().len()
    )?;
    Ok(())
}

/// Print and drain queued notices
pub fn write_notices(screen: &mut SalariesScreen, out: &mut impl Write) -> io::Result<()> {
    for notice in screen.take_notices() {
        writeln!(out, "{} {}", notice.title, notice.text)?;
    }
    Ok(())
}

/// Ask a yes/no question; anything but `y`/`yes` is a no.
pub fn confirm(
    prompt: &DeletePrompt,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<bool> {
    write!(output, "{}?\n{} [y/N] ", prompt.title, prompt.text)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
