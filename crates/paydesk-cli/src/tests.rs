use std::cell::RefCell;
use std::io::Cursor;

use chrono::NaiveDate;
use clap::{CommandFactory, Parser};
use paydesk_core::models::SalaryEnvelope;
use paydesk_core::{SalaryApi, SalaryDraft, SalaryId, SalaryRecord};
use pretty_assertions::assert_eq;

use crate::cli::{Cli, Commands, CompletionShell, ListArgs, SortKey};
use crate::commands::add::run_add;
use crate::commands::common::{normalize_salary_date, parse_salary_id, FormFields};
use crate::commands::completions::{render_completions, run_completions};
use crate::commands::delete::run_delete;
use crate::commands::edit::run_edit;
use crate::commands::list::run_list;
use crate::error::CliError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    List,
    Create(SalaryDraft),
    Update(SalaryId, SalaryDraft),
    Remove(SalaryId),
}

#[derive(Default)]
struct FakeApi {
    records: RefCell<Vec<SalaryRecord>>,
    calls: RefCell<Vec<Call>>,
}

impl FakeApi {
    fn with_records(records: Vec<SalaryRecord>) -> Self {
        Self {
            records: RefCell::new(records),
            calls: RefCell::default(),
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl SalaryApi for &FakeApi {
    /// Mirrors the backend, which answers 404 for an empty collection.
    async fn list_all(&self) -> paydesk_core::Result<SalaryEnvelope> {
        self.calls.borrow_mut().push(Call::List);
        if self.records.borrow().is_empty() {
            return Err(paydesk_core::Error::Http {
                status: 404,
                body: "Couldn't find any salary. Add a salary first.".to_string(),
            });
        }
        Ok(SalaryEnvelope {
            data: self.records.borrow().clone(),
            links: Vec::new(),
        })
    }

    async fn create(&self, draft: &SalaryDraft) -> paydesk_core::Result<SalaryRecord> {
        self.calls.borrow_mut().push(Call::Create(draft.clone()));
        let next_id = self
            .records
            .borrow()
            .iter()
            .map(|record| record.salary_id.get())
            .max()
            .unwrap_or(0)
            + 1;
        let record = SalaryRecord {
            salary_id: SalaryId::new(next_id),
            employee: draft.employee().to_string(),
            amount: draft.amount().parse().unwrap(),
            salary_date: None,
            message: None,
            links: Vec::new(),
        };
        self.records.borrow_mut().push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: SalaryId, draft: &SalaryDraft) -> paydesk_core::Result<()> {
        self.calls.borrow_mut().push(Call::Update(id, draft.clone()));
        Ok(())
    }

    async fn remove(&self, id: SalaryId) -> paydesk_core::Result<String> {
        self.calls.borrow_mut().push(Call::Remove(id));
        self.records
            .borrow_mut()
            .retain(|record| record.salary_id != id);
        Ok(format!("Salary {id} deleted"))
    }
}

fn record(id: i64, employee: &str, amount: i64, day: u32) -> SalaryRecord {
    SalaryRecord {
        salary_id: SalaryId::new(id),
        employee: employee.to_string(),
        amount: amount.into(),
        salary_date: NaiveDate::from_ymd_opt(2024, 1, day)
            .and_then(|date| date.and_hms_opt(0, 0, 0)),
        message: None,
        links: Vec::new(),
    }
}

fn output(buffer: Vec<u8>) -> String {
    String::from_utf8(buffer).unwrap()
}

fn list_count(calls: &[Call]) -> usize {
    calls.iter().filter(|call| **call == Call::List).count()
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn list_arguments_parse() {
    let cli = Cli::try_parse_from([
        "paydesk",
        "--api-url",
        "http://example.com/api/v1",
        "list",
        "--sort",
        "amount",
        "--desc",
        "--page",
        "2",
    ])
    .unwrap();

    assert_eq!(cli.api_url.as_deref(), Some("http://example.com/api/v1"));
    let Commands::List(args) = cli.command else {
        panic!("expected list command");
    };
    assert_eq!(args.sort, Some(SortKey::Amount));
    assert!(args.desc);
    assert_eq!(args.page, 2);
    assert_eq!(args.per_page, 10);
}

#[test]
fn list_rejects_zero_page_and_page_size() {
    assert!(Cli::try_parse_from(["paydesk", "list", "--per-page", "0"]).is_err());
    assert!(Cli::try_parse_from(["paydesk", "list", "--page", "0"]).is_err());

    let cli = Cli::try_parse_from(["paydesk", "list", "--per-page", "25"]).unwrap();
    let Commands::List(args) = cli.command else {
        panic!("expected list command");
    };
    assert_eq!(args.per_page, 25);
}

#[test]
fn desc_requires_sort_column() {
    assert!(Cli::try_parse_from(["paydesk", "list", "--desc"]).is_err());
}

#[test]
fn parse_salary_id_rejects_non_numeric() {
    assert_eq!(parse_salary_id(" 42 ").unwrap(), SalaryId::new(42));
    assert!(matches!(
        parse_salary_id("abc"),
        Err(CliError::InvalidId(value)) if value == "abc"
    ));
}

#[test]
fn normalize_salary_date_accepts_date_time_and_bare_date() {
    assert_eq!(
        normalize_salary_date("2024-01-01T08:30:00.123Z").unwrap(),
        "2024-01-01T08:30:00"
    );
    assert_eq!(
        normalize_salary_date("2024-02-29").unwrap(),
        "2024-02-29T00:00:00"
    );
    assert!(matches!(
        normalize_salary_date("yesterday"),
        Err(CliError::InvalidDate(_))
    ));
}

#[tokio::test]
async fn list_prints_table_rows() {
    let api = FakeApi::with_records(vec![record(1, "Ann", 1000, 1)]);
    let mut out = Vec::new();

    run_list(&api, &ListArgs::default(), &mut out).await.unwrap();

    let text = output(out);
    let lines = text.lines().collect::<Vec<_>>();
    assert!(lines[0].contains("Employee"));
    assert!(lines[1].contains("Ann"));
    assert!(lines[1].contains("1000 EUR"));
    assert!(lines[1].ends_with("Jan 1, 2024 12:00 AM"));
    assert_eq!(lines[2], "Page 1 of 1 (1 salaries)");
    assert_eq!(api.calls(), vec![Call::List]);
}

#[tokio::test]
async fn list_sorts_and_paginates() {
    let api = FakeApi::with_records(vec![
        record(1, "Ann", 300, 1),
        record(2, "Bob", 100, 2),
        record(3, "Cid", 200, 3),
    ]);
    let args = ListArgs {
        sort: Some(SortKey::Amount),
        desc: true,
        page: 2,
        per_page: 2,
        json: true,
    };
    let mut out = Vec::new();

    run_list(&api, &args, &mut out).await.unwrap();

    let items: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(items.as_array().map(Vec::len), Some(1));
    assert_eq!(items[0]["employee"], "Bob");
    assert_eq!(items[0]["amount"], "100");
    assert_eq!(items[0]["salary_date"], "2024-01-02T00:00:00");
}

#[tokio::test]
async fn list_reports_empty_collection() {
    let api = FakeApi::default();
    let mut out = Vec::new();

    run_list(&api, &ListArgs::default(), &mut out).await.unwrap();

    assert_eq!(output(out), "No salaries\n");
    assert_eq!(api.calls(), vec![Call::List]);
}

#[tokio::test]
async fn placeholder_rows_have_no_id_and_cannot_be_deleted() {
    let mut placeholder = record(-1, "-", 0, 1);
    placeholder.salary_date = None;
    let api = FakeApi::with_records(vec![placeholder]);
    let mut out = Vec::new();

    run_list(&api, &ListArgs::default(), &mut out).await.unwrap();
    let text = output(out);
    assert!(text.lines().nth(1).unwrap().trim_start().starts_with("-  -"));

    let result = run_delete(&api, "-1", true, &mut Cursor::new(Vec::new()), &mut Vec::new()).await;
    assert!(matches!(result, Err(CliError::SalaryNotFound(id)) if id == "-1"));
    assert!(!api.calls().iter().any(|call| matches!(call, Call::Remove(_))));
}

#[tokio::test]
async fn edit_against_empty_backend_is_not_found() {
    let api = FakeApi::default();
    let fields = FormFields {
        amount: Some("10"),
        ..FormFields::default()
    };

    let result = run_edit(&api, "1", &fields, &mut Vec::new()).await;

    assert!(matches!(result, Err(CliError::SalaryNotFound(id)) if id == "1"));
    assert_eq!(api.calls(), vec![Call::List]);
}

#[tokio::test]
async fn add_rejects_invalid_amount_without_calling_backend() {
    let api = FakeApi::default();
    let fields = FormFields {
        employee: Some("Ann"),
        amount: Some("12.999"),
        date: None,
    };

    let result = run_add(&api, &fields, &mut Vec::new()).await;

    assert!(matches!(result, Err(CliError::InvalidAmount(value)) if value == "12.999"));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn add_creates_and_lists_once() {
    let api = FakeApi::default();
    let fields = FormFields {
        employee: Some("Ann"),
        amount: Some("1000"),
        date: Some("2024-01-01"),
    };
    let mut out = Vec::new();

    run_add(&api, &fields, &mut out).await.unwrap();

    assert_eq!(
        api.calls(),
        vec![
            Call::Create(SalaryDraft::new("Ann", "1000", "2024-01-01T00:00:00").unwrap()),
            Call::List,
        ]
    );
    assert!(output(out).contains("Ann"));
}

#[tokio::test]
async fn add_requires_employee() {
    let api = FakeApi::default();
    let fields = FormFields {
        employee: Some("   "),
        amount: Some("1000"),
        date: None,
    };

    let result = run_add(&api, &fields, &mut Vec::new()).await;

    assert!(matches!(result, Err(CliError::Core(_))));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn edit_merges_fields_into_existing_record() {
    let api = FakeApi::with_records(vec![record(1, "Ann", 1000, 1)]);
    let fields = FormFields {
        amount: Some("1000.5"),
        ..FormFields::default()
    };

    run_edit(&api, "1", &fields, &mut Vec::new()).await.unwrap();

    let calls = api.calls();
    assert_eq!(
        calls[1],
        Call::Update(
            SalaryId::new(1),
            SalaryDraft::new("Ann", "1000.5", "2024-01-01T00:00:00").unwrap()
        )
    );
    assert_eq!(list_count(&calls[2..]), 1);
}

#[tokio::test]
async fn edit_without_fields_is_rejected() {
    let api = FakeApi::default();

    let result = run_edit(&api, "1", &FormFields::default(), &mut Vec::new()).await;

    assert!(matches!(result, Err(CliError::NothingToEdit)));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn edit_unknown_salary_is_not_found() {
    let api = FakeApi::with_records(vec![record(1, "Ann", 1000, 1)]);
    let fields = FormFields {
        employee: Some("Bob"),
        ..FormFields::default()
    };

    let result = run_edit(&api, "7", &fields, &mut Vec::new()).await;

    assert!(matches!(result, Err(CliError::SalaryNotFound(id)) if id == "7"));
    assert_eq!(api.calls(), vec![Call::List]);
}

#[tokio::test]
async fn delete_declined_never_removes() {
    let api = FakeApi::with_records(vec![record(1, "Ann", 1000, 1)]);
    let mut input = Cursor::new(b"n\n".to_vec());
    let mut out = Vec::new();

    let result = run_delete(&api, "1", false, &mut input, &mut out).await;

    assert!(matches!(result, Err(CliError::DeleteAborted)));
    assert_eq!(api.calls(), vec![Call::List]);
    assert!(output(out).starts_with("Are you sure you want to delete this salary for employee Ann?"));
}

#[tokio::test]
async fn delete_confirmed_removes_and_lists_once() {
    let api = FakeApi::with_records(vec![record(1, "Ann", 1000, 1)]);
    let mut input = Cursor::new(b"yes\n".to_vec());
    let mut out = Vec::new();

    run_delete(&api, "1", false, &mut input, &mut out)
        .await
        .unwrap();

    assert_eq!(
        api.calls(),
        vec![Call::List, Call::Remove(SalaryId::new(1)), Call::List]
    );
    let text = output(out);
    assert!(text.contains("Deleted! Salary 1 deleted"));
    assert!(text.ends_with("No salaries\n"));
}

#[tokio::test]
async fn delete_with_yes_skips_prompt() {
    let api = FakeApi::with_records(vec![record(1, "Ann", 1000, 1)]);
    let mut input = Cursor::new(Vec::new());
    let mut out = Vec::new();

    run_delete(&api, "1", true, &mut input, &mut out)
        .await
        .unwrap();

    assert!(!output(out).contains("[y/N]"));
    assert!(api.calls().contains(&Call::Remove(SalaryId::new(1))));
}

#[test]
fn completions_name_the_binary() {
    let script = String::from_utf8(render_completions(CompletionShell::Bash)).unwrap();
    assert!(script.contains("paydesk"));
}

#[test]
fn completions_written_to_nested_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("completions").join("paydesk.fish");
    let mut out = Vec::new();

    run_completions(CompletionShell::Fish, Some(&path), &mut out).unwrap();

    assert_eq!(output(out), format!("{}\n", path.display()));
    let script = std::fs::read_to_string(&path).unwrap();
    assert!(script.contains("complete -c paydesk"));
}
