//! Salaries list view state.
//!
//! `SalariesScreen` owns the authoritative collection and the dialog state.
//! It performs no I/O: every asynchronous step is split into a `begin_*`
//! call that hands out a ticket and a `finish_*` call that applies the
//! result. Tickets carry generation numbers so results arriving after the
//! state moved on (a newer fetch, a closed or re-seeded dialog) are dropped.

mod form;
mod notice;
mod table;

use std::collections::VecDeque;

use chrono::NaiveDateTime;

pub use form::{FormMode, SalaryForm, Submission, SubmitTicket};
pub use notice::{Notice, NoticeKind};
pub use table::{
    format_amount, format_date, SortColumn, SortDirection, SortSpec, TableRow, TableState,
    CURRENCY_SUFFIX, DISPLAY_DATE_FORMAT, EMPLOYEE_CELL_CHARS, ROWS_PER_PAGE_OPTIONS,
};

use crate::error::{Error, Result};
use crate::models::{SalaryDraft, SalaryEnvelope, SalaryId, SalaryRecord};

/// Ties a list-fetch result to the request that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

impl FetchTicket {
    pub const fn generation(self) -> u64 {
        self.generation
    }
}

/// Which dialog, if any, is in front of the table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Idle,
    Creating(SalaryForm),
    Editing(SalaryForm),
    ConfirmingDelete(SalaryRecord),
}

/// Text of the delete confirmation prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePrompt {
    pub title: String,
    pub text: String,
    pub confirm_label: &'static str,
    pub cancel_label: &'static str,
}

impl DeletePrompt {
    pub fn for_record(record: &SalaryRecord) -> Self {
        Self {
            title: format!(
                "Are you sure you want to delete this salary for employee {}",
                record.employee
            ),
            text: "You won't be able to revert this!".to_string(),
            confirm_label: "Yes, delete it!",
            cancel_label: "Cancel",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    Failed(String),
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Saved; the dialog closed and the list must be re-fetched
    Saved(FetchTicket),
    /// Rejected by the backend; the dialog stays open with its draft
    Failed(String),
    /// The dialog was closed or re-seeded before the result arrived
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted { message: String, refresh: FetchTicket },
    Failed(String),
}

/// State of the salaries screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalariesScreen {
    loading: bool,
    envelope: Option<SalaryEnvelope>,
    view: ViewState,
    table: TableState,
    notices: VecDeque<Notice>,
    fetch_generation: u64,
    dialog_generation: u64,
}

impl Default for SalariesScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SalariesScreen {
    pub fn new() -> Self {
        Self {
            loading: true,
            envelope: None,
            view: ViewState::Idle,
            table: TableState::default(),
            notices: VecDeque::new(),
            fetch_generation: 0,
            dialog_generation: 0,
        }
    }

    /// True until the first list fetch completes; front ends render nothing
    /// meanwhile.
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    pub const fn envelope(&self) -> Option<&SalaryEnvelope> {
        self.envelope.as_ref()
    }

    /// Held records in server order
    pub fn records(&self) -> &[SalaryRecord] {
        match &self.envelope {
            Some(envelope) => &envelope.data,
            None => &[],
        }
    }

    pub fn record(&self, id: SalaryId) -> Option<&SalaryRecord> {
        self.envelope.as_ref().and_then(|envelope| envelope.find(id))
    }

    pub const fn view(&self) -> &ViewState {
        &self.view
    }

    pub const fn table(&self) -> &TableState {
        &self.table
    }

    /// Sorted rows of the current page
    pub fn rows(&self) -> Vec<TableRow> {
        self.table.rows(self.records())
    }

    pub fn page_count(&self) -> usize {
        self.table.page_count(self.records().len())
    }

    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.table.toggle_sort(column);
    }

    pub fn set_sort(&mut self, sort: Option<SortSpec>) {
        self.table.set_sort(sort);
    }

    pub fn set_page(&mut self, page: usize) {
        let total = self.records().len();
        self.table.set_page(page, total);
    }

    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        self.table.set_rows_per_page(rows_per_page);
    }

    // --- list fetch ---

    /// Start a list fetch. Only the most recent ticket is applied.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.fetch_generation += 1;
        tracing::debug!("Fetching salaries (generation {})", self.fetch_generation);
        FetchTicket {
            generation: self.fetch_generation,
        }
    }

    /// Apply a list-fetch result.
    ///
    /// A failure drops the held collection and leaves an empty table; the
    /// backend answers an empty collection with an error status.
    pub fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<SalaryEnvelope>,
    ) -> FetchOutcome {
        if ticket.generation != self.fetch_generation {
            tracing::debug!(
                "Discarding stale salaries fetch (generation {}, latest {})",
                ticket.generation,
                self.fetch_generation
            );
            return FetchOutcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(envelope) => {
                tracing::info!("Loaded {} salaries", envelope.len());
                self.table.clamp_page(envelope.len());
                self.envelope = Some(envelope);
                FetchOutcome::Applied
            }
            Err(error) => {
                tracing::error!("Failed to fetch salaries: {error}");
                self.envelope = None;
                self.table.clamp_page(0);
                FetchOutcome::Failed(error.to_string())
            }
        }
    }

    // --- add/edit dialogs ---

    pub fn open_create(&mut self) {
        self.open_create_at(chrono::Local::now().naive_local());
    }

    /// Open the add dialog with a fresh draft dated `now`
    pub fn open_create_at(&mut self, now: NaiveDateTime) {
        let generation = self.next_dialog_generation();
        self.view = ViewState::Creating(SalaryForm::create(
            SalaryDraft::fresh_at(now),
            generation,
        ));
    }

    pub fn open_edit(&mut self, record: SalaryRecord) {
        self.open_edit_at(record, chrono::Local::now().naive_local());
    }

    /// Open the edit dialog seeded from `record`.
    ///
    /// Calling this while already editing re-seeds the draft; a submit still
    /// in flight for the previous target is then discarded.
    pub fn open_edit_at(&mut self, record: SalaryRecord, now: NaiveDateTime) {
        let generation = self.next_dialog_generation();
        let draft = SalaryDraft::from_record_at(&record, now);
        self.view = ViewState::Editing(SalaryForm::edit(record, draft, generation));
    }

    /// Open add/edit dialog, if any
    pub const fn form(&self) -> Option<&SalaryForm> {
        match &self.view {
            ViewState::Creating(form) | ViewState::Editing(form) => Some(form),
            ViewState::Idle | ViewState::ConfirmingDelete(_) => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut SalaryForm> {
        match &mut self.view {
            ViewState::Creating(form) | ViewState::Editing(form) => Some(form),
            ViewState::Idle | ViewState::ConfirmingDelete(_) => None,
        }
    }

    /// Record targeted by the edit dialog
    pub fn selected_record(&self) -> Option<&SalaryRecord> {
        self.form().and_then(SalaryForm::target)
    }

    /// Close the add/edit dialog and start the follow-up list fetch.
    ///
    /// Runs after a successful submit and on plain dismissal alike.
    pub fn close_dialog(&mut self) -> FetchTicket {
        if self.form().is_some() {
            self.view = ViewState::Idle;
        }
        self.next_dialog_generation();
        self.begin_fetch()
    }

    /// Package the open dialog's draft for submission.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket> {
        let form = self
            .form_mut()
            .ok_or_else(|| Error::InvalidInput("no salary dialog is open".into()))?;
        form.begin_submit()
    }

    /// Apply the data service's answer to a submission.
    pub fn finish_submit(&mut self, ticket: &SubmitTicket, result: Result<()>) -> SubmitOutcome {
        let current = self
            .form()
            .is_some_and(|form| form.generation() == ticket.generation);
        if !current {
            tracing::debug!("Discarding submit result for a closed dialog");
            return SubmitOutcome::Stale;
        }

        match result {
            Ok(()) => {
                tracing::info!("Salary saved");
                SubmitOutcome::Saved(self.close_dialog())
            }
            Err(error) => {
                tracing::warn!("Failed to save salary: {error}");
                let message = error.to_string();
                if let Some(form) = self.form_mut() {
                    form.record_error(message.clone());
                }
                self.notices.push_back(Notice::save_failed(message.clone()));
                SubmitOutcome::Failed(message)
            }
        }
    }

    // --- delete ---

    /// Ask for confirmation before deleting `record`
    pub fn request_delete(&mut self, record: SalaryRecord) {
        self.next_dialog_generation();
        self.view = ViewState::ConfirmingDelete(record);
    }

    pub fn delete_prompt(&self) -> Option<DeletePrompt> {
        match &self.view {
            ViewState::ConfirmingDelete(record) => Some(DeletePrompt::for_record(record)),
            _ => None,
        }
    }

    /// Resolve the confirmation prompt.
    ///
    /// Returns the id to delete only on an explicit confirmation.
    pub fn answer_delete(&mut self, confirmed: bool) -> Option<SalaryId> {
        let ViewState::ConfirmingDelete(record) = &self.view else {
            return None;
        };
        let record = record.clone();
        self.view = ViewState::Idle;

        if confirmed {
            tracing::info!("Deleting salary {} ({})", record.salary_id, record.employee);
            Some(record.salary_id)
        } else {
            tracing::debug!("Delete of salary {} cancelled", record.salary_id);
            None
        }
    }

    /// Apply the delete result: notice plus re-fetch on success, generic
    /// error notice and no re-fetch on failure.
    pub fn finish_delete(&mut self, result: Result<String>) -> DeleteOutcome {
        match result {
            Ok(message) => {
                self.notices.push_back(Notice::deleted(message.clone()));
                DeleteOutcome::Deleted {
                    message,
                    refresh: self.begin_fetch(),
                }
            }
            Err(error) => {
                tracing::error!("Failed to delete salary: {error}");
                self.notices.push_back(Notice::delete_failed());
                DeleteOutcome::Failed(error.to_string())
            }
        }
    }

    // --- notices ---

    /// Notice currently shown, oldest first
    pub fn notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn dismiss_notice(&mut self) -> Option<Notice> {
        self.notices.pop_front()
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }

    fn next_dialog_generation(&mut self) -> u64 {
        self.dialog_generation += 1;
        self.dialog_generation
    }
}
