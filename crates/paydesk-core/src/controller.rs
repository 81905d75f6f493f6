//! Async driver for the salaries screen.
//!
//! Pairs a [`SalariesScreen`] with a [`SalaryApi`] and runs each user action
//! to completion: the request, the state update, and the follow-up list
//! fetch the screen asks for.

use crate::api::SalaryApi;
use crate::error::{Error, Result};
use crate::models::{SalaryId, SalaryRecord};
use crate::screen::{
    DeleteOutcome, DeletePrompt, FetchOutcome, FetchTicket, SalariesScreen, Submission,
    SubmitOutcome,
};

/// Salaries screen bound to a data service
pub struct ScreenController<A> {
    api: A,
    screen: SalariesScreen,
}

impl<A: SalaryApi> ScreenController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            screen: SalariesScreen::new(),
        }
    }

    pub const fn api(&self) -> &A {
        &self.api
    }

    pub const fn screen(&self) -> &SalariesScreen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut SalariesScreen {
        &mut self.screen
    }

    /// Initial load
    pub async fn mount(&mut self) -> FetchOutcome {
        self.refresh().await
    }

    /// Re-request the whole collection
    pub async fn refresh(&mut self) -> FetchOutcome {
        let ticket = self.screen.begin_fetch();
        self.run_fetch(ticket).await
    }

    async fn run_fetch(&mut self, ticket: FetchTicket) -> FetchOutcome {
        let result = self.api.list_all().await;
        self.screen.finish_fetch(ticket, result)
    }

    pub fn open_create(&mut self) {
        self.screen.open_create();
    }

    /// Open the edit dialog for a record in the held collection
    pub fn open_edit(&mut self, id: SalaryId) -> Result<()> {
        let record = self.listed_record(id)?;
        self.screen.open_edit(record);
        Ok(())
    }

    /// Close the dialog without submitting; still re-fetches once.
    pub async fn dismiss_dialog(&mut self) -> FetchOutcome {
        let ticket = self.screen.close_dialog();
        self.run_fetch(ticket).await
    }

    /// Submit the open dialog.
    ///
    /// `Err` only when the draft is incomplete; backend failures come back as
    /// [`SubmitOutcome::Failed`] with the dialog still open.
    pub async fn submit(&mut self) -> Result<SubmitOutcome> {
        let ticket = self.screen.begin_submit()?;
        let result = match ticket.submission() {
            Submission::Create(draft) => self.api.create(draft).await.map(|record| {
                tracing::info!("Created salary {}", record.salary_id);
            }),
            Submission::Update { id, draft } => self.api.update(*id, draft).await,
        };

        let outcome = self.screen.finish_submit(&ticket, result);
        if let SubmitOutcome::Saved(refresh) = &outcome {
            self.run_fetch(*refresh).await;
        }
        Ok(outcome)
    }

    /// Put the delete confirmation in front of the table
    pub fn request_delete(&mut self, id: SalaryId) -> Result<DeletePrompt> {
        let record = self.listed_record(id)?;
        let prompt = DeletePrompt::for_record(&record);
        self.screen.request_delete(record);
        Ok(prompt)
    }

    /// Answer the confirmation; `None` when nothing was deleted.
    pub async fn answer_delete(&mut self, confirmed: bool) -> Option<DeleteOutcome> {
        let id = self.screen.answer_delete(confirmed)?;
        let result = self.api.remove(id).await;

        let outcome = self.screen.finish_delete(result);
        if let DeleteOutcome::Deleted { refresh, .. } = &outcome {
            self.run_fetch(*refresh).await;
        }
        Some(outcome)
    }

    /// Stored record from the held collection; placeholders have no actions.
    fn listed_record(&self, id: SalaryId) -> Result<SalaryRecord> {
        match self.screen.record(id) {
            Some(record) if !record.salary_id.is_placeholder() => Ok(record.clone()),
            Some(_) => Err(Error::InvalidInput(format!(
                "salary {id} is a placeholder, not a stored record"
            ))),
            None => Err(Error::InvalidInput(format!("salary {id} is not in the list"))),
        }
    }
}
