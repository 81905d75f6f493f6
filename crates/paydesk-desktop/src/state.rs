//! Application state management
//!
//! The salaries screen lives in one signal; every backend call is spawned
//! from here and reports back through the screen's tickets.

use dioxus::prelude::*;

use paydesk_core::screen::{DeleteOutcome, FetchTicket, SalariesScreen, Submission, SubmitOutcome};
use paydesk_core::{SalariesClient, SalaryApi, SalaryRecord};

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// List view, dialogs and notices
    pub screen: Signal<SalariesScreen>,
    /// Salaries REST client
    pub client: Signal<SalariesClient>,
}

impl AppState {
    /// Issue a new list fetch
    pub fn refresh(mut self) {
        let ticket = self.screen.write().begin_fetch();
        spawn(self.fetch(ticket));
    }

    async fn fetch(mut self, ticket: FetchTicket) {
        let client = (self.client)();
        let result = client.list_all().await;
        self.screen.write().finish_fetch(ticket, result);
    }

    pub fn open_create(mut self) {
        self.screen.write().open_create();
    }

    pub fn open_edit(mut self, record: SalaryRecord) {
        self.screen.write().open_edit(record);
    }

    /// Hide the add/edit dialog and re-fetch once.
    pub fn close_dialog(mut self) {
        let ticket = self.screen.write().close_dialog();
        spawn(self.fetch(ticket));
    }

    /// Submit the open dialog; the dialog stays open until the save succeeds.
    pub fn submit(mut self) {
        let ticket = match self.screen.write().begin_submit() {
            Ok(ticket) => ticket,
            Err(error) => {
                tracing::warn!("Salary draft not submitted: {error}");
                return;
            }
        };

        spawn(async move {
            let client = (self.client)();
            let result = match ticket.submission() {
                Submission::Create(draft) => client.create(draft).await.map(|record| {
                    tracing::info!("Created salary {}", record.salary_id);
                }),
                Submission::Update { id, draft } => client.update(*id, draft).await,
            };

            let outcome = self.screen.write().finish_submit(&ticket, result);
            if let SubmitOutcome::Saved(refresh) = outcome {
                self.fetch(refresh).await;
            }
        });
    }

    pub fn request_delete(mut self, record: SalaryRecord) {
        self.screen.write().request_delete(record);
    }

    /// Resolve the delete prompt; only a confirmation reaches the backend.
    pub fn answer_delete(mut self, confirmed: bool) {
        let Some(id) = self.screen.write().answer_delete(confirmed) else {
            return;
        };

        spawn(async move {
            let client = (self.client)();
            let result = client.remove(id).await;

            let outcome = self.screen.write().finish_delete(result);
            if let DeleteOutcome::Deleted { refresh, .. } = outcome {
                self.fetch(refresh).await;
            }
        });
    }

    pub fn dismiss_notice(mut self) {
        self.screen.write().dismiss_notice();
    }
}
