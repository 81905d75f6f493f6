//! Add/edit dialog state

use crate::models::{SalaryDraft, SalaryId, SalaryRecord};
use crate::Result;

/// What the dialog submits to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(SalaryRecord),
}

/// A packaged draft ready to be sent to the data service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(SalaryDraft),
    Update { id: SalaryId, draft: SalaryDraft },
}

impl Submission {
    pub const fn draft(&self) -> &SalaryDraft {
        match self {
            Self::Create(draft) | Self::Update { draft, .. } => draft,
        }
    }
}

/// Ties a submit result to the dialog instance that issued it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    pub(crate) generation: u64,
    submission: Submission,
}

impl SubmitTicket {
    pub const fn submission(&self) -> &Submission {
        &self.submission
    }
}

/// State of an open add or edit dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryForm {
    mode: FormMode,
    draft: SalaryDraft,
    generation: u64,
    error: Option<String>,
    rejected_inputs: u64,
}

impl SalaryForm {
    pub(crate) const fn create(draft: SalaryDraft, generation: u64) -> Self {
        Self {
            mode: FormMode::Create,
            draft,
            generation,
            error: None,
            rejected_inputs: 0,
        }
    }

    pub(crate) const fn edit(record: SalaryRecord, draft: SalaryDraft, generation: u64) -> Self {
        Self {
            mode: FormMode::Edit(record),
            draft,
            generation,
            error: None,
            rejected_inputs: 0,
        }
    }

    pub const fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub const fn draft(&self) -> &SalaryDraft {
        &self.draft
    }

    /// Record being edited, if this is an edit dialog
    pub const fn target(&self) -> Option<&SalaryRecord> {
        match &self.mode {
            FormMode::Create => None,
            FormMode::Edit(record) => Some(record),
        }
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Last submit failure, cleared by the next submit
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Count of rejected amount edits; front ends key the amount input on it
    /// so a rejected keystroke redraws the previous value.
    pub const fn rejected_inputs(&self) -> u64 {
        self.rejected_inputs
    }

    pub const fn title(&self) -> &'static str {
        match &self.mode {
            FormMode::Create => "Add Salary",
            FormMode::Edit(_) => "Edit Salary",
        }
    }

    pub const fn submit_label(&self) -> &'static str {
        self.title()
    }

    pub fn set_employee(&mut self, value: &str) {
        self.draft.set_employee(value);
    }

    /// Returns `false` when the value was rejected and the draft kept its
    /// previous amount.
    pub fn set_amount(&mut self, value: &str) -> bool {
        let accepted = self.draft.set_amount(value);
        if !accepted {
            self.rejected_inputs += 1;
        }
        accepted
    }

    pub fn set_salary_date(&mut self, value: &str) {
        self.draft.set_salary_date(value);
    }

    pub(crate) fn begin_submit(&mut self) -> Result<SubmitTicket> {
        if let Err(error) = self.draft.validate() {
            self.error = Some(error.to_string());
            return Err(error);
        }
        self.error = None;

        let draft = self.draft.clone();
        let submission = match &self.mode {
            FormMode::Create => Submission::Create(draft),
            FormMode::Edit(record) => Submission::Update {
                id: record.salary_id,
                draft,
            },
        };
        Ok(SubmitTicket {
            generation: self.generation,
            submission,
        })
    }

    pub(crate) fn record_error(&mut self, message: String) {
        self.error = Some(message);
    }
}
