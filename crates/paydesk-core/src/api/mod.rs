//! Salary data service
//!
//! The [`SalaryApi`] trait is the seam between the list view and the REST
//! backend; [`SalariesClient`] is the HTTP implementation.

mod client;

pub use client::{SalariesClient, SALARIES_PATH};

use crate::models::{SalaryDraft, SalaryEnvelope, SalaryId, SalaryRecord};
use crate::Result;

/// Trait for salary collection operations.
///
/// Every call is a single attempt: no retries, no timeouts.
#[allow(async_fn_in_trait)]
pub trait SalaryApi {
    /// Fetch the whole collection
    async fn list_all(&self) -> Result<SalaryEnvelope>;

    /// Create a salary from a draft, returning the stored record
    async fn create(&self, draft: &SalaryDraft) -> Result<SalaryRecord>;

    /// Update an existing salary with the fields of a draft
    async fn update(&self, id: SalaryId, draft: &SalaryDraft) -> Result<()>;

    /// Delete a salary, returning a human-readable confirmation
    async fn remove(&self, id: SalaryId) -> Result<String>;
}
