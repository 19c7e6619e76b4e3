//! Expense CRUD against the remote collection
//!
//! Each operation is one request/response round trip; nothing is retried and
//! no partial state survives a failure. Callers refetch after mutations and
//! replace their copy wholesale.

mod types;

use reqwest::Client;

use crate::error::Error;
use crate::fetch::Fetch;

pub use types::*;

/// Client for the `/expenses` collection
pub struct ExpensesClient {
    /// The base URL of the FinTrack API
    base_url: String,

    /// HTTP client
    client: Client,
}

impl ExpensesClient {
    /// Create a new ExpensesClient
    pub(crate) fn new(base_url: &str, client: Client) -> Self {
        Self {
            base_url: base_url.to_string(),
            client,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/expenses", self.base_url)
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/expenses/{}", self.base_url, id)
    }

    /// Fetch all expenses, in server-defined order
    pub async fn list(&self) -> Result<Vec<Expense>, Error> {
        Fetch::get(&self.client, &self.collection_url())
            .execute::<Vec<Expense>>()
            .await
    }

    /// Fetch a single expense by id.
    ///
    /// Fails with [`Error::NotFound`] when the id does not exist server-side.
    pub async fn get(&self, id: &str) -> Result<Expense, Error> {
        match Fetch::get(&self.client, &self.record_url(id))
            .execute::<Expense>()
            .await
        {
            Err(Error::NotFound(_)) => Err(Error::not_found(format!("expense {}", id))),
            other => other,
        }
    }

    /// Create a new expense; the server assigns `id` and `createdAt` and the
    /// completed record is returned.
    ///
    /// Required fields are validated before any network call.
    pub async fn create(&self, new_expense: &NewExpense) -> Result<Expense, Error> {
        new_expense.validate()?;

        Fetch::post(&self.client, &self.collection_url())
            .json(new_expense)?
            .execute::<Expense>()
            .await
    }

    /// Delete an expense by id.
    ///
    /// Deleting an id the server does not know fails with
    /// [`Error::NotFound`]; the failure is surfaced, not swallowed.
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        match Fetch::delete(&self.client, &self.record_url(id))
            .execute_empty()
            .await
        {
            Err(Error::NotFound(_)) => Err(Error::not_found(format!("expense {}", id))),
            other => other,
        }
    }
}
