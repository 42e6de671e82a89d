//! # Submission & Status Client
//!
//! Talks to the ledger REST API:
//!
//! | Call | Endpoint |
//! |------|----------|
//! | `submit` | `POST /batches` (octet-stream `BatchList`) |
//! | `batch_status` | `GET /batch_statuses?id=..&wait=..` |
//! | `fetch_*` | `GET /state?address=..` (base64 container bytes) |

use crate::config::ClientConfig;
use crate::errors::ClientError;
use base64::Engine;
use pn_01_addressing::{AddressSpace, Addresser};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use shared_types::{Batch, BatchList, Owner, OwnerContainer, Record, RecordContainer};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

// =============================================================================
// WIRE TYPES
// =============================================================================

/// Commit status of a batch as reported by the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BatchStatus {
    Committed,
    Invalid,
    Pending,
    #[serde(other)]
    Unknown,
}

impl BatchStatus {
    /// COMMITTED and INVALID never change again.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Committed | Self::Invalid)
    }
}

/// Rejection reported for one transaction of an invalid batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidTransaction {
    pub id: String,
    #[serde(default)]
    pub message: String,
}

/// Status entry for one batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchStatusEntry {
    pub id: String,
    pub status: BatchStatus,
    #[serde(default)]
    pub invalid_transactions: Vec<InvalidTransaction>,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    data: Vec<BatchStatusEntry>,
}

#[derive(Debug, Deserialize)]
struct StateItem {
    address: String,
    data: String,
}

#[derive(Debug, Default, Deserialize)]
struct Paging {
    next: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StateResponse {
    data: Vec<StateItem>,
    #[serde(default)]
    paging: Paging,
}

/// Result of [`SubmissionClient::post_batch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub batch_id: String,
    /// Terminal status, or the last one observed when the wait budget ran out.
    pub status: BatchStatus,
    pub invalid_transactions: Vec<InvalidTransaction>,
}

impl SubmissionOutcome {
    pub fn is_committed(&self) -> bool {
        self.status == BatchStatus::Committed
    }
}

/// Decoded entry found under the family namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerEntry {
    Owner(Owner),
    Record(Record),
}

// =============================================================================
// CLIENT
// =============================================================================

/// Grace period past a status query's wait before the client gives up.
const STATUS_TIMEOUT_MARGIN: Duration = Duration::from_millis(250);

/// HTTP client for the ledger REST API.
pub struct SubmissionClient {
    client: Client,
    config: ClientConfig,
    addresser: Addresser,
}

impl SubmissionClient {
    /// Create a client for `config`.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(ClientError::Http)?;

        Ok(Self {
            addresser: Addresser::new(config.family.clone()),
            client,
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn addresser(&self) -> &Addresser {
        &self.addresser
    }

    fn url(&self, suffix: &str) -> String {
        format!("{}/{}", self.config.rest_api_url, suffix)
    }

    /// POST a batch list.
    pub async fn submit(&self, batch_list: &BatchList) -> Result<(), ClientError> {
        let body = batch_list.encode()?;
        let response = self
            .client
            .post(self.url("batches"))
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(body)
            .send()
            .await
            .map_err(|e| self.connection_error(e))?;

        ensure_success(response).await?;
        Ok(())
    }

    /// Query the status of one batch, asking the server to block up to `wait`.
    pub async fn batch_status(
        &self,
        batch_id: &str,
        wait: Option<Duration>,
    ) -> Result<BatchStatusEntry, ClientError> {
        let mut request = self
            .client
            .get(self.url("batch_statuses"))
            .query(&[("id", batch_id)]);
        if let Some(wait) = wait.filter(|w| !w.is_zero()) {
            if wait.as_secs() > 0 {
                request = request.query(&[("wait", wait.as_secs().to_string())]);
            }
            request = request
                .timeout(wait + STATUS_TIMEOUT_MARGIN.min(self.config.request_timeout));
        }

        let response = request.send().await.map_err(|e| self.connection_error(e))?;
        let body: StatusResponse = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))?;

        body.data
            .into_iter()
            .find(|entry| entry.id == batch_id)
            .ok_or_else(|| ClientError::Parse(format!("no status for batch {batch_id}")))
    }

    /// Submit `batch`, then poll until it commits, is rejected, or `wait`
    /// elapses.
    ///
    /// Running out of budget is not an error: the last observed status
    /// (`Pending` or `Unknown`) is returned. A zero budget returns `Pending`
    /// right after submission.
    pub async fn post_batch(
        &self,
        batch: Batch,
        wait: Duration,
    ) -> Result<SubmissionOutcome, ClientError> {
        let batch_id = batch.id().to_string();
        let deadline = Instant::now() + wait;

        self.submit(&crate::builder::batch_list(batch)).await?;
        info!(batch_id = %batch_id, "batch submitted");

        let mut last = SubmissionOutcome {
            batch_id: batch_id.clone(),
            status: BatchStatus::Pending,
            invalid_transactions: Vec::new(),
        };

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }

            match self.batch_status(&batch_id, Some(remaining)).await {
                Ok(entry) => {
                    debug!(batch_id = %batch_id, status = ?entry.status, "batch status");
                    last.status = entry.status;
                    last.invalid_transactions = entry.invalid_transactions;
                    if last.status.is_terminal() {
                        return Ok(last);
                    }
                }
                Err(err) => {
                    warn!(batch_id = %batch_id, error = %err, "batch status query failed");
                    last.status = BatchStatus::Unknown;
                }
            }

            let remaining = deadline.saturating_duration_since(Instant::now());
            tokio::time::sleep(self.config.poll_interval.min(remaining)).await;
        }

        info!(batch_id = %batch_id, status = ?last.status, "wait budget exhausted");
        Ok(last)
    }

    // =========================================================================
    // STATE QUERIES
    // =========================================================================

    /// Raw `(address, bytes)` pairs under an address or prefix. Follows
    /// paging links. A 404 is an empty result.
    pub async fn state(&self, address: &str) -> Result<Vec<(String, Vec<u8>)>, ClientError> {
        let mut items = Vec::new();
        let mut next = Some(format!("{}?address={}", self.url("state"), address));

        while let Some(url) = next.take() {
            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|e| self.connection_error(e))?;
            if response.status() == StatusCode::NOT_FOUND {
                break;
            }

            let page: StateResponse = ensure_success(response)
                .await?
                .json()
                .await
                .map_err(|e| ClientError::Parse(e.to_string()))?;

            for item in page.data {
                let bytes = base64::engine::general_purpose::STANDARD
                    .decode(&item.data)
                    .map_err(|e| ClientError::Parse(format!("{}: {e}", item.address)))?;
                items.push((item.address, bytes));
            }
            next = page.paging.next;
        }
        Ok(items)
    }

    /// Owner registered under `public_key`, if any.
    pub async fn fetch_owner(&self, public_key: &str) -> Result<Option<Owner>, ClientError> {
        let address = self.addresser.owner_address(public_key);
        for (item_address, bytes) in self.state(&address).await? {
            if item_address == address {
                let container = OwnerContainer::decode(&bytes)?;
                return Ok(container.find(public_key).cloned());
            }
        }
        Ok(None)
    }

    /// Record stored under `record_id`, if any.
    pub async fn fetch_record(&self, record_id: &str) -> Result<Option<Record>, ClientError> {
        let address = self.addresser.record_address(record_id);
        for (item_address, bytes) in self.state(&address).await? {
            if item_address == address {
                let container = RecordContainer::decode(&bytes)?;
                return Ok(container.find(record_id).cloned());
            }
        }
        Ok(None)
    }

    /// Every owner and record under the family namespace.
    pub async fn fetch_namespace(&self) -> Result<Vec<LedgerEntry>, ClientError> {
        let mut entries = Vec::new();
        for (address, bytes) in self.state(self.addresser.namespace()).await? {
            match self.addresser.address_type(&address) {
                AddressSpace::Owner => entries.extend(
                    OwnerContainer::decode(&bytes)?
                        .entries
                        .into_iter()
                        .map(LedgerEntry::Owner),
                ),
                AddressSpace::Record => entries.extend(
                    RecordContainer::decode(&bytes)?
                        .entries
                        .into_iter()
                        .map(LedgerEntry::Record),
                ),
                AddressSpace::Other => {
                    debug!(address = %address, "skipping foreign address");
                }
            }
        }
        Ok(entries)
    }

    fn connection_error(&self, err: reqwest::Error) -> ClientError {
        if err.is_connect() {
            ClientError::Connection(format!("Cannot connect to {}", self.config.rest_api_url))
        } else {
            ClientError::Http(err)
        }
    }
}

async fn ensure_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Status {
        status: status.as_u16(),
        body,
    })
}

// =============================================================================
// TESTS
// =============================================================================
