//! @ai:module:intent Sequential sync pass over product rows
//! @ai:module:layer application
//! @ai:module:public_api SyncRunner, RowOutcome, RunSummary
//! @ai:module:stateless false

use crate::catalog::ProductRow;
use crate::error::Result;
use crate::gateway::{ListingGateway, Pacer};
use crate::listing::{plan_row, RowPlan, SkipReason};
use std::sync::Arc;

/// @ai:intent What happened to a single row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Created {
        row: usize,
        listing_id: Option<String>,
    },
    Updated {
        row: usize,
        listing_id: String,
    },
    Skipped {
        row: usize,
        reason: SkipReason,
    },
}

impl RowOutcome {
    pub fn row(&self) -> usize {
        match self {
            RowOutcome::Created { row, .. }
            | RowOutcome::Updated { row, .. }
            | RowOutcome::Skipped { row, .. } => *row,
        }
    }
}

impl std::fmt::Display for RowOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowOutcome::Created { listing_id, .. } => write!(
                f,
                "Created draft listing: {}",
                listing_id.as_deref().unwrap_or("None")
            ),
            RowOutcome::Updated { listing_id, .. } => write!(f, "Updated listing: {}", listing_id),
            RowOutcome::Skipped { reason, .. } => write!(f, "{}", reason),
        }
    }
}

/// @ai:intent Totals for a completed pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub created: usize,
    pub updated: usize,
    pub skipped: usize,
    pub outcomes: Vec<RowOutcome>,
}

impl RunSummary {
    /// @ai:intent Count an outcome and keep it
    /// @ai:effects state:write
    pub fn record(&mut self, outcome: RowOutcome) {
        match outcome {
            RowOutcome::Created { .. } => self.created += 1,
            RowOutcome::Updated { .. } => self.updated += 1,
            RowOutcome::Skipped { .. } => self.skipped += 1,
        }
        self.outcomes.push(outcome);
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Processed {} rows: {} created, {} updated, {} skipped",
            self.total(),
            self.created,
            self.updated,
            self.skipped
        )
    }
}

/// @ai:intent Drives rows through planning, the gateway and the pacer
pub struct SyncRunner<G: ListingGateway, P: Pacer> {
    gateway: Arc<G>,
    pacer: P,
}

impl<G: ListingGateway, P: Pacer> SyncRunner<G, P> {
    /// @ai:intent Create a runner over a gateway and pacer
    /// @ai:effects pure
    pub fn new(gateway: Arc<G>, pacer: P) -> Self {
        Self { gateway, pacer }
    }

    /// @ai:intent Plan one row and issue at most one gateway call
    /// @ai:post Err from planning happens before any network call
    /// @ai:effects network
    pub async fn process_row(&self, row: &ProductRow) -> Result<RowOutcome> {
        let outcome = match plan_row(row)? {
            RowPlan::Create(payload) => {
                tracing::debug!("Row {}: creating draft listing '{}'", row.number, payload.title);
                let result = self.gateway.create_draft_listing(&payload).await?;

                RowOutcome::Created {
                    row: row.number,
                    listing_id: result.listing_id(),
                }
            }
            RowPlan::Update {
                listing_id,
                payload,
            } => {
                tracing::debug!("Row {}: updating listing {}", row.number, listing_id);
                self.gateway.update_listing(&listing_id, &payload).await?;

                RowOutcome::Updated {
                    row: row.number,
                    listing_id,
                }
            }
            RowPlan::Skip(reason) => {
                tracing::debug!("Row {}: skipped ({:?})", row.number, reason);

                RowOutcome::Skipped {
                    row: row.number,
                    reason,
                }
            }
        };

        Ok(outcome)
    }

    /// @ai:intent Process rows in order, pausing after each one
    /// @ai:post stops at the first error; rows before it stay processed
    /// @ai:effects network, time, io
    pub async fn run<I>(&self, rows: I) -> Result<RunSummary>
    where
        I: IntoIterator<Item = Result<ProductRow>>,
    {
        let mut summary = RunSummary::default();

        for row in rows {
            let row = row?;
            let outcome = self.process_row(&row).await?;

            tracing::debug!("[row {}] {}", outcome.row(), outcome);
            println!("{}", outcome);
            summary.record(outcome);

            self.pacer.wait().await;
        }

        Ok(summary)
    }
}
