//! @ai:module:intent Etsy listing sync library
//! @ai:module:layer application
//! @ai:module:public_api config, catalog, listing, gateway, runner, error

pub mod catalog;
pub mod config;
pub mod error;
pub mod gateway;
pub mod listing;
pub mod runner;

pub use catalog::{Action, CatalogReader, ProductRow};
pub use config::{ApiConfig, Credentials, RunConfig, SyncConfig};
pub use error::{Error, Result};
pub use gateway::{EtsyClient, FixedDelay, ListingGateway, ListingResult, Pacer, RecordingGateway};
pub use listing::{plan_row, CreateListingPayload, RowPlan, SkipReason, UpdateListingPayload};
pub use runner::{RowOutcome, RunSummary, SyncRunner};
