//! @ai:module:intent Outbound calls to the listing service and pacing between them
//! @ai:module:layer infrastructure
//! @ai:module:public_api ListingGateway, EtsyClient, RecordingGateway, ListingResult, Pacer, FixedDelay

pub mod client;
pub mod pacer;
pub mod recording;

pub use client::{EtsyClient, ListingGateway, ListingResult};
pub use pacer::{FixedDelay, Pacer};
pub use recording::{RecordedCall, RecordingGateway};
