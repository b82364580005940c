//! @ai:module:intent In-memory gateway used for dry runs and tests
//! @ai:module:layer infrastructure
//! @ai:module:public_api RecordingGateway, RecordedCall
//! @ai:module:stateless false

use crate::error::Result;
use crate::gateway::client::{ListingGateway, ListingResult};
use crate::listing::{CreateListingPayload, UpdateListingPayload};
use serde_json::json;
use std::sync::Mutex;

/// @ai:intent A call the gateway would have sent
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Create(CreateListingPayload),
    Update {
        listing_id: String,
        payload: UpdateListingPayload,
    },
}

/// @ai:intent Gateway that records calls instead of sending them
pub struct RecordingGateway {
    calls: Mutex<Vec<RecordedCall>>,
    next_listing_id: Mutex<u64>,
}

impl RecordingGateway {
    /// @ai:intent Create an empty recorder; synthetic listing ids start at 1
    /// @ai:effects pure
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            next_listing_id: Mutex::new(1),
        }
    }

    /// @ai:intent Snapshot of every call recorded so far
    /// @ai:effects state:read
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: RecordedCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

impl Default for RecordingGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingGateway for RecordingGateway {
    /// @ai:intent Record the payload and answer with a synthetic draft
    /// @ai:effects state:write
    async fn create_draft_listing(&self, payload: &CreateListingPayload) -> Result<ListingResult> {
        let listing_id = match self.next_listing_id.lock() {
            Ok(mut next) => {
                let id = *next;
                *next += 1;
                id
            }
            Err(_) => 0,
        };

        self.record(RecordedCall::Create(payload.clone()));

        Ok(ListingResult::new(json!({
            "listing_id": listing_id,
            "title": payload.title,
            "state": payload.state,
        })))
    }

    /// @ai:intent Record the patch and echo the listing id
    /// @ai:effects state:write
    async fn update_listing(
        &self,
        listing_id: &str,
        payload: &UpdateListingPayload,
    ) -> Result<ListingResult> {
        self.record(RecordedCall::Update {
            listing_id: listing_id.to_string(),
            payload: payload.clone(),
        });

        Ok(ListingResult::new(json!({
            "listing_id": listing_id,
            "title": payload.title,
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(title: &str) -> CreateListingPayload {
        CreateListingPayload {
            title: title.to_string(),
            description: "d".to_string(),
            who_made: "i_did",
            when_made: "made_to_order",
            is_supply: false,
            taxonomy_id: 1,
            price: "1.00".to_string(),
            quantity: 1,
            tags: vec!["t".to_string()],
            materials: vec!["m".to_string()],
            state: "draft",
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let gateway = RecordingGateway::new();

        let first = gateway.create_draft_listing(&payload("a")).await.unwrap();
        let second = gateway.create_draft_listing(&payload("b")).await.unwrap();

        assert_eq!(first.listing_id(), Some("1".to_string()));
        assert_eq!(second.listing_id(), Some("2".to_string()));
        assert_eq!(gateway.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_update_echoes_listing_id() {
        let gateway = RecordingGateway::new();
        let update = UpdateListingPayload {
            title: "t".to_string(),
            description: "d".to_string(),
            price: "2.00".to_string(),
            quantity: 2,
            tags: vec![],
            materials: vec![],
        };

        let result = gateway.update_listing("555", &update).await.unwrap();

        assert_eq!(result.listing_id(), Some("555".to_string()));
        assert_eq!(
            gateway.calls(),
            vec![RecordedCall::Update {
                listing_id: "555".to_string(),
                payload: update,
            }]
        );
    }
}
