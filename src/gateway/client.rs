//! @ai:module:intent Etsy Open API client for creating and patching listings
//! @ai:module:layer infrastructure
//! @ai:module:public_api ListingGateway, EtsyClient, ListingResult
//! @ai:module:stateless true

use crate::config::{ApiConfig, Credentials};
use crate::error::{Error, Result};
use crate::listing::{CreateListingPayload, UpdateListingPayload};
use serde::Serialize;
use serde_json::Value;

/// @ai:intent Trait for the remote listing service
#[allow(async_fn_in_trait)]
pub trait ListingGateway: Send + Sync {
    /// @ai:intent Create a new draft listing in the shop
    async fn create_draft_listing(&self, payload: &CreateListingPayload) -> Result<ListingResult>;

    /// @ai:intent Patch an existing listing
    async fn update_listing(
        &self,
        listing_id: &str,
        payload: &UpdateListingPayload,
    ) -> Result<ListingResult>;
}

/// @ai:intent Parsed JSON body returned by the listing service
#[derive(Debug, Clone, PartialEq)]
pub struct ListingResult {
    pub body: Value,
}

impl ListingResult {
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    /// @ai:intent Listing identifier from the response, numeric or string
    /// @ai:effects pure
    pub fn listing_id(&self) -> Option<String> {
        match self.body.get("listing_id")? {
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }
}

/// @ai:intent Etsy API client holding a fixed credential set
pub struct EtsyClient {
    client: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl EtsyClient {
    /// @ai:intent Create a client for the configured base URL
    /// @ai:effects pure
    pub fn new(config: &ApiConfig, credentials: Credentials) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    fn create_url(&self) -> String {
        format!("{}/shops/{}/listings", self.base_url, self.credentials.shop_id)
    }

    fn update_url(&self, listing_id: &str) -> String {
        format!("{}/listings/{}", self.base_url, listing_id)
    }

    /// @ai:intent Attach auth headers, send, and parse the JSON body
    /// @ai:post Err(Remote) on any non-success status
    /// @ai:effects network
    async fn send<T: Serialize + ?Sized>(
        &self,
        request: reqwest::RequestBuilder,
        payload: &T,
    ) -> Result<ListingResult> {
        let response = request
            .header("x-api-key", &self.credentials.api_key)
            .bearer_auth(&self.credentials.access_token)
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!("Failed to read error body for {} response: {}", status, e);
                    String::new()
                }
            };
            return Err(Error::Remote {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(ListingResult::new(Value::Object(Default::default())));
        }

        Ok(ListingResult::new(serde_json::from_slice(&bytes)?))
    }
}

impl ListingGateway for EtsyClient {
    /// @ai:intent POST a draft listing to the shop
    /// @ai:effects network
    async fn create_draft_listing(&self, payload: &CreateListingPayload) -> Result<ListingResult> {
        let url = self.create_url();
        tracing::debug!("POST {}", url);

        self.send(self.client.post(&url), payload).await
    }

    /// @ai:intent PATCH an existing listing
    /// @ai:effects network
    async fn update_listing(
        &self,
        listing_id: &str,
        payload: &UpdateListingPayload,
    ) -> Result<ListingResult> {
        let url = self.update_url(listing_id);
        tracing::debug!("PATCH {}", url);

        self.send(self.client.patch(&url), payload).await
    }
}
