//! HTTP implementation of the backend trait.

use crate::backend::MarketBackend;
use crate::error::ApiError;
use crate::requests::{CancelOrderRequest, CreateOrderRequest, CreatePaymentIntentRequest, OfferQuery};
use crate::responses::{ErrorBody, OrderRecord, PaymentIntentResponse};
use async_trait::async_trait;
use lastcall_commerce::ids::OrderId;
use lastcall_commerce::offer::Offer;
use lastcall_commerce::order::Order;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use url::Url;

/// Flat timeout applied to every backend call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for the backend.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// API base URL, e.g. `https://api.lastcall.app/v1/`.
    pub base_url: Url,
    /// Bearer token of the signed-in user, if any.
    pub bearer_token: Option<String>,
}

impl BackendConfig {
    /// Create a config for a base URL.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url).map_err(|e| ApiError::Url(e.to_string()))?;
        Ok(Self {
            base_url,
            bearer_token: None,
        })
    }

    /// Attach the signed-in user's bearer token.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }
}

/// reqwest-backed [`MarketBackend`].
#[derive(Debug, Clone)]
pub struct HttpMarketBackend {
    config: BackendConfig,
    http: reqwest::Client,
}

impl HttpMarketBackend {
    /// Build a client with the flat request timeout.
    pub fn new(config: BackendConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self { config, http })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.config
            .base_url
            .join(path)
            .map_err(|e| ApiError::Url(e.to_string()))
    }

    fn apply_auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.bearer_token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "backend GET");
        let req = self.apply_auth(self.http.get(url)).query(query);
        let resp = req.send().await?;
        Self::decode(resp).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "backend POST");
        let req = self.apply_auth(self.http.post(url)).json(body);
        let resp = req.send().await?;
        Self::decode(resp).await
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
        let status = resp.status();
        if !status.is_success() {
            let message = match resp.text().await {
                Ok(body) => match serde_json::from_str::<ErrorBody>(&body) {
                    Ok(parsed) => parsed.error,
                    Err(_) if !body.is_empty() => body,
                    Err(_) => status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string(),
                },
                Err(_) => status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string(),
            };
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl MarketBackend for HttpMarketBackend {
    async fn list_offers(&self, query: &OfferQuery) -> Result<Vec<Offer>, ApiError> {
        self.get_json("offers", &query.to_pairs()).await
    }

    async fn order(&self, order_id: &OrderId) -> Result<Order, ApiError> {
        let record: OrderRecord = self
            .get_json(&format!("orders/{}", order_id), &[])
            .await?;
        record.into_order()
    }

    async fn create_order(&self, request: &CreateOrderRequest) -> Result<Order, ApiError> {
        let record: OrderRecord = self.post_json("orders", request).await?;
        record.into_order()
    }

    async fn cancel_order(
        &self,
        order_id: &OrderId,
        reason: Option<&str>,
    ) -> Result<Order, ApiError> {
        let body = CancelOrderRequest {
            reason: reason.map(str::to_string),
        };
        let record: OrderRecord = self
            .post_json(&format!("orders/{}/cancel", order_id), &body)
            .await?;
        record.into_order()
    }

    async fn create_payment_intent(
        &self,
        order_id: &OrderId,
    ) -> Result<PaymentIntentResponse, ApiError> {
        let body = CreatePaymentIntentRequest {
            order_id: order_id.clone(),
        };
        self.post_json("payments/create-payment-intent", &body).await
    }
}
