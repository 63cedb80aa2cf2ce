//! Thin asynchronous client for the POS admin API.
//!
//! Every endpoint answers with the `{success, data}` envelope; `data` is only
//! trusted when `success` is true. Responses are snapshots — nothing is
//! cached on this side.

use reqwest::{Client, Url};
use rust_decimal::Decimal;
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;

use crate::domain::RichOrder;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8088/";
const BASE_URL_ENV: &str = "POS_ADMIN_API_URL";
const USER_AGENT: &str = "pos-admin-dashboard/0.1.0";

#[derive(Debug, Error)]
pub enum PosApiError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("api error: {0}")]
    Api(String),
}

/// Uniform response envelope of the POS API.
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    success: bool,
    #[serde(default)]
    data: Option<T>,
}

fn unwrap_envelope<T>(envelope: ApiEnvelope<T>) -> Result<T, PosApiError> {
    if envelope.success {
        envelope
            .data
            .ok_or_else(|| PosApiError::Api("response missing data".into()))
    } else {
        Err(PosApiError::Api("server reported failure".into()))
    }
}

#[derive(Clone)]
pub struct PosClient {
    http: Client,
    base_url: Url,
}

impl PosClient {
    pub fn new() -> Result<Self, PosApiError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Respects `POS_ADMIN_API_URL` when set, otherwise talks to the default
    /// local server.
    pub fn from_env() -> Result<Self, PosApiError> {
        match std::env::var(BASE_URL_ENV) {
            Ok(base) if !base.trim().is_empty() => Self::with_base_url(base.trim()),
            _ => Self::new(),
        }
    }

    pub fn with_base_url(base: &str) -> Result<Self, PosApiError> {
        let base_url = Url::parse(base)?;
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http, base_url })
    }

    /// One page of the orders list, newest first as the server returns them.
    /// `page` is 1-based.
    pub async fn get_orders(&self, page: u32) -> Result<Vec<RichOrder>, PosApiError> {
        let mut url = self.url("api/orders")?;
        url.query_pairs_mut().append_pair("page", &page.to_string());
        self.fetch_data(self.http.get(url)).await
    }

    /// Earnings per day, index 0 being the most recent day. The view clamps
    /// this onto its fixed card window; length is not checked here.
    pub async fn get_earnings_per_day(&self) -> Result<Vec<Decimal>, PosApiError> {
        let url = self.url("api/orders/earnings")?;
        self.fetch_data(self.http.get(url)).await
    }

    pub async fn get_total_earnings(&self) -> Result<Decimal, PosApiError> {
        let url = self.url("api/orders/totals")?;
        self.fetch_data(self.http.get(url)).await
    }

    /// Where the sales export lives. The download initiator consumes this;
    /// the server dictates the filename via response headers.
    pub fn export_totals_url(&self) -> Result<Url, url::ParseError> {
        self.base_url.join("api/orders/totals/export")
    }

    async fn fetch_data<T>(&self, builder: reqwest::RequestBuilder) -> Result<T, PosApiError>
    where
        T: DeserializeOwned,
    {
        let response = builder.send().await?.error_for_status()?;
        let envelope: ApiEnvelope<T> = response.json().await?;
        unwrap_envelope(envelope)
    }

    fn url(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path)
    }
}
