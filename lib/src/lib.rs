//! Product tracking API bindings for Rust
//! Provides functions to list, create and inspect tracked products on a price tracker backend

use std::time::Duration;

use chrono::NaiveDateTime;
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Backend location used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/products/";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// A product as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub url: String,
    pub current_price: f64,
    #[serde(default)]
    pub previous_price: Option<f64>,
    #[serde(default)]
    pub highest_price: Option<f64>,
    #[serde(default)]
    pub lowest_price: Option<f64>,
    #[serde(default)]
    pub last_updated: Option<NaiveDateTime>,
}

/// Payload accepted by the create endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub url: String,
    pub current_price: f64,
}

/// Deal report for a product with enough price history.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisReport {
    pub name: String,
    pub current_price: f64,
    #[serde(default)]
    pub lowest_price: Option<f64>,
    #[serde(default)]
    pub highest_price: Option<f64>,
    pub deal_score: u32,
    #[serde(default)]
    pub remarks: Vec<String>,
}

impl AnalysisReport {
    /// Score above which the backend raises a price alert
    pub const ALERT_THRESHOLD: u32 = 80;

    pub fn is_price_alert(&self) -> bool {
        self.deal_score > Self::ALERT_THRESHOLD
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceAnalysis {
    Report(AnalysisReport),
    Pending { message: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DropPrediction {
    pub current_price: f64,
    pub predicted_drop_probability: f64,
    pub prediction_comment: String,
}

pub struct ProductsClient {
    base: Url,
    client: Client,
}

impl ProductsClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, None)
    }

    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base: normalize_base(base_url)?,
            client: builder.build()?,
        })
    }

    /// The collection URL, always ending in `/`
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// List all tracked products, in the order the backend returns them
    pub fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let response = self.client.get(self.base.clone()).send()?;
        decode(check_status(response)?)
    }

    /// Create a product. Returns the response body, whatever its shape.
    pub fn create_product(&self, product: &NewProduct) -> Result<serde_json::Value, ApiError> {
        let response = self.client.post(self.base.clone()).json(product).send()?;
        decode(check_status(response)?)
    }

    /// Fetch a single product by ID
    pub fn get_product(&self, id: i64) -> Result<Product, ApiError> {
        let url = self.base.join(&id.to_string())?;
        let response = self.client.get(url).send()?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(format!("product {}", id)));
        }

        decode(check_status(response)?)
    }

    /// Fetch the deal analysis of a product
    pub fn analyze_product(&self, id: i64) -> Result<PriceAnalysis, ApiError> {
        let url = self.base.join(&format!("{}/analysis", id))?;
        let response = self.client.get(url).send()?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(format!("product {}", id)));
        }

        decode(check_status(response)?)
    }

    /// Ask the backend for a price drop prediction on a product page
    pub fn predict_drop(&self, product_url: &str) -> Result<DropPrediction, ApiError> {
        let mut url = self.base.join("predict_drop/")?;
        url.query_pairs_mut().append_pair("url", product_url);

        let response = self.client.get(url).send()?;
        decode(check_status(response)?)
    }
}

/// Extract the product echoed back by the create endpoint, if any
pub fn created_product(body: &serde_json::Value) -> Option<Product> {
    body.get("product")
        .and_then(|p| serde_json::from_value(p.clone()).ok())
}

fn normalize_base(base_url: &str) -> Result<Url, ApiError> {
    let mut base = Url::parse(base_url.trim())?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base)
}

fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            url: response.url().to_string(),
        });
    }
    Ok(response)
}

fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    Ok(response.json()?)
}

/// Create a new products client
pub fn create_client(base_url: &str) -> Result<ProductsClient, ApiError> {
    ProductsClient::new(base_url)
}

/// List all tracked products
pub fn list_products(base_url: &str) -> Result<Vec<Product>, ApiError> {
    create_client(base_url)?.list_products()
}

/// Create a product
pub fn create_product(base_url: &str, product: &NewProduct) -> Result<serde_json::Value, ApiError> {
    create_client(base_url)?.create_product(product)
}
