use anyhow::{Context, Error};
use lazy_static::lazy_static;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Response;
use reqwest_tracing::TracingMiddleware;
use std::collections::HashMap;
use thiserror::Error as ThisError;

use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

lazy_static! {
    static ref CLIENT: ClientWithMiddleware =   {
        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(3);
    ClientBuilder::new(reqwest::Client::new())
        // Retry failed requests.
        .with(RetryTransientMiddleware::new_with_policy(retry_policy))
        .with(TracingMiddleware::default())
        .build()
    };
}

pub struct HttpClient;

#[derive(ThisError, Debug)]
pub enum HttpClientError {
    #[error(transparent)]
    ResponseError(#[from] Error),
    #[error("httpBuilderError {0}")]
    HTTPBuilderError(String),
    #[error("{status} response from {url}")]
    ErrorResponse { status: u16, url: Url, body: String },
}


struct HeadersMapGenerator(HeaderMap);


impl HeadersMapGenerator {
    fn into_inner(self) -> HeaderMap {
        self.0
    }
}


impl TryFrom<HashMap<&'static str, String>> for HeadersMapGenerator {
    type Error = HttpClientError;

    fn try_from(value: HashMap<&'static str, String>) -> Result<Self, Self::Error> {
        let mut header_map = HeaderMap::new();

        for (key, value) in value.into_iter() {
            let value = HeaderValue::from_str(&value)
                .map_err(|err| HttpClientError::HTTPBuilderError(format!("{err} {value}")))?;
            header_map.insert(key, value);
        }
        Ok(Self(header_map))
    }
}

impl HttpClient {
    async fn get(url: Url) -> anyhow::Result<Response> {
        CLIENT
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Failed to fetch request from {url}"))
    }

    pub async fn get_json<DTO: DeserializeOwned>(url: Url) -> Result<DTO, HttpClientError> {
        let response = Self::get(url.clone()).await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HttpClientError::ErrorResponse {
                status: status.as_u16(),
                url,
                body,
            });
        }
        let err_msg = format!("Failed to deserialize response from {url}");
        response
            .json::<DTO>()
            .await
            .context(err_msg)
            .map_err(HttpClientError::ResponseError)
    }

    pub async fn post_json<DTO: DeserializeOwned>(
        url: Url,
        headers: HashMap<&'static str, String>,
        body: Value,
    ) -> Result<DTO, HttpClientError> {
        let generator = HeadersMapGenerator::try_from(headers)?;
        let header_map = generator.into_inner();
        let response = CLIENT
            .post(url.clone())
            .headers(header_map)
            .json(&body)
            .send()
            .await
            .with_context(|| format!("Failed to post request to {url}"))
            .map_err(HttpClientError::ResponseError)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HttpClientError::ErrorResponse {
                status: status.as_u16(),
                url,
                body,
            });
        }
        response
            .json::<DTO>()
            .await
            .context("Failed to deserialize response")
            .map_err(HttpClientError::ResponseError)
    }
}
