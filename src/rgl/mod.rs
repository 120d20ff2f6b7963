pub(crate) mod bans;
pub(crate) mod envelope;
pub(crate) mod matches;
pub(crate) mod profile;
pub(crate) mod search;
pub(crate) mod seasons;
pub(crate) mod teams;

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Result, RglError};
use crate::rate_limit::RateLimiter;

pub(crate) const BASE_URL: &str = "https://api.rgl.gg/v0";

/// How the API answered a request.
///
/// Bodies of `NotFound` and `RateLimited` answers are never read.
#[derive(Debug)]
pub(crate) enum Outcome {
    Success(Response),
    NotFound,
    RateLimited,
    /// Any other status. The body is kept for endpoints that return error
    /// envelopes.
    Rejected(Response),
}

/// Everything a request needs: the HTTP client, where to send it and how
/// to throttle it.
#[derive(Debug, Clone)]
pub(crate) struct Transport {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) limiter: Option<RateLimiter>,
    pub(crate) acquire_timeout: Option<Duration>,
}

impl Transport {
    pub(crate) fn new(http: reqwest::Client, limiter: Option<RateLimiter>) -> Self {
        Self {
            http,
            base_url: BASE_URL.to_string(),
            limiter,
            acquire_timeout: None,
        }
    }

    /// Append `segments` to the base URL's path, then `query` as a query
    /// string.
    ///
    /// Each segment is percent-encoded on its own, `/` included, so caller
    /// input such as a steam id always stays a single path segment.
    pub(crate) fn url(&self, segments: &[&str], query: &[(&str, u32)]) -> Result<String> {
        let invalid = || RglError::InvalidBaseUrl(self.base_url.clone());
        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|()| invalid())?
            .pop_if_empty()
            .extend(segments);
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, &value.to_string());
            }
        }
        Ok(url.into())
    }

    async fn throttle(&self) -> Result<()> {
        let Some(limiter) = &self.limiter else {
            return Ok(());
        };
        match self.acquire_timeout {
            Some(timeout) => {
                limiter
                    .acquire_until(tokio::time::Instant::now() + timeout)
                    .await
            }
            None => {
                limiter.acquire().await;
                Ok(())
            }
        }
    }

    /// Send a GET request and classify the answer.
    pub(crate) async fn get(
        &self,
        segments: &[&str],
        query: &[(&str, u32)],
    ) -> Result<(String, Outcome)> {
        let url = self.url(segments, query)?;
        self.throttle().await?;
        debug!(url, "GET");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| RglError::Http {
                url: url.clone(),
                source: e,
            })?;
        let outcome = classify(&url, response);
        Ok((url, outcome))
    }

    /// Send `body` as JSON in a POST request and classify the answer.
    pub(crate) async fn post<B>(
        &self,
        segments: &[&str],
        query: &[(&str, u32)],
        body: &B,
    ) -> Result<(String, Outcome)>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(segments, query)?;
        let body = serde_json::to_vec(body).map_err(RglError::Encode)?;
        self.throttle().await?;
        debug!(url, "POST");

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| RglError::Http {
                url: url.clone(),
                source: e,
            })?;
        let outcome = classify(&url, response);
        Ok((url, outcome))
    }
}

fn classify(url: &str, response: Response) -> Outcome {
    let status = response.status();
    debug!(url, %status, "response");
    match status {
        StatusCode::OK => Outcome::Success(response),
        StatusCode::NOT_FOUND => Outcome::NotFound,
        StatusCode::TOO_MANY_REQUESTS => {
            warn!(url, "rate limited by the API");
            Outcome::RateLimited
        }
        _ => Outcome::Rejected(response),
    }
}

/// Read the body and deserialize it into `T`.
///
/// The whole body is buffered with `bytes()` before decoding, since
/// `serde_json` needs a contiguous slice and the API's payloads are small.
/// Only `Success` answers and error envelopes are ever read this way; the
/// body of a `NotFound` or `RateLimited` answer is dropped unread.
pub(crate) async fn decode<T: DeserializeOwned>(url: &str, response: Response) -> Result<T> {
    let body = response
        .bytes()
        .await
        .map_err(|e| RglError::ResponseBody {
            url: url.to_owned(),
            source: e,
        })?;
    serde_json::from_slice(&body).map_err(|e| RglError::Decode {
        url: url.to_owned(),
        source: e,
    })
}

/// Fetch a single resource, mapping an absent one to `T::default()`.
pub(crate) async fn get_or_default<T>(transport: &Transport, segments: &[&str]) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let (url, outcome) = transport.get(segments, &[]).await?;
    match outcome {
        Outcome::Success(response) => decode(&url, response).await,
        Outcome::NotFound => {
            debug!(url, "resource not found");
            Ok(T::default())
        }
        Outcome::RateLimited => Err(RglError::RateLimited { url }),
        Outcome::Rejected(response) => Err(RglError::UnexpectedStatus {
            url,
            status: response.status(),
        }),
    }
}

/// POST `body`, decoding a 200 answer into `T`, mapping 404 to
/// `T::default()` and any other answer through the error envelope.
pub(crate) async fn post_or_default<B, T>(
    transport: &Transport,
    segments: &[&str],
    query: &[(&str, u32)],
    body: &B,
) -> Result<T>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned + Default,
{
    let (url, outcome) = transport.post(segments, query, body).await?;
    match outcome {
        Outcome::Success(response) => decode(&url, response).await,
        Outcome::NotFound => {
            debug!(url, "nothing found");
            Ok(T::default())
        }
        Outcome::RateLimited => Err(RglError::RateLimited { url }),
        Outcome::Rejected(response) => Err(envelope::interpret(url, response).await),
    }
}
