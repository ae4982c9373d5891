use async_trait::async_trait;
pub use build_index::{BuildIndex, DEFAULT_PAGE_SIZE};
pub use client::{Client, Fetch, DEFAULT_BASE_URL};
pub use get_comic::GetComic;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{Error, Result};

pub mod build_index;
pub mod client;
pub mod get_comic;

/// Send a get request to `url` and decode the json response as `T`
///
/// Anything but a `200 OK` is reported as [`Error::Status`], the body is only decoded afterward.
pub(super) async fn get_json<T: DeserializeOwned>(
    http: &reqwest::Client,
    url: Url,
    context: &str,
) -> Result<T> {
    debug!("{context}: GET {url}");

    let response = http.get(url).send().await.map_err(|err| {
        debug!("error sending {context}: {err}");
        Error::from(err)
    })?;

    let status = response.status();
    if status != StatusCode::OK {
        debug!("{context} responded with {status}");
        return Err(Error::Status {
            code: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        });
    }

    let body = response.text().await?;

    serde_json::from_str(&body).map_err(|err| {
        debug!("error decoding {context}: {err}");
        err.into()
    })
}

#[async_trait]
pub trait Request {
    type Response;

    async fn request(self) -> Result<Self::Response>;
}
