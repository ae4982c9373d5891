use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Url;

use crate::{Comic, ComicId, Result};

use super::get_json;

pub static DEFAULT_BASE_URL: &str = "https://xkcd.com";

/// Anything able to fetch a single comic.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, id: ComicId) -> Result<Comic>;
}

#[async_trait]
impl<T: Fetch + ?Sized> Fetch for Arc<T> {
    async fn fetch(&self, id: ComicId) -> Result<Comic> {
        (**self).fetch(id).await
    }
}

/// Shared http client bound to an api base url.
///
/// Comic paths resolve below the base url, so `https://host/api` serves the latest comic at
/// `https://host/api/info.0.json`. Cloning is cheap, clones reuse the same connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
}

impl Client {
    #[must_use]
    pub fn new(mut base_url: Url) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn url_for(&self, id: ComicId) -> Result<Url> {
        Ok(self.base_url.join(id.path().trim_start_matches('/'))?)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL.parse().unwrap())
    }
}

#[async_trait]
impl Fetch for Client {
    async fn fetch(&self, id: ComicId) -> Result<Comic> {
        get_json(&self.http, self.url_for(id)?, "get_comic").await
    }
}
