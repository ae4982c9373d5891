use async_trait::async_trait;

use crate::{Client, Comic, ComicId, Request, Result};

use super::get_json;

/// Get the metadata of one comic, or of the latest one.
#[derive(Debug, Clone)]
pub struct GetComic {
    id: ComicId,
    client: Option<Client>,
}

impl GetComic {
    pub fn new(id: impl Into<ComicId>) -> Self {
        Self {
            id: id.into(),
            client: None,
        }
    }

    #[must_use]
    pub fn latest() -> Self {
        Self::new(ComicId::Latest)
    }

    #[must_use]
    pub fn set_client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }
}

#[async_trait]
impl Request for GetComic {
    type Response = Comic;

    async fn request(self) -> Result<Self::Response> {
        let client = self.client.unwrap_or_default();
        let url = client.url_for(self.id)?;
        get_json(client.http(), url, "get_comic").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_is_only_built_when_missing() {
        let request = GetComic::new(614_i64);
        assert!(request.client.is_none());

        let client = Client::new("http://127.0.0.1:8080".parse().unwrap());
        let request = GetComic::latest().set_client(client);
        assert_eq!(
            request
                .client
                .as_ref()
                .and_then(|client| client.url_for(request.id).ok())
                .map(String::from),
            Some("http://127.0.0.1:8080/info.0.json".to_string())
        );
    }
}
