use std::{num::NonZeroU64, sync::Arc};

use async_trait::async_trait;
use futures::future::join_all;
use tracing::{debug, info};

use crate::{Client, ComicId, Entry, Error, Fetch, Index, Request, Result};

pub static DEFAULT_PAGE_SIZE: u32 = 20;

/// Fetches the latest comic, then the `page_size - 1` comics preceding it, all at once.
///
/// Every previous comic is fetched by its own task, and all tasks are spawned before any
/// is awaited. Each task owns one position of the page, decided before it starts, so the
/// result is ordered by descending number no matter which response arrives first.
///
/// Only a failure to fetch the latest comic fails the whole request. Any other failure is
/// kept in its [`Entry`].
#[derive(Debug)]
pub struct BuildIndex<F = Client> {
    page_size: u32,
    fetcher: Arc<F>,
}

impl BuildIndex {
    #[must_use]
    pub fn new(page_size: u32) -> Self {
        Self::with_fetcher(page_size, Client::default())
    }
}

impl Default for BuildIndex {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl<F> BuildIndex<F> {
    #[must_use]
    pub fn with_fetcher(page_size: u32, fetcher: F) -> Self {
        Self {
            page_size,
            fetcher: Arc::new(fetcher),
        }
    }
}

#[async_trait]
impl<F> Request for BuildIndex<F>
where
    F: Fetch + 'static,
{
    type Response = Index;

    async fn request(self) -> Result<Self::Response> {
        if self.page_size == 0 {
            return Err(Error::InvalidPageSize);
        }

        let latest = self.fetcher.fetch(ComicId::Latest).await?;
        let latest_num = latest.num;
        info!("Latest comic is #{latest_num}, fetching {} more", self.page_size - 1);

        let tasks = (1..self.page_size)
            .map(|offset| {
                let number = latest_num
                    .checked_sub(u64::from(offset))
                    .and_then(NonZeroU64::new);
                let fetcher = Arc::clone(&self.fetcher);
                let handle = tokio::spawn(async move {
                    let Some(number) = number else {
                        return Err(Error::OutOfRange {
                            latest: latest_num,
                            offset,
                        });
                    };
                    debug!("Fetching comic #{number}");
                    fetcher.fetch(ComicId::Number(number)).await
                });
                (offset, number, handle)
            })
            .collect::<Vec<_>>();

        let mut entries = Vec::with_capacity(tasks.len() + 1);
        entries.push(Entry {
            offset: 0,
            number: Some(latest_num),
            outcome: Ok(latest),
        });

        let (slots, handles): (Vec<_>, Vec<_>) = tasks
            .into_iter()
            .map(|(offset, number, handle)| ((offset, number), handle))
            .unzip();

        for ((offset, number), joined) in slots.into_iter().zip(join_all(handles).await) {
            let outcome = joined.unwrap_or_else(|err| Err(Error::from(err)));
            if let Err(err) = &outcome {
                debug!("Comic at offset {offset} unavailable: {err}");
            }
            entries.push(Entry {
                offset,
                number: number.map(NonZeroU64::get),
                outcome,
            });
        }

        Ok(Index::new(entries))
    }
}
