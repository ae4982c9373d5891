use crate::{Comic, Error, Result};

/// One position of an [`Index`]: the comic expected there and what fetching it produced.
#[derive(Debug)]
pub struct Entry {
    pub offset: u32,
    pub number: Option<u64>,
    pub outcome: Result<Comic>,
}

impl Entry {
    #[must_use]
    pub fn comic(&self) -> Option<&Comic> {
        self.outcome.as_ref().ok()
    }

    #[must_use]
    pub fn error(&self) -> Option<&Error> {
        self.outcome.as_ref().err()
    }
}

/// A page of the most recent comics, newest first.
///
/// Entry `i` always stands for comic `latest - i`, whatever order the fetches completed in.
/// Entries whose fetch failed keep their error so the caller decides whether to skip them,
/// show a placeholder, or give up.
#[derive(Debug)]
pub struct Index {
    entries: Vec<Entry>,
}

impl Index {
    /// # Panics
    ///
    /// Panics when `entries` is empty or its first entry isn't a fetched comic.
    pub(crate) fn new(entries: Vec<Entry>) -> Self {
        assert!(
            entries.first().is_some_and(|entry| entry.outcome.is_ok()),
            "an index is anchored on the latest comic"
        );
        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The comic the page starts from.
    #[must_use]
    pub fn latest(&self) -> &Comic {
        self.entries
            .first()
            .and_then(Entry::comic)
            .unwrap_or_else(|| unreachable!("an index is anchored on the latest comic"))
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn comics(&self) -> impl Iterator<Item = &Comic> {
        self.entries.iter().filter_map(Entry::comic)
    }

    pub fn failures(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|entry| entry.outcome.is_err())
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures().next().is_none()
    }

    /// # Errors
    ///
    /// Fails with [`Error::IndexIncomplete`] when at least one entry couldn't be fetched.
    pub fn ensure_complete(&self) -> Result<()> {
        let failed = self.failures().count();
        if failed > 0 {
            return Err(Error::IndexIncomplete {
                failed,
                page_size: self.entries.len(),
            });
        }
        Ok(())
    }

    /// Returns every comic of the page, in order.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::IndexIncomplete`] when at least one entry couldn't be fetched.
    pub fn into_complete(self) -> Result<Vec<Comic>> {
        self.ensure_complete()?;
        self.entries
            .into_iter()
            .map(|entry| entry.outcome)
            .collect()
    }
}
