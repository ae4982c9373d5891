use std::{fmt, num::NonZeroU64};

use serde::Deserialize;

/// Metadata for one comic, as served by the json api.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub struct Comic {
    pub num: u64,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub link: String,
    pub title: String,
    #[serde(default)]
    pub safe_title: String,
    #[serde(default)]
    pub img: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub news: String,
    #[serde(default)]
    pub transcript: String,
}

impl Comic {
    /// Publication date as `month/day/year`, untouched.
    #[must_use]
    pub fn date(&self) -> String {
        format!("{}/{}/{}", self.month, self.day, self.year)
    }
}

/// Which comic to request: the most recent one, or a specific number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ComicId {
    #[default]
    Latest,
    Number(NonZeroU64),
}

impl ComicId {
    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::Latest => "/info.0.json".to_string(),
            Self::Number(num) => format!("/{num}/info.0.json"),
        }
    }
}

/// Zero and negative numbers all mean the latest comic.
impl From<i64> for ComicId {
    fn from(num: i64) -> Self {
        u64::try_from(num)
            .ok()
            .and_then(NonZeroU64::new)
            .map_or(Self::Latest, Self::Number)
    }
}

impl From<NonZeroU64> for ComicId {
    fn from(num: NonZeroU64) -> Self {
        Self::Number(num)
    }
}

impl fmt::Display for ComicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => write!(f, "latest"),
            Self::Number(num) => write!(f, "#{num}"),
        }
    }
}

/// Resource path for a comic number, non positive numbers resolve to the latest comic.
#[must_use]
pub fn path_for(num: i64) -> String {
    ComicId::from(num).path()
}
