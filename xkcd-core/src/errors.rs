#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("there was an error fetching the comic: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("the server responded with code {code}\nMessage: {reason}")]
    Status { code: u16, reason: String },

    #[error("there was an error parsing the response JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("url parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("join error: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("no comic {offset} before comic #{latest}, the catalog starts at #1")]
    OutOfRange { latest: u64, offset: u32 },

    #[error("{failed} of {page_size} comics could not be fetched")]
    IndexIncomplete { failed: usize, page_size: usize },

    #[error("page size must be at least 1")]
    InvalidPageSize,
}

/// Coarse classification of an [`Error`], for callers choosing how to report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    Transport,
    Status,
    Decode,
    Index,
    Internal,
}

impl Error {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) => ErrorKind::Transport,
            Self::Status { .. } => ErrorKind::Status,
            Self::Decode(_) => ErrorKind::Decode,
            Self::OutOfRange { .. } | Self::IndexIncomplete { .. } | Self::InvalidPageSize => {
                ErrorKind::Index
            }
            Self::UrlParse(_) | Self::Join(_) => ErrorKind::Internal,
        }
    }

    /// The http status code, when the server answered with a failure.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
