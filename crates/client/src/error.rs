use std::fmt;

#[derive(Debug)]
pub enum ClientError {
    Transport(String),
    NotFound(String),
    Status { status: u16, body: String },
    Decode(String),
    InvalidRequest(String),
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub(crate) fn from_status(status: u16, path: &str, body: String) -> Self {
        if status == 404 {
            Self::NotFound(path.to_string())
        } else {
            Self::Status { status, body }
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "transport: {e}"),
            Self::NotFound(path) => write!(f, "not found (404): {path}"),
            Self::Status { status, body } if body.is_empty() => {
                write!(f, "rejected with status {status}")
            }
            Self::Status { status, body } => write!(f, "rejected with status {status}: {body}"),
            Self::Decode(e) => write!(f, "decode: {e}"),
            Self::InvalidRequest(msg) => write!(f, "invalid request: {msg}"),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}
