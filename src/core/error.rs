#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Parse,
    Config,
    Network,
    HttpStatus(u16),
    InvalidInput,
    InvalidState,
}

#[derive(Debug, thiserror::Error)]
#[error("{kind:?}: {context}")]
pub struct Error {
    pub kind: ErrorKind,
    pub context: String,
}

impl Error {
    pub fn new(kind: ErrorKind, context: String) -> Self {
        Error { kind, context }
    }

    /// Status code of a rejected remote call, if this error came from one
    pub fn status(&self) -> Option<u16> {
        match self.kind {
            ErrorKind::HttpStatus(code) => Some(code),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error {
            kind: ErrorKind::Io,
            context: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error {
            kind: ErrorKind::Parse,
            context: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error {
            kind: ErrorKind::Config,
            context: format!("TOML error: {}", err),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = match err.status() {
            Some(status) => ErrorKind::HttpStatus(status.as_u16()),
            None if err.is_decode() => ErrorKind::Parse,
            None => ErrorKind::Network,
        };
        Error {
            kind,
            context: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
