//! The lifecycle contract a resource fulfills for the plugin host.

use std::fmt;

use async_trait::async_trait;
use signalfx_client::ClientError;

use crate::alert_muting::PayloadError;

#[async_trait]
pub trait Resource: Send + Sync {
    type Data: Send + Sync;

    fn type_name(&self) -> &'static str;

    /// Creates the remote entity and fills in the id and observed attributes.
    async fn create(&self, data: &mut Self::Data) -> Result<(), ResourceError>;

    /// Refreshes `data` from the remote entity. A vanished entity clears the
    /// id instead of failing.
    async fn read(&self, data: &mut Self::Data) -> Result<(), ResourceError>;

    /// Pushes the declared attributes. On error `data` is left untouched.
    async fn update(&self, data: &mut Self::Data) -> Result<(), ResourceError>;

    async fn delete(&self, data: &Self::Data) -> Result<(), ResourceError>;

    async fn exists(&self, data: &Self::Data) -> Result<bool, ResourceError>;

    /// Pass-through import: the returned data carries only the id and must be
    /// followed by [`Resource::read`].
    fn import(&self, id: &str) -> Self::Data;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
    Exists,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Exists => "exists",
        };
        f.write_str(s)
    }
}

#[derive(Debug)]
pub enum ResourceError {
    Payload(PayloadError),
    Api {
        operation: Operation,
        source: ClientError,
    },
    MissingId(Operation),
}

impl ResourceError {
    pub fn api(operation: Operation, source: ClientError) -> Self {
        Self::Api { operation, source }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { source, .. } if source.is_not_found())
    }
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Payload(e) => write!(f, "failed creating json payload: {e}"),
            Self::Api { operation, source } => {
                write!(f, "{operation} alert muting rule: {source}")
            }
            Self::MissingId(operation) => {
                write!(f, "{operation} alert muting rule: resource has no id")
            }
        }
    }
}

impl std::error::Error for ResourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Payload(e) => Some(e),
            Self::Api { source, .. } => Some(source),
            Self::MissingId(_) => None,
        }
    }
}

impl From<PayloadError> for ResourceError {
    fn from(e: PayloadError) -> Self {
        Self::Payload(e)
    }
}
