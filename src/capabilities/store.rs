//! Durable key-value store capability.
//!
//! The shell owns the actual storage (browser `localStorage`, a plist, a
//! SQLite table); the core only ever issues whole-value reads and writes
//! against a small, fixed set of string keys.

use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_KEY_LENGTH: usize = 64;
pub const MAX_VALUE_SIZE: usize = 64 * 1024;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "op", content = "data")]
pub enum StoreOperation {
    Read { key: String },
    Write { key: String, value: Vec<u8> },
    Delete { key: String },
}

impl StoreOperation {
    pub fn read(key: impl Into<String>) -> Result<Self, StoreError> {
        let key = key.into();
        validate_key(&key)?;
        Ok(Self::Read { key })
    }

    pub fn write(key: impl Into<String>, value: Vec<u8>) -> Result<Self, StoreError> {
        let key = key.into();
        validate_key(&key)?;
        if value.len() > MAX_VALUE_SIZE {
            return Err(StoreError::ValueTooLarge {
                size: value.len(),
                max: MAX_VALUE_SIZE,
            });
        }
        Ok(Self::Write { key, value })
    }

    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Read { key } | Self::Write { key, .. } | Self::Delete { key } => key,
        }
    }
}

impl Operation for StoreOperation {
    type Output = StoreResult;
}

fn validate_key(key: &str) -> Result<(), StoreError> {
    if key.trim().is_empty() {
        return Err(StoreError::InvalidKey {
            key: key.to_string(),
            reason: "key cannot be empty".to_string(),
        });
    }

    if key.len() > MAX_KEY_LENGTH {
        return Err(StoreError::InvalidKey {
            key: key.chars().take(32).collect(),
            reason: format!("key exceeds maximum length of {MAX_KEY_LENGTH} bytes"),
        });
    }

    if key.chars().any(char::is_control) {
        return Err(StoreError::InvalidKey {
            key: key.to_string(),
            reason: "key contains control characters".to_string(),
        });
    }

    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "data")]
pub enum StoreOutput {
    /// `None` when the key has never been written.
    Value(Option<Vec<u8>>),
    Written,
    Deleted { existed: bool },
}

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum StoreError {
    #[error("invalid key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("value too large: {size} bytes exceeds maximum of {max} bytes")]
    ValueTooLarge { size: usize, max: usize },

    #[error("storage error: {message} (retryable: {retryable})")]
    Storage { message: String, retryable: bool },
}

impl StoreError {
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Storage { retryable, .. } => *retryable,
            Self::InvalidKey { .. } | Self::ValueTooLarge { .. } => false,
        }
    }

    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
            retryable: false,
        }
    }
}

pub type StoreResult = Result<StoreOutput, StoreError>;

pub struct Store<E> {
    context: CapabilityContext<StoreOperation, E>,
}

impl<Ev> Capability<Ev> for Store<Ev> {
    type Operation = StoreOperation;
    type MappedSelf<MappedEv> = Store<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        Store::new(self.context.map_event(f))
    }
}

impl<E> Store<E>
where
    E: Send + 'static,
{
    pub fn new(context: CapabilityContext<StoreOperation, E>) -> Self {
        Self { context }
    }

    /// Read the full value stored under `key`. Absent keys resolve to
    /// `Ok(StoreOutput::Value(None))`, not an error.
    pub fn read<F>(&self, key: impl Into<String>, make_event: F)
    where
        F: FnOnce(StoreResult) -> E + Send + 'static,
    {
        let context = self.context.clone();
        let key = key.into();
        self.context.spawn(async move {
            let response = match StoreOperation::read(key) {
                Ok(operation) => context.request_from_shell(operation).await,
                Err(e) => Err(e),
            };
            context.update_app(make_event(response));
        });
    }

    /// Overwrite the full value stored under `key`.
    pub fn write<F>(&self, key: impl Into<String>, value: Vec<u8>, make_event: F)
    where
        F: FnOnce(StoreResult) -> E + Send + 'static,
    {
        let context = self.context.clone();
        let key = key.into();
        self.context.spawn(async move {
            let response = match StoreOperation::write(key, value) {
                Ok(operation) => context.request_from_shell(operation).await,
                Err(e) => Err(e),
            };
            context.update_app(make_event(response));
        });
    }
}
