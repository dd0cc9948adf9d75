use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use std::sync::{LazyLock, Mutex};
use thiserror::Error as ThisError;
use ulid::{Generator, Ulid};

///
/// GENERATOR is lazily initiated with a Mutex
/// it has to keep state so that minted ids stay monotonic within a session
///

static GENERATOR: LazyLock<Mutex<Generator>> = LazyLock::new(|| Mutex::new(Generator::new()));

///
/// IdError
///

#[derive(Debug, ThisError)]
pub enum IdError {
    #[error("monotonic error - overflow")]
    GeneratorOverflow,
}

///
/// RecordId
///
/// Opaque stable string identifier, unique within one entity collection.
/// Seed data uses readable ids ("agent-1"); ids minted at runtime carry a
/// ULID suffix ("quote-01jf...").
///

#[derive(
    Clone, Debug, Deref, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self(id)
    }

    /// Mint a fresh id with the given entity prefix.
    /// Falls back to a non-monotonic ULID if the generator overflows.
    #[must_use]
    pub fn mint(prefix: &str) -> Self {
        Self::try_mint(prefix).unwrap_or_else(|_| Self::with_ulid(prefix, Ulid::new()))
    }

    /// Fallible mint preserving the generator error.
    pub fn try_mint(prefix: &str) -> Result<Self, IdError> {
        let mut generator = GENERATOR.lock().expect("id generator mutex poisoned");

        let ulid = generator
            .generate()
            .map_err(|_| IdError::GeneratorOverflow)?;

        Ok(Self::with_ulid(prefix, ulid))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn with_ulid(prefix: &str, ulid: Ulid) -> Self {
        Self(format!("{prefix}-{}", ulid.to_string().to_lowercase()))
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

///
/// TESTS
///
