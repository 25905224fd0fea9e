//! StaySphere core: the shared, headless engine behind the vacation-rental
//! browsing experience. Shells (web, iOS, Android) send [`Event`]s in,
//! execute the resulting effects, and render the [`ViewModel`] out.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod app;
pub mod capabilities;
pub mod catalog;
pub mod event;
pub mod model;
pub mod view;

pub use app::App;
pub use capabilities::{Capabilities, Effect, StoreError, StoreOperation, StoreOutput, StoreResult};
pub use catalog::{
    visible_properties, Category, CategoryFilter, GuestReview, Host, LocationLabel, Property,
    PropertyId,
};
pub use event::Event;
pub use model::{FilterCriteria, Model, RecentlyViewed, Theme};
pub use view::{CategoryChipView, PropertyCardView, PropertyDetailView, ViewModel};

pub use crux_core::Core;

/// Bounds of the nightly price slider, in whole dollars. Inputs outside the
/// range are clamped, never rejected.
pub const MIN_NIGHTLY_PRICE: u32 = 50;
pub const MAX_NIGHTLY_PRICE: u32 = 1000;

/// Capacity of the recently-viewed list.
pub const MAX_RECENTLY_VIEWED: usize = 3;

/// Storage keys. Shared with every shell's storage adapter.
pub const THEME_KEY: &str = "theme";
pub const RECENTLY_VIEWED_KEY: &str = "recentlyViewed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Storage,
    Serialization,
    Deserialization,
    Validation,
}

impl ErrorKind {
    /// Stable machine-readable code for logs and shell-side mapping.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Storage => "storage",
            Self::Serialization => "serialization",
            Self::Deserialization => "deserialization",
            Self::Validation => "validation",
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
#[error("{} error: {message}", kind.code())]
pub struct AppError {
    pub kind: ErrorKind,
    pub message: String,
}

impl AppError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        let kind = match e {
            StoreError::Storage { .. } => ErrorKind::Storage,
            StoreError::InvalidKey { .. } | StoreError::ValueTooLarge { .. } => {
                ErrorKind::Validation
            }
        };
        Self::new(kind, e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        let kind = if e.is_data() || e.is_syntax() || e.is_eof() {
            ErrorKind::Deserialization
        } else {
            ErrorKind::Serialization
        };
        Self::new(kind, e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Nightly price as displayed on cards, e.g. `"$450"`.
#[must_use]
pub fn format_price(price: u32) -> String {
    format!("${price}")
}

/// Rating with trailing zeros trimmed: `5.0` renders as `"5"`, `4.98` stays
/// `"4.98"`.
#[must_use]
pub fn format_rating(rating: f32) -> String {
    let text = format!("{rating:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
