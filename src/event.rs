use serde::{Deserialize, Serialize};

use crate::capabilities::StoreResult;
use crate::catalog::{CategoryFilter, PropertyId};

/// All inputs the core reacts to. User interactions arrive from the shell;
/// `*Loaded` and `PersistCompleted` are responses to store requests the core
/// issued earlier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    /// First event after the shell constructs the core. Kicks off restoration
    /// of persisted state.
    AppStarted,

    ThemeLoaded { result: StoreResult },
    RecentlyViewedLoaded { result: StoreResult },

    CategorySelected { filter: CategoryFilter },
    /// Live edit of the search field. Does not filter.
    QueryChanged { query: String },
    /// Explicit submission; commits the live query to the filter engine.
    SearchSubmitted,
    MaxPriceChanged { price: u32 },
    FiltersReset,

    PropertySelected { id: PropertyId },
    DetailClosed,

    FavoriteToggled { id: PropertyId },
    ThemeToggled,

    /// Completion of a fire-and-forget write. Failures are logged, never
    /// surfaced.
    PersistCompleted { key: String, result: StoreResult },
}

impl Event {
    /// Stable name for log lines.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AppStarted => "app_started",
            Self::ThemeLoaded { .. } => "theme_loaded",
            Self::RecentlyViewedLoaded { .. } => "recently_viewed_loaded",
            Self::CategorySelected { .. } => "category_selected",
            Self::QueryChanged { .. } => "query_changed",
            Self::SearchSubmitted => "search_submitted",
            Self::MaxPriceChanged { .. } => "max_price_changed",
            Self::FiltersReset => "filters_reset",
            Self::PropertySelected { .. } => "property_selected",
            Self::DetailClosed => "detail_closed",
            Self::FavoriteToggled { .. } => "favorite_toggled",
            Self::ThemeToggled => "theme_toggled",
            Self::PersistCompleted { .. } => "persist_completed",
        }
    }

    /// Whether this event originates from a user gesture, as opposed to
    /// lifecycle plumbing and store callbacks.
    #[must_use]
    pub const fn is_user_initiated(&self) -> bool {
        match self {
            Self::CategorySelected { .. }
            | Self::QueryChanged { .. }
            | Self::SearchSubmitted
            | Self::MaxPriceChanged { .. }
            | Self::FiltersReset
            | Self::PropertySelected { .. }
            | Self::DetailClosed
            | Self::FavoriteToggled { .. }
            | Self::ThemeToggled => true,
            Self::AppStarted
            | Self::ThemeLoaded { .. }
            | Self::RecentlyViewedLoaded { .. }
            | Self::PersistCompleted { .. } => false,
        }
    }
}
