//! The update loop. Pure state transitions plus the two side effects the
//! shell executes on the core's behalf: rendering and key-value storage.

use crate::capabilities::{Capabilities, StoreOutput, StoreResult};
use crate::event::Event;
use crate::model::{Model, RecentlyViewed, Theme};
use crate::view::ViewModel;
use crate::{RECENTLY_VIEWED_KEY, THEME_KEY};

#[derive(Default)]
pub struct App;

impl App {
    fn persist_theme(model: &Model, caps: &Capabilities) {
        caps.store.write(
            THEME_KEY,
            model.theme.as_str().as_bytes().to_vec(),
            |result| Event::PersistCompleted {
                key: THEME_KEY.to_string(),
                result,
            },
        );
    }

    fn persist_recently_viewed(model: &Model, caps: &Capabilities) {
        match model.recently_viewed.to_bytes() {
            Ok(bytes) => {
                caps.store.write(RECENTLY_VIEWED_KEY, bytes, |result| {
                    Event::PersistCompleted {
                        key: RECENTLY_VIEWED_KEY.to_string(),
                        result,
                    }
                });
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize recently viewed list");
            }
        }
    }

    /// Unwrap a read response down to the stored bytes. Errors and absent
    /// keys both come back as `None`; the caller proceeds with defaults.
    fn stored_bytes(result: StoreResult, key: &str) -> Option<Vec<u8>> {
        match result {
            Ok(StoreOutput::Value(value)) => value,
            Ok(other) => {
                tracing::warn!(key, ?other, "unexpected store response to read");
                None
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read persisted value");
                None
            }
        }
    }
}

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Capabilities = Capabilities;

    fn update(&self, event: Self::Event, model: &mut Self::Model, caps: &Self::Capabilities) {
        tracing::debug!(event = event.name(), "handling event");

        match event {
            Event::AppStarted => {
                caps.store
                    .read(THEME_KEY, |result| Event::ThemeLoaded { result });
                caps.store.read(RECENTLY_VIEWED_KEY, |result| {
                    Event::RecentlyViewedLoaded { result }
                });
                caps.render.render();
            }

            Event::ThemeLoaded { result } => {
                let stored = Self::stored_bytes(result, THEME_KEY);
                let stored_str = stored.as_deref().map(String::from_utf8_lossy);
                model.theme = Theme::from_stored(stored_str.as_deref());

                // Rewrite the canonical literal if the stored value was
                // absent or unrecognized, so the next launch reads cleanly.
                if stored_str.as_deref() != Some(model.theme.as_str()) {
                    Self::persist_theme(model, caps);
                }
                caps.render.render();
            }

            Event::RecentlyViewedLoaded { result } => {
                if let Some(bytes) = Self::stored_bytes(result, RECENTLY_VIEWED_KEY) {
                    model.recently_viewed = RecentlyViewed::from_stored(&bytes);
                }
                caps.render.render();
            }

            Event::CategorySelected { filter } => {
                model.criteria.category = filter;
                model.clear_favorites();
                caps.render.render();
            }

            Event::QueryChanged { query } => {
                // Live text only; the filter engine reads the applied copy.
                model.criteria.query = query;
                caps.render.render();
            }

            Event::SearchSubmitted => {
                model.criteria.submit_query();
                model.clear_favorites();
                caps.render.render();
            }

            Event::MaxPriceChanged { price } => {
                model.criteria.set_max_price(price);
                model.clear_favorites();
                caps.render.render();
            }

            Event::FiltersReset => {
                model.criteria.reset();
                model.clear_favorites();
                caps.render.render();
            }

            Event::PropertySelected { id } => {
                let Some(property) = model.property(id).cloned() else {
                    tracing::warn!(%id, "selection of unknown property ignored");
                    return;
                };
                model.selected = Some(id);
                model.recently_viewed.record(property);
                Self::persist_recently_viewed(model, caps);
                caps.render.render();
            }

            Event::DetailClosed => {
                model.selected = None;
                caps.render.render();
            }

            Event::FavoriteToggled { id } => {
                model.toggle_favorite(id);
                caps.render.render();
            }

            Event::ThemeToggled => {
                model.theme = model.theme.toggled();
                Self::persist_theme(model, caps);
                caps.render.render();
            }

            Event::PersistCompleted { key, result } => {
                if let Err(e) = result {
                    tracing::error!(key, error = %e, "persist failed");
                }
            }
        }
    }

    fn view(&self, model: &Self::Model) -> Self::ViewModel {
        ViewModel::project(model)
    }
}
