//! Session state: filter criteria, selection, the recently-viewed list and
//! the theme preference.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{self, CategoryFilter, Property, PropertyId};
use crate::{AppError, MAX_NIGHTLY_PRICE, MAX_RECENTLY_VIEWED, MIN_NIGHTLY_PRICE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The literal persisted under the `theme` key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Restore semantics: exactly `"dark"` yields [`Theme::Dark`]; anything
    /// else, including an absent or mangled value, falls back to light.
    #[must_use]
    pub fn from_stored(stored: Option<&str>) -> Self {
        match stored {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// The three filter criteria driving the visible set.
///
/// `query` is the live text in the search field; `applied_query` is the copy
/// committed on explicit search submission, and is the only one the filter
/// engine reads. The invariant is that `applied_query` is always a value
/// previously held by `query`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub category: CategoryFilter,
    pub query: String,
    pub applied_query: String,
    pub max_price: u32,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            query: String::new(),
            applied_query: String::new(),
            max_price: MAX_NIGHTLY_PRICE,
        }
    }
}

impl FilterCriteria {
    /// The price slider is constrained at the input boundary, never validated
    /// after the fact.
    pub fn set_max_price(&mut self, price: u32) {
        self.max_price = price.clamp(MIN_NIGHTLY_PRICE, MAX_NIGHTLY_PRICE);
    }

    pub fn submit_query(&mut self) {
        self.applied_query = self.query.clone();
    }

    /// Atomically restore all three criteria to their defaults. This is the
    /// escape hatch offered by the empty-results state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Bounded most-recent-first list of viewed properties, unique by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentlyViewed {
    entries: Vec<Property>,
}

impl RecentlyViewed {
    /// Record a detail view: drop any entry with the same id, prepend, and
    /// truncate to capacity.
    pub fn record(&mut self, property: Property) {
        self.entries.retain(|p| p.id != property.id);
        self.entries.insert(0, property);
        self.entries.truncate(MAX_RECENTLY_VIEWED);
    }

    #[must_use]
    pub fn entries(&self) -> &[Property] {
        &self.entries
    }

    #[must_use]
    pub fn ids(&self) -> Vec<PropertyId> {
        self.entries.iter().map(|p| p.id).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, AppError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Restore from persisted bytes. Malformed data degrades to the empty
    /// list; the cap and the uniqueness invariant are re-applied in case the
    /// stored value was written by an older build or tampered with.
    #[must_use]
    pub fn from_stored(bytes: &[u8]) -> Self {
        let list = match serde_json::from_slice::<Vec<Property>>(bytes) {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!(error = %e, "malformed recently-viewed entry, starting empty");
                return Self::default();
            }
        };

        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(MAX_RECENTLY_VIEWED);
        for property in list {
            if seen.insert(property.id) {
                entries.push(property);
                if entries.len() == MAX_RECENTLY_VIEWED {
                    break;
                }
            }
        }

        Self { entries }
    }
}

pub struct Model {
    /// The constant fixture. Seeded once; never mutated.
    pub catalog: Vec<Property>,
    pub criteria: FilterCriteria,
    /// The property currently inspected in the detail view.
    pub selected: Option<PropertyId>,
    pub recently_viewed: RecentlyViewed,
    pub theme: Theme,
    /// Ephemeral per-card favorites. Never persisted; cleared whenever the
    /// visible set is recomputed, so a favorite does not survive navigating
    /// away from the current grid.
    pub favorites: HashSet<PropertyId>,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            catalog: catalog::seed_properties(),
            criteria: FilterCriteria::default(),
            selected: None,
            recently_viewed: RecentlyViewed::default(),
            theme: Theme::default(),
            favorites: HashSet::new(),
        }
    }
}

impl Model {
    #[must_use]
    pub fn property(&self, id: PropertyId) -> Option<&Property> {
        self.catalog.iter().find(|p| p.id == id)
    }

    pub fn toggle_favorite(&mut self, id: PropertyId) {
        if !self.favorites.remove(&id) {
            self.favorites.insert(id);
        }
    }

    #[must_use]
    pub fn is_favorite(&self, id: PropertyId) -> bool {
        self.favorites.contains(&id)
    }

    pub fn clear_favorites(&mut self) {
        self.favorites.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(id: u32) -> Property {
        catalog::seed_properties()
            .into_iter()
            .find(|p| p.id.value() == id)
            .unwrap()
    }

    mod theme_tests {
        use super::*;

        #[test]
        fn test_restore_from_stored() {
            assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
            assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
            assert_eq!(Theme::from_stored(Some("Dark")), Theme::Light);
            assert_eq!(Theme::from_stored(Some("midnight")), Theme::Light);
            assert_eq!(Theme::from_stored(Some("")), Theme::Light);
            assert_eq!(Theme::from_stored(None), Theme::Light);
        }

        #[test]
        fn test_toggle_round_trip() {
            assert_eq!(Theme::Light.toggled(), Theme::Dark);
            assert_eq!(Theme::Dark.toggled(), Theme::Light);
            assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        }

        #[test]
        fn test_persisted_literals() {
            assert_eq!(Theme::Light.as_str(), "light");
            assert_eq!(Theme::Dark.as_str(), "dark");
        }
    }

    mod criteria_tests {
        use super::*;

        #[test]
        fn test_defaults() {
            let criteria = FilterCriteria::default();
            assert_eq!(criteria.category, CategoryFilter::All);
            assert!(criteria.query.is_empty());
            assert!(criteria.applied_query.is_empty());
            assert_eq!(criteria.max_price, MAX_NIGHTLY_PRICE);
            assert!(criteria.is_default());
        }

        #[test]
        fn test_max_price_clamped_at_input_boundary() {
            let mut criteria = FilterCriteria::default();

            criteria.set_max_price(5);
            assert_eq!(criteria.max_price, MIN_NIGHTLY_PRICE);

            criteria.set_max_price(99_999);
            assert_eq!(criteria.max_price, MAX_NIGHTLY_PRICE);

            criteria.set_max_price(640);
            assert_eq!(criteria.max_price, 640);
        }

        #[test]
        fn test_live_query_decoupled_until_submission() {
            let mut criteria = FilterCriteria::default();

            criteria.query = "santorini".into();
            assert!(criteria.applied_query.is_empty());

            criteria.submit_query();
            assert_eq!(criteria.applied_query, "santorini");

            criteria.query = "bal".into();
            assert_eq!(criteria.applied_query, "santorini");
        }

        #[test]
        fn test_reset_restores_all_three_criteria() {
            let mut criteria = FilterCriteria {
                category: CategoryFilter::Only(crate::catalog::Category::Villas),
                query: "greece".into(),
                applied_query: "greece".into(),
                max_price: 500,
            };

            criteria.reset();
            assert!(criteria.is_default());
        }
    }

    mod recency_tests {
        use super::*;

        #[test]
        fn test_capacity_and_order() {
            let mut recent = RecentlyViewed::default();
            for id in [1, 2, 3, 4] {
                recent.record(property(id));
            }

            let ids: Vec<_> = recent.ids().iter().map(|id| id.value()).collect();
            assert_eq!(ids, [4, 3, 2]);
        }

        #[test]
        fn test_reselection_moves_to_front() {
            let mut recent = RecentlyViewed::default();
            for id in [1, 2, 3, 4] {
                recent.record(property(id));
            }
            recent.record(property(3));

            let ids: Vec<_> = recent.ids().iter().map(|id| id.value()).collect();
            assert_eq!(ids, [3, 4, 2]);
        }

        #[test]
        fn test_reselection_keeps_length() {
            let mut recent = RecentlyViewed::default();
            recent.record(property(1));
            recent.record(property(2));
            recent.record(property(1));

            let ids: Vec<_> = recent.ids().iter().map(|id| id.value()).collect();
            assert_eq!(ids, [1, 2]);
        }

        #[test]
        fn test_round_trip_through_bytes() {
            let mut recent = RecentlyViewed::default();
            recent.record(property(2));
            recent.record(property(4));

            let bytes = recent.to_bytes().unwrap();
            assert_eq!(RecentlyViewed::from_stored(&bytes), recent);
        }

        #[test]
        fn test_malformed_bytes_degrade_to_empty() {
            assert!(RecentlyViewed::from_stored(b"not json").is_empty());
            assert!(RecentlyViewed::from_stored(b"{\"id\":1}").is_empty());
            assert!(RecentlyViewed::from_stored(b"").is_empty());
        }

        #[test]
        fn test_restore_reapplies_cap_and_uniqueness() {
            let oversized = vec![
                property(1),
                property(2),
                property(1),
                property(3),
                property(4),
            ];
            let bytes = serde_json::to_vec(&oversized).unwrap();

            let restored = RecentlyViewed::from_stored(&bytes);
            let ids: Vec<_> = restored.ids().iter().map(|id| id.value()).collect();
            assert_eq!(ids, [1, 2, 3]);
        }

        mod recency_props {
            use super::*;
            use proptest::prelude::*;

            proptest! {
                #[test]
                fn invariants_hold_for_any_selection_sequence(
                    ids in proptest::collection::vec(1u32..=4, 0..40),
                ) {
                    let mut recent = RecentlyViewed::default();
                    for id in &ids {
                        recent.record(property(*id));
                    }

                    prop_assert!(recent.len() <= MAX_RECENTLY_VIEWED);

                    let seen: HashSet<_> = recent.ids().into_iter().collect();
                    prop_assert_eq!(seen.len(), recent.len());

                    if let Some(last) = ids.last() {
                        prop_assert_eq!(recent.ids()[0].value(), *last);
                    }
                }
            }
        }
    }

    mod model_tests {
        use super::*;

        #[test]
        fn test_default_model_seeds_catalog() {
            let model = Model::default();
            assert_eq!(model.catalog.len(), 4);
            assert_eq!(model.selected, None);
            assert!(model.recently_viewed.is_empty());
            assert_eq!(model.theme, Theme::Light);
        }

        #[test]
        fn test_property_lookup() {
            let model = Model::default();
            assert!(model.property(PropertyId::new(3)).is_some());
            assert!(model.property(PropertyId::new(99)).is_none());
        }

        #[test]
        fn test_favorite_toggle_is_involutive() {
            let mut model = Model::default();
            let id = PropertyId::new(2);

            model.toggle_favorite(id);
            assert!(model.is_favorite(id));

            model.toggle_favorite(id);
            assert!(!model.is_favorite(id));
        }
    }
}
