//! The static property catalog and the listing filter engine.
//!
//! The catalog is a constant fixture: properties are never created, mutated
//! or deleted at runtime. The filter engine is a pure function over that
//! fixture and the current [`FilterCriteria`]; the visible set is recomputed
//! in full on every criteria change.

use serde::{Deserialize, Serialize};

use crate::model::FilterCriteria;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct PropertyId(pub u32);

impl PropertyId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PropertyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Apartments,
    Villas,
    Cabins,
    BeachHouses,
}

impl Category {
    pub const ALL: [Self; 4] = [
        Self::Apartments,
        Self::Villas,
        Self::Cabins,
        Self::BeachHouses,
    ];

    /// The chip label as rendered by the shell. Matching is exact and
    /// case-sensitive.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Apartments => "Apartments",
            Self::Villas => "Villas",
            Self::Cabins => "Cabins",
            Self::BeachHouses => "Beach Houses",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The active category criterion. `All` is a filter sentinel, not a property
/// category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "filter", content = "category", rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// The fixed chip row, in display order.
    #[must_use]
    pub const fn chips() -> [Self; 5] {
        [
            Self::All,
            Self::Only(Category::Apartments),
            Self::Only(Category::Villas),
            Self::Only(Category::Cabins),
            Self::Only(Category::BeachHouses),
        ]
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    #[must_use]
    pub fn admits(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(active) => active == category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Host {
    pub name: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub title: String,
    pub location: String,
    /// Nightly price in whole dollars.
    pub price: u32,
    /// Guest rating in 0.0..=5.0.
    pub rating: f32,
    pub reviews: u32,
    pub image: String,
    pub category: Category,
    pub is_superhost: bool,
    #[serde(default)]
    pub is_featured: bool,
    pub description: String,
    pub host: Host,
}

/// The four seed records. Order here is the display order; the filter engine
/// never re-sorts.
#[must_use]
pub fn seed_properties() -> Vec<Property> {
    vec![
        Property {
            id: PropertyId::new(1),
            title: "Eco-Luxury Glass Cabin".into(),
            location: "Reykjavík, Iceland".into(),
            price: 450,
            rating: 4.98,
            reviews: 124,
            image: "/house1.png".into(),
            category: Category::Cabins,
            is_superhost: true,
            is_featured: true,
            description: "Wake up under the northern lights in a fully glazed \
                cabin on the edge of a lava field, with a private geothermal \
                hot tub and floor heating throughout."
                .into(),
            host: Host {
                name: "Freyja".into(),
                avatar: "/hosts/freyja.png".into(),
            },
        },
        Property {
            id: PropertyId::new(2),
            title: "Modern Desert Oasis".into(),
            location: "Joshua Tree, California".into(),
            price: 320,
            rating: 4.92,
            reviews: 89,
            image: "/house2.png".into(),
            category: Category::Apartments,
            is_superhost: false,
            is_featured: false,
            description: "A minimalist hideaway among the boulders with a \
                plunge pool, outdoor cinema and some of the darkest stargazing \
                skies in California."
                .into(),
            host: Host {
                name: "Marcus".into(),
                avatar: "/hosts/marcus.png".into(),
            },
        },
        Property {
            id: PropertyId::new(3),
            title: "Cliffside Infinity Villa".into(),
            location: "Santorini, Greece".into(),
            price: 850,
            rating: 5.0,
            reviews: 56,
            image: "/house3.png".into(),
            category: Category::Villas,
            is_superhost: true,
            is_featured: true,
            description: "Carved into the caldera cliffs of Oia, this villa \
                pairs a private infinity pool with uninterrupted sunset views \
                over the Aegean."
                .into(),
            host: Host {
                name: "Elena".into(),
                avatar: "/hosts/elena.png".into(),
            },
        },
        Property {
            id: PropertyId::new(4),
            title: "Heritage Bamboo House".into(),
            location: "Bali, Indonesia".into(),
            price: 180,
            rating: 4.85,
            reviews: 210,
            image: "/house4.png".into(),
            category: Category::BeachHouses,
            is_superhost: false,
            is_featured: false,
            description: "A hand-built bamboo home in the rice terraces above \
                the beach, five minutes by scooter from the surf and the \
                morning market."
                .into(),
            host: Host {
                name: "Wayan".into(),
                avatar: "/hosts/wayan.png".into(),
            },
        },
    ]
}

/// Decorative navigation tiles. Not used by the filter engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationLabel {
    pub name: String,
    pub image: String,
}

#[must_use]
pub fn explore_locations() -> Vec<LocationLabel> {
    ["Mumbai", "Goa", "Manali", "Dubai"]
        .into_iter()
        .map(|name| LocationLabel {
            name: name.into(),
            image: format!(
                "https://picsum.photos/seed/{}/800/800",
                name.to_lowercase()
            ),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestReview {
    pub id: u32,
    pub name: String,
    pub rating: u8,
    pub text: String,
}

#[must_use]
pub fn guest_reviews() -> Vec<GuestReview> {
    vec![
        GuestReview {
            id: 1,
            name: "Sarah Johnson".into(),
            rating: 5,
            text: "The glass cabin in Iceland was absolutely magical. Waking \
                up to the sunrise over the mountains was an experience I'll \
                never forget."
                .into(),
        },
        GuestReview {
            id: 2,
            name: "Michael Chen".into(),
            rating: 5,
            text: "StaySphere made booking our desert getaway so easy. The \
                Joshua Tree house was even better than the photos!"
                .into(),
        },
        GuestReview {
            id: 3,
            name: "Elena Rodriguez".into(),
            rating: 5,
            text: "Incredible villa in Santorini. The infinity pool and the \
                service were top-notch. Highly recommend for a luxury stay."
                .into(),
        },
    ]
}

/// The listing filter engine.
///
/// Returns the subsequence of `collection` satisfying all three criteria:
/// category (exact match, `All` admits everything), location containing the
/// applied query as a case-insensitive substring (empty query matches
/// everything), and nightly price at or below the threshold (inclusive).
/// Original collection order is preserved.
#[must_use]
pub fn visible_properties<'a>(
    criteria: &FilterCriteria,
    collection: &'a [Property],
) -> Vec<&'a Property> {
    let query = criteria.applied_query.to_lowercase();

    collection
        .iter()
        .filter(|property| {
            criteria.category.admits(property.category)
                && (query.is_empty() || property.location.to_lowercase().contains(&query))
                && property.price <= criteria.max_price
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MAX_NIGHTLY_PRICE, MIN_NIGHTLY_PRICE};

    fn criteria(category: CategoryFilter, applied_query: &str, max_price: u32) -> FilterCriteria {
        FilterCriteria {
            category,
            query: applied_query.to_string(),
            applied_query: applied_query.to_string(),
            max_price,
        }
    }

    fn visible_ids(criteria: &FilterCriteria) -> Vec<u32> {
        visible_properties(criteria, &seed_properties())
            .iter()
            .map(|p| p.id.value())
            .collect()
    }

    #[test]
    fn test_fixture_shape() {
        let properties = seed_properties();
        assert_eq!(properties.len(), 4);

        let mut ids: Vec<_> = properties.iter().map(|p| p.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 4);

        for property in &properties {
            assert!(property.price >= MIN_NIGHTLY_PRICE);
            assert!(property.price <= MAX_NIGHTLY_PRICE);
            assert!(property.rating >= 0.0 && property.rating <= 5.0);
            assert!(!property.title.is_empty());
            assert!(!property.host.name.is_empty());
        }
    }

    #[test]
    fn test_category_labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
        assert_eq!(Category::from_label("cabins"), None);
        assert_eq!(Category::from_label("All"), None);
    }

    #[test]
    fn test_chip_row_order() {
        let labels: Vec<_> = CategoryFilter::chips().iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            ["All", "Apartments", "Villas", "Cabins", "Beach Houses"]
        );
    }

    #[test]
    fn test_all_admits_everything() {
        for category in Category::ALL {
            assert!(CategoryFilter::All.admits(category));
        }
        assert!(CategoryFilter::Only(Category::Villas).admits(Category::Villas));
        assert!(!CategoryFilter::Only(Category::Villas).admits(Category::Cabins));
    }

    #[test]
    fn test_default_criteria_show_everything() {
        assert_eq!(visible_ids(&FilterCriteria::default()), [1, 2, 3, 4]);
    }

    #[test]
    fn test_cabins_matches_only_iceland() {
        let criteria = criteria(CategoryFilter::Only(Category::Cabins), "", MAX_NIGHTLY_PRICE);
        assert_eq!(visible_ids(&criteria), [1]);
    }

    #[test]
    fn test_location_query_is_case_insensitive() {
        let lower = criteria(CategoryFilter::All, "greece", MAX_NIGHTLY_PRICE);
        let upper = criteria(CategoryFilter::All, "GREECE", MAX_NIGHTLY_PRICE);
        assert_eq!(visible_ids(&lower), [3]);
        assert_eq!(visible_ids(&lower), visible_ids(&upper));
    }

    #[test]
    fn test_partial_location_substring_matches() {
        let criteria = criteria(CategoryFilter::All, "jos", MAX_NIGHTLY_PRICE);
        assert_eq!(visible_ids(&criteria), [2]);
    }

    #[test]
    fn test_price_threshold_is_inclusive() {
        let at_price = criteria(CategoryFilter::All, "", 450);
        assert_eq!(visible_ids(&at_price), [1, 2, 4]);

        let below = criteria(CategoryFilter::All, "", 449);
        assert_eq!(visible_ids(&below), [2, 4]);
    }

    #[test]
    fn test_low_threshold_yields_empty_set() {
        let criteria = criteria(CategoryFilter::All, "", 100);
        assert!(visible_ids(&criteria).is_empty());
    }

    #[test]
    fn test_predicates_are_conjunctive() {
        // Cabins + "bali" have no overlap even though each matches alone.
        let criteria = criteria(CategoryFilter::Only(Category::Cabins), "bali", MAX_NIGHTLY_PRICE);
        assert!(visible_ids(&criteria).is_empty());
    }

    #[test]
    fn test_filter_preserves_collection_order() {
        let criteria = criteria(CategoryFilter::All, "i", MAX_NIGHTLY_PRICE);
        let ids = visible_ids(&criteria);
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    mod filter_props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn visible_set_is_subset_and_idempotent(
                chip in 0usize..5,
                query in "[a-zA-Z ]{0,10}",
                price in 0u32..2000,
            ) {
                let collection = seed_properties();
                let mut criteria = FilterCriteria {
                    category: CategoryFilter::chips()[chip],
                    query: query.clone(),
                    applied_query: query,
                    max_price: 0,
                };
                criteria.set_max_price(price);

                let first = visible_properties(&criteria, &collection);
                let second = visible_properties(&criteria, &collection);

                let first_ids: Vec<_> = first.iter().map(|p| p.id).collect();
                let second_ids: Vec<_> = second.iter().map(|p| p.id).collect();
                prop_assert_eq!(&first_ids, &second_ids);

                // Subset of the fixture, in original order.
                let mut cursor = collection.iter();
                for id in &first_ids {
                    prop_assert!(cursor.any(|p| p.id == *id));
                }
            }
        }
    }
}
