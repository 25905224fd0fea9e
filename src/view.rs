//! Serializable projection of the model for the shell. The shell renders
//! these types verbatim; all formatting decisions live here.

use serde::{Deserialize, Serialize};

use crate::catalog::{self, GuestReview, LocationLabel, Property, PropertyId};
use crate::model::Model;
use crate::{format_price, format_rating, MIN_NIGHTLY_PRICE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryChipView {
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyCardView {
    pub id: PropertyId,
    pub title: String,
    pub location: String,
    pub price: u32,
    /// Pre-formatted nightly price, e.g. `"$450"`.
    pub price_text: String,
    /// Rating with trailing zeros trimmed, e.g. `"5"` or `"4.98"`.
    pub rating_text: String,
    pub reviews: u32,
    pub image: String,
    pub category_label: String,
    pub is_superhost: bool,
    pub is_favorite: bool,
}

impl PropertyCardView {
    fn from_property(property: &Property, is_favorite: bool) -> Self {
        Self {
            id: property.id,
            title: property.title.clone(),
            location: property.location.clone(),
            price: property.price,
            price_text: format_price(property.price),
            rating_text: format_rating(property.rating),
            reviews: property.reviews,
            image: property.image.clone(),
            category_label: property.category.label().to_string(),
            is_superhost: property.is_superhost,
            is_favorite,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDetailView {
    pub id: PropertyId,
    pub title: String,
    pub location: String,
    pub price_text: String,
    pub rating_text: String,
    pub reviews: u32,
    pub image: String,
    pub category_label: String,
    pub is_superhost: bool,
    pub description: String,
    pub host_name: String,
    pub host_avatar: String,
}

impl PropertyDetailView {
    fn from_property(property: &Property) -> Self {
        Self {
            id: property.id,
            title: property.title.clone(),
            location: property.location.clone(),
            price_text: format_price(property.price),
            rating_text: format_rating(property.rating),
            reviews: property.reviews,
            image: property.image.clone(),
            category_label: property.category.label().to_string(),
            is_superhost: property.is_superhost,
            description: property.description.clone(),
            host_name: property.host.name.clone(),
            host_avatar: property.host.avatar.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewModel {
    pub dark_mode: bool,
    pub categories: Vec<CategoryChipView>,
    /// Live search text, echoed back so the shell stays controlled.
    pub query: String,
    pub min_price: u32,
    pub max_price: u32,
    /// Current slider position.
    pub price_threshold: u32,
    pub properties: Vec<PropertyCardView>,
    pub no_results: bool,
    pub selected: Option<PropertyDetailView>,
    pub recently_viewed: Vec<PropertyCardView>,
    pub locations: Vec<LocationLabel>,
    pub reviews: Vec<GuestReview>,
}

impl ViewModel {
    #[must_use]
    pub fn project(model: &Model) -> Self {
        let categories = catalog::CategoryFilter::chips()
            .iter()
            .map(|chip| CategoryChipView {
                label: chip.label().to_string(),
                active: *chip == model.criteria.category,
            })
            .collect();

        let properties: Vec<_> = catalog::visible_properties(&model.criteria, &model.catalog)
            .into_iter()
            .map(|p| PropertyCardView::from_property(p, model.is_favorite(p.id)))
            .collect();

        let selected = model
            .selected
            .and_then(|id| model.property(id))
            .map(PropertyDetailView::from_property);

        // Recency cards never carry favorite state; favorites belong to the
        // current grid only.
        let recently_viewed = model
            .recently_viewed
            .entries()
            .iter()
            .map(|p| PropertyCardView::from_property(p, false))
            .collect();

        Self {
            dark_mode: model.theme.is_dark(),
            categories,
            query: model.criteria.query.clone(),
            min_price: MIN_NIGHTLY_PRICE,
            max_price: crate::MAX_NIGHTLY_PRICE,
            price_threshold: model.criteria.max_price,
            no_results: properties.is_empty(),
            properties,
            selected,
            recently_viewed,
            locations: catalog::explore_locations(),
            reviews: catalog::guest_reviews(),
        }
    }
}
