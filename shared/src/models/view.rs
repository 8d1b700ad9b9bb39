//! Hotel search-result view model
//!
//! Mirrors the property shape of a hotel-search API response so the
//! front end can render generated hotels and real results the same way.
//! Always derived from a [`HotelData`](super::HotelData), never stored.

use serde::{Deserialize, Serialize};

/// Amount in a currency
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Price {
    pub currency: String,
    pub value: u64,
}

impl Price {
    pub fn usd(value: u64) -> Self {
        Self {
            currency: "USD".to_string(),
            value,
        }
    }
}

/// Amenity badge shown on a search result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BenefitBadge {
    pub text: String,
    pub variant: String,
    pub explanation: String,
    pub identifier: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strikethrough_price: Option<Price>,
    pub benefit_badges: Vec<BenefitBadge>,
    pub gross_price: Price,
    pub excluded_price: Price,
    pub tax_exceptions: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeWindow {
    pub from_time: String,
    pub until_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub country_code: String,
    pub main_photo_id: u32,
    pub photo_urls: Vec<String>,
    pub longitude: f64,
    pub latitude: f64,
    pub currency: String,
    pub review_count: u32,
    pub quality_class: u32,
    pub review_score_word: String,
    pub block_ids: Vec<String>,
    pub property_class: u32,
    pub checkout: TimeWindow,
    pub name: String,
    pub is_first_page: bool,
    pub ufi: u32,
    pub checkin: TimeWindow,
    pub ranking_position: u32,
    pub id: u32,
    pub wishlist_name: String,
    pub accurate_property_class: u32,
    pub checkout_date: String,
    pub checkin_date: String,
    pub review_score: f64,
    pub opt_out_from_gallery_changes: u32,
    pub position: u32,
    pub price_breakdown: PriceBreakdown,
}

/// Search-result view of one hotel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HotelType {
    pub hotel_id: u32,
    #[serde(rename = "accessibilityLabel")]
    pub accessibility_label: String,
    pub property: Property,
}

impl HotelType {
    /// Badge identifiers in display order
    pub fn badge_identifiers(&self) -> Vec<&str> {
        self.property
            .price_breakdown
            .benefit_badges
            .iter()
            .map(|b| b.identifier.as_str())
            .collect()
    }
}
