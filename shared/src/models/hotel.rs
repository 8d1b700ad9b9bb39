//! Hotel Data Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hospitality brand operating a hotel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Vendor {
    Hilton,
    Marriott,
    Hyatt,
    Wyndham,
    #[serde(rename = "Choice Hotels")]
    ChoiceHotels,
    InterContinental,
    Accor,
    #[serde(rename = "Radisson Hotel Group")]
    RadissonHotelGroup,
    #[serde(rename = "Best Western Hotels & Resorts")]
    BestWestern,
    #[serde(rename = "IHG Hotels & Resorts")]
    Ihg,
    #[serde(rename = "Rosewood Hotel Group")]
    RosewoodHotelGroup,
    #[serde(rename = "Four Seasons Hotels and Resorts")]
    FourSeasons,
    #[serde(rename = "MGM Resorts International")]
    MgmResorts,
    #[serde(rename = "Shangri-La Hotels and Resorts")]
    ShangriLa,
    #[serde(rename = "Minor Hotels")]
    MinorHotels,
    #[serde(rename = "NH Hotel Group")]
    NhHotelGroup,
    #[serde(rename = "Banyan Tree Group")]
    BanyanTreeGroup,
}

impl Vendor {
    /// Every vendor, in catalog order
    pub const ALL: [Vendor; 17] = [
        Vendor::Hilton,
        Vendor::Marriott,
        Vendor::Hyatt,
        Vendor::Wyndham,
        Vendor::ChoiceHotels,
        Vendor::InterContinental,
        Vendor::Accor,
        Vendor::RadissonHotelGroup,
        Vendor::BestWestern,
        Vendor::Ihg,
        Vendor::RosewoodHotelGroup,
        Vendor::FourSeasons,
        Vendor::MgmResorts,
        Vendor::ShangriLa,
        Vendor::MinorHotels,
        Vendor::NhHotelGroup,
        Vendor::BanyanTreeGroup,
    ];

    /// Display name, identical to the serialized form
    pub fn display_name(&self) -> &'static str {
        match self {
            Vendor::Hilton => "Hilton",
            Vendor::Marriott => "Marriott",
            Vendor::Hyatt => "Hyatt",
            Vendor::Wyndham => "Wyndham",
            Vendor::ChoiceHotels => "Choice Hotels",
            Vendor::InterContinental => "InterContinental",
            Vendor::Accor => "Accor",
            Vendor::RadissonHotelGroup => "Radisson Hotel Group",
            Vendor::BestWestern => "Best Western Hotels & Resorts",
            Vendor::Ihg => "IHG Hotels & Resorts",
            Vendor::RosewoodHotelGroup => "Rosewood Hotel Group",
            Vendor::FourSeasons => "Four Seasons Hotels and Resorts",
            Vendor::MgmResorts => "MGM Resorts International",
            Vendor::ShangriLa => "Shangri-La Hotels and Resorts",
            Vendor::MinorHotels => "Minor Hotels",
            Vendor::NhHotelGroup => "NH Hotel Group",
            Vendor::BanyanTreeGroup => "Banyan Tree Group",
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Room tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RoomType {
    Standard,
    Deluxe,
    Suite,
}

impl RoomType {
    /// Tiers in the order every hotel lists them
    pub const TIERS: [RoomType; 3] = [RoomType::Standard, RoomType::Deluxe, RoomType::Suite];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Standard => "Standard",
            RoomType::Deluxe => "Deluxe",
            RoomType::Suite => "Suite",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Meals bundled with a room
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealInclusions {
    pub breakfast: bool,
    pub lunch: bool,
}

/// One bookable room tier of a hotel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoomDetails {
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub price_per_night: u32,
    /// Pre-discount price; always above `price_per_night` when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<u32>,
    pub includes: MealInclusions,
    pub most_popular: bool,
    pub accessible_features: Vec<String>,
    pub cancellation_policy: String,
    pub available_rooms: u32,
    pub bed_count: u32,
}

/// Category of a nearby attraction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AttractionType {
    Beach,
    Downtown,
    #[serde(rename = "Ocean View")]
    OceanView,
    #[serde(rename = "Washer/Dryer")]
    WasherDryer,
    Museum,
    Market,
    Park,
    Landmark,
    #[serde(rename = "Family Attraction")]
    FamilyAttraction,
    Shopping,
    Transit,
    Sport,
    Entertainment,
    Nature,
    #[serde(rename = "Walking Area")]
    WalkingArea,
    Attraction,
    Business,
    Education,
}

/// Point of interest near a hotel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Attraction {
    pub name: String,
    #[serde(rename = "type")]
    pub attraction_type: AttractionType,
    pub distance_km: f64,
}

/// Guest review
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub username: String,
    /// 1..=5
    pub rating: u8,
    pub comment: String,
    /// Calendar date, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
}

/// Per-aspect scores, each on its own fixed band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RatingBreakdown {
    pub cleanliness: u8,
    pub location: u8,
    pub comfort: u8,
    pub staff: u8,
    pub value: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    /// Mean of review ratings, one decimal place
    pub average_rating: f64,
    pub total_reviews: u32,
    pub breakdown: RatingBreakdown,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckInPolicy {
    pub start_time: String,
    pub end_time: String,
    pub contactless: bool,
    pub express: bool,
    pub min_age: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutPolicy {
    pub time: String,
    pub contactless: bool,
    pub express: bool,
    pub late_fee_applicable: bool,
}

/// House rules
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Policies {
    pub check_in: CheckInPolicy,
    pub check_out: CheckOutPolicy,
    pub pets_allowed: bool,
    pub children_policy: String,
    pub extra_beds: String,
    pub crib_availability: String,
    pub access_methods: Vec<String>,
    pub safety_features: Vec<String>,
    pub housekeeping_policy: String,
}

/// Fee schedule, drawn once per hotel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Fees {
    pub deposit_per_night: u32,
    pub resort_fee_per_night: u32,
    /// `[low, high]`
    pub breakfast_fee_range: [u32; 2],
    pub parking_fee_per_day: u32,
    pub late_checkout_fee: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// Fully populated synthetic hotel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HotelData {
    /// Random, not unique across batches
    pub id: u32,
    pub vendor: Vendor,
    pub name: String,
    pub address: String,
    pub description: String,
    pub rooms: Vec<RoomDetails>,
    pub attractions_nearby: Vec<Attraction>,
    pub accessibility_label: String,
    pub review_summary: ReviewSummary,
    pub reviews: Vec<Review>,
    pub policies: Policies,
    pub fees: Fees,
    pub fine_print: String,
    pub faqs: Vec<Faq>,
}

impl HotelData {
    /// Whether any room tier bundles breakfast
    pub fn offers_breakfast(&self) -> bool {
        self.rooms.iter().any(|r| r.includes.breakfast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vendor_serializes_as_display_name() {
        for vendor in Vendor::ALL {
            let json = serde_json::to_string(&vendor).unwrap();
            assert_eq!(json, format!("\"{}\"", vendor.display_name()));
            let back: Vendor = serde_json::from_str(&json).unwrap();
            assert_eq!(back, vendor);
        }
    }

    #[test]
    fn test_room_details_wire_shape() {
        let room = RoomDetails {
            room_type: RoomType::Deluxe,
            price_per_night: 200,
            original_price: None,
            includes: MealInclusions {
                breakfast: true,
                lunch: false,
            },
            most_popular: true,
            accessible_features: vec!["Elevator".to_string()],
            cancellation_policy: "Non-refundable".to_string(),
            available_rooms: 3,
            bed_count: 2,
        };

        let value = serde_json::to_value(&room).unwrap();
        assert_eq!(value["type"], "Deluxe");
        assert_eq!(value["pricePerNight"], 200);
        assert_eq!(value["mostPopular"], true);
        assert_eq!(value["includes"]["breakfast"], true);
        assert!(value.get("originalPrice").is_none());
    }

    #[test]
    fn test_attraction_type_renames() {
        let attraction = Attraction {
            name: "Laundry".to_string(),
            attraction_type: AttractionType::WasherDryer,
            distance_km: 0.2,
        };
        let value = serde_json::to_value(&attraction).unwrap();
        assert_eq!(value["type"], "Washer/Dryer");
        assert_eq!(value["distanceKm"], 0.2);
    }

    #[test]
    fn test_review_date_is_calendar_date() {
        let review = Review {
            username: "Guest1234".to_string(),
            rating: 4,
            comment: "Fine".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 9).unwrap(),
        };
        let value = serde_json::to_value(&review).unwrap();
        assert_eq!(value["date"], "2025-03-09");
    }
}
