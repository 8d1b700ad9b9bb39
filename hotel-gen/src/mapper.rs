//! Hotel mapper
//!
//! Turns a [`HotelData`] plus a stay window into the search-result
//! [`HotelType`]. The transform itself ([`build_hotel_type`]) is pure;
//! badges that are coin flips, the geo jitter and the ranking positions are
//! rolled up front into [`CosmeticRolls`] so pricing can be checked without
//! stubbing randomness.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use shared::models::{
    BenefitBadge, HotelData, HotelType, Price, PriceBreakdown, Property, TimeWindow,
};

use crate::error::{GenError, GenResult};
use crate::random::RandomSource;

/// Every generated hotel clusters around this point (New York City)
pub const BASE_LATITUDE: f64 = 40.7128;
pub const BASE_LONGITUDE: f64 = -74.0059;

/// Total width of the jitter window, in degrees
const GEO_JITTER_SPAN: f64 = 0.1;

/// Nightly price used when a hotel has no rooms at all
const FALLBACK_NIGHTLY_PRICE: u32 = 150;

const DAY_MS: f64 = 86_400_000.0;

const PHOTO_URLS: [&str; 6] = [
    "/des1.jpg",
    "/des2.jpg",
    "/des4.jpg",
    "/des5.webp",
    "/des6.png",
    "/des7.webp",
];

/// `(text, explanation, identifier)`
type BadgeSpec = (&'static str, &'static str, &'static str);

const FREE_WIFI: BadgeSpec = ("Free WiFi", "Complimentary high-speed internet", "free_wifi");
const FREE_PARKING: BadgeSpec = (
    "Free Parking",
    "Complimentary on-site parking",
    "free_parking",
);
const FREE_BREAKFAST: BadgeSpec = (
    "Free Breakfast",
    "Complimentary continental breakfast",
    "free_breakfast",
);
const SWIMMING_POOL: BadgeSpec = (
    "Swimming Pool",
    "Outdoor swimming pool available",
    "swimming_pool",
);
const FITNESS_CENTER: BadgeSpec = (
    "Fitness Center",
    "24/7 fitness center access",
    "fitness_center",
);
const RESTAURANT: BadgeSpec = ("Restaurant", "On-site dining available", "restaurant");
const AIRPORT_SHUTTLE: BadgeSpec = (
    "Airport Shuttle",
    "Complimentary airport transportation",
    "airport_shuttle",
);

// ============================================================================
// Stay window
// ============================================================================

/// Check-in / check-out pair as given by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StayWindow {
    check_in: NaiveDateTime,
    check_out: NaiveDateTime,
    check_in_label: String,
    check_out_label: String,
}

impl StayWindow {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            check_in: check_in.and_time(NaiveTime::MIN),
            check_out: check_out.and_time(NaiveTime::MIN),
            check_in_label: check_in.format("%Y-%m-%d").to_string(),
            check_out_label: check_out.format("%Y-%m-%d").to_string(),
        }
    }

    /// Parse `YYYY-MM-DD` dates or RFC 3339 date-times
    ///
    /// The original strings are kept and echoed back in the view model.
    pub fn parse(check_in: &str, check_out: &str) -> GenResult<Self> {
        Ok(Self {
            check_in: parse_stay_date("checkIn", check_in)?,
            check_out: parse_stay_date("checkOut", check_out)?,
            check_in_label: check_in.to_string(),
            check_out_label: check_out.to_string(),
        })
    }

    /// Window used when nobody picked dates: tomorrow through a week later
    pub fn default_from(today: NaiveDate) -> Self {
        Self::new(
            today + chrono::Duration::days(1),
            today + chrono::Duration::days(8),
        )
    }

    /// `ceil((check_out - check_in) / 1 day)`; zero or negative for
    /// same-day and inverted windows
    pub fn nights(&self) -> i64 {
        let ms = (self.check_out - self.check_in).num_milliseconds();
        (ms as f64 / DAY_MS).ceil() as i64
    }

    /// Nights used for pricing, never below one
    pub fn billable_nights(&self) -> u64 {
        self.nights().max(1) as u64
    }

    pub fn check_in_label(&self) -> &str {
        &self.check_in_label
    }

    pub fn check_out_label(&self) -> &str {
        &self.check_out_label
    }
}

const LOCAL_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

fn parse_stay_date(field: &'static str, value: &str) -> GenResult<NaiveDateTime> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    // Offset-less date-times are taken as written, like bare dates
    for format in LOCAL_DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(dt);
        }
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.naive_utc())
        .map_err(|_| GenError::InvalidDate {
            field,
            value: value.to_string(),
        })
}

// ============================================================================
// Cosmetic rolls
// ============================================================================

/// Random, display-only parts of a mapped hotel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CosmeticRolls {
    pub free_parking: bool,
    pub fitness_center: bool,
    pub restaurant: bool,
    pub airport_shuttle: bool,
    /// Added to [`BASE_LONGITUDE`], within ±0.05
    pub longitude_offset: f64,
    /// Added to [`BASE_LATITUDE`], within ±0.05
    pub latitude_offset: f64,
    pub ranking_position: u32,
    pub position: u32,
}

impl CosmeticRolls {
    pub fn roll<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        Self {
            free_parking: rng.chance(0.6),
            fitness_center: rng.chance(0.4),
            restaurant: rng.chance(0.5),
            airport_shuttle: rng.chance(0.3),
            longitude_offset: (rng.uniform01() - 0.5) * GEO_JITTER_SPAN,
            latitude_offset: (rng.uniform01() - 0.5) * GEO_JITTER_SPAN,
            ranking_position: rng.int_in_range(1, 100) as u32,
            position: rng.int_in_range(1, 100) as u32,
        }
    }

    /// No optional badges, no jitter, first position
    pub fn none() -> Self {
        Self {
            free_parking: false,
            fitness_center: false,
            restaurant: false,
            airport_shuttle: false,
            longitude_offset: 0.0,
            latitude_offset: 0.0,
            ranking_position: 1,
            position: 1,
        }
    }
}

// ============================================================================
// Transform
// ============================================================================

/// Badges in display order
///
/// Free WiFi is unconditional. Free Breakfast and Swimming Pool follow from
/// the hotel itself; the rest come from `rolls`.
pub fn benefit_badges(hotel: &HotelData, rolls: &CosmeticRolls) -> Vec<BenefitBadge> {
    let lower_name = hotel.name.to_lowercase();
    let has_pool = lower_name.contains("resort") || lower_name.contains("aqua");

    [
        (true, FREE_WIFI),
        (rolls.free_parking, FREE_PARKING),
        (hotel.offers_breakfast(), FREE_BREAKFAST),
        (has_pool, SWIMMING_POOL),
        (rolls.fitness_center, FITNESS_CENTER),
        (rolls.restaurant, RESTAURANT),
        (rolls.airport_shuttle, AIRPORT_SHUTTLE),
    ]
    .into_iter()
    .filter(|(shown, _)| *shown)
    .map(|(_, (text, explanation, identifier))| BenefitBadge {
        text: text.to_string(),
        variant: "positive".to_string(),
        explanation: explanation.to_string(),
        identifier: identifier.to_string(),
    })
    .collect()
}

/// Stay pricing from the first room tier and the resort fee
pub fn price_breakdown(
    hotel: &HotelData,
    stay: &StayWindow,
    benefit_badges: Vec<BenefitBadge>,
) -> PriceBreakdown {
    let nights = stay.billable_nights();
    let first_room = hotel.rooms.first();
    let nightly = first_room.map_or(FALLBACK_NIGHTLY_PRICE, |r| r.price_per_night);

    PriceBreakdown {
        strikethrough_price: first_room
            .and_then(|r| r.original_price)
            .map(|original| Price::usd(u64::from(original) * nights)),
        benefit_badges,
        gross_price: Price::usd(u64::from(nightly) * nights),
        excluded_price: Price::usd(u64::from(hotel.fees.resort_fee_per_night) * nights),
        tax_exceptions: Vec::new(),
    }
}

/// Score word for a rating, thresholds on a 10-point scale
pub fn review_score_word(score: f64) -> &'static str {
    if score >= 9.0 {
        "Exceptional"
    } else if score >= 8.0 {
        "Excellent"
    } else if score >= 7.0 {
        "Very Good"
    } else if score >= 6.0 {
        "Good"
    } else if score >= 5.0 {
        "Average"
    } else {
        "Poor"
    }
}

/// Deterministic transform: same inputs, same view
pub fn build_hotel_type(hotel: &HotelData, stay: &StayWindow, rolls: &CosmeticRolls) -> HotelType {
    let summary = &hotel.review_summary;
    let class = summary.average_rating.floor().max(0.0) as u32;
    let policies = &hotel.policies;

    HotelType {
        hotel_id: hotel.id,
        accessibility_label: hotel.accessibility_label.clone(),
        property: Property {
            country_code: "US".to_string(),
            main_photo_id: 1,
            photo_urls: PHOTO_URLS.iter().map(|u| u.to_string()).collect(),
            longitude: BASE_LONGITUDE + rolls.longitude_offset,
            latitude: BASE_LATITUDE + rolls.latitude_offset,
            currency: "USD".to_string(),
            review_count: summary.total_reviews,
            quality_class: class,
            review_score_word: review_score_word(summary.average_rating).to_string(),
            block_ids: vec!["block1".to_string(), "block2".to_string()],
            property_class: class,
            checkout: TimeWindow {
                from_time: policies.check_out.time.clone(),
                until_time: policies.check_out.time.clone(),
            },
            name: hotel.name.clone(),
            is_first_page: true,
            ufi: hotel.id,
            checkin: TimeWindow {
                from_time: policies.check_in.start_time.clone(),
                until_time: policies.check_in.end_time.clone(),
            },
            ranking_position: rolls.ranking_position,
            id: hotel.id,
            wishlist_name: String::new(),
            accurate_property_class: class,
            checkout_date: stay.check_out_label().to_string(),
            checkin_date: stay.check_in_label().to_string(),
            review_score: summary.average_rating,
            opt_out_from_gallery_changes: 0,
            position: rolls.position,
            price_breakdown: price_breakdown(hotel, stay, benefit_badges(hotel, rolls)),
        },
    }
}

/// Map one hotel over a stay, rolling fresh cosmetics
///
/// Unparseable dates fail with [`GenError::InvalidDate`]; same-day and
/// inverted windows are priced as one night.
pub fn map_hotel_data_to_hotel_type<R: RandomSource + ?Sized>(
    hotel: &HotelData,
    check_in: &str,
    check_out: &str,
    rng: &mut R,
) -> GenResult<HotelType> {
    let stay = StayWindow::parse(check_in, check_out)?;
    Ok(build_hotel_type(hotel, &stay, &CosmeticRolls::roll(rng)))
}
