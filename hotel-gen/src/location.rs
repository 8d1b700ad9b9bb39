//! Location-flavored batches
//!
//! Generic hotels nudged toward a searched city: the address always gains the
//! city, the name sometimes gains a neighborhood keyword.

use chrono::Utc;
use shared::models::HotelType;

use crate::error::GenResult;
use crate::generator::generate_hotels;
use crate::mapper::{CosmeticRolls, StayWindow, build_hotel_type};
use crate::random::{RandomSource, pick_random};

/// Batch size for a city search when the caller does not ask for one
pub const DEFAULT_LOCATION_COUNT: usize = 15;

const KEYWORD_IN_NAME: f64 = 0.4;

const CITY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "new york",
        &["Manhattan", "Brooklyn", "Times Square", "Central Park"],
    ),
    (
        "los angeles",
        &["Hollywood", "Beverly Hills", "Santa Monica", "Downtown LA"],
    ),
    (
        "chicago",
        &["Magnificent Mile", "River North", "Loop", "Lincoln Park"],
    ),
    (
        "miami",
        &["South Beach", "Biscayne Bay", "Ocean Drive", "Art Deco"],
    ),
    (
        "san francisco",
        &["Union Square", "Fisherman's Wharf", "Nob Hill", "SOMA"],
    ),
    ("las vegas", &["Strip", "Downtown", "Fremont", "Casino"]),
    (
        "orlando",
        &[
            "Disney World",
            "Universal",
            "International Drive",
            "Lake Buena Vista",
        ],
    ),
    (
        "seattle",
        &["Pike Place", "Capitol Hill", "Belltown", "Queen Anne"],
    ),
];

/// Neighborhood keywords for a city (case-insensitive), or the city itself
pub fn city_keywords(city: &str) -> Vec<&str> {
    let normalized = city.to_lowercase();
    CITY_KEYWORDS
        .iter()
        .find(|(name, _)| *name == normalized)
        .map(|(_, keywords)| keywords.to_vec())
        .unwrap_or_else(|| vec![city])
}

/// Keyword is picked first; it is appended with probability 0.4
pub fn adjust_name_for_location<R: RandomSource + ?Sized>(
    name: &str,
    city: &str,
    rng: &mut R,
) -> GenResult<String> {
    let keywords = city_keywords(city);
    let keyword = pick_random(rng, &keywords)?;
    if rng.chance(KEYWORD_IN_NAME) {
        Ok(format!("{name} {keyword}"))
    } else {
        Ok(name.to_string())
    }
}

/// City batch over the default window (tomorrow through a week later)
pub fn generate_location_specific_hotels<R: RandomSource + ?Sized>(
    city: &str,
    count: usize,
    rng: &mut R,
) -> GenResult<Vec<HotelType>> {
    let stay = StayWindow::default_from(Utc::now().date_naive());
    generate_location_specific_hotels_for_stay(city, count, &stay, rng)
}

pub fn generate_location_specific_hotels_for_stay<R: RandomSource + ?Sized>(
    city: &str,
    count: usize,
    stay: &StayWindow,
    rng: &mut R,
) -> GenResult<Vec<HotelType>> {
    let hotels = generate_hotels(count, rng)?;
    let views = hotels
        .into_iter()
        .map(|mut hotel| -> GenResult<HotelType> {
            hotel.name = adjust_name_for_location(&hotel.name, city, rng)?;
            hotel.address = format!("{}, {city}", hotel.address);
            Ok(build_hotel_type(&hotel, stay, &CosmeticRolls::roll(rng)))
        })
        .collect::<GenResult<Vec<_>>>()?;

    tracing::debug!(city, count = views.len(), "Generated location-specific hotels");
    Ok(views)
}
