//! # hotel-gen
//!
//! Synthetic hotel catalog: procedural hotel records and their
//! search-result view models.
//!
//! ## Scope
//!
//! This crate handles WHAT a generated hotel looks like:
//! - Random selection over fixed content pools
//! - `HotelData` generation (rooms, reviews, policies, fees, FAQs)
//! - Mapping a hotel plus a stay window into a `HotelType`
//! - City-flavored batches for search pages
//!
//! Serving the results (HTTP, JSON envelopes) stays in `hotel-service`.
//!
//! ## Example
//!
//! ```
//! use hotel_gen::{SeededRandom, generate_hotels, map_hotel_data_to_hotel_type};
//!
//! let mut rng = SeededRandom::from_seed_u64(7);
//! let hotels = generate_hotels(2, &mut rng)?;
//! let view = map_hotel_data_to_hotel_type(&hotels[0], "2025-01-10", "2025-01-13", &mut rng)?;
//! assert_eq!(
//!     view.property.price_breakdown.gross_price.value,
//!     u64::from(hotels[0].rooms[0].price_per_night) * 3
//! );
//! # Ok::<(), hotel_gen::GenError>(())
//! ```

mod error;
mod generator;
mod location;
mod mapper;
mod pools;
mod random;

// Re-exports
pub use error::{GenError, GenResult};
pub use generator::{
    DEFAULT_HOTEL_COUNT, generate_hotel, generate_hotel_on, generate_hotels, summarize_reviews,
};
pub use location::{
    DEFAULT_LOCATION_COUNT, adjust_name_for_location, city_keywords,
    generate_location_specific_hotels, generate_location_specific_hotels_for_stay,
};
pub use mapper::{
    BASE_LATITUDE, BASE_LONGITUDE, CosmeticRolls, StayWindow, benefit_badges, build_hotel_type,
    map_hotel_data_to_hotel_type, price_breakdown, review_score_word,
};
pub use random::{RandomSource, SeededRandom, ThreadRandom, keep_each, pick_random, random_int};
