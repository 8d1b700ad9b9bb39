//! Hotel generator
//!
//! Composes randomized attributes drawn from the fixed pools into one
//! [`HotelData`]. Rolls happen in a fixed order so a seeded source always
//! reproduces the same hotel.

use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::prelude::*;
use shared::models::{
    Attraction, CheckInPolicy, CheckOutPolicy, Faq, Fees, HotelData, MealInclusions, Policies,
    RatingBreakdown, Review, ReviewSummary, RoomDetails, RoomType, Vendor,
};

use crate::error::GenResult;
use crate::pools::{
    ACCESS_METHODS, ACCESSIBLE_FEATURES, ATTRACTIONS, CANCELLATION_POLICIES, DESCRIPTIONS, FAQS,
    FINE_PRINT, HOTEL_NAMES, MIN_CHECK_IN_AGES, REVIEWS, SAFETY_FEATURES, STREETS,
};
use crate::random::{RandomSource, keep_each, pick_random};

/// Batch size when the caller does not ask for one
pub const DEFAULT_HOTEL_COUNT: usize = 5;

/// Index of the room tier flagged as most popular
const MOST_POPULAR_INDEX: usize = 1;

const ATTRACTION_KEEP: f64 = 0.8;
const FEATURE_KEEP: f64 = 0.5;

/// Generate one hotel, dating reviews relative to today (UTC)
pub fn generate_hotel<R: RandomSource + ?Sized>(rng: &mut R) -> GenResult<HotelData> {
    generate_hotel_on(rng, Utc::now().date_naive())
}

/// Generate one hotel, dating reviews relative to `today`
pub fn generate_hotel_on<R: RandomSource + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
) -> GenResult<HotelData> {
    let id = rng.int_in_range(10_000, 99_999) as u32;
    let name = HOTEL_NAMES.pick(rng)?.to_string();
    let description = DESCRIPTIONS.pick(rng)?.to_string();
    let vendor = *pick_random(rng, &Vendor::ALL)?;
    let street_number = rng.int_in_range(100, 999);
    let address = format!("{} {}", street_number, STREETS.pick(rng)?);

    let rooms = generate_rooms(rng)?;

    let attractions_nearby = keep_each(rng, ATTRACTIONS.items, ATTRACTION_KEEP)
        .into_iter()
        .map(|(name, attraction_type, distance_km)| Attraction {
            name: name.to_string(),
            attraction_type,
            distance_km,
        })
        .collect();

    let reviews = generate_reviews(rng, today)?;
    let breakdown = roll_breakdown(rng);
    let review_summary = summarize_reviews(&reviews, breakdown);

    let policies = generate_policies(rng)?;
    let fees = roll_fees(rng);
    let faqs = sample_faqs(rng)?;

    let accessibility_label = accessibility_label(
        rng,
        &name,
        review_summary.average_rating,
        vendor,
        RoomType::TIERS[MOST_POPULAR_INDEX],
    )?;

    Ok(HotelData {
        id,
        vendor,
        name,
        address,
        description,
        rooms,
        attractions_nearby,
        accessibility_label,
        review_summary,
        reviews,
        policies,
        fees,
        fine_print: FINE_PRINT.to_string(),
        faqs,
    })
}

/// Generate `count` independent hotels
pub fn generate_hotels<R: RandomSource + ?Sized>(
    count: usize,
    rng: &mut R,
) -> GenResult<Vec<HotelData>> {
    let today = Utc::now().date_naive();
    let hotels = (0..count)
        .map(|_| generate_hotel_on(rng, today))
        .collect::<GenResult<Vec<_>>>()?;
    tracing::debug!(count = hotels.len(), "Generated hotel batch");
    Ok(hotels)
}

/// Summarize reviews: mean rating rounded half away from zero to one decimal
///
/// An empty slice summarizes to `0.0` over `0` reviews.
pub fn summarize_reviews(reviews: &[Review], breakdown: RatingBreakdown) -> ReviewSummary {
    let average_rating = if reviews.is_empty() {
        0.0
    } else {
        let sum: Decimal = reviews.iter().map(|r| Decimal::from(r.rating)).sum();
        (sum / Decimal::from(reviews.len()))
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
            .to_f64()
            .unwrap_or_default()
    };

    ReviewSummary {
        average_rating,
        total_reviews: reviews.len() as u32,
        breakdown,
    }
}

fn generate_rooms<R: RandomSource + ?Sized>(rng: &mut R) -> GenResult<Vec<RoomDetails>> {
    RoomType::TIERS
        .iter()
        .enumerate()
        .map(|(i, &room_type)| -> GenResult<RoomDetails> {
            let price_per_night = rng.int_in_range(120, 350) as u32;
            let original_price = if rng.chance(0.5) {
                Some(price_per_night + rng.int_in_range(30, 70) as u32)
            } else {
                None
            };
            let includes = MealInclusions {
                breakfast: rng.chance(0.7),
                lunch: rng.chance(0.3),
            };
            let accessible_features = keep_each(rng, ACCESSIBLE_FEATURES.items, FEATURE_KEEP)
                .into_iter()
                .map(str::to_string)
                .collect();
            let cancellation_policy = CANCELLATION_POLICIES.pick(rng)?.to_string();

            Ok(RoomDetails {
                room_type,
                price_per_night,
                original_price,
                includes,
                most_popular: i == MOST_POPULAR_INDEX,
                accessible_features,
                cancellation_policy,
                available_rooms: rng.int_in_range(2, 5) as u32,
                bed_count: rng.int_in_range(1, 2) as u32,
            })
        })
        .collect()
}

fn generate_reviews<R: RandomSource + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
) -> GenResult<Vec<Review>> {
    let count = rng.int_in_range(5, 20);
    (0..count)
        .map(|_| -> GenResult<Review> {
            let (comment, rating) = REVIEWS.pick(rng)?;
            let username = format!("Guest{}", rng.int_in_range(1000, 9999));
            let date = today - Duration::days(rng.int_in_range(1, 100));
            Ok(Review {
                username,
                rating: *rating,
                comment: comment.to_string(),
                date,
            })
        })
        .collect()
}

fn roll_breakdown<R: RandomSource + ?Sized>(rng: &mut R) -> RatingBreakdown {
    RatingBreakdown {
        cleanliness: rng.int_in_range(7, 10) as u8,
        location: rng.int_in_range(8, 10) as u8,
        comfort: rng.int_in_range(7, 10) as u8,
        staff: rng.int_in_range(8, 10) as u8,
        value: rng.int_in_range(6, 9) as u8,
    }
}

fn generate_policies<R: RandomSource + ?Sized>(rng: &mut R) -> GenResult<Policies> {
    let check_in = CheckInPolicy {
        start_time: "4:00 PM".to_string(),
        end_time: "Anytime".to_string(),
        contactless: rng.chance(0.8),
        express: rng.chance(0.8),
        min_age: *MIN_CHECK_IN_AGES.pick(rng)?,
    };
    let check_out = CheckOutPolicy {
        time: "11:00 AM".to_string(),
        contactless: rng.chance(0.8),
        express: rng.chance(0.8),
        late_fee_applicable: rng.chance(0.9),
    };
    let access_methods = keep_each(rng, ACCESS_METHODS.items, FEATURE_KEEP)
        .into_iter()
        .map(str::to_string)
        .collect();
    let safety_features = keep_each(rng, SAFETY_FEATURES.items, FEATURE_KEEP)
        .into_iter()
        .map(str::to_string)
        .collect();

    Ok(Policies {
        check_in,
        check_out,
        pets_allowed: false,
        children_policy: "Children up to 18 stay free with parents using existing beds."
            .to_string(),
        extra_beds: "Not available".to_string(),
        crib_availability: "Not available".to_string(),
        access_methods,
        safety_features,
        housekeeping_policy: "Follows CleanStay standards".to_string(),
    })
}

fn roll_fees<R: RandomSource + ?Sized>(rng: &mut R) -> Fees {
    let deposit_per_night = rng.int_in_range(100, 200) as u32;
    let resort_fee_per_night = rng.int_in_range(20, 40) as u32;
    let breakfast_low = rng.int_in_range(15, 22) as u32;
    let breakfast_high = breakfast_low + rng.int_in_range(10, 15) as u32;

    Fees {
        deposit_per_night,
        resort_fee_per_night,
        breakfast_fee_range: [breakfast_low, breakfast_high],
        parking_fee_per_day: rng.int_in_range(40, 70) as u32,
        late_checkout_fee: rng.int_in_range(30, 60) as u32,
    }
}

fn sample_faqs<R: RandomSource + ?Sized>(rng: &mut R) -> GenResult<Vec<Faq>> {
    let count = rng.int_in_range(5, 15);
    (0..count)
        .map(|_| -> GenResult<Faq> {
            let (question, answer) = FAQS.pick(rng)?;
            Ok(Faq {
                question: question.to_string(),
                answer: answer.to_string(),
            })
        })
        .collect()
}

// The attraction is drawn from the full candidate list, not the filtered one,
// and the downtown distance is unrelated to any attraction distance.
fn accessibility_label<R: RandomSource + ?Sized>(
    rng: &mut R,
    name: &str,
    average_rating: f64,
    vendor: Vendor,
    most_popular: RoomType,
) -> GenResult<String> {
    let (attraction, _, _) = ATTRACTIONS.pick(rng)?;
    let downtown_km = rng.int_in_range(1, 7);
    Ok(format!(
        "{name}.\n{average_rating} out of 5 stars.\n{attraction} • {downtown_km} km from downtown.\nOffered by {vendor}.\nMost popular room: {most_popular}.\n"
    ))
}
