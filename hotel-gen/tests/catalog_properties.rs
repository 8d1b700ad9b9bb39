//! Catalog properties over many seeded hotels
//!
//! Drives only the public API: generation, mapping and city batches.

use hotel_gen::{
    CosmeticRolls, GenError, SeededRandom, StayWindow, build_hotel_type, generate_hotel,
    generate_hotels, generate_location_specific_hotels_for_stay, map_hotel_data_to_hotel_type,
    summarize_reviews,
};
use shared::models::{HotelData, RoomType};

const SAMPLES: usize = 200;

fn sample_hotels(seed: u64) -> Vec<HotelData> {
    let mut rng = SeededRandom::from_seed_u64(seed);
    generate_hotels(SAMPLES, &mut rng).unwrap()
}

#[test]
fn every_hotel_has_three_tiers_with_deluxe_most_popular() {
    for hotel in sample_hotels(1) {
        let tiers: Vec<_> = hotel.rooms.iter().map(|r| r.room_type).collect();
        assert_eq!(tiers, RoomType::TIERS.to_vec());

        let popular: Vec<_> = hotel.rooms.iter().filter(|r| r.most_popular).collect();
        assert_eq!(popular.len(), 1);
        assert!(hotel.rooms[1].most_popular);
        assert!(hotel.accessibility_label.contains("Most popular room: Deluxe."));
    }
}

#[test]
fn room_prices_and_discounts_stay_in_band() {
    for hotel in sample_hotels(2) {
        for room in &hotel.rooms {
            assert!((120..=350).contains(&room.price_per_night));
            if let Some(original) = room.original_price {
                let markup = original - room.price_per_night;
                assert!((30..=70).contains(&markup), "markup {markup}");
            }
            assert!((2..=5).contains(&room.available_rooms));
            assert!((1..=2).contains(&room.bed_count));
        }
    }
}

#[test]
fn reviews_and_summary_agree() {
    for hotel in sample_hotels(3) {
        let count = hotel.reviews.len();
        assert!((5..=20).contains(&count));
        assert_eq!(hotel.review_summary.total_reviews as usize, count);

        let recomputed = summarize_reviews(&hotel.reviews, hotel.review_summary.breakdown);
        assert_eq!(recomputed, hotel.review_summary);

        let mean =
            hotel.reviews.iter().map(|r| f64::from(r.rating)).sum::<f64>() / count as f64;
        assert!((hotel.review_summary.average_rating - mean).abs() <= 0.05 + 1e-9);
        assert!(hotel.reviews.iter().all(|r| (1..=5).contains(&r.rating)));
    }
}

#[test]
fn ids_and_faqs_in_range() {
    for hotel in sample_hotels(4) {
        assert!((10_000..=99_999).contains(&hotel.id));
        assert!((5..=15).contains(&hotel.faqs.len()));
        let [low, high] = hotel.fees.breakfast_fee_range;
        assert!(low < high);
        assert!([18, 21].contains(&hotel.policies.check_in.min_age));
    }
}

#[test]
fn gross_price_is_deterministic_over_random_cosmetics() {
    let mut rng = SeededRandom::from_seed_u64(5);
    for hotel in sample_hotels(5).iter().take(50) {
        let expected = u64::from(hotel.rooms[0].price_per_night) * 5;
        for _ in 0..3 {
            let view =
                map_hotel_data_to_hotel_type(hotel, "2025-09-01", "2025-09-06", &mut rng).unwrap();
            assert_eq!(view.property.price_breakdown.gross_price.value, expected);
            assert_eq!(view.badge_identifiers()[0], "free_wifi");
        }
    }
}

#[test]
fn build_is_pure() {
    let mut rng = SeededRandom::from_seed_u64(6);
    let hotel = generate_hotel(&mut rng).unwrap();
    let stay = StayWindow::parse("2025-02-01", "2025-02-03").unwrap();
    let rolls = CosmeticRolls::roll(&mut rng);

    assert_eq!(
        build_hotel_type(&hotel, &stay, &rolls),
        build_hotel_type(&hotel, &stay, &rolls)
    );
}

#[test]
fn bad_dates_are_reported_not_defaulted() {
    let mut rng = SeededRandom::from_seed_u64(7);
    let hotel = generate_hotel(&mut rng).unwrap();
    let err = map_hotel_data_to_hotel_type(&hotel, "2025-01-01", "soon", &mut rng).unwrap_err();
    assert!(matches!(err, GenError::InvalidDate { field: "checkOut", .. }));
}

#[test]
fn same_seed_same_catalog() {
    let stay = StayWindow::parse("2025-05-10", "2025-05-12").unwrap();
    let run = |seed| {
        let mut rng = SeededRandom::from_seed_u64(seed);
        generate_location_specific_hotels_for_stay("Las Vegas", 8, &stay, &mut rng).unwrap()
    };
    assert_eq!(run(8), run(8));
    assert_ne!(run(8), run(9));
}

#[test]
fn batch_sizes_match_request() {
    let mut rng = SeededRandom::from_seed_u64(10);
    assert!(generate_hotels(0, &mut rng).unwrap().is_empty());
    assert_eq!(generate_hotels(7, &mut rng).unwrap().len(), 7);
}
