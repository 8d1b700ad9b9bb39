//! Fixed content pools the generator draws from

use crate::error::{GenError, GenResult};
use crate::random::{RandomSource, pick_random};
use shared::models::AttractionType;

/// Named list of candidates
pub(crate) struct Pool<T: 'static> {
    pub name: &'static str,
    pub items: &'static [T],
}

impl<T: 'static> Pool<T> {
    pub(crate) const fn new(name: &'static str, items: &'static [T]) -> Self {
        Self { name, items }
    }

    pub(crate) fn pick<R: RandomSource + ?Sized>(&self, rng: &mut R) -> GenResult<&'static T> {
        pick_random(rng, self.items).map_err(|_| GenError::EmptyPool { pool: self.name })
    }
}

pub(crate) const HOTEL_NAMES: Pool<&str> = Pool::new(
    "hotel names",
    &[
        "Azure Coast Retreat",
        "Golden Bay Suites",
        "CityView Inn",
        "Palm Garden Lodge",
        "Ocean Breeze Hotel",
        "Downtown Deluxe",
        "Harbor Haven",
        "Skyline Resort",
        "Desert Rose Oasis",
        "Mountain Crest Lodge",
        "Riverside Rendezvous",
        "The Grand Central",
        "Sunset Serenity Suites",
        "Aqua Vista Resort",
        "The Urban Nook",
        "Tranquil Pines Inn",
        "Crimson Sky Hotel",
        "Sapphire Sands Resort",
        "Emerald Gardens Hotel",
        "Pinnacle Peak Lodge",
        "Canyon Ridge Inn",
        "Starfall Hotel & Suites",
        "Lakeview Manor",
        "The Gilded Compass",
        "Vivid Bloom Resort",
        "Orchid Heights Hotel",
        "Moonlit Cove Inn",
        "Terra Nova Suites",
        "The Obsidian Palace",
        "Whispering Pines Resort",
        "Metropolitan Grand",
        "Coral Sands Beachfront",
        "Stone Creek Inn",
        "The Beacon Hotel",
        "Harmony Heights Retreat",
        "Silver Stream Lodge",
        "Olympus Towers",
        "Mystic Falls Hotel",
        "The Royal Bloom",
        "Copperleaf Residences",
        "Zephyr Sands Resort",
        "Polaris Grand Hotel",
        "Ironwood Manor",
        "The Sanctuary Suites",
        "Cascading Waters Hotel",
        "The Velvet Sparrow Inn",
    ],
);

pub(crate) const DESCRIPTIONS: Pool<&str> = Pool::new(
    "descriptions",
    &[
        "A luxurious stay near the city’s heart, featuring modern rooms and exceptional service.",
        "Coastal bliss with scenic views and beach access.",
        "Budget-friendly comfort close to major attractions and public transit.",
        "Perfect for families and business travelers alike.",
        "Contemporary hotel with full-service dining and rooftop views.",
        "Nestled in a peaceful desert landscape, offering a serene escape with stunning views.",
        "An eco-friendly retreat with lush gardens and sustainable practices.",
        "Historic charm meets modern convenience in this beautifully restored hotel.",
        "Ideal for adventurers, with easy access to hiking trails and outdoor activities.",
        "Sophisticated urban living with state-of-the-art facilities and vibrant nightlife nearby.",
        "Family-friendly resort featuring a water park, kids' club, and diverse dining options.",
        "Exclusive boutique hotel offering personalized service and unique, artfully designed rooms.",
        "Overlooking the tranquil lake, a perfect spot for relaxation and water sports.",
        "Experience unparalleled luxury with personalized concierge service and gourmet dining.",
        "A vibrant and artistic hotel, perfect for creatives and those seeking inspiration.",
        "Comfortable and convenient, located just minutes from the airport with shuttle service.",
        "Charming countryside inn offering a cozy atmosphere and delicious home-cooked meals.",
        "Modern design meets ultimate comfort in this new downtown hotspot.",
        "Discover a hidden gem offering unparalleled tranquility, complete with a private beach and holistic wellness programs.",
        "The quintessential business hotel, providing state-of-the-art conference facilities, executive lounges, and seamless connectivity.",
        "Immerse yourself in local culture at this charming guesthouse, a short walk from historical landmarks and bustling markets.",
        "An all-inclusive paradise designed for ultimate relaxation, featuring multiple pools, gourmet restaurants, and evening entertainment.",
        "Your home away from home, these spacious suites come with fully equipped kitchens and separate living areas, perfect for extended stays.",
        "Perched high above the city, enjoy panoramic skyline views from every room, complemented by a Michelin-starred restaurant and a rooftop bar.",
        "A pet-friendly establishment that goes above and beyond, offering pet amenities, designated play areas, and special treats for your furry friends.",
        "Experience sustainable luxury at its finest, with locally sourced cuisine, solar-powered facilities, and a commitment to environmental preservation.",
        "This vibrant and trendy hotel boasts unique themed rooms, a lively lobby bar, and is situated in the heart of the city's entertainment district.",
        "Designed for the discerning traveler, our hotel features bespoke services, an exclusive members-only lounge, and direct access to high-end shopping.",
    ],
);

pub(crate) const STREETS: Pool<&str> = Pool::new(
    "streets",
    &[
        "Main St",
        "Ocean Blvd",
        "5th Ave",
        "Sunset Rd",
        "Market St",
        "Elm St",
        "Maple Ave",
        "Broadway",
        "Park Pl",
        "Pine Ln",
        "Grand Ave",
        "University Dr",
        "Highland Rd",
        "Riverfront Pkwy",
        "Liberty St",
        "Willow Creek Ln",
        "Cedarwood Blvd",
        "Mill Pond Rd",
        "Silverleaf Way",
        "Forest Ridge Dr",
    ],
);

pub(crate) const ACCESSIBLE_FEATURES: Pool<&str> = Pool::new(
    "accessible features",
    &[
        "Elevator",
        "Ramp Access",
        "Visual Alarms in Hallways",
        "Wheelchair Accessible Rooms",
        "Roll-in Showers",
        "Grab Bars in Bathrooms",
        "Lowered Sinks",
        "Accessible Parking",
        "Braille Signage",
        "Hearing Impaired Alarms",
        "Service Animal Friendly",
        "Accessible Route to Entrance",
        "Closed Captioning on TVs",
        "Accessible Pool Lift",
    ],
);

pub(crate) const CANCELLATION_POLICIES: Pool<&str> = Pool::new(
    "cancellation policies",
    &[
        "Free cancellation 24h before check-in",
        "Non-refundable",
        "Free cancellation up to 48 hours before check-in",
        "Free cancellation up to 7 days before check-in",
        "Flexible cancellation with full refund before 6 PM on check-in day",
        "First night charged if cancelled within 24 hours of check-in",
        "Penalty applies if cancelled after booking confirmed",
        "Free cancellation up to 14 days before arrival",
    ],
);

/// `(name, type, distance_km)`
pub(crate) const ATTRACTIONS: Pool<(&str, AttractionType, f64)> = Pool::new(
    "attractions",
    &[
        ("Beach Access", AttractionType::Beach, 0.3),
        ("Downtown Plaza", AttractionType::Downtown, 1.1),
        ("Ocean View Park", AttractionType::OceanView, 0.4),
        ("Washer/Dryer Facility", AttractionType::WasherDryer, 0.2),
        ("Local Art Museum", AttractionType::Museum, 2.5),
        ("City Central Market", AttractionType::Market, 0.8),
        ("Botanical Gardens", AttractionType::Park, 3.7),
        ("Historic Lighthouse", AttractionType::Landmark, 5.0),
        ("Children's Discovery Center", AttractionType::FamilyAttraction, 1.5),
        ("Shopping Mall", AttractionType::Shopping, 2.0),
        ("Public Transit Station", AttractionType::Transit, 0.6),
        ("Golf Course", AttractionType::Sport, 4.2),
        ("Concert Venue", AttractionType::Entertainment, 2.9),
        ("National Park Entrance", AttractionType::Nature, 10.5),
        ("Waterfront Promenade", AttractionType::WalkingArea, 0.7),
        ("Aquarium", AttractionType::Attraction, 3.1),
        ("Community Sports Complex", AttractionType::Sport, 1.8),
        ("Convention Center", AttractionType::Business, 1.3),
        ("University Campus", AttractionType::Education, 4.8),
    ],
);

/// `(comment, rating)`
pub(crate) const REVIEWS: Pool<(&str, u8)> = Pool::new(
    "reviews",
    &[
        ("Exceptional service and spotless rooms. Truly a five-star experience!", 5),
        ("Amazing ocean view and very clean! Woke up to paradise every day.", 5),
        ("Would definitely stay again. Loved the breakfast spread; so many options!", 4),
        ("Not bad for the price, especially given the good location. A solid choice.", 3),
        ("Super friendly staff and cozy rooms. Felt very welcomed from arrival to departure.", 4),
        ("Close to everything important. Comfortable beds ensured a great night's sleep.", 4),
        ("Decent amenities overall, and elevator access was really helpful for our luggage.", 3),
        ("A bit noisy at night due to its very central location, but otherwise excellent.", 3),
        ("Loved the smart locks and seamless check-in process. Very modern and efficient.", 5),
        ("Fantastic pool area and friendly poolside service. The kids absolutely loved it!", 5),
        ("The hotel restaurant had delicious food and a truly great atmosphere for dinner.", 4),
        ("Quiet and relaxing, perfect for a peaceful getaway. Just what we needed.", 5),
        ("Great value for money, genuinely exceeded my expectations for a budget stay.", 4),
        ("Rooms were spacious and very well maintained, felt fresh and clean.", 4),
        ("The concierge was incredibly helpful with local tips and reservations. Top-notch assistance.", 5),
        ("Internet was fast and reliable, which was a huge plus for work and streaming.", 4),
        ("Parking was a bit tight, especially on busy nights, but we always found a spot eventually.", 3),
        ("Beautiful decor and very comfortable beds. Felt like a luxury stay without the huge price tag.", 5),
        ("An excellent choice for business travel; quiet, efficient, and well-equipped for meetings.", 4),
        ("Loved the direct beach access, truly wonderful to step right onto the sand!", 5),
        ("My only complaint was the slow check-in process; took longer than expected.", 2),
        ("The breakfast buffet was absolutely outstanding! Best I've had in a hotel in years.", 5),
        ("Perfect for a family vacation, lots for the kids to do and great family-friendly amenities.", 4),
        ("Surprisingly quiet given its central location. Managed to get good rest despite being downtown.", 4),
        ("Could use an update in some areas, but still very clean and functional for a short stay.", 3),
        ("The gym facilities were top-notch and well-maintained. A great bonus for fitness enthusiasts.", 4),
        ("Hassle-free stay from start to finish. Staff went above and beyond to assist us.", 5),
        ("The view from our balcony was absolutely breathtaking. Worth every penny!", 5),
        ("Definitely recommend this place for a romantic escape; very charming and private.", 5),
        ("A bit far from major attractions, requiring taxis or public transport, but very peaceful.", 3),
        ("Excellent amenities for pets, truly pet-friendly with dedicated areas and treats.", 5),
        ("Room service was quick and the food was hot and delicious every time.", 4),
        ("Enjoyed the evening entertainment in the lobby, added a nice touch to the stay.", 4),
        ("Minor issue with the AC, but it was quickly resolved by maintenance.", 3),
        ("The beds were incredibly comfortable, honestly the best sleep I've had in ages!", 5),
        ("Walking distance to many shops and restaurants, made exploring easy and fun.", 4),
        ("Good security measures in place, felt very safe throughout our stay.", 4),
        ("Loved the complimentary happy hour! A great way to unwind after a day of sightseeing.", 5),
        ("Friendly front desk staff but the wait for elevators was often long, especially during peak hours.", 3),
        ("The hotel grounds are beautiful and meticulously kept, felt very luxurious.", 5),
        ("Housekeeping was inconsistent; skipped our room one day, which was disappointing.", 2),
        ("The spa facilities were a wonderful addition, very relaxing and well-managed.", 5),
        ("Our room had a slight mildew smell, but it wasn't terrible enough to complain.", 2),
        ("The kids' club was a lifesaver! Our children had a fantastic time and were well cared for.", 5),
        ("Located right next to a busy road, so expect some traffic noise, even on higher floors.", 2),
        ("The bar staff were incredibly attentive and made excellent cocktails.", 4),
        ("Pillows were a bit too soft for my liking, but that's a minor personal preference.", 3),
        ("The shuttle service was punctual and very convenient for getting to the convention center.", 4),
        ("We had an issue with a noisy neighbor, but the front desk handled it promptly and professionally.", 4),
        ("The decor felt a bit dated, but everything was clean and functional.", 3),
        ("Absolutely loved the rooftop pool and bar! Perfect for enjoying the sunset.", 5),
        ("The coffee shop in the lobby was a great perk for a quick morning pick-me-up.", 4),
        ("Valet parking was efficient and friendly, though a bit pricey.", 3),
        ("The view was partially obstructed by another building, which wasn't clear from the booking description.", 2),
        ("Every staff member we encountered was genuinely kind and helpful. Outstanding hospitality!", 5),
        ("The restaurant portions were small for the price, but the quality of food was high.", 3),
        ("Had a wonderful time exploring the nearby attractions, very convenient location for tourists.", 4),
        ("The check-out process was quick and smooth, no complaints there.", 4),
        ("Unfortunately, the hot water pressure was quite low during our stay.", 2),
        ("The communal areas were beautifully designed and comfortable.", 4),
    ],
);

/// `(question, answer)`
pub(crate) const FAQS: Pool<(&str, &str)> = Pool::new(
    "faqs",
    &[
        (
            "Is breakfast included?",
            "Depends on the room; please check your specific room details or package for breakfast inclusions.",
        ),
        (
            "Can I check out late?",
            "Yes, late checkout is often available for an additional fee and is subject to hotel availability. Please inquire at the front desk on your departure day.",
        ),
        (
            "Are pets allowed?",
            "Only service animals are permitted. We unfortunately do not allow other pets on the premises.",
        ),
        (
            "Is there parking available?",
            "Yes, we offer complimentary on-site parking for all registered guests. Valet parking may be available for an additional fee.",
        ),
        (
            "Do you have a pool?",
            "Yes, we feature both an indoor heated pool and an outdoor seasonal pool for guest enjoyment. Hours are posted poolside.",
        ),
        (
            "Is there Wi-Fi access?",
            "Yes, complimentary high-speed Wi-Fi is available throughout the entire hotel, including all guest rooms and common areas.",
        ),
        (
            "What are the check-in and check-out times?",
            "Standard check-in is at 3:00 PM, and check-out is at 11:00 AM. Early check-in may be possible based on availability.",
        ),
        (
            "Do you have a fitness center?",
            "Yes, our 24-hour fitness center is fully equipped with modern cardio machines, strength training equipment, and free weights.",
        ),
        (
            "Is there a restaurant on site?",
            "Yes, our hotel features a full-service restaurant, offering breakfast, lunch, and dinner. Room service is also available.",
        ),
        (
            "Can I store my luggage before check-in or after check-out?",
            "Yes, we offer complimentary luggage storage services at the front desk for your convenience.",
        ),
        (
            "Do you offer airport shuttle service?",
            "Yes, we provide a complimentary shuttle service to and from the nearest airport. Please contact the front desk to arrange your pick-up or drop-off time.",
        ),
        (
            "Are there accessible rooms available?",
            "Yes, we offer a variety of accessible rooms designed for guests with disabilities, featuring amenities like roll-in showers, grab bars, and wider doorways. Please specify your needs when booking.",
        ),
        (
            "Is laundry service available?",
            "Yes, we have both self-service coin-operated laundry facilities and professional laundry/dry cleaning services available for a fee.",
        ),
        (
            "Can I modify or cancel my reservation?",
            "Reservation modification and cancellation policies vary by booking type and rate. Please refer to your confirmation email for specific terms, or contact our reservations team for assistance.",
        ),
        (
            "Do you have meeting or event spaces?",
            "Yes, we offer versatile meeting rooms and event spaces suitable for conferences, weddings, and social gatherings. Our events team can assist with planning.",
        ),
        (
            "Is there a spa or wellness center?",
            "Some of our hotels feature a full-service spa offering massages, facials, and other treatments. Please check specific hotel amenities.",
        ),
        (
            "What payment methods do you accept?",
            "We accept all major credit cards (Visa, MasterCard, American Express, Discover) and debit cards. Cash payments may require a deposit.",
        ),
        (
            "Do rooms have coffee makers and mini-fridges?",
            "Most of our guest rooms include a coffee maker and a mini-fridge for your convenience. Please check your room type for specific amenities.",
        ),
        (
            "Is smoking allowed in rooms or on property?",
            "Our hotel is 100% smoke-free. Smoking is prohibited in all indoor areas and may be restricted in designated outdoor areas.",
        ),
        (
            "Can I request an extra bed or crib?",
            "Yes, extra beds (rollaways) and cribs are available upon request and are subject to availability and a possible nightly fee. Please arrange this in advance.",
        ),
        (
            "Is there a gift shop or convenience store on site?",
            "Yes, we have a small gift shop/convenience store located in the lobby, offering snacks, drinks, and essential travel items.",
        ),
        (
            "Do you offer a loyalty program?",
            "Yes, we participate in our hotel brand loyalty program. Members can earn points and enjoy exclusive benefits during their stay.",
        ),
        (
            "What security measures are in place?",
            "Our hotel features 24/7 security cameras, key card access to guest floors, and on-site security personnel for your safety and peace of mind.",
        ),
        (
            "Are there connecting rooms available?",
            "Connecting rooms can be requested but are subject to availability. Please note this preference when making your reservation.",
        ),
        (
            "Do you have an ATM on site?",
            "Yes, there is an ATM conveniently located in the hotel lobby for guest use.",
        ),
        (
            "Can I have packages delivered to the hotel?",
            "Yes, guests may have packages delivered to the hotel. Please ensure your name and reservation details are clearly marked on the package.",
        ),
    ],
);

pub(crate) const ACCESS_METHODS: Pool<&str> = Pool::new(
    "access methods",
    &[
        "Staffed front desk",
        "Smart lock",
        "Key card access",
        "Mobile app check-in",
        "Self check-in kiosk",
        "Keypad entry",
        "24/7 security personnel",
        "Concierge service",
        "Digital key via smartphone",
    ],
);

pub(crate) const SAFETY_FEATURES: Pool<&str> = Pool::new(
    "safety features",
    &[
        "Smoke detector",
        "Security cameras",
        "24/7 staffed security",
        "Carbon monoxide detector",
        "Fire extinguisher",
        "First aid kit",
        "Key card access to rooms and common areas",
        "Emergency exit routes clearly marked",
        "Sprinkler system",
        "Well-lit parking area",
        "Safe deposit box in rooms",
        "Window and door locks",
        "Emergency lighting",
        "Alarm system",
    ],
);

pub(crate) const MIN_CHECK_IN_AGES: Pool<u8> = Pool::new("minimum check-in ages", &[18, 21]);

pub(crate) const FINE_PRINT: &str = "Government-issued photo ID and credit card required at check-in. Tax ID - C0014930350. CleanStay protocols in place.";
