//! API routes for hotel-service

pub mod health;
pub mod hotels;

use std::time::Duration;

use axum::error_handling::HandleErrorLayer;
use axum::routing::get;
use axum::{BoxError, Router};
use shared::{AppError, ErrorCode};
use tower::ServiceBuilder;
use tower::timeout::TimeoutLayer;
use tower::timeout::error::Elapsed;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the fully layered application router
pub fn router(state: AppState) -> Router {
    let timeout = state.config.request_timeout;
    let routes = Router::new()
        .route("/", get(health::health_check))
        .route("/health", get(health::health_check))
        .merge(hotels::router());

    with_middleware(routes, timeout).with_state(state)
}

fn with_middleware(routes: Router<AppState>, timeout: Duration) -> Router<AppState> {
    routes
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .layer(TimeoutLayer::new(timeout)),
        )
}

/// Middleware failures still answer with the standard envelope
async fn handle_middleware_error(err: BoxError) -> AppError {
    if err.is::<Elapsed>() {
        tracing::warn!("Request timed out");
        AppError::new(ErrorCode::TimeoutError)
    } else {
        tracing::error!(error = %err, "Unhandled middleware error");
        AppError::internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::Body;
    use chrono::{Duration, Utc};
    use hotel_gen::{SeededRandom, generate_hotel};
    use http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn test_config(seed: Option<u64>) -> Config {
        Config {
            http_port: 0,
            max_batch_size: 10,
            rng_seed: seed,
            environment: "test".to_string(),
            request_timeout: std::time::Duration::from_secs(5),
        }
    }

    fn app(seed: Option<u64>) -> Router {
        router(AppState::new(test_config(seed)))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        send(app, Request::get(uri).body(Body::empty()).unwrap()).await
    }

    fn post_json(uri: &str, body: String) -> Request<Body> {
        Request::post(uri)
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_timeout_answers_with_envelope() {
        let slow = Router::new().route(
            "/slow",
            get(|| async {
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                "late"
            }),
        );
        let app = with_middleware(slow, std::time::Duration::from_millis(10))
            .with_state(AppState::new(test_config(None)));

        let (status, body) = get_json(app, "/slow").await;
        assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
        assert_eq!(body["code"], 9003);
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn test_other_middleware_errors_are_internal() {
        let err: BoxError = "upstream exploded".into();
        let app_err = handle_middleware_error(err).await;
        assert_eq!(app_err.code, ErrorCode::InternalError);
        assert_eq!(app_err.http_status(), StatusCode::INTERNAL_SERVER_ERROR);

        let app_err = handle_middleware_error(Box::new(Elapsed::new())).await;
        assert_eq!(app_err.code, ErrorCode::TimeoutError);
    }

    #[tokio::test]
    async fn test_health() {
        for uri in ["/", "/health"] {
            let (status, body) = get_json(app(None), uri).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["code"], 0);
            assert_eq!(body["data"]["status"], "ok");
            assert_eq!(body["data"]["service"], "hotel-service");
            assert_eq!(body["data"]["seeded"], false);
        }
    }

    #[tokio::test]
    async fn test_search_defaults_to_week_from_tomorrow() {
        let (status, body) = get_json(app(Some(1)), "/hotels").await;
        assert_eq!(status, StatusCode::OK);

        let hotels = body["data"].as_array().unwrap();
        assert_eq!(hotels.len(), 5);

        let tomorrow = (Utc::now().date_naive() + Duration::days(1))
            .format("%Y-%m-%d")
            .to_string();
        assert_eq!(hotels[0]["property"]["checkinDate"], tomorrow.as_str());
        assert_eq!(
            hotels[0]["property"]["priceBreakdown"]["benefitBadges"][0]["identifier"],
            "free_wifi"
        );
    }

    #[tokio::test]
    async fn test_search_with_city_and_dates() {
        let (status, body) = get_json(
            app(Some(2)),
            "/hotels?city=Seattle&count=4&checkIn=2025-01-10&checkOut=2025-01-13",
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let hotels = body["data"].as_array().unwrap();
        assert_eq!(hotels.len(), 4);
        for hotel in hotels {
            assert_eq!(hotel["property"]["checkinDate"], "2025-01-10");
            assert_eq!(hotel["property"]["checkoutDate"], "2025-01-13");
            assert!(hotel.get("hotel_id").is_some());
        }
    }

    #[tokio::test]
    async fn test_city_default_count_capped_by_max() {
        // DEFAULT_LOCATION_COUNT is above the test max of 10
        let (status, body) = get_json(app(Some(3)), "/hotels?city=Miami").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_count_above_max_rejected() {
        let (status, body) = get_json(app(None), "/hotels?count=11").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 4003);
        assert_eq!(body["details"]["requested"], 11);
        assert_eq!(body["details"]["max"], 10);
    }

    #[tokio::test]
    async fn test_single_date_rejected() {
        let (status, body) = get_json(app(None), "/hotels?checkIn=2025-01-10").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 7);
        assert_eq!(body["details"]["field"], "checkOut");
    }

    #[tokio::test]
    async fn test_bad_date_rejected() {
        let (status, body) = get_json(app(None), "/hotels?checkIn=someday&checkOut=2025-01-10").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 4002);
        assert_eq!(body["details"]["field"], "checkIn");
        assert_eq!(body["details"]["value"], "someday");
    }

    #[tokio::test]
    async fn test_malformed_count_rejected() {
        let (status, body) = get_json(app(None), "/hotels/raw?count=many").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 5);
    }

    #[tokio::test]
    async fn test_raw_hotels() {
        let (status, body) = get_json(app(Some(4)), "/hotels/raw?count=2").await;
        assert_eq!(status, StatusCode::OK);

        let hotels = body["data"].as_array().unwrap();
        assert_eq!(hotels.len(), 2);
        for hotel in hotels {
            assert_eq!(hotel["rooms"].as_array().unwrap().len(), 3);
            assert_eq!(hotel["rooms"][1]["mostPopular"], true);
        }
    }

    #[tokio::test]
    async fn test_seeded_service_is_reproducible() {
        let (_, first) = get_json(app(Some(99)), "/hotels/raw?count=3").await;
        let (_, second) = get_json(app(Some(99)), "/hotels/raw?count=3").await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_map_hotel() {
        let mut rng = SeededRandom::from_seed_u64(5);
        let hotel = generate_hotel(&mut rng).unwrap();
        let nightly = u64::from(hotel.rooms[0].price_per_night);
        let body = json!({
            "hotel": hotel,
            "checkIn": "2025-03-01",
            "checkOut": "2025-03-04",
        });

        let (status, body) = send(app(None), post_json("/hotels/map", body.to_string())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["hotel_id"], hotel.id);
        assert_eq!(
            body["data"]["property"]["priceBreakdown"]["grossPrice"]["value"],
            nightly * 3
        );
        assert_eq!(
            body["data"]["property"]["priceBreakdown"]["grossPrice"]["currency"],
            "USD"
        );
    }

    #[tokio::test]
    async fn test_map_hotel_bad_date() {
        let mut rng = SeededRandom::from_seed_u64(6);
        let hotel = generate_hotel(&mut rng).unwrap();
        let body = json!({
            "hotel": hotel,
            "checkIn": "2025-03-01",
            "checkOut": "03/04/2025",
        });

        let (status, body) = send(app(None), post_json("/hotels/map", body.to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 4002);
        assert_eq!(body["details"]["field"], "checkOut");
    }

    #[tokio::test]
    async fn test_map_hotel_malformed_body() {
        let (status, body) = send(app(None), post_json("/hotels/map", "{\"hotel\":".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 5);
    }
}
