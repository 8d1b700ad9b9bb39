//! Hotel catalog endpoints

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use http::HeaderMap;
use hotel_gen::{
    CosmeticRolls, DEFAULT_HOTEL_COUNT, DEFAULT_LOCATION_COUNT, GenResult, StayWindow,
    build_hotel_type, generate_hotels, generate_location_specific_hotels_for_stay,
    map_hotel_data_to_hotel_type,
};
use serde::Deserialize;
use shared::models::{HotelData, HotelType};
use shared::{ApiResponse, AppError, AppResult, ErrorCode};
use tracing::instrument;

use crate::state::AppState;

const CLIENT_ID_HEADER: &str = "x-client-id";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/hotels", get(search_hotels))
        .route("/hotels/raw", get(raw_hotels))
        .route("/hotels/map", post(map_hotel))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub count: Option<usize>,
    pub city: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawQuery {
    pub count: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapRequest {
    pub hotel: HotelData,
    pub check_in: String,
    pub check_out: String,
}

/// GET /hotels
///
/// With `city`: a location-flavored batch. Without: a generic batch mapped
/// over the same window.
#[instrument(skip_all, fields(client_id = client_id(&headers)))]
pub async fn search_hotels(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> AppResult<ApiResponse<Vec<HotelType>>> {
    let Query(query) = query.map_err(bad_request)?;
    let stay = resolve_stay(query.check_in.as_deref(), query.check_out.as_deref())?;
    let city = non_blank(query.city.as_deref());

    let views = match city {
        Some(city) => {
            let count = state.batch_size(query.count, DEFAULT_LOCATION_COUNT)?;
            state.with_rng(|rng| generate_location_specific_hotels_for_stay(city, count, &stay, rng))?
        }
        None => {
            let count = state.batch_size(query.count, DEFAULT_HOTEL_COUNT)?;
            state.with_rng(|rng| -> GenResult<Vec<HotelType>> {
                let hotels = generate_hotels(count, &mut *rng)?;
                Ok(hotels
                    .iter()
                    .map(|hotel| build_hotel_type(hotel, &stay, &CosmeticRolls::roll(&mut *rng)))
                    .collect())
            })?
        }
    };

    tracing::info!(city = ?city, count = views.len(), "Served hotel search");
    Ok(ApiResponse::success(views))
}

/// GET /hotels/raw
#[instrument(skip_all, fields(client_id = client_id(&headers)))]
pub async fn raw_hotels(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<RawQuery>, QueryRejection>,
) -> AppResult<ApiResponse<Vec<HotelData>>> {
    let Query(query) = query.map_err(bad_request)?;
    let count = state.batch_size(query.count, DEFAULT_HOTEL_COUNT)?;
    let hotels = state.with_rng(|rng| generate_hotels(count, rng))?;

    tracing::info!(count = hotels.len(), "Served raw hotels");
    Ok(ApiResponse::success(hotels))
}

/// POST /hotels/map
#[instrument(skip_all, fields(client_id = client_id(&headers)))]
pub async fn map_hotel(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<MapRequest>, JsonRejection>,
) -> AppResult<ApiResponse<HotelType>> {
    let Json(req) = body.map_err(bad_request)?;
    let view = state.with_rng(|rng| {
        map_hotel_data_to_hotel_type(&req.hotel, &req.check_in, &req.check_out, rng)
    })?;

    tracing::info!(hotel_id = view.hotel_id, "Mapped hotel");
    Ok(ApiResponse::success(view))
}

/// Both dates, or neither (default window); one alone is rejected
fn resolve_stay(check_in: Option<&str>, check_out: Option<&str>) -> AppResult<StayWindow> {
    match (non_blank(check_in), non_blank(check_out)) {
        (Some(check_in), Some(check_out)) => Ok(StayWindow::parse(check_in, check_out)?),
        (None, None) => Ok(StayWindow::default_from(Utc::now().date_naive())),
        (Some(_), None) => Err(AppError::required("checkOut")),
        (None, Some(_)) => Err(AppError::required("checkIn")),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn client_id(headers: &HeaderMap) -> &str {
    headers
        .get(CLIENT_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
}

fn bad_request(rejection: impl std::fmt::Display) -> AppError {
    AppError::with_message(ErrorCode::InvalidRequest, rejection.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_stay_requires_both_dates() {
        let err = resolve_stay(Some("2025-01-10"), None).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        let err = resolve_stay(None, Some("2025-01-10")).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
    }

    #[test]
    fn test_resolve_stay_blank_means_absent() {
        let stay = resolve_stay(Some("  "), Some("")).unwrap();
        assert_eq!(stay.nights(), 7);
    }

    #[test]
    fn test_resolve_stay_rejects_bad_dates() {
        let err = resolve_stay(Some("2025-13-01"), Some("2025-01-10")).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStayDate);
    }

    #[test]
    fn test_client_id_defaults_to_dash() {
        let mut headers = HeaderMap::new();
        assert_eq!(client_id(&headers), "-");
        headers.insert(CLIENT_ID_HEADER, "web-42".parse().unwrap());
        assert_eq!(client_id(&headers), "web-42");
    }
}
