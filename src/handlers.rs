use crate::airports;
use crate::chart::render_chart_svg;
use crate::errors::AppError;
use crate::fares::query_fares;
use crate::models::{
    parse_search_date, Airport, AirportQuery, ChartView, FareObservation, FareQuery, SearchParams,
    SearchQuery, TripType,
};
use crate::series::cheapest_median_price;
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse, Redirect},
    Json,
};
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let view = state.snapshot().await;
    Html(render_index(&view))
}

pub async fn get_chart(State(state): State<AppState>) -> Json<ChartView> {
    Json(state.snapshot().await)
}

pub async fn get_chart_svg(State(state): State<AppState>) -> impl IntoResponse {
    let view = state.snapshot().await;
    ([(header::CONTENT_TYPE, "image/svg+xml")], render_chart_svg(&view))
}

pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ChartView>, AppError> {
    let view = run_search(&state, query).await?;
    Ok(Json(view))
}

pub async fn search_form(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Redirect, AppError> {
    run_search(&state, query).await?;
    Ok(Redirect::to("/"))
}

pub async fn get_fares(
    State(state): State<AppState>,
    Query(query): Query<FareQuery>,
) -> Json<Vec<FareObservation>> {
    Json(query_fares(&state.fares, &query))
}

pub async fn get_airports(Query(query): Query<AirportQuery>) -> Json<Vec<Airport>> {
    Json(airports::search(&query.q))
}

/// Builds a fresh view and swaps it in. On failure the current view is left as is.
async fn run_search(state: &AppState, query: SearchQuery) -> Result<ChartView, AppError> {
    let params = to_params(query)?;
    info!(
        ond = %params.ond(),
        trip_type = params.trip_type.code(),
        date_min = %params.date_min,
        date_max = %params.date_max,
        "searching fares"
    );

    let series = state.builder.build_series(&params).await?;
    let view = ChartView {
        cheapest_median_price: cheapest_median_price(&series),
        params: Some(params),
        series,
    };

    state.replace_chart(view.clone()).await;
    Ok(view)
}

fn to_params(query: SearchQuery) -> Result<SearchParams, AppError> {
    let origin = query.origin.trim().to_string();
    let destination = query.destination.trim().to_string();
    if origin.is_empty() || destination.is_empty() {
        return Err(AppError::bad_request("origin and destination are required"));
    }

    let trip_type = TripType::from_code(&query.trip_type)
        .ok_or_else(|| AppError::bad_request("trip_type must be 'RT' or 'OW'"))?;
    let date_min = parse_search_date(&query.date_min)
        .ok_or_else(|| AppError::bad_request("date_min must be formatted yyyy/MM/dd"))?;
    let date_max = parse_search_date(&query.date_max)
        .ok_or_else(|| AppError::bad_request("date_max must be formatted yyyy/MM/dd"))?;

    Ok(SearchParams {
        origin,
        destination,
        trip_type,
        date_min,
        date_max,
    })
}
