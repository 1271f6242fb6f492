use axum::{
    extract::{Path, State},
    Extension, Json,
};
use travelscope_scraper::{HealthResolution, ResolvedHealthReport};

use crate::middleware::RequestId;

use super::{map_resolver_error, ApiError, AppState};

pub(super) async fn get_health_advisory(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(slug): Path<String>,
) -> Result<Json<ResolvedHealthReport>, ApiError> {
    match state.health.resolve(&slug).await {
        Ok(HealthResolution::Found(found)) => Ok(Json(found)),
        Ok(HealthResolution::NotFound { slug }) => Err(ApiError::not_found(
            "No health information found for this location",
            slug,
        )),
        Err(e) => Err(map_resolver_error(
            &req_id.0,
            "Failed to resolve health advisory",
            &e,
        )),
    }
}
