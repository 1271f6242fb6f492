use axum::{
    extract::{Path, State},
    Extension, Json,
};
use travelscope_scraper::{Resolution, ResolvedAdvisory};

use crate::middleware::RequestId;

use super::{map_resolver_error, ApiError, AppState};

pub(super) async fn get_advisory(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(slug): Path<String>,
) -> Result<Json<ResolvedAdvisory>, ApiError> {
    match state.advisory.resolve(&slug).await {
        Ok(Resolution::Found(found)) => Ok(Json(found)),
        Ok(Resolution::NotFound { slug }) => Err(ApiError::not_found(
            "No travel advisory found for this location",
            slug,
        )),
        Err(e) => Err(map_resolver_error(
            &req_id.0,
            "Failed to resolve travel advisory",
            &e,
        )),
    }
}
