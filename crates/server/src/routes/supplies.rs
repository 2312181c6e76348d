use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{error, info};
use uuid::Uuid;

use service::errors::ServiceError;
use service::supply_service::{
    self, CreateSupplyInput, MostNeededSupply, SupplySummary, UpdateSupplyInput,
};

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[utoipa::path(
    get, path = "/supplies", tag = "supplies",
    responses(
        (status = 200, description = "List OK"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn index(
    State(state): State<ServerState>,
) -> Result<Json<Vec<SupplySummary>>, JsonApiError> {
    match supply_service::list_supplies(&state.db).await {
        Ok(list) => {
            info!(count = list.len(), "list supplies");
            Ok(Json(list))
        }
        Err(e) => {
            error!(err = %e, "list supplies failed");
            Err(JsonApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "List Failed",
                Some(e.to_string()),
            ))
        }
    }
}

#[utoipa::path(
    post, path = "/supplies", tag = "supplies",
    request_body = crate::openapi::CreateSupplyInputDoc,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn store(
    State(state): State<ServerState>,
    Json(input): Json<CreateSupplyInput>,
) -> Result<Json<models::supply::Model>, JsonApiError> {
    match supply_service::store_supply(&state.db, input).await {
        Ok(m) => {
            info!(id = %m.id, name = %m.name, "created supply");
            Ok(Json(m))
        }
        Err(e) => match e {
            ServiceError::Validation(_) | ServiceError::Model(_) => Err(JsonApiError::new(
                StatusCode::BAD_REQUEST,
                "Validation Error",
                Some(e.to_string()),
            )),
            _ => {
                error!(err = %e, "create supply failed");
                Err(JsonApiError::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Create Failed",
                    Some(e.to_string()),
                ))
            }
        },
    }
}

#[utoipa::path(
    put, path = "/supplies/{id}", tag = "supplies",
    params(("id" = Uuid, Path, description = "Supply ID")),
    request_body = crate::openapi::UpdateSupplyInputDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateSupplyInput>,
) -> Result<StatusCode, JsonApiError> {
    match supply_service::update_supply(&state.db, id, input).await {
        Ok(()) => {
            info!(id = %id, "updated supply");
            Ok(StatusCode::NO_CONTENT)
        }
        Err(e) => match e {
            ServiceError::Validation(_) | ServiceError::Model(_) => Err(JsonApiError::new(
                StatusCode::BAD_REQUEST,
                "Validation Error",
                Some(e.to_string()),
            )),
            ServiceError::NotFound(_) => Err(JsonApiError::new(
                StatusCode::NOT_FOUND,
                "Not Found",
                Some(e.to_string()),
            )),
            _ => {
                error!(err = %e, "update supply failed");
                Err(JsonApiError::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Update Failed",
                    Some(e.to_string()),
                ))
            }
        },
    }
}

#[utoipa::path(
    get, path = "/supplies/most-needed", tag = "supplies",
    responses(
        (status = 200, description = "Aggregation OK"),
        (status = 500, description = "Aggregation Failed")
    )
)]
pub async fn most_needed(
    State(state): State<ServerState>,
) -> Result<Json<Vec<MostNeededSupply>>, JsonApiError> {
    match supply_service::most_needed_supplies(&state.db).await {
        Ok(rows) => {
            info!(groups = rows.len(), "most needed supplies");
            Ok(Json(rows))
        }
        Err(e) => {
            error!(err = %e, "most needed aggregation failed");
            Err(JsonApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Aggregation Failed",
                Some(e.to_string()),
            ))
        }
    }
}
