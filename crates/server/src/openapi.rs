use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(utoipa::ToSchema)]
pub struct CreateSupplyInputDoc {
    pub name: String,
    pub supply_category_id: Uuid,
}

#[derive(utoipa::ToSchema)]
pub struct UpdateSupplyInputDoc {
    pub name: Option<String>,
    pub supply_category_id: Option<Uuid>,
}

#[derive(utoipa::ToSchema)]
pub struct CategorySummaryDoc {
    pub id: Uuid,
    pub name: String,
}

#[derive(utoipa::ToSchema)]
pub struct SupplySummaryDoc {
    pub id: Uuid,
    pub name: String,
    pub category: CategorySummaryDoc,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(utoipa::ToSchema)]
pub struct MostNeededSupplyDoc {
    pub name: String,
    /// 64-bit counts cross the JSON boundary as strings
    pub supply_count: String,
    pub priority: i32,
    pub updated_at: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::supplies::index,
        crate::routes::supplies::store,
        crate::routes::supplies::update,
        crate::routes::supplies::most_needed,
    ),
    components(
        schemas(
            HealthResponse,
            CreateSupplyInputDoc,
            UpdateSupplyInputDoc,
            CategorySummaryDoc,
            SupplySummaryDoc,
            MostNeededSupplyDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "supplies")
    )
)]
pub struct ApiDoc;
