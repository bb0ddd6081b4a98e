use axum::extract::{Query, State};
use axum::Json;

use bakery_core::bucketing::OrderGroup;
use bakery_core::config::Config;
use bakery_core::filter::FilterChanged;
use bakery_core::presenter::Storefront;
use bakery_core::query::OrderQueryService;
use bakery_core::store::FileOrderStore;

use crate::error::AppError;
use crate::state::AppState;

#[derive(serde::Deserialize)]
pub struct StorefrontParams {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub show_previous: bool,
}

/// GET /api/storefront — matching orders bucketed into the
/// previous/today/this-week/upcoming sections.
pub async fn storefront_groups(
    State(app): State<AppState>,
    Query(params): Query<StorefrontParams>,
) -> Result<Json<Vec<OrderGroup>>, AppError> {
    let root = app.root.clone();
    let groups = tokio::task::spawn_blocking(move || {
        Config::load(&root)?;
        let storefront = Storefront::new(OrderQueryService::new(FileOrderStore::new(&root)));
        let event = FilterChanged::new(params.q, params.show_previous);
        let today = chrono::Local::now().date_naive();
        let (_, groups) = storefront.on_filter_changed(&event, today)?;
        Ok::<_, bakery_core::BakeryError>(groups)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(groups))
}
