use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::NaiveDate;

use bakery_core::config::Config;
use bakery_core::filter::OrderFilter;
use bakery_core::order::{Customer, Order, OrderItem};
use bakery_core::page::{Page, PageRequest, SortOrder};
use bakery_core::paths;
use bakery_core::query::OrderQueryService;
use bakery_core::store::{FileOrderStore, OrderStore};
use bakery_core::types::OrderState;

use crate::error::AppError;
use crate::state::AppState;

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

// ---------------------------------------------------------------------------
// Listing and counting
// ---------------------------------------------------------------------------

#[derive(serde::Deserialize)]
pub struct OrderListParams {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub show_previous: bool,
    #[serde(default)]
    pub page: usize,
    pub size: Option<usize>,
    pub sort: Option<String>,
}

/// GET /api/orders — one page of matching orders plus the total count.
pub async fn list_orders(
    State(app): State<AppState>,
    Query(params): Query<OrderListParams>,
) -> Result<Json<Page<Order>>, AppError> {
    let root = app.root.clone();
    let page = tokio::task::spawn_blocking(move || {
        let config = Config::load(&root)?;
        let sort = match &params.sort {
            Some(expr) => SortOrder::parse_list(expr)?,
            None => Vec::new(),
        };
        let req = PageRequest::new(params.page, config.page_size(params.size));
        let filter = OrderFilter::new(params.q, params.show_previous);
        let query = OrderQueryService::new(FileOrderStore::new(&root));
        query.fetch_page(&filter, today(), &req, &sort)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(page))
}

#[derive(serde::Deserialize)]
pub struct OrderCountParams {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub show_previous: bool,
}

/// GET /api/orders/count — number of matching orders.
pub async fn count_orders(
    State(app): State<AppState>,
    Query(params): Query<OrderCountParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let count = tokio::task::spawn_blocking(move || {
        Config::load(&root)?;
        let filter = OrderFilter::new(params.q, params.show_previous);
        let query = OrderQueryService::new(FileOrderStore::new(&root));
        query.count(&filter, today())
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(serde_json::json!({ "count": count })))
}

// ---------------------------------------------------------------------------
// Detail
// ---------------------------------------------------------------------------

/// GET /api/orders/:id — full order detail.
pub async fn get_order(
    State(app): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Order>, AppError> {
    let root = app.root.clone();
    let order = tokio::task::spawn_blocking(move || {
        let id = paths::parse_order_id(&raw_id)?;
        FileOrderStore::new(&root).load(id)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(order))
}

// ---------------------------------------------------------------------------
// Create and update
// ---------------------------------------------------------------------------

#[derive(serde::Deserialize)]
pub struct OrderBody {
    pub due_date: NaiveDate,
    pub customer: Customer,
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub state: Option<OrderState>,
}

/// POST /api/orders — create a new order. Validation failures come back as
/// 422 with the offending fields.
pub async fn create_order(
    State(app): State<AppState>,
    Json(body): Json<OrderBody>,
) -> Result<Json<Order>, AppError> {
    let root = app.root.clone();
    let order = tokio::task::spawn_blocking(move || {
        Config::load(&root)?;
        let store = FileOrderStore::new(&root);
        let mut order = store.create(body.due_date, body.customer, body.items)?;
        if let Some(state) = body.state {
            order.set_state(state);
            order = store.update(order)?;
        }
        Ok::<_, bakery_core::BakeryError>(order)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(order))
}

/// PUT /api/orders/:id — replace an order's editable content.
pub async fn update_order(
    State(app): State<AppState>,
    Path(raw_id): Path<String>,
    Json(body): Json<OrderBody>,
) -> Result<Json<Order>, AppError> {
    let root = app.root.clone();
    let order = tokio::task::spawn_blocking(move || {
        let id = paths::parse_order_id(&raw_id)?;
        let store = FileOrderStore::new(&root);
        let mut order = store.load(id)?;
        order.due_date = body.due_date;
        order.customer = body.customer;
        order.items = body.items;
        if let Some(state) = body.state {
            order.state = state;
        }
        store.update(order)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(order))
}
