use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shipway_auth_types::identity::IdentityHeaders;

use crate::domain::types::Order;
use crate::error::ApiServiceError;
use crate::state::AppState;
use crate::usecase::order::{
    CreateOrderInput, CreateOrderUseCase, DeleteOrderUseCase, GetOrderUseCase,
    ListOrdersForOfferUseCase, ListOrdersUseCase, ListRecentOrdersUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct OrderResponse {
    pub id: String,
    pub tracking_code: String,
    pub package_id: String,
    pub price_package_id: String,
    pub driver_id: Option<String>,
    pub price: Decimal,
    #[serde(serialize_with = "shipway_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        OrderResponse {
            id: order.id.to_string(),
            tracking_code: order.tracking_code,
            package_id: order.package_id.to_string(),
            price_package_id: order.price_package_id.to_string(),
            driver_id: order.driver_id.map(|id| id.to_string()),
            price: order.price,
            created_at: order.created_at,
        }
    }
}

// ── Query params ─────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct OrderListQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

fn page_from(query: &OrderListQuery) -> shipway_domain::pagination::PageRequest {
    shipway_domain::pagination::PageRequest {
        per_page: query.per_page.unwrap_or(20),
        page: query.page.unwrap_or(1),
    }
}

// ── POST /packages/create-order ──────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateOrderRequest {
    pub package_code: String,
    pub price_code: String,
}

pub async fn create_order(
    _identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<CreateOrderRequest>,
) -> Result<Json<OrderResponse>, ApiServiceError> {
    let uc = CreateOrderUseCase {
        packages: state.package_repo(),
        orders: state.order_repo(),
    };
    let order = uc
        .execute(CreateOrderInput {
            package_code: body.package_code,
            price_code: body.price_code,
        })
        .await?;
    Ok(Json(order.into()))
}

// ── GET /orders ──────────────────────────────────────────────────────────────

pub async fn list_orders(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    axum::extract::Query(query): axum::extract::Query<OrderListQuery>,
) -> Result<Json<Vec<OrderResponse>>, ApiServiceError> {
    let uc = ListOrdersUseCase {
        repo: state.order_repo(),
    };
    let orders = uc.execute(identity.user_id, page_from(&query)).await?;
    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}

// ── GET /orders/detail/{tracking_code} ───────────────────────────────────────

pub async fn get_order(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(tracking_code): Path<String>,
) -> Result<Json<OrderResponse>, ApiServiceError> {
    let uc = GetOrderUseCase {
        repo: state.order_repo(),
    };
    let order = uc.execute(identity.user_id, &tracking_code).await?;
    Ok(Json(order.into()))
}

// ── DELETE /orders/detail/{tracking_code} ────────────────────────────────────

pub async fn delete_order(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(tracking_code): Path<String>,
) -> Result<StatusCode, ApiServiceError> {
    let uc = DeleteOrderUseCase {
        repo: state.order_repo(),
    };
    uc.execute(identity.user_id, &tracking_code).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /orders/logistics/recent ─────────────────────────────────────────────

pub async fn list_recent_orders(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    axum::extract::Query(query): axum::extract::Query<OrderListQuery>,
) -> Result<Json<Vec<OrderResponse>>, ApiServiceError> {
    let uc = ListRecentOrdersUseCase {
        logistics: state.logistic_repo(),
        orders: state.order_repo(),
    };
    let orders = uc.execute(identity.user_id, page_from(&query)).await?;
    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}

// ── GET /price-packages/{tracking_code}/orders ───────────────────────────────

pub async fn list_orders_for_offer(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(tracking_code): Path<String>,
    axum::extract::Query(query): axum::extract::Query<OrderListQuery>,
) -> Result<Json<Vec<OrderResponse>>, ApiServiceError> {
    let uc = ListOrdersForOfferUseCase {
        logistics: state.logistic_repo(),
        offers: state.price_package_repo(),
        orders: state.order_repo(),
    };
    let orders = uc
        .execute(identity.user_id, &tracking_code, page_from(&query))
        .await?;
    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}
