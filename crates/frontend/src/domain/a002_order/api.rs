//! Fetch wrappers for the order resource.
//!
//! Only the status update is wired into a save path in the detail view;
//! the shipping/items wrappers exist for the documented backend surface
//! but currently have no caller (see DESIGN.md open questions).

use contracts::domain::a002_order::aggregate::{
    Order, OrderId, OrderStatus, UpdateItemQuantityDto, UpdateItemsDto, UpdateShippingDto,
    UpdateStatusDto,
};
use gloo_net::http::Request;
use uuid::Uuid;

use crate::shared::api_utils::{api_url, read_json, read_ok};

pub async fn fetch_orders() -> Result<Vec<Order>, String> {
    let response = Request::get(&api_url("/api/orders"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response).await
}

pub async fn fetch_order(id: OrderId) -> Result<Order, String> {
    let response = Request::get(&api_url(&format!("/api/orders/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response).await
}

pub async fn update_order_status(id: OrderId, status: OrderStatus) -> Result<(), String> {
    let response = Request::put(&api_url(&format!("/api/orders/{}/status", id)))
        .json(&UpdateStatusDto { status })
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_ok(response).await
}

#[allow(dead_code)]
pub async fn update_order_shipping(id: OrderId, dto: &UpdateShippingDto) -> Result<(), String> {
    let response = Request::put(&api_url(&format!("/api/orders/{}/shipping", id)))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_ok(response).await
}

#[allow(dead_code)]
pub async fn update_order_items(id: OrderId, dto: &UpdateItemsDto) -> Result<(), String> {
    let response = Request::put(&api_url(&format!("/api/orders/{}/items", id)))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_ok(response).await
}

#[allow(dead_code)]
pub async fn update_order_item_quantity(
    id: OrderId,
    item_id: Uuid,
    quantity: u32,
) -> Result<(), String> {
    let response = Request::put(&api_url(&format!(
        "/api/orders/{}/items/{}/quantity",
        id, item_id
    )))
    .json(&UpdateItemQuantityDto { quantity })
    .map_err(|e| format!("Failed to serialize request: {}", e))?
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;
    read_ok(response).await
}

pub async fn delete_order(id: OrderId) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/orders/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_ok(response).await
}
