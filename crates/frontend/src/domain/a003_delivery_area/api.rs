//! Fetch wrappers for the shipment delivery-area resource. Full CRUD plus
//! the active toggle is wired into the settings page.

use contracts::domain::a003_delivery_area::aggregate::{
    DeliveryArea, DeliveryAreaDto, DeliveryAreaId,
};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, read_json, read_ok};

pub async fn fetch_delivery_areas() -> Result<Vec<DeliveryArea>, String> {
    let response = Request::get(&api_url("/api/delivery-areas"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response).await
}

pub async fn fetch_active_delivery_areas() -> Result<Vec<DeliveryArea>, String> {
    let response = Request::get(&api_url("/api/delivery-areas/active"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response).await
}

pub async fn fetch_delivery_area(id: DeliveryAreaId) -> Result<DeliveryArea, String> {
    let response = Request::get(&api_url(&format!("/api/delivery-areas/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response).await
}

pub async fn create_delivery_area(dto: &DeliveryAreaDto) -> Result<DeliveryArea, String> {
    let response = Request::post(&api_url("/api/delivery-areas"))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response).await
}

pub async fn update_delivery_area(
    id: DeliveryAreaId,
    dto: &DeliveryAreaDto,
) -> Result<DeliveryArea, String> {
    let response = Request::put(&api_url(&format!("/api/delivery-areas/{}", id)))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response).await
}

pub async fn delete_delivery_area(id: DeliveryAreaId) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/delivery-areas/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_ok(response).await
}

pub async fn toggle_delivery_area_status(id: DeliveryAreaId) -> Result<(), String> {
    let response = Request::patch(&api_url(&format!("/api/delivery-areas/{}/toggle", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_ok(response).await
}
