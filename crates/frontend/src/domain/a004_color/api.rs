//! Fetch wrappers for the color resource.

use contracts::domain::a001_product::aggregate::ProductId;
use contracts::domain::a004_color::aggregate::{Color, ColorDto};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, read_json};

pub async fn fetch_colors() -> Result<Vec<Color>, String> {
    let response = Request::get(&api_url("/api/colors"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response).await
}

pub async fn create_color(dto: &ColorDto) -> Result<Color, String> {
    let response = Request::post(&api_url("/api/colors"))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response).await
}

pub async fn fetch_colors_by_product(product_id: ProductId) -> Result<Vec<Color>, String> {
    let response = Request::get(&api_url(&format!("/api/products/{}/colors", product_id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response).await
}
