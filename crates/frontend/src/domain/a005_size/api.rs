//! Fetch wrappers for the size resource.

use contracts::domain::a001_product::aggregate::ProductId;
use contracts::domain::a005_size::aggregate::{Size, SizeDto};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, read_json};

pub async fn fetch_sizes() -> Result<Vec<Size>, String> {
    let response = Request::get(&api_url("/api/sizes"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response).await
}

/// Registers a size label in the catalog so later products can reuse it.
pub async fn create_size(dto: &SizeDto) -> Result<Size, String> {
    let response = Request::post(&api_url("/api/sizes"))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response).await
}

pub async fn fetch_sizes_by_product(product_id: ProductId) -> Result<Vec<Size>, String> {
    let response = Request::get(&api_url(&format!("/api/products/{}/sizes", product_id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response).await
}
