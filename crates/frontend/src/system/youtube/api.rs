//! YouTube OAuth status and video embedding.
//!
//! The connection status gates only the "connect" affordance in the video
//! step; embedding submits regardless of connection state.

use contracts::domain::a001_product::aggregate::ProductId;
use contracts::system::youtube::{EmbedVideosRequest, YoutubeStatus};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, read_json, read_ok};

pub async fn fetch_status() -> Result<YoutubeStatus, String> {
    let response = Request::get(&api_url("/api/youtube/status"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response).await
}

/// Open the OAuth consent flow in a new browser window. The backend
/// handles the redirect dance; the status endpoint reflects the result.
pub fn open_connect_window() -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    window
        .open_with_url_and_target(&api_url("/api/youtube/connect"), "_blank")
        .map_err(|e| format!("{e:?}"))?;
    Ok(())
}

pub async fn disconnect() -> Result<(), String> {
    let response = Request::post(&api_url("/api/youtube/disconnect"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_ok(response).await
}

pub async fn embed_product_videos(product_id: ProductId, urls: Vec<String>) -> Result<(), String> {
    let response = Request::post(&api_url(&format!("/api/products/{}/videos", product_id)))
        .json(&EmbedVideosRequest { urls })
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_ok(response).await
}
