use serde::{Deserialize, Serialize};

/// OAuth connection state for the video-embedding integration.
///
/// Gates only the "connect" affordance in the video step; submission
/// eligibility never depends on it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeStatus {
    pub connected: bool,
    #[serde(default)]
    pub channel_title: Option<String>,
}

/// Request body for embedding videos on a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedVideosRequest {
    pub urls: Vec<String>,
}
