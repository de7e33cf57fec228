//! Image uploads to the third-party CDN.
//!
//! Files go to the CDN first (multipart, unsigned preset); only the secure
//! URLs the CDN returns are then submitted to the backend image endpoint.

use futures::future::join_all;
use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::shared::api_utils::response_error;

const CDN_UPLOAD_URL: Option<&str> = option_env!("ADMIN_CDN_UPLOAD_URL");
const CDN_UPLOAD_PRESET: Option<&str> = option_env!("ADMIN_CDN_UPLOAD_PRESET");

fn upload_url() -> &'static str {
    CDN_UPLOAD_URL.unwrap_or("https://api.cloudinary.com/v1_1/catalog-admin/image/upload")
}

fn upload_preset() -> &'static str {
    CDN_UPLOAD_PRESET.unwrap_or("catalog_admin_unsigned")
}

#[derive(serde::Deserialize)]
struct UploadResponse {
    secure_url: String,
}

/// Upload a single file and return its CDN secure URL.
pub async fn upload_image(file: File) -> Result<String, String> {
    let form = FormData::new().map_err(|e| format!("{e:?}"))?;
    form.append_with_blob("file", &file)
        .map_err(|e| format!("{e:?}"))?;
    form.append_with_str("upload_preset", upload_preset())
        .map_err(|e| format!("{e:?}"))?;

    let response = Request::post(upload_url())
        .body(form)
        .map_err(|e| format!("Failed to build upload request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send upload: {}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    let parsed: UploadResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse upload response: {}", e))?;
    Ok(parsed.secure_url)
}

/// Upload several files concurrently (one request per file, awaited
/// together). Returns the secure URLs in file order, or the first error.
pub async fn upload_images(files: Vec<File>) -> Result<Vec<String>, String> {
    let results = join_all(files.into_iter().map(upload_image)).await;
    results.into_iter().collect()
}

/// URLs to persist for the current wizard session: everything uploaded now
/// that is not already part of the persisted set. Previously saved images
/// are never resubmitted.
pub fn newly_uploaded(persisted: &[String], uploaded: &[String]) -> Vec<String> {
    uploaded
        .iter()
        .filter(|url| !persisted.contains(url))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn two_fresh_uploads_are_both_included() {
        let persisted = urls(&["https://cdn.example.com/old.png"]);
        let uploaded = urls(&[
            "https://cdn.example.com/a.png",
            "https://cdn.example.com/b.png",
        ]);
        let fresh = newly_uploaded(&persisted, &uploaded);
        assert_eq!(fresh, uploaded);
    }

    #[test]
    fn persisted_urls_are_excluded_on_resubmission() {
        let persisted = urls(&["https://cdn.example.com/a.png"]);
        let uploaded = urls(&[
            "https://cdn.example.com/a.png",
            "https://cdn.example.com/b.png",
        ]);
        let fresh = newly_uploaded(&persisted, &uploaded);
        assert_eq!(fresh, urls(&["https://cdn.example.com/b.png"]));
    }

    #[test]
    fn no_uploads_yields_empty_payload() {
        let persisted = urls(&["https://cdn.example.com/a.png"]);
        assert!(newly_uploaded(&persisted, &[]).is_empty());
    }
}
