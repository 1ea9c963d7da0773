use anyhow::Context;
use bytes::Bytes;
use uuid::Uuid;

use crate::state::AppState;

/// Push an avatar image to the media host and return its durable URL.
/// Called only when registration carries a payload; any failure aborts the
/// enclosing registration.
pub async fn upload(st: &AppState, body: Bytes, content_type: &str) -> anyhow::Result<String> {
    anyhow::ensure!(!body.is_empty(), "empty avatar payload");

    let ext = ext_from_mime(content_type).unwrap_or("bin");
    let key = format!("avatars/{}.{}", Uuid::new_v4(), ext);
    st.storage
        .upload(&key, body, content_type)
        .await
        .with_context(|| format!("upload avatar {}", key))
}

fn ext_from_mime(ct: &str) -> Option<&'static str> {
    match ct {
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/webp" => Some("webp"),
        "image/heic" => Some("heic"),
        _ => None,
    }
}
