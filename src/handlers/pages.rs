//! Static page handlers

use axum::response::Html;

use crate::templates;

/// Home page with the prediction form
pub async fn home() -> Html<String> {
    templates::index(None)
}

pub async fn developers() -> Html<&'static str> {
    templates::developers()
}
