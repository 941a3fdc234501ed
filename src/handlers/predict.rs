//! Prediction handler

use axum::{extract::State, response::Html, Form};

use crate::{AppState, AppResult, templates};
use crate::models::{Prediction, TransactionRecord};

/// Score one submitted transaction and render the label.
///
/// `Form` rejects missing or non-coercible fields before this body runs,
/// so the classifier only ever sees complete records.
pub async fn predict(
    State(state): State<AppState>,
    Form(record): Form<TransactionRecord>,
) -> AppResult<Html<String>> {
    let class = state.classifier.predict(&record)?;
    let prediction = Prediction::from_class(class);

    Ok(templates::index(Some(prediction)))
}
