//! Template catalogue endpoint.

use axum::Json;
use planck_templates::{TEMPLATES, Template};

/// GET /api/templates - List the demonstration templates.
pub async fn list_templates() -> Json<&'static [Template]> {
    Json(TEMPLATES.as_slice())
}
