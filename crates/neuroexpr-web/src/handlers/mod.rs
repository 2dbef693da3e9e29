//! Request handlers for the two pages, plus shared error plumbing.

pub mod form;
pub mod result;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use neuroexpr_common::NeuroexprError;
use tracing::error;

/// Wraps domain errors so handlers can use `?`. Renders a styled error
/// page with the domain message instead of an opaque server error.
pub struct AppError(pub NeuroexprError);

impl From<NeuroexprError> for AppError {
    fn from(err: NeuroexprError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            NeuroexprError::EmptyPartition(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error!("request failed: {}", self.0);
        (status, Html(render_error_page(&self.0.to_string()))).into_response()
    }
}

/// Inline styles shared by all pages.
pub(crate) const PAGE_CSS: &str = r#"
    body { font-family: -apple-system, 'Segoe UI', sans-serif; margin: 0;
           background: #f5f6f8; color: #1f2430; }
    .container { max-width: 1080px; margin: 0 auto; padding: 2rem; }
    h1 { font-size: 1.5rem; margin-bottom: 0.25rem; }
    .muted { color: #6b7280; }
    .card { background: #fff; border: 1px solid #e2e5ea; border-radius: 8px;
            padding: 1.5rem; margin-top: 1.5rem; }
    .stats { display: flex; gap: 1.5rem; }
    .stats .stat { flex: 1; text-align: center; }
    .stats .value { font-size: 1.8rem; font-weight: 700; }
    .stats .label { font-size: 0.85rem; color: #6b7280; text-transform: uppercase; }
    table { border-collapse: collapse; width: 100%; }
    th, td { text-align: left; padding: 0.4rem 0.75rem;
             border-bottom: 1px solid #eceef2; }
    th { font-size: 0.8rem; text-transform: uppercase; color: #6b7280; }
    .btn { display: inline-block; background: #2563eb; color: #fff;
           border: none; border-radius: 6px; padding: 0.5rem 1.25rem;
           font-size: 1rem; cursor: pointer; text-decoration: none; }
    label { display: block; margin: 0.5rem 0; }
    .error { border-left: 4px solid #dc2626; }
"#;

fn render_error_page(message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Error — Neuroexpr</title>
    <style>{css}</style>
</head>
<body>
<div class="container">
    <h1>Analysis failed</h1>
    <div class="card error">
        <p>{message}</p>
        <a href="/" class="btn">Back to form</a>
    </div>
</div>
</body>
</html>"#,
        css = PAGE_CSS,
        message = message,
    )
}
