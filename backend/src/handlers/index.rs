//! Landing page listing the available routes

use axum::response::Html;

const INDEX_HTML: &str = r#"<h1>Hawaii Climate API</h1>
<h3>Routes to Use</h3>
<ul>
    <li>/api/v1.0/precipitation</li>
    <li>/api/v1.0/stations</li>
    <li>/api/v1.0/tobs</li>
    <li>/api/v1.0/temp/{start}</li>
    <li>/api/v1.0/temp/{start}/{end}</li>
</ul>"#;

/// GET / - static route index
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
