//! Welcome page

use axum::response::Html;

use crate::views::WELCOME_PAGE;

/// Welcome banner
///
/// GET /
pub async fn welcome() -> Html<&'static str> {
    Html(WELCOME_PAGE)
}
