//! Insight card handler.

use axum::response::Response;

use crate::handlers::common::json_response;

/// GET /api/insights - Narrative cards for the dashboard sidebar.
pub async fn insights_handler() -> Response {
    json_response(&heat_core::insights())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_insights_ok() {
        let response = insights_handler().await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
