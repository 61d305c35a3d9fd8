//! Handler for the informational root endpoint.

use axum::Json;
use serde_json::{Value, json};

/// Returns a service description with endpoint usage examples.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "URL Shortener Microservice",
        "endpoints": {
            "POST /api/shorturl": "Create short URL",
            "GET /api/shorturl/:short_url": "Redirect to original URL"
        },
        "example": {
            "POST /api/shorturl": {
                "body": { "url": "https://www.freecodecamp.org" },
                "response": {
                    "original_url": "https://www.freecodecamp.org",
                    "short_url": 1
                }
            },
            "GET /api/shorturl/1": "Redirects to https://www.freecodecamp.org"
        }
    }))
}
