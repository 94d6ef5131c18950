//! Catalogue fixtures served by the mock HTTP server.

use serde_json::{Value, json};
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// JSON page holding beers `first_id..=last_id`.
fn beer_page(first_id: usize, last_id: usize) -> Value {
    let beers: Vec<Value> = (first_id..=last_id)
        .map(|id| {
            json!({
                "id": id,
                "name": format!("Beer {id}"),
                "tagline": "Brewed for tests",
                "image_url": format!("https://images.example.test/{id}.png")
            })
        })
        .collect();
    Value::Array(beers)
}

/// Serves `total` beers split into pages of `per_page`, plus an empty page
/// after the last one.
pub(crate) async fn mount_catalogue(server: &MockServer, total: usize, per_page: usize) {
    let pages = total.div_ceil(per_page);
    for page in 1..=pages.saturating_add(1) {
        let first_id = page
            .saturating_sub(1)
            .saturating_mul(per_page)
            .saturating_add(1);
        let last_id = page.saturating_mul(per_page).min(total);
        let body = if first_id > total {
            Value::Array(Vec::new())
        } else {
            beer_page(first_id, last_id)
        };

        Mock::given(method("GET"))
            .and(query_param("page", page.to_string()))
            .and(query_param("per_page", per_page.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }
}

/// Answers every request with `status` and a JSON error message.
pub(crate) async fn mount_failure(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_json(json!({ "message": "catalogue unavailable" })),
        )
        .mount(server)
        .await;
}
