//! End-to-end HTTP tests: a real listener on an ephemeral port, driven
//! with `reqwest`.

#![allow(clippy::panic, clippy::indexing_slicing)]

use std::sync::Arc;

use axum::Router;
use serde_json::{Value, json};
use sqlx::sqlite::SqlitePoolOptions;

use projectpulse::api;
use projectpulse::app_state::AppState;
use projectpulse::frontend;
use projectpulse::persistence::sqlite::SqliteStore;
use projectpulse::service::ProjectService;

async fn make_service() -> Arc<ProjectService> {
    let Ok(pool) = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
    else {
        panic!("in-memory pool");
    };
    let store = SqliteStore::new(pool);
    let Ok(()) = store.init_schema().await else {
        panic!("schema init failed");
    };
    Arc::new(ProjectService::new(store))
}

async fn spawn_app(app: Router) -> String {
    let Ok(listener) = tokio::net::TcpListener::bind("127.0.0.1:0").await else {
        panic!("bind failed");
    };
    let Ok(addr) = listener.local_addr() else {
        panic!("no local addr");
    };
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

/// Fresh backend with an empty store; `seed` runs the startup seeding.
async fn spawn_backend(seed: bool) -> String {
    let service = make_service().await;
    if seed {
        let Ok(()) = service.seed_if_empty().await else {
            panic!("seed failed");
        };
    }
    let app = api::build_router().with_state(AppState {
        project_service: service,
    });
    spawn_app(app).await
}

async fn post_project(client: &reqwest::Client, base: &str, body: &Value) -> reqwest::Response {
    let Ok(response) = client
        .post(format!("{base}/api/projects"))
        .json(body)
        .send()
        .await
    else {
        panic!("request failed");
    };
    response
}

async fn body_json(response: reqwest::Response) -> Value {
    let Ok(value) = response.json::<Value>().await else {
        panic!("body is not JSON");
    };
    value
}

#[tokio::test]
async fn create_with_title_only_fills_defaults() {
    let base = spawn_backend(false).await;
    let client = reqwest::Client::new();

    let response = post_project(&client, &base, &json!({"title": "X"})).await;
    assert_eq!(response.status(), reqwest::StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["title"], "X");
    assert_eq!(body["description"], "");
    assert_eq!(body["status"], "idea");
    assert_eq!(body["priority"], 2);
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn list_puts_lower_priority_value_first() {
    let base = spawn_backend(false).await;
    let client = reqwest::Client::new();

    let _ = post_project(&client, &base, &json!({"title": "five", "priority": 5})).await;
    let _ = post_project(&client, &base, &json!({"title": "one", "priority": 1})).await;

    let Ok(response) = client.get(format!("{base}/api/projects")).send().await else {
        panic!("request failed");
    };
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body[0]["title"], "one");
    assert_eq!(body[1]["title"], "five");
}

#[tokio::test]
async fn update_missing_project_on_fresh_store_is_404() {
    let base = spawn_backend(false).await;
    let client = reqwest::Client::new();

    let Ok(response) = client
        .put(format!("{base}/api/projects/999"))
        .json(&json!({"title": "nope"}))
        .send()
        .await
    else {
        panic!("request failed");
    };
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], 2001);
}

#[tokio::test]
async fn delete_then_get_is_404() {
    let base = spawn_backend(false).await;
    let client = reqwest::Client::new();

    let _ = post_project(&client, &base, &json!({"title": "X"})).await;

    let Ok(response) = client.delete(format!("{base}/api/projects/1")).send().await else {
        panic!("request failed");
    };
    assert_eq!(response.status(), reqwest::StatusCode::NO_CONTENT);

    let Ok(response) = client.get(format!("{base}/api/projects/1")).send().await else {
        panic!("request failed");
    };
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

    // Delete is permanent, not idempotent: a second delete is also 404.
    let Ok(response) = client.delete(format!("{base}/api/projects/1")).send().await else {
        panic!("request failed");
    };
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn first_boot_seeds_exactly_one_starter_project() {
    let base = spawn_backend(true).await;
    let client = reqwest::Client::new();

    let Ok(response) = client.get(format!("{base}/api/projects")).send().await else {
        panic!("request failed");
    };
    let body = body_json(response).await;

    let Some(projects) = body.as_array() else {
        panic!("expected array");
    };
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["title"], "Welcome: Example Project");
    assert_eq!(projects[0]["status"], "active");
    assert_eq!(projects[0]["priority"], 1);
}

#[tokio::test]
async fn update_overwrites_fields_and_preserves_created_at() {
    let base = spawn_backend(false).await;
    let client = reqwest::Client::new();

    let created = post_project(
        &client,
        &base,
        &json!({"title": "orig", "description": "text", "status": "active", "priority": 1}),
    )
    .await;
    let created = body_json(created).await;

    let Ok(response) = client
        .put(format!("{base}/api/projects/1"))
        .json(&json!({"title": "new", "status": "completed", "priority": 3}))
        .send()
        .await
    else {
        panic!("request failed");
    };
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["title"], "new");
    assert_eq!(body["description"], Value::Null);
    assert_eq!(body["status"], "completed");
    assert_eq!(body["priority"], 3);
    assert_eq!(body["id"], created["id"]);
    assert_eq!(body["created_at"], created["created_at"]);
}

#[tokio::test]
async fn malformed_payloads_are_client_errors() {
    let base = spawn_backend(false).await;
    let client = reqwest::Client::new();

    // Missing required title
    let response = post_project(&client, &base, &json!({"priority": 1})).await;
    assert_eq!(response.status(), reqwest::StatusCode::UNPROCESSABLE_ENTITY);

    // Not JSON at all
    let Ok(response) = client
        .post(format!("{base}/api/projects"))
        .header("content-type", "application/json")
        .body("not json")
        .send()
        .await
    else {
        panic!("request failed");
    };
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    // Neither request reached the store
    let Ok(response) = client.get(format!("{base}/api/projects")).send().await else {
        panic!("request failed");
    };
    let body = body_json(response).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn health_reports_healthy() {
    let base = spawn_backend(false).await;
    let client = reqwest::Client::new();

    let Ok(response) = client.get(format!("{base}/health")).send().await else {
        panic!("request failed");
    };
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn unmatched_paths_fall_through_to_frontend_bundle() {
    let Ok(dist) = tempfile::tempdir() else {
        panic!("tempdir failed");
    };
    let Ok(()) = std::fs::write(dist.path().join("index.html"), "<html>pulse</html>") else {
        panic!("write failed");
    };
    let Ok(()) = std::fs::create_dir(dist.path().join("assets")) else {
        panic!("mkdir failed");
    };
    let Ok(()) = std::fs::write(dist.path().join("assets").join("app.js"), "console.log(1)") else {
        panic!("write failed");
    };

    let service = make_service().await;
    let mut app = Router::new().merge(api::build_router());
    let Some(static_files) = frontend::static_service(dist.path()) else {
        panic!("static hosting should be enabled");
    };
    app = app.fallback_service(static_files);
    let app = app.with_state(AppState {
        project_service: service,
    });
    let base = spawn_app(app).await;
    let client = reqwest::Client::new();

    // Root serves index.html
    let Ok(response) = client.get(format!("{base}/")).send().await else {
        panic!("request failed");
    };
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let Ok(text) = response.text().await else {
        panic!("body read failed");
    };
    assert!(text.contains("pulse"));

    // Bundled assets are served directly
    let Ok(response) = client.get(format!("{base}/assets/app.js")).send().await else {
        panic!("request failed");
    };
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    // Client-side routes fall back to index.html
    let Ok(response) = client.get(format!("{base}/projects/42/edit")).send().await else {
        panic!("request failed");
    };
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let Ok(text) = response.text().await else {
        panic!("body read failed");
    };
    assert!(text.contains("pulse"));

    // API paths still hit the API
    let Ok(response) = client.get(format!("{base}/api/projects")).send().await else {
        panic!("request failed");
    };
    let body = body_json(response).await;
    assert_eq!(body, json!([]));
}
