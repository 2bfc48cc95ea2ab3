//! HTTP routing tests
//!
//! Exercise the axum router the binary serves, without binding a socket.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tower::ServiceExt;

use rendezvous::config::Config;
use rendezvous::db::{CreateUser, Database};
use rendezvous::{AppState, build_app};

fn app_with(db: Database) -> Router {
    let config = Config::from_lookup(|_| None).unwrap();
    build_app(AppState::new(config, db))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_healthz() {
    let response = app_with(Database::new())
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "healthy");
}

#[tokio::test]
async fn test_readyz_reports_collection_sizes() {
    let db = Database::new();
    db.users().create(CreateUser::default());
    db.users().create(CreateUser::default());

    let response = app_with(db)
        .oneshot(Request::get("/readyz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(
        body_json(response).await,
        json!({ "ready": true, "users": 2, "events": 0, "locations": 0, "participants": 0 })
    );
}

#[tokio::test]
async fn test_post_graphql_runs_mutation_against_shared_store() {
    let db = Database::new();
    let app = app_with(db.clone());

    let request = Request::post("/graphql")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "query": r#"mutation { addUser(input: { username: "ada" }) { username } }"# })
                .to_string(),
        ))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "data": { "addUser": { "username": "ada" } } })
    );
    assert_eq!(db.users().list()[0].username, "ada");
}

#[tokio::test]
async fn test_not_found_is_a_graphql_error_not_a_server_error() {
    let request = Request::post("/graphql")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "query": r#"{ user(id: "missing") { id } }"# }).to_string(),
        ))
        .unwrap();
    let response = app_with(Database::new()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["errors"][0]["extensions"]["code"], "NOT_FOUND");
    assert_eq!(body["errors"][0]["message"], "User not found: missing");
}

#[tokio::test]
async fn test_playground_only_for_browsers() {
    let app = app_with(Database::new());

    let browser = app
        .clone()
        .oneshot(
            Request::get("/graphql")
                .header(header::ACCEPT, "text/html")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(browser.status(), StatusCode::OK);

    let client = app
        .oneshot(Request::get("/graphql").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(client.status(), StatusCode::METHOD_NOT_ALLOWED);
}
