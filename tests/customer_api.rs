/// Integration tests for the customer service routes.
use std::net::SocketAddr;

use reqwest::{Method, StatusCode};
use serde_json::{json, Value};
use swagger_recipes::core::lifecycle::{CleanupStack, Lifecycle};
use swagger_recipes::routes::customer_router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

struct TestServer {
    addr: SocketAddr,
    handle: JoinHandle<anyhow::Result<()>>,
}

impl TestServer {
    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn start() -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = customer_router("customer-server");

    let handle = tokio::spawn(async move {
        Lifecycle::new(CleanupStack::new())
            .serve_until_killed(listener, &router)
            .await
    });

    TestServer { addr, handle }
}

#[tokio::test]
async fn healthcheck_is_ok() {
    let server = start().await;
    let res = reqwest::get(server.url("/healthcheck")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["service"], json!("customer-server"));
}

#[tokio::test]
async fn crud_stubs_answer_empty_objects() {
    let server = start().await;
    let client = reqwest::Client::new();

    let calls = [
        (Method::GET, "/api/v1/customers"),
        (Method::POST, "/api/v1/customers"),
        (Method::GET, "/api/v1/customers/1"),
        (Method::PATCH, "/api/v1/customers/1"),
        (Method::DELETE, "/api/v1/customers/1"),
    ];

    for (method, path) in calls {
        let res = client
            .request(method.clone(), server.url(path))
            .json(&json!({ "name": "ignored" }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK, "{} {}", method, path);
        assert_eq!(res.text().await.unwrap(), "{}");
    }
}

#[tokio::test]
async fn unsupported_method_is_rejected() {
    let server = start().await;
    let res = reqwest::Client::new()
        .put(server.url("/api/v1/customers/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn swagger_document_lists_customer_paths() {
    let server = start().await;
    let doc: Value = reqwest::get(server.url("/swagger/doc.json"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(doc["paths"].get("/healthcheck").is_some());
    assert!(doc["paths"].get("/api/v1/customers/{id}").is_some());
}

#[tokio::test]
async fn account_routes_are_not_mounted() {
    let server = start().await;
    let res = reqwest::get(server.url("/accounts/42")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
