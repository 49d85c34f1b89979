use atmos_weather::data::request::{RequestError, RequestOptions, fetch_json};
use reqwest::Client;
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path, query_param},
};

#[tokio::test]
async fn failure_status_surfaces_detail_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/queries/42"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "detail": "not found" })))
        .mount(&server)
        .await;

    let err = fetch_json(
        &Client::new(),
        &format!("{}/api/queries/42", server.uri()),
        RequestOptions::get(),
    )
    .await
    .expect_err("404 must fail");

    assert_eq!(err.to_string(), "not found");
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn non_json_success_body_comes_back_as_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let body = fetch_json(&Client::new(), &server.uri(), RequestOptions::get())
        .await
        .expect("200 succeeds");

    assert_eq!(body, Value::String("ok".to_string()));
}

#[tokio::test]
async fn failure_without_detail_uses_raw_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = fetch_json(&Client::new(), &server.uri(), RequestOptions::get())
        .await
        .expect_err("502 must fail");

    assert_eq!(err.to_string(), "Bad Gateway");
}

#[tokio::test]
async fn empty_failure_body_uses_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = fetch_json(&Client::new(), &server.uri(), RequestOptions::delete())
        .await
        .expect_err("500 must fail");

    assert!(matches!(err, RequestError::Status { status: 500, .. }));
    assert_eq!(err.to_string(), "Request failed");
}

#[tokio::test]
async fn sends_query_pairs_and_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/echo"))
        .and(query_param("lat", "59.5"))
        .and(body_json(json!({ "location": "Oslo" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 7 })))
        .mount(&server)
        .await;

    let body = fetch_json(
        &Client::new(),
        &format!("{}/echo", server.uri()),
        RequestOptions::post(json!({ "location": "Oslo" })).query("lat", 59.5),
    )
    .await
    .expect("created");

    assert_eq!(body, json!({ "id": 7 }));
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let uri = format!("http://{}", listener.local_addr().expect("local addr"));
    drop(listener);

    let err = fetch_json(&Client::new(), &uri, RequestOptions::get())
        .await
        .expect_err("connection refused");

    assert!(matches!(err, RequestError::Transport(_)));
}
