use pretty_assertions::assert_eq;
use serde_json::json;
use shortener_api::{
    ApiError, ApiSettings, FailureKind, ReqwestApiClient, ShortUrlRecord, ShortenerApi,
};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ORIGIN: &str = "https://sho.rt";

fn client_for(server: &MockServer) -> ReqwestApiClient {
    shortener_logging::initialize_for_tests();
    ReqwestApiClient::new(ApiSettings::new(server.uri(), ORIGIN))
}

#[tokio::test]
async fn shorten_posts_url_once_and_qualifies_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/short_it"))
        .and(body_json(json!({ "url": "https://example.com/long" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "short_url": "abc123" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let short_url = client
        .shorten_url("https://example.com/long")
        .await
        .expect("shorten ok");

    assert_eq!(short_url, "https://sho.rt/abc123");
}

#[tokio::test]
async fn shorten_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/short_it"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .shorten_url("https://example.com")
        .await
        .unwrap_err();

    assert_eq!(err, ApiError::Shorten(FailureKind::HttpStatus(500)));
    assert_eq!(err.to_string(), "shorten failed: http status 500");
}

#[tokio::test]
async fn shorten_fails_on_unexpected_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/short_it"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "code": "abc123" })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .shorten_url("https://example.com")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), &FailureKind::Decode);
}

#[tokio::test]
async fn history_remaps_codes_to_short_urls() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/records"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "abc123": "https://example.com" },
            { "xyz789": "https://rust-lang.org/learn" },
        ])))
        .mount(&server)
        .await;

    let records = client_for(&server)
        .get_url_history()
        .await
        .expect("history ok");

    assert_eq!(
        records,
        vec![
            ShortUrlRecord {
                short_url: "https://sho.rt/abc123".to_string(),
                original_url: "https://example.com".to_string(),
            },
            ShortUrlRecord {
                short_url: "https://sho.rt/xyz789".to_string(),
                original_url: "https://rust-lang.org/learn".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn history_accepts_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/records"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let records = client_for(&server)
        .get_url_history()
        .await
        .expect("history ok");

    assert!(records.is_empty());
}

#[tokio::test]
async fn history_rejects_empty_record_object() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/records"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{}])))
        .mount(&server)
        .await;

    let err = client_for(&server).get_url_history().await.unwrap_err();

    assert_eq!(err, ApiError::History(FailureKind::MalformedRecord));
}

#[tokio::test]
async fn history_multi_key_record_uses_lowest_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/records"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"[{ "zzz999": "https://z.example", "aaa111": "https://a.example" }]"#,
        ))
        .mount(&server)
        .await;

    let records = client_for(&server)
        .get_url_history()
        .await
        .expect("history ok");

    assert_eq!(
        records,
        vec![ShortUrlRecord {
            short_url: "https://sho.rt/aaa111".to_string(),
            original_url: "https://a.example".to_string(),
        }]
    );
}

#[tokio::test]
async fn history_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/records"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server).get_url_history().await.unwrap_err();

    assert_eq!(err, ApiError::History(FailureKind::HttpStatus(503)));
}

#[tokio::test]
async fn recover_returns_original_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recover_it"))
        .and(query_param("short_url", "abc123"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "original_url": "https://example.com" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let original = client_for(&server)
        .recover_url("abc123")
        .await
        .expect("recover ok");

    assert_eq!(original, "https://example.com");
}

#[tokio::test]
async fn recover_encodes_short_code() {
    let server = MockServer::start().await;
    // query_param matches the decoded value, so reserved characters must have
    // been percent-encoded to arrive intact.
    Mock::given(method("GET"))
        .and(path("/recover_it"))
        .and(query_param("short_url", "a b&c=d"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "original_url": "https://ok.io" })),
        )
        .mount(&server)
        .await;

    let original = client_for(&server)
        .recover_url("a b&c=d")
        .await
        .expect("recover ok");

    assert_eq!(original, "https://ok.io");
}

#[tokio::test]
async fn recover_fails_on_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recover_it"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "detail": "Short URL not found" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).recover_url("nope").await.unwrap_err();

    assert_eq!(err, ApiError::Recover(FailureKind::HttpStatus(404)));
    assert_eq!(err.to_string(), "recover failed: http status 404");
}

#[tokio::test]
async fn unreachable_backend_is_a_network_failure() {
    shortener_logging::initialize_for_tests();
    // Reserve a free port, then release it so nothing is listening there.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .expect("bind ephemeral port");
    let client = ReqwestApiClient::new(ApiSettings::new(format!("http://{addr}"), ORIGIN));

    let err = client.recover_url("abc123").await.unwrap_err();

    assert_eq!(err, ApiError::Recover(FailureKind::Network));
}
