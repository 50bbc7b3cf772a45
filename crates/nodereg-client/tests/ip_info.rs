use nodereg_client::{IpInfoClient, RegistrarError};
use nodereg_core::NodeDetails;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> IpInfoClient {
    IpInfoClient::builder().base_url(server.uri()).build().unwrap()
}

#[tokio::test]
async fn lookup_fills_missing_details() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ip": "203.0.113.9",
            "city": "Singapore",
            "region": "Singapore",
            "country": "SG",
            "loc": "1.2897,103.8501",
            "org": "AS16509 Amazon.com, Inc.",
            "postal": "018989",
            "timezone": "Asia/Singapore"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let info = client_for(&server).await.lookup().await.unwrap();
    assert_eq!(info.ip.as_deref(), Some("203.0.113.9"));

    let mut details = NodeDetails {
        identity: "did:soon:abc".into(),
        name: "sg-1".into(),
        ..NodeDetails::default()
    };
    details.fill_from_ip_info(&info);

    assert_eq!(details.ip_address, "203.0.113.9");
    assert_eq!(details.isp_info, "AS16509 Amazon.com, Inc.");
    assert_eq!(details.region, "SG");
    assert_eq!(details.location, "Singapore, Singapore");
    assert!(details.missing_fields().is_empty());
}

#[tokio::test]
async fn lookup_surfaces_http_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&server)
        .await;

    let err = client_for(&server).await.lookup().await.unwrap_err();
    match err {
        RegistrarError::Http(message) => assert!(message.contains("429")),
        other => panic!("unexpected {other:?}"),
    }
}

#[tokio::test]
async fn lookup_rejects_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).await.lookup().await.unwrap_err();
    assert!(matches!(err, RegistrarError::Json(_)));
}
