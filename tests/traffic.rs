//! Integration tests for the `traffic` operation.

use serde_json::{json, Value};
use similarweb::TrafficClient;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Point a client at the mock server, keeping the API's path shape.
fn client_for(server: &MockServer, user_key: &str) -> TrafficClient {
    let template = format!("{}/Site/{{url}}/v1/", server.uri());
    TrafficClient::with_base_url(user_key, &template).unwrap()
}

async fn mount_traffic(server: &MockServer, site_path: &str, body: &Value) {
    Mock::given(method("GET"))
        .and(path(site_path))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Traffic overview payload as the API serves it for a large site.
fn good_traffic_body() -> Value {
    json!({
        "GlobalRank": 2,
        "CountryCode": 840,
        "CountryRank": 1,
        "TopCountryShares": [
            {"CountryCode": 840, "TrafficShare": 0.4191358779109708},
            {"CountryCode": 356, "TrafficShare": 0.04602783067100975},
            {"CountryCode": 876, "TrafficShare": 6.869084578359956e-7},
            {"CountryCode": 10, "TrafficShare": 0}
        ],
        "TrafficReach": [
            {"Date": "02/01/2015", "Value": 0.16306846864268815},
            {"Date": "09/01/2015", "Value": 0.16501993162160358},
            {"Date": "16/01/2015", "Value": 0.1655193577048118},
            {"Date": "23/01/2015", "Value": 0.1665235785224394},
            {"Date": "30/01/2015", "Value": 0.16295290825680991}
        ],
        "TrafficShares": [
            {"SourceType": "Search", "SourceValue": 0.10429090056545187},
            {"SourceType": "Social", "SourceValue": 0.030245335003191837},
            {"SourceType": "Mail", "SourceValue": 0.0041178890588041694},
            {"SourceType": "Paid Referrals", "SourceValue": 0.0015840071128134063},
            {"SourceType": "Direct", "SourceValue": 0.6771397777323854},
            {"SourceType": "Referrals", "SourceValue": 0.1826220905273533}
        ],
        "Date": "01/2015"
    })
}

#[tokio::test]
async fn test_traffic_completes_full_url() {
    let server = MockServer::start().await;
    let body = good_traffic_body();

    Mock::given(method("GET"))
        .and(path("/Site/example.com/v1/traffic"))
        .and(query_param("UserKey", "test_key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let mut client = client_for(&server, "test_key");
    client.traffic("example.com").await.unwrap();

    let expected = format!(
        "{}/Site/example.com/v1/traffic?UserKey=test_key",
        server.uri()
    );
    assert_eq!(client.full_url(), expected);
}

#[tokio::test]
async fn test_traffic_good_response_returned_verbatim() {
    let server = MockServer::start().await;
    let body = good_traffic_body();
    mount_traffic(&server, "/Site/example.com/v1/traffic", &body).await;

    let mut client = client_for(&server, "test_key");
    let result = client.traffic("example.com").await.unwrap();

    assert_eq!(Value::Object(result), body);
}

// Fractional shares must come back carrying the exact f64 the server
// serialized; a decoder that is off by even 1 ulp breaks verbatim
// passthrough.
#[tokio::test]
async fn test_traffic_float_values_decode_bit_exact() {
    let server = MockServer::start().await;
    let body = good_traffic_body();
    mount_traffic(&server, "/Site/example.com/v1/traffic", &body).await;

    let mut client = client_for(&server, "test_key");
    let result = client.traffic("example.com").await.unwrap();

    let search_share = result["TrafficShares"][0]["SourceValue"]
        .as_f64()
        .unwrap();
    assert_eq!(search_share, 0.10429090056545187);

    let tiny_share = result["TopCountryShares"][2]["TrafficShare"]
        .as_f64()
        .unwrap();
    assert_eq!(tiny_share, 6.869084578359956e-7);
}

#[tokio::test]
async fn test_traffic_invalid_user_key() {
    let server = MockServer::start().await;
    let body = json!({"Error": "user_key_invalid"});
    mount_traffic(&server, "/Site/example.com/v1/traffic", &body).await;

    let mut client = client_for(&server, "invalid_key");
    let result = client.traffic("example.com").await.unwrap();

    assert_eq!(Value::Object(result), body);
}

#[tokio::test]
async fn test_traffic_malformed_url() {
    let server = MockServer::start().await;
    let body = json!({"Error": "Malformed or Unknown URL"});
    mount_traffic(&server, "/Site/bad_url/v1/traffic", &body).await;

    let mut client = client_for(&server, "test_key");
    let result = client.traffic("bad_url").await.unwrap();

    assert_eq!(Value::Object(result), body);
}

#[tokio::test]
async fn test_traffic_malformed_url_including_scheme() {
    let server = MockServer::start().await;
    let body = json!({"Error": "Malformed or Unknown URL"});
    mount_traffic(&server, "/Site/http://example.com/v1/traffic", &body).await;

    let mut client = client_for(&server, "test_key");
    let result = client.traffic("http://example.com").await.unwrap();

    assert_eq!(Value::Object(result), body);
}

#[tokio::test]
async fn test_traffic_empty_response_convention() {
    let server = MockServer::start().await;
    let body = json!({"Error": "Unknown Error"});
    mount_traffic(&server, "/Site/example.com/v1/traffic", &body).await;

    let mut client = client_for(&server, "test_key");
    let result = client.traffic("example.com").await.unwrap();

    assert_eq!(Value::Object(result), body);
}

#[tokio::test]
async fn test_traffic_repeated_call_is_idempotent() {
    let server = MockServer::start().await;
    let body = good_traffic_body();

    Mock::given(method("GET"))
        .and(path("/Site/example.com/v1/traffic"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(2)
        .mount(&server)
        .await;

    let mut client = client_for(&server, "test_key");
    let first = client.traffic("example.com").await.unwrap();
    let first_url = client.full_url().to_string();
    let second = client.traffic("example.com").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(client.full_url(), first_url);
}
