use std::sync::Once;
use std::time::Duration;

use pretty_assertions::assert_eq;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gallery_engine::{
    ClientSettings, FetchError, NetworkPhotoRepository, PhotoApiClient, PhotoRepository,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(gallery_logging::initialize_for_tests);
}

fn settings_for(server: &MockServer) -> ClientSettings {
    ClientSettings {
        base_url: Url::parse(&server.uri()).expect("mock server uri"),
        ..ClientSettings::default()
    }
}

const LISTING: &str = r#"[
    {"id":"424905","img_src":"https://mars.example.com/img/424905.jpg"},
    {"id":"424904","img_src":"https://mars.example.com/img/424904.jpg"},
    {"id":"424906","img_src":"https://mars.example.com/img/424906.jpg"}
]"#;

async fn mount_listing(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/photos"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(server)
        .await;
}

#[tokio::test]
async fn client_returns_records_in_server_order() {
    init_logging();
    let server = MockServer::start().await;
    mount_listing(&server, LISTING).await;

    let client = PhotoApiClient::new(settings_for(&server)).expect("client");
    let photos = client.fetch_photos().await.expect("fetch ok");

    let ids: Vec<_> = photos.iter().map(|photo| photo.id.as_str()).collect();
    assert_eq!(ids, vec!["424905", "424904", "424906"]);
    assert_eq!(
        photos[0].img_src,
        "https://mars.example.com/img/424905.jpg"
    );
}

#[tokio::test]
async fn client_tolerates_unknown_keys() {
    init_logging();
    let server = MockServer::start().await;
    let body = r#"[{"id":"1","img_src":"https://mars.example.com/img/1.jpg","sol":1723,"rover":"curiosity"}]"#;
    mount_listing(&server, body).await;

    let client = PhotoApiClient::new(settings_for(&server)).expect("client");
    let photos = client.fetch_photos().await.expect("fetch ok");

    assert_eq!(photos.len(), 1);
    assert_eq!(photos[0].id, "1");
}

#[tokio::test]
async fn client_fails_with_protocol_error_on_http_status() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/photos"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = PhotoApiClient::new(settings_for(&server)).expect("client");
    let err = client.fetch_photos().await.unwrap_err();

    assert!(matches!(err, FetchError::Protocol(_)), "got {err:?}");
}

#[tokio::test]
async fn client_fails_with_protocol_error_on_malformed_listing() {
    init_logging();
    let server = MockServer::start().await;
    // Element is missing the required img_src key.
    mount_listing(&server, r#"[{"id":"424905"}]"#).await;

    let client = PhotoApiClient::new(settings_for(&server)).expect("client");
    let err = client.fetch_photos().await.unwrap_err();

    assert!(matches!(err, FetchError::Protocol(_)), "got {err:?}");
}

#[tokio::test]
async fn client_fails_with_transport_error_when_unreachable() {
    init_logging();
    // Learn a port, then shut the server down so the connection is refused.
    let settings = {
        let server = MockServer::start().await;
        settings_for(&server)
    };

    let client = PhotoApiClient::new(settings).expect("client");
    let err = client.fetch_photos().await.unwrap_err();

    assert!(matches!(err, FetchError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn client_fails_with_transport_error_on_timeout() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/photos"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_raw("[]", "application/json"),
        )
        .mount(&server)
        .await;

    let settings = ClientSettings {
        request_timeout: Duration::from_millis(50),
        ..settings_for(&server)
    };
    let client = PhotoApiClient::new(settings).expect("client");
    let err = client.fetch_photos().await.unwrap_err();

    assert!(matches!(err, FetchError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn network_repository_delegates_unchanged() {
    init_logging();
    let server = MockServer::start().await;
    mount_listing(&server, LISTING).await;

    let client = PhotoApiClient::new(settings_for(&server)).expect("client");
    let direct = client.fetch_photos().await.expect("client fetch");

    let repository = NetworkPhotoRepository::new(client);
    let via_repository = repository.photos().await.expect("repository fetch");

    assert_eq!(via_repository, direct);
}
