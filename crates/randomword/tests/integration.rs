//! Integration tests for RandomWord using wiremock

use async_trait::async_trait;
use randomword::{
    with_language, with_length, with_number, with_transport, BoxError, Language, RandomWordError,
    Request, ReqwestTransport, Transport,
};
use url::Url;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Sends requests to another origin instead of the real service
struct RedirectTransport {
    origin: Url,
    inner: ReqwestTransport,
}

impl RedirectTransport {
    fn new(server: &MockServer) -> Self {
        Self::to(Url::parse(&server.uri()).unwrap())
    }

    fn to(origin: Url) -> Self {
        Self {
            origin,
            inner: ReqwestTransport::new().unwrap(),
        }
    }
}

#[async_trait]
impl Transport for RedirectTransport {
    async fn execute(
        &self,
        mut request: reqwest::Request,
    ) -> Result<reqwest::Response, BoxError> {
        let mut target = self.origin.clone();
        target.set_path(request.url().path());
        target.set_query(request.url().query());
        *request.url_mut() = target;
        self.inner.execute(request).await
    }
}

#[tokio::test]
async fn test_fetch_default_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/word"))
        .and(query_param_is_missing("number"))
        .and(query_param_is_missing("length"))
        .and(query_param_is_missing("lang"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"["gauntlet"]"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = Request::new([with_transport(RedirectTransport::new(&mock_server))]).unwrap();
    let words = request.fetch().await.unwrap();

    assert_eq!(words, vec!["gauntlet"]);
}

#[tokio::test]
async fn test_fetch_with_all_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/word"))
        .and(query_param("number", "3"))
        .and(query_param("length", "5"))
        .and(query_param("lang", "es"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(["perro", "gatos", "nubes"]),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = Request::builder()
        .number(3)
        .length(5)
        .language(Language::Spanish)
        .transport(RedirectTransport::new(&mock_server))
        .build()
        .unwrap();
    let words = request.fetch().await.unwrap();

    assert_eq!(words, vec!["perro", "gatos", "nubes"]);
}

#[tokio::test]
async fn test_fetch_brazilian_portuguese() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/word"))
        .and(query_param("lang", "pt-br"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"["saudade"]"#))
        .mount(&mock_server)
        .await;

    let request = Request::new([
        with_language("pt-br"),
        with_transport(RedirectTransport::new(&mock_server)),
    ])
    .unwrap();

    assert_eq!(request.fetch().await.unwrap(), vec!["saudade"]);
}

#[tokio::test]
async fn test_fetch_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/word"))
        .respond_with(ResponseTemplate::new(500).set_body_string(r#"["looks","valid"]"#))
        .mount(&mock_server)
        .await;

    let request = Request::new([with_transport(RedirectTransport::new(&mock_server))]).unwrap();
    let result = request.fetch().await;

    assert!(matches!(
        result,
        Err(RandomWordError::UnexpectedResponse { status: 500 })
    ));
}

#[tokio::test]
async fn test_fetch_empty_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/word"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let request = Request::new([with_transport(RedirectTransport::new(&mock_server))]).unwrap();
    let result = request.fetch().await;

    assert!(matches!(
        result,
        Err(RandomWordError::UnexpectedResponse { status: 200 })
    ));
}

#[tokio::test]
async fn test_fetch_invalid_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/word"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not a json"))
        .mount(&mock_server)
        .await;

    let request = Request::new([with_transport(RedirectTransport::new(&mock_server))]).unwrap();
    let err = request.fetch().await.unwrap_err();

    assert!(err.is_internal());
}

#[tokio::test]
async fn test_fetch_connection_refused() {
    // Grab a free port and release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let origin = Url::parse(&format!("http://127.0.0.1:{port}")).unwrap();
    let request = Request::new([with_transport(RedirectTransport::to(origin))]).unwrap();
    let err = request.fetch().await.unwrap_err();

    assert!(err.is_internal());
}

#[tokio::test]
async fn test_invalid_option_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let result = Request::new([
        with_number(0),
        with_transport(RedirectTransport::new(&mock_server)),
    ]);
    assert!(matches!(
        result,
        Err(RandomWordError::InvalidArgument("number"))
    ));

    let result = Request::new([with_length(-4)]);
    assert!(matches!(
        result,
        Err(RandomWordError::InvalidArgument("length"))
    ));
}

#[tokio::test]
async fn test_request_is_reusable_and_concurrent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/word"))
        .and(query_param("number", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"["one","two"]"#))
        .expect(4)
        .mount(&mock_server)
        .await;

    let request = Request::new([
        with_number(2),
        with_transport(RedirectTransport::new(&mock_server)),
    ])
    .unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let request = request.clone();
            tokio::spawn(async move { request.fetch().await })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), vec!["one", "two"]);
    }
}
