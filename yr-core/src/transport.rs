use async_trait::async_trait;
use reqwest::{Client, header::USER_AGENT};
use std::fmt::Debug;

use crate::error::TransportError;

/// Performs one GET and hands back the whole body.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    async fn get(&self, url: &str, user_agent: &str) -> Result<String, TransportError>;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, reqwest::Error> {
        Ok(Self { http: Client::builder().build()? })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str, user_agent: &str) -> Result<String, TransportError> {
        let request_error = |source| TransportError::Request { url: url.to_string(), source };

        let res = self
            .http
            .get(url)
            .header(USER_AGENT, user_agent)
            .send()
            .await
            .map_err(request_error)?;

        let status = res.status();
        let body = res.text().await.map_err(request_error)?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        log::debug!("received {} bytes from {url}", body.len());
        Ok(body)
    }
}

/// Fetch the raw forecast document at `url`.
///
/// An empty URL is refused before the transport is touched, and a missing
/// transport is fatal. There is no retry.
pub async fn fetch_forecast(
    transport: Option<&dyn Transport>,
    url: &str,
    user_agent: &str,
) -> Result<String, TransportError> {
    if url.is_empty() {
        return Err(TransportError::EmptyUrl);
    }
    let transport = transport.ok_or(TransportError::NoHandle)?;

    log::info!("requesting forecast from {url}");
    transport.get(url, user_agent).await
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}


#[cfg(test)]
mod tests {
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path, query_param},
    };

    use super::{mock::StaticTransport, *};

    const FORECAST_PATH: &str = "/weatherapi/locationforecast/2.0/compact.json";

    #[tokio::test]
    async fn empty_url_never_reaches_transport() {
        let transport = StaticTransport::ok("{}");

        let err = fetch_forecast(Some(&transport), "", "agent").await.unwrap_err();

        assert!(matches!(err, TransportError::EmptyUrl));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn missing_transport_is_fatal() {
        let err = fetch_forecast(None, "https://example.org/?", "agent").await.unwrap_err();
        assert!(matches!(err, TransportError::NoHandle));
    }

    #[tokio::test]
    async fn delegates_exactly_once() {
        let transport = StaticTransport::ok("{\"ok\":true}");

        let body = fetch_forecast(Some(&transport), "https://example.org/?", "agent")
            .await
            .unwrap();

        assert_eq!(body, "{\"ok\":true}");
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn http_transport_sends_user_agent_and_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(FORECAST_PATH))
            .and(query_param("altitude", "50"))
            .and(query_param("lat", "50.000000"))
            .and(query_param("lon", "50.000000"))
            .and(header("user-agent", "test-agent/1.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"type\":\"Feature\"}"))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new().unwrap();
        let url = format!(
            "{}{FORECAST_PATH}?altitude=50&lat=50.000000&lon=50.000000",
            server.uri()
        );

        let body = fetch_forecast(Some(&transport), &url, "test-agent/1.0").await.unwrap();
        assert_eq!(body, "{\"type\":\"Feature\"}");
    }

    #[tokio::test]
    async fn http_transport_maps_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403).set_body_string("missing user agent"))
            .mount(&server)
            .await;

        let transport = HttpTransport::new().unwrap();
        let url = format!("{}{FORECAST_PATH}?altitude=0&lat=0.000000&lon=0.000000", server.uri());

        match fetch_forecast(Some(&transport), &url, "agent").await.unwrap_err() {
            TransportError::Status { status, body } => {
                assert_eq!(status, 403);
                assert_eq!(body, "missing user agent");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn http_transport_reports_connection_failure() {
        // Nothing listens on the discard port.
        let transport = HttpTransport::new().unwrap();

        let err = fetch_forecast(Some(&transport), "http://127.0.0.1:9/?", "agent")
            .await
            .unwrap_err();

        assert!(matches!(err, TransportError::Request { .. }));
    }

    #[test]
    fn truncate_body_limits_length() {
        let long = "x".repeat(250);
        let truncated = truncate_body(&long);

        assert_eq!(truncated.len(), 203);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncate_body("short"), "short");
    }
}
