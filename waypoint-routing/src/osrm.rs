//! OSRM route client
//!
//! Calls the OSRM `route` service for driving directions. OSRM takes
//! coordinates as `lon,lat`, so the request path is built longitude first.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use waypoint_core::domain::route::{LineString, RouteInfo};
use waypoint_core::geo::GeoPoint;

use crate::RouteProvider;
use crate::error::{Result, RoutingError};

/// Public OSRM demo server
pub const DEFAULT_OSRM_URL: &str = "https://router.project-osrm.org";

/// HTTP client for an OSRM routing endpoint
#[derive(Debug, Clone)]
pub struct OsrmClient {
    /// Base URL of the OSRM server (e.g., "https://router.project-osrm.org")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl OsrmClient {
    /// Create a client whose requests fail after `timeout`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RoutingError::InvalidConfig(e.to_string()))?;

        Ok(Self::with_client(base_url, client))
    }

    /// Create a client around a preconfigured reqwest `Client`
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the routing service
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn route_url(&self, start: GeoPoint, end: GeoPoint) -> String {
        format!(
            "{}/route/v1/driving/{},{};{},{}",
            self.base_url, start.lon, start.lat, end.lon, end.lat
        )
    }

    /// Check the status code and decode the OSRM body
    async fn handle_response(&self, response: reqwest::Response) -> Result<OsrmResponse> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RoutingError::service_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| RoutingError::ParseError(format!("Failed to parse OSRM response: {}", e)))
    }
}

#[async_trait]
impl RouteProvider for OsrmClient {
    async fn route(&self, start: GeoPoint, end: GeoPoint) -> Result<RouteInfo> {
        let url = self.route_url(start, end);
        tracing::debug!("Requesting route from {} to {}", start, end);

        let response = self
            .client
            .get(&url)
            .query(&[("overview", "full"), ("geometries", "geojson")])
            .send()
            .await?;

        let body = self.handle_response(response).await?;
        into_route_info(body)
    }
}

// =============================================================================
// OSRM wire format
// =============================================================================

#[derive(Debug, Deserialize)]
struct OsrmResponse {
    code: String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    /// Metres
    distance: f64,
    /// Seconds
    duration: f64,
    geometry: LineString,
}

fn into_route_info(body: OsrmResponse) -> Result<RouteInfo> {
    if body.code != "Ok" {
        return Err(RoutingError::NoRoute(body.code));
    }

    let route = body
        .routes
        .into_iter()
        .next()
        .ok_or_else(|| RoutingError::NoRoute(body.code))?;

    Ok(RouteInfo {
        distance_km: route.distance / 1000.0,
        duration_min: route.duration / 60.0,
        geometry: route.geometry,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const OK_BODY: &str = r#"{
        "code": "Ok",
        "routes": [{
            "distance": 2345.6,
            "duration": 421.0,
            "geometry": {"type": "LineString", "coordinates": [[79.4192, 13.6288], [79.43, 13.64]]}
        }],
        "waypoints": []
    }"#;

    fn client(base_url: &str) -> OsrmClient {
        OsrmClient::new(base_url, Duration::from_secs(2)).unwrap()
    }

    /// Serves one canned HTTP response and hands back the request line
    async fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let mut request = Vec::new();
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                request.extend_from_slice(&buf[..n]);
                if n == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();

            let request = String::from_utf8_lossy(&request).to_string();
            request.lines().next().unwrap_or_default().to_string()
        });

        (format!("http://{}", addr), handle)
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = client("http://localhost:5000/");
        assert_eq!(client.base_url(), "http://localhost:5000");
    }

    #[test]
    fn test_route_url_puts_longitude_first() {
        let client = client("http://osrm.local");
        let url = client.route_url(GeoPoint::new(13.6288, 79.4192), GeoPoint::new(13.64, 79.43));
        assert_eq!(
            url,
            "http://osrm.local/route/v1/driving/79.4192,13.6288;79.43,13.64"
        );
    }

    #[test]
    fn test_into_route_info_converts_units() {
        let body: OsrmResponse = serde_json::from_str(OK_BODY).unwrap();
        let route = into_route_info(body).unwrap();

        assert!((route.distance_km - 2.3456).abs() < 1e-9);
        assert!((route.duration_min - 7.016666).abs() < 1e-4);
        assert_eq!(route.geometry.kind, "LineString");
        assert_eq!(route.geometry.coordinates.len(), 2);
    }

    #[test]
    fn test_into_route_info_rejects_no_route() {
        let body: OsrmResponse =
            serde_json::from_str(r#"{"code": "NoRoute", "message": "Impossible route"}"#).unwrap();
        assert!(matches!(
            into_route_info(body),
            Err(RoutingError::NoRoute(code)) if code == "NoRoute"
        ));

        let body: OsrmResponse = serde_json::from_str(r#"{"code": "Ok", "routes": []}"#).unwrap();
        assert!(matches!(into_route_info(body), Err(RoutingError::NoRoute(_))));
    }

    #[tokio::test]
    async fn test_route_against_local_server() {
        let (base_url, server) = serve_once("200 OK", OK_BODY).await;

        let route = client(&base_url)
            .route(GeoPoint::new(13.6288, 79.4192), GeoPoint::new(13.64, 79.43))
            .await
            .unwrap();
        assert!((route.distance_km - 2.3456).abs() < 1e-9);

        let request_line = server.await.unwrap();
        assert!(request_line.starts_with("GET /route/v1/driving/79.4192,13.6288;79.43,13.64?"));
        assert!(request_line.contains("overview=full"));
        assert!(request_line.contains("geometries=geojson"));
    }

    #[tokio::test]
    async fn test_non_success_status_is_service_error() {
        let (base_url, server) =
            serve_once("503 Service Unavailable", r#"{"message":"busy"}"#).await;

        let err = client(&base_url)
            .route(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0))
            .await
            .unwrap_err();
        assert!(err.is_server_error());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let (base_url, server) = serve_once("200 OK", "not json").await;

        let err = client(&base_url)
            .route(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0))
            .await
            .unwrap_err();
        assert!(matches!(err, RoutingError::ParseError(_)));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_silent_service_times_out() {
        // Accept the connection and never answer
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
            drop(socket);
        });

        let client =
            OsrmClient::new(format!("http://{}", addr), Duration::from_millis(100)).unwrap();
        let err = client
            .route(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0))
            .await
            .unwrap_err();

        assert!(err.is_timeout(), "unexpected error: {err}");
        assert!(!err.is_server_error());
        server.abort();
    }

    #[tokio::test]
    async fn test_unreachable_service_is_request_error() {
        // Bind then drop to get a port nobody is listening on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(&format!("http://{}", addr))
            .route(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0))
            .await
            .unwrap_err();
        assert!(matches!(err, RoutingError::RequestFailed(_)));
    }
}
