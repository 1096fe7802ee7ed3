//! In-process stand-in for the NWS and Nominatim APIs.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use nws_forecast_mcp::Config;
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const LAT: f64 = 39.7456;
pub const LON: f64 = -97.0892;
pub const POINTS_PATH: &str = "/points/39.7456,-97.0892";
pub const FORECAST_PATH: &str = "/gridpoints/TOP/31,80/forecast";
pub const HOURLY_PATH: &str = "/gridpoints/TOP/31,80/forecast/hourly";
pub const ALERTS_PATH: &str = "/alerts/active";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: Option<String>,
    pub user_agent: Option<String>,
}

struct Canned {
    status: StatusCode,
    body: String,
    location: Option<String>,
}

#[derive(Default)]
struct Routes {
    responses: HashMap<String, Canned>,
    requests: Vec<RecordedRequest>,
}

type Shared = Arc<Mutex<Routes>>;

pub struct MockUpstream {
    addr: SocketAddr,
    routes: Shared,
}

impl MockUpstream {
    pub async fn start() -> Self {
        let routes: Shared = Arc::default();
        let app = Router::new().fallback(handle).with_state(routes.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, routes }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Both upstream APIs are served from this one mock
    pub fn config(&self) -> Config {
        Config::new(self.url(), self.url())
    }

    pub fn respond(&self, path: &str, status: StatusCode, body: Value) {
        self.respond_raw(path, status, &body.to_string());
    }

    pub fn respond_raw(&self, path: &str, status: StatusCode, body: &str) {
        self.insert(
            path,
            Canned {
                status,
                body: body.to_string(),
                location: None,
            },
        );
    }

    /// Answers `path` with a 301 pointing at `target` on this mock
    pub fn redirect(&self, path: &str, target: &str) {
        self.insert(
            path,
            Canned {
                status: StatusCode::MOVED_PERMANENTLY,
                body: String::new(),
                location: Some(format!("{}{}", self.url(), target)),
            },
        );
    }

    fn insert(&self, path: &str, canned: Canned) {
        self.routes
            .lock()
            .unwrap()
            .responses
            .insert(path.to_string(), canned);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.routes.lock().unwrap().requests.clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.path).collect()
    }

    /// Wires up a healthy grid point, forecast, hourly forecast and alerts
    pub fn serve_forecast(
        &self,
        forecast_periods: usize,
        hourly_periods: usize,
        alerts: Vec<Value>,
    ) {
        self.respond(POINTS_PATH, StatusCode::OK, points_body(&self.url()));
        self.respond(FORECAST_PATH, StatusCode::OK, periods_body(forecast_periods));
        self.respond(HOURLY_PATH, StatusCode::OK, periods_body(hourly_periods));
        self.respond(ALERTS_PATH, StatusCode::OK, alerts_body(alerts));
    }
}

async fn handle(State(routes): State<Shared>, uri: Uri, headers: HeaderMap) -> Response {
    let mut routes = routes.lock().unwrap();
    routes.requests.push(RecordedRequest {
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        user_agent: headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    });

    let Some(canned) = routes.responses.get(uri.path()) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let mut response = (
        canned.status,
        [(header::CONTENT_TYPE, "application/geo+json")],
        canned.body.clone(),
    )
        .into_response();
    if let Some(location) = &canned.location {
        if let Ok(value) = HeaderValue::from_str(location) {
            response.headers_mut().insert(header::LOCATION, value);
        }
    }
    response
}

/// An address nothing is listening on
pub async fn closed_address() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn points_body(base: &str) -> Value {
    json!({
        "properties": {
            "gridId": "TOP",
            "gridX": 31,
            "gridY": 80,
            "forecast": format!("{base}{FORECAST_PATH}"),
            "forecastHourly": format!("{base}{HOURLY_PATH}"),
            "relativeLocation": {
                "properties": { "city": "Linn", "state": "KS" }
            }
        }
    })
}

pub fn periods_body(count: usize) -> Value {
    let periods: Vec<Value> = (1..=count)
        .map(|number| {
            json!({
                "number": number,
                "name": format!("Period {number}"),
                "startTime": "2024-07-01T06:00:00-05:00",
                "endTime": "2024-07-01T18:00:00-05:00",
                "isDaytime": true,
                "temperature": 80,
                "temperatureUnit": "F",
                "windSpeed": "10 mph",
                "windDirection": "SW",
                "shortForecast": "Mostly Sunny",
                "detailedForecast": "Mostly sunny, with a high near 80."
            })
        })
        .collect();

    json!({ "properties": { "periods": periods } })
}

pub fn alerts_body(features: Vec<Value>) -> Value {
    json!({ "type": "FeatureCollection", "features": features })
}

pub fn alert_feature(event: &str, severity: &str) -> Value {
    json!({
        "type": "Feature",
        "properties": {
            "event": event,
            "headline": format!("{event} issued by NWS Topeka KS"),
            "description": format!("{event} in effect."),
            "severity": severity,
            "urgency": "Expected",
            "onset": "2024-07-01T12:00:00-05:00",
            "expires": "2024-07-01T20:00:00-05:00",
            "areaDesc": "Washington; Marshall"
        }
    })
}
