//! A throwaway local stand-in for the upstream API, used by tests.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::Router;
use serde_json::{json, Value};

const API_PREFIX: &str = "/api";

type Routes = HashMap<String, (StatusCode, String)>;

/// Canned responses keyed by request path. Unknown paths answer 404.
#[derive(Default)]
pub(crate) struct MockApi {
    routes: Routes,
}

impl MockApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn json(self, path: &str, body: Value) -> Self {
        self.respond(path, StatusCode::OK, body.to_string())
    }

    pub(crate) fn raw(self, path: &str, body: &str) -> Self {
        self.respond(path, StatusCode::OK, body.to_string())
    }

    pub(crate) fn status(self, path: &str, status: u16) -> Self {
        let status = StatusCode::from_u16(status).unwrap();
        self.respond(path, status, String::new())
    }

    fn respond(mut self, path: &str, status: StatusCode, body: String) -> Self {
        self.routes
            .insert(format!("{API_PREFIX}{path}"), (status, body));
        self
    }

    /// Serve the routes on an ephemeral port and return the API base url.
    pub(crate) async fn start(self) -> String {
        let app = Router::new()
            .fallback(answer)
            .with_state(Arc::new(self.routes));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}{API_PREFIX}")
    }
}

async fn answer(State(routes): State<Arc<Routes>>, uri: Uri) -> (StatusCode, String) {
    routes
        .get(uri.path())
        .cloned()
        .unwrap_or((StatusCode::NOT_FOUND, String::new()))
}

/// A fixture entry in the shape the fixture endpoint returns.
pub(crate) fn fixture(id: &str, is_live: bool, commentators: &[&str]) -> Value {
    json!({
        "id": id,
        "name": format!("Match {id}"),
        "is_live": is_live,
        "tournament": {
            "name": "V.League 1",
            "logo": format!("https://cdn.example/{id}.png"),
        },
        "commentators": commentators
            .iter()
            .map(|name| json!({ "name": name }))
            .collect::<Vec<_>>(),
    })
}

/// A meta response carrying one play url per quality label.
pub(crate) fn meta(id: &str, qualities: &[&str]) -> Value {
    json!({
        "data": {
            "id": id,
            "play_urls": qualities
                .iter()
                .map(|q| json!({ "name": q, "url": format!("https://live.example/{id}/{q}.m3u8") }))
                .collect::<Vec<_>>(),
        }
    })
}

/// A client that never routes through a proxy from the environment.
pub(crate) fn http_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
