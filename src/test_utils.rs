// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use http::{Request, Response};
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::ByteString;
use kube::api::ObjectMeta;
use kube::client::Body;
use kube::Client;
use tower::Service;

/// A mock HTTP service that answers GET requests from predefined
/// responses, keyed by exact request path.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<String, (u16, String)>>>,
    calls: Arc<AtomicUsize>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), (status, body.to_string()));
        self
    }

    /// Number of requests served so far, including unmatched ones
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let path = req.uri().path().to_string();
        let response = self.responses.lock().unwrap().get(&path).cloned();

        Box::pin(async move {
            match response {
                Some((status, body)) => Ok(Response::builder()
                    .status(status)
                    .header("content-type", "application/json")
                    .body(Body::from(body.into_bytes()))
                    .unwrap()),
                None => {
                    // Default 404 for unmatched requests
                    let body = r#"{"kind":"Status","apiVersion":"v1","status":"Failure","message":"not found","reason":"NotFound","code":404}"#;
                    Ok(Response::builder()
                        .status(404)
                        .header("content-type", "application/json")
                        .body(Body::from(body.as_bytes().to_vec()))
                        .unwrap())
                }
            }
        })
    }
}

/// Create an APIGroupList JSON response listing the given group names
pub fn api_group_list_json(names: &[&str]) -> String {
    let groups: Vec<_> = names
        .iter()
        .map(|name| {
            serde_json::json!({
                "name": name,
                "versions": [{
                    "groupVersion": format!("{}/v1", name),
                    "version": "v1"
                }],
                "preferredVersion": {
                    "groupVersion": format!("{}/v1", name),
                    "version": "v1"
                }
            })
        })
        .collect();

    serde_json::json!({
        "kind": "APIGroupList",
        "apiVersion": "v1",
        "groups": groups
    })
    .to_string()
}

/// Create a Secret JSON response with the given string data entries
pub fn secret_json(name: &str, namespace: &str, entries: &[(&str, &str)]) -> String {
    let data = entries
        .iter()
        .map(|(k, v)| (k.to_string(), ByteString(v.as_bytes().to_vec())))
        .collect();

    let secret = Secret {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        },
        data: Some(data),
        type_: Some("Opaque".to_string()),
        ..Default::default()
    };

    serde_json::to_string(&secret).unwrap()
}
