//! Scripted transport for catalogue-client tests.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

#[derive(Debug, Clone)]
enum Reply {
    Respond(u16, Bytes),
    Fail(HttpError),
}

impl Reply {
    fn into_result(self) -> Result<Response, HttpError> {
        match self {
            Reply::Respond(status, body) => Ok(Response::new(status, body)),
            Reply::Fail(err) => Err(err),
        }
    }
}

/// Transport whose replies are scripted per exact URL, with an optional
/// catch-all. Every request is logged with the headers it carried.
///
/// ```ignore
/// let http = MockHttpClient::new();
/// http.respond("https://pokeapi.co/api/v2/pokemon/25", 200, r#"{"id":25}"#);
/// http.fail("https://pokeapi.co/api/v2/ability/9/", HttpError::Timeout("30s".into()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    replies: Arc<Mutex<HashMap<String, Reply>>>,
    fallback: Arc<Mutex<Option<Reply>>>,
    requests: Arc<Mutex<Vec<(String, Headers)>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, url: &str, status: u16, body: impl Into<Bytes>) {
        self.script(url, Reply::Respond(status, body.into()));
    }

    pub fn fail(&self, url: &str, err: HttpError) {
        self.script(url, Reply::Fail(err));
    }

    /// Reply for any URL without a script of its own.
    pub fn respond_to_all(&self, status: u16, body: impl Into<Bytes>) {
        *self.fallback.lock().unwrap() = Some(Reply::Respond(status, body.into()));
    }

    pub fn fail_all(&self, err: HttpError) {
        *self.fallback.lock().unwrap() = Some(Reply::Fail(err));
    }

    /// URLs requested so far, in order.
    pub fn requested_urls(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(url, _)| url.clone())
            .collect()
    }

    /// Headers sent with the most recent request.
    pub fn last_headers(&self) -> Option<Headers> {
        self.requests
            .lock()
            .unwrap()
            .last()
            .map(|(_, headers)| headers.clone())
    }

    fn script(&self, url: &str, reply: Reply) {
        self.replies.lock().unwrap().insert(url.to_string(), reply);
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.requests
            .lock()
            .unwrap()
            .push((url.to_string(), headers.clone()));

        let scripted = self.replies.lock().unwrap().get(url).cloned();
        let reply = scripted.or_else(|| self.fallback.lock().unwrap().clone());
        match reply {
            Some(reply) => reply.into_result(),
            None => Err(HttpError::Other(format!("no scripted reply for {}", url))),
        }
    }
}
