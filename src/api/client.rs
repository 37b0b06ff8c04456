//! HTTP Client
//!
//! Attaches the session token to outgoing requests and runs every failed
//! response through one pipeline. A 401 clears the session and notifies the
//! unauthorized handler before the error reaches the caller.

use std::rc::Rc;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::error::{classify, ApiError, ApiResult};
use crate::config::AppConfig;
use crate::session::Session;

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Rc<AppConfig>,
    session: Session,
    on_unauthorized: Rc<dyn Fn()>,
}

impl ApiClient {
    pub fn new(config: AppConfig, session: Session) -> Self {
        Self {
            http: reqwest::Client::new(),
            config: Rc::new(config),
            session,
            on_unauthorized: Rc::new(|| {}),
        }
    }

    /// Called after the session is cleared on any 401
    pub fn with_unauthorized_handler(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_unauthorized = Rc::new(handler);
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Request carrying the bearer token when one is stored
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.anonymous(method, path);
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Request without credentials (login/signup)
    pub(crate) fn anonymous(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.endpoint(path);
        tracing::debug!(%method, %url, "api request");
        self.http.request(method, url)
    }

    pub(crate) async fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        let response = request.send().await.map_err(|e| {
            tracing::error!(error = %e, "request failed before a response");
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(self.reject(status.as_u16(), &body))
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = self.send(request).await?;
        response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send and discard the success body
    pub(crate) async fn send_empty(&self, request: RequestBuilder) -> ApiResult<()> {
        self.send(request).await.map(|_| ())
    }

    fn reject(&self, status: u16, body: &str) -> ApiError {
        let error = classify(status, body);
        match &error {
            ApiError::Unauthorized(_) => {
                tracing::warn!("unauthorized, clearing session");
                self.session.logout();
                (self.on_unauthorized)();
            }
            ApiError::Forbidden(message) => {
                tracing::warn!(%message, "access forbidden");
            }
            other => {
                tracing::error!(status, error = %other, "api error");
            }
        }
        error
    }
}
