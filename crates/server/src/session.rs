//! Session resolution at the HTTP boundary.
//!
//! Handlers resolve the session from the request headers and hand the optional
//! cookie instruction back alongside their result; [`WithSession`] applies it to
//! whatever response comes out, error responses included.

use axum::{
    http::{
        HeaderMap, HeaderValue,
        header::{COOKIE, SET_COOKIE},
    },
    response::{IntoResponse, Response},
};
use searcher_core::{ResolvedSession, SESSION_COOKIE_NAME, SessionCookie, session};

/// Value of the session cookie, if the request carries one.
///
/// Looks through every `Cookie` header; when the name repeats, the last value
/// wins, as Starlette's cookie parser does.
pub fn cookie_value(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .rev()
        .find(|(name, _)| *name == SESSION_COOKIE_NAME)
        .map(|(_, value)| value.trim_matches('"'))
}

/// Resolve the session for a request.
pub fn resolve(headers: &HeaderMap) -> ResolvedSession {
    session::resolve(cookie_value(headers))
}

/// A response paired with an optional `Set-Cookie` instruction.
#[derive(Debug)]
pub struct WithSession<R> {
    cookie: Option<SessionCookie>,
    inner: R,
}

impl<R> WithSession<R> {
    pub fn new(cookie: Option<SessionCookie>, inner: R) -> Self {
        Self { cookie, inner }
    }
}

impl<R: IntoResponse> IntoResponse for WithSession<R> {
    fn into_response(self) -> Response {
        let mut response = self.inner.into_response();

        if let Some(cookie) = self.cookie {
            match HeaderValue::from_str(&cookie.header_value()) {
                Ok(value) => {
                    response.headers_mut().append(SET_COOKIE, value);
                }
                Err(e) => tracing::warn!("failed to encode session cookie: {}", e),
            }
        }

        response
    }
}
