//! Request construction and bearer-token attachment.
//!
//! An [`ApiRequest`] is a transport-agnostic description of one HTTP call.
//! The embedder turns it into an actual request with whatever client it
//! uses; this layer only decides what the request must contain.

use serde_json::Value;

/// HTTP methods the backend contract uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// Paths that must never carry an `Authorization` header.
///
/// The OAuth callbacks run before a token exists; the public form
/// submission and business-type lookup are reachable without a session.
const EXCLUDED_FROM_AUTH: &[&str] = &[
    "/auth/google-callback",
    "/auth/microsoft-callback",
    "/application/submit-form",
    "/visualdata/type-of-business",
];

/// A fully described outbound request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        let mut req = Self::new(Method::Post, path);
        req.body = Some(body);
        req
    }

    pub fn patch(path: impl Into<String>, body: Value) -> Self {
        let mut req = Self::new(Method::Patch, path);
        req.body = Some(body);
        req
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn with_query_pairs(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Whether this request's path is on the no-auth exclusion list.
    pub fn is_auth_excluded(&self) -> bool {
        EXCLUDED_FROM_AUTH
            .iter()
            .any(|excluded| self.path.contains(excluded))
    }

    /// Attach `Authorization: Bearer <token>` unless the path is excluded.
    ///
    /// With no token, or on an excluded path, the request is returned
    /// unmodified.
    pub fn with_bearer(mut self, token: Option<&str>) -> Self {
        if let Some(token) = token
            && !self.is_auth_excluded()
        {
            self.headers
                .push(("Authorization".to_string(), format!("Bearer {token}")));
        }
        self
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// The attached `Authorization` header value, if any.
    pub fn authorization(&self) -> Option<&str> {
        self.header("Authorization")
    }
}
