use core::fmt;
use std::collections::BTreeMap;

use bytes::Bytes;
use serde::Serialize;

use crate::error::CodecError;
use crate::headers::{self, HeaderMap};
use crate::status::{reason_phrase, StatusClass};

const DEFAULT_HTTP_VERSION: &str = "HTTP/1.1";

/// Read-mostly view of a complete HTTP response.
///
/// Lookups that miss answer with an empty string, `0` or `false`; nothing
/// here fails. `header` cannot tell an absent header from one holding an
/// empty value, so callers that care pair it with `has_header`.
pub trait Response: Send + Sync {
    fn http_version(&self) -> &str;
    fn status_code(&self) -> u16;
    fn status_message(&self) -> &str;

    /// Case-insensitive header lookup.
    fn header(&self, name: &str) -> &str;
    fn headers(&self) -> &HeaderMap;
    fn has_header(&self, name: &str) -> bool;

    fn body(&self) -> &str;
    fn body_bytes(&self) -> &Bytes;

    /// Exact-case lookup into the cookie mapping, unlike `header`.
    fn set_cookie_value(&self, name: &str) -> &str;
    fn set_cookies(&self) -> &BTreeMap<String, String>;
    fn has_set_cookie(&self, name: &str) -> bool;

    fn raw_response(&self) -> &str;

    /// Renders the response onto the wire from its current fields.
    fn to_http_string(&self) -> String;

    /// Seconds since the Unix epoch at construction.
    fn timestamp(&self) -> u64;
    fn request_id(&self) -> &str;
    fn set_request_id(&mut self, request_id: &str);

    fn content_type(&self) -> &str {
        self.header(headers::CONTENT_TYPE)
    }

    /// `Content-Length` as a number; missing or malformed values read as `0`.
    fn content_length(&self) -> u64 {
        let raw = self.header(headers::CONTENT_LENGTH);
        if raw.is_empty() {
            return 0;
        }
        match raw.trim().parse::<u64>() {
            Ok(length) => length,
            Err(_) => {
                tracing::trace!("Response: ignoring malformed Content-Length '{}'", raw);
                0
            }
        }
    }

    fn location(&self) -> &str {
        self.header(headers::LOCATION)
    }

    fn server(&self) -> &str {
        self.header(headers::SERVER)
    }

    fn date(&self) -> &str {
        self.header(headers::DATE)
    }

    fn last_modified(&self) -> &str {
        self.header(headers::LAST_MODIFIED)
    }

    fn etag(&self) -> &str {
        self.header(headers::ETAG)
    }

    fn cache_control(&self) -> &str {
        self.header(headers::CACHE_CONTROL)
    }

    fn expires(&self) -> &str {
        self.header(headers::EXPIRES)
    }

    fn allow(&self) -> &str {
        self.header(headers::ALLOW)
    }

    fn www_authenticate(&self) -> &str {
        self.header(headers::WWW_AUTHENTICATE)
    }

    fn content_encoding(&self) -> &str {
        self.header(headers::CONTENT_ENCODING)
    }

    fn content_language(&self) -> &str {
        self.header(headers::CONTENT_LANGUAGE)
    }

    fn content_disposition(&self) -> &str {
        self.header(headers::CONTENT_DISPOSITION)
    }

    fn content_range(&self) -> &str {
        self.header(headers::CONTENT_RANGE)
    }

    fn has_body(&self) -> bool {
        !self.body().is_empty()
    }

    fn status_class(&self) -> StatusClass {
        StatusClass::of(self.status_code())
    }

    fn is_success(&self) -> bool {
        self.status_class() == StatusClass::Success
    }

    fn is_redirect(&self) -> bool {
        self.status_class() == StatusClass::Redirect
    }

    fn is_client_error(&self) -> bool {
        self.status_class() == StatusClass::ClientError
    }

    fn is_server_error(&self) -> bool {
        self.status_class() == StatusClass::ServerError
    }

    // Media type checks are plain substring tests on the lower-cased
    // Content-Type; structured suffixes such as `+json` do not count.

    fn is_json(&self) -> bool {
        self.content_type().to_ascii_lowercase().contains("application/json")
    }

    fn is_html(&self) -> bool {
        self.content_type().to_ascii_lowercase().contains("text/html")
    }

    fn is_xml(&self) -> bool {
        let content_type = self.content_type().to_ascii_lowercase();
        content_type.contains("application/xml") || content_type.contains("text/xml")
    }

    fn is_text(&self) -> bool {
        self.content_type().to_ascii_lowercase().contains("text/")
    }
}

/// Owned handle returned by [`get_response`].
pub type ResponsePtr = Box<dyn Response>;

/// Builds a minimal `200 OK` response for `request_id`.
///
/// Returns `None` when `request_id` is empty.
pub fn get_response(request_id: &str, body: &str) -> Option<ResponsePtr> {
    if request_id.is_empty() {
        tracing::debug!("Response: rejecting response without a request id");
        return None;
    }
    Some(Box::new(HttpResponse::new(request_id, body)))
}

/// The concrete response model.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    http_version: String,
    status_code: u16,
    status_message: String,
    headers: HeaderMap,
    set_cookies: BTreeMap<String, String>,
    body: String,
    body_bytes: Bytes,
    timestamp: u64,
    raw_response: String,
    request_id: String,
}

static_assertions::assert_impl_all!(HttpResponse: Send, Sync, Clone);

fn now_epoch_seconds() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp()).unwrap_or(0)
}

impl HttpResponse {
    /// `HTTP/1.1 200 OK`. A non-empty body gets `Content-Type: text/plain`
    /// and a matching `Content-Length`; an empty body gets neither.
    pub fn new(request_id: &str, body: &str) -> Self {
        let mut header_map = HeaderMap::new();
        if !body.is_empty() {
            header_map.insert(headers::CONTENT_TYPE, "text/plain");
            header_map.insert(headers::CONTENT_LENGTH, body.len().to_string());
        }

        Self {
            http_version: DEFAULT_HTTP_VERSION.to_string(),
            status_code: 200,
            status_message: reason_phrase(200).to_string(),
            headers: header_map,
            set_cookies: BTreeMap::new(),
            body: body.to_string(),
            body_bytes: Bytes::copy_from_slice(body.as_bytes()),
            timestamp: now_epoch_seconds(),
            raw_response: String::new(),
            request_id: request_id.to_string(),
        }
    }

    /// Takes the caller's status line and headers as given, then fills in
    /// `Content-Length` when absent and `Content-Type: application/json`
    /// when absent and the body is non-empty. The status message is used
    /// verbatim, not looked up from the code.
    pub fn with_parts(
        request_id: &str,
        status_code: u16,
        status_message: &str,
        mut header_map: HeaderMap,
        body: &str,
    ) -> Self {
        if !header_map.contains(headers::CONTENT_LENGTH) {
            header_map.insert(headers::CONTENT_LENGTH, body.len().to_string());
        }
        if !header_map.contains(headers::CONTENT_TYPE) && !body.is_empty() {
            header_map.insert(headers::CONTENT_TYPE, "application/json");
        }

        Self {
            http_version: DEFAULT_HTTP_VERSION.to_string(),
            status_code,
            status_message: status_message.to_string(),
            headers: header_map,
            set_cookies: BTreeMap::new(),
            body: body.to_string(),
            body_bytes: Bytes::copy_from_slice(body.as_bytes()),
            timestamp: now_epoch_seconds(),
            raw_response: String::new(),
            request_id: request_id.to_string(),
        }
    }

    /// Serializes `entity` as the JSON body of a response with `status_code`.
    pub fn from_json<T>(request_id: &str, status_code: u16, entity: &T) -> Result<Self, CodecError>
    where
        T: Serialize + ?Sized,
    {
        let body = serde_json::to_string(entity)?;
        Ok(Self::with_parts(
            request_id,
            status_code,
            reason_phrase(status_code),
            HeaderMap::new(),
            &body,
        ))
    }

    /// Adds a cookie. `value` is the full `Set-Cookie` header value; `name`
    /// is only the lookup key and is not rendered.
    pub fn with_set_cookie(mut self, name: &str, value: &str) -> Self {
        self.set_cookies.insert(name.to_string(), value.to_string());
        self
    }

    /// Sets the code and replaces the message from the status table.
    pub fn set_status_code(&mut self, code: u16) {
        self.status_code = code;
        self.status_message = reason_phrase(code).to_string();
    }

    pub fn set_status_message(&mut self, message: &str) {
        self.status_message = message.to_string();
    }

    pub fn set_header(&mut self, name: &str, value: &str) {
        self.headers.insert(name, value);
    }

    pub fn set_content_type(&mut self, content_type: &str) {
        self.headers.insert(headers::CONTENT_TYPE, content_type);
    }

    fn write_wire<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        write!(
            out,
            "{} {} {}\r\n",
            self.http_version, self.status_code, self.status_message
        )?;

        for (name, value) in &self.headers {
            write!(out, "{}: {}\r\n", name, value)?;
        }

        for value in self.set_cookies.values() {
            write!(out, "{}: {}\r\n", headers::SET_COOKIE, value)?;
        }

        // Headers may have been edited since construction.
        if self.has_body() && !self.has_header(headers::CONTENT_LENGTH) {
            write!(out, "{}: {}\r\n", headers::CONTENT_LENGTH, self.body.len())?;
        }

        out.write_str("\r\n")?;
        out.write_str(&self.body)
    }
}

impl Response for HttpResponse {
    fn http_version(&self) -> &str {
        &self.http_version
    }

    fn status_code(&self) -> u16 {
        self.status_code
    }

    fn status_message(&self) -> &str {
        &self.status_message
    }

    fn header(&self, name: &str) -> &str {
        self.headers.get(name).unwrap_or("")
    }

    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn has_header(&self, name: &str) -> bool {
        self.headers.contains(name)
    }

    fn body(&self) -> &str {
        &self.body
    }

    fn body_bytes(&self) -> &Bytes {
        &self.body_bytes
    }

    fn set_cookie_value(&self, name: &str) -> &str {
        self.set_cookies.get(name).map(String::as_str).unwrap_or("")
    }

    fn set_cookies(&self) -> &BTreeMap<String, String> {
        &self.set_cookies
    }

    fn has_set_cookie(&self, name: &str) -> bool {
        self.set_cookies.contains_key(name)
    }

    fn raw_response(&self) -> &str {
        &self.raw_response
    }

    fn to_http_string(&self) -> String {
        self.to_string()
    }

    fn timestamp(&self) -> u64 {
        self.timestamp
    }

    fn request_id(&self) -> &str {
        &self.request_id
    }

    fn set_request_id(&mut self, request_id: &str) {
        self.request_id = request_id.to_string();
    }
}

impl fmt::Display for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_wire(f)
    }
}
