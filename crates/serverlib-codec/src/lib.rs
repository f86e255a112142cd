//! HTTP response model and its canonical wire rendering.
//!
//! ```
//! use serverlib_codec::{get_response, Response};
//!
//! let response = get_response("req-1", "hello").unwrap();
//! assert!(response.is_success());
//! assert!(response.is_text());
//! assert_eq!(response.content_length(), 5);
//! assert!(response.to_http_string().starts_with("HTTP/1.1 200 OK\r\n"));
//!
//! assert!(get_response("", "hello").is_none());
//! ```

pub mod error;
pub mod headers;
pub mod response;
pub mod status;

pub use error::CodecError;
pub use headers::HeaderMap;
pub use response::{get_response, HttpResponse, Response, ResponsePtr};
pub use status::{reason_phrase, StatusClass};
