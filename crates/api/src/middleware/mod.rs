//! HTTP middleware stack.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. Request ID (accept or generate `x-request-id`)
//! 3. `TraceLayer` (one `http_request` span per request)
//!
//! The request ID runs outside the trace span so the span can record it.

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
