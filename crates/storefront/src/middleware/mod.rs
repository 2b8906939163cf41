//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, HTTP transaction)
//! 2. `TraceLayer` (request span)
//! 3. Request ID (recorded in the span, Sentry scope and response)
//! 4. Security headers (CSP, framing, referrer, permissions)

pub mod request_id;
pub mod security_headers;

pub use request_id::{RequestId, request_id_middleware};
pub use security_headers::security_headers_middleware;
