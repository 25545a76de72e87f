/// Maps domain errors and handler panics to JSON responses
pub mod error_handling;
/// Fixed response headers sent on every response
pub mod headers;
