//! Integration tests against an in-process stub of the member REST backend.
//!
//! 1. HTTP gateway request shape and status interpretation
//! 2. Editor flows end to end over HTTP

pub mod editor_flow_tests;
pub mod helpers;
pub mod http_gateway_tests;
