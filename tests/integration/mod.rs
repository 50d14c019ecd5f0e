//! Integration tests for roast-gateway

pub mod gemini_client_tests;
pub mod pipeline_tests;
pub mod roast_route_tests;
