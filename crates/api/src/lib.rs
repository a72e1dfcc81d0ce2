//! HTTP API: routing, request/response mapping, and service bootstrap glue.
//!
//! Entity ids are supplied by the client. `POST /entities` with an id that is
//! already stored replaces the previous record rather than failing.

pub mod app;
pub mod config;
pub mod middleware;
