//! # pickx API
//!
//! REST surface for the pickx recommendation engine. The presentation layer
//! consumes these endpoints and maps item identifiers to display assets;
//! the API only guarantees identifier stability.

pub mod rest;

pub use rest::RestApi;
