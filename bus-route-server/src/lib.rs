//! Bus route direct-connection server.
//!
//! Answers one question: does a single bus route call at one station and
//! later at another? Route data is loaded once at startup into an in-memory
//! index and queried over HTTP.

pub mod config;
pub mod domain;
pub mod index;
pub mod loader;
pub mod service;
pub mod source;
pub mod web;
