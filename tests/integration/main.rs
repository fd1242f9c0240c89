//! Integration tests against the public library API.

mod scenarios;
mod service;
