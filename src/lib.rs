// Library target exists so integration tests can import the session, content
// and store types. The binary entry point is main.rs, which re-declares the
// module tree; code only exercised through the binary is allowed to look dead
// from the lib side.
#![allow(dead_code)]

// Public: used directly by integration tests
pub mod certificate;
pub mod challenge;
pub mod config;
pub mod content;
pub mod session;
pub mod store;

// Private: required transitively (won't compile without them)
mod app;
mod event;
mod ui;
