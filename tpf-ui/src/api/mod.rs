//! HTTP API handlers for tpf-ui

pub mod health;
pub mod media;
pub mod members;
pub mod submit;
pub mod ui;
