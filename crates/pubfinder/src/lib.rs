//! Pubfinder - academic publication search and category prediction.
//!
//! A Dioxus front end for two external services: a full-text search index
//! of publications and a text classifier. The search ranking and the model
//! both live server-side. This crate renders their answers.
//!
//! # Platform Support
//!
//! - **Web (WASM)**: default feature, requests go through the browser's `fetch`
//! - **Desktop**: `--features desktop`, requests go through reqwest/hyper
//!
//! State handling, wire formats and the HTTP client live in `pubfinder-core`.

#![forbid(unsafe_code)]

pub mod components;
