//! # Photoz Architecture
//!
//! Photoz is a small **photo catalog library**: a bounded, in-memory collection of
//! photo records grouped into albums, with a CLI client on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Loads the store from a backend, dispatches, saves back   │
//! │  - Parses user-facing dates                                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One `run` per operation, returns `Result<CmdResult>`     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - PhotoStore: capacity, identity, ordering, queries        │
//! │  - StorageBackend: FsBackend (JSON), MemBackend (tests)     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward takes plain Rust arguments, returns plain Rust
//! types, and never writes to stdout/stderr. Diagnostics go through `tracing`; the
//! binary decides whether and where they are shown.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`store`]: `PhotoStore` and its storage backends
//! - [`model`]: `Photo` and `PhotoKey`
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;

pub use model::{Photo, PhotoKey};
pub use store::{PhotoStore, Rejection};
