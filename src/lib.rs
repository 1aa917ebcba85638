//! # Hypermedia Recipe
//!
//! > **A Recipe for Hypermedia APIs in Rust.**
//!
//! A sample blog (people, blog postings and comments) served as HAL, JSON-LD or
//! Problem Details documents, built on the workspace crates:
//!
//! - [`hypermedia_framework`]: describes model types and writes pages, single
//!   models and errors through pluggable mappers.
//! - [`hypermedia_formats`]: the HAL, JSON-LD and Problem Details mappers.
//!
//! ## Module Tour
//!
//! ### 1. The Data ([`model`], [`store`])
//! Plain structs with no knowledge of hypermedia, kept in an in-memory
//! [`BlogStore`](store::BlogStore).
//!
//! ### 2. The Description ([`resources`])
//! One representor per model type. Fields, links, the embeddable `creator`
//! of a posting, the bidirectional `author` of a comment and the related
//! collections are all declared here.
//!
//! ### 3. The Orchestrator ([`runtime`])
//! [`BlogSystem`](runtime::BlogSystem) wires store, registry and formats, answers
//! requests with a [`Response`](runtime::Response), and turns failures into error
//! documents ([`error`]).
//!
//! ## Running the Demo
//!
//! ```bash
//! # Run with info logs
//! RUST_LOG=info cargo run
//!
//! # Serve URLs for another host
//! HYPERMEDIA_SERVER_URL=https://blog.example.com cargo run
//! ```

pub mod error;
pub mod model;
pub mod resources;
pub mod runtime;
pub mod store;
