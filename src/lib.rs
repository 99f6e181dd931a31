//! Fetching GitHub repository and release metadata
//!
//! A request is executed against the API, its response classified into a
//! closed set of outcomes, and — on success — the JSON body decoded into a
//! typed model. Releases additionally support version comparison and
//! indexed asset downloads.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │   Request   │────▶│  Classifier  │────▶│    Codec    │
//! │  (execute)  │     │  (outcome)   │     │  (decode)   │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        │                                        │
//!        ▼                                        ▼
//! ┌─────────────┐                          ┌─────────────┐
//! │    Pool     │                          │    Model    │
//! │ (transport) │                          │ (repo/rel)  │
//! └─────────────┘                          └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`http`]: request execution and response classification
//! - [`codec`]: JSON decoding with the field-presence policy
//! - [`model`]: immutable repository and release models
//! - [`version`]: relational comparison of release tags
//! - [`download`]: streamed asset downloads by index
//! - [`pool`]: explicit-lifecycle executor pool and default transport
//! - [`config`]: ambient configuration
//! - [`url`]: API endpoint construction
//! - [`error`]: error types for every layer

pub mod codec;
pub mod config;
pub mod download;
pub mod error;
pub mod http;
pub mod model;
pub mod pool;
pub mod url;
pub mod version;
