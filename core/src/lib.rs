//! API client core for the heroes service.
//!
//! # Overview
//! `HeroClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network (host-does-IO pattern). `HeroService` drives
//! it over a `Transport`, writes one line per completed request to a shared
//! `MessageService`, and resolves failures to a fallback `Outcome` instead
//! of an error.
//!
//! # Design
//! - `HeroClient` is stateless; it holds only the collection URL.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Collaborators are passed to `HeroService::new`; there is no global
//!   registry.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod messages;
pub mod outcome;
pub mod service;
pub mod transport;
pub mod types;

pub use client::HeroClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use messages::MessageService;
pub use outcome::Outcome;
pub use service::HeroService;
pub use transport::{Transport, UreqTransport};
pub use types::{Hero, HeroRef, NewHero};
