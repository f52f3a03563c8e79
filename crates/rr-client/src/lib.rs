//! `rr-client` — the request boundary to the routing backend.
//!
//! Everything that can go wrong with the network or the payload is caught
//! here and reduced to a [`ClientError`]; the reveal engine only ever sees a
//! validated [`RouteSet`].  There is exactly one attempt per query, bounded by
//! the configured timeout.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`config`] | `ClientConfig` (base URL, timeout; env overrides)          |
//! | [`wire`]   | JSON request/response shapes                               |
//! | [`parse`]  | `parse_response`, `RouteSet` — pure payload validation     |
//! | [`client`] | `RoutingClient` (blocking `reqwest`)                       |
//! | [`error`]  | `ClientError`, `ClientResult<T>`, `user_message`           |

pub mod client;
pub mod config;
pub mod error;
pub mod parse;
pub mod wire;


pub use client::RoutingClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use parse::{RouteSet, parse_error_body, parse_response};
pub use wire::RouteQuery;
