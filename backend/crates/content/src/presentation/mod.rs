//! Presentation Layer
//!
//! HTTP handlers, query parameters and the router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use router::{content_router, content_router_generic};
