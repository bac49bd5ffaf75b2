//! Central translation of request failures into surface-specific responses
//!
//! A request's path picks one of three response contracts ([`Surface`]);
//! each contract has its own encoder. [`ErrorDispatcher`] ties the two
//! together and is the only entry point callers need.

#![allow(clippy::must_use_candidate)]

pub mod challenge;
mod dispatcher;
pub mod internal;
pub mod oauth;
mod surface;

pub use dispatcher::{ErrorDispatcher, ErrorResponse};
pub use idp_config::Surface;
pub use surface::SurfaceClassifier;
