//! Failure model shared by every API surface of the identity provider
//!
//! Handlers raise [`Failure`]s; the dispatcher turns them into the response
//! contract of the surface that served the request.

#![allow(clippy::must_use_candidate)]

pub mod dto;
pub mod error_codes;
mod failure;
mod messages;

pub use dto::{ErrorEntry, OAuthError, ResponseWrapper};
pub use failure::{Failure, FieldError, IdpError, RaisedFailure, Violation};
pub use messages::{CatalogError, MessageCatalog, MessageResolver};
