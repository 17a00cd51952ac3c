//! Portfolio domain types shared by the folio crates
//!
//! This crate provides the models the catalog pipeline works over:
//! - Publication: a paper, chapter, report or manuscript in progress
//! - PublicationKind: the configurable category tag (`journal`, `conference`, ...)
//! - PublicationStatus: workflow tag used by the in-progress filter
//! - Validation: checks applied before a record enters a catalog

pub mod kind;
pub mod publication;
pub mod validation;

pub use kind::*;
pub use publication::*;
pub use validation::*;
