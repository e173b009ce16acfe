//! Core of the member administration client.
//!
//! Provides the member model, field validation, row edit state,
//! the notification surface, and the persisted session store.

pub mod config;
pub mod error;
pub mod model;
pub mod notification;
pub mod row;
pub mod session;
pub mod theme;
pub mod validation;
pub mod viewer;

pub use error::{AdminError, Result};
pub use model::{MemberRecord, MemberSummary, Role, RowField, RowValues};
