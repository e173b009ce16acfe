//! REST persistence and inline editing for the member admin table.
//!
//! `MemberEditor` drives a row from edit through validation to the
//! gateway and reports each outcome on the notification surface.

pub mod editor;
pub mod gateway;
pub mod http;
pub mod listing;

pub use editor::MemberEditor;
pub use gateway::{classify_status, MemberGateway};
pub use http::HttpGateway;
