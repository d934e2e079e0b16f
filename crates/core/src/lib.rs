//! Domain types and pure logic for the studio website.
//!
//! Nothing in this crate touches the filesystem or the network. Content
//! loading lives in `atelier-content`; delivery lives in `atelier-notify`.

pub mod category;
pub mod contact;
pub mod error;
pub mod locale;
pub mod messages;
