//! Content models, one module per record kind.

pub mod press;
pub mod project;
pub mod settings;
