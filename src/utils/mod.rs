//! Small shared helpers.

pub mod hash;
