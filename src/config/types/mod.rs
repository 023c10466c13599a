//! Configuration utility types.
//!
//! | Module   | Purpose                                        |
//! |----------|------------------------------------------------|
//! | `error`  | Loader errors and the aggregated report        |
//! | `field`  | Field paths into the declaration               |

mod error;
mod field;

pub use error::{ConfigError, Diagnostic, Rule, ValidationReport, Warning, print_warnings};
pub use field::FieldPath;
