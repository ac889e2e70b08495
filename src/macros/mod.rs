//! Declarative macros for catch-this.

// attempt! is exported at the crate root via #[macro_export]
#[macro_use]
mod attempt;
