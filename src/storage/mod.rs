//! Storage adapters
//!
//! Bind graph views directly over columnar buffers owned elsewhere.

pub mod arrow;

pub use self::arrow::{batch_column, csc_from_arrow, csr_from_arrow};
