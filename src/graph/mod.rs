//! Graph views
//!
//! CSR and CSC views over borrowed arrays, the [`GraphView`] query trait they
//! share, and the [`SparseGraph`] sum type over both.

mod compressed;
pub mod csc;
pub mod csr;
mod variant;
mod view;

pub use csc::CscView;
pub use csr::CsrView;
pub use variant::SparseGraph;
pub use view::{EdgeIds, Format, GraphView};
