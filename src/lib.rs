//! trueno-graph-view: non-owning CSR/CSC graph views
//!
//! # Overview
//!
//! trueno-graph-view interprets externally owned sparse arrays as a graph
//! without copying them. The same [`GraphView`] queries work over compressed
//! sparse row (CSR) and compressed sparse column (CSC) encodings, so a
//! traversal is written once and monomorphized for either format.
//!
//! # Quick Start
//!
//! ```
//! use trueno_graph_view::{CsrView, GraphView};
//!
//! // 0 → 1, 0 → 2, 1 → 0, 3 → 0, 3 → 2
//! let offsets = vec![0_u32, 2, 3, 3, 5];
//! let indices = vec![1_u32, 2, 0, 0, 2];
//! let values = vec![10.0_f32, 20.0, 30.0, 40.0, 50.0];
//!
//! let graph = CsrView::bind(4, 4, 5, &offsets, &indices, &values)?;
//!
//! // O(1) degree, O(log V) reverse lookup, O(log degree) edge search
//! assert_eq!(graph.number_of_neighbors(0), 2);
//! assert_eq!(graph.source_vertex(4), 3);
//! assert_eq!(graph.edge_between(0, 2), Some(1));
//! assert_eq!(graph.edge_between(2, 0), None);
//! # Ok::<(), trueno_graph_view::ViewError>(())
//! ```
//!
//! # Architecture
//!
//! - **Views**: [`CsrView`] and [`CscView`] borrow offsets / indices / values
//! - **Dispatch**: [`GraphView`] trait (static) and [`SparseGraph`] enum (closed)
//! - **Memory**: [`MemorySpace`] tags and [`BufferSource`] inputs, never allocation
//! - **Storage**: zero-copy binding over Arrow columns (`arrow` feature)
//!
//! Views are `Copy` descriptors; every copy aliases the same arrays. Query
//! methods take `&self`, never allocate and never block, so one view can be
//! shared by any number of threads.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod graph;
pub mod memory;
pub mod search;
pub mod types;

// Arrow column binding (optional, on by default)
#[cfg(feature = "arrow")]
pub mod storage;

// Re-export core types
pub use error::{Result, ViewError};
pub use graph::{CscView, CsrView, EdgeIds, Format, GraphView, SparseGraph};
pub use memory::{BufferSource, Device, Host, MemorySpace, Space};
pub use types::{GraphIndex, VertexPair};

#[cfg(feature = "arrow")]
pub use storage::{csc_from_arrow, csr_from_arrow};
