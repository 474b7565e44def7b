//! Error types for graph view binding and checked queries

use thiserror::Error;

/// Errors raised while binding a view or by the checked (`try_*`) queries
///
/// A lookup miss in [`edge_between`](crate::GraphView::edge_between) is not an
/// error; it is reported as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ViewError {
    /// A bound array's length disagrees with the declared counts
    #[error("{array} has length {actual}, expected {expected}")]
    SizeMismatch {
        /// Which array was rejected
        array: &'static str,
        /// Length implied by the declared counts
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },

    /// `offsets[position]` does not hold the required boundary value
    #[error("offsets[{position}] is {actual}, expected {expected}")]
    OffsetBoundary {
        /// Offset position (0 or the last one)
        position: usize,
        /// Required value (0 or nnz)
        expected: usize,
        /// Value found
        actual: usize,
    },

    /// A raw-pointer binding was handed a null pointer
    #[error("{array} pointer is null")]
    NullPointer {
        /// Which array was null
        array: &'static str,
    },

    /// Vertex id outside `[0, bound)`
    #[error("vertex {vertex} out of range (bound {bound})")]
    VertexOutOfRange {
        /// Offending vertex id
        vertex: usize,
        /// Exclusive upper bound
        bound: usize,
    },

    /// Edge id outside `[0, bound)`
    #[error("edge {edge} out of range (bound {bound})")]
    EdgeOutOfRange {
        /// Offending edge id
        edge: usize,
        /// Exclusive upper bound
        bound: usize,
    },

    /// `offsets[vertex + 1] < offsets[vertex]`
    #[error("offsets decrease after vertex {vertex}")]
    NonMonotonicOffsets {
        /// Vertex whose segment end precedes its start
        vertex: usize,
    },

    /// `indices[edge]` is not a valid vertex id
    #[error("indices[{edge}] = {value} out of range (bound {bound})")]
    IndexOutOfRange {
        /// Edge id holding the bad entry
        edge: usize,
        /// Entry found
        value: usize,
        /// Exclusive upper bound
        bound: usize,
    },

    /// A segment of `indices` is not sorted ascending
    #[error("segment of vertex {vertex} is unsorted at edge {edge}")]
    UnsortedSegment {
        /// Vertex owning the segment
        vertex: usize,
        /// First edge id that is smaller than its predecessor
        edge: usize,
    },
}

/// Result alias for view operations
pub type Result<T, E = ViewError> = core::result::Result<T, E>;
