//! Closed sum type over the supported formats
//!
//! Lets a caller hold "a graph in either encoding" without a trait object:
//! every query is a `match` on the tag followed by a direct call.

use super::{CscView, CsrView, EdgeIds, Format, GraphView};
use crate::memory::{Host, MemorySpace};
use crate::types::GraphIndex;

/// A CSR or CSC view behind one type
///
/// # Example
///
/// ```
/// use trueno_graph_view::{CscView, CsrView, GraphView, SparseGraph};
///
/// let (ro, ci, rv) = ([0_u32, 1, 1], [1_u32], [2.5_f32]);
/// let (co, ri, cv) = ([0_u32, 0, 1], [0_u32], [2.5_f32]);
///
/// let graphs: [SparseGraph<'_>; 2] = [
///     CsrView::bind(2, 2, 1, &ro, &ci, &rv).unwrap().into(),
///     CscView::bind(2, 2, 1, &co, &ri, &cv).unwrap().into(),
/// ];
/// for graph in &graphs {
///     assert_eq!(graph.edge_between(0, 1), Some(0));
/// }
/// ```
#[derive(Clone, Copy)]
pub enum SparseGraph<'a, V = u32, E = u32, W = f32, S = Host> {
    /// Row-segmented encoding
    Csr(CsrView<'a, V, E, W, S>),
    /// Column-segmented encoding
    Csc(CscView<'a, V, E, W, S>),
}

impl<'a, V, E, W, S> SparseGraph<'a, V, E, W, S> {
    /// The CSR view, if this is one
    #[must_use]
    pub const fn as_csr(&self) -> Option<&CsrView<'a, V, E, W, S>> {
        match self {
            Self::Csr(view) => Some(view),
            Self::Csc(_) => None,
        }
    }

    /// The CSC view, if this is one
    #[must_use]
    pub const fn as_csc(&self) -> Option<&CscView<'a, V, E, W, S>> {
        match self {
            Self::Csr(_) => None,
            Self::Csc(view) => Some(view),
        }
    }
}

macro_rules! dispatch {
    ($self:ident, $view:ident => $body:expr) => {
        match $self {
            SparseGraph::Csr($view) => $body,
            SparseGraph::Csc($view) => $body,
        }
    };
}

impl<V, E, W, S> GraphView for SparseGraph<'_, V, E, W, S>
where
    V: GraphIndex,
    E: GraphIndex,
    W: Copy,
    S: MemorySpace,
{
    type Vertex = V;
    type Edge = E;
    type Weight = W;

    #[inline]
    fn format(&self) -> Format {
        dispatch!(self, view => view.format())
    }

    #[inline]
    fn number_of_rows(&self) -> V {
        dispatch!(self, view => view.number_of_rows())
    }

    #[inline]
    fn number_of_columns(&self) -> V {
        dispatch!(self, view => view.number_of_columns())
    }

    #[inline]
    fn number_of_nonzeros(&self) -> E {
        dispatch!(self, view => view.number_of_nonzeros())
    }

    #[inline]
    fn number_of_vertices(&self) -> V {
        dispatch!(self, view => view.number_of_vertices())
    }

    #[inline]
    fn number_of_neighbors(&self, v: V) -> E {
        dispatch!(self, view => view.number_of_neighbors(v))
    }

    #[inline]
    fn starting_edge(&self, v: V) -> E {
        dispatch!(self, view => view.starting_edge(v))
    }

    #[inline]
    fn segment_owner(&self, e: E) -> V {
        dispatch!(self, view => view.segment_owner(e))
    }

    #[inline]
    fn source_vertex(&self, e: E) -> V {
        dispatch!(self, view => view.source_vertex(e))
    }

    #[inline]
    fn destination_vertex(&self, e: E) -> V {
        dispatch!(self, view => view.destination_vertex(e))
    }

    #[inline]
    fn edge_weight(&self, e: E) -> W {
        dispatch!(self, view => view.edge_weight(e))
    }

    #[inline]
    fn edge_between(&self, source: V, destination: V) -> Option<E> {
        dispatch!(self, view => view.edge_between(source, destination))
    }

    #[inline]
    fn edges_of(&self, v: V) -> EdgeIds<E> {
        dispatch!(self, view => view.edges_of(v))
    }
}

impl<'a, V, E, W, S> From<CsrView<'a, V, E, W, S>> for SparseGraph<'a, V, E, W, S> {
    fn from(view: CsrView<'a, V, E, W, S>) -> Self {
        Self::Csr(view)
    }
}

impl<'a, V, E, W, S> From<CscView<'a, V, E, W, S>> for SparseGraph<'a, V, E, W, S> {
    fn from(view: CscView<'a, V, E, W, S>) -> Self {
        Self::Csc(view)
    }
}

impl<V, E, W, S> core::fmt::Debug for SparseGraph<'_, V, E, W, S>
where
    V: core::fmt::Debug,
    E: core::fmt::Debug,
    S: MemorySpace,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Csr(view) => f.debug_tuple("Csr").field(view).finish(),
            Self::Csc(view) => f.debug_tuple("Csc").field(view).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 0 → 1 (1.5), 0 → 2 (2.5), 2 → 1 (3.5)
    static CSR_OFFSETS: [u32; 4] = [0, 2, 2, 3];
    static CSR_INDICES: [u32; 3] = [1, 2, 1];
    static CSC_OFFSETS: [u32; 4] = [0, 0, 2, 3];
    static CSC_INDICES: [u32; 3] = [0, 2, 0];
    static CSR_VALUES: [f32; 3] = [1.5, 2.5, 3.5];
    static CSC_VALUES: [f32; 3] = [1.5, 3.5, 2.5];

    fn both() -> [SparseGraph<'static>; 2] {
        [
            CsrView::bind(3, 3, 3, &CSR_OFFSETS, &CSR_INDICES, &CSR_VALUES)
                .unwrap()
                .into(),
            CscView::bind(3, 3, 3, &CSC_OFFSETS, &CSC_INDICES, &CSC_VALUES)
                .unwrap()
                .into(),
        ]
    }

    #[test]
    fn test_dispatch_matches_format() {
        let [csr, csc] = both();
        assert_eq!(csr.format(), Format::Csr);
        assert_eq!(csc.format(), Format::Csc);
        assert!(csr.as_csr().is_some() && csr.as_csc().is_none());
        assert!(csc.as_csc().is_some() && csc.as_csr().is_none());
    }

    #[test]
    fn test_same_edges_through_either_format() {
        for graph in both() {
            for (source, destination, weight) in [(0, 1, 1.5_f32), (0, 2, 2.5), (2, 1, 3.5)] {
                let e = graph.edge_between(source, destination).unwrap();
                assert_eq!(graph.source_vertex(e), source);
                assert_eq!(graph.destination_vertex(e), destination);
                assert!((graph.edge_weight(e) - weight).abs() < f32::EPSILON);
            }
            assert_eq!(graph.edge_between(1, 0), None);
            assert_eq!(graph.number_of_edges(), 3);
        }
    }

    #[test]
    fn test_segment_semantics_follow_format() {
        let [csr, csc] = both();
        // out-degree vs in-degree of vertex 1
        assert_eq!(csr.number_of_neighbors(1), 0);
        assert_eq!(csc.number_of_neighbors(1), 2);
        assert_eq!(csc.edges_of(1).len(), 2);
    }
}
