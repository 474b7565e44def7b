//! The query interface every graph format implements

use core::fmt;
use core::iter::FusedIterator;
use core::ops::Range;

use crate::error::{Result, ViewError};
use crate::types::{GraphIndex, VertexPair};

/// Physical encoding behind a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Compressed sparse row: one segment per source vertex
    Csr,
    /// Compressed sparse column: one segment per destination vertex
    Csc,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csr => f.write_str("CSR"),
            Self::Csc => f.write_str("CSC"),
        }
    }
}

/// Read-only graph queries, identical across formats
///
/// Algorithms are written once against `G: GraphView` and monomorphized per
/// format, so no query goes through a vtable. Rows are always sources and
/// columns always destinations: an edge `u → v` is entry `(u, v)` in both
/// encodings.
///
/// The plain accessors treat an out-of-range id as a caller bug and panic
/// (with a descriptive message in debug builds). The `try_*` variants return
/// [`ViewError`] instead.
pub trait GraphView {
    /// Vertex id type
    type Vertex: GraphIndex;
    /// Edge id type
    type Edge: GraphIndex;
    /// Edge weight type
    type Weight: Copy;

    /// Encoding behind this view
    fn format(&self) -> Format;

    /// Number of rows (source vertices)
    fn number_of_rows(&self) -> Self::Vertex;

    /// Number of columns (destination vertices)
    fn number_of_columns(&self) -> Self::Vertex;

    /// Number of stored entries
    fn number_of_nonzeros(&self) -> Self::Edge;

    /// Number of segments: rows for CSR, columns for CSC
    fn number_of_vertices(&self) -> Self::Vertex;

    /// Number of edges
    fn number_of_edges(&self) -> Self::Edge {
        self.number_of_nonzeros()
    }

    /// Length of `v`'s segment: out-degree for CSR, in-degree for CSC
    fn number_of_neighbors(&self, v: Self::Vertex) -> Self::Edge;

    /// First edge id in `v`'s segment
    fn starting_edge(&self, v: Self::Vertex) -> Self::Edge;

    /// Vertex whose segment contains `e`, by binary search over the offsets
    ///
    /// An edge id equal to a segment boundary resolves to the vertex that
    /// starts at that boundary.
    fn segment_owner(&self, e: Self::Edge) -> Self::Vertex;

    /// Tail of edge `e`
    fn source_vertex(&self, e: Self::Edge) -> Self::Vertex;

    /// Head of edge `e`
    fn destination_vertex(&self, e: Self::Edge) -> Self::Vertex;

    /// Both endpoints of `e`
    fn endpoints(&self, e: Self::Edge) -> VertexPair<Self::Vertex> {
        VertexPair::new(self.source_vertex(e), self.destination_vertex(e))
    }

    /// Weight stored for `e`
    fn edge_weight(&self, e: Self::Edge) -> Self::Weight;

    /// Edge id of `source → destination`, or `None` if absent
    ///
    /// Requires the owning segment to be sorted. With duplicate entries any
    /// one of them may be returned.
    fn edge_between(&self, source: Self::Vertex, destination: Self::Vertex) -> Option<Self::Edge>;

    /// Edge ids of `v`'s segment, in storage order
    fn edges_of(&self, v: Self::Vertex) -> EdgeIds<Self::Edge> {
        let start = self.starting_edge(v).to_usize();
        let len = self.number_of_neighbors(v).to_usize();
        EdgeIds::new(start..start + len)
    }

    /// Checked [`number_of_neighbors`](Self::number_of_neighbors)
    ///
    /// # Errors
    ///
    /// [`ViewError::VertexOutOfRange`] if `v` is not a segment.
    fn try_number_of_neighbors(&self, v: Self::Vertex) -> Result<Self::Edge> {
        check_vertex(v, self.number_of_vertices())?;
        Ok(self.number_of_neighbors(v))
    }

    /// Checked [`segment_owner`](Self::segment_owner)
    ///
    /// # Errors
    ///
    /// [`ViewError::EdgeOutOfRange`] if `e` is not an edge.
    fn try_segment_owner(&self, e: Self::Edge) -> Result<Self::Vertex> {
        check_edge(e, self.number_of_edges())?;
        Ok(self.segment_owner(e))
    }

    /// Checked [`source_vertex`](Self::source_vertex)
    ///
    /// # Errors
    ///
    /// [`ViewError::EdgeOutOfRange`] if `e` is not an edge.
    fn try_source_vertex(&self, e: Self::Edge) -> Result<Self::Vertex> {
        check_edge(e, self.number_of_edges())?;
        Ok(self.source_vertex(e))
    }

    /// Checked [`destination_vertex`](Self::destination_vertex)
    ///
    /// # Errors
    ///
    /// [`ViewError::EdgeOutOfRange`] if `e` is not an edge.
    fn try_destination_vertex(&self, e: Self::Edge) -> Result<Self::Vertex> {
        check_edge(e, self.number_of_edges())?;
        Ok(self.destination_vertex(e))
    }

    /// Checked [`endpoints`](Self::endpoints)
    ///
    /// # Errors
    ///
    /// [`ViewError::EdgeOutOfRange`] if `e` is not an edge.
    fn try_endpoints(&self, e: Self::Edge) -> Result<VertexPair<Self::Vertex>> {
        check_edge(e, self.number_of_edges())?;
        Ok(self.endpoints(e))
    }

    /// Checked [`edge_weight`](Self::edge_weight)
    ///
    /// # Errors
    ///
    /// [`ViewError::EdgeOutOfRange`] if `e` is not an edge.
    fn try_edge_weight(&self, e: Self::Edge) -> Result<Self::Weight> {
        check_edge(e, self.number_of_edges())?;
        Ok(self.edge_weight(e))
    }

    /// Checked [`edge_between`](Self::edge_between)
    ///
    /// # Errors
    ///
    /// [`ViewError::VertexOutOfRange`] if `source` is not a row or
    /// `destination` is not a column. A missing edge is `Ok(None)`.
    fn try_edge_between(
        &self,
        source: Self::Vertex,
        destination: Self::Vertex,
    ) -> Result<Option<Self::Edge>> {
        check_vertex(source, self.number_of_rows())?;
        check_vertex(destination, self.number_of_columns())?;
        Ok(self.edge_between(source, destination))
    }
}

#[inline]
fn check_vertex<V: GraphIndex>(vertex: V, bound: V) -> Result<()> {
    if vertex < bound {
        Ok(())
    } else {
        Err(ViewError::VertexOutOfRange {
            vertex: vertex.to_usize(),
            bound: bound.to_usize(),
        })
    }
}

#[inline]
fn check_edge<E: GraphIndex>(edge: E, bound: E) -> Result<()> {
    if edge < bound {
        Ok(())
    } else {
        Err(ViewError::EdgeOutOfRange {
            edge: edge.to_usize(),
            bound: bound.to_usize(),
        })
    }
}

/// Iterator over the edge ids of one segment
#[derive(Debug, Clone)]
pub struct EdgeIds<E> {
    range: Range<usize>,
    marker: core::marker::PhantomData<E>,
}

impl<E> EdgeIds<E> {
    pub(crate) const fn new(range: Range<usize>) -> Self {
        Self {
            range,
            marker: core::marker::PhantomData,
        }
    }
}

impl<E: GraphIndex> Iterator for EdgeIds<E> {
    type Item = E;

    #[inline]
    fn next(&mut self) -> Option<E> {
        self.range.next().map(E::from_usize)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<E: GraphIndex> DoubleEndedIterator for EdgeIds<E> {
    #[inline]
    fn next_back(&mut self) -> Option<E> {
        self.range.next_back().map(E::from_usize)
    }
}

impl<E: GraphIndex> ExactSizeIterator for EdgeIds<E> {}

impl<E: GraphIndex> FusedIterator for EdgeIds<E> {}
