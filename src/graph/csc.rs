//! CSC (Compressed Sparse Column) graph view
//!
//! The transpose encoding of [`CsrView`](super::CsrView): one segment per
//! destination vertex, holding the sorted source rows of its in-edges.
//!
//! ```text
//! Graph: 0 → 1, 0 → 2, 1 → 0, 3 → 0, 3 → 2
//!
//! CSC:
//!   column_offsets: [0, 2, 3, 5, 5]   // Column 3 has no in-edges
//!   row_indices:    [1, 3, 0, 0, 3]   // Source of each edge, sorted per column
//! ```

use core::fmt;
use core::marker::PhantomData;

use super::compressed::Compressed;
use super::{Format, GraphView};
use crate::error::Result;
use crate::memory::{BufferSource, Host, MemorySpace, Space};
use crate::types::GraphIndex;

/// Non-owning CSC view over externally owned arrays
///
/// Optimized for predecessor queries: in-degree and in-neighbor slices are
/// O(1), `edge_between` is O(log in-degree), and the reverse lookup of an
/// edge's destination column is O(log V).
///
/// Arguments keep their graph meaning: `edge_between(source, destination)`
/// searches `destination`'s column for `source`, exactly the edge that
/// [`CsrView::edge_between`](super::CsrView) would find in the transposed
/// encoding.
///
/// # Example
///
/// ```
/// use trueno_graph_view::{CscView, GraphView};
///
/// let offsets = [0_u32, 2, 3, 5, 5];
/// let indices = [1_u32, 3, 0, 0, 3];
/// let values = [30.0_f32, 40.0, 10.0, 20.0, 50.0];
///
/// let graph = CscView::bind(4, 4, 5, &offsets, &indices, &values).unwrap();
/// assert_eq!(graph.number_of_neighbors(0), 2); // in-degree of 0
/// assert_eq!(graph.edge_between(3, 2), Some(4));
/// assert_eq!(graph.destination_vertex(4), 2);
/// ```
#[derive(Clone, Copy)]
pub struct CscView<'a, V = u32, E = u32, W = f32, S = Host> {
    inner: Compressed<'a, V, E, W>,
    space: PhantomData<S>,
}

impl<'a, V, E, W, S> CscView<'a, V, E, W, S>
where
    V: GraphIndex,
    E: GraphIndex,
    W: Copy,
    S: MemorySpace,
{
    /// Bind a view over buffer-like sources
    ///
    /// `offsets` are column pointers (length `columns + 1`), `indices` the
    /// source row of each edge (length `nnz`).
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::SizeMismatch`](crate::ViewError::SizeMismatch) or
    /// [`ViewError::OffsetBoundary`](crate::ViewError::OffsetBoundary) when
    /// the arrays disagree with the declared counts.
    pub fn bind<O, I, X>(
        rows: V,
        columns: V,
        nnz: E,
        offsets: &'a O,
        indices: &'a I,
        values: &'a X,
    ) -> Result<Self>
    where
        O: BufferSource<E, Space = S> + ?Sized,
        I: BufferSource<V, Space = S> + ?Sized,
        X: BufferSource<W, Space = S> + ?Sized,
    {
        let inner = Compressed::bind(
            Format::Csc,
            columns,
            rows,
            nnz,
            offsets.data(),
            indices.data(),
            values.data(),
        )?;
        Ok(Self {
            inner,
            space: PhantomData,
        })
    }

    /// Bind a view over raw pointers
    ///
    /// Lengths are implicit: `columns + 1` offsets, `nnz` indices and values.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::NullPointer`](crate::ViewError::NullPointer) for
    /// a null pointer, otherwise the same errors as [`bind`](Self::bind).
    ///
    /// # Safety
    ///
    /// Every pointer must be valid for reads of its implicit length, from the
    /// execution domain this call runs in, for the whole lifetime `'a`, and
    /// the memory must not be written while the view is in use.
    pub unsafe fn from_raw_parts(
        rows: V,
        columns: V,
        nnz: E,
        offsets: *const E,
        indices: *const V,
        values: *const W,
    ) -> Result<Self> {
        // SAFETY: forwarded caller contract
        let inner = unsafe {
            Compressed::from_raw_parts(Format::Csc, columns, rows, nnz, offsets, indices, values)
        }?;
        Ok(Self {
            inner,
            space: PhantomData,
        })
    }

    /// Full structural check: monotone offsets, indices below `rows`,
    /// columns sorted ascending
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<()> {
        self.inner.validate()
    }

    /// Memory space the arrays live in
    #[must_use]
    pub fn memory_space(&self) -> Space {
        S::SPACE
    }

    /// Column pointer array (length `columns + 1`)
    #[must_use]
    pub fn column_offsets(&self) -> &'a [E] {
        self.inner.offsets()
    }

    /// Source row of every edge (length `nnz`)
    #[must_use]
    pub fn row_indices(&self) -> &'a [V] {
        self.inner.indices()
    }

    /// Weight of every edge (length `nnz`)
    #[must_use]
    pub fn nonzero_values(&self) -> &'a [W] {
        self.inner.values()
    }

    /// In-neighbors (predecessors) of `v`
    ///
    /// # Panics
    ///
    /// Panics if `v >= columns`.
    #[must_use]
    pub fn neighbors(&self, v: V) -> &'a [V] {
        self.inner.indices_of(v)
    }

    /// Weights of `v`'s in-edges, aligned with [`neighbors`](Self::neighbors)
    ///
    /// # Panics
    ///
    /// Panics if `v >= columns`.
    #[must_use]
    pub fn neighbor_weights(&self, v: V) -> &'a [W] {
        self.inner.values_of(v)
    }
}

impl<V, E, W, S> GraphView for CscView<'_, V, E, W, S>
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
        Format::Csc
    }

    #[inline]
    fn number_of_rows(&self) -> V {
        self.inner.minor()
    }

    #[inline]
    fn number_of_columns(&self) -> V {
        self.inner.major()
    }

    #[inline]
    fn number_of_nonzeros(&self) -> E {
        self.inner.nnz()
    }

    #[inline]
    fn number_of_vertices(&self) -> V {
        self.inner.major()
    }

    #[inline]
    fn number_of_neighbors(&self, v: V) -> E {
        self.inner.segment_len(v)
    }

    #[inline]
    fn starting_edge(&self, v: V) -> E {
        self.inner.segment_start(v)
    }

    #[inline]
    fn segment_owner(&self, e: E) -> V {
        self.inner.segment_owner(e)
    }

    #[inline]
    fn source_vertex(&self, e: E) -> V {
        self.inner.index_at(e)
    }

    #[inline]
    fn destination_vertex(&self, e: E) -> V {
        self.inner.segment_owner(e)
    }

    #[inline]
    fn edge_weight(&self, e: E) -> W {
        self.inner.value_at(e)
    }

    #[inline]
    fn edge_between(&self, source: V, destination: V) -> Option<E> {
        self.inner.find(destination, source)
    }
}

impl<V, E, W, S> Default for CscView<'_, V, E, W, S>
where
    V: GraphIndex,
    E: GraphIndex,
    W: Copy,
    S: MemorySpace,
{
    /// Empty view with zero rows, columns and edges
    fn default() -> Self {
        Self {
            inner: Compressed::empty(),
            space: PhantomData,
        }
    }
}

impl<V: fmt::Debug, E: fmt::Debug, W, S: MemorySpace> fmt::Debug for CscView<'_, V, E, W, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CscView")
            .field("space", &S::SPACE)
            .field("inner", &self.inner)
            .finish()
    }
}
