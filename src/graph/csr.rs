//! CSR (Compressed Sparse Row) graph view
//!
//! Based on `GraphBLAST` (Yang et al., ACM `ToMS` 2022) for GPU-optimized sparse matrix operations.
//!
//! # CSR Format
//!
//! ```text
//! Graph: 0 → 1, 0 → 2, 1 → 0, 3 → 0, 3 → 2
//!
//! CSR:
//!   row_offsets:    [0, 2, 3, 3, 5]   // Row 0: edges [0..2), row 2: [3..3) (empty)
//!   column_indices: [1, 2, 0, 0, 2]   // Destination of each edge, sorted per row
//!   values:         [10, 20, 30, 40, 50]
//! ```
//!
//! The view borrows all three arrays; it never copies or frees them.

use core::fmt;
use core::marker::PhantomData;

use super::compressed::Compressed;
use super::{Format, GraphView};
use crate::error::Result;
use crate::memory::{BufferSource, Host, MemorySpace, Space};
use crate::types::GraphIndex;

/// Non-owning CSR view over externally owned arrays
///
/// Optimized for:
/// - O(1) out-degree and out-neighbor slices
/// - O(log degree) `edge_between`
/// - O(log V) reverse lookup of an edge's source row
///
/// Copies are cheap descriptors that alias the same arrays.
///
/// # Example
///
/// ```
/// use trueno_graph_view::{CsrView, GraphView};
///
/// let offsets = vec![0_u32, 2, 3, 3, 5];
/// let indices = vec![1_u32, 2, 0, 0, 2];
/// let values = vec![10.0_f32, 20.0, 30.0, 40.0, 50.0];
///
/// let graph = CsrView::bind(4, 4, 5, &offsets, &indices, &values).unwrap();
/// assert_eq!(graph.number_of_neighbors(0), 2);
/// assert_eq!(graph.source_vertex(4), 3);
/// assert_eq!(graph.edge_between(0, 2), Some(1));
/// assert_eq!(graph.edge_between(2, 0), None);
/// ```
#[derive(Clone, Copy)]
pub struct CsrView<'a, V = u32, E = u32, W = f32, S = Host> {
    inner: Compressed<'a, V, E, W>,
    space: PhantomData<S>,
}

impl<'a, V, E, W, S> CsrView<'a, V, E, W, S>
where
    V: GraphIndex,
    E: GraphIndex,
    W: Copy,
    S: MemorySpace,
{
    /// Bind a view over buffer-like sources
    ///
    /// # Arguments
    ///
    /// * `rows` / `columns` - matrix dimensions
    /// * `nnz` - number of stored edges
    /// * `offsets` - row pointers, length `rows + 1`
    /// * `indices` - destination of each edge, length `nnz`
    /// * `values` - weight of each edge, length `nnz`
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::SizeMismatch`](crate::ViewError::SizeMismatch) if
    /// an array length disagrees with the counts, or
    /// [`ViewError::OffsetBoundary`](crate::ViewError::OffsetBoundary) if
    /// `offsets` does not run from 0 to `nnz`.
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
            Format::Csr,
            rows,
            columns,
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
    /// Lengths are implicit: `rows + 1` offsets, `nnz` indices and values.
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
            Compressed::from_raw_parts(Format::Csr, rows, columns, nnz, offsets, indices, values)
        }?;
        Ok(Self {
            inner,
            space: PhantomData,
        })
    }

    /// Full structural check: monotone offsets, indices below `columns`,
    /// rows sorted ascending
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

    /// Row pointer array (length `rows + 1`)
    #[must_use]
    pub fn row_offsets(&self) -> &'a [E] {
        self.inner.offsets()
    }

    /// Destination of every edge (length `nnz`)
    #[must_use]
    pub fn column_indices(&self) -> &'a [V] {
        self.inner.indices()
    }

    /// Weight of every edge (length `nnz`)
    #[must_use]
    pub fn nonzero_values(&self) -> &'a [W] {
        self.inner.values()
    }

    /// Out-neighbors of `v`
    ///
    /// # Panics
    ///
    /// Panics if `v >= rows`.
    #[must_use]
    pub fn neighbors(&self, v: V) -> &'a [V] {
        self.inner.indices_of(v)
    }

    /// Weights of `v`'s out-edges, aligned with [`neighbors`](Self::neighbors)
    ///
    /// # Panics
    ///
    /// Panics if `v >= rows`.
    #[must_use]
    pub fn neighbor_weights(&self, v: V) -> &'a [W] {
        self.inner.values_of(v)
    }
}

impl<V, E, W, S> GraphView for CsrView<'_, V, E, W, S>
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
        Format::Csr
    }

    #[inline]
    fn number_of_rows(&self) -> V {
        self.inner.major()
    }

    #[inline]
    fn number_of_columns(&self) -> V {
        self.inner.minor()
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
        self.inner.segment_owner(e)
    }

    #[inline]
    fn destination_vertex(&self, e: E) -> V {
        self.inner.index_at(e)
    }

    #[inline]
    fn edge_weight(&self, e: E) -> W {
        self.inner.value_at(e)
    }

    #[inline]
    fn edge_between(&self, source: V, destination: V) -> Option<E> {
        self.inner.find(source, destination)
    }
}

impl<V, E, W, S> Default for CsrView<'_, V, E, W, S>
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

impl<V: fmt::Debug, E: fmt::Debug, W, S: MemorySpace> fmt::Debug for CsrView<'_, V, E, W, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CsrView")
            .field("space", &S::SPACE)
            .field("inner", &self.inner)
            .finish()
    }
}
