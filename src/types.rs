//! Scalar id types shared by every graph format

use core::fmt::Debug;

/// Unsigned integer usable as a vertex or edge id
///
/// Ids are stored in the bound arrays with whatever width the caller picked;
/// queries widen them to `usize` for indexing and narrow results back.
pub trait GraphIndex: Copy + Ord + Debug + Send + Sync + 'static {
    /// Zero value of this id type
    const ZERO: Self;

    /// Widen to `usize` for slice indexing
    fn to_usize(self) -> usize;

    /// Narrow a position back to the id type
    ///
    /// Callers only pass positions bounded by a count that was itself
    /// representable in `Self`.
    fn from_usize(value: usize) -> Self;
}

macro_rules! impl_graph_index {
    ($($ty:ty),*) => {
        $(
            impl GraphIndex for $ty {
                const ZERO: Self = 0;

                #[inline]
                fn to_usize(self) -> usize {
                    #[allow(clippy::cast_possible_truncation)] // 64-bit ids on 32-bit hosts not supported
                    let value = self as usize;
                    value
                }

                #[inline]
                fn from_usize(value: usize) -> Self {
                    #[allow(clippy::cast_possible_truncation)]
                    let id = value as $ty;
                    id
                }
            }
        )*
    };
}

impl_graph_index!(u16, u32, u64, usize);

/// Both endpoints of one edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexPair<V> {
    /// Tail of the edge
    pub source: V,
    /// Head of the edge
    pub destination: V,
}

impl<V> VertexPair<V> {
    /// Create a pair
    #[must_use]
    pub const fn new(source: V, destination: V) -> Self {
        Self {
            source,
            destination,
        }
    }
}

impl<V> From<(V, V)> for VertexPair<V> {
    fn from((source, destination): (V, V)) -> Self {
        Self::new(source, destination)
    }
}

impl<V> From<VertexPair<V>> for (V, V) {
    fn from(pair: VertexPair<V>) -> Self {
        (pair.source, pair.destination)
    }
}
