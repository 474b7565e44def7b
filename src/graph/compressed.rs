//! Segment arithmetic shared by the CSR and CSC views
//!
//! Both formats are the same three arrays read along a different axis. The
//! "major" dimension is the segmented one (rows for CSR, columns for CSC);
//! `indices` holds ids of the "minor" dimension.

use core::fmt;
use core::ops::Range;

use tracing::{debug, trace};

use super::Format;
use crate::error::{Result, ViewError};
use crate::search;
use crate::types::GraphIndex;

#[derive(Clone, Copy)]
pub(crate) struct Compressed<'a, V, E, W> {
    /// Number of segments (`offsets.len() - 1`)
    major: V,
    /// Exclusive bound on `indices` entries
    minor: V,
    nnz: E,
    offsets: &'a [E],
    indices: &'a [V],
    values: &'a [W],
}

impl<'a, V, E, W> Compressed<'a, V, E, W>
where
    V: GraphIndex,
    E: GraphIndex,
    W: Copy,
{
    pub(crate) const fn empty() -> Self {
        Self {
            major: V::ZERO,
            minor: V::ZERO,
            nnz: E::ZERO,
            offsets: &[],
            indices: &[],
            values: &[],
        }
    }

    /// Record the arrays after the O(1) size and boundary checks
    pub(crate) fn bind(
        format: Format,
        major: V,
        minor: V,
        nnz: E,
        offsets: &'a [E],
        indices: &'a [V],
        values: &'a [W],
    ) -> Result<Self> {
        let view = Self {
            major,
            minor,
            nnz,
            offsets,
            indices,
            values,
        };

        match view.check_shape() {
            Ok(()) => {
                trace!(
                    %format,
                    segments = major.to_usize(),
                    bound = minor.to_usize(),
                    nnz = nnz.to_usize(),
                    "bound graph view"
                );
                Ok(view)
            }
            Err(err) => {
                debug!(%format, %err, "rejected graph view binding");
                Err(err)
            }
        }
    }

    /// Bind over raw pointers with implicit lengths (`major + 1`, `nnz`, `nnz`)
    ///
    /// # Safety
    ///
    /// Each non-null pointer must be valid for reads of its implicit length
    /// in the calling execution domain for all of `'a`, and the memory must
    /// not be mutated while any view over it is alive.
    pub(crate) unsafe fn from_raw_parts(
        format: Format,
        major: V,
        minor: V,
        nnz: E,
        offsets: *const E,
        indices: *const V,
        values: *const W,
    ) -> Result<Self> {
        if offsets.is_null() {
            return Err(ViewError::NullPointer { array: "offsets" });
        }
        if indices.is_null() {
            return Err(ViewError::NullPointer { array: "indices" });
        }
        if values.is_null() {
            return Err(ViewError::NullPointer { array: "values" });
        }

        let segments = major.to_usize() + 1;
        let edges = nnz.to_usize();

        // SAFETY: non-null checked above; validity for the implied lengths
        // and lifetime is the caller's contract.
        let (offsets, indices, values) = unsafe {
            (
                core::slice::from_raw_parts(offsets, segments),
                core::slice::from_raw_parts(indices, edges),
                core::slice::from_raw_parts(values, edges),
            )
        };

        Self::bind(format, major, minor, nnz, offsets, indices, values)
    }

    fn check_shape(&self) -> Result<()> {
        let segments = self.major.to_usize();
        let nnz = self.nnz.to_usize();

        check_len("offsets", segments + 1, self.offsets.len())?;
        check_len("indices", nnz, self.indices.len())?;
        check_len("values", nnz, self.values.len())?;

        let first = self.offsets[0].to_usize();
        if first != 0 {
            return Err(ViewError::OffsetBoundary {
                position: 0,
                expected: 0,
                actual: first,
            });
        }

        let last = self.offsets[segments].to_usize();
        if last != nnz {
            return Err(ViewError::OffsetBoundary {
                position: segments,
                expected: nnz,
                actual: last,
            });
        }

        Ok(())
    }

    /// Full structural check, O(segments + nnz)
    pub(crate) fn validate(&self) -> Result<()> {
        self.check_shape()?;

        let segments = self.major.to_usize();
        let bound = self.minor.to_usize();

        for (vertex, pair) in self.offsets.windows(2).enumerate() {
            if pair[1] < pair[0] {
                return Err(ViewError::NonMonotonicOffsets { vertex });
            }
        }

        for vertex in 0..segments {
            let range = self.range_at(vertex);
            let start = range.start;
            for edge in range {
                let value = self.indices[edge];
                if value.to_usize() >= bound {
                    return Err(ViewError::IndexOutOfRange {
                        edge,
                        value: value.to_usize(),
                        bound,
                    });
                }
                if edge > start && value < self.indices[edge - 1] {
                    return Err(ViewError::UnsortedSegment { vertex, edge });
                }
            }
        }

        Ok(())
    }

    #[inline]
    pub(crate) fn major(&self) -> V {
        self.major
    }

    #[inline]
    pub(crate) fn minor(&self) -> V {
        self.minor
    }

    #[inline]
    pub(crate) fn nnz(&self) -> E {
        self.nnz
    }

    #[inline]
    pub(crate) fn offsets(&self) -> &'a [E] {
        self.offsets
    }

    #[inline]
    pub(crate) fn indices(&self) -> &'a [V] {
        self.indices
    }

    #[inline]
    pub(crate) fn values(&self) -> &'a [W] {
        self.values
    }

    #[inline]
    fn range_at(&self, segment: usize) -> Range<usize> {
        self.offsets[segment].to_usize()..self.offsets[segment + 1].to_usize()
    }

    #[inline]
    pub(crate) fn segment_range(&self, v: V) -> Range<usize> {
        debug_assert!(
            v < self.major,
            "vertex {v:?} out of range (bound {:?})",
            self.major
        );
        self.range_at(v.to_usize())
    }

    #[inline]
    pub(crate) fn segment_len(&self, v: V) -> E {
        E::from_usize(self.segment_range(v).len())
    }

    #[inline]
    pub(crate) fn segment_start(&self, v: V) -> E {
        debug_assert!(
            v < self.major,
            "vertex {v:?} out of range (bound {:?})",
            self.major
        );
        self.offsets[v.to_usize()]
    }

    /// Vertex whose segment contains `e`
    ///
    /// Rightmost segment starting at or before `e`: with empty segments
    /// sharing a boundary, the non-empty one (which starts there last) wins.
    #[inline]
    pub(crate) fn segment_owner(&self, e: E) -> V {
        debug_assert!(
            e < self.nnz,
            "edge {e:?} out of range (bound {:?})",
            self.nnz
        );
        let position = search::upper_bound(self.offsets, &e);
        V::from_usize(position - 1)
    }

    #[inline]
    pub(crate) fn index_at(&self, e: E) -> V {
        debug_assert!(
            e < self.nnz,
            "edge {e:?} out of range (bound {:?})",
            self.nnz
        );
        self.indices[e.to_usize()]
    }

    #[inline]
    pub(crate) fn value_at(&self, e: E) -> W {
        debug_assert!(
            e < self.nnz,
            "edge {e:?} out of range (bound {:?})",
            self.nnz
        );
        self.values[e.to_usize()]
    }

    /// Edge id of `minor_v` inside the segment of `major_v`
    #[inline]
    pub(crate) fn find(&self, major_v: V, minor_v: V) -> Option<E> {
        debug_assert!(
            minor_v < self.minor,
            "vertex {minor_v:?} out of range (bound {:?})",
            self.minor
        );
        let range = self.segment_range(major_v);
        search::exact_match(self.indices, &minor_v, range.start, range.end).map(E::from_usize)
    }

    #[inline]
    pub(crate) fn indices_of(&self, v: V) -> &'a [V] {
        &self.indices[self.segment_range(v)]
    }

    #[inline]
    pub(crate) fn values_of(&self, v: V) -> &'a [W] {
        &self.values[self.segment_range(v)]
    }
}

impl<V: fmt::Debug, E: fmt::Debug, W> fmt::Debug for Compressed<'_, V, E, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compressed")
            .field("major", &self.major)
            .field("minor", &self.minor)
            .field("nnz", &self.nnz)
            .finish_non_exhaustive()
    }
}

fn check_len(array: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(ViewError::SizeMismatch {
            array,
            expected,
            actual,
        })
    }
}
