//! Zero-copy binding over Arrow columns
//!
//! Based on `DuckDB` (Raasveldt et al., SIGMOD 2019) columnar storage patterns.
//!
//! # Layout
//!
//! A graph arrives as three primitive Arrow arrays that the caller keeps
//! alive (typically columns of one or two `RecordBatch`es):
//! - `offsets`: segment pointers, `segments + 1` entries
//! - `indices`: one vertex id per edge
//! - `values`: one weight per edge
//!
//! The views borrow the arrays' value buffers directly; nothing is copied.

use anyhow::{anyhow, bail, Context, Result};
use arrow::array::{Array, PrimitiveArray};
use arrow::buffer::ScalarBuffer;
use arrow::datatypes::{ArrowNativeType, ArrowPrimitiveType};
use arrow::record_batch::RecordBatch;

use crate::graph::{CscView, CsrView};
use crate::memory::{BufferSource, Host};
use crate::types::GraphIndex;

impl<T: ArrowNativeType> BufferSource<T> for ScalarBuffer<T> {
    type Space = Host;

    #[inline]
    fn data(&self) -> &[T] {
        self
    }
}

/// Value buffer of a primitive array; null slots are not masked
impl<T: ArrowPrimitiveType> BufferSource<T::Native> for PrimitiveArray<T> {
    type Space = Host;

    #[inline]
    fn data(&self) -> &[T::Native] {
        self.values()
    }
}

/// Look up a column of a `RecordBatch` by name
///
/// # Errors
///
/// Returns error if the batch has no such column
pub fn batch_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a dyn Array> {
    batch
        .column_by_name(name)
        .map(AsRef::as_ref)
        .ok_or_else(|| anyhow!("Missing '{name}' column"))
}

/// Bind a CSR view over Arrow arrays
///
/// `Vt`, `Et` and `Wt` name the Arrow types of the indices, offsets and
/// values columns. The edge count is taken from the indices column.
///
/// # Errors
///
/// Returns error if a column has the wrong type, contains nulls, or does not
/// match the declared dimensions
///
/// # Example
///
/// ```
/// use arrow::array::{Float32Array, UInt32Array};
/// use arrow::datatypes::{Float32Type, UInt32Type};
/// use trueno_graph_view::storage::csr_from_arrow;
/// use trueno_graph_view::GraphView;
///
/// let offsets = UInt32Array::from(vec![0, 1, 1]);
/// let indices = UInt32Array::from(vec![1]);
/// let values = Float32Array::from(vec![0.5]);
///
/// let graph = csr_from_arrow::<UInt32Type, UInt32Type, Float32Type>(
///     2, 2, &offsets, &indices, &values,
/// ).unwrap();
/// assert_eq!(graph.edge_between(0, 1), Some(0));
/// ```
pub fn csr_from_arrow<'a, Vt, Et, Wt>(
    rows: Vt::Native,
    columns: Vt::Native,
    offsets: &'a dyn Array,
    indices: &'a dyn Array,
    values: &'a dyn Array,
) -> Result<CsrView<'a, Vt::Native, Et::Native, Wt::Native>>
where
    Vt: ArrowPrimitiveType,
    Vt::Native: GraphIndex,
    Et: ArrowPrimitiveType,
    Et::Native: GraphIndex,
    Wt: ArrowPrimitiveType,
{
    let offsets = primitive::<Et>(offsets, "offsets")?;
    let indices = primitive::<Vt>(indices, "indices")?;
    let values = primitive::<Wt>(values, "values")?;
    let nnz = <Et::Native as GraphIndex>::from_usize(indices.len());

    CsrView::bind(rows, columns, nnz, offsets, indices, values)
        .context("Failed to bind CSR view over Arrow columns")
}

/// Bind a CSC view over Arrow arrays
///
/// Same column conventions as [`csr_from_arrow`], with `offsets` holding
/// column pointers and `indices` source rows.
///
/// # Errors
///
/// Returns error if a column has the wrong type, contains nulls, or does not
/// match the declared dimensions
pub fn csc_from_arrow<'a, Vt, Et, Wt>(
    rows: Vt::Native,
    columns: Vt::Native,
    offsets: &'a dyn Array,
    indices: &'a dyn Array,
    values: &'a dyn Array,
) -> Result<CscView<'a, Vt::Native, Et::Native, Wt::Native>>
where
    Vt: ArrowPrimitiveType,
    Vt::Native: GraphIndex,
    Et: ArrowPrimitiveType,
    Et::Native: GraphIndex,
    Wt: ArrowPrimitiveType,
{
    let offsets = primitive::<Et>(offsets, "offsets")?;
    let indices = primitive::<Vt>(indices, "indices")?;
    let values = primitive::<Wt>(values, "values")?;
    let nnz = <Et::Native as GraphIndex>::from_usize(indices.len());

    CscView::bind(rows, columns, nnz, offsets, indices, values)
        .context("Failed to bind CSC view over Arrow columns")
}

/// Downcast a column and reject nulls
fn primitive<'a, T: ArrowPrimitiveType>(
    array: &'a dyn Array,
    name: &str,
) -> Result<&'a PrimitiveArray<T>> {
    let typed = array
        .as_any()
        .downcast_ref::<PrimitiveArray<T>>()
        .ok_or_else(|| {
            anyhow!(
                "Invalid '{name}' column type: {}, expected {}",
                array.data_type(),
                T::DATA_TYPE
            )
        })?;

    if typed.null_count() > 0 {
        bail!("'{name}' column contains {} nulls", typed.null_count());
    }

    Ok(typed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphView;
    use arrow::array::{ArrayRef, Float32Array, Int32Array, UInt32Array, UInt64Array};
    use arrow::datatypes::{DataType, Field, Float32Type, Schema, UInt32Type, UInt64Type};
    use std::sync::Arc;

    #[test]
    fn test_csr_over_arrow_columns() {
        let offsets = UInt32Array::from(vec![0, 2, 3, 3, 5]);
        let indices = UInt32Array::from(vec![1, 2, 0, 0, 2]);
        let values = Float32Array::from(vec![10.0, 20.0, 30.0, 40.0, 50.0]);

        let graph =
            csr_from_arrow::<UInt32Type, UInt32Type, Float32Type>(4, 4, &offsets, &indices, &values)
                .unwrap();

        assert_eq!(graph.number_of_neighbors(0), 2);
        assert_eq!(graph.source_vertex(4), 3);
        assert_eq!(graph.edge_between(0, 2), Some(1));
        // Borrowed, not copied
        assert!(std::ptr::eq(
            graph.column_indices().as_ptr(),
            indices.values().as_ptr()
        ));
    }

    #[test]
    fn test_csc_over_record_batch() {
        // Edge columns share one batch; offsets live in their own array
        let schema = Arc::new(Schema::new(vec![
            Field::new("source", DataType::UInt32, false),
            Field::new("weight", DataType::Float32, false),
        ]));
        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(UInt32Array::from(vec![1, 3, 0, 0, 3])) as ArrayRef,
                Arc::new(Float32Array::from(vec![30.0, 40.0, 10.0, 20.0, 50.0])) as ArrayRef,
            ],
        )
        .unwrap();
        let offsets = UInt64Array::from(vec![0, 2, 3, 5, 5]);

        let graph = csc_from_arrow::<UInt32Type, UInt64Type, Float32Type>(
            4,
            4,
            &offsets,
            batch_column(&batch, "source").unwrap(),
            batch_column(&batch, "weight").unwrap(),
        )
        .unwrap();

        assert_eq!(graph.edge_between(3, 2), Some(4));
        assert_eq!(graph.destination_vertex(2), 1);
    }

    #[test]
    fn test_wrong_column_type() {
        let offsets = UInt32Array::from(vec![0, 1]);
        let indices = Int32Array::from(vec![0]);
        let values = Float32Array::from(vec![1.0]);

        let err =
            csr_from_arrow::<UInt32Type, UInt32Type, Float32Type>(1, 1, &offsets, &indices, &values)
                .unwrap_err();
        assert!(err.to_string().contains("'indices'"));
    }

    #[test]
    fn test_nulls_rejected() {
        let offsets = UInt32Array::from(vec![0, 2]);
        let indices = UInt32Array::from(vec![Some(0), None]);
        let values = Float32Array::from(vec![1.0, 2.0]);

        let err =
            csr_from_arrow::<UInt32Type, UInt32Type, Float32Type>(1, 1, &offsets, &indices, &values)
                .unwrap_err();
        assert!(err.to_string().contains("nulls"));
    }

    #[test]
    fn test_size_mismatch_has_context() {
        let offsets = UInt32Array::from(vec![0, 1, 2]);
        let indices = UInt32Array::from(vec![0, 1]);
        let values = Float32Array::from(vec![1.0]);

        let err =
            csr_from_arrow::<UInt32Type, UInt32Type, Float32Type>(2, 2, &offsets, &indices, &values)
                .unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("Failed to bind CSR view"));
        assert!(message.contains("values has length 1, expected 2"));
    }

    #[test]
    fn test_missing_batch_column() {
        let schema = Arc::new(Schema::new(vec![Field::new("a", DataType::UInt32, false)]));
        let batch = RecordBatch::try_new(
            schema,
            vec![Arc::new(UInt32Array::from(vec![1])) as ArrayRef],
        )
        .unwrap();

        assert!(batch_column(&batch, "b").is_err());
    }

    #[test]
    fn test_scalar_buffer_source() {
        let offsets = ScalarBuffer::from(vec![0_u32, 1]);
        let indices = ScalarBuffer::from(vec![0_u32]);
        let values = ScalarBuffer::from(vec![7_i32]);

        let graph = CsrView::bind(1, 1, 1, &offsets, &indices, &values).unwrap();
        assert_eq!(graph.edge_weight(0), 7);
    }
}
