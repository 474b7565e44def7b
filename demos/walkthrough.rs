//! Walkthrough: one call graph, two encodings, one query interface
//!
//! Run with: cargo run --example walkthrough
//! Bind-time logging: RUST_LOG=trueno_graph_view=trace cargo run --example walkthrough

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Float32Array, UInt32Array};
use arrow::datatypes::{DataType, Field, Float32Type, Schema, UInt32Type};
use arrow::record_batch::RecordBatch;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use trueno_graph_view::storage::batch_column;
use trueno_graph_view::{csc_from_arrow, CsrView, GraphIndex, GraphView, SparseGraph, VertexPair};

const NAMES: [&str; 5] = ["main", "parse_args", "validate", "execute", "cleanup"];

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

/// Print every edge of a view with its endpoints' names
fn describe<G: GraphView<Weight = f32>>(label: &str, graph: &G) {
    println!(
        "  {label} ({}): {} vertices, {} edges",
        graph.format(),
        graph.number_of_vertices().to_usize(),
        graph.number_of_edges().to_usize()
    );
    for e in 0..graph.number_of_edges().to_usize() {
        let e = G::Edge::from_usize(e);
        let VertexPair {
            source,
            destination,
        } = graph.endpoints(e);
        println!(
            "    {} → {} (weight {})",
            NAMES[source.to_usize()],
            NAMES[destination.to_usize()],
            graph.edge_weight(e)
        );
    }
}

fn main() -> Result<()> {
    setup_logging();

    println!("🦀 trueno-graph-view Walkthrough\n");

    // 1. CSR over plain vectors owned by this function
    println!("📊 Binding a CSR view over Vec storage...");
    // main → parse_args, main → validate, main → execute,
    // parse_args → validate (twice), execute → cleanup
    let offsets = vec![0_u32, 3, 4, 4, 5, 5];
    let indices = vec![1_u32, 2, 3, 2, 4];
    let values = vec![1.0_f32, 1.0, 1.0, 2.0, 1.0];
    let csr = CsrView::bind(5, 5, 5, &offsets, &indices, &values)?;
    csr.validate().context("CSR arrays are malformed")?;
    describe("csr", &csr);

    // 2. Segment queries
    println!("\n🔍 Querying...");
    let callees: Vec<&str> = csr
        .neighbors(0)
        .iter()
        .map(|&v| NAMES[v.to_usize()])
        .collect();
    println!("  main() calls: {callees:?}");
    println!("  edge 3 starts at {}", NAMES[csr.source_vertex(3).to_usize()]);
    match csr.edge_between(1, 2) {
        Some(e) => println!("  parse_args → validate is edge {e} (weight {})", csr.edge_weight(e)),
        None => println!("  parse_args never calls validate"),
    }
    println!("  validate → main stored: {}", csr.edge_between(2, 0).is_some());

    // 3. Checked queries report instead of panicking
    match csr.try_number_of_neighbors(9) {
        Ok(degree) => println!("  vertex 9 has {degree} neighbors"),
        Err(err) => println!("  checked query rejected: {err}"),
    }

    // 4. CSC over Arrow columns, nothing copied
    println!("\n🗂️  Binding a CSC view over Arrow columns...");
    let schema = Arc::new(Schema::new(vec![
        Field::new("caller", DataType::UInt32, false),
        Field::new("calls", DataType::Float32, false),
    ]));
    let batch = RecordBatch::try_new(
        schema,
        vec![
            Arc::new(UInt32Array::from(vec![0, 0, 1, 0, 3])) as ArrayRef,
            Arc::new(Float32Array::from(vec![1.0, 1.0, 2.0, 1.0, 1.0])) as ArrayRef,
        ],
    )?;
    let column_offsets = UInt32Array::from(vec![0, 0, 1, 3, 4, 5]);
    let csc = csc_from_arrow::<UInt32Type, UInt32Type, Float32Type>(
        5,
        5,
        &column_offsets,
        batch_column(&batch, "caller")?,
        batch_column(&batch, "calls")?,
    )?;
    csc.validate().context("CSC columns are malformed")?;
    describe("csc", &csc);

    let callers: Vec<&str> = csc
        .neighbors(2)
        .iter()
        .map(|&v| NAMES[v.to_usize()])
        .collect();
    println!("  validate() called by: {callers:?}");

    // 5. Either format behind one type
    println!("\n🔀 Mixing formats...");
    println!("  both views read {:?} memory", csr.memory_space());
    let graphs = [SparseGraph::from(csr), SparseGraph::from(csc)];
    for graph in &graphs {
        let hit = graph.edge_between(3, 4);
        println!(
            "  {}: execute → cleanup = {:?}",
            graph.format(),
            hit.map(|e| graph.endpoints(e))
        );
    }

    println!("\n✅ Walkthrough complete");
    Ok(())
}
