//! Integration tests for trueno-graph-view
//!
//! Tests real-world usage scenarios (binding caller-owned arrays, sharing
//! views across threads, lookups at segment boundaries)

use std::thread;

use trueno_graph_view::{CscView, CsrView, Format, GraphView, SparseGraph, VertexPair, ViewError};

/// Arrays for: 0 → 1, 0 → 2, 1 → 0, 3 → 0, 3 → 2
struct Sample {
    csr_offsets: Vec<u32>,
    csr_indices: Vec<u32>,
    csr_values: Vec<f32>,
    csc_offsets: Vec<u32>,
    csc_indices: Vec<u32>,
    csc_values: Vec<f32>,
}

fn sample() -> Sample {
    Sample {
        csr_offsets: vec![0, 2, 3, 3, 5],
        csr_indices: vec![1, 2, 0, 0, 2],
        csr_values: vec![10.0, 20.0, 30.0, 40.0, 50.0],
        csc_offsets: vec![0, 2, 3, 5, 5],
        csc_indices: vec![1, 3, 0, 0, 3],
        csc_values: vec![30.0, 40.0, 10.0, 20.0, 50.0],
    }
}

#[test]
fn test_concrete_csr_scenario() {
    let s = sample();
    let graph = CsrView::bind(4, 4, 5, &s.csr_offsets, &s.csr_indices, &s.csr_values).unwrap();

    assert_eq!(graph.number_of_neighbors(0), 2);
    assert_eq!(graph.number_of_neighbors(2), 0);
    assert_eq!(graph.source_vertex(4), 3);
    assert_eq!(graph.destination_vertex(4), 2);
    assert!((graph.edge_weight(4) - 50.0).abs() < f32::EPSILON);
    assert_eq!(graph.edge_between(0, 2), Some(1));
    assert_eq!(graph.edge_between(2, 0), None);
}

#[test]
fn test_edge_id_at_row_start() {
    // Edge 3 is both the (empty) start of row 2 and the start of row 3
    let s = sample();
    let graph = CsrView::bind(4, 4, 5, &s.csr_offsets, &s.csr_indices, &s.csr_values).unwrap();

    assert_eq!(graph.starting_edge(2), 3);
    assert_eq!(graph.starting_edge(3), 3);
    assert_eq!(graph.source_vertex(3), 3);
    assert_eq!(graph.source_vertex(2), 1);
    assert_eq!(graph.source_vertex(0), 0);
}

#[test]
fn test_csr_and_csc_agree_on_every_edge() {
    let s = sample();
    let csr = CsrView::bind(4, 4, 5, &s.csr_offsets, &s.csr_indices, &s.csr_values).unwrap();
    let csc = CscView::bind(4, 4, 5, &s.csc_offsets, &s.csc_indices, &s.csc_values).unwrap();

    for e in 0..5 {
        let VertexPair {
            source,
            destination,
        } = csr.endpoints(e);
        let mirrored = csc
            .edge_between(source, destination)
            .expect("edge present in CSR must be present in CSC");

        assert_eq!(csc.endpoints(mirrored), VertexPair::new(source, destination));
        assert!((csc.edge_weight(mirrored) - csr.edge_weight(e)).abs() < f32::EPSILON);
    }
}

#[test]
fn test_empty_segments_never_match() {
    let s = sample();
    let csr = CsrView::bind(4, 4, 5, &s.csr_offsets, &s.csr_indices, &s.csr_values).unwrap();
    let csc = CscView::bind(4, 4, 5, &s.csc_offsets, &s.csc_indices, &s.csc_values).unwrap();

    // Row 2 and column 3 are empty
    for other in 0..4 {
        assert_eq!(csr.edge_between(2, other), None);
        assert_eq!(csc.edge_between(other, 3), None);
    }
    assert_eq!(csr.edges_of(2).len(), 0);
    assert_eq!(csc.number_of_neighbors(3), 0);
}

#[test]
fn test_duplicate_entries_resolve_inside_segment() {
    // Row 1 holds destination 2 three times (multi-edge)
    let offsets = [0_u32, 1, 5, 6];
    let indices = [0_u32, 0, 2, 2, 2, 1];
    let values = [1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0];
    let graph = CsrView::bind(3, 3, 6, &offsets, &indices, &values).unwrap();

    let e = graph.edge_between(1, 2).unwrap();
    assert!((2..5).contains(&e));
    assert_eq!(graph.destination_vertex(e), 2);
    assert_eq!(graph.source_vertex(e), 1);
}

#[test]
fn test_concurrent_readers_match_sequential() {
    let s = sample();
    let graph = CsrView::bind(4, 4, 5, &s.csr_offsets, &s.csr_indices, &s.csr_values).unwrap();

    let sequential: Vec<_> = (0..5_u32)
        .map(|e| (graph.endpoints(e), graph.edge_between(e % 4, (e + 2) % 4)))
        .collect();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    (0..5_u32)
                        .map(|e| (graph.endpoints(e), graph.edge_between(e % 4, (e + 2) % 4)))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), sequential);
        }
    });
}

#[test]
fn test_views_are_shareable_descriptors() {
    fn assert_shareable<T: Copy + Send + Sync>() {}

    assert_shareable::<CsrView<'static>>();
    assert_shareable::<CscView<'static, u64, u64, f64>>();
    assert_shareable::<SparseGraph<'static>>();
}

#[test]
fn test_sparse_graph_holds_either_format() {
    let s = sample();
    let graphs: Vec<SparseGraph<'_>> = vec![
        CsrView::bind(4, 4, 5, &s.csr_offsets, &s.csr_indices, &s.csr_values)
            .unwrap()
            .into(),
        CscView::bind(4, 4, 5, &s.csc_offsets, &s.csc_indices, &s.csc_values)
            .unwrap()
            .into(),
    ];

    let formats: Vec<Format> = graphs.iter().map(GraphView::format).collect();
    assert_eq!(formats, vec![Format::Csr, Format::Csc]);

    for graph in &graphs {
        assert_eq!(graph.number_of_edges(), 5);
        assert_eq!(
            graph.edge_between(3, 2).map(|e| graph.endpoints(e)),
            Some(VertexPair::new(3, 2))
        );
        assert!(graph.try_edge_between(1, 0).unwrap().is_some());
    }
}

#[test]
fn test_wide_ids() {
    let offsets = vec![0_u64, 1, 2];
    let indices = vec![1_u64, 0];
    let values = vec![0.25_f64, 0.75];
    let graph = CsrView::bind(2_u64, 2, 2, &offsets, &indices, &values).unwrap();

    assert_eq!(graph.edge_between(1, 0), Some(1_u64));
    assert!((graph.edge_weight(1) - 0.75).abs() < f64::EPSILON);
}

#[test]
fn test_bind_errors_surface_before_queries() {
    let s = sample();

    let err = CsrView::bind(4, 4, 4, &s.csr_offsets, &s.csr_indices, &s.csr_values).unwrap_err();
    assert!(matches!(err, ViewError::SizeMismatch { array: "indices", .. }));

    let err = CscView::bind(4, 5, 5, &s.csc_offsets, &s.csc_indices, &s.csc_values).unwrap_err();
    assert!(matches!(err, ViewError::SizeMismatch { array: "offsets", .. }));
}
