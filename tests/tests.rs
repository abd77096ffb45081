use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{HashMap, HashSet};
use streaming_mst::{LinkCutForest, SplayLinkCutForest, StreamingMst};

#[test]
fn single_edge() {
    let mut mst: StreamingMst<&str, i32> = StreamingMst::new();
    mst.ingest("a", "b", 5);
    assert_eq!(sorted_edges(&mst), vec![("a", "b", 5)]);
    assert_eq!(mst.num_vertices(), 2);
}

#[test]
fn growing_chain() {
    let mut mst: StreamingMst<&str, i32> = StreamingMst::new();
    mst.ingest("a", "b", 5);
    mst.ingest("b", "c", 3);
    assert_eq!(sorted_edges(&mst), vec![("a", "b", 5), ("b", "c", 3)]);
    assert_eq!(mst.total_weight(), 8);
}

#[test]
fn heavier_cycle_edge_is_discarded() {
    let mut mst: StreamingMst<&str, i32> = StreamingMst::new();
    mst.ingest("a", "b", 5);
    mst.ingest("b", "c", 3);
    // a and c are already connected and 10 is the heaviest edge on the cycle.
    mst.ingest("a", "c", 10);
    assert_eq!(sorted_edges(&mst), vec![("a", "b", 5), ("b", "c", 3)]);
    assert_eq!(mst.total_weight(), 8);
}

#[test]
fn lighter_cycle_edge_evicts_the_heaviest() {
    let mut mst: StreamingMst<&str, i32> = StreamingMst::new();
    mst.ingest("a", "b", 5);
    mst.ingest("b", "c", 3);
    // The cycle is {5, 3, 1}; a-b at weight 5 is evicted.
    mst.ingest("a", "c", 1);
    assert_eq!(sorted_edges(&mst), vec![("a", "c", 1), ("b", "c", 3)]);
    assert_eq!(mst.total_weight(), 4);
}

#[test]
fn disjoint_components_merge() {
    let mut mst: StreamingMst<&str, i32> = StreamingMst::new();
    mst.ingest("a", "b", 2);
    mst.ingest("c", "d", 3);
    assert_eq!(mst.num_edges(), 2);

    mst.ingest("b", "c", 100);
    assert_eq!(mst.num_edges(), 3);
    assert_eq!(mst.total_weight(), 105);
}

#[test]
fn equal_weight_tie_keeps_the_existing_edge() {
    let mut mst: StreamingMst<&str, i32> = StreamingMst::new();
    mst.ingest("a", "b", 5);
    mst.ingest("b", "c", 3);
    // Ties with the heaviest cycle edge: a-b stays.
    mst.ingest("a", "c", 5);
    assert_eq!(sorted_edges(&mst), vec![("a", "b", 5), ("b", "c", 3)]);
}

#[test]
fn maintained_forest_is_acyclic() {
    let mut mst: StreamingMst<u32, i64> = StreamingMst::new();
    let stream = [
        (0, 1, 4),
        (0, 2, 2),
        (1, 2, 1),
        (2, 3, 7),
        (1, 3, 3),
        (0, 3, 9),
        (4, 5, 1),
        (3, 4, 6),
        (2, 4, 5),
    ];
    for (a, b, w) in stream {
        mst.ingest(a, b, w);
        assert_forest(&mst.edges(), mst.num_vertices());
    }
}

#[test]
fn matches_kruskal_on_a_dense_graph() {
    let stream = [
        (0_u32, 1_u32, 12_i64),
        (0, 2, 7),
        (0, 3, 3),
        (1, 2, 2),
        (1, 3, 10),
        (2, 3, 8),
        (1, 4, 5),
        (3, 4, 5),
        (2, 4, 14),
    ];
    let mut mst: StreamingMst<u32, i64> = StreamingMst::new();
    for (a, b, w) in stream {
        mst.ingest(a, b, w);
    }
    assert_eq!(mst.total_weight(), kruskal_weight(&stream));
}

#[test]
fn matches_kruskal_on_random_streams() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let n_vertices = rng.random_range(2..40_u32);
        let n_edges = rng.random_range(1..200);

        let mut streamed = Vec::new();
        let mut mst: StreamingMst<u32, i64> = StreamingMst::new();
        for _ in 0..n_edges {
            let a = rng.random_range(0..n_vertices);
            let b = rng.random_range(0..n_vertices);
            let w = rng.random_range(1..100_i64);
            mst.ingest(a, b, w);
            if a != b {
                streamed.push((a, b, w));
            }
        }

        assert_forest(&mst.edges(), mst.num_vertices());
        assert_eq!(mst.total_weight(), kruskal_weight(&streamed));
    }
}

#[test]
fn edges_are_readable_between_ingests() {
    let mut mst: StreamingMst<u32, i32> = StreamingMst::new();
    mst.ingest(1, 2, 6);
    let before = mst.num_edges();
    mst.ingest(2, 3, 1);
    assert_eq!(mst.num_edges(), before + 1);
}

#[test]
fn maintainer_accepts_a_caller_supplied_forest() {
    let forest: SplayLinkCutForest<u32> = SplayLinkCutForest::new();
    let mut mst: StreamingMst<u32, i32, _> = StreamingMst::with_forest(forest);
    mst.ingest(1, 2, 4);
    mst.ingest(2, 3, 2);
    assert_eq!(mst.total_weight(), 6);
}

#[test]
fn forest_paths_agree_with_roots() {
    let mut forest = SplayLinkCutForest::new();
    for v in 0..6_u32 {
        forest.make_tree(v);
    }
    forest.link(&1, &0);
    forest.link(&2, &1);
    forest.link(&3, &1);
    forest.link(&4, &0);
    forest.link(&5, &4);

    for v in 0..6 {
        let root = forest.find_root(&v);
        let path = forest.find_path(&v);
        assert_eq!(path[0], v);
        assert_eq!(*path.last().unwrap(), root);
        assert_eq!(forest.find_root(&v), root);
    }
    let root = forest.find_root(&5);
    assert_eq!(forest.find_path(&root), vec![root]);
}

fn sorted_edges(mst: &StreamingMst<&'static str, i32>) -> Vec<(&'static str, &'static str, i32)> {
    let mut edges = mst.edges();
    edges.sort();
    edges
}

/// Asserts that the reported edge set is acyclic and that every connected component carries
/// exactly one fewer edge than it has vertices.
fn assert_forest(edges: &[(u32, u32, i64)], n_vertices: usize) {
    let ids: HashSet<u32> = edges.iter().flat_map(|(a, b, _)| [*a, *b]).collect();
    let mut union_find = UnionFind::new(&ids);
    for (a, b, _) in edges {
        assert!(
            union_find.union(*a, *b),
            "maintained edge set contains a cycle through {a} and {b}"
        );
    }
    // Acyclicity plus the component count pins down edges = vertices - 1 per component.
    let n_components = ids
        .iter()
        .map(|v| union_find.find(*v))
        .collect::<HashSet<_>>()
        .len();
    assert_eq!(edges.len(), ids.len() - n_components);
    assert!(ids.len() <= n_vertices);
}

/// Reference minimum-spanning-forest weight of the streamed edges, computed offline.
fn kruskal_weight(edges: &[(u32, u32, i64)]) -> i64 {
    let ids: HashSet<u32> = edges.iter().flat_map(|(a, b, _)| [*a, *b]).collect();
    let mut sorted = edges.to_vec();
    sorted.sort_by_key(|(_, _, w)| *w);

    let mut union_find = UnionFind::new(&ids);
    sorted
        .into_iter()
        .filter(|(a, b, _)| union_find.union(*a, *b))
        .map(|(_, _, w)| w)
        .sum()
}

struct UnionFind {
    parent: HashMap<u32, u32>,
}

impl UnionFind {
    fn new(ids: &HashSet<u32>) -> Self {
        UnionFind {
            parent: ids.iter().map(|v| (*v, *v)).collect(),
        }
    }

    fn find(&mut self, v: u32) -> u32 {
        let p = self.parent[&v];
        if p == v {
            return v;
        }
        let root = self.find(p);
        self.parent.insert(v, root);
        root
    }

    // Returns false if the two vertices were already connected.
    fn union(&mut self, a: u32, b: u32) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        self.parent.insert(ra, rb);
        true
    }
}
