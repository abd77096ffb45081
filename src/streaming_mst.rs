use crate::link_cut::LinkCutForest;
use crate::splay_forest::SplayLinkCutForest;
use num_traits::PrimInt;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Online minimum spanning forest maintenance over a stream of weighted, undirected edges.
/// Generic over the vertex identity type `V`, the primitive integer weight type `W`, and the
/// link-cut forest implementation `F`.
///
/// The maintainer keeps three pieces of state in lock-step: the set of vertices seen so far,
/// a link-cut forest holding the current spanning forest, and a registry mapping each forest
/// edge (stored under its canonical `(min, max)` vertex pair) to its weight. The registry's
/// key set is always exactly the forest's edge set, so reading the forest out is a plain
/// registry scan with no tree traversal.
///
/// Vertex identities need a strict total order (`Ord`) for the canonical registry keys; any
/// consistent order will do. Two distinct identities must never compare equal.
#[derive(Debug, Clone)]
pub struct StreamingMst<V, W, F = SplayLinkCutForest<V>> {
    vertices: HashSet<V>,
    forest: F,
    registry: HashMap<(V, V), W>,
}

impl<V, W> StreamingMst<V, W>
where
    V: Clone + Eq + Ord + Hash,
    W: PrimInt,
{
    /// Creates an empty maintainer backed by a splay-tree link-cut forest.
    pub fn new() -> Self {
        StreamingMst::with_forest(SplayLinkCutForest::new())
    }
}

impl<V, W> Default for StreamingMst<V, W>
where
    V: Clone + Eq + Ord + Hash,
    W: PrimInt,
{
    fn default() -> Self {
        StreamingMst::new()
    }
}

impl<V, W, F> StreamingMst<V, W, F>
where
    V: Clone + Eq + Ord + Hash,
    W: PrimInt,
    F: LinkCutForest<V>,
{
    /// Creates an empty maintainer backed by a caller-supplied link-cut forest, which must
    /// itself be empty.
    pub fn with_forest(forest: F) -> Self {
        StreamingMst {
            vertices: HashSet::new(),
            forest,
            registry: HashMap::new(),
        }
    }

    /// Feeds one edge of the stream into the maintained forest.
    ///
    /// Unseen endpoints are registered on the fly. An edge between two components merges
    /// them. An edge whose endpoints are already connected closes a cycle, and the heaviest
    /// edge on that cycle is evicted, unless the heaviest is the new edge itself, in which
    /// case the new edge is discarded. Ties favour the edges already in the forest; only a
    /// strictly heavier existing edge is ever replaced. Duplicate edges are reprocessed as
    /// ordinary candidates, and self-loops are discarded outright since they can never span.
    ///
    /// # Examples
    /// ```
    ///use streaming_mst::StreamingMst;
    ///
    ///let mut mst: StreamingMst<u32, i64> = StreamingMst::new();
    ///mst.ingest(1, 2, 7);
    ///mst.ingest(2, 3, 4);
    ///mst.ingest(1, 3, 10);   // heavier than the cycle it closes: discarded
    ///assert_eq!(mst.total_weight(), 11);
    /// ```
    pub fn ingest(&mut self, v1: V, v2: V, weight: W) {
        if v1 == v2 {
            return;
        }
        match (self.vertices.contains(&v1), self.vertices.contains(&v2)) {
            (false, false) => self.insert_new_pair(v1, v2, weight),
            (true, false) => self.attach_new_vertex(v1, v2, weight),
            (false, true) => self.attach_new_vertex(v2, v1, weight),
            (true, true) => self.process_known_pair(v1, v2, weight),
        }
    }

    /// Returns the current minimum spanning forest as `(vertex, vertex, weight)` triples,
    /// one per forest edge, in no particular order. Each pair is reported in canonical
    /// `(min, max)` order.
    pub fn edges(&self) -> Vec<(V, V, W)> {
        self.registry
            .iter()
            .map(|((a, b), w)| (a.clone(), b.clone(), *w))
            .collect()
    }

    /// The combined weight of every edge currently in the forest.
    pub fn total_weight(&self) -> W {
        self.registry
            .values()
            .fold(W::zero(), |total, w| total + *w)
    }

    /// The number of distinct vertex identities seen on the stream so far.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// The number of edges currently in the forest.
    pub fn num_edges(&self) -> usize {
        self.registry.len()
    }

    /// Whether `v` has appeared as an endpoint of any streamed edge.
    pub fn contains_vertex(&self, v: &V) -> bool {
        self.vertices.contains(v)
    }

    // Both endpoints unseen: a fresh two-vertex component.
    fn insert_new_pair(&mut self, v1: V, v2: V, weight: W) {
        self.vertices.insert(v1.clone());
        self.vertices.insert(v2.clone());
        self.record_edge(&v1, &v2, weight);
        self.forest.make_tree(v1.clone());
        self.forest.make_tree(v2.clone());
        self.forest.link(&v1, &v2);
    }

    // Exactly one endpoint unseen: graft the new vertex under the known one.
    fn attach_new_vertex(&mut self, known: V, fresh: V, weight: W) {
        self.vertices.insert(fresh.clone());
        self.record_edge(&known, &fresh, weight);
        self.forest.make_tree(fresh.clone());
        self.forest.link(&fresh, &known);
    }

    fn process_known_pair(&mut self, v1: V, v2: V, weight: W) {
        if self.forest.find_root(&v1) != self.forest.find_root(&v2) {
            self.merge_components(v1, v2, weight);
        } else {
            self.break_cycle(v1, v2, weight);
        }
    }

    // Endpoints in different components: the edge joins them, no cycle possible.
    fn merge_components(&mut self, v1: V, v2: V, weight: W) {
        self.record_edge(&v1, &v2, weight);
        self.reroot(&v1);
        self.reroot(&v2);
        self.forest.link(&v1, &v2);
    }

    // Endpoints already connected: the candidate edge closes a cycle. Enumerate the cycle,
    // find its heaviest edge, and keep the candidate only if that heaviest edge is strictly
    // heavier, evicting it.
    fn break_cycle(&mut self, v1: V, v2: V, weight: W) {
        let mut path1 = self.forest.find_path(&v1);
        let mut path2 = self.forest.find_path(&v2);
        strip_to_pivot(&mut path1, &mut path2);

        // The consecutive pairs of both stripped paths are exactly the tree edges of the
        // cycle the candidate would close. The running maximum starts at the candidate.
        let mut max_weight = weight;
        let mut max_edge = (v1.clone(), v2.clone());
        for pair in path1.windows(2).chain(path2.windows(2)) {
            let measured = self.edge_weight(&pair[0], &pair[1]);
            if measured > max_weight {
                max_weight = measured;
                max_edge = (pair[0].clone(), pair[1].clone());
            }
        }

        // No existing cycle edge is strictly heavier: swapping can never reduce the total
        // weight, so the candidate is discarded and nothing changes.
        if max_weight == weight {
            return;
        }

        // Evict before recording: when the candidate duplicates the evicted edge at a
        // lower weight, both share one canonical key.
        let (deeper, shallower) = max_edge;
        self.forget_edge(&deeper, &shallower);
        self.forest.cut(&deeper);
        self.record_edge(&v1, &v2, weight);
        self.reroot(&v1);
        self.reroot(&v2);
        self.forest.link(&v1, &v2);
    }

    // Makes v the root of its represented tree by flipping every edge on its root path,
    // starting from the old root. Costs one cut+link per path edge.
    fn reroot(&mut self, v: &V) {
        let path = self.forest.find_path(v);
        for i in (1..path.len()).rev() {
            let parent = &path[i];
            let child = &path[i - 1];
            self.forest.cut(child);
            self.forest.link(parent, child);
        }
    }

    fn canonical_key(a: &V, b: &V) -> (V, V) {
        if a < b {
            (a.clone(), b.clone())
        } else {
            (b.clone(), a.clone())
        }
    }

    fn record_edge(&mut self, a: &V, b: &V, weight: W) {
        self.registry.insert(Self::canonical_key(a, b), weight);
    }

    fn forget_edge(&mut self, a: &V, b: &V) {
        self.registry.remove(&Self::canonical_key(a, b));
    }

    // Registry lookups during cycle scans only ever ask about forest edges, which are
    // always registered; a miss is indexing's panic.
    fn edge_weight(&self, a: &V, b: &V) -> W {
        self.registry[&Self::canonical_key(a, b)]
    }
}

/// Removes the common suffix of two vertex-to-root paths, leaving each path running from its
/// own endpoint down to (and including) the single shared pivot vertex, the lowest common
/// ancestor of the two endpoints. Both paths must end at the same root.
fn strip_to_pivot<V: Eq + Clone>(path1: &mut Vec<V>, path2: &mut Vec<V>) {
    let mut pivot = None;
    while let (Some(a), Some(b)) = (path1.last(), path2.last()) {
        if a != b {
            break;
        }
        pivot = path1.pop();
        path2.pop();
    }
    if let Some(pivot) = pivot {
        path1.push(pivot.clone());
        path2.push(pivot);
    }
}
