//! Online minimum spanning forest ("MSF") maintenance in Rust. Generic over the vertex
//! identity and primitive integer weight types.
//!
//! Weighted edges of an undirected graph arrive one at a time, and after every arrival the
//! maintained forest is a minimum spanning forest of every edge streamed so far, without ever
//! recomputing from scratch. The interesting machinery is the link-cut forest underneath:
//!  1. Each tree of the forest is decomposed into preferred paths, every path stored as a
//!     splay tree keyed by depth. Root queries, root-to-vertex path extraction, tree splitting
//!     and tree joining all run in amortized logarithmic time;
//!  2. When a streamed edge closes a cycle, the two root paths of its endpoints enumerate that
//!     cycle exactly, so the heaviest edge on it can be found and evicted if the new edge is
//!     strictly lighter. Edges that never beat an existing cycle edge are discarded; and
//!  3. Only insertion is supported. Deleting edges or vertices would require retaining the
//!     discarded non-tree edges, which is the materially larger fully-dynamic MST problem.
//!
//! # Examples
//! ```
//!use streaming_mst::StreamingMst;
//!
//!let mut mst: StreamingMst<&str, i32> = StreamingMst::new();
//!mst.ingest("a", "b", 5);
//!mst.ingest("b", "c", 3);
//!mst.ingest("a", "c", 1);
//!
//!// The cycle a-b-c-a is broken by evicting its heaviest edge, a-b.
//!let mut edges = mst.edges();
//!edges.sort();
//!assert_eq!(edges, vec![("a", "c", 1), ("b", "c", 3)]);
//!assert_eq!(mst.total_weight(), 4);
//! ```
//!
//! # References
//! * [Sleator, D.D.; Tarjan, R.E. A data structure for dynamic trees.](https://www.cs.cmu.edu/~sleator/papers/dynamic-trees.pdf)
//! * [Link/cut tree](https://en.wikipedia.org/wiki/Link/cut_tree)

pub use crate::link_cut::LinkCutForest;
pub use crate::splay_forest::SplayLinkCutForest;
pub use crate::streaming_mst::StreamingMst;

mod link_cut;
mod splay_forest;
mod streaming_mst;
