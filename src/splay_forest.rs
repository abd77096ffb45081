use crate::link_cut::LinkCutForest;
use std::collections::HashMap;
use std::hash::Hash;

/// One slot of the node arena. The three splay links (`left`, `right`, `parent`) tie the node
/// into the auxiliary tree of its current preferred path; `path_parent` is only ever set on an
/// auxiliary-tree root and points at the represented-tree vertex its path hangs from.
#[derive(Debug, Clone)]
struct Node<V> {
    vertex: V,
    left: Option<usize>,
    right: Option<usize>,
    parent: Option<usize>,
    path_parent: Option<usize>,
}

impl<V> Node<V> {
    fn new(vertex: V) -> Self {
        Node {
            vertex,
            left: None,
            right: None,
            parent: None,
            path_parent: None,
        }
    }
}

/// A link-cut forest realized with per-preferred-path splay trees, after Sleator and Tarjan.
///
/// Each represented tree is partitioned into preferred paths. A path is stored as one splay
/// tree ordered by represented-tree depth, shallower vertices to the left, so the represented
/// root of a fully exposed path is the leftmost auxiliary node. Nodes live in an arena and
/// refer to each other by index, so no vertex is ever moved or dropped once registered.
#[derive(Debug, Clone, Default)]
pub struct SplayLinkCutForest<V> {
    nodes: Vec<Node<V>>,
    index: HashMap<V, usize>,
}

impl<V: Clone + Eq + Hash> SplayLinkCutForest<V> {
    /// Creates an empty forest.
    pub fn new() -> Self {
        SplayLinkCutForest {
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// The number of vertices registered in the forest.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no vertex has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `v` has been registered with `make_tree`.
    pub fn contains(&self, v: &V) -> bool {
        self.index.contains_key(v)
    }

    fn id(&self, v: &V) -> usize {
        *self
            .index
            .get(v)
            .expect("vertex was never registered with make_tree")
    }

    /// Exposes the path from the represented root down to `v` as a single auxiliary tree
    /// rooted at `v`, with `v` as the deepest (rightmost) element of its preferred path.
    fn access(&mut self, v: usize) {
        self.splay(v);

        // Whatever hung below v on its old preferred path becomes a path of its own.
        if let Some(r) = self.nodes[v].right.take() {
            self.nodes[r].path_parent = Some(v);
            self.nodes[r].parent = None;
        }

        // Walk path-parent links up to the represented root, splicing each ancestor path
        // onto the one being built. Paths are depth-ordered, and everything on the lower
        // path is deeper than everything on the ancestor path, so the lower path attaches
        // as a right subtree.
        let mut current = v;
        while let Some(w) = self.nodes[current].path_parent {
            self.splay(w);
            if let Some(r) = self.nodes[w].right {
                self.nodes[r].path_parent = Some(w);
                self.nodes[r].parent = None;
            }
            self.nodes[w].right = Some(current);
            self.nodes[current].parent = Some(w);
            self.nodes[current].path_parent = None;
            current = w;
        }

        self.splay(v);
    }

    /// Rotates `v` to the root of its auxiliary tree.
    fn splay(&mut self, v: usize) {
        while let Some(p) = self.nodes[v].parent {
            match self.nodes[p].parent {
                // Zig: the parent is the auxiliary root.
                None => self.rotate(v),
                Some(g) => {
                    let v_is_left = self.nodes[p].left == Some(v);
                    let p_is_left = self.nodes[g].left == Some(p);
                    if v_is_left == p_is_left {
                        // Zig-zig: rotate the parent edge first, then v's edge.
                        self.rotate(p);
                        self.rotate(v);
                    } else {
                        // Zig-zag: rotate v twice.
                        self.rotate(v);
                        self.rotate(v);
                    }
                }
            }
        }
    }

    /// Rotates the auxiliary-tree edge between `v` and its parent, lifting `v` one level.
    /// The path-parent reference always lives on the local subtree root, so it moves from
    /// the former parent onto `v`.
    fn rotate(&mut self, v: usize) {
        // Splay only rotates nodes that have a parent.
        let p = self.nodes[v].parent.expect("rotate requires a parent");
        let g = self.nodes[p].parent;

        if self.nodes[p].left == Some(v) {
            let inner = self.nodes[v].right;
            self.nodes[p].left = inner;
            if let Some(b) = inner {
                self.nodes[b].parent = Some(p);
            }
            self.nodes[v].right = Some(p);
        } else {
            let inner = self.nodes[v].left;
            self.nodes[p].right = inner;
            if let Some(b) = inner {
                self.nodes[b].parent = Some(p);
            }
            self.nodes[v].left = Some(p);
        }
        self.nodes[p].parent = Some(v);
        self.nodes[v].parent = g;

        if let Some(g) = g {
            if self.nodes[g].left == Some(p) {
                self.nodes[g].left = Some(v);
            } else {
                self.nodes[g].right = Some(v);
            }
        }

        self.nodes[v].path_parent = self.nodes[p].path_parent.take();
    }
}

impl<V: Clone + Eq + Hash> LinkCutForest<V> for SplayLinkCutForest<V> {
    fn make_tree(&mut self, v: V) {
        assert!(
            !self.index.contains_key(&v),
            "make_tree called on a vertex already in the forest"
        );
        let id = self.nodes.len();
        self.index.insert(v.clone(), id);
        self.nodes.push(Node::new(v));
    }

    fn link(&mut self, root: &V, parent: &V) {
        let r = self.id(root);
        let p = self.id(parent);

        // A represented root has nothing above it, so after access its auxiliary tree has
        // no left subtree.
        self.access(r);
        assert!(
            self.nodes[r].left.is_none(),
            "link requires its first operand to be a represented-tree root"
        );

        self.access(p);
        self.nodes[r].left = Some(p);
        self.nodes[p].parent = Some(r);
        self.nodes[p].path_parent = None;
    }

    fn cut(&mut self, v: &V) {
        let n = self.id(v);
        self.access(n);

        // Everything shallower than v sits in its left subtree; detaching it severs v from
        // its represented parent. A root has an empty left subtree and nothing happens.
        if let Some(l) = self.nodes[n].left.take() {
            self.nodes[l].parent = None;
            self.nodes[l].path_parent = None;
        }
    }

    fn find_root(&mut self, v: &V) -> V {
        let mut n = self.id(v);
        self.access(n);

        // Depth ordering puts the represented root leftmost.
        while let Some(l) = self.nodes[n].left {
            n = l;
        }

        // The root may sit linearly deep in the auxiliary tree. Splaying it keeps repeated
        // root queries amortized logarithmic.
        self.splay(n);
        self.nodes[n].vertex.clone()
    }

    fn find_path(&mut self, v: &V) -> Vec<V> {
        let n = self.id(v);
        self.access(n);

        // Reverse in-order traversal (right, self, left) of the exposed auxiliary tree
        // yields deepest-first order, i.e. v, parent(v), ..., root. Iterative with an
        // explicit stack so adversarially long paths cannot overflow the call stack.
        let mut path = Vec::new();
        let mut stack = Vec::new();
        let mut current = Some(n);
        while current.is_some() || !stack.is_empty() {
            while let Some(c) = current {
                stack.push(c);
                current = self.nodes[c].right;
            }
            // The inner loop above always leaves at least one entry on the stack.
            let c = stack.pop().unwrap();
            path.push(self.nodes[c].vertex.clone());
            current = self.nodes[c].left;
        }
        path
    }
}
