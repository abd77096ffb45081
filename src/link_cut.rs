/// A forest of rooted trees over vertices of type `V`, supporting tree joins and splits plus
/// root and root-path queries, each in amortized logarithmic time.
///
/// The trees maintained by the forest (the "represented" trees) are never stored explicitly;
/// implementations are free to keep whatever auxiliary structure they like, as long as the
/// queries below answer against the represented forest. Every operation may restructure that
/// auxiliary state, which is why the queries take `&mut self`.
///
/// The preconditions stated on each operation are caller contracts. Violating one is a
/// programming defect and implementations are expected to panic rather than repair or
/// silently ignore it.
pub trait LinkCutForest<V> {
    /// Adds `v` to the forest as a new single-vertex tree.
    ///
    /// # Panics
    /// If `v` is already present in the forest.
    fn make_tree(&mut self, v: V);

    /// Joins two trees by making `parent` the represented-tree parent of `root`.
    ///
    /// `root` must currently be the root of its represented tree, and `parent` must belong
    /// to a different tree.
    ///
    /// # Panics
    /// If either vertex is unknown, or if `root` is not a represented-tree root. Linking two
    /// vertices of the same tree is undefined behaviour at the represented-forest level and
    /// is not detected.
    fn link(&mut self, root: &V, parent: &V);

    /// Removes the edge between `v` and its represented-tree parent, so that `v`'s subtree
    /// becomes a tree of its own. A no-op if `v` is already a root.
    ///
    /// # Panics
    /// If `v` is unknown.
    fn cut(&mut self, v: &V);

    /// Returns the root of the represented tree containing `v`.
    ///
    /// # Panics
    /// If `v` is unknown.
    fn find_root(&mut self, v: &V) -> V;

    /// Returns the vertices on the path from `v` to its represented-tree root, in order
    /// `v`, parent of `v`, ..., root. Both endpoints are included, so the path of a root is
    /// a singleton.
    ///
    /// # Panics
    /// If `v` is unknown.
    fn find_path(&mut self, v: &V) -> Vec<V>;
}
