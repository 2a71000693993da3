use crate::maze::{Coord, Maze};

/// Index of a node in a [`CellTree`]. Equal to the arena index of its cell.
pub type NodeId = usize;

#[derive(Debug, Clone)]
struct Node {
    coord: Coord,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    /// Number of nodes in the subtree. Only kept current on roots.
    size: usize,
}

/// Disjoint-set forest with one node per live cell.
///
/// Nodes point at their parent by index and keep a list of their children, so
/// whole trees can be walked from the root. No path compression: trees stay
/// shallow because the smaller tree is always attached under the larger.
pub struct CellTree {
    nodes: Vec<Option<Node>>,
    width: u16,
    height: u16,
}

impl CellTree {
    /// Creates a forest of singleton trees, one per live cell of `maze`.
    pub fn new(maze: &Maze) -> Self {
        let mut nodes = vec![None; maze.width() as usize * maze.height() as usize];
        for coord in maze.coords() {
            if let Some(idx) = maze.index_of(coord) {
                nodes[idx] = Some(Node {
                    coord,
                    parent: None,
                    children: Vec::new(),
                    size: 1,
                });
            }
        }
        CellTree {
            nodes,
            width: maze.width(),
            height: maze.height(),
        }
    }

    fn node_id(&self, coord: Coord) -> Option<NodeId> {
        if coord.0 >= self.width || coord.1 >= self.height {
            return None;
        }
        let id = coord.1 as usize * self.width as usize + coord.0 as usize;
        self.nodes[id].as_ref().map(|_| id)
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id).and_then(Option::as_ref)
    }

    pub fn coord(&self, id: NodeId) -> Option<Coord> {
        self.node(id).map(|n| n.coord)
    }

    /// Root of the tree containing `coord`.
    pub fn find(&self, coord: Coord) -> Option<NodeId> {
        let mut id = self.node_id(coord)?;
        while let Some(parent) = self.node(id)?.parent {
            id = parent;
        }
        Some(id)
    }

    pub fn same_tree(&self, a: Coord, b: Coord) -> bool {
        match (self.find(a), self.find(b)) {
            (Some(ra), Some(rb)) => ra == rb,
            _ => false,
        }
    }

    /// Merges the trees containing `a` and `b` by attaching the smaller root
    /// under the larger one.
    ///
    /// # Returns
    /// `false` if they were already in the same tree or either is not a cell.
    pub fn union(&mut self, a: Coord, b: Coord) -> bool {
        let (Some(ra), Some(rb)) = (self.find(a), self.find(b)) else {
            return false;
        };
        if ra == rb {
            return false;
        }
        let (size_a, size_b) = (self.tree_size_of_root(ra), self.tree_size_of_root(rb));
        let (root, child) = if size_a >= size_b { (ra, rb) } else { (rb, ra) };

        if let Some(node) = self.nodes[child].as_mut() {
            node.parent = Some(root);
        }
        if let Some(node) = self.nodes[root].as_mut() {
            node.children.push(child);
            node.size = size_a + size_b;
        }
        true
    }

    fn tree_size_of_root(&self, root: NodeId) -> usize {
        self.node(root).map_or(0, |n| n.size)
    }

    /// Size of the tree containing `coord`, in O(depth).
    pub fn tree_size(&self, coord: Coord) -> usize {
        self.find(coord).map_or(0, |root| self.tree_size_of_root(root))
    }

    /// Counts the nodes of the subtree rooted at `root`, including it.
    pub fn count_nodes(&self, root: NodeId) -> usize {
        let mut count = 0;
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.node(id) {
                count += 1;
                stack.extend(node.children.iter().copied());
            }
        }
        count
    }

    /// Searches the subtree rooted at `root` for `coord`.
    pub fn contains_cell(&self, root: NodeId, coord: Coord) -> bool {
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.node(id) {
                if node.coord == coord {
                    return true;
                }
                stack.extend(node.children.iter().copied());
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let maze = Maze::new(3, 2).unwrap();
        let tree = CellTree::new(&maze);
        assert!(!tree.same_tree((0, 0), (1, 0)));
        assert_eq!(tree.tree_size((2, 1)), 1);
        let root = tree.find((2, 1)).unwrap();
        assert_eq!(tree.coord(root), Some((2, 1)));
        assert_eq!(tree.count_nodes(root), 1);
        assert_eq!(tree.find((3, 0)), None);
    }

    #[test]
    fn test_union_merges_trees() {
        let maze = Maze::new(3, 2).unwrap();
        let mut tree = CellTree::new(&maze);
        assert!(tree.union((0, 0), (1, 0)));
        assert!(tree.union((2, 1), (2, 0)));
        assert!(!tree.union((1, 0), (0, 0)));
        assert!(tree.same_tree((0, 0), (1, 0)));
        assert!(!tree.same_tree((0, 0), (2, 0)));

        assert!(tree.union((1, 0), (2, 1)));
        let root = tree.find((0, 0)).unwrap();
        assert_eq!(tree.find((2, 0)), Some(root));
        assert_eq!(tree.count_nodes(root), 4);
        assert_eq!(tree.tree_size((2, 1)), 4);
        assert!(tree.contains_cell(root, (2, 0)));
        assert!(!tree.contains_cell(root, (0, 1)));
    }

    #[test]
    fn test_removed_cells_have_no_node() {
        let mut maze = Maze::new(2, 1).unwrap();
        maze.remove_cell((1, 0));
        let mut tree = CellTree::new(&maze);
        assert_eq!(tree.find((1, 0)), None);
        assert!(!tree.union((0, 0), (1, 0)));
        assert!(!tree.same_tree((0, 0), (1, 0)));
    }
}
