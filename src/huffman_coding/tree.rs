use log::{debug, trace};

use crate::error::{HuffError, Result};
use crate::tools::freq_count::SYMBOL_COUNT;

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf(u8),
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    pub weight: u32,
    pub depth: u16,
    pub node_data: NodeData,
}

impl Node {
    /// Create a new leaf node
    pub fn leaf(symbol: u8, weight: u32) -> Node {
        Node {
            weight,
            depth: 0,
            node_data: NodeData::Leaf(symbol),
        }
    }

    /// Join two nodes under a new parent. `left` takes the '0' branch.
    pub fn join(left: Node, right: Node) -> Node {
        Node {
            weight: left.weight + right.weight,
            depth: left.depth.max(right.depth) + 1,
            node_data: NodeData::Kids(Box::new(left), Box::new(right)),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }
}

/// A Huffman prefix-code tree. Owns its root, and through it every node.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    root: Node,
}

impl HuffmanTree {
    /// Build the tree from a frequency table. Symbols with a zero count are left out.
    pub fn from_freqs(freqs: &[u32; SYMBOL_COUNT]) -> Result<Self> {
        // Live nodes, seeded with one leaf per used symbol in ascending symbol order.
        let mut nodes: Vec<Node> = freqs
            .iter()
            .enumerate()
            .filter(|&(_, &f)| f > 0)
            .map(|(sym, &f)| Node::leaf(sym as u8, f))
            .collect();

        match nodes.len() {
            0 => return Err(HuffError::EmptyInput),
            1 => {
                // A lone symbol still needs a one bit code, so give it a sibling.
                let only = take_min(&mut nodes).ok_or(HuffError::EmptyInput)?;
                let sentinel = match only.node_data {
                    NodeData::Leaf(0) => 1,
                    _ => 0,
                };
                debug!("Single symbol input, adding placeholder leaf {}", sentinel);
                let root = Node::join(only, Node::leaf(sentinel, 1));
                return Ok(Self { root });
            }
            n => debug!("Building huffman tree from {} symbols", n),
        }

        while nodes.len() > 1 {
            let (Some(left), Some(right)) = (take_min(&mut nodes), take_min(&mut nodes)) else {
                return Err(HuffError::EmptyInput);
            };
            trace!("Joining weights {} and {}", left.weight, right.weight);
            nodes.push(Node::join(left, right));
        }

        let root = nodes.pop().ok_or(HuffError::EmptyInput)?;
        debug!(
            "Tree built: weight {}, depth {}",
            root.weight, root.depth
        );
        Ok(Self { root })
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Total weight of the tree, which is the sum of every leaf weight.
    pub fn weight(&self) -> u32 {
        self.root.weight
    }

    /// Length of the longest root to leaf path.
    pub fn depth(&self) -> u16 {
        self.root.depth
    }

    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            if node.is_leaf() {
                count += 1;
            } else if let NodeData::Kids(left, right) = &node.node_data {
                stack.push(right);
                stack.push(left);
            }
        }
        count
    }

    /// Dump the tree shape to the trace log.
    pub fn print_structure(&self) {
        trace!("Huffman tree structure:");
        print_node(&self.root, 0, "root");
    }
}

/// Remove and return the lightest node. Scans linearly; on equal weights the
/// earliest node in the list wins, which keeps tree shape reproducible.
fn take_min(nodes: &mut Vec<Node>) -> Option<Node> {
    if nodes.is_empty() {
        return None;
    }
    let mut min_idx = 0;
    for (i, node) in nodes.iter().enumerate().skip(1) {
        if node.weight < nodes[min_idx].weight {
            min_idx = i;
        }
    }
    Some(nodes.remove(min_idx))
}

fn print_node(node: &Node, depth: usize, label: &str) {
    let indent = "  ".repeat(depth);
    match &node.node_data {
        NodeData::Leaf(sym) => {
            trace!("{}{} -> leaf {} [weight {}]", indent, label, sym, node.weight)
        }
        NodeData::Kids(left, right) => {
            trace!("{}{} -> kids [weight {}]", indent, label, node.weight);
            print_node(left, depth + 1, "0");
            print_node(right, depth + 1, "1");
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tools::freq_count::freqs;

    fn leaf_weights(node: &Node, out: &mut Vec<(u8, u32)>) {
        match &node.node_data {
            NodeData::Kids(l, r) => {
                leaf_weights(l, out);
                leaf_weights(r, out);
            }
            NodeData::Leaf(s) => out.push((*s, node.weight)),
        }
    }

    #[test]
    fn empty_input_test() {
        let f = [0_u32; SYMBOL_COUNT];
        assert!(matches!(
            HuffmanTree::from_freqs(&f),
            Err(HuffError::EmptyInput)
        ));
    }

    #[test]
    fn weight_conservation_test() {
        let data = b"the quick brown fox jumps over the lazy dog";
        let tree = HuffmanTree::from_freqs(&freqs(data)).unwrap();
        let mut leaves = vec![];
        leaf_weights(tree.root(), &mut leaves);
        let leaf_sum: u32 = leaves.iter().map(|(_, w)| w).sum();
        assert_eq!(tree.weight(), leaf_sum);
        assert_eq!(tree.weight() as usize, data.len());
        assert_eq!(tree.leaf_count(), leaves.len());
    }

    #[test]
    fn abacabad_shape_test() {
        let tree = HuffmanTree::from_freqs(&freqs(b"abacabad")).unwrap();
        assert_eq!(tree.leaf_count(), 4);
        assert_eq!(tree.weight(), 8);
        assert_eq!(tree.depth(), 3);
        // The heaviest symbol hangs directly off the root.
        match &tree.root().node_data {
            NodeData::Kids(left, right) => {
                assert_eq!(left.node_data, NodeData::Leaf(b'a'));
                assert!(!right.is_leaf());
            }
            NodeData::Leaf(_) => panic!("root should not be a leaf"),
        }
    }

    #[test]
    fn single_symbol_test() {
        let tree = HuffmanTree::from_freqs(&freqs(b"aaaa")).unwrap();
        assert_eq!(tree.leaf_count(), 2);
        assert_eq!(tree.weight(), 5);
        let mut leaves = vec![];
        leaf_weights(tree.root(), &mut leaves);
        assert_eq!(leaves, vec![(b'a', 4), (0, 1)]);
    }

    #[test]
    fn single_nul_symbol_test() {
        let tree = HuffmanTree::from_freqs(&freqs(&[0, 0, 0])).unwrap();
        let mut leaves = vec![];
        leaf_weights(tree.root(), &mut leaves);
        assert_eq!(leaves, vec![(0, 3), (1, 1)]);
    }

    #[test]
    fn tie_break_test() {
        // Four equal weights: (a,b) join first, then (c,d), then the two parents.
        let tree = HuffmanTree::from_freqs(&freqs(b"abcd")).unwrap();
        let mut leaves = vec![];
        leaf_weights(tree.root(), &mut leaves);
        assert_eq!(
            leaves,
            vec![(b'a', 1), (b'b', 1), (b'c', 1), (b'd', 1)]
        );
        assert_eq!(tree.depth(), 2);
    }
}
