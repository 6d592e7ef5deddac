//! Huffman tree stored in an arena.
//!
//! Nodes live in a single vector and refer to their children by index. The
//! tree is either built from byte frequencies (compression) or grown from a
//! serialized symbol table (decompression).

use crate::error::{LzhError, Result};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

pub type NodeId = usize;

/// Longest code the table format can carry.
pub const MAX_CODE_WIDTH: u32 = 64;

/// A code word: the low `width` bits of `pattern`, read from the most
/// significant of them down, spell the path from the root to a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Symbol {
    pub pattern: u64,
    pub width: u32,
}

impl Symbol {
    pub const ROOT: Symbol = Symbol { pattern: 0, width: 0 };

    pub fn new(pattern: u64, width: u32) -> Self {
        Self { pattern, width }
    }

    /// Append a 1-bit.
    pub fn right_child(self) -> Result<Symbol> {
        self.child(1)
    }

    /// Append a 0-bit.
    pub fn left_child(self) -> Result<Symbol> {
        self.child(0)
    }

    fn child(self, bit: u64) -> Result<Symbol> {
        if self.width >= MAX_CODE_WIDTH {
            return Err(LzhError::CompressionError(format!(
                "Huffman code exceeds {} bits",
                MAX_CODE_WIDTH
            )));
        }
        Ok(Symbol {
            pattern: (self.pattern << 1) | bit,
            width: self.width + 1,
        })
    }

    /// Bit `index` of the path, 0 being the edge leaving the root.
    pub fn path_bit(self, index: u32) -> bool {
        (self.pattern >> (self.width - 1 - index)) & 1 == 1
    }

    /// True if `self` is a strict path prefix of `other`.
    pub fn is_prefix_of(self, other: Symbol) -> bool {
        self.width < other.width
            && (self.width == 0 || other.pattern >> (other.width - self.width) == self.pattern)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Internal {
        right: Option<NodeId>,
        left: Option<NodeId>,
    },
    Leaf {
        byte: u8,
    },
}

#[derive(Debug, Clone)]
pub struct Node {
    pub count: u64,
    pub kind: NodeKind,
    pub symbol: Symbol,
}

impl Node {
    fn leaf(byte: u8, count: u64) -> Self {
        Self {
            count,
            kind: NodeKind::Leaf { byte },
            symbol: Symbol::ROOT,
        }
    }

    fn internal(count: u64, right: Option<NodeId>, left: Option<NodeId>) -> Self {
        Self {
            count,
            kind: NodeKind::Internal { right, left },
            symbol: Symbol::ROOT,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }
}

#[derive(Debug, Clone, Default)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

/// Occurrences of each byte value.
pub fn count_frequencies(data: &[u8]) -> [u64; 256] {
    let mut frequencies = [0u64; 256];
    for &byte in data {
        frequencies[byte as usize] += 1;
    }
    frequencies
}

impl HuffmanTree {
    pub fn from_data(data: &[u8]) -> Self {
        Self::from_frequencies(&count_frequencies(data))
    }

    /// Classic Huffman construction. The queue is ordered by count, ties going
    /// to whichever node entered the queue first, so equal input always gives
    /// the same tree. The first node popped becomes the right child.
    pub fn from_frequencies(frequencies: &[u64; 256]) -> Self {
        let mut tree = Self::default();
        let mut queue = BinaryHeap::new();
        let mut sequence = 0u64;

        for (byte, &count) in frequencies.iter().enumerate() {
            if count > 0 {
                let id = tree.push(Node::leaf(byte as u8, count));
                queue.push(Reverse((count, sequence, id)));
                sequence += 1;
            }
        }

        while queue.len() > 1 {
            let (Some(Reverse((right_count, _, right))), Some(Reverse((left_count, _, left)))) =
                (queue.pop(), queue.pop())
            else {
                break;
            };
            let count = right_count + left_count;
            let id = tree.push(Node::internal(count, Some(right), Some(left)));
            queue.push(Reverse((count, sequence, id)));
            sequence += 1;
        }

        tree.root = queue.pop().map(|Reverse((_, _, id))| id);
        tree
    }

    /// Grow a tree from `(byte, code)` records. Missing internal nodes along
    /// each path are created on the way down; the leaf hangs off the last bit.
    pub fn from_table(entries: &[(u8, Symbol)]) -> Result<Self> {
        let mut tree = Self::default();
        let root = tree.push(Node::internal(0, None, None));
        tree.root = Some(root);

        for &(byte, symbol) in entries {
            if symbol.width == 0 || symbol.width > MAX_CODE_WIDTH {
                return Err(corrupt(format!(
                    "invalid code width {} for byte {}",
                    symbol.width, byte
                )));
            }
            if symbol.width < MAX_CODE_WIDTH && symbol.pattern >> symbol.width != 0 {
                return Err(corrupt(format!("code for byte {} wider than its width", byte)));
            }

            let mut node = root;
            for index in 0..symbol.width - 1 {
                let bit = symbol.path_bit(index);
                node = match tree.child(node, bit) {
                    Some(child) if tree.nodes[child].is_leaf() => {
                        return Err(corrupt(format!("code for byte {} passes through a leaf", byte)));
                    }
                    Some(child) => child,
                    None => {
                        let child = tree.push(Node::internal(0, None, None));
                        tree.set_child(node, bit, child);
                        child
                    }
                };
            }

            let last = symbol.pattern & 1 == 1;
            if tree.child(node, last).is_some() {
                return Err(corrupt(format!("code for byte {} is already taken", byte)));
            }
            let mut leaf = Node::leaf(byte, 0);
            leaf.symbol = symbol;
            let leaf = tree.push(leaf);
            tree.set_child(node, last, leaf);
        }

        Ok(tree)
    }

    fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    fn set_child(&mut self, parent: NodeId, bit: bool, child: NodeId) {
        if let NodeKind::Internal { right, left } = &mut self.nodes[parent].kind {
            if bit {
                *right = Some(child);
            } else {
                *left = Some(child);
            }
        }
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Right child for a 1-bit, left child for a 0-bit. Leaves have neither.
    pub fn child(&self, id: NodeId, bit: bool) -> Option<NodeId> {
        match self.nodes[id].kind {
            NodeKind::Internal { right, left } => {
                if bit {
                    right
                } else {
                    left
                }
            }
            NodeKind::Leaf { .. } => None,
        }
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_leaf()).count()
    }

    /// Walk the tree from the root and give every node its code word.
    /// A tree made of a single leaf gets the one-bit code `0`, since a
    /// zero-width code could not be told apart in the bit stream.
    pub fn assign_symbols(&mut self) -> Result<()> {
        let root = match self.root {
            Some(root) => root,
            None => return Ok(()),
        };

        if self.nodes[root].is_leaf() {
            self.nodes[root].symbol = Symbol::new(0, 1);
            return Ok(());
        }

        self.nodes[root].symbol = Symbol::ROOT;
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let symbol = self.nodes[id].symbol;
            if let NodeKind::Internal { right, left } = self.nodes[id].kind {
                if let Some(right) = right {
                    self.nodes[right].symbol = symbol.right_child()?;
                    stack.push(right);
                }
                if let Some(left) = left {
                    self.nodes[left].symbol = symbol.left_child()?;
                    stack.push(left);
                }
            }
        }
        Ok(())
    }

    /// Code word of every leaf, indexed by byte value.
    pub fn code_table(&self) -> [Option<Symbol>; 256] {
        let mut table = [None; 256];
        for node in &self.nodes {
            if let NodeKind::Leaf { byte } = node.kind {
                table[byte as usize] = Some(node.symbol);
            }
        }
        table
    }
}

fn corrupt(message: String) -> LzhError {
    LzhError::DecodeError(format!("corrupt Huffman table: {}", message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols_for(data: &[u8]) -> [Option<Symbol>; 256] {
        let mut tree = HuffmanTree::from_data(data);
        tree.assign_symbols().unwrap();
        tree.code_table()
    }

    #[test]
    fn test_frequency_table() {
        let frequencies = count_frequencies(b"Hello, world!");
        assert_eq!(frequencies[b'l' as usize], 3);
        assert_eq!(frequencies[b'o' as usize], 2);
        assert_eq!(frequencies[b'z' as usize], 0);
    }

    #[test]
    fn test_two_leaf_tree() {
        let mut tree = HuffmanTree::from_data(&[65, 65, 65, 66]);
        assert_eq!(tree.leaf_count(), 2);
        let root = tree.root().unwrap();
        assert_eq!(tree.node(root).count, 4);

        tree.assign_symbols().unwrap();
        let table = tree.code_table();
        // The rarer byte is popped first and becomes the right child.
        assert_eq!(table[66], Some(Symbol::new(1, 1)));
        assert_eq!(table[65], Some(Symbol::new(0, 1)));
    }

    #[test]
    fn test_single_leaf_gets_one_bit() {
        let mut tree = HuffmanTree::from_data(b"zzzz");
        let root = tree.root().unwrap();
        assert!(tree.node(root).is_leaf());
        tree.assign_symbols().unwrap();
        assert_eq!(tree.code_table()[b'z' as usize], Some(Symbol::new(0, 1)));
    }

    #[test]
    fn test_empty_tree() {
        let mut tree = HuffmanTree::from_data(b"");
        assert!(tree.root().is_none());
        assert!(tree.assign_symbols().is_ok());
        assert!(tree.code_table().iter().all(Option::is_none));
    }

    #[test]
    fn test_ties_are_deterministic() {
        let data: Vec<u8> = (0..=255u8).chain(0..=255u8).collect();
        let first = symbols_for(&data);
        let second = symbols_for(&data);
        assert_eq!(first, second);
        // 256 equally likely bytes make a perfectly balanced tree.
        assert!(first.iter().all(|s| s.map(|s| s.width) == Some(8)));
    }

    #[test]
    fn test_codes_are_prefix_free() {
        let data = b"abracadabra alakazam, the quick brown fox jumps over the lazy dog";
        let codes: Vec<Symbol> = symbols_for(data).iter().flatten().copied().collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!a.is_prefix_of(*b), "{:?} is a prefix of {:?}", a, b);
                    assert_ne!(a, b);
                }
            }
        }
    }

    #[test]
    fn test_rebuilt_tree_matches() {
        let data = b"mississippi river banks";
        let mut built = HuffmanTree::from_data(data);
        built.assign_symbols().unwrap();
        let table = built.code_table();
        let entries: Vec<(u8, Symbol)> = table
            .iter()
            .enumerate()
            .filter_map(|(byte, s)| s.map(|s| (byte as u8, s)))
            .collect();

        let rebuilt = HuffmanTree::from_table(&entries).unwrap();
        assert_eq!(rebuilt.leaf_count(), built.leaf_count());

        // Following each code from the root lands on the matching leaf.
        for &(byte, symbol) in &entries {
            let mut node = rebuilt.root().unwrap();
            for index in 0..symbol.width {
                node = rebuilt.child(node, symbol.path_bit(index)).unwrap();
            }
            assert_eq!(rebuilt.node(node).kind, NodeKind::Leaf { byte });
        }
    }

    #[test]
    fn test_conflicting_table_rejected() {
        let zero_width = [(1u8, Symbol::new(0, 0))];
        assert!(HuffmanTree::from_table(&zero_width).is_err());

        let duplicate = [(1u8, Symbol::new(1, 2)), (2u8, Symbol::new(1, 2))];
        assert!(HuffmanTree::from_table(&duplicate).is_err());

        let through_leaf = [(1u8, Symbol::new(1, 1)), (2u8, Symbol::new(0b10, 2))];
        assert!(HuffmanTree::from_table(&through_leaf).is_err());

        let overwide = [(1u8, Symbol::new(0b100, 2))];
        assert!(HuffmanTree::from_table(&overwide).is_err());
    }

    #[test]
    fn test_symbol_paths() {
        let symbol = Symbol::ROOT.right_child().unwrap().left_child().unwrap();
        assert_eq!(symbol, Symbol::new(0b10, 2));
        assert!(symbol.path_bit(0));
        assert!(!symbol.path_bit(1));
        assert!(Symbol::new(1, 1).is_prefix_of(symbol));
        assert!(!Symbol::new(0, 1).is_prefix_of(symbol));

        assert!(Symbol::new(0, MAX_CODE_WIDTH).left_child().is_err());
    }
}
