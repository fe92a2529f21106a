use log::{debug, trace};
use rustc_hash::FxHashMap;

use super::tree::{HuffmanTree, Node, NodeData};
use crate::error::{HuffError, Result};

/// One symbol and its bit-string code ('0' = left, '1' = right).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeEntry {
    pub symbol: u8,
    pub code: String,
}

impl CodeEntry {
    pub fn new(symbol: u8, code: impl Into<String>) -> Self {
        Self {
            symbol,
            code: code.into(),
        }
    }
}

/// Symbol codes in tree traversal order (left subtree before right subtree).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodeTable {
    entries: Vec<CodeEntry>,
}

impl CodeTable {
    /// Walk the tree depth first and record the path to every leaf.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut entries = Vec::with_capacity(tree.leaf_count());
        return_leaves(tree.root(), &mut String::new(), &mut entries);
        debug!("Derived {} codes from the tree", entries.len());
        Self { entries }
    }

    /// Wrap entries read back from storage. Codes are not checked here; encoding
    /// and decoding reject bad codes when they use them.
    pub fn from_entries(entries: Vec<CodeEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CodeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length of the longest code, 0 for an empty table.
    pub fn max_len(&self) -> usize {
        self.entries.iter().map(|e| e.code.len()).max().unwrap_or(0)
    }

    pub fn code_for(&self, symbol: u8) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.symbol == symbol)
            .map(|e| e.code.as_str())
    }

    /// Symbol to code lookup for encoding. If a symbol shows up twice the first entry wins.
    pub fn encode_map(&self) -> FxHashMap<u8, &str> {
        let mut map = FxHashMap::default();
        for entry in &self.entries {
            map.entry(entry.symbol).or_insert(entry.code.as_str());
        }
        map
    }
}

/// Recursively walk the tree, pushing '0' for each left turn and '1' for each right turn.
fn return_leaves(node: &Node, code: &mut String, leaves: &mut Vec<CodeEntry>) {
    match &node.node_data {
        NodeData::Kids(left, right) => {
            code.push('0');
            return_leaves(left, code, leaves);
            code.pop();
            code.push('1');
            return_leaves(right, code, leaves);
            code.pop();
        }
        NodeData::Leaf(sym) => {
            trace!("Symbol {} gets code {}", sym, code);
            leaves.push(CodeEntry::new(*sym, code.clone()));
        }
    };
}

/// Convert a bit-string code to bits. Empty codes and anything but '0' / '1' are rejected.
pub fn code_bits(code: &str) -> Result<Vec<bool>> {
    if code.is_empty() {
        return Err(HuffError::InvalidCodeSymbol {
            code: code.to_string(),
        });
    }
    code.chars()
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            _ => Err(HuffError::InvalidCodeSymbol {
                code: code.to_string(),
            }),
        })
        .collect()
}

/// Codes grouped by bit length, for decoding. Bucket `n` holds every code of
/// length `n`; bucket 0 is always empty.
#[derive(Debug)]
pub struct CodeTableByLength {
    buckets: Vec<FxHashMap<Vec<bool>, u8>>,
}

impl CodeTableByLength {
    pub fn new(table: &CodeTable) -> Result<Self> {
        let max_len = table.max_len();
        let mut buckets = vec![FxHashMap::default(); max_len + 1];
        for entry in table.entries() {
            let bits = code_bits(&entry.code)?;
            buckets[bits.len()].entry(bits).or_insert(entry.symbol);
        }
        let by_len = Self { buckets };
        debug!(
            "Decode buckets: {:?}",
            (0..=by_len.max_len())
                .map(|len| by_len.bucket_len(len))
                .collect::<Vec<_>>()
        );
        Ok(by_len)
    }

    pub fn max_len(&self) -> usize {
        self.buckets.len().saturating_sub(1)
    }

    /// Look up a code of exactly `bits.len()` bits.
    pub fn lookup(&self, bits: &[bool]) -> Option<u8> {
        self.buckets
            .get(bits.len())
            .filter(|bucket| !bucket.is_empty())
            .and_then(|bucket| bucket.get(bits).copied())
    }

    /// Number of codes of the given length.
    pub fn bucket_len(&self, len: usize) -> usize {
        self.buckets.get(len).map_or(0, |b| b.len())
    }
}
