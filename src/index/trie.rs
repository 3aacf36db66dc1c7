// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix trie for autocomplete, stored as an arena.
//!
//! Nodes live in one `Vec` and refer to children by index, so there is no
//! `Box` chain to walk on drop and no ownership puzzle when traversing. Node 0
//! is the root and always exists.
//!
//! Children are kept in a `BTreeMap`, which pins traversal order: results of
//! [`PrefixTrie::autocomplete`] come back in lexicographic order.
//!
//! **Invariant**: a token is a member iff following its chars from the root
//! uses only existing edges and ends on a node with `terminal == true`.

use std::collections::BTreeMap;

const ROOT: usize = 0;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: BTreeMap<char, usize>,
    terminal: bool,
}

/// Arena-backed prefix tree of tokens.
#[derive(Debug, Clone)]
pub struct PrefixTrie {
    nodes: Vec<TrieNode>,
    len: usize,
}

impl Default for PrefixTrie {
    fn default() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            len: 0,
        }
    }
}

impl PrefixTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a token. Inserting the same token twice is a no-op.
    pub fn insert(&mut self, token: &str) {
        let mut current = ROOT;
        for ch in token.chars() {
            current = match self.nodes[current].children.get(&ch) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[current].children.insert(ch, child);
                    child
                }
            };
        }
        if !self.nodes[current].terminal {
            self.nodes[current].terminal = true;
            self.len += 1;
        }
    }

    /// Every inserted token that starts with `prefix`, lexicographically.
    ///
    /// Unknown prefix → empty. Empty prefix → every token.
    pub fn autocomplete(&self, prefix: &str) -> Vec<String> {
        let mut results = Vec::new();
        if let Some(start) = self.walk(prefix) {
            let mut buffer = prefix.to_string();
            self.collect(start, &mut buffer, &mut results);
        }
        results
    }

    /// Is `token` a member (not just a prefix of one)?
    pub fn contains(&self, token: &str) -> bool {
        self.walk(token)
            .is_some_and(|node| self.nodes[node].terminal)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Follow `path` from the root; `None` if an edge is missing.
    fn walk(&self, path: &str) -> Option<usize> {
        path.chars().try_fold(ROOT, |node, ch| {
            self.nodes[node].children.get(&ch).copied()
        })
    }

    /// Depth-first collection. `buffer` holds the chars from the root to `node`.
    fn collect(&self, node: usize, buffer: &mut String, results: &mut Vec<String>) {
        if self.nodes[node].terminal {
            results.push(buffer.clone());
        }
        for (&ch, &child) in &self.nodes[node].children {
            buffer.push(ch);
            self.collect(child, buffer, results);
            buffer.pop();
        }
    }
}
