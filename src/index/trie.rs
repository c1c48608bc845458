use std::collections::{HashMap, HashSet};
use crate::core::types::DocId;

/// One trie node: one owned child per distinct next character, plus the
/// posting set of every document whose token terminates exactly here.
#[derive(Debug, Default)]
pub struct TrieNode {
    children: HashMap<char, TrieNode>,
    postings: HashSet<DocId>,
}

/// Prefix tree keyed by token characters. Built once per corpus by the
/// build coordinator, then shared read-only with the query side.
///
/// Insert and lookup are O(token length) edge traversals regardless of
/// corpus size, and the structure keeps prefix enumeration available.
#[derive(Debug, Default)]
pub struct TrieIndex {
    root: TrieNode,
    distinct_terms: usize,
}

impl TrieIndex {
    pub fn new() -> Self {
        TrieIndex::default()
    }

    /// Walks/creates one node per character and adds `doc` to the terminal
    /// posting set. Idempotent per (token, doc); the empty token is a no-op
    /// (the root is never a terminal).
    pub fn insert(&mut self, token: &str, doc: DocId) {
        if token.is_empty() {
            return;
        }

        let mut node = &mut self.root;
        for ch in token.chars() {
            node = node.children.entry(ch).or_default();
        }

        if node.postings.is_empty() {
            self.distinct_terms += 1;
        }
        node.postings.insert(doc);
    }

    /// Borrowed view of the posting set, or `None` when the token is not
    /// indexed (missing edge, pure-prefix node, or empty token).
    pub fn postings(&self, token: &str) -> Option<&HashSet<DocId>> {
        if token.is_empty() {
            return None;
        }

        let mut node = &self.root;
        for ch in token.chars() {
            node = node.children.get(&ch)?;
        }

        if node.postings.is_empty() {
            None
        } else {
            Some(&node.postings)
        }
    }

    /// Owned copy of the posting set; empty when the token is not indexed.
    pub fn lookup(&self, token: &str) -> HashSet<DocId> {
        self.postings(token).cloned().unwrap_or_default()
    }

    /// Number of distinct tokens indexed.
    pub fn term_count(&self) -> usize {
        self.distinct_terms
    }

    pub fn is_empty(&self) -> bool {
        self.distinct_terms == 0
    }

    /// Every indexed token, in unspecified order.
    pub fn terms(&self) -> Vec<String> {
        let mut terms = Vec::with_capacity(self.distinct_terms);
        collect_terms(&self.root, &mut String::new(), &mut terms);
        terms
    }

    /// Every indexed token starting with `prefix`, in unspecified order.
    pub fn terms_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut node = &self.root;
        for ch in prefix.chars() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => return Vec::new(),
            }
        }

        let mut terms = Vec::new();
        collect_terms(node, &mut prefix.to_string(), &mut terms);
        terms
    }
}

fn collect_terms(node: &TrieNode, path: &mut String, out: &mut Vec<String>) {
    if !node.postings.is_empty() {
        out.push(path.clone());
    }
    for (ch, child) in &node.children {
        path.push(*ch);
        collect_terms(child, path, out);
        path.pop();
    }
}
