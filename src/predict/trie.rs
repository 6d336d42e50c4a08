//! Case-insensitive prefix index.
//!
//! Children are kept in insertion order, so DFS collection order is
//! deterministic: first-inserted words surface first.

#[derive(Debug, Default)]
struct TrieNode {
    children: Vec<(char, TrieNode)>,
    /// Original-case word stored at the terminal node.
    word: Option<String>,
}

impl TrieNode {
    fn child(&self, ch: char) -> Option<&TrieNode> {
        self.children
            .iter()
            .find(|(c, _)| *c == ch)
            .map(|(_, node)| node)
    }

    fn child_mut(&mut self, ch: char) -> &mut TrieNode {
        let idx = match self.children.iter().position(|(c, _)| *c == ch) {
            Some(idx) => idx,
            None => {
                self.children.push((ch, TrieNode::default()));
                self.children.len() - 1
            }
        };
        &mut self.children[idx].1
    }
}

#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a word, walking by its lowercased form. The original casing is
    /// kept at the terminal node; re-inserting an existing word is a no-op.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for ch in word.to_lowercase().chars() {
            node = node.child_mut(ch);
        }
        if node.word.is_none() {
            node.word = Some(word.to_string());
            self.len += 1;
        }
    }

    /// Collects up to `limit` words under `prefix` in DFS order, preserving
    /// original casing. A broken prefix path yields an empty result.
    pub fn prefix_search(&self, prefix: &str, limit: usize) -> Vec<String> {
        let mut node = &self.root;
        for ch in prefix.to_lowercase().chars() {
            match node.child(ch) {
                Some(child) => node = child,
                None => return Vec::new(),
            }
        }

        let mut results = Vec::new();
        collect_words(node, limit, &mut results);
        results
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

fn collect_words(node: &TrieNode, limit: usize, out: &mut Vec<String>) {
    if out.len() >= limit {
        return;
    }
    if let Some(word) = &node.word {
        out.push(word.clone());
    }
    for (_, child) in &node.children {
        if out.len() >= limit {
            break;
        }
        collect_words(child, limit, out);
    }
}
