// SPDX-License-Identifier: MIT

mod node;

pub use node::Node;

use crate::{Result, TrieError, WordSink};
use std::time;
use tracing::{debug, trace, warn};

/// A prefix tree keyed on sequences of `T`.
///
/// The root holds no symbol of its own, only its top-level [`Node`]s. Children
/// are kept in the order their symbols were first inserted, and that order is
/// the order words are collected in.
#[derive(Debug, Clone, PartialEq)]
pub struct Trie<T> {
	nodes: Vec<Node<T>>,
}

impl<T> Trie<T> {
	#[must_use]
	pub fn new() -> Self {
		Self { nodes: Vec::new() }
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Direct children, in first-insertion order.
	#[must_use]
	pub fn nodes(&self) -> &[Node<T>] {
		&self.nodes
	}
}

impl<T: PartialEq + Clone> Trie<T> {
	/// Add nodes for `word` and mark its last node as a word.
	///
	/// Inserting a word twice is a no-op apart from returning its node again.
	///
	/// # Errors
	///
	/// Will return `Err` if `word` is empty
	pub fn insert(&mut self, word: &[T]) -> Result<&mut Node<T>> {
		self.insert_from(word, 0)
	}

	/// Add nodes for `word[index..]`, caching `word[..=i]` as the value of the
	/// node created for position `i`.
	///
	/// # Errors
	///
	/// Will return `Err` if `index >= word.len()`, without touching the trie
	pub fn insert_from(&mut self, word: &[T], index: usize) -> Result<&mut Node<T>> {
		if index >= word.len() {
			return Err(TrieError::InvalidIndex {
				index,
				len: word.len(),
			});
		}

		Ok(self.insert_unchecked(word, index))
	}

	fn insert_unchecked(&mut self, word: &[T], index: usize) -> &mut Node<T> {
		let pos = match self.position(&word[index]) {
			Some(pos) => pos,
			None => {
				trace!(depth = index, "new trie node");
				self.nodes
					.push(Node::new(word[index].clone(), word[..=index].to_vec()));
				self.nodes.len() - 1
			}
		};

		let node = &mut self.nodes[pos];
		if index + 1 == word.len() {
			node.is_word = true;
			node
		} else {
			node.children.insert_unchecked(word, index + 1)
		}
	}

	fn position(&self, symbol: &T) -> Option<usize> {
		self.nodes.iter().position(|node| node.symbol == *symbol)
	}

	fn child(&self, symbol: &T) -> Option<&Node<T>> {
		self.nodes.iter().find(|node| node.symbol == *symbol)
	}

	fn child_mut(&mut self, symbol: &T) -> Option<&mut Node<T>> {
		self.nodes.iter_mut().find(|node| node.symbol == *symbol)
	}

	/// Walk `seq` symbol by symbol and return the node it ends on, whether or
	/// not that node is a word.
	#[must_use]
	pub fn find(&self, seq: &[T]) -> Option<&Node<T>> {
		self.find_from(seq, 0)
	}

	/// Like [`Trie::find`], but walks `seq[index..]`. An `index` at or past
	/// the end finds nothing.
	#[must_use]
	pub fn find_from(&self, seq: &[T], index: usize) -> Option<&Node<T>> {
		let (first, rest) = seq.get(index..)?.split_first()?;
		let mut current = self.child(first)?;
		for symbol in rest {
			current = current.children.child(symbol)?;
		}

		Some(current)
	}

	pub fn find_mut(&mut self, seq: &[T]) -> Option<&mut Node<T>> {
		self.find_mut_from(seq, 0)
	}

	pub fn find_mut_from(&mut self, seq: &[T], index: usize) -> Option<&mut Node<T>> {
		let (first, rest) = seq.get(index..)?.split_first()?;
		let mut current = self.child_mut(first)?;
		for symbol in rest {
			current = current.children.child_mut(symbol)?;
		}

		Some(current)
	}

	/// Append every word starting with `prefix` to `out`, `prefix` itself
	/// included when it is a word.
	///
	/// Words come out depth first: a node's own word before its children's,
	/// siblings in insertion order. An empty prefix collects the whole trie.
	pub fn collect_words<S: WordSink<T> + ?Sized>(&self, out: &mut S, prefix: &[T]) {
		if prefix.is_empty() {
			self.collect_descendant_words(out);
			return;
		}

		if let Some(node) = self.find(prefix) {
			if node.is_word {
				out.push_word(&node.value);
			}
			node.children.collect_descendant_words(out);
		}
	}

	pub fn collect_descendant_words<S: WordSink<T> + ?Sized>(&self, out: &mut S) {
		for node in &self.nodes {
			if node.is_word {
				out.push_word(&node.value);
			}
			node.children.collect_descendant_words(out);
		}
	}

	#[must_use]
	pub fn words(&self, prefix: &[T]) -> Vec<Vec<T>> {
		let mut result = Vec::new();
		self.collect_words(&mut result, prefix);

		result
	}

	#[must_use]
	pub fn contains(&self, word: &[T]) -> bool {
		self.find(word).is_some_and(Node::is_word)
	}
}

impl Trie<char> {
	/// # Errors
	///
	/// Will return `Err` if `word` is empty
	pub fn insert_str(&mut self, word: &str) -> Result<&mut Node<char>> {
		self.insert(&chars(word))
	}

	#[must_use]
	pub fn find_str(&self, s: &str) -> Option<&Node<char>> {
		self.find(&chars(s))
	}

	#[must_use]
	pub fn contains_str(&self, word: &str) -> bool {
		self.contains(&chars(word))
	}

	#[must_use]
	pub fn words_str(&self, prefix: &str) -> Vec<String> {
		let mut result = Vec::new();
		self.collect_words(&mut result, &chars(prefix));

		result
	}
}

fn chars(s: &str) -> Vec<char> {
	s.chars().collect()
}

impl<T> Default for Trie<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: PartialEq + Clone, W: AsRef<[T]>> Extend<W> for Trie<T> {
	fn extend<I: IntoIterator<Item = W>>(&mut self, iter: I) {
		for word in iter {
			let word = word.as_ref();
			if word.is_empty() {
				warn!("skipping empty word");
				continue;
			}
			self.insert_unchecked(word, 0);
		}
	}
}

impl<T: PartialEq + Clone, W: AsRef<[T]>> FromIterator<W> for Trie<T> {
	fn from_iter<I: IntoIterator<Item = W>>(iter: I) -> Self {
		let t0 = time::Instant::now();
		let mut trie = Self::new();
		let mut count = 0usize;
		trie.extend(iter.into_iter().inspect(|_| count += 1));
		debug!(
			"build trie from {count} words in {:.3}s",
			t0.elapsed().as_secs_f32()
		);

		trie
	}
}
