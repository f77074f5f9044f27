// SPDX-License-Identifier: MIT

use super::Trie;
use crate::{Result, WordSink};

/// One symbol position along some inserted word.
///
/// A node owns its own [`Trie`] of children, so every node can be used as the
/// root of its subtree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T> {
	pub(crate) symbol: T,
	/// Symbols from the root down to and including this node.
	pub(crate) value: Vec<T>,
	pub(crate) is_word: bool,
	pub(crate) children: Trie<T>,
}

impl<T> Node<T> {
	pub(crate) fn new(symbol: T, value: Vec<T>) -> Self {
		Self {
			symbol,
			value,
			is_word: false,
			children: Trie::new(),
		}
	}

	#[must_use]
	pub fn symbol(&self) -> &T {
		&self.symbol
	}

	/// The whole sequence this node spells out, starting at the root.
	#[must_use]
	pub fn value(&self) -> &[T] {
		&self.value
	}

	/// Whether [`Node::value`] was inserted as a complete word.
	#[must_use]
	pub fn is_word(&self) -> bool {
		self.is_word
	}

	#[must_use]
	pub fn children(&self) -> &Trie<T> {
		&self.children
	}
}

impl<T: PartialEq + Clone> Node<T> {
	/// Insert `word[index..]` below this node.
	///
	/// `word[..index]` is expected to be this node's value, since new nodes
	/// cache `word[..=i]` as their value.
	///
	/// # Errors
	///
	/// Will return `Err` if `index` is not a valid position in `word`
	pub fn insert_from(&mut self, word: &[T], index: usize) -> Result<&mut Node<T>> {
		self.children.insert_from(word, index)
	}

	#[must_use]
	pub fn find(&self, seq: &[T]) -> Option<&Node<T>> {
		self.children.find(seq)
	}

	#[must_use]
	pub fn find_from(&self, seq: &[T], index: usize) -> Option<&Node<T>> {
		self.children.find_from(seq, index)
	}

	pub fn find_mut(&mut self, seq: &[T]) -> Option<&mut Node<T>> {
		self.children.find_mut(seq)
	}

	pub fn find_mut_from(&mut self, seq: &[T], index: usize) -> Option<&mut Node<T>> {
		self.children.find_mut_from(seq, index)
	}

	pub fn collect_words<S: WordSink<T> + ?Sized>(&self, out: &mut S, prefix: &[T]) {
		self.children.collect_words(out, prefix);
	}

	/// Collect every word strictly below this node, leaving out this node's
	/// own value.
	pub fn collect_descendant_words<S: WordSink<T> + ?Sized>(&self, out: &mut S) {
		self.children.collect_descendant_words(out);
	}
}
