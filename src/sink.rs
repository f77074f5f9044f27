// SPDX-License-Identifier: MIT

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::sync::mpsc::Sender;

use tracing::warn;

/// Anything collected words can be appended to.
///
/// The trie hands over each word as a borrowed slice of symbols; the sink
/// decides how to own it. All provided implementations build their element
/// type through [`FromIterator`], so a `Trie<char>` can fill a `Vec<String>`
/// and any `Trie<T>` can fill a `Vec<Vec<T>>`.
pub trait WordSink<T> {
	fn push_word(&mut self, word: &[T]);
}

impl<T: Clone, W: FromIterator<T>> WordSink<T> for Vec<W> {
	fn push_word(&mut self, word: &[T]) {
		self.push(word.iter().cloned().collect());
	}
}

impl<T: Clone, W: FromIterator<T>> WordSink<T> for VecDeque<W> {
	fn push_word(&mut self, word: &[T]) {
		self.push_back(word.iter().cloned().collect());
	}
}

impl<T, W, S> WordSink<T> for HashSet<W, S>
where
	T: Clone,
	W: FromIterator<T> + Eq + Hash,
	S: BuildHasher,
{
	fn push_word(&mut self, word: &[T]) {
		self.insert(word.iter().cloned().collect());
	}
}

impl<T: Clone, W: FromIterator<T> + Ord> WordSink<T> for BTreeSet<W> {
	fn push_word(&mut self, word: &[T]) {
		self.insert(word.iter().cloned().collect());
	}
}

impl<T: Clone, W: FromIterator<T>> WordSink<T> for Sender<W> {
	fn push_word(&mut self, word: &[T]) {
		if self.send(word.iter().cloned().collect()).is_err() {
			warn!("receiver hung up, dropping collected word");
		}
	}
}
