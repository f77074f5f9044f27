// SPDX-License-Identifier: MIT

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrieError {
	/// Insertion was asked to start at or past the end of the word.
	#[error("invalid index {index} for a word of length {len}")]
	InvalidIndex { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, TrieError>;
