// SPDX-License-Identifier: MIT

//! A prefix tree keyed on sequences of any symbol type.
//!
//! ```
//! use symtrie::Trie;
//!
//! let mut trie = Trie::new();
//! for word in ["cat", "car", "card", "dog"] {
//! 	trie.insert_str(word).unwrap();
//! }
//!
//! assert_eq!(trie.words_str("ca"), ["cat", "car", "card"]);
//! assert!(!trie.find_str("ca").unwrap().is_word());
//! assert!(trie.words_str("x").is_empty());
//! ```

mod error;
mod sink;
mod trie;

pub use error::{Result, TrieError};
pub use sink::WordSink;
pub use trie::{Node, Trie};
