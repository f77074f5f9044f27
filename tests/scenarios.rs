// SPDX-License-Identifier: MIT

use std::collections::BTreeSet;

use symtrie::{Trie, TrieError, WordSink};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_test_writer()
		.try_init();
}

#[test]
fn cat_car_card_dog() -> anyhow::Result<()> {
	init_tracing();
	let mut trie = Trie::new();
	for word in ["cat", "car", "card", "dog"] {
		trie.insert_str(word)?;
	}

	assert_eq!(trie.words_str("ca"), ["cat", "car", "card"]);
	assert_eq!(trie.words_str("do"), ["dog"]);
	assert!(trie.words_str("x").is_empty());

	let ca = trie.find_str("ca").ok_or(anyhow::anyhow!("no node for ca"))?;
	assert!(!ca.is_word());
	let car = trie.find_str("car").ok_or(anyhow::anyhow!("no node for car"))?;
	assert!(car.is_word());

	Ok(())
}

#[test]
fn empty_word_error_propagates() {
	init_tracing();
	let mut trie = Trie::new();
	let result = (|| -> anyhow::Result<()> {
		trie.insert_str("ok")?;
		trie.insert_str("")?;
		Ok(())
	})();

	let err = result.unwrap_err();
	assert_eq!(
		err.downcast_ref::<TrieError>(),
		Some(&TrieError::InvalidIndex { index: 0, len: 0 })
	);
	assert_eq!(trie.words_str(""), ["ok"]);
}

#[test]
fn built_trie_dumps_in_insertion_order() {
	init_tracing();
	let words = ["zeta", "alpha", "alps", "zeal", "beta"];
	let trie: Trie<char> = words
		.iter()
		.map(|w| w.chars().collect::<Vec<_>>())
		.collect();

	let mut all = Vec::<String>::new();
	trie.collect_descendant_words(&mut all);
	assert_eq!(all, ["zeta", "zeal", "alpha", "alps", "beta"]);
}

#[test]
fn token_sequences() -> anyhow::Result<()> {
	init_tracing();
	let mut trie = Trie::new();
	for sentence in ["the quick brown fox", "the quick red fox", "the lazy dog"] {
		let tokens: Vec<&str> = sentence.split_whitespace().collect();
		trie.insert(&tokens)?;
	}

	let completions: Vec<String> = trie
		.words(&["the", "quick"])
		.into_iter()
		.map(|tokens| tokens.join(" "))
		.collect();
	assert_eq!(completions, ["the quick brown fox", "the quick red fox"]);
	assert!(trie.find(&["the", "quick"]).is_some_and(|node| !node.is_word()));

	Ok(())
}

struct Counter {
	count: usize,
	longest: usize,
}

impl<T> WordSink<T> for Counter {
	fn push_word(&mut self, word: &[T]) {
		self.count += 1;
		self.longest = self.longest.max(word.len());
	}
}

#[test]
fn custom_sink() -> anyhow::Result<()> {
	init_tracing();
	let mut trie = Trie::new();
	for word in ["car", "card", "cards", "care"] {
		trie.insert_str(word)?;
	}

	let mut counter = Counter {
		count: 0,
		longest: 0,
	};
	let prefix: Vec<char> = "car".chars().collect();
	trie.collect_words(&mut counter, &prefix);
	assert_eq!(counter.count, 4);
	assert_eq!(counter.longest, 5);

	let sink: &mut dyn WordSink<char> = &mut BTreeSet::<String>::new();
	trie.collect_words(sink, &prefix);

	Ok(())
}
