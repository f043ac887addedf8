// Text similarity: tokenization, term-frequency vectors, and the pluggable
// strategies that turn two documents into a score in [0, 1].

pub mod cosine;
pub mod stopwords;
pub mod strategy;
pub mod tfidf;
pub mod tokenizer;
pub mod vector;
