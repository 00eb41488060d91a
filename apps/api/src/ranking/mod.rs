// Ranking engine: TF-IDF vectorization + cosine similarity of resumes
// against a job description, plus the presentation layer (sort/filter/CSV)
// and the HTTP handlers that expose it.
// The core is pure and synchronous — no I/O below handlers.rs.

pub mod handlers;
pub mod ranker;
pub mod results;
pub mod tfidf;
pub mod tokenizer;
