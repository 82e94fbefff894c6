// Resume screening: vocabulary-driven skill extraction, scoring and ranking.
// Everything except `handlers` is synchronous and free of I/O.

pub mod extraction;
pub mod handlers;
pub mod name;
pub mod pipeline;
pub mod ranking;
pub mod scoring;
pub mod skills;
pub mod tokenizer;
pub mod vocabulary;
