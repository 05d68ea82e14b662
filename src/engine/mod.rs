pub mod engine;
pub mod protocol;

pub mod llm_client;
pub mod normalize;
pub mod prompt_builder;
pub mod shortener;
