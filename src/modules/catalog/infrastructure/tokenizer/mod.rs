pub mod script_run_tokenizer;

pub use script_run_tokenizer::ScriptRunTokenizer;
