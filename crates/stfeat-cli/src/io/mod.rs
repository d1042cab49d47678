pub mod input;
pub mod jsonl;
