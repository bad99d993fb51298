pub mod jsonl;

pub use jsonl::{
    SavedConstantSignal, flush_constant_signals, read_constant_signals,
    restore_constant_signals,
};
