//! Host capabilities the advisor depends on, injected as traits.

mod speech;
mod storage;

pub use speech::{LineListener, SilentSpeaker, SpeechToText, TextToSpeech, TranscriptSpeaker};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
