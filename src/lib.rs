pub mod analysis;
pub mod chat;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod platform;
pub mod visualization;

#[cfg(feature = "web")]
pub mod web;

pub use analysis::{recommend, Advisor, CropAssessment};
pub use chat::{Conversation, Lang};
pub use config::AdvisorConfig;
pub use error::AdvisorError;
pub use io::{FarmInputReader, RecommendationWriter};
pub use models::{CropProfile, FarmInput, Recommendation, SoilType};
pub use platform::{KeyValueStore, SpeechToText, TextToSpeech};
