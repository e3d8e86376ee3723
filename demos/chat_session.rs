//! Chat example: a scripted conversation with the advisor, spoken to stdout
//! and saved to an in-memory store.
//!
//! Run from the project root:
//!   cargo run --example chat_session

use crop_advisor::analysis::recommend;
use crop_advisor::chat::{Conversation, Lang, Role};
use crop_advisor::io::{load_state, save_state, PersistedState};
use crop_advisor::models::FarmInput;
use crop_advisor::platform::{LineListener, MemoryStore, TranscriptSpeaker};

fn main() {
    let farm = FarmInput::default();
    let recs = recommend(&farm);

    let script = "Which crop should I grow this season?\nक्या मुनाफ़ा होगा?\n";
    let mut listener = LineListener::new(script.as_bytes());
    let mut speaker = TranscriptSpeaker::new(std::io::stdout());
    let mut convo = Conversation::new();

    for lang in Lang::ALL {
        if !convo.listen(&mut listener, lang) {
            break;
        }
        if lang == Lang::Hi {
            convo.attach_image(true);
        }
        convo.send(&recs, lang, &mut speaker);
    }

    println!();
    for msg in convo.messages() {
        let who = match msg.role {
            Role::User => "You",
            Role::Ai => "KrishiAI",
        };
        println!("{who}: {}", msg.text);
    }

    let mut store = MemoryStore::new();
    save_state(
        &mut store,
        &PersistedState {
            form: Some(farm),
            messages: convo.into_messages(),
        },
    )
    .expect("Failed to save state");

    let restored = load_state(&store)
        .expect("Failed to load state")
        .unwrap_or_default();
    println!("\nRestored {} messages from the store", restored.messages.len());
}
