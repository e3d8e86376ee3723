mod conversation;
mod i18n;
mod responder;

pub use conversation::{ChatMessage, Conversation, Role};
pub use i18n::{catalog, t, Lang, MessageKey};
pub use responder::{format_rupees, reply, respond};
