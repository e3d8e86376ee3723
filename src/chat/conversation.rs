use serde::{Deserialize, Serialize};

use crate::models::Recommendation;
use crate::platform::{SpeechToText, TextToSpeech};

use super::{reply, Lang};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn ai(text: impl Into<String>) -> Self {
        Self {
            role: Role::Ai,
            text: text.into(),
        }
    }
}

/// Chat history plus the message being composed.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    draft: String,
    image_attached: bool,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a saved history.
    pub fn from_messages(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            ..Self::default()
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<ChatMessage> {
        self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Append recognised speech to the draft, separated by a space.
    pub fn append_transcript(&mut self, text: &str) {
        if !self.draft.is_empty() {
            self.draft.push(' ');
        }
        self.draft.push_str(text);
    }

    pub fn attach_image(&mut self, attached: bool) {
        self.image_attached = attached;
    }

    pub fn image_attached(&self) -> bool {
        self.image_attached
    }

    /// Listen for one utterance and append it to the draft.
    /// Returns false when the listener has no more input.
    pub fn listen(&mut self, listener: &mut dyn SpeechToText, lang: Lang) -> bool {
        match listener.listen(lang) {
            Some(text) => {
                self.append_transcript(&text);
                true
            }
            None => false,
        }
    }

    /// Send the draft and record the advisor's answer, speaking it aloud.
    ///
    /// Does nothing for a blank draft or when there is no recommendation to
    /// talk about. Returns the answer that was added.
    pub fn send(
        &mut self,
        recs: &[Recommendation],
        lang: Lang,
        speaker: &mut dyn TextToSpeech,
    ) -> Option<&ChatMessage> {
        let text = self.draft.trim();
        if text.is_empty() {
            return None;
        }
        let answer = reply(recs, lang, self.image_attached)?;

        self.messages.push(ChatMessage::user(text));
        self.messages.push(ChatMessage::ai(answer));
        self.draft.clear();

        let last = self.messages.last()?;
        speaker.cancel();
        speaker.speak(&last.text, lang);
        Some(last)
    }
}
