use std::io::{BufRead, Write};

use tracing::warn;

use crate::chat::Lang;

/// Speech synthesis capability of the host.
pub trait TextToSpeech {
    fn speak(&mut self, text: &str, lang: Lang);

    /// Stop any utterance in progress.
    fn cancel(&mut self) {}
}

/// Speech recognition capability of the host.
pub trait SpeechToText {
    /// Block until one utterance is recognised. `None` when the input ends.
    fn listen(&mut self, lang: Lang) -> Option<String>;
}

/// For hosts without speech synthesis.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSpeaker;

impl TextToSpeech for SilentSpeaker {
    fn speak(&mut self, _text: &str, _lang: Lang) {}
}

/// Writes each utterance as a `[locale] text` line.
pub struct TranscriptSpeaker<W: Write> {
    out: W,
}

impl<W: Write> TranscriptSpeaker<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TextToSpeech for TranscriptSpeaker<W> {
    fn speak(&mut self, text: &str, lang: Lang) {
        if let Err(e) = writeln!(self.out, "[{}] {}", lang.locale(), text) {
            warn!("speech output failed: {e}");
        }
    }

    fn cancel(&mut self) {
        if let Err(e) = self.out.flush() {
            warn!("speech output flush failed: {e}");
        }
    }
}

/// Treats each non-blank input line as one recognised utterance.
pub struct LineListener<R: BufRead> {
    reader: R,
}

impl<R: BufRead> LineListener<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> SpeechToText for LineListener<R> {
    fn listen(&mut self, _lang: Lang) -> Option<String> {
        let mut line = String::new();
        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {
                    let trimmed = line.trim();
                    if !trimmed.is_empty() {
                        return Some(trimmed.to_string());
                    }
                }
                Err(e) => {
                    warn!("speech input failed: {e}");
                    return None;
                }
            }
        }
    }
}
