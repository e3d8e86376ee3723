use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::chat::{ChatMessage, Lang};
use crate::error::AdvisorError;
use crate::models::FarmInput;
use crate::platform::KeyValueStore;

/// Store key holding the form and chat history.
pub const STATE_KEY: &str = "krishiai_state";
/// Store key holding the selected language code.
pub const LANG_KEY: &str = "krishiai_lang";

/// What survives between sessions: the last form and the conversation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub form: Option<FarmInput>,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// Load saved state. A missing or unreadable entry yields `Ok(None)`; only
/// store failures are errors.
pub fn load_state(store: &dyn KeyValueStore) -> Result<Option<PersistedState>, AdvisorError> {
    let Some(raw) = store.get(STATE_KEY)? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(state) => Ok(Some(state)),
        Err(e) => {
            warn!("ignoring unreadable saved state: {e}");
            Ok(None)
        }
    }
}

pub fn save_state(store: &mut dyn KeyValueStore, state: &PersistedState) -> Result<(), AdvisorError> {
    let json = serde_json::to_string(state)?;
    store.set(STATE_KEY, &json)
}

/// Stored language, falling back to the system locale.
pub fn load_lang(
    store: &dyn KeyValueStore,
    system_locale: Option<&str>,
) -> Result<Lang, AdvisorError> {
    let stored = store.get(LANG_KEY)?;
    Ok(Lang::detect(stored.as_deref(), system_locale))
}

pub fn save_lang(store: &mut dyn KeyValueStore, lang: Lang) -> Result<(), AdvisorError> {
    store.set(LANG_KEY, lang.code())
}
