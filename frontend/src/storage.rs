//! `localStorage` persistence: the structured history and the theme, under
//! two independent keys. The rendered transcript is never persisted — it is
//! derived from the history on load.

use web_sys::Storage;

use crate::models::{Message, Theme};

const HISTORY_KEY: &str = "chat-history";
const THEME_KEY: &str = "theme";

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load_history() -> Vec<Message> {
    let Some(storage) = local_storage() else {
        return Vec::new();
    };
    let Ok(Some(raw)) = storage.get_item(HISTORY_KEY) else {
        return Vec::new();
    };
    serde_json::from_str(&raw).unwrap_or_else(|e| {
        log::warn!("discarding unreadable chat history: {e}");
        Vec::new()
    })
}

pub fn save_history(history: &[Message]) {
    let Some(storage) = local_storage() else {
        return;
    };
    match serde_json::to_string(history) {
        Ok(json) => {
            if storage.set_item(HISTORY_KEY, &json).is_err() {
                log::warn!("failed to persist chat history");
            }
        }
        Err(e) => log::warn!("failed to serialize chat history: {e}"),
    }
}

pub fn clear_history() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(HISTORY_KEY);
    }
}

pub fn load_theme() -> Theme {
    let Some(storage) = local_storage() else {
        return Theme::default();
    };
    match storage.get_item(THEME_KEY) {
        Ok(Some(raw)) => Theme::try_from(raw.as_str()).unwrap_or_default(),
        _ => Theme::default(),
    }
}

pub fn save_theme(theme: Theme) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(THEME_KEY, theme.as_str());
    }
}
