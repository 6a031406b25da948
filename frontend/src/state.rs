use leptos::prelude::*;
use leptos::task::spawn_local;

use gloo_timers::future::TimeoutFuture;

use crate::models::{Message, Theme};
use crate::{api, canned, speech, storage};

/// Delay before dispatching the streaming request, so the typing indicator
/// is visible even when the first bytes arrive quickly. Polish, not a
/// correctness requirement.
const TYPING_DELAY_MS: u32 = 500;

/// Every user-initiated action, emitted by the view layer and routed through
/// a single dispatch point.
#[derive(Clone, Debug)]
pub enum Intent {
    Send(String),
    DeleteAll,
    ToggleTheme,
    VoiceStart,
}

/// Shared application state, provided via Leptos context. Signals are Copy,
/// so the whole struct is too.
#[derive(Clone, Copy)]
pub struct AppState {
    // --- Read signals (for components to subscribe to) ---
    pub messages: ReadSignal<Vec<Message>>,
    pub streaming_text: ReadSignal<Option<String>>,
    pub is_streaming: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
    pub theme: ReadSignal<Theme>,
    pub is_listening: ReadSignal<bool>,

    // --- Write signals (private; all mutation goes through dispatch) ---
    set_messages: WriteSignal<Vec<Message>>,
    set_streaming_text: WriteSignal<Option<String>>,
    set_is_streaming: WriteSignal<bool>,
    set_error: WriteSignal<Option<String>>,
    set_theme: WriteSignal<Theme>,
    set_is_listening: WriteSignal<bool>,
}

impl AppState {
    /// Create the state, restoring history and theme from local storage, and
    /// provide it in the current Leptos context.
    pub fn provide() -> Self {
        let (messages, set_messages) = signal(storage::load_history());
        let (streaming_text, set_streaming_text) = signal(None::<String>);
        let (is_streaming, set_is_streaming) = signal(false);
        let (error, set_error) = signal(None::<String>);
        let (theme, set_theme) = signal(storage::load_theme());
        let (is_listening, set_is_listening) = signal(false);

        let state = Self {
            messages,
            streaming_text,
            is_streaming,
            error,
            theme,
            is_listening,
            set_messages,
            set_streaming_text,
            set_is_streaming,
            set_error,
            set_theme,
            set_is_listening,
        };

        provide_context(state);
        state
    }

    pub fn dispatch(&self, intent: Intent) {
        match intent {
            Intent::Send(text) => self.send(text),
            Intent::DeleteAll => self.delete_all(),
            Intent::ToggleTheme => self.toggle_theme(),
            Intent::VoiceStart => self.voice_start(),
        }
    }

    /// One user turn: append + persist the user message, answer from the
    /// canned table when it hits, otherwise stream from the proxy. Turns are
    /// serialized — a submission while a stream is in flight is dropped (the
    /// input is disabled then anyway).
    fn send(&self, text: String) {
        let text = text.trim().to_string();
        if text.is_empty() || self.is_streaming.get_untracked() {
            return;
        }

        self.set_error.set(None);
        self.set_messages
            .update(|messages| messages.push(Message::user(text.clone())));
        self.persist();

        if let Some(reply) = canned::lookup(&text) {
            self.set_messages
                .update(|messages| messages.push(Message::assistant(reply)));
            self.persist();
            speech::speak(reply);
            return;
        }

        self.set_is_streaming.set(true);
        self.set_streaming_text.set(Some(String::new()));

        let state = *self;
        spawn_local(async move {
            TimeoutFuture::new(TYPING_DELAY_MS).await;

            let history = state.messages.get_untracked();
            let set_streaming_text = state.set_streaming_text;
            let result = api::stream_chat(&history, move |fragment| {
                set_streaming_text.update(|current| {
                    if let Some(text) = current {
                        text.push_str(fragment);
                    }
                });
            })
            .await;

            match result {
                Ok(full) => {
                    state
                        .set_messages
                        .update(|messages| messages.push(Message::assistant(full.clone())));
                    state.persist();
                    speech::speak(&full);
                }
                Err(e) => {
                    // The placeholder becomes an error bubble; history gets
                    // no assistant entry and the user may resubmit.
                    log::error!("streaming chat failed: {e}");
                    state.set_error.set(Some(e));
                }
            }

            state.set_streaming_text.set(None);
            state.set_is_streaming.set(false);
        });
    }

    /// Clears the persisted history and the rendered transcript after user
    /// confirmation. The theme key is untouched.
    fn delete_all(&self) {
        let confirmed = web_sys::window()
            .map(|window| {
                window
                    .confirm_with_message("Delete all chats?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        storage::clear_history();
        self.set_messages.set(Vec::new());
        self.set_error.set(None);
    }

    fn toggle_theme(&self) {
        let next = self.theme.get_untracked().toggled();
        self.set_theme.set(next);
        storage::save_theme(next);
    }

    /// Starts one speech-recognition session; its final transcript is routed
    /// back through `Intent::Send`.
    fn voice_start(&self) {
        if self.is_listening.get_untracked() || self.is_streaming.get_untracked() {
            return;
        }

        let state = *self;
        let set_is_listening = self.set_is_listening;
        let started = speech::start_recognition(
            move |transcript| state.dispatch(Intent::Send(transcript)),
            move || set_is_listening.set(false),
        );
        if started {
            self.set_is_listening.set(true);
        }
    }

    fn persist(&self) {
        storage::save_history(&self.messages.get_untracked());
    }
}
