use leptos::prelude::*;

use crate::models::Theme;
use crate::speech;
use crate::state::{AppState, Intent};

/// Top bar: title, voice control, theme toggle, delete-all.
#[component]
pub fn Toolbar() -> impl IntoView {
    let state = expect_context::<AppState>();
    let voice_supported = speech::recognition_available();

    view! {
        <header class="toolbar">
            <span class="app-title">"StudyBuddy"</span>
            <div class="toolbar-actions">
                <Show when=move || voice_supported>
                    <button
                        class="voice-btn"
                        class:listening=move || state.is_listening.get()
                        disabled=move || state.is_streaming.get()
                        title="Speak your question"
                        on:click=move |_| state.dispatch(Intent::VoiceStart)
                    >
                        "🎤"
                    </button>
                </Show>
                <button
                    class="theme-btn"
                    title="Toggle light/dark mode"
                    on:click=move |_| state.dispatch(Intent::ToggleTheme)
                >
                    {move || match state.theme.get() {
                        Theme::Dark => "☀",
                        Theme::Light => "🌙",
                    }}
                </button>
                <button
                    class="delete-btn"
                    title="Delete all chats"
                    on:click=move |_| state.dispatch(Intent::DeleteAll)
                >
                    "🗑"
                </button>
            </div>
        </header>
    }
}
