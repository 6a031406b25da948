use leptos::ev;
use leptos::html;
use leptos::prelude::*;

use crate::models::{Message, Role};
use crate::state::{AppState, Intent};

/// Main chat area: transcript derived from history, the streaming bubble,
/// the error bubble, and the input row.
#[component]
pub fn ChatArea() -> impl IntoView {
    let state = expect_context::<AppState>();
    let container_ref = NodeRef::<html::Div>::new();

    // Always show the latest message.
    Effect::new(move |_| {
        state.messages.track();
        state.streaming_text.track();
        state.error.track();
        if let Some(el) = container_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    let is_empty = move || {
        state.messages.get().is_empty()
            && state.streaming_text.get().is_none()
            && state.error.get().is_none()
    };

    view! {
        <main class="chat-area">
            <div class="chat-container" node_ref=container_ref>
                <Show when=move || is_empty()>
                    <div class="default-text">
                        <h1>"StudyBuddy Prototype"</h1>
                        <p>
                            "Learn with your study companion." <br/>
                            "Your chat history will be displayed here."
                        </p>
                    </div>
                </Show>

                // History is append-only between deletions, so the index is
                // a stable key.
                <For
                    each=move || state.messages.get().into_iter().enumerate().collect::<Vec<_>>()
                    key=|(index, _)| *index
                    let:entry
                >
                    <MessageBubble message={entry.1} />
                </For>

                {move || {
                    state.streaming_text.get().map(|text| {
                        view! {
                            <div class="chat incoming">
                                {if text.is_empty() {
                                    view! {
                                        <div class="typing-animation">
                                            <span class="typing-dot"></span>
                                            <span class="typing-dot"></span>
                                            <span class="typing-dot"></span>
                                        </div>
                                    }
                                        .into_any()
                                } else {
                                    view! { <p class="streaming">{text}</p> }.into_any()
                                }}
                            </div>
                        }
                    })
                }}

                {move || {
                    state.error.get().map(|err| {
                        view! {
                            <div class="chat incoming">
                                <p class="error">{format!("Error: {err}")}</p>
                            </div>
                        }
                    })
                }}
            </div>

            <ChatInput />
        </main>
    }
}

/// A single chat bubble.
#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    let css_class = match message.role {
        Role::User => "chat outgoing",
        Role::Assistant => "chat incoming",
    };

    view! {
        <div class=css_class>
            <p>{message.content}</p>
        </div>
    }
}

/// Input row: auto-resizing textarea and send button. Enter without Shift
/// sends; the row is disabled while a stream is in flight.
#[component]
fn ChatInput() -> impl IntoView {
    let state = expect_context::<AppState>();
    let (input, set_input) = signal(String::new());
    let textarea_ref = NodeRef::<html::Textarea>::new();

    let is_sending = move || state.is_streaming.get();

    let send = move || {
        let text = input.get_untracked();
        if text.trim().is_empty() || is_sending() {
            return;
        }
        set_input.set(String::new());
        if let Some(el) = textarea_ref.get() {
            let _ = el.style().set_property("height", "auto");
        }
        state.dispatch(Intent::Send(text));
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send();
        }
    };

    let on_input = move |ev: ev::Event| {
        set_input.set(event_target_value(&ev));
        // Grow the textarea with its content.
        if let Some(el) = textarea_ref.get() {
            let style = el.style();
            let _ = style.set_property("height", "auto");
            let _ = style.set_property("height", &format!("{}px", el.scroll_height()));
        }
    };

    view! {
        <div class="input-area">
            <textarea
                rows="1"
                placeholder="Ask StudyBuddy… (Enter to send, Shift+Enter for newline)"
                prop:value=input
                node_ref=textarea_ref
                on:input=on_input
                on:keydown=on_keydown
                disabled=is_sending
            />
            <button
                class="send-btn"
                on:click=move |_| send()
                disabled=move || is_sending() || input.get().trim().is_empty()
            >
                {move || if is_sending() { "…" } else { "Send" }}
            </button>
        </div>
    }
}
