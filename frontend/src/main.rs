mod api;
mod canned;
mod components;
mod models;
mod speech;
mod sse;
mod state;
mod storage;

use leptos::mount::mount_to_body;
use leptos::prelude::*;

use components::chat::ChatArea;
use components::toolbar::Toolbar;
use models::Theme;
use state::AppState;

/// Root application component.
#[component]
fn App() -> impl IntoView {
    let state = AppState::provide();

    view! {
        <div
            class="app-container"
            class=("light-mode", move || state.theme.get() == Theme::Light)
        >
            <Toolbar />
            <ChatArea />
        </div>
    }
}

fn main() {
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logger");
    mount_to_body(App);
}
