//! Chat view: username and message inputs plus the message history list.
//!
//! LIFECYCLE
//! =========
//! History state is owned by this component and discarded on unmount. On
//! mount a single debounced history fetch is scheduled; a liveness flag is
//! registered with `on_cleanup` *before* the timer is armed, so teardown
//! always wins any race against the deferred fetch and no state write can
//! target a torn-down view.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::config::ChatConfig;
use crate::net::api::fetch_history;
use crate::state::chat::{ChatState, LoadState, MessageKind, compose_outgoing};

/// Chat view showing message history and inputs for composing new messages.
#[component]
pub fn ChatView() -> impl IntoView {
    let config = expect_context::<ChatConfig>();

    let chat = RwSignal::new(ChatState::seeded());
    let username = RwSignal::new(String::new());
    let draft = RwSignal::new(String::new());

    // Flipped synchronously on teardown; checked by the deferred fetch
    // before the request is issued and before its result is committed.
    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = Arc::clone(&alive);
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    // Debounced initial load: runs once per mount, never re-armed.
    let load_started = StoredValue::new(false);
    Effect::new(move || {
        if load_started.get_value() {
            return;
        }
        load_started.set_value(true);

        let endpoint = config.endpoint.clone();
        let delay_ms = config.fetch_delay_ms;
        let alive = Arc::clone(&alive);
        leptos::task::spawn_local(async move {
            #[cfg(feature = "hydrate")]
            gloo_timers::future::sleep(std::time::Duration::from_millis(delay_ms)).await;
            #[cfg(not(feature = "hydrate"))]
            let _ = delay_ms;

            if !alive.load(Ordering::Relaxed) {
                return;
            }
            match fetch_history(&endpoint).await {
                Ok(records) => {
                    if alive.load(Ordering::Relaxed) {
                        chat.update(|c| c.apply_history(records));
                    }
                }
                Err(err) => {
                    leptos::logging::warn!("history fetch failed: {err}");
                    if alive.load(Ordering::Relaxed) {
                        chat.update(ChatState::settle);
                    }
                }
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(record) = compose_outgoing(&draft.get()) else {
            return;
        };
        let accepted = chat.try_update(|c| c.push_message(record)).unwrap_or(false);
        if accepted {
            draft.set(String::new());
        } else {
            leptos::logging::warn!("duplicate message text dropped");
        }
    };

    let placeholder = move || {
        let name = username.get();
        if name.trim().is_empty() {
            "Message...".to_owned()
        } else {
            format!("Message as {name}...")
        }
    };

    view! {
        <div class="chat-view">
            <h1>"Hello FrauenLoop"</h1>

            <label for="username">"Username:"</label>
            <input
                type="text"
                id="username"
                name="username"
                prop:value=move || username.get()
                on:input=move |ev| username.set(event_target_value(&ev))
            />

            <form on:submit=on_submit>
                <label for="message">"Message:"</label>
                <input
                    type="text"
                    id="message"
                    name="message"
                    placeholder=placeholder
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <input type="submit" value="Submit"/>
            </form>

            <h2>"Messages"</h2>
            <Show when=move || {
                let state = chat.get();
                state.load == LoadState::Settled && state.messages.is_empty()
            }>
                <div class="chat-view__empty">"No messages yet"</div>
            </Show>
            <ol class="chat-view__messages">
                <For
                    each=move || chat.get().messages
                    key=|m| m.message.clone()
                    children=|m| {
                        let class = match m.kind {
                            MessageKind::Bot => "chat-view__message--bot",
                            MessageKind::User => "chat-view__message--user",
                        };
                        view! { <li class=class>{m.message}</li> }
                    }
                />
            </ol>
        </div>
    }
}
