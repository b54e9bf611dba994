//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::chat_view::ChatView;
use crate::config::ChatConfig;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the injected runtime configuration and renders the single
/// chat view.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(ChatConfig::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/loopchat.css"/>
        <Title text="LoopChat"/>

        <ChatView/>
    }
}
