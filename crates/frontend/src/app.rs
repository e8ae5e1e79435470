use crate::app_shell::AppShell;
use crate::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Configuration is read once at start-up and shared via context.
    provide_context(config);

    view! {
        <AppShell />
    }
}
