//! Main application component

use dioxus::prelude::*;

use paydesk_core::screen::SalariesScreen;
use paydesk_core::SalariesClient;

use crate::state::AppState;
use crate::theme::palette;
use crate::views::Salaries;

/// Root application component
#[component]
pub fn App() -> Element {
    let client = use_context::<SalariesClient>();
    let screen = use_signal(SalariesScreen::new);
    let client = use_signal(move || client);

    let state = use_context_provider(|| AppState { screen, client });

    // Initial load, once per mount
    use_hook(move || state.refresh());

    let colors = palette();
    let loading = screen.read().is_loading();

    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: 14px;
                background: {colors.bg_secondary};
                color: {colors.text_primary};
            ",

            // Nothing is rendered until the first fetch completes
            if !loading {
                Salaries {}
            }
        }
    }
}
