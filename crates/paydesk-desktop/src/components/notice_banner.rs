//! Modal notice for delete results and save failures

use dioxus::prelude::*;

use crate::state::AppState;
use crate::theme::palette;

/// Shows the oldest queued notice until dismissed
#[component]
pub fn NoticeBanner() -> Element {
    let state = use_context::<AppState>();
    let colors = palette();

    let Some(notice) = state.screen.read().notice().cloned() else {
        return rsx! {};
    };

    let accent = if notice.is_error() {
        colors.error
    } else {
        colors.success
    };

    rsx! {
        div {
            class: "notice-backdrop",
            style: "
                position: fixed;
                inset: 0;
                display: flex;
                align-items: center;
                justify-content: center;
                background: {colors.bg_overlay};
            ",

            div {
                class: if notice.is_error() { "notice error" } else { "notice success" },
                "role": "alert",
                style: "
                    width: 360px;
                    padding: 24px;
                    border-radius: 10px;
                    border-top: 4px solid {accent};
                    text-align: center;
                    background: {colors.bg_primary};
                ",

                h2 {
                    style: "font-size: 18px; margin: 0 0 8px 0; color: {accent};",
                    "{notice.title}"
                }
                p {
                    style: "margin: 0 0 20px 0; color: {colors.text_secondary};",
                    "{notice.text}"
                }
                button {
                    r#type: "button",
                    style: "
                        padding: 8px 20px;
                        border: none;
                        border-radius: 6px;
                        background: {colors.accent};
                        color: {colors.accent_text};
                        cursor: pointer;
                    ",
                    onclick: move |_| state.dismiss_notice(),
                    "OK"
                }
            }
        }
    }
}
