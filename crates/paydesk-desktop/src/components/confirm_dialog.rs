//! Delete confirmation dialog

use dioxus::prelude::*;

use crate::state::AppState;
use crate::theme::palette;

/// Asks before a salary is deleted; anything but the confirm button cancels.
#[component]
pub fn ConfirmDialog() -> Element {
    let state = use_context::<AppState>();
    let colors = palette();

    let Some(prompt) = state.screen.read().delete_prompt() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "dialog-backdrop",
            style: "
                position: fixed;
                inset: 0;
                display: flex;
                align-items: center;
                justify-content: center;
                background: {colors.bg_overlay};
            ",
            onclick: move |_| state.answer_delete(false),

            div {
                class: "confirm-dialog",
                "role": "alertdialog",
                style: "
                    width: 400px;
                    padding: 24px;
                    border-radius: 10px;
                    text-align: center;
                    background: {colors.bg_primary};
                    box-shadow: 0 12px 32px rgba(0, 0, 0, 0.2);
                ",
                onclick: move |evt| evt.stop_propagation(),

                h2 {
                    style: "font-size: 18px; margin: 0 0 12px 0;",
                    "{prompt.title}"
                }
                p {
                    style: "margin: 0 0 20px 0; color: {colors.text_secondary};",
                    "{prompt.text}"
                }

                div {
                    style: "display: flex; justify-content: center; gap: 8px;",
                    button {
                        r#type: "button",
                        style: "
                            padding: 8px 16px;
                            border: none;
                            border-radius: 6px;
                            background: {colors.error};
                            color: {colors.accent_text};
                            cursor: pointer;
                        ",
                        onclick: move |_| state.answer_delete(true),
                        "{prompt.confirm_label}"
                    }
                    button {
                        r#type: "button",
                        style: "
                            padding: 8px 16px;
                            border: 1px solid {colors.border};
                            border-radius: 6px;
                            background: {colors.bg_primary};
                            cursor: pointer;
                        ",
                        onclick: move |_| state.answer_delete(false),
                        "{prompt.cancel_label}"
                    }
                }
            }
        }
    }
}
