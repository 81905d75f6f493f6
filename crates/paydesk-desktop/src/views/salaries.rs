//! Salaries view - the main application screen

use dioxus::prelude::*;

use paydesk_core::screen::ViewState;

use crate::components::{ConfirmDialog, NoticeBanner, SalaryDialog, SalaryTable};
use crate::state::AppState;
use crate::theme::palette;

/// Table of salaries with the dialog currently in front of it
#[component]
pub fn Salaries() -> Element {
    let state = use_context::<AppState>();
    let colors = palette();
    let view = state.screen.read().view().clone();

    rsx! {
        div {
            class: "salaries-view",
            style: "max-width: 960px; margin: 0 auto; padding: 24px;",

            div {
                class: "salaries-header",
                style: "
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 16px;
                ",
                h1 {
                    style: "font-size: 22px; font-weight: 600; margin: 0;",
                    "Salaries"
                }
                button {
                    r#type: "button",
                    style: "
                        padding: 8px 16px;
                        border: none;
                        border-radius: 6px;
                        cursor: pointer;
                        background: {colors.accent};
                        color: {colors.accent_text};
                    ",
                    onclick: move |_| state.open_create(),
                    "Add Salary"
                }
            }

            SalaryTable {}

            match view {
                ViewState::Creating(_) | ViewState::Editing(_) => rsx! { SalaryDialog {} },
                ViewState::ConfirmingDelete(_) => rsx! { ConfirmDialog {} },
                ViewState::Idle => rsx! {},
            }

            NoticeBanner {}
        }
    }
}
