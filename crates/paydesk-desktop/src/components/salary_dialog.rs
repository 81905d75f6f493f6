//! Add/edit salary dialog

use dioxus::prelude::*;

use crate::state::AppState;
use crate::theme::palette;

/// Modal form for the add or edit dialog held by the screen
#[component]
pub fn SalaryDialog() -> Element {
    let mut state = use_context::<AppState>();
    let colors = palette();

    let Some(form) = state.screen.read().form().cloned() else {
        return rsx! {};
    };

    let title = form.title();
    let submit_label = form.submit_label();
    let employee = form.draft().employee().to_string();
    let amount = form.draft().amount().to_string();
    let salary_date = form.draft().salary_date().to_string();
    let error = form.error().map(str::to_string);
    // Flipping on every rejected edit remounts the amount input, so the
    // browser drops the refused text and shows the stored amount again.
    let amount_remount = form.rejected_inputs() % 2 == 1;
    let refocus_amount = form.rejected_inputs() > 0;

    let label_style = "display: block; margin-bottom: 12px; font-size: 13px;";
    let input_style = format!(
        "display: block; width: 100%; box-sizing: border-box; margin-top: 4px; padding: 8px; border: 1px solid {}; border-radius: 6px;",
        colors.border
    );

    let on_amount_input = move |evt: FormEvent| {
        if let Some(form) = state.screen.write().form_mut() {
            form.set_amount(&evt.value());
        }
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
            onclick: move |_| state.close_dialog(),

            form {
                class: "salary-dialog",
                style: "
                    width: 420px;
                    padding: 24px;
                    border-radius: 10px;
                    background: {colors.bg_primary};
                    box-shadow: 0 12px 32px rgba(0, 0, 0, 0.2);
                ",
                onclick: move |evt| evt.stop_propagation(),
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    state.submit();
                },

                h2 {
                    style: "font-size: 18px; margin: 0 0 16px 0;",
                    "{title}"
                }

                label {
                    style: "{label_style}",
                    "Employee"
                    input {
                        r#type: "text",
                        required: true,
                        style: "{input_style}",
                        value: "{employee}",
                        oninput: move |evt: FormEvent| {
                            if let Some(form) = state.screen.write().form_mut() {
                                form.set_employee(&evt.value());
                            }
                        },
                    }
                }

                label {
                    style: "{label_style}",
                    "Amount (EUR)"
                    if amount_remount {
                        input {
                            r#type: "text",
                            inputmode: "decimal",
                            required: true,
                            style: "{input_style}",
                            value: "{amount}",
                            onmounted: move |evt| async move {
                                if refocus_amount {
                                    _ = evt.set_focus(true).await;
                                }
                            },
                            oninput: on_amount_input,
                        }
                    } else {
                        input {
                            r#type: "text",
                            inputmode: "decimal",
                            required: true,
                            style: "{input_style}",
                            value: "{amount}",
                            onmounted: move |evt| async move {
                                if refocus_amount {
                                    _ = evt.set_focus(true).await;
                                }
                            },
                            oninput: on_amount_input,
                        }
                    }
                }

                label {
                    style: "{label_style}",
                    "Date"
                    input {
                        r#type: "datetime-local",
                        step: "1",
                        required: true,
                        style: "{input_style}",
                        value: "{salary_date}",
                        oninput: move |evt: FormEvent| {
                            if let Some(form) = state.screen.write().form_mut() {
                                form.set_salary_date(&evt.value());
                            }
                        },
                    }
                }

                if let Some(message) = error {
                    div {
                        class: "dialog-error",
                        style: "margin-bottom: 12px; color: {colors.error}; font-size: 13px;",
                        "{message}"
                    }
                }

                div {
                    style: "display: flex; justify-content: flex-end; gap: 8px;",
                    button {
                        r#type: "button",
                        style: "
                            padding: 8px 16px;
                            border: 1px solid {colors.border};
                            border-radius: 6px;
                            background: {colors.bg_primary};
                            cursor: pointer;
                        ",
                        onclick: move |_| state.close_dialog(),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        style: "
                            padding: 8px 16px;
                            border: none;
                            border-radius: 6px;
                            background: {colors.accent};
                            color: {colors.accent_text};
                            cursor: pointer;
                        ",
                        "{submit_label}"
                    }
                }
            }
        }
    }
}
