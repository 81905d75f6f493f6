//! Salary table component

use dioxus::prelude::*;

use paydesk_core::screen::{SortColumn, SortDirection, SortSpec, ROWS_PER_PAGE_OPTIONS};

use crate::state::AppState;
use crate::theme::palette;

const SORTABLE_COLUMNS: [SortColumn; 3] =
    [SortColumn::Employee, SortColumn::Amount, SortColumn::Date];

/// Header text with an arrow on the active sort column
fn header_label(column: SortColumn, sort: Option<SortSpec>) -> String {
    match sort {
        Some(spec) if spec.column == column => {
            let arrow = match spec.direction {
                SortDirection::Ascending => "\u{25b2}",
                SortDirection::Descending => "\u{25bc}",
            };
            format!("{} {arrow}", column.header())
        }
        _ => column.header().to_string(),
    }
}

/// `1-10 of 23` style range for the pagination footer
fn page_range_label(page: usize, rows_per_page: usize, total: usize) -> String {
    if total == 0 {
        return "0 of 0".to_string();
    }
    let first = page * rows_per_page + 1;
    let last = ((page + 1) * rows_per_page).min(total);
    format!("{first}-{last} of {total}")
}

/// Sortable, paginated salary table with per-row edit and delete actions
#[component]
pub fn SalaryTable() -> Element {
    let mut state = use_context::<AppState>();
    let colors = palette();

    let screen = state.screen.read();
    let rows = screen.rows();
    let sort = screen.table().sort();
    let page = screen.table().page();
    let rows_per_page = screen.table().rows_per_page();
    let page_count = screen.page_count();
    let total = screen.records().len();
    drop(screen);
    let is_empty = rows.is_empty();

    let range_label = page_range_label(page, rows_per_page, total);
    let cell_style = format!("padding: 10px 12px; border-bottom: 1px solid {};", colors.border);
    let button_style = format!(
        "padding: 4px 10px; margin-right: 6px; border: 1px solid {}; border-radius: 4px; background: {}; cursor: pointer;",
        colors.border, colors.bg_primary
    );

    rsx! {
        div {
            class: "salary-table",
            style: "
                background: {colors.bg_primary};
                border: 1px solid {colors.border};
                border-radius: 8px;
                overflow: hidden;
            ",

            table {
                style: "width: 100%; border-collapse: collapse;",
                thead {
                    tr {
                        for column in SORTABLE_COLUMNS {
                            {
                                let name = column.header();
                                let label = header_label(column, sort);

                                rsx! {
                                    th {
                                        key: "{name}",
                                        style: "{cell_style} text-align: left; cursor: pointer; user-select: none; color: {colors.text_secondary};",
                                        onclick: move |_| state.screen.write().toggle_sort(column),
                                        "{label}"
                                    }
                                }
                            }
                        }
                        th {
                            style: "{cell_style} text-align: left; color: {colors.text_secondary};",
                            "Options"
                        }
                    }
                }
                tbody {
                    if is_empty {
                        tr {
                            td {
                                colspan: "4",
                                style: "{cell_style} text-align: center; color: {colors.text_muted};",
                                "No salaries yet"
                            }
                        }
                    }
                    for row in rows {
                        {
                            let edit_record = row.record.clone();
                            let delete_record = row.record.clone();
                            let actionable = !row.record.salary_id.is_placeholder();

                            rsx! {
                                tr {
                                    key: "{row.record.salary_id}",
                                    td {
                                        style: "{cell_style} white-space: nowrap;",
                                        title: "{row.employee_full}",
                                        "{row.employee}"
                                    }
                                    td { style: "{cell_style}", "{row.amount}" }
                                    td { style: "{cell_style}", "{row.date}" }
                                    td {
                                        style: "{cell_style}",
                                        if actionable {
                                            button {
                                                r#type: "button",
                                                style: "{button_style}",
                                                onclick: move |_| state.open_edit(edit_record.clone()),
                                                "Edit"
                                            }
                                            button {
                                                r#type: "button",
                                                style: "{button_style} color: {colors.error};",
                                                onclick: move |_| state.request_delete(delete_record.clone()),
                                                "Delete"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "salary-pagination",
                style: "
                    display: flex;
                    justify-content: flex-end;
                    align-items: center;
                    gap: 12px;
                    padding: 8px 12px;
                    color: {colors.text_secondary};
                ",
                span { "Rows per page:" }
                select {
                    value: "{rows_per_page}",
                    onchange: move |evt: FormEvent| {
                        if let Ok(value) = evt.value().parse::<usize>() {
                            state.screen.write().set_rows_per_page(value);
                        }
                    },
                    for size in ROWS_PER_PAGE_OPTIONS {
                        option {
                            key: "{size}",
                            value: "{size}",
                            selected: size == rows_per_page,
                            "{size}"
                        }
                    }
                }
                span { "{range_label}" }
                button {
                    r#type: "button",
                    style: "{button_style}",
                    disabled: page == 0,
                    onclick: move |_| state.screen.write().set_page(page.saturating_sub(1)),
                    "\u{2039}"
                }
                button {
                    r#type: "button",
                    style: "{button_style}",
                    disabled: page + 1 >= page_count,
                    onclick: move |_| state.screen.write().set_page(page + 1),
                    "\u{203a}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn active_sort_column_shows_direction() {
        let sort = Some(SortSpec {
            column: SortColumn::Amount,
            direction: SortDirection::Descending,
        });
        assert_eq!(header_label(SortColumn::Amount, sort), "Amount \u{25bc}");
        assert_eq!(header_label(SortColumn::Employee, sort), "Employee");
        assert_eq!(header_label(SortColumn::Date, None), "Date");
    }

    #[test]
    fn page_range_label_clamps_last_page() {
        assert_eq!(page_range_label(0, 10, 23), "1-10 of 23");
        assert_eq!(page_range_label(2, 10, 23), "21-23 of 23");
        assert_eq!(page_range_label(0, 10, 0), "0 of 0");
    }
}
