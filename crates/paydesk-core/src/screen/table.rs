//! Table presentation: column formatting, display-only sorting and pagination.

use std::cmp::Ordering;

use chrono::NaiveDateTime;

use crate::models::SalaryRecord;
use crate::util::ellipsize;

/// Suffix shown after every amount
pub const CURRENCY_SUFFIX: &str = "EUR";

/// Long localized date format, e.g. `Jan 1, 2024 12:00 AM`
pub const DISPLAY_DATE_FORMAT: &str = "%b %-d, %Y %-I:%M %p";

/// Employee names longer than this are cut in the cell; the full name stays
/// available as the tooltip.
pub const EMPLOYEE_CELL_CHARS: usize = 32;

/// Page sizes offered by the table
pub const ROWS_PER_PAGE_OPTIONS: [usize; 5] = [10, 15, 20, 25, 30];

/// Sortable table columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Employee,
    Amount,
    Date,
}

impl SortColumn {
    pub const fn header(self) -> &'static str {
        match self {
            Self::Employee => "Employee",
            Self::Amount => "Amount",
            Self::Date => "Date",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub column: SortColumn,
    pub direction: SortDirection,
}

/// One rendered table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub record: SalaryRecord,
    /// Employee name as shown in the cell
    pub employee: String,
    /// Full employee name for the tooltip
    pub employee_full: String,
    pub amount: String,
    pub date: String,
}

impl TableRow {
    pub fn from_record(record: &SalaryRecord) -> Self {
        Self {
            record: record.clone(),
            employee: ellipsize(&record.employee, EMPLOYEE_CELL_CHARS),
            employee_full: record.employee.clone(),
            amount: format_amount(record),
            date: format_date(record.salary_date),
        }
    }
}

/// Sort and pagination state of the table.
///
/// Purely a view over the held collection; changing it never triggers a
/// fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    sort: Option<SortSpec>,
    page: usize,
    rows_per_page: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            sort: None,
            page: 0,
            rows_per_page: ROWS_PER_PAGE_OPTIONS[0],
        }
    }
}

impl TableState {
    pub const fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    /// Zero-based current page
    pub const fn page(&self) -> usize {
        self.page
    }

    pub const fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    /// Sort by `column`, flipping the direction when it is already active.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        let direction = match self.sort {
            Some(spec) if spec.column == column => spec.direction.flipped(),
            _ => SortDirection::Ascending,
        };
        self.sort = Some(SortSpec { column, direction });
        self.page = 0;
    }

    pub fn set_sort(&mut self, sort: Option<SortSpec>) {
        self.sort = sort;
        self.page = 0;
    }

    /// Change the page size; zero is ignored.
    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        if rows_per_page == 0 {
            return;
        }
        self.rows_per_page = rows_per_page;
        self.page = 0;
    }

    /// Jump to `page`, clamped to the pages available for `total` rows.
    pub fn set_page(&mut self, page: usize, total: usize) {
        self.page = page.min(self.page_count(total) - 1);
    }

    /// Keep the current page valid after the collection changed size.
    pub fn clamp_page(&mut self, total: usize) {
        self.set_page(self.page, total);
    }

    /// Number of pages for `total` rows (at least one)
    pub const fn page_count(&self, total: usize) -> usize {
        if total == 0 {
            1
        } else {
            total.div_ceil(self.rows_per_page)
        }
    }

    /// Sorted rows of the current page.
    pub fn rows(&self, records: &[SalaryRecord]) -> Vec<TableRow> {
        let mut ordered = records.iter().collect::<Vec<_>>();
        if let Some(spec) = self.sort {
            // Stable sort keeps server order for equal keys
            ordered.sort_by(|left, right| {
                let ordering = compare(spec.column, left, right);
                match spec.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        ordered
            .into_iter()
            .skip(self.page * self.rows_per_page)
            .take(self.rows_per_page)
            .map(TableRow::from_record)
            .collect()
    }
}

fn compare(column: SortColumn, left: &SalaryRecord, right: &SalaryRecord) -> Ordering {
    match column {
        SortColumn::Employee => left
            .employee
            .to_lowercase()
            .cmp(&right.employee.to_lowercase()),
        SortColumn::Amount => left.amount.cmp(&right.amount),
        SortColumn::Date => left.salary_date.cmp(&right.salary_date),
    }
}

/// Amount cell text, e.g. `1000 EUR`
pub fn format_amount(record: &SalaryRecord) -> String {
    format!("{} {CURRENCY_SUFFIX}", record.amount_text())
}

/// Date cell text, `-` when the record has no date
pub fn format_date(date: Option<NaiveDateTime>) -> String {
    date.map_or_else(
        || "-".to_string(),
        |date| date.format(DISPLAY_DATE_FORMAT).to_string(),
    )
}
