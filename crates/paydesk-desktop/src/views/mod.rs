//! Application views

mod salaries;

pub use salaries::Salaries;
