//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{
    ReportKind, print_comparison, print_counts, print_grid, print_grid_comparison,
    print_two_letter_list, print_two_letter_list_comparison,
};
pub use formatters::{NO_COMBOS_MESSAGE, ZeroStyle, format_grid, format_two_letter_list};
