pub mod common;
pub mod pivot;
pub mod quick_sort_3way;
pub mod quick_sort_lomuto;
