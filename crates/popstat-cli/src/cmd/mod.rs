pub mod get_data;
pub mod print_data;
