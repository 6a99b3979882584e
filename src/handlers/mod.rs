pub mod category_handler;
pub mod search_handler;
pub mod suggestion_handler;
pub mod term_handler;
