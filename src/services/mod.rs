pub mod category_service;
pub mod pagination;
pub mod query_service;
pub mod search_text;
pub mod seed;
pub mod suggestion_service;
pub mod term_service;
