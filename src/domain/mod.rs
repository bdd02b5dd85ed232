pub mod fuzzy;
pub mod models;
pub mod router;
pub mod search_index;
