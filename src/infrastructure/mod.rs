pub mod database;
pub mod repositories;
pub mod slug;
pub mod time;
