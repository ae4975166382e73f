pub mod database;
pub mod images;
pub mod repositories;
pub mod security;
pub mod time;
