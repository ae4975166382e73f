pub mod images;
pub mod security;
pub mod time;
