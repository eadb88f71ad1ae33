pub mod common;
pub mod home_page;
pub mod nav_bar;
pub mod user_page;
