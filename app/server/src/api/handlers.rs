mod articles;
mod home;
mod notify;

// Re-export all handlers
pub use articles::list_articles;
pub use home::home_page;
pub use notify::run_check;
