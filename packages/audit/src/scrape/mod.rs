//! Help-center scraping: discovery, article fetching, text cleanup.

pub mod html;
pub mod site;
pub mod text;

pub use site::HelpCenterScraper;
pub use text::clean_text;
