//! Custom widget components

mod about_card;
mod error_panel;
mod header;
mod key_hints;
mod loading;
mod pagination;
mod search_input;
mod stat_card;
mod user_detail;
mod user_table;

pub use about_card::AboutCard;
pub use error_panel::ErrorPanel;
pub use header::NavHeader;
pub use key_hints::KeyHints;
pub use loading::LoadingIndicator;
pub use pagination::Pagination;
pub use search_input::SearchInput;
pub use stat_card::StatCard;
pub use user_detail::UserDetailView;
pub use user_table::UserTable;
