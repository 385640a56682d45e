//! Browsing History Use Cases

mod add_browse_history;
mod list_browse_history;

pub use add_browse_history::AddBrowseHistoryUseCase;
pub use list_browse_history::ListBrowseHistoryUseCase;
