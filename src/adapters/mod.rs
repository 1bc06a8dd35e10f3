// Adapters layer: concrete implementations for external systems (git, http).

pub mod git_history;
pub mod linguist;

pub use git_history::GitHistory;
pub use linguist::LinguistColors;
