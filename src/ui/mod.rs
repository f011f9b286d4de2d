pub mod error;
pub mod output;
pub mod prompt;
pub mod terminal;
pub mod theme;
