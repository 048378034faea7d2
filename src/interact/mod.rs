pub mod anchor;
pub mod header;
pub mod hero;
pub mod menu;
pub mod reveal;
pub mod theme;
