pub mod icon;
pub mod node;
