pub mod page;
pub mod sections;
