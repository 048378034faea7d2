pub mod counter;
pub mod ease;
