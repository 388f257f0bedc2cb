pub mod input;
pub mod panels;
