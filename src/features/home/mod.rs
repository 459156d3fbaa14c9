pub mod hero;
pub mod page;
