pub mod hinter;
pub mod paths;
