// Models module for data structures
pub mod name;
pub mod project;
