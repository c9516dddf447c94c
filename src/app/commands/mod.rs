pub mod new;
pub mod patch;
pub mod steps;
