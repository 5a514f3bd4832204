pub mod escape_time;
pub mod evaluator;
pub mod palette;
