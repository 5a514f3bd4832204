pub mod app;
pub mod pointer_input;
