pub mod display;
pub mod eval;
pub mod history;
pub mod session;
pub mod tokens;
