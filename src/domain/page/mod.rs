pub mod handler;
pub mod shell;
pub mod template;
