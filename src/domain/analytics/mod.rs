pub mod dto;
pub mod handler;
pub mod service;
pub mod session;
