pub mod dto;
pub mod export;
pub mod handler;
pub mod view;
