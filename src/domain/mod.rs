pub mod analysis;
pub mod analytics;
pub mod page;
pub mod report;
