pub mod analytics;
pub mod collection;
