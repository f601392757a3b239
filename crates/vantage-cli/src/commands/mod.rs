pub mod agent;
pub mod analysis;
pub mod dispatch;
pub mod ga;
pub mod insights;
pub mod models;
pub mod projects;
pub mod schema;
pub mod shared;
