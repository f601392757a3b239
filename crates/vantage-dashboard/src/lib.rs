//! # vantage-dashboard
//!
//! Page controllers for the Vantage dashboard and the view layer they feed.
//!
//! - [`pages`]: the projects and analytics pages (mount, filters, actions)
//! - [`view`]: formatting and colour tokens for rows
//! - [`agent`] / [`agent_widget`]: agent profiles with fallback and the Q&A
//!   widget
//! - [`integration`]: the cached Google Analytics connection
//! - [`notify`]: notifications raised by page actions

pub mod agent;
pub mod agent_widget;
mod error;
pub mod integration;
pub mod notify;
pub mod pages;
pub mod view;

pub use error::DashboardError;
