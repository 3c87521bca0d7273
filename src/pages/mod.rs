//! Page components for the portfolio.

mod home;
mod project_details;

pub use home::Home;
pub use project_details::ProjectDetails;
