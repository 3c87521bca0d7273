//! Page-level components wired to the store and modal controller.

mod project_card;
mod project_grid;
mod project_modal;

pub use project_card::ProjectCard;
pub use project_grid::ProjectGrid;
pub use project_modal::ProjectModal;
