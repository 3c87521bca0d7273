//! Reusable UI components
//!
//! Every component renders record text as text nodes, so field values are
//! never interpreted as markup.

mod badges;
mod button;
mod filter_pills;
mod tech_tags;

pub use badges::*;
pub use button::*;
pub use filter_pills::*;
pub use tech_tags::*;
