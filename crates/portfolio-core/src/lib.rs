//! Portfolio Core Library
//!
//! Project data, filtering, card and modal view models, and the offline
//! cache layer behind a personal portfolio site.
//!
//! ## Overview
//!
//! - [`store`]: the read-only project list, loaded once with an embedded
//!   fallback, shared through a [`StoreHandle`] that signals settlement
//! - [`cards`]: card view models and the grid container
//! - [`filter`]: the stack filter buttons
//! - [`detail`]: the standalone `?id=` detail page
//! - [`modal`]: the project modal state machine and focus trap
//! - [`offline`]: network-first fetching with a versioned response cache
//!
//! ## Quick Start
//!
//! ```ignore
//! use portfolio_core::{store, CardContainer, FilterBar, PortfolioConfig, StoreHandle};
//!
//! #[tokio::main]
//! async fn main() {
//!     let handle = StoreHandle::new();
//!     handle.settle(store::load(&PortfolioConfig::default()).await);
//!
//!     let store = handle.settled().await;
//!     let mut filters = FilterBar::default();
//!     let mut grid = CardContainer::new();
//!
//!     filters.select(1); // Laravel
//!     grid.render(filters.apply(store.list()));
//!     for card in grid.cards() {
//!         println!("{} [{}]", card.title, card.stack_badge);
//!     }
//! }
//! ```

pub mod cards;
pub mod config;
pub mod detail;
pub mod error;
pub mod filter;
pub mod modal;
pub mod offline;
pub mod store;
pub mod types;

// Re-exports
pub use cards::{CardContainer, CardView, GridNode, ImpactHighlight};
pub use config::{PortfolioConfig, ProjectSource};
pub use detail::DetailView;
pub use error::{PortfolioError, PortfolioResult};
pub use filter::{FilterBar, FilterButton, FilterToken};
pub use modal::{FocusTarget, HideOutcome, KeyOutcome, ModalController, ModalKey, ModalState, ModalView};
pub use store::{ProjectStore, StoreHandle, StoreOrigin};
pub use types::*;
