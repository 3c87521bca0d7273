//! Property-based tests for the store, filter and grid
//!
//! Uses proptest to check lookup and ordering invariants over arbitrary
//! project lists.

use proptest::prelude::*;
use portfolio_core::{CardContainer, FilterToken, Project, ProjectStore, Stack};

// ============================================================================
// Strategy Generators
// ============================================================================

fn stack_strategy() -> impl Strategy<Value = Option<Stack>> {
    prop_oneof![
        Just(None),
        Just(Some(Stack::Laravel)),
        Just(Some(Stack::Go)),
        Just(Some(Stack::Php)),
        Just(Some(Stack::Mern)),
        "[a-z]{3,8}".prop_map(|s| Some(Stack::from(s))),
    ]
}

/// Unique-id project lists of up to 30 records
fn projects_strategy() -> impl Strategy<Value = Vec<Project>> {
    prop::collection::vec(
        ("[a-zA-Z0-9 ]{1,40}", stack_strategy(), prop::collection::vec("[A-Za-z]{1,10}", 0..5)),
        0..30,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (title, stack, tech))| {
                let mut p = Project::new(format!("project-{i}"), title);
                p.stack = stack;
                p.tech = tech;
                p
            })
            .collect()
    })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Every record is found by its own id and compares equal
    #[test]
    fn find_by_id_roundtrip(projects in projects_strategy()) {
        let store = ProjectStore::new(projects.clone());
        for p in &projects {
            prop_assert_eq!(store.find_by_id(&p.id), Some(p));
        }
        prop_assert!(store.find_by_id("project-missing").is_none());
    }

    /// Filtering keeps the original relative order and only matching records
    #[test]
    fn filter_preserves_relative_order(projects in projects_strategy(), stack in stack_strategy()) {
        let token = stack.clone().map(FilterToken::Stack).unwrap_or_default();
        let filtered = token.apply(&projects);

        let positions: Vec<usize> = filtered
            .iter()
            .map(|f| projects.iter().position(|p| p.id == f.id).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));

        if let Some(stack) = stack {
            prop_assert!(filtered.iter().all(|p| p.stack.as_ref() == Some(&stack)));
            let expected = projects.iter().filter(|p| p.stack.as_ref() == Some(&stack)).count();
            prop_assert_eq!(filtered.len(), expected);
        } else {
            prop_assert_eq!(filtered.len(), projects.len());
        }
    }

    /// The grid never ends up empty, and tags keep their order
    #[test]
    fn grid_mounts_cards_or_one_placeholder(projects in projects_strategy()) {
        let mut grid = CardContainer::new();
        grid.render(&projects);

        if projects.is_empty() {
            prop_assert_eq!(grid.len(), 1);
            prop_assert!(grid.has_placeholder());
        } else {
            prop_assert_eq!(grid.card_count(), projects.len());
            for (card, p) in grid.cards().zip(&projects) {
                prop_assert_eq!(&card.id, &p.id);
                prop_assert_eq!(&card.tech, &p.tech);
            }
        }
    }
}
