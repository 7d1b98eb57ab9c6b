//! Selection reducer.

use crate::model::page::PageId;
use serde::{Deserialize, Serialize};

/// User intent that may change the active page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "page_id", rename_all = "snake_case")]
pub enum NavAction {
    /// Point click or pagination dot click.
    Select(PageId),
    Previous,
    Next,
}

/// Active page plus the page count it is bounded by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    selected: PageId,
    page_count: PageId,
}

/// A committed selection transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionChange {
    pub from: PageId,
    pub to: PageId,
}

impl SelectionState {
    /// Starts on page 1. `page_count` is raised to at least 1.
    pub fn new(page_count: PageId) -> Self {
        Self {
            selected: 1,
            page_count: page_count.max(1),
        }
    }

    pub fn selected(&self) -> PageId {
        self.selected
    }

    pub fn page_count(&self) -> PageId {
        self.page_count
    }

    pub fn contains(&self, id: PageId) -> bool {
        (1..=self.page_count).contains(&id)
    }

    /// Whether the "previous" control is enabled.
    pub fn can_go_previous(&self) -> bool {
        self.selected > 1
    }

    /// Whether the "next" control is enabled.
    pub fn can_go_next(&self) -> bool {
        self.selected < self.page_count
    }
}

/// Computes the next selection for `action`.
///
/// Returns `None` when the action changes nothing: re-selecting the active
/// page, an id outside the catalog, or stepping past either end.
pub fn reduce(
    state: SelectionState,
    action: NavAction,
) -> Option<(SelectionState, SelectionChange)> {
    let target = match action {
        NavAction::Select(id) if state.contains(id) => id,
        NavAction::Select(_) => return None,
        NavAction::Previous if state.can_go_previous() => state.selected - 1,
        NavAction::Next if state.can_go_next() => state.selected + 1,
        NavAction::Previous | NavAction::Next => return None,
    };
    if target == state.selected {
        return None;
    }

    let next = SelectionState {
        selected: target,
        ..state
    };
    Some((
        next,
        SelectionChange {
            from: state.selected,
            to: target,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::{reduce, NavAction, SelectionChange, SelectionState};

    #[test]
    fn select_moves_to_requested_page() {
        let (next, change) =
            reduce(SelectionState::new(6), NavAction::Select(4)).expect("select should apply");
        assert_eq!(next.selected(), 4);
        assert_eq!(change, SelectionChange { from: 1, to: 4 });
    }

    #[test]
    fn reselecting_active_page_is_noop() {
        assert!(reduce(SelectionState::new(6), NavAction::Select(1)).is_none());
    }

    #[test]
    fn out_of_range_select_is_noop() {
        let state = SelectionState::new(6);
        assert!(reduce(state, NavAction::Select(0)).is_none());
        assert!(reduce(state, NavAction::Select(7)).is_none());
    }

    #[test]
    fn previous_and_next_do_not_wrap() {
        let first = SelectionState::new(3);
        assert!(!first.can_go_previous());
        assert!(reduce(first, NavAction::Previous).is_none());

        let (second, _) = reduce(first, NavAction::Next).expect("next from 1");
        let (last, _) = reduce(second, NavAction::Next).expect("next from 2");
        assert_eq!(last.selected(), 3);
        assert!(!last.can_go_next());
        assert!(reduce(last, NavAction::Next).is_none());

        let (back, change) = reduce(last, NavAction::Previous).expect("previous from 3");
        assert_eq!(back.selected(), 2);
        assert_eq!(change.from, 3);
    }

    #[test]
    fn action_wire_shape_is_tagged() {
        let json = serde_json::to_value(NavAction::Select(2)).expect("serialize");
        assert_eq!(json, serde_json::json!({ "kind": "select", "page_id": 2 }));
        let json = serde_json::to_value(NavAction::Next).expect("serialize");
        assert_eq!(json, serde_json::json!({ "kind": "next" }));
    }
}
