//! Keyboard focus trapping inside the open modal.

/// Focusable controls of the modal, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    /// The x button in the header; receives focus on open
    HeaderClose,
    /// The "Close" button in the footer
    FooterClose,
    /// "Live Demo" link, present only when the project has a url
    DemoLink,
    /// "View Code" link, present only when the project has a repository
    CodeLink,
}

/// Keys the modal reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKey {
    Escape,
    Tab,
    Other,
}

/// Where focus must go for a Tab press, if anywhere.
///
/// `order` is the current focusable set, recomputed by the caller for every
/// press. Shift+Tab on the first element wraps to the last, Tab on the last
/// wraps to the first. When focus is outside the set it is pulled back in.
/// `None` lets the browser move focus normally.
pub fn trap_focus(
    order: &[FocusTarget],
    focused: Option<FocusTarget>,
    shift: bool,
) -> Option<FocusTarget> {
    let (first, last) = (*order.first()?, *order.last()?);

    let inside = focused.is_some_and(|f| order.contains(&f));
    if !inside {
        return Some(if shift { last } else { first });
    }

    match (shift, focused) {
        (true, Some(f)) if f == first => Some(last),
        (false, Some(f)) if f == last => Some(first),
        _ => None,
    }
}
