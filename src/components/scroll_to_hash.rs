//! Hash-anchor scroll synchronization.
//!
//! Target elements may not exist yet when the hash changes (a freshly routed
//! page can still be mounting), so the lookup is deferred by a short delay
//! and performed once. A missing target after the delay is silently skipped.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use yew_router::prelude::*;

const SCROLL_DELAY_MS: u32 = 100;

/// Normalizes a location hash to an element id. Empty hashes have no target.
pub fn anchor_target(hash: &str) -> Option<String> {
    let target = hash.strip_prefix('#').unwrap_or(hash);
    if target.is_empty() {
        None
    } else {
        Some(target.to_string())
    }
}

fn scroll_to(target: &str) {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };
    if let Some(element) = document.get_element_by_id(target) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Render-less component mounted inside the router. Reacts once per distinct
/// hash change (including the initial load) by scheduling a single one-shot
/// timeout; a newer hash drops the pending timeout, so a superseded scroll
/// never fires against an old anchor.
#[function_component(ScrollToHash)]
pub fn scroll_to_hash() -> Html {
    let pending: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);
    let hash = use_location()
        .map(|location| location.hash().to_string())
        .unwrap_or_default();

    use_effect_with_deps(
        move |hash: &String| {
            if let Some(target) = anchor_target(hash) {
                let timeout = Timeout::new(SCROLL_DELAY_MS, move || scroll_to(&target));
                *pending.borrow_mut() = Some(timeout);
            }
            || ()
        },
        hash,
    );

    Html::default()
}

#[cfg(test)]
mod tests {
    use super::anchor_target;

    #[test]
    fn hash_marks_are_stripped() {
        assert_eq!(anchor_target("#apps"), Some("apps".to_string()));
        assert_eq!(anchor_target("#contact"), Some("contact".to_string()));
    }

    #[test]
    fn bare_fragments_pass_through() {
        assert_eq!(anchor_target("about"), Some("about".to_string()));
    }

    #[test]
    fn empty_hashes_have_no_target() {
        assert_eq!(anchor_target(""), None);
        assert_eq!(anchor_target("#"), None);
    }
}
