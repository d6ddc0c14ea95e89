use log::{debug, warn};
use yew::prelude::*;

use crate::dom::{self, WindowListener};
use crate::motion::scroll::{ScrollFlags, ScrollSnapshot, ScrollTracker};

#[derive(Properties, PartialEq)]
pub struct ScrollProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Owns the page's only scroll and resize listeners and shares the
/// resulting [`ScrollSnapshot`] with everything below it.
///
/// The threshold flags live in a context of their own that is only updated
/// when [`ScrollTracker`] reports a flip, so flag consumers do not re-render
/// on every scroll event.
#[function_component(ScrollProvider)]
pub fn scroll_provider(props: &ScrollProviderProps) -> Html {
    let snapshot = use_state_eq(ScrollSnapshot::default);
    let flags = use_state_eq(ScrollFlags::default);
    let tracker = use_mut_ref(ScrollTracker::new);

    {
        let snapshot = snapshot.clone();
        let flags = flags.clone();
        use_effect_with_deps(
            move |_| {
                let refresh = move || match dom::scroll_snapshot() {
                    Ok(next) => {
                        let change = tracker.borrow_mut().observe(next.offset);
                        if change.any() {
                            let current = tracker.borrow().flags();
                            debug!("scroll flags now {:?}", current);
                            flags.set(current);
                        }
                        snapshot.set(next);
                    }
                    Err(e) => warn!("could not read scroll position: {}", e),
                };

                refresh();

                let listeners: Vec<WindowListener> = ["scroll", "resize"]
                    .into_iter()
                    .filter_map(|event| match WindowListener::new(event, refresh.clone()) {
                        Ok(listener) => Some(listener),
                        Err(e) => {
                            warn!("scroll tracking disabled for {}: {}", event, e);
                            None
                        }
                    })
                    .collect();

                move || drop(listeners)
            },
            (),
        );
    }

    html! {
        <ContextProvider<ScrollFlags> context={*flags}>
            <ContextProvider<ScrollSnapshot> context={*snapshot}>
                { for props.children.iter() }
            </ContextProvider<ScrollSnapshot>>
        </ContextProvider<ScrollFlags>>
    }
}

/// Latest scroll snapshot, or the top-of-page snapshot outside a provider.
#[hook]
pub fn use_scroll() -> ScrollSnapshot {
    use_context::<ScrollSnapshot>().unwrap_or_default()
}

/// Threshold flags; changes only when a threshold is crossed.
#[hook]
pub fn use_scroll_flags() -> ScrollFlags {
    use_context::<ScrollFlags>().unwrap_or_default()
}
