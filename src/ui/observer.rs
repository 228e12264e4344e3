//! Scroll-visibility wiring: IntersectionObserver events into one-way
//! reveal signals.
//!
//! The reducer lives in [`crate::core::reveal`]; this module only binds it
//! to the browser observer API and tears the observer down on unmount.

use leptos::html;
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use crate::core::reveal::{
    CARD_STAGGER_MS, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, SectionReveal, stagger_delays,
};

/// One-way visibility signal for a section wrapper. The observer flips the
/// flag the first time the element intersects the viewport (10% visible,
/// biased to fire slightly early); later intersections are ignored, and the
/// observer is disconnected when the owner unmounts.
pub fn use_section_reveal(target: NodeRef<html::Div>) -> RwSignal<bool> {
    let visible = RwSignal::new(false);

    #[cfg(feature = "ssr")]
    let _ = target;

    #[cfg(not(feature = "ssr"))]
    {
        use send_wrapper::SendWrapper;
        use std::cell::RefCell;
        use std::rc::Rc;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let observer_slot: Rc<RefCell<Option<web_sys::IntersectionObserver>>> =
            Rc::new(RefCell::new(None));
        let slot = observer_slot.clone();

        Effect::new(move |_| {
            let Some(element) = target.get() else {
                return;
            };
            if slot.borrow().is_some() {
                return;
            }

            let mut reveal = SectionReveal::new();
            let handler = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    if reveal.observe(entry.is_intersecting()) {
                        visible.set(true);
                    }
                }
            });

            let options = web_sys::IntersectionObserverInit::new();
            options.set_threshold(&wasm_bindgen::JsValue::from_f64(REVEAL_THRESHOLD));
            options.set_root_margin(REVEAL_ROOT_MARGIN);

            if let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
                handler.as_ref().unchecked_ref(),
                &options,
            ) {
                observer.observe(&element);
                *slot.borrow_mut() = Some(observer);
            }
            // Keep the callback alive for the observer's lifetime
            handler.forget();
        });

        let slot_for_cleanup = SendWrapper::new(observer_slot);
        on_cleanup(move || {
            if let Some(observer) = slot_for_cleanup.borrow_mut().take() {
                observer.disconnect();
            }
        });
    }

    visible
}

/// Section reveal plus per-card signals flipped on a fixed stagger once the
/// section becomes visible, so grid cards animate in sequentially.
pub fn use_staggered_reveal(
    target: NodeRef<html::Div>,
    count: usize,
) -> (RwSignal<bool>, Vec<RwSignal<bool>>) {
    let section = use_section_reveal(target);
    let cards: Vec<RwSignal<bool>> = (0..count).map(|_| RwSignal::new(false)).collect();

    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::future::TimeoutFuture;
        use wasm_bindgen_futures::spawn_local;

        let cards_for_effect = cards.clone();
        Effect::new(move |_| {
            // one-way: fires once when the section flips
            if !section.get() {
                return;
            }
            for (card, delay) in cards_for_effect
                .iter()
                .copied()
                .zip(stagger_delays(count, CARD_STAGGER_MS))
            {
                spawn_local(async move {
                    TimeoutFuture::new(delay).await;
                    card.set(true);
                });
            }
        });
    }

    (section, cards)
}
