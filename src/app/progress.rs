use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_raf_fn, use_window, UseRafFnCallbackArgs};

use crate::{
    motion::{Spring, SpringConfig},
    nav::{scroll_progress, Viewport},
    theme::Theme,
};

use super::viewport::DocumentViewport;

/// Thin bar pinned under the nav that follows how far the page is scrolled.
#[component]
pub fn ScrollProgress(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    let spring = StoredValue::new(Spring::new(0.0, SpringConfig::PROGRESS));
    let (scale, set_scale) = signal(0.0);

    let measure = move || {
        let viewport = DocumentViewport;
        let target = scroll_progress(
            viewport.scroll_y(),
            viewport.document_height(),
            viewport.viewport_height(),
        );
        spring.update_value(|s| s.set_target(target));
    };

    _ = use_event_listener(use_window(), ev::scroll, move |_| measure());
    _ = use_event_listener(use_window(), ev::resize, move |_| measure());
    // A reload restored mid-page starts from the current offset.
    Effect::new(move |_| measure());

    _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        if !spring.with_value(Spring::is_animating) {
            return;
        }
        let value = spring.try_update_value(|s| s.step(args.delta / 1000.0));
        if let Some(value) = value {
            set_scale.set(value);
        }
    });

    view! {
        <div
            class=move || {
                format!(
                    "fixed top-20 left-0 right-0 h-1 z-50 origin-left pointer-events-none {}",
                    theme.get().tokens().progress,
                )
            }
            style:transform=move || format!("scaleX({:.4})", scale.get())
        />
    }
}
