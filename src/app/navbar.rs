use leptos::{ev, prelude::*};

use crate::nav::{PageState, Section, NAV_LINKS};

use super::viewport::DocumentViewport;

#[component]
pub fn NavBar(state: RwSignal<PageState>) -> impl IntoView {
    let theme = Memo::new(move |_| state.with(|s| s.theme));
    let active = Memo::new(move |_| state.with(|s| s.active));
    let menu_open = Memo::new(move |_| state.with(|s| s.menu_open));
    let tokens = move || theme.get().tokens();

    let go = move |section: Section| {
        log::debug!("navigating to #{}", section.anchor());
        state.update(|s| {
            s.navigate(section, &DocumentViewport);
        });
    };
    let toggle_theme = move |_: ev::MouseEvent| {
        state.update(PageState::toggle_theme);
        log::debug!("theme switched to {}", state.with_untracked(|s| s.theme));
    };

    let link_class = move |section: Section| {
        let t = tokens();
        let color = if active.get() == section {
            t.nav_link_active
        } else {
            t.nav_link
        };
        format!("text-sm uppercase tracking-widest font-bold transition-colors {color}")
    };

    view! {
        <nav class=move || {
            format!(
                "fixed top-0 inset-x-0 z-50 backdrop-blur-md border-b transition-colors duration-500 {}",
                tokens().nav,
            )
        }>
            <div class="max-w-7xl mx-auto px-4 h-20 flex items-center justify-between">
                <button
                    class=move || format!("font-display text-2xl font-black tracking-tighter {}", tokens().heading)
                    on:click=move |_| go(Section::Hero)
                >
                    {move || tokens().brand.0}
                    <span class=move || tokens().brand_accent>{move || tokens().brand.1}</span>
                </button>

                <div class="hidden lg:flex items-center gap-8">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let section = link.section;
                            view! {
                                <button class=move || link_class(section) on:click=move |_| go(section)>
                                    {link.label}
                                </button>
                            }
                        })
                        .collect_view()}
                    <ThemeToggle on_toggle=toggle_theme label=Signal::derive(move || tokens().toggle_label) />
                </div>

                <div class="flex lg:hidden items-center gap-4">
                    <ThemeToggle on_toggle=toggle_theme label=Signal::derive(move || tokens().toggle_label) />
                    <button
                        class=move || format!("text-2xl {}", tokens().heading)
                        aria-label="Toggle menu"
                        on:click=move |_| state.update(PageState::toggle_menu)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class=move || {
                    format!("lg:hidden border-t px-4 py-6 flex flex-col gap-4 {}", tokens().mobile_menu)
                }>
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let section = link.section;
                            view! {
                                <button
                                    class=move || format!("text-left {}", link_class(section))
                                    on:click=move |_| go(section)
                                >
                                    {link.label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn ThemeToggle<F>(on_toggle: F, label: Signal<&'static str>) -> impl IntoView
where
    F: Fn(ev::MouseEvent) + Copy + 'static,
{
    view! {
        <button
            class="px-4 py-2 rounded-full border border-gray-400/40 text-xs uppercase tracking-widest font-bold transition-all duration-300 hover:scale-105"
            on:click=on_toggle
        >
            {move || label.get()}
        </button>
    }
}
