use leptos::{either::*, html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::{
    motion::RevealLatch,
    nav::Section,
    theme::{Accent, AccentTokens, Theme},
};

/// Shrinks the viewport so content counts as visible only once it is
/// 100px inside it.
const REVEAL_MARGIN: &str = "-100px";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionLayoutMode {
    /// Content card beside a decorative visual; `reversed` puts the card on
    /// the right on wide screens.
    Split { reversed: bool },
    FullWidth,
}

/// Latches to `true` the first time `target` becomes visible.
pub fn use_reveal(target: NodeRef<html::Div>) -> Memo<bool> {
    let (visible, set_visible) = signal(false);
    _ = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            if let Some(entry) = entries.last() {
                set_visible.set(entry.is_intersecting());
            }
        },
        UseIntersectionObserverOptions::default().root_margin(REVEAL_MARGIN.to_string()),
    );
    Memo::new(move |prev: Option<&bool>| {
        RevealLatch::new(prev.copied().unwrap_or_default()).observe(visible.get())
    })
}

fn reveal_class(revealed: bool, hidden: &str) -> String {
    let state = if revealed {
        "opacity-100 translate-x-0 translate-y-0 scale-100"
    } else {
        hidden
    };
    format!("transition-all duration-700 ease-out {state}")
}

#[component]
pub fn SectionWrapper(
    id: Section,
    #[prop(into)] title: String,
    #[prop(optional)] accent: Option<Accent>,
    layout: SectionLayoutMode,
    #[prop(into)] theme: Signal<Theme>,
    children: Children,
) -> impl IntoView {
    let anchor = NodeRef::<html::Div>::new();
    let revealed = use_reveal(anchor);
    let colors = move || theme.get().accent(accent);

    let heading = view! {
        <div class=move || {
            format!("mb-16 text-center {}", reveal_class(revealed.get(), "opacity-0 translate-y-12"))
        }>
            <h2 class=move || {
                format!(
                    "font-display text-4xl md:text-5xl font-bold uppercase tracking-wider {}",
                    colors().title,
                )
            }>{title}</h2>
            <div class=move || {
                format!(
                    "h-1 w-24 mx-auto mt-4 rounded-full shadow-[0_0_10px_currentColor] {}",
                    colors().underline,
                )
            } />
        </div>
    };

    let card_class = move |extra: &str| {
        format!(
            "backdrop-blur-md p-8 rounded-2xl border relative z-20 {} {} {extra}",
            theme.get().tokens().card,
            colors().border,
        )
    };

    let body = match layout {
        SectionLayoutMode::FullWidth => Either::Left(view! {
            <div class=move || {
                format!(
                    "w-full delay-200 {}",
                    reveal_class(revealed.get(), "opacity-0 translate-y-12"),
                )
            }>
                <div class=move || card_class("w-full")>{children()}</div>
            </div>
        }),
        SectionLayoutMode::Split { reversed } => {
            let (card_hidden, card_col, visual_col) = if reversed {
                ("opacity-0 translate-x-12", "lg:col-start-2", "lg:col-start-1 lg:row-start-1")
            } else {
                ("opacity-0 -translate-x-12", "", "")
            };
            Either::Right(view! {
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                    <div class=move || {
                        format!("delay-200 {card_col} {}", reveal_class(revealed.get(), card_hidden))
                    }>
                        <div class=move || card_class("")>{children()}</div>
                    </div>
                    <div class=move || {
                        format!(
                            "flex justify-center items-center h-full min-h-[300px] delay-500 {visual_col} {}",
                            reveal_class(revealed.get(), "opacity-0 scale-75"),
                        )
                    }>
                        <SectionVisual id colors=Signal::derive(colors) />
                    </div>
                </div>
            })
        }
    };

    let width = match layout {
        SectionLayoutMode::FullWidth => "max-w-[90%]",
        SectionLayoutMode::Split { .. } => "max-w-7xl",
    };

    view! {
        <section
            id=id.anchor()
            class="min-h-screen flex items-center justify-center py-24 px-4 relative overflow-hidden"
        >
            <div node_ref=anchor class=format!("container mx-auto relative z-10 {width}")>
                {heading}
                {body}
            </div>
        </section>
    }
}

#[component]
fn SectionVisual(id: Section, colors: Signal<&'static AccentTokens>) -> impl IntoView {
    let glyph = match id {
        Section::Education => EitherOf4::A(view! {
            <div class="text-center p-6 rotate-3">
                <span class=move || format!("text-9xl mb-4 block {}", colors.get().title)>
                    "🎓"
                </span>
            </div>
        }),
        Section::Experience => EitherOf4::B(view! {
            <div class="w-full h-full p-4 flex flex-col gap-6 justify-center items-center">
                <div class="h-4 bg-gray-400/30 rounded w-3/4 animate-pulse" />
                <div class="h-4 bg-gray-400/30 rounded w-1/2 animate-pulse delay-75" />
                <div class="h-4 bg-gray-400/30 rounded w-full animate-pulse delay-150" />
            </div>
        }),
        Section::Certificates => EitherOf4::C(view! {
            <div class="flex flex-col items-center justify-center -rotate-3">
                <div class=move || {
                    format!(
                        "w-32 h-40 border-2 rounded flex items-center justify-center mb-2 bg-black/10 backdrop-blur-sm {}",
                        colors.get().border,
                    )
                }>
                    <div class=move || {
                        format!("w-16 h-16 rounded-full opacity-30 animate-pulse {}", colors.get().glow)
                    } />
                </div>
            </div>
        }),
        _ => EitherOf4::D(()),
    };

    view! {
        <div class="relative w-full h-full min-h-[400px] rounded-2xl overflow-hidden opacity-60 mix-blend-lighten hover:opacity-100 transition-opacity duration-700">
            <div class="absolute inset-4 flex items-center justify-center overflow-hidden">
                <div class=move || {
                    format!(
                        "absolute w-48 h-48 rounded-full blur-[60px] opacity-30 animate-pulse-slow {}",
                        colors.get().glow,
                    )
                } />
                {glyph}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_class() {
        let hidden = reveal_class(false, "opacity-0 translate-y-12");
        assert!(hidden.ends_with("opacity-0 translate-y-12"));
        assert!(reveal_class(true, "opacity-0").contains("opacity-100"));
    }

    #[test]
    fn test_reveal_waits_until_inside_viewport() {
        assert_eq!(REVEAL_MARGIN, "-100px");
    }
}
