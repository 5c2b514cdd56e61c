use leptos::{ev::MouseEvent, html, prelude::*};
use leptos_use::{use_raf_fn, UseRafFnCallbackArgs};

use crate::{motion::TimelineFill, profile::ExperienceEntry, theme::Theme};

use super::section::use_reveal;

#[component]
pub fn ExperienceTimeline(
    experience: &'static [ExperienceEntry],
    #[prop(into)] theme: Signal<Theme>,
) -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let fill = StoredValue::new(TimelineFill::default());
    let (length, set_length) = signal(0.0);
    let (opacity, set_opacity) = signal(0.0);

    _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        if !fill.with_value(TimelineFill::is_animating) {
            return;
        }
        let dt = args.delta / 1000.0;
        fill.update_value(|f| f.step(dt));
        fill.with_value(|f| {
            set_length.set(f.length());
            set_opacity.set(f.opacity());
        });
    });

    let on_move = move |ev: MouseEvent| {
        let Some(el) = container.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        fill.update_value(|f| {
            f.pointer_move(f64::from(ev.client_y()), rect.top(), rect.height())
        });
    };
    let on_leave = move |_: MouseEvent| {
        fill.update_value(TimelineFill::pointer_leave);
    };

    let tokens = move || theme.get().tokens();

    view! {
        <div
            node_ref=container
            class="relative py-4 px-4 md:px-0"
            on:mousemove=on_move
            on:mouseleave=on_leave
        >
            <div class=move || {
                format!(
                    "absolute left-6 md:left-1/2 top-0 bottom-0 w-1 md:-translate-x-1/2 overflow-hidden rounded-full {}",
                    tokens().track,
                )
            } />
            <div
                class=move || {
                    format!(
                        "absolute left-6 md:left-1/2 top-0 w-1 md:-translate-x-1/2 rounded-full z-0 origin-top pointer-events-none {}",
                        tokens().beam,
                    )
                }
                style:height=move || format!("{:.1}px", length.get())
                style:opacity=move || format!("{:.3}", opacity.get())
            />
            <div class="space-y-12 relative z-10 pointer-events-none">
                {experience
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| view! { <TimelineItem entry index theme /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn TimelineItem(
    entry: &'static ExperienceEntry,
    index: usize,
    theme: Signal<Theme>,
) -> impl IntoView {
    let anchor = NodeRef::<html::Div>::new();
    let revealed = use_reveal(anchor);
    let tokens = move || theme.get().tokens();
    let is_even = index % 2 == 0;
    let row = if is_even { "md:flex-row-reverse" } else { "md:flex-row" };
    let (pad, connector) = if is_even {
        ("md:pr-12", "-right-12")
    } else {
        ("md:pl-12", "-left-12")
    };
    let delay = format!("{}ms", index * 100);

    view! {
        <div
            node_ref=anchor
            class=move || {
                let state = if revealed.get() { "opacity-100 translate-y-0" } else { "opacity-0 translate-y-8" };
                format!(
                    "relative flex flex-col {row} items-center w-full group pointer-events-auto transition-all duration-500 {state}",
                )
            }
            style:transition-delay=delay
        >
            <div class=move || {
                format!(
                    "absolute left-[20px] md:left-1/2 md:-translate-x-1/2 w-4 h-4 rounded-full border-2 z-10 transition-all duration-300 {}",
                    tokens().dot,
                )
            } />
            <div class="hidden md:block w-1/2" />
            <div class=format!("w-full md:w-1/2 {pad} pl-16 md:pl-8")>
                <div class=move || {
                    format!(
                        "p-6 rounded-xl border relative transition-all duration-300 hover:scale-[1.01] {}",
                        tokens().surface,
                    )
                }>
                    <div class=format!(
                        "hidden md:block absolute top-1/2 h-[2px] w-12 {connector} bg-gray-400/30",
                    ) />
                    <div class="flex flex-col mb-2">
                        <span class=move || {
                            format!(
                                "inline-flex items-center gap-2 text-xs font-mono mb-2 uppercase tracking-widest {}",
                                tokens().accent_text,
                            )
                        }>
                            <i class="extra-calendar" />
                            {entry.period.as_str()}
                        </span>
                        <h3 class=move || format!("text-xl font-bold {}", tokens().heading)>
                            {entry.role.as_str()}
                        </h3>
                        <div class=move || {
                            format!(
                                "flex items-center gap-2 text-md font-semibold mt-1 {}",
                                tokens().body,
                            )
                        }>
                            <i class="extra-briefcase" />
                            {entry.company.as_str()}
                        </div>
                    </div>
                    <p class=move || {
                        format!("mb-4 text-sm leading-relaxed {}", tokens().muted)
                    }>{entry.description.as_str()}</p>
                    <div class="flex flex-wrap gap-2">
                        {entry
                            .skills
                            .iter()
                            .map(|skill| {
                                view! {
                                    <span class=move || {
                                        format!(
                                            "text-[10px] uppercase font-bold px-2 py-1 rounded border {}",
                                            tokens().chip,
                                        )
                                    }>{skill.as_str()}</span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
