use leptos::{html, prelude::*};

use crate::{
    profile::SkillEntry,
    skills::{
        label_anchor, level_percent, radar_points, ring_points, svg_points, CategoryIcon,
    },
    theme::Theme,
};

use super::section::use_reveal;

#[component]
pub fn SkillBar(
    skill: &'static SkillEntry,
    #[prop(optional)] delay_ms: u32,
    theme: Signal<Theme>,
) -> impl IntoView {
    let anchor = NodeRef::<html::Div>::new();
    let revealed = use_reveal(anchor);
    let tokens = move || theme.get().tokens();
    let width = level_percent(skill.level);

    view! {
        <div node_ref=anchor>
            <div class="flex justify-between mb-2">
                <span class=move || format!("font-bold tracking-wide {}", tokens().heading)>
                    {skill.name.as_str()}
                </span>
                <span class=move || format!("font-mono {}", tokens().skill_value)>
                    {format!("{width}%")}
                </span>
            </div>
            <div class=move || {
                format!("h-2 w-full rounded-full overflow-hidden {}", tokens().track)
            }>
                <div
                    class=move || {
                        format!(
                            "h-full rounded-full transition-[width] duration-[1500ms] ease-out {}",
                            tokens().skill_fill,
                        )
                    }
                    style:width=move || {
                        if revealed.get() { format!("{width}%") } else { "0%".to_string() }
                    }
                    style:transition-delay=format!("{delay_ms}ms")
                />
            </div>
        </div>
    }
}

#[component]
pub fn SkillCategory(
    #[prop(into)] category: String,
    skills: Vec<&'static SkillEntry>,
    theme: Signal<Theme>,
    #[prop(optional)] default_open: bool,
) -> impl IntoView {
    let (open, set_open) = signal(default_open);
    let icon = CategoryIcon::for_category(&category);
    let tokens = move || theme.get().tokens();
    let count = skills.len();

    view! {
        <div class=move || {
            let t = tokens();
            let open_border = if open.get() { t.category_open } else { t.category_closed };
            format!(
                "mb-4 rounded-xl overflow-hidden border transition-all duration-300 {} {open_border}",
                t.surface,
            )
        }>
            <button
                class="w-full flex items-center justify-between p-4 text-left transition-colors"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <div class="flex items-center gap-3">
                    <i class=move || format!("{} {}", icon.class(), tokens().icon) />
                    <span class=move || {
                        format!("font-bold tracking-wide uppercase {}", tokens().heading)
                    }>{category}</span>
                    <span class=move || {
                        format!("text-xs px-2 py-0.5 rounded-full border {}", tokens().chip)
                    }>{count}</span>
                </div>
                <span class=move || {
                    let turn = if open.get() { "rotate-180" } else { "rotate-0" };
                    format!("transition-transform duration-300 {turn} {}", tokens().muted)
                }>"▾"</span>
            </button>
            <Show when=move || open.get()>
                <div class="p-4 pt-0 border-t border-gray-400/10">
                    <div class="mt-4 flex flex-col gap-6">
                        {skills
                            .iter()
                            .enumerate()
                            .map(|(index, &skill)| {
                                let delay_ms = index as u32 * 50;
                                view! { <SkillBar skill delay_ms theme /> }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </div>
    }
}

const RADAR_SIZE: f64 = 400.0;
const RADAR_RADIUS: f64 = 130.0;
const RADAR_LABEL_GAP: f64 = 18.0;

#[component]
pub fn SkillsRadar(skills: &'static [SkillEntry], theme: Signal<Theme>) -> impl IntoView {
    let center = (RADAR_SIZE / 2.0, RADAR_SIZE / 2.0);
    let count = skills.len();
    let levels = skills.iter().map(|s| s.level).collect::<Vec<_>>();
    let shape = svg_points(&radar_points(&levels, center, RADAR_RADIUS));
    let rings = [0.25, 0.5, 0.75, 1.0]
        .iter()
        .map(|f| svg_points(&ring_points(count, center, RADAR_RADIUS * f)))
        .collect::<Vec<_>>();
    let spokes = ring_points(count, center, RADAR_RADIUS);
    let labels = ring_points(count, center, RADAR_RADIUS + RADAR_LABEL_GAP)
        .into_iter()
        .zip(skills.iter())
        .collect::<Vec<_>>();
    let tokens = move || theme.get().tokens();

    view! {
        <div class="w-full h-[300px] md:h-[400px]">
            <svg
                viewBox=format!("0 0 {RADAR_SIZE} {RADAR_SIZE}")
                class="w-full h-full overflow-visible"
                role="img"
                aria-label="Skill levels"
            >
                {rings
                    .into_iter()
                    .map(|points| {
                        view! {
                            <polygon
                                points=points
                                fill="none"
                                stroke=move || tokens().radar_grid
                                stroke-width="1"
                            />
                        }
                    })
                    .collect_view()}
                {spokes
                    .into_iter()
                    .map(|(x, y)| {
                        view! {
                            <line
                                x1=center.0
                                y1=center.1
                                x2=x
                                y2=y
                                stroke=move || tokens().radar_grid
                                stroke-width="1"
                            />
                        }
                    })
                    .collect_view()}
                <polygon
                    points=shape
                    fill=move || tokens().radar_stroke
                    fill-opacity="0.3"
                    stroke=move || tokens().radar_stroke
                    stroke-width="3"
                />
                {labels
                    .into_iter()
                    .map(|((x, y), skill)| {
                        view! {
                            <text
                                x=x
                                y=y
                                text-anchor=label_anchor(x, center.0)
                                dominant-baseline="middle"
                                font-size="12"
                                fill=move || tokens().radar_label
                            >
                                {skill.name.as_str()}
                            </text>
                        }
                    })
                    .collect_view()}
            </svg>
        </div>
    }
}
