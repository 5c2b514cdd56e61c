use leptos::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::theme::Theme;

const STAR_COUNT: usize = 120;
const STAR_SEED: u64 = 0x5EED_1234;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Shape {
    Glyph(&'static str),
    Cross,
    Octahedron,
    Torus,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Floater {
    shape: Shape,
    /// Position in viewport percent.
    x: f32,
    y: f32,
    /// Size in rem.
    size: f32,
    color: &'static str,
    /// Seconds per float cycle.
    period: f32,
}

const NEON_FLOATERS: [Floater; 3] = [
    Floater {
        shape: Shape::Glyph("🛰️"),
        x: 78.0,
        y: 18.0,
        size: 4.5,
        color: "#fbbf24",
        period: 9.0,
    },
    Floater {
        shape: Shape::Glyph("🛸"),
        x: 12.0,
        y: 30.0,
        size: 4.0,
        color: "#00f3ff",
        period: 5.0,
    },
    Floater {
        shape: Shape::Glyph("🚀"),
        x: 22.0,
        y: 72.0,
        size: 4.0,
        color: "#ff0055",
        period: 7.0,
    },
];

const MECH_FLOATERS: [Floater; 4] = [
    Floater {
        shape: Shape::Cross,
        x: 8.0,
        y: 58.0,
        size: 5.0,
        color: "#f59e0b",
        period: 8.0,
    },
    Floater {
        shape: Shape::Cross,
        x: 66.0,
        y: 40.0,
        size: 3.0,
        color: "#0ea5e9",
        period: 10.0,
    },
    Floater {
        shape: Shape::Octahedron,
        x: 26.0,
        y: 14.0,
        size: 3.5,
        color: "#6366f1",
        period: 12.0,
    },
    Floater {
        shape: Shape::Torus,
        x: 82.0,
        y: 74.0,
        size: 3.5,
        color: "#10b981",
        period: 14.0,
    },
];

fn backdrop_shapes(theme: Theme) -> &'static [Floater] {
    match theme {
        Theme::Neon => &NEON_FLOATERS,
        Theme::Mech => &MECH_FLOATERS,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Star {
    x: f32,
    y: f32,
    size: f32,
    delay: f32,
}

/// Deterministic star positions so server and client render the same field.
fn star_field(count: usize, seed: u64) -> Vec<Star> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Star {
            x: rng.gen_range(0.0..100.0),
            y: rng.gen_range(0.0..100.0),
            size: rng.gen_range(1.0..3.0),
            delay: rng.gen_range(0.0..4.0),
        })
        .collect()
}

#[component]
pub fn Backdrop(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    let stars = star_field(STAR_COUNT, STAR_SEED);

    view! {
        <div
            class=move || {
                format!(
                    "fixed inset-0 z-0 pointer-events-none overflow-hidden transition-opacity duration-1000 {}",
                    theme.get().tokens().backdrop,
                )
            }
            aria-hidden="true"
        >
            <Show when=move || theme.get() == Theme::Neon>
                {stars
                    .iter()
                    .map(|star| {
                        view! {
                            <span
                                class="absolute rounded-full bg-white animate-twinkle"
                                style:left=format!("{:.2}%", star.x)
                                style:top=format!("{:.2}%", star.y)
                                style:width=format!("{:.1}px", star.size)
                                style:height=format!("{:.1}px", star.size)
                                style:animation-delay=format!("{:.2}s", star.delay)
                            />
                        }
                    })
                    .collect_view()}
            </Show>
            {move || {
                backdrop_shapes(theme.get())
                    .iter()
                    .map(|f| view! { <FloatingShape floater=*f /> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn FloatingShape(floater: Floater) -> impl IntoView {
    let Floater {
        shape,
        x,
        y,
        size,
        color,
        period,
    } = floater;
    let body = match shape {
        Shape::Glyph(glyph) => view! {
            <span class="block leading-none" style:font-size=format!("{size}rem")>
                {glyph}
            </span>
        }
        .into_any(),
        Shape::Cross => view! {
            <span class="relative block animate-spin-slow" style:width=format!("{size}rem") style:height=format!("{size}rem")>
                <span class="absolute inset-x-0 top-1/3 h-1/3 rounded-sm" style:background-color=color />
                <span class="absolute inset-y-0 left-1/3 w-1/3 rounded-sm" style:background-color=color />
            </span>
        }
        .into_any(),
        Shape::Octahedron => view! {
            <span
                class="block rotate-45 border-4 animate-spin-slow"
                style:width=format!("{size}rem")
                style:height=format!("{size}rem")
                style:border-color=color
            />
        }
        .into_any(),
        Shape::Torus => view! {
            <span
                class="block rounded-full animate-spin-slow"
                style:width=format!("{size}rem")
                style:height=format!("{size}rem")
                style:border=format!("{:.2}rem solid {color}", size / 4.0)
            />
        }
        .into_any(),
    };

    view! {
        <div
            class="absolute animate-float drop-shadow-[0_0_12px_currentColor]"
            style:left=format!("{x}%")
            style:top=format!("{y}%")
            style:color=color
            style:animation-duration=format!("{period}s")
        >
            {body}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_field_is_deterministic() {
        let a = star_field(50, STAR_SEED);
        let b = star_field(50, STAR_SEED);
        assert_eq!(a, b);
        assert_ne!(a, star_field(50, STAR_SEED + 1));
    }

    #[test]
    fn test_star_field_in_bounds() {
        for star in star_field(STAR_COUNT, STAR_SEED) {
            assert!((0.0..100.0).contains(&star.x));
            assert!((0.0..100.0).contains(&star.y));
            assert!((1.0..3.0).contains(&star.size));
        }
    }

    #[test]
    fn test_each_theme_has_its_own_scene() {
        assert_eq!(backdrop_shapes(Theme::Neon).len(), 3);
        assert!(backdrop_shapes(Theme::Mech)
            .iter()
            .all(|f| !matches!(f.shape, Shape::Glyph(_))));
    }
}
