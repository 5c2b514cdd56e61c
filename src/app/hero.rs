use leptos::prelude::*;

use crate::{
    nav::{PageState, Section},
    theme::Theme,
};

use super::viewport::DocumentViewport;

const RESUME_HREF: &str = "/resume.pdf";

struct SocialLink {
    href: &'static str,
    icon: &'static str,
    label: &'static str,
}

const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        href: "https://github.com",
        icon: "devicon-github-plain",
        label: "GitHub",
    },
    SocialLink {
        href: "https://linkedin.com",
        icon: "devicon-linkedin-plain",
        label: "LinkedIn",
    },
    SocialLink {
        href: "mailto:hello@example.com",
        icon: "extra-email",
        label: "Email",
    },
];

/// Landing block. Re-rendered from scratch on every theme change so the
/// entrance animation replays.
#[component]
pub fn HeroSection(state: RwSignal<PageState>) -> impl IntoView {
    let theme = Memo::new(move |_| state.with(|s| s.theme));

    view! {
        <section id=Section::Hero.anchor() class="relative min-h-screen flex items-center justify-center px-4 pt-20">
            {move || {
                let theme = theme.get();
                view! { <HeroContent theme state /> }
            }}
        </section>
    }
}

#[component]
fn HeroContent(theme: Theme, state: RwSignal<PageState>) -> impl IntoView {
    let tokens = theme.tokens();
    let hero = &theme.profile().hero;
    let (first, rest) = hero.title_parts();

    view! {
        <div class="relative z-10 max-w-5xl mx-auto text-center animate-enter">
            <span class=format!(
                "inline-block mb-6 px-4 py-1 rounded-full border text-xs font-bold uppercase tracking-[0.3em] {}",
                tokens.badge,
            )>"Available for Hire"</span>
            <h1 class="font-display text-5xl md:text-7xl lg:text-8xl font-black tracking-tight leading-none mb-6">
                <span class=format!("block {}", tokens.title_glow)>{first}</span>
                <span class=format!("block {}", tokens.heading)>{rest}</span>
            </h1>
            <p class=format!("text-xl md:text-2xl font-light mb-6 {}", tokens.body)>
                {hero.subtitle.as_str()}
            </p>
            <p class=format!("max-w-2xl mx-auto mb-10 leading-relaxed {}", tokens.muted)>
                {hero.description.as_str()}
            </p>
            <div class="flex flex-col sm:flex-row gap-4 justify-center mb-12">
                <button
                    class=format!(
                        "px-8 py-4 rounded-lg font-bold uppercase tracking-widest transition-all duration-300 {}",
                        tokens.button_primary,
                    )
                    on:click=move |_| {
                        state.update(|s| {
                            s.navigate(Section::Projects, &DocumentViewport);
                        })
                    }
                >
                    "View Work"
                </button>
                <a
                    href=RESUME_HREF
                    download=""
                    class=format!(
                        "px-8 py-4 rounded-lg border-2 font-bold uppercase tracking-widest transition-all duration-300 {}",
                        tokens.button_secondary,
                    )
                >
                    "Resume"
                </a>
            </div>
            <div class="flex justify-center gap-6 text-2xl">
                {SOCIAL_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a
                                href=link.href
                                target="_blank"
                                rel="noopener noreferrer nofollow"
                                aria-label=link.label
                                class=format!("transition-colors {}", tokens.social)
                            >
                                <i class=link.icon />
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn AboutSection(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    let tokens = move || theme.get().tokens();

    view! {
        <section id=Section::About.anchor() class="relative py-24 px-4">
            <div class=move || {
                format!(
                    "max-w-4xl mx-auto p-8 md:p-12 rounded-2xl border backdrop-blur-md {}",
                    tokens().surface,
                )
            }>
                <h2 class=move || {
                    format!("font-display text-3xl font-bold uppercase tracking-wider mb-6 {}", tokens().accent_text)
                }>"About Me"</h2>
                <p class=move || format!("text-lg leading-relaxed mb-8 {}", tokens().body)>
                    {move || theme.get().profile().about.text.as_str()}
                </p>
                <div class="flex flex-wrap gap-3">
                    {move || {
                        let t = theme.get();
                        t.profile()
                            .about
                            .hobbies
                            .iter()
                            .map(|hobby| {
                                view! {
                                    <span class=format!(
                                        "px-4 py-2 rounded-full border text-sm font-semibold {}",
                                        t.tokens().chip,
                                    )>{hobby.as_str()}</span>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}
