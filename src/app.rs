mod backdrop;
mod hero;
mod navbar;
mod progress;
mod projects;
mod section;
mod skills;
mod timeline;
mod viewport;

use backdrop::Backdrop;
use hero::{AboutSection, HeroSection};
use leptos::{ev, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, hooks::use_query_map, path};
use leptos_use::{use_event_listener, use_window};
use navbar::NavBar;
use progress::ScrollProgress;
use projects::ProjectCard;
use section::{SectionLayoutMode, SectionWrapper};
use skills::{SkillCategory, SkillsRadar};
use timeline::ExperienceTimeline;
use viewport::DocumentViewport;

use crate::{
    nav::{PageState, Section, SectionTracker, Viewport},
    skills::group_by_category,
    theme::{Accent, Theme},
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Portfolio" />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

/// Reads `?theme=` so a profile can be linked directly.
fn initial_theme() -> Theme {
    let query = use_query_map();
    let Some(raw) = query.with_untracked(|q| q.get("theme")) else {
        return Theme::default();
    };
    raw.parse().unwrap_or_else(|err| {
        log::warn!("{err}, falling back to {}", Theme::default());
        Theme::default()
    })
}

/// Theme memo for descendants plus the scroll tracker callback.
///
/// The tracker only notifies when the active section moves, and theme
/// readers only rerun when the theme itself changes, so scrolling never
/// rebuilds theme-keyed views (timeline, accordions, reveal latches).
fn page_signals(state: RwSignal<PageState>) -> (Memo<Theme>, impl Fn(&dyn Viewport) + Copy) {
    let theme = Memo::new(move |_| state.with(|s| s.theme));
    let tracker = SectionTracker::default();
    let track = move |viewport: &dyn Viewport| {
        let mut changed = false;
        state.maybe_update(|s| {
            changed = s.track_scroll(&tracker, viewport);
            changed
        });
        if changed {
            log::debug!("active section: {:?}", state.with_untracked(|s| s.active));
        }
    };
    (theme, track)
}

#[component]
fn PortfolioPage() -> impl IntoView {
    let state = RwSignal::new(PageState::new(initial_theme()));
    let (theme, track) = page_signals(state);
    let theme = Signal::from(theme);

    _ = use_event_listener(use_window(), ev::scroll, move |_| track(&DocumentViewport));
    _ = use_event_listener(use_window(), ev::resize, move |_| track(&DocumentViewport));
    // Runs once after mount so a reload mid-page highlights the right link.
    Effect::new(move |_| track(&DocumentViewport));

    view! {
        <div class=move || {
            format!(
                "relative min-h-screen overflow-x-hidden transition-colors duration-700 {}",
                theme.get().tokens().page,
            )
        }>
            <Backdrop theme />
            <NavBar state />
            <ScrollProgress theme />
            <main class="relative z-10">
                <HeroSection state />
                <AboutSection theme />
                <SectionWrapper
                    id=Section::Education
                    title="Education"
                    accent=Accent::Purple
                    layout=SectionLayoutMode::Split { reversed: false }
                    theme
                >
                    <EducationList theme />
                </SectionWrapper>
                <SectionWrapper
                    id=Section::Experience
                    title="Experience"
                    accent=Accent::Cyan
                    layout=SectionLayoutMode::Split { reversed: true }
                    theme
                >
                    {move || {
                        view! {
                            <ExperienceTimeline
                                experience=theme.get().profile().experience.as_slice()
                                theme
                            />
                        }
                    }}
                </SectionWrapper>
                <SectionWrapper
                    id=Section::Projects
                    title="Projects"
                    accent=Accent::Green
                    layout=SectionLayoutMode::FullWidth
                    theme
                >
                    <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-8">
                        {move || {
                            theme
                                .get()
                                .profile()
                                .projects
                                .iter()
                                .map(|project| view! { <ProjectCard project theme /> })
                                .collect_view()
                        }}
                    </div>
                </SectionWrapper>
                <SectionWrapper
                    id=Section::Skills
                    title="Skills"
                    accent=Accent::Pink
                    layout=SectionLayoutMode::FullWidth
                    theme
                >
                    <SkillsPanel theme />
                </SectionWrapper>
                <SectionWrapper
                    id=Section::Certificates
                    title="Certificates"
                    accent=Accent::Purple
                    layout=SectionLayoutMode::Split { reversed: false }
                    theme
                >
                    <CertificateList theme />
                </SectionWrapper>
            </main>
            <Footer theme />
        </div>
    }
}

#[component]
fn EducationList(theme: Signal<Theme>) -> impl IntoView {
    move || {
        let t = theme.get();
        let tokens = t.tokens();
        t.profile()
            .education
            .iter()
            .map(|edu| {
                view! {
                    <div class="mb-8 last:mb-0">
                        <h3 class=format!("text-2xl font-bold {}", tokens.heading)>
                            {edu.degree.as_str()}
                        </h3>
                        <div class=format!("flex justify-between mt-2 mb-3 text-sm font-mono {}", tokens.accent_text)>
                            <span>{edu.institution.as_str()}</span>
                            <span>{edu.year.as_str()}</span>
                        </div>
                        <p class=format!("text-sm leading-relaxed {}", tokens.muted)>
                            {edu.details.as_str()}
                        </p>
                    </div>
                }
            })
            .collect_view()
    }
}

#[component]
fn SkillsPanel(theme: Signal<Theme>) -> impl IntoView {
    move || {
        let skills = theme.get().profile().skills.as_slice();
        let categories = group_by_category(skills)
            .into_iter()
            .enumerate()
            .map(|(index, (category, entries))| {
                view! {
                    <SkillCategory
                        category=category
                        skills=entries
                        theme
                        default_open={index == 0}
                    />
                }
            })
            .collect_view();

        view! {
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-start">
                <div>{categories}</div>
                <SkillsRadar skills theme />
            </div>
        }
    }
}

#[component]
fn CertificateList(theme: Signal<Theme>) -> impl IntoView {
    move || {
        let t = theme.get();
        let tokens = t.tokens();
        t.profile()
            .certificates
            .iter()
            .map(|cert| {
                view! {
                    <a
                        href=cert.link.as_str()
                        target="_blank"
                        rel="noopener noreferrer nofollow"
                        class=format!(
                            "flex items-center justify-between p-4 mb-4 last:mb-0 rounded-xl border transition-all duration-300 {}",
                            tokens.surface,
                        )
                    >
                        <div>
                            <h3 class=format!("font-bold {}", tokens.heading)>{cert.name.as_str()}</h3>
                            <p class=format!("text-sm {}", tokens.muted)>
                                {format!("{} • {}", cert.issuer, cert.date)}
                            </p>
                        </div>
                        <i class=format!("extra-award text-2xl {}", tokens.icon) />
                    </a>
                }
            })
            .collect_view()
    }
}

#[component]
fn Footer(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <footer class=move || {
            format!("relative z-10 py-8 text-center text-sm border-t {}", theme.get().tokens().footer)
        }>
            <p title={concat!("Built ", env!("BUILD_TIME"))}>
                {format!("© {} All rights reserved.", env!("BUILD_YEAR"))}
            </p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use super::*;
    use crate::nav::{SectionBounds, SectionLayout};

    /// Hero at 0..800 and About at 800..1600, scrolled to `scroll_y`.
    struct StaticPage {
        scroll_y: f64,
    }

    impl SectionLayout for StaticPage {
        fn bounds(&self, section: Section) -> Option<SectionBounds> {
            match section {
                Section::Hero => Some(SectionBounds { top: 0.0, height: 800.0 }),
                Section::About => Some(SectionBounds { top: 800.0, height: 800.0 }),
                _ => None,
            }
        }
    }

    impl Viewport for StaticPage {
        fn scroll_y(&self) -> f64 {
            self.scroll_y
        }

        fn scroll_into_view(&self, _: Section) -> bool {
            true
        }
    }

    fn counting_reader<T>(source: Memo<T>) -> (Memo<T>, Arc<AtomicUsize>)
    where
        T: Clone + PartialEq + Send + Sync + 'static,
    {
        let runs = Arc::new(AtomicUsize::new(0));
        let reader = Memo::new({
            let runs = Arc::clone(&runs);
            move |_| {
                runs.fetch_add(1, Ordering::SeqCst);
                source.get()
            }
        });
        (reader, runs)
    }

    #[test]
    fn test_scrolling_leaves_theme_readers_alone() {
        let owner = Owner::new();
        owner.with(|| {
            let state = RwSignal::new(PageState::default());
            let (theme, track) = page_signals(state);
            let (reader, runs) = counting_reader(theme);

            assert_eq!(reader.get(), Theme::Neon);
            for _ in 0..5 {
                track(&StaticPage { scroll_y: 10.0 });
                reader.get();
            }
            assert_eq!(runs.load(Ordering::SeqCst), 1);

            // active section moves; the theme does not
            track(&StaticPage { scroll_y: 900.0 });
            reader.get();
            assert_eq!(state.get_untracked().active, Section::About);
            assert_eq!(runs.load(Ordering::SeqCst), 1);

            state.update(PageState::toggle_theme);
            assert_eq!(reader.get(), Theme::Mech);
            assert_eq!(runs.load(Ordering::SeqCst), 2);
        });
    }

    #[test]
    fn test_accordion_state_survives_scrolling() {
        let owner = Owner::new();
        owner.with(|| {
            let state = RwSignal::new(PageState::default());
            let (theme, track) = page_signals(state);
            // a theme-keyed view owning an accordion that starts open
            let accordion = Memo::new(move |_| {
                theme.get();
                RwSignal::new(true)
            });

            accordion.get().set(false);
            for scroll_y in [0.0, 300.0, 900.0, 1200.0, 10.0] {
                track(&StaticPage { scroll_y });
            }
            assert!(!accordion.get().get_untracked());

            state.update(PageState::toggle_theme);
            assert!(accordion.get().get_untracked());
        });
    }
}
