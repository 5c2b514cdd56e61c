use leptos::prelude::*;

use crate::{profile::ProjectEntry, theme::Theme};

/// Decorative model spinning in the card header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    Torus,
    Icosahedron,
    Cube,
}

impl ModelKind {
    pub fn for_project(id: u32) -> Self {
        match id {
            2 => Self::Icosahedron,
            3 => Self::Cube,
            _ => Self::Torus,
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Torus => "model-torus",
            Self::Icosahedron => "model-icosahedron",
            Self::Cube => "model-cube",
        }
    }
}

#[component]
pub fn ProjectCard(project: &'static ProjectEntry, theme: Signal<Theme>) -> impl IntoView {
    let (hovered, set_hovered) = signal(false);
    let model = ModelKind::for_project(project.id);
    let tokens = move || theme.get().tokens();
    let accent = move || tokens().project_accent;

    view! {
        <div
            class=move || {
                format!(
                    "rounded-xl overflow-hidden border flex flex-col h-full group transition-all duration-300 hover:-translate-y-1 {}",
                    tokens().surface,
                )
            }
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            <div class="h-48 w-full bg-gradient-to-b from-black/20 to-black/80 relative flex items-center justify-center [perspective:600px]">
                <div class=move || {
                    let paused = if hovered.get() { "paused" } else { "" };
                    format!("model {} {} {paused}", model.class(), accent())
                } />
                <div class=move || {
                    format!("absolute top-2 right-2 bg-black/60 px-2 py-1 rounded text-xs border {}", accent())
                }>"Interactive 3D"</div>
            </div>
            <div class="p-6 flex-1 flex flex-col">
                <div class="flex justify-between items-start mb-4">
                    <h3 class=move || format!("text-xl font-bold transition-colors {}", tokens().heading)>
                        {project.title.as_str()}
                    </h3>
                    <a
                        href=project.link.as_str()
                        target="_blank"
                        rel="noopener noreferrer nofollow"
                        class=move || tokens().social
                        aria-label="Open project"
                    >
                        <i class="extra-link" />
                    </a>
                </div>
                <p class=move || format!("text-sm mb-6 flex-1 {}", tokens().muted)>
                    {project.description.as_str()}
                </p>
                <div class="flex flex-wrap gap-2 mt-auto">
                    {project
                        .tech
                        .iter()
                        .map(|t| {
                            view! {
                                <span class=move || {
                                    format!(
                                        "text-[10px] uppercase tracking-wider font-bold px-2 py-1 rounded border {}",
                                        tokens().chip,
                                    )
                                }>{t.as_str()}</span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_for_project() {
        assert_eq!(ModelKind::for_project(1), ModelKind::Torus);
        assert_eq!(ModelKind::for_project(2), ModelKind::Icosahedron);
        assert_eq!(ModelKind::for_project(3), ModelKind::Cube);
        assert_eq!(ModelKind::for_project(17), ModelKind::Torus);
    }
}
