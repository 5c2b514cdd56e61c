//! Theme selection and the style tokens every component renders with.
//!
//! A [`Theme`] picks both the content [`Profile`] and a static table of
//! Tailwind class tokens. Components read tokens from here rather than
//! branching on the theme themselves.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::profile::{Profile, AI_PROFILE, SWE_PROFILE};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("unknown theme: {0}")]
    UnknownTheme(String),
    #[error("unknown accent: {0}")]
    UnknownAccent(String),
}

/// The two site personas. `Neon` is the generative-AI persona on a dark
/// space backdrop, `Mech` the full-stack persona on a light drafting-table
/// backdrop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Neon,
    Mech,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Neon => Theme::Mech,
            Theme::Mech => Theme::Neon,
        }
    }

    pub fn profile(self) -> &'static Profile {
        match self {
            Theme::Neon => &*AI_PROFILE,
            Theme::Mech => &*SWE_PROFILE,
        }
    }

    pub fn tokens(self) -> &'static StyleTokens {
        match self {
            Theme::Neon => &NEON_TOKENS,
            Theme::Mech => &MECH_TOKENS,
        }
    }

    /// Accent tokens for a section; `None` gets the neutral palette.
    pub fn accent(self, accent: Option<Accent>) -> &'static AccentTokens {
        use Accent::*;
        match (self, accent) {
            (Theme::Neon, Some(Cyan)) => &NEON_CYAN,
            (Theme::Neon, Some(Purple)) => &NEON_PURPLE,
            (Theme::Neon, Some(Green)) => &NEON_GREEN,
            (Theme::Neon, Some(Pink)) => &NEON_PINK,
            (Theme::Neon, None) => &NEON_NEUTRAL,
            (Theme::Mech, Some(Cyan)) => &MECH_SKY,
            (Theme::Mech, Some(Purple)) => &MECH_INDIGO,
            (Theme::Mech, Some(Green)) => &MECH_EMERALD,
            (Theme::Mech, Some(Pink)) => &MECH_AMBER,
            (Theme::Mech, None) => &MECH_NEUTRAL,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Neon => "neon",
            Theme::Mech => "mech",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "neon" => Ok(Theme::Neon),
            "mech" => Ok(Theme::Mech),
            _ => Err(ThemeError::UnknownTheme(s.to_string())),
        }
    }
}

/// Section accent color key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Cyan,
    Purple,
    Green,
    Pink,
}

impl FromStr for Accent {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cyan" => Ok(Accent::Cyan),
            "purple" => Ok(Accent::Purple),
            "green" => Ok(Accent::Green),
            "pink" => Ok(Accent::Pink),
            _ => Err(ThemeError::UnknownAccent(s.to_string())),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct StyleTokens {
    pub brand: (&'static str, &'static str),
    pub brand_accent: &'static str,
    pub page: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
    pub muted: &'static str,
    pub accent_text: &'static str,
    pub nav: &'static str,
    pub nav_link: &'static str,
    pub nav_link_active: &'static str,
    pub mobile_menu: &'static str,
    pub badge: &'static str,
    pub title_glow: &'static str,
    pub card: &'static str,
    pub surface: &'static str,
    pub chip: &'static str,
    pub button_primary: &'static str,
    pub button_secondary: &'static str,
    pub social: &'static str,
    pub progress: &'static str,
    pub track: &'static str,
    pub beam: &'static str,
    pub dot: &'static str,
    pub skill_value: &'static str,
    pub skill_fill: &'static str,
    pub icon: &'static str,
    pub footer: &'static str,
    pub backdrop: &'static str,
    pub radar_stroke: &'static str,
    pub radar_grid: &'static str,
    pub radar_label: &'static str,
    pub toggle_label: &'static str,
    pub project_accent: &'static str,
    pub category_open: &'static str,
    pub category_closed: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct AccentTokens {
    pub title: &'static str,
    pub underline: &'static str,
    pub border: &'static str,
    pub glow: &'static str,
}

static NEON_TOKENS: StyleTokens = StyleTokens {
    brand: ("NEON", "GEN"),
    brand_accent: "text-neon-purple",
    page: "bg-bg-dark text-white selection:bg-neon-cyan/30 selection:text-neon-cyan",
    heading: "text-white",
    body: "text-gray-300",
    muted: "text-gray-400",
    accent_text: "text-neon-cyan",
    nav: "bg-bg-dark/80 border-white/5",
    nav_link: "text-white hover:text-neon-cyan",
    nav_link_active: "text-neon-cyan",
    mobile_menu: "bg-bg-card border-white/10",
    badge: "border-neon-cyan/50 bg-neon-cyan/10 text-neon-cyan",
    title_glow: "text-neon-cyan drop-shadow-[0_0_20px_rgba(0,243,255,0.6)]",
    card: "bg-bg-card/80",
    surface: "bg-white/5 border-white/10 hover:border-neon-cyan/50 hover:bg-white/10 hover:shadow-[0_0_15px_rgba(0,243,255,0.1)]",
    chip: "border-neon-cyan/30 text-neon-cyan/70 bg-neon-cyan/5",
    button_primary: "bg-neon-cyan text-black hover:bg-white shadow-[0_0_20px_rgba(0,243,255,0.4)]",
    button_secondary: "border-white text-white hover:bg-white hover:text-black",
    social: "text-gray-400 hover:text-neon-cyan",
    progress: "bg-neon-cyan shadow-[0_0_10px_#00f3ff]",
    track: "bg-white/5",
    beam: "bg-gradient-to-b from-neon-cyan via-neon-purple to-neon-cyan shadow-[0_0_15px_rgba(0,243,255,0.6)]",
    dot: "bg-black border-neon-cyan shadow-[0_0_10px_rgba(0,243,255,0.8)] group-hover:bg-neon-cyan",
    skill_value: "text-neon-pink",
    skill_fill: "bg-neon-pink shadow-[0_0_8px_#ff0055]",
    icon: "text-neon-pink",
    footer: "text-gray-500 bg-black/50 border-white/5",
    backdrop: "opacity-60",
    radar_stroke: "#bc13fe",
    radar_grid: "#333333",
    radar_label: "#aaaaaa",
    toggle_label: "Engineer Mode",
    project_accent: "text-neon-green border-neon-green/30",
    category_open: "border-neon-pink/50 shadow-[0_0_15px_rgba(255,0,85,0.1)]",
    category_closed: "hover:border-white/30",
};

static MECH_TOKENS: StyleTokens = StyleTokens {
    brand: ("MECH", "DEV"),
    brand_accent: "text-mech-amber",
    page: "bg-mech-bg text-mech-text selection:bg-mech-sky/30 selection:text-mech-sky",
    heading: "text-mech-text",
    body: "text-gray-600",
    muted: "text-gray-500",
    accent_text: "text-mech-sky",
    nav: "bg-white/80 border-gray-200",
    nav_link: "text-mech-text hover:text-mech-sky",
    nav_link_active: "text-mech-sky",
    mobile_menu: "bg-white border-gray-200",
    badge: "border-mech-sky/50 bg-mech-sky/10 text-mech-sky",
    title_glow: "text-mech-sky",
    card: "bg-white/90 shadow-lg",
    surface: "bg-white border-gray-200 shadow-sm hover:shadow-lg hover:border-mech-sky/50",
    chip: "border-mech-sky/30 text-mech-sky bg-mech-sky/5",
    button_primary: "bg-mech-sky text-white hover:bg-mech-indigo shadow-md",
    button_secondary: "border-mech-text text-mech-text hover:bg-mech-text hover:text-white",
    social: "text-gray-500 hover:text-mech-sky",
    progress: "bg-mech-sky",
    track: "bg-gray-200",
    beam: "bg-gradient-to-b from-mech-sky via-mech-indigo to-mech-sky",
    dot: "bg-white border-mech-sky shadow-sm group-hover:bg-mech-sky",
    skill_value: "text-mech-amber",
    skill_fill: "bg-mech-amber",
    icon: "text-mech-amber",
    footer: "text-gray-500 bg-white/70 border-gray-200",
    backdrop: "opacity-100",
    radar_stroke: "#6366f1",
    radar_grid: "#d1d5db",
    radar_label: "#6b7280",
    toggle_label: "AI Mode",
    project_accent: "text-mech-emerald border-mech-emerald/30",
    category_open: "border-mech-amber/50 shadow-md",
    category_closed: "hover:border-gray-300",
};

static NEON_CYAN: AccentTokens = AccentTokens {
    title: "text-neon-cyan drop-shadow-[0_0_10px_rgba(0,243,255,0.8)]",
    underline: "bg-neon-cyan",
    border: "border-neon-cyan shadow-[0_0_15px_rgba(0,243,255,0.2)]",
    glow: "bg-neon-cyan",
};

static NEON_PURPLE: AccentTokens = AccentTokens {
    title: "text-neon-purple drop-shadow-[0_0_10px_rgba(188,19,254,0.8)]",
    underline: "bg-neon-purple",
    border: "border-neon-purple shadow-[0_0_15px_rgba(188,19,254,0.2)]",
    glow: "bg-neon-purple",
};

static NEON_GREEN: AccentTokens = AccentTokens {
    title: "text-neon-green drop-shadow-[0_0_10px_rgba(10,255,100,0.8)]",
    underline: "bg-neon-green",
    border: "border-neon-green shadow-[0_0_15px_rgba(10,255,100,0.2)]",
    glow: "bg-neon-green",
};

static NEON_PINK: AccentTokens = AccentTokens {
    title: "text-neon-pink drop-shadow-[0_0_10px_rgba(255,0,85,0.8)]",
    underline: "bg-neon-pink",
    border: "border-neon-pink shadow-[0_0_15px_rgba(255,0,85,0.2)]",
    glow: "bg-neon-pink",
};

static NEON_NEUTRAL: AccentTokens = AccentTokens {
    title: "text-white",
    underline: "bg-white",
    border: "border-white",
    glow: "bg-white",
};

static MECH_SKY: AccentTokens = AccentTokens {
    title: "text-mech-sky",
    underline: "bg-mech-sky",
    border: "border-mech-sky/40",
    glow: "bg-mech-sky",
};

static MECH_INDIGO: AccentTokens = AccentTokens {
    title: "text-mech-indigo",
    underline: "bg-mech-indigo",
    border: "border-mech-indigo/40",
    glow: "bg-mech-indigo",
};

static MECH_EMERALD: AccentTokens = AccentTokens {
    title: "text-mech-emerald",
    underline: "bg-mech-emerald",
    border: "border-mech-emerald/40",
    glow: "bg-mech-emerald",
};

static MECH_AMBER: AccentTokens = AccentTokens {
    title: "text-mech-amber",
    underline: "bg-mech-amber",
    border: "border-mech-amber/40",
    glow: "bg-mech-amber",
};

static MECH_NEUTRAL: AccentTokens = AccentTokens {
    title: "text-mech-text",
    underline: "bg-gray-400",
    border: "border-gray-200",
    glow: "bg-gray-300",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_toggle_is_identity() {
        for theme in [Theme::Neon, Theme::Mech] {
            let back = theme.toggled().toggled();
            assert_eq!(back, theme);
            assert!(std::ptr::eq(back.profile(), theme.profile()));
            assert!(std::ptr::eq(back.tokens(), theme.tokens()));
        }
    }

    #[test]
    fn test_toggle_switches_profile() {
        assert_eq!(Theme::Neon.toggled(), Theme::Mech);
        assert_eq!(Theme::Mech.toggled(), Theme::Neon);
        assert_ne!(Theme::Neon.profile(), Theme::Mech.profile());
        assert_ne!(Theme::Neon.tokens(), Theme::Mech.tokens());
    }

    #[test]
    fn test_profile_is_reference_stable() {
        let a = Theme::Neon.profile();
        let b = Theme::Neon.profile();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.hero.title, "GENERATIVE AI ENGINEER");
        assert_eq!(Theme::Mech.profile().hero.title, "FULL STACK ENGINEER");
    }

    #[test]
    fn test_tokens_stay_in_their_palette() {
        let accents = [
            None,
            Some(Accent::Cyan),
            Some(Accent::Purple),
            Some(Accent::Green),
            Some(Accent::Pink),
        ];
        for (theme, foreign) in [(Theme::Neon, "mech-"), (Theme::Mech, "neon-")] {
            let t = theme.tokens();
            for class in [t.project_accent, t.category_open, t.category_closed, t.beam, t.chip] {
                assert!(!class.contains(foreign), "{theme}: {class}");
            }
            for accent in accents {
                let a = theme.accent(accent);
                for class in [a.title, a.underline, a.border, a.glow] {
                    assert!(!class.contains(foreign), "{theme}: {class}");
                }
            }
        }
        assert_ne!(
            Theme::Neon.tokens().category_open,
            Theme::Mech.tokens().category_open
        );
    }

    #[test]
    fn test_parse_theme() {
        assert_eq!("neon".parse::<Theme>(), Ok(Theme::Neon));
        assert_eq!(" MECH ".parse::<Theme>(), Ok(Theme::Mech));
        assert_eq!(
            "retro".parse::<Theme>(),
            Err(ThemeError::UnknownTheme("retro".to_string()))
        );
        assert_eq!(Theme::Mech.to_string(), "mech");
    }

    #[test]
    fn test_accent_fallback() {
        let accent = "orange".parse::<Accent>().ok();
        assert_eq!(accent, None);
        assert_eq!(Theme::Neon.accent(accent).border, "border-white");
        assert_eq!(Theme::Mech.accent(accent).title, "text-mech-text");
        assert_eq!(
            Theme::Neon.accent(Some(Accent::Green)).underline,
            "bg-neon-green"
        );
        assert_eq!(
            Theme::Mech.accent("pink".parse().ok()).underline,
            "bg-mech-amber"
        );
    }
}
