use std::f64::consts::{FRAC_PI_2, TAU};

use crate::profile::SkillEntry;

/// Groups skills by category. Categories appear in the order they are first
/// seen, and skills keep their relative order inside each group.
pub fn group_by_category(skills: &[SkillEntry]) -> Vec<(&str, Vec<&SkillEntry>)> {
    let mut groups: Vec<(&str, Vec<&SkillEntry>)> = Vec::new();
    for skill in skills {
        match groups.iter_mut().find(|(c, _)| *c == skill.category) {
            Some((_, entries)) => entries.push(skill),
            None => groups.push((skill.category.as_str(), vec![skill])),
        }
    }
    groups
}

/// Level as a bar width percentage, clamped to `0..=100`.
pub fn level_percent(level: i32) -> u8 {
    level.clamp(0, 100) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryIcon {
    Code,
    Server,
    Database,
    Cloud,
    Cpu,
    Terminal,
    Layers,
}

impl CategoryIcon {
    pub fn for_category(category: &str) -> Self {
        let lower = category.to_lowercase();
        let has = |needles: &[&str]| needles.iter().any(|n| lower.contains(n));
        if has(&["frontend", "web"]) {
            Self::Code
        } else if has(&["backend", "server"]) {
            Self::Server
        } else if has(&["data", "db"]) {
            Self::Database
        } else if has(&["cloud", "infra"]) {
            Self::Cloud
        } else if has(&["ai", "ml"]) {
            Self::Cpu
        } else if has(&["ops", "devops"]) {
            Self::Terminal
        } else {
            Self::Layers
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Code => "extra-code",
            Self::Server => "extra-server",
            Self::Database => "extra-database",
            Self::Cloud => "extra-cloud",
            Self::Cpu => "extra-cpu",
            Self::Terminal => "extra-terminal",
            Self::Layers => "extra-layers",
        }
    }
}

fn axis_angle(index: usize, count: usize) -> f64 {
    -FRAC_PI_2 + index as f64 * TAU / count as f64
}

/// Vertices of a radar polygon. Axis 0 points straight up and the rest
/// follow clockwise; each vertex sits `level`% of the way out along its axis.
pub fn radar_points(levels: &[i32], center: (f64, f64), radius: f64) -> Vec<(f64, f64)> {
    let count = levels.len();
    levels
        .iter()
        .enumerate()
        .map(|(i, &level)| {
            let angle = axis_angle(i, count);
            let distance = radius * f64::from(level_percent(level)) / 100.0;
            (
                center.0 + distance * angle.cos(),
                center.1 + distance * angle.sin(),
            )
        })
        .collect()
}

/// Points of a regular polygon at `radius`, used for grid rings and axes.
pub fn ring_points(count: usize, center: (f64, f64), radius: f64) -> Vec<(f64, f64)> {
    (0..count)
        .map(|i| {
            let angle = axis_angle(i, count);
            (
                center.0 + radius * angle.cos(),
                center.1 + radius * angle.sin(),
            )
        })
        .collect()
}

/// SVG `points` attribute for a polygon.
pub fn svg_points(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.2},{y:.2}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// SVG `text-anchor` for a label placed at `x` around `center_x`.
pub fn label_anchor(x: f64, center_x: f64) -> &'static str {
    let dx = x - center_x;
    if dx.abs() < 1.0 {
        "middle"
    } else if dx > 0.0 {
        "start"
    } else {
        "end"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str, level: i32, category: &str) -> SkillEntry {
        SkillEntry {
            name: name.to_string(),
            level,
            category: category.to_string(),
        }
    }

    #[test]
    fn test_group_by_category() {
        let skills = vec![
            skill("LLMs", 95, "AI"),
            skill("Python", 98, "Languages"),
            skill("Vision", 85, "AI"),
            skill("Rust", 70, "Languages"),
            skill("K8s", 60, "Ops"),
        ];
        let groups = group_by_category(&skills);
        let summary = groups
            .iter()
            .map(|(c, entries)| {
                (
                    *c,
                    entries.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
                )
            })
            .collect::<Vec<_>>();
        assert_eq!(
            summary,
            vec![
                ("AI", vec!["LLMs", "Vision"]),
                ("Languages", vec!["Python", "Rust"]),
                ("Ops", vec!["K8s"]),
            ]
        );
        assert!(group_by_category(&[]).is_empty());
    }

    #[test]
    fn test_category_icons() {
        assert_eq!(CategoryIcon::for_category("Frontend"), CategoryIcon::Code);
        assert_eq!(CategoryIcon::for_category("Web"), CategoryIcon::Code);
        assert_eq!(CategoryIcon::for_category("Backend"), CategoryIcon::Server);
        assert_eq!(CategoryIcon::for_category("Data"), CategoryIcon::Database);
        assert_eq!(CategoryIcon::for_category("Infrastructure"), CategoryIcon::Cloud);
        assert_eq!(CategoryIcon::for_category("AI"), CategoryIcon::Cpu);
        assert_eq!(CategoryIcon::for_category("Ops"), CategoryIcon::Terminal);
        assert_eq!(CategoryIcon::for_category("Architecture"), CategoryIcon::Layers);
        assert_eq!(CategoryIcon::for_category("Frameworks"), CategoryIcon::Layers);
        // earlier rules take precedence
        assert_eq!(CategoryIcon::for_category("Web Servers"), CategoryIcon::Code);
    }

    #[test]
    fn test_radar_points() {
        let points = radar_points(&[100, 100, 100, 100], (100.0, 100.0), 50.0);
        let expected = [(100.0, 50.0), (150.0, 100.0), (100.0, 150.0), (50.0, 100.0)];
        for ((x, y), (ex, ey)) in points.iter().zip(expected) {
            assert!((x - ex).abs() < 1e-9, "{x} != {ex}");
            assert!((y - ey).abs() < 1e-9, "{y} != {ey}");
        }
    }

    #[test]
    fn test_radar_scales_and_clamps_levels() {
        let points = radar_points(&[50, 0, 250], (0.0, 0.0), 80.0);
        assert!((points[0].1 + 40.0).abs() < 1e-9);
        assert!(points[1].0.abs() < 1e-9 && points[1].1.abs() < 1e-9);
        let dist = (points[2].0.powi(2) + points[2].1.powi(2)).sqrt();
        assert!((dist - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_level_percent_clamps() {
        assert_eq!(level_percent(-20), 0);
        assert_eq!(level_percent(0), 0);
        assert_eq!(level_percent(85), 85);
        assert_eq!(level_percent(100), 100);
        assert_eq!(level_percent(1_000), 100);
        let points = radar_points(&[-40], (10.0, 10.0), 50.0);
        assert_eq!(points, vec![(10.0, 10.0)]);
    }

    #[test]
    fn test_svg_helpers() {
        assert_eq!(svg_points(&[(1.0, 2.5), (3.333, 4.0)]), "1.00,2.50 3.33,4.00");
        assert_eq!(label_anchor(100.2, 100.0), "middle");
        assert_eq!(label_anchor(150.0, 100.0), "start");
        assert_eq!(label_anchor(40.0, 100.0), "end");
        assert_eq!(ring_points(6, (0.0, 0.0), 10.0).len(), 6);
    }
}
