//! Static page content: the project list, skills, and profile text.
//!
//! Everything here is fixed at compile time. Rendering is a pure projection
//! of this data; nothing adds, edits, or removes entries at runtime.

use serde::Serialize;

/// Sentinel link value meaning "no destination yet".
pub const NO_LINK: &str = "#";

/// One project display record.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    /// URI, or [`NO_LINK`] when the project has no public destination.
    pub link: &'static str,
    /// Short labels, rendered left-to-right in this order.
    pub technologies: &'static [&'static str],
    /// Symbolic icon identifier, resolved through [`glyph`].
    pub icon: &'static str,
}

impl ProjectEntry {
    pub fn has_link(&self) -> bool {
        self.link != NO_LINK
    }
}

/// One skill with a proficiency level in percent.
#[derive(Debug, Clone, Copy)]
pub struct SkillEntry {
    pub name: &'static str,
    pub level: u16,
}

/// Static profile text for the non-project sections.
#[derive(Debug, Clone)]
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub about: &'static [&'static str],
    pub contact: &'static [&'static str],
}

/// The whole site's content, bundled so it can be passed around explicitly
/// instead of living in module-global state.
#[derive(Debug, Clone)]
pub struct Site {
    pub profile: Profile,
    pub projects: &'static [ProjectEntry],
    pub skills: &'static [SkillEntry],
}

impl Site {
    pub fn bundled() -> Self {
        Self {
            profile: PROFILE,
            projects: PROJECTS,
            skills: SKILLS,
        }
    }
}

/// Resolve a symbolic icon identifier to a nerd-font glyph.
/// Unknown identifiers resolve to an empty glyph; the content is trusted,
/// so a typo just shows up as a blank icon rather than an error.
pub fn glyph(icon: &str) -> &'static str {
    match icon {
        "globe" => "󰇧",
        "chart-line" => "󰈐",
        "network-wired" => "󰛳",
        "cloud" => "󰅟",
        "arrow-right" => "",
        "envelope" => "󰇮",
        "github" => "",
        "linkedin" => "󰌻",
        _ => "",
    }
}

const PROFILE: Profile = Profile {
    name: "Ethan James Walker",
    tagline: "IT professional focused on networking, data analysis, and cloud infrastructure.",
    about: &[
        "I'm an IT professional with hands-on experience across networking, \
         business data analysis, and cloud infrastructure. I enjoy taking \
         systems apart to understand how they work and putting them back \
         together better.",
        "Currently building out my skills in enterprise networking and AWS, \
         with a side interest in front-end development.",
    ],
    contact: &[
        "󰇮 ethan@example.com",
        " github.com/Ethanjames41",
        "󰌻 linkedin.com/in/ethanjameswalker",
    ],
};

const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "Personal Portfolio Website",
        description: "A fully responsive portfolio website built with HTML5, CSS3, and \
                      vanilla JavaScript. Features smooth scrolling, mobile navigation, \
                      animated sections, and modern UI/UX design principles.",
        link: "https://github.com/Ethanjames41",
        technologies: &["HTML5", "CSS3", "JavaScript"],
        icon: "globe",
    },
    ProjectEntry {
        title: "Excel Data Analysis Dashboard",
        description: "Comprehensive business intelligence project utilizing advanced Excel \
                      functions including VLOOKUP, pivot tables, conditional formatting, and \
                      dynamic charts for real-time data visualization and insights.",
        link: NO_LINK,
        technologies: &["Excel", "Data Analysis", "Visualization"],
        icon: "chart-line",
    },
    ProjectEntry {
        title: "Network Topology Design",
        description: "Designed and implemented a complete enterprise network infrastructure \
                      including routers, switches, VLANs, security protocols, and network \
                      documentation for a simulated business environment.",
        link: NO_LINK,
        technologies: &["Networking", "Cisco", "Security"],
        icon: "network-wired",
    },
    ProjectEntry {
        title: "Cloud Infrastructure Setup",
        description: "Built and deployed cloud-based infrastructure using AWS services \
                      including EC2 instances, S3 storage, and basic networking \
                      configurations for scalable web hosting.",
        link: NO_LINK,
        technologies: &["AWS", "Cloud Computing", "Linux"],
        icon: "cloud",
    },
];

const SKILLS: &[SkillEntry] = &[
    SkillEntry { name: "Networking", level: 85 },
    SkillEntry { name: "Data Analysis", level: 90 },
    SkillEntry { name: "AWS", level: 70 },
    SkillEntry { name: "Linux", level: 75 },
    SkillEntry { name: "HTML / CSS", level: 80 },
    SkillEntry { name: "JavaScript", level: 65 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_is_well_formed() {
        let site = Site::bundled();
        assert!(!site.projects.is_empty());
        for project in site.projects {
            assert!(!project.title.is_empty());
            assert!(!project.technologies.is_empty());
        }
        for skill in site.skills {
            assert!(skill.level <= 100);
        }
    }

    #[test]
    fn known_icons_resolve_to_glyphs() {
        for project in PROJECTS {
            assert!(!glyph(project.icon).is_empty(), "no glyph for {}", project.icon);
        }
    }

    #[test]
    fn unknown_icon_resolves_to_empty_glyph() {
        assert_eq!(glyph("fa-does-not-exist"), "");
    }

    #[test]
    fn placeholder_link_is_detected() {
        assert!(PROJECTS[0].has_link());
        assert!(!PROJECTS[1].has_link());
    }
}
