//! Page sections, their anchors, and layout helpers shared by the renderers.

use crate::reveal::Animation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Experience,
    Projects,
    Education,
    Skills,
    Extracurricular,
    Contact,
}

impl Section {
    /// Sections in the order they appear on the page.
    pub const PAGE_ORDER: [Section; 8] = [
        Self::Home,
        Self::About,
        Self::Experience,
        Self::Projects,
        Self::Education,
        Self::Skills,
        Self::Extracurricular,
        Self::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Education => "education",
            Self::Skills => "skills",
            Self::Extracurricular => "extracurricular",
            Self::Contact => "contact",
        }
    }

    pub fn anchor(self) -> String {
        format!("#{}", self.id())
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About Me",
            Self::Experience => "Work Experience",
            Self::Projects => "Projects",
            Self::Education => "Education",
            Self::Skills => "Skills & Certifications",
            Self::Extracurricular => "Leadership & Initiatives",
            Self::Contact => "Get In Touch",
        }
    }

    /// Label in the header navigation, if the section is listed there.
    pub fn nav_label(self) -> Option<&'static str> {
        match self {
            Self::About => Some("About"),
            Self::Experience => Some("Experience"),
            Self::Projects => Some("Projects"),
            Self::Education => Some("Education"),
            Self::Skills => Some("Skills"),
            Self::Contact => Some("Contact"),
            Self::Home | Self::Extracurricular => None,
        }
    }

    pub fn nav_items() -> impl Iterator<Item = (Section, &'static str)> {
        Self::PAGE_ORDER
            .into_iter()
            .filter_map(|s| s.nav_label().map(|label| (s, label)))
    }
}

/// Which side of the experience timeline an entry sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineSide {
    Left,
    Right,
}

impl TimelineSide {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Left
        } else {
            Self::Right
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Left => "timeline-item left",
            Self::Right => "timeline-item right",
        }
    }

    pub fn animation(self) -> Animation {
        match self {
            Self::Left => Animation::SlideInLeft,
            Self::Right => Animation::SlideInRight,
        }
    }
}
