use chrono::{DateTime, Datelike, Utc};

/// Site settings fixed at build time.
///
/// `CONTACT_FORM_ENDPOINT` is read by `build.rs`; when unset the
/// non-functional placeholder is compiled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteConfig {
    pub contact_endpoint: &'static str,
    pub build_time: &'static str,
    pub resume_path: &'static str,
    pub photo_path: &'static str,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_endpoint: env!("CONTACT_FORM_ENDPOINT"),
            build_time: env!("BUILD_TIME"),
            resume_path: "/Pravesh_Rana_Resume.pdf",
            photo_path: "/profile-photo.jpg",
        }
    }
}

impl SiteConfig {
    pub fn uses_placeholder_endpoint(&self) -> bool {
        self.contact_endpoint == env!("CONTACT_FORM_PLACEHOLDER")
    }

    /// Year shown in the footer.
    pub fn copyright_year(&self) -> i32 {
        DateTime::parse_from_rfc3339(self.build_time)
            .map(|t| t.year())
            .unwrap_or_else(|_| Utc::now().year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_year_from_build_time() {
        let config = SiteConfig {
            build_time: "2025-03-01T12:00:00+00:00",
            ..SiteConfig::default()
        };
        assert_eq!(config.copyright_year(), 2025);
    }

    #[test]
    fn test_bad_build_time_falls_back_to_now() {
        let config = SiteConfig {
            build_time: "yesterday",
            ..SiteConfig::default()
        };
        assert_eq!(config.copyright_year(), Utc::now().year());
    }

    #[test]
    fn test_placeholder_detection() {
        let config = SiteConfig {
            contact_endpoint: "https://formspree.io/f/abcd1234",
            ..SiteConfig::default()
        };
        assert!(!config.uses_placeholder_endpoint());

        let config = SiteConfig {
            contact_endpoint: env!("CONTACT_FORM_PLACEHOLDER"),
            ..SiteConfig::default()
        };
        assert!(config.uses_placeholder_endpoint());
    }

    #[test]
    fn test_endpoint_is_configured() {
        assert!(SiteConfig::default().contact_endpoint.starts_with("http"));
    }
}
