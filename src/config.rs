use crate::{paths::asset_path, sections::Section};

/// Settings baked in at compile time so the server and the WASM bundle agree.
#[derive(Debug, Clone, Copy)]
pub struct SiteConfig {
    /// Prefix for every asset reference. Empty when served from the domain root.
    pub base_path: &'static str,
    pub contact_endpoint: &'static str,
    pub owner: &'static str,
    pub headline: &'static str,
    pub description: &'static str,
    /// Canonical origin used in social previews.
    pub site_url: &'static str,
    pub site_name: &'static str,
}

pub const SITE: SiteConfig = SiteConfig {
    base_path: match option_env!("SITE_BASE_PATH") {
        Some(path) => path,
        None => "",
    },
    contact_endpoint: match option_env!("CONTACT_FORM_ENDPOINT") {
        Some(url) => url,
        None => "https://formspree.io/f/mldqkplw",
    },
    owner: "Calvin Kattathara",
    headline: "Full-Stack Developer & Data Engineer",
    description: "Full-Stack Developer & Data Engineer specializing in scalable systems, AI automation, and modern web technologies.",
    site_url: "https://calvinkattathara.com",
    site_name: "Calvin Kattathara Portfolio",
};

impl SiteConfig {
    pub fn asset(&self, path: &str) -> String {
        asset_path(self.base_path, path)
    }

    /// Router base, the configured prefix without a trailing slash.
    pub fn router_base(&self) -> &'static str {
        self.base_path.trim_end_matches('/')
    }

    /// The stylesheet cargo-leptos emits under `site-pkg-dir`.
    pub fn stylesheet(&self) -> String {
        self.asset("/pkg/portfolio-site.css")
    }

    /// Absolute link to a landmark on the home page.
    pub fn home_anchor(&self, section: Section) -> String {
        self.asset(&format!("/{}", section.href()))
    }

    /// Title used for link previews, `owner | headline`.
    pub fn preview_title(&self) -> String {
        format!("{} | {}", self.owner, self.headline)
    }

    pub fn initials(&self) -> String {
        self.owner
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(SITE.initials(), "CK");
    }

    #[test]
    fn test_preview_title() {
        assert_eq!(
            SITE.preview_title(),
            "Calvin Kattathara | Full-Stack Developer & Data Engineer"
        );
    }

    #[test]
    fn test_asset_uses_base_path() {
        let site = SiteConfig {
            base_path: "/PersonalWebsite",
            ..SITE
        };
        assert_eq!(site.asset("/og.png"), "/PersonalWebsite/og.png");
    }

    #[test]
    fn test_links_stay_under_base_path() {
        let site = SiteConfig {
            base_path: "/PersonalWebsite/",
            ..SITE
        };
        assert_eq!(site.router_base(), "/PersonalWebsite");
        assert_eq!(site.stylesheet(), "/PersonalWebsite/pkg/portfolio-site.css");
        assert_eq!(
            site.home_anchor(Section::Projects),
            "/PersonalWebsite/#projects"
        );

        let root = SiteConfig {
            base_path: "",
            ..SITE
        };
        assert_eq!(root.router_base(), "");
        assert_eq!(root.stylesheet(), "/pkg/portfolio-site.css");
        assert_eq!(root.home_anchor(Section::Projects), "/#projects");
    }
}
