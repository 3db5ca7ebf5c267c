/// Prefix an asset reference with the site's base path.
///
/// `base` may be empty (served from the domain root) or a subpath such as
/// `/PersonalWebsite`; trailing slashes on it and leading slashes on `path`
/// are collapsed so exactly one separator remains.
pub fn asset_path(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_base() {
        assert_eq!(asset_path("", "/hero/avatar.webp"), "/hero/avatar.webp");
        assert_eq!(asset_path("", "hero/avatar.webp"), "/hero/avatar.webp");
        assert_eq!(asset_path("/", "/favicon.ico"), "/favicon.ico");
    }

    #[test]
    fn test_subpath_base() {
        assert_eq!(
            asset_path("/PersonalWebsite", "/hero/avatar.webp"),
            "/PersonalWebsite/hero/avatar.webp"
        );
        assert_eq!(
            asset_path("/PersonalWebsite/", "resume.pdf"),
            "/PersonalWebsite/resume.pdf"
        );
    }
}
