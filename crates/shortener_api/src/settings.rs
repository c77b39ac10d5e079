#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    /// Backend base URL, without trailing slash. Empty means same origin.
    /// Defaults to the `SHORTENER_API_HOST` value seen at compile time.
    pub host: String,
    /// Page origin used to qualify short codes, e.g. `https://sho.rt`.
    pub origin: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self::new(option_env!("SHORTENER_API_HOST").unwrap_or_default(), "")
    }
}

impl ApiSettings {
    pub fn new(host: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            host: trim_slashes(host.into()),
            origin: trim_slashes(origin.into()),
        }
    }

    /// Settings for a page at `origin`. A non-blank `page_host` (the host
    /// page's override) wins over `fallback_host`; when both are blank,
    /// [`ApiSettings::endpoint`] targets `origin`.
    pub fn resolve(
        page_host: Option<&str>,
        fallback_host: &str,
        origin: impl Into<String>,
    ) -> Self {
        let host = match page_host {
            Some(host) if !host.trim().is_empty() => host,
            _ => fallback_host,
        };
        Self::new(host, origin)
    }

    pub fn endpoint(&self, path: &str) -> String {
        let base = if self.host.is_empty() {
            &self.origin
        } else {
            &self.host
        };
        format!("{}/{}", base, path.trim_start_matches('/'))
    }

    /// `<origin>/<short_code>`.
    pub fn short_url(&self, short_code: &str) -> String {
        format!("{}/{}", self.origin, short_code)
    }
}

fn trim_slashes(value: String) -> String {
    value.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let settings = ApiSettings::new(" https://api.example.com// ", "https://sho.rt/");
        assert_eq!(settings.host, "https://api.example.com");
        assert_eq!(settings.endpoint("/short_it"), "https://api.example.com/short_it");
        assert_eq!(settings.short_url("abc123"), "https://sho.rt/abc123");
    }

    #[test]
    fn empty_host_falls_back_to_origin() {
        let settings = ApiSettings::new("", "https://sho.rt");
        assert_eq!(settings.endpoint("records"), "https://sho.rt/records");
    }

    #[test]
    fn page_host_overrides_fallback_host() {
        let settings = ApiSettings::resolve(
            Some("https://api.example.com/"),
            "https://compiled.example.com",
            "https://sho.rt",
        );
        assert_eq!(settings.host, "https://api.example.com");
        assert_eq!(settings.endpoint("short_it"), "https://api.example.com/short_it");
        assert_eq!(settings.short_url("abc123"), "https://sho.rt/abc123");
    }

    #[test]
    fn blank_page_host_uses_fallback_host() {
        for page_host in [None, Some(""), Some("   ")] {
            let settings =
                ApiSettings::resolve(page_host, "https://compiled.example.com", "https://sho.rt");
            assert_eq!(
                settings.endpoint("records"),
                "https://compiled.example.com/records",
                "page_host={page_host:?}"
            );
        }
    }

    #[test]
    fn no_host_anywhere_targets_page_origin() {
        let settings = ApiSettings::resolve(Some(" "), "", "https://sho.rt/");
        assert_eq!(settings.host, "");
        assert_eq!(settings.endpoint("recover_it"), "https://sho.rt/recover_it");
    }
}
