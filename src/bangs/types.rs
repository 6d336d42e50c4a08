/// A search shortcut: `!trigger` selects the engine, the URL template
/// receives the percent-encoded remainder of the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bang {
    /// Unique, lowercase, whitespace-free token typed after `!`.
    pub trigger: &'static str,
    /// Display name shown in suggestions.
    pub name: &'static str,
    /// Bare host used when the query carries no search terms.
    pub domain: &'static str,
    /// Target URL with a `{{{s}}}` placeholder for the encoded terms.
    pub url_template: &'static str,
    pub description: &'static str,
}

impl Bang {
    /// `https://<domain>`, the target when no search terms remain.
    pub fn home_url(&self) -> String {
        format!("https://{}", self.domain)
    }
}
