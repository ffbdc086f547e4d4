/// Fixed list of disallowed domain patterns.
///
/// Matching is substring-based on purpose: any domain merely containing
/// one of these tokens is rejected, which also catches tricks like
/// `localhost.evil.com` or `foo.onion.example`.
pub const DEFAULT_BLOCKED_PATTERNS: [&str; 4] = ["localhost", "127.0.0.1", "::1", ".onion"];

#[derive(Debug, Clone)]
pub struct Blocklist {
    patterns: Vec<String>,
}

impl Blocklist {
    pub fn new(patterns: Vec<String>) -> Self {
        Self { patterns }
    }

    pub fn is_blocked(&self, domain: &str) -> bool {
        self.patterns.iter().any(|p| domain.contains(p.as_str()))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for Blocklist {
    fn default() -> Self {
        Self::new(
            DEFAULT_BLOCKED_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
        )
    }
}
