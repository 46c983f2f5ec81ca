//! Current-location tracking for marking internal links active.

/// The route the host is currently showing.
///
/// An internal link is active when its destination names the same path:
/// query strings, fragments and a single trailing slash are ignored, so
/// `/docs/` and `/docs#install` both match `/docs`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    path: String,
}

impl Location {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether an internal destination points at this location.
    pub fn is_active(&self, to: &str) -> bool {
        normalize(to) == normalize(&self.path)
    }
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match() {
        let here = Location::new("/docs");
        assert!(here.is_active("/docs"));
        assert!(!here.is_active("/blog"));
        assert!(!here.is_active("/docs/install"));
    }

    #[test]
    fn trailing_slash_query_and_fragment_are_ignored() {
        let here = Location::new("/docs/");
        assert!(here.is_active("/docs"));
        assert!(here.is_active("/docs?tab=api"));
        assert!(here.is_active("/docs/#install"));
    }

    #[test]
    fn root_keeps_its_slash() {
        let here = Location::new("/");
        assert!(here.is_active("/"));
        assert!(!here.is_active(""));
    }

    #[test]
    fn default_is_empty() {
        assert_eq!(Location::default().path(), "");
    }
}
