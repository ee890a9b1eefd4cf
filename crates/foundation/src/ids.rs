use serde::{Deserialize, Serialize};

/// Identifier of a page section, i.e. an element id addressable as a URL fragment.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() { None } else { Some(SectionId(id)) }
    }

    /// Parses `#about` style hrefs. A bare `#` or anything without a leading `#` is rejected.
    pub fn from_fragment(href: &str) -> Option<Self> {
        href.strip_prefix('#').and_then(SectionId::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn fragment(&self) -> String {
        format!("#{}", self.0)
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::SectionId;

    #[test]
    fn parses_fragment_hrefs() {
        let id = SectionId::from_fragment("#projects").unwrap();
        assert_eq!(id.as_str(), "projects");
        assert_eq!(id.fragment(), "#projects");
    }

    #[test]
    fn rejects_empty_and_external_hrefs() {
        assert_eq!(SectionId::from_fragment("#"), None);
        assert_eq!(SectionId::from_fragment(""), None);
        assert_eq!(SectionId::from_fragment("https://example.com/#x"), None);
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = SectionId::new("about").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"about\"");
    }
}
