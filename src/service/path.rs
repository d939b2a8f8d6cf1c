use std::fmt;

/// Locator for a field inside a route document, rendered in the dotted
/// and bracketed notation callers expect, e.g.
/// `spec.rules[0].matches[1].headers`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(String);

impl FieldPath {
    pub fn new(root: impl Into<String>) -> Self {
        Self(root.into())
    }

    pub fn child(&self, name: &str) -> Self {
        Self(format!("{}.{name}", self.0))
    }

    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{index}]", self.0))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::FieldPath;

    #[test]
    fn renders_dotted_and_bracketed_segments() {
        let path = FieldPath::new("spec")
            .child("rules")
            .index(0)
            .child("matches")
            .index(2)
            .child("headers");
        assert_eq!(path.to_string(), "spec.rules[0].matches[2].headers");
    }

    #[test]
    fn index_directly_after_index() {
        let path = FieldPath::new("spec").child("rules").index(1).index(3);
        assert_eq!(path.to_string(), "spec.rules[1][3]");
    }
}
