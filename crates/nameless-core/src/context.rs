use crate::common::Index;

/// The display name given to a binder whose variable never occurs.
pub const PLACEHOLDER: &str = "_";

/// The ordered list of display names currently in scope.
///
/// Names are stored outermost first, so the name for index 0 is the last
/// one pushed. The context is used only for printing; it carries no
/// evaluation semantics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Context {
    names: Vec<String>,
}

impl Context {
    pub fn new() -> Context {
        Context { names: Vec::new() }
    }

    /// Build a context from names given outermost first.
    pub fn from_names<I, S>(names: I) -> Context
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Context {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn depth(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn push(&mut self, name: impl Into<String>) {
        self.names.push(name.into());
    }

    pub fn truncate(&mut self, depth: usize) {
        self.names.truncate(depth);
    }

    /// The display name for a de Bruijn index, if the context is deep
    /// enough.
    pub fn lookup(&self, index: Index) -> Option<&str> {
        let slot = self.names.len().checked_sub(index.to_usize() + 1)?;
        self.names.get(slot).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// A name based on `hint` that collides neither with the context nor
    /// with `taken`, built by appending primes until it is free.
    pub fn freshen(&self, hint: &str, taken: &[String]) -> String {
        let mut candidate = if hint.is_empty() {
            String::from("x")
        } else {
            hint.to_string()
        };
        while self.contains(&candidate) || taken.iter().any(|n| *n == candidate) {
            candidate.push('\'');
        }
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_innermost_first() {
        let ctx = Context::from_names(["outer", "inner"]);
        assert_eq!(ctx.lookup(Index(0)), Some("inner"));
        assert_eq!(ctx.lookup(Index(1)), Some("outer"));
        assert_eq!(ctx.lookup(Index(2)), None);
    }

    #[test]
    fn test_push_and_truncate() {
        let mut ctx = Context::from_names(["a"]);
        ctx.push("b");
        assert_eq!(ctx.lookup(Index(0)), Some("b"));
        ctx.truncate(1);
        assert_eq!(ctx.lookup(Index(0)), Some("a"));
        assert_eq!(ctx.depth(), 1);
    }

    #[test]
    fn test_freshen_appends_primes() {
        let ctx = Context::from_names(["x", "x'"]);
        assert_eq!(ctx.freshen("x", &[]), "x''");
        assert_eq!(ctx.freshen("y", &[]), "y");
    }

    #[test]
    fn test_freshen_respects_taken_names() {
        let ctx = Context::new();
        let taken = vec![String::from("x")];
        assert_eq!(ctx.freshen("x", &taken), "x'");
    }

    #[test]
    fn test_freshen_empty_hint() {
        let ctx = Context::from_names(["x"]);
        assert_eq!(ctx.freshen("", &[]), "x'");
    }
}
