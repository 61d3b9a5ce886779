use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// A de Bruijn index: the number of binders between a variable and the
/// binder it refers to.
#[derive(Hash, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct Index(pub usize);

impl Index {
    pub fn new(x: usize) -> Index {
        Index(x)
    }

    pub fn to_usize(self) -> usize {
        self.0
    }

    pub fn raise(self, amount: usize) -> Index {
        Index(self.0 + amount)
    }

    pub fn is_bound(self, depth: usize) -> bool {
        self.0 < depth
    }
}

impl Display for Index {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

impl From<usize> for Index {
    fn from(x: usize) -> Index {
        Index(x)
    }
}

impl From<Index> for usize {
    fn from(index: Index) -> usize {
        index.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_basics() {
        assert_eq!(Index::new(2).raise(3), Index(5));
        assert!(Index(1).is_bound(2));
        assert!(!Index(2).is_bound(2));
        assert_eq!(Index(7).to_string(), "$7");
    }
}
