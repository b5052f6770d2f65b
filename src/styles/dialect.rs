use serde::{Deserialize, Serialize};
use std::fmt;

/// Stylesheet source syntaxes the generator can target.
///
/// Both share the same rule structure and differ only in how variables are
/// declared and referenced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Less,
    Scss,
}

impl Dialect {
    pub const ALL: [Dialect; 2] = [Dialect::Less, Dialect::Scss];

    /// Character that introduces a variable name.
    pub fn sigil(&self) -> char {
        match self {
            Dialect::Less => '@',
            Dialect::Scss => '$',
        }
    }

    /// Prefix put in front of every composite id to form a variable name.
    pub fn variable_prefix(&self) -> String {
        format!("{}mta-", self.sigil())
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Dialect::Less => "less",
            Dialect::Scss => "scss",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes() {
        assert_eq!(Dialect::Less.variable_prefix(), "@mta-");
        assert_eq!(Dialect::Scss.variable_prefix(), "$mta-");
        assert_eq!(Dialect::default(), Dialect::Less);
    }
}
