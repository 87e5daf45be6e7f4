use std::{
    borrow::Cow,
    fmt::{self, Display},
};

///
/// QueryLiteral
///
/// Text of a single value as embedded into a generated statement. Only the
/// formatter builds these, so every instance is a complete, valid literal.
///

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct QueryLiteral(Cow<'static, str>);

impl QueryLiteral {
    pub const NULL: Self = Self(Cow::Borrowed("null"));

    pub(crate) const fn raw(text: String) -> Self {
        Self(Cow::Owned(text))
    }

    pub(crate) fn quoted(text: &str) -> Self {
        Self::raw(Lit(text).to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0.into_owned()
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        self.0 == "null"
    }
}

impl Display for QueryLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for QueryLiteral {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

///
/// Lit
///
/// Single-quoted string literal; embedded quotes are doubled.
///
/// ```text
/// Lit("it's") => 'it''s'
/// ```
///

pub struct Lit<T: AsRef<str>>(pub T);

impl<T: AsRef<str>> Display for Lit<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("'")?;
        for c in self.0.as_ref().chars() {
            if c == '\'' {
                f.write_str("''")?;
            } else {
                write!(f, "{c}")?;
            }
        }
        f.write_str("'")
    }
}

/// Reverse of [`Lit`]: strip the outer quotes and undouble inner ones.
/// Returns `None` for unquoted text or a lone inner quote.
pub(crate) fn unquote(text: &str) -> Option<String> {
    let inner = text.strip_prefix('\'')?.strip_suffix('\'')?;
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        if c == '\'' && chars.next() != Some('\'') {
            return None;
        }
        out.push(c);
    }

    Some(out)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_are_doubled() {
        assert_eq!(Lit("foo").to_string(), "'foo'");
        assert_eq!(Lit("it's").to_string(), "'it''s'");
        assert_eq!(Lit("").to_string(), "''");
        assert_eq!(Lit("''").to_string(), "''''''");
    }

    #[test]
    fn unquote_reverses_lit() {
        for s in ["", "foo", "it's", "''", "a'b'c", "Ārvīds"] {
            assert_eq!(unquote(&Lit(s).to_string()).as_deref(), Some(s));
        }
    }

    #[test]
    fn unquote_rejects_broken_literals() {
        for s in ["foo", "'foo", "foo'", "'it's'", "'", "'''"] {
            assert_eq!(unquote(s), None, "{s:?}");
        }
    }

    #[test]
    fn null_literal() {
        assert_eq!(QueryLiteral::NULL.as_str(), "null");
        assert!(QueryLiteral::NULL.is_null());
        assert!(!QueryLiteral::quoted("null").is_null());
    }
}
