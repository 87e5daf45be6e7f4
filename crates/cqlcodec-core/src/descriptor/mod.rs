//! CQL type definitions as they arrive from schema metadata
//! (`int`, `frozen<map<text, list<uuid>>>`, `"MyType"`).
//!
//! Only scalar descriptors are convertible; the rest are recognized so the
//! codec can reject them precisely.

use crate::error::CodecError;
use cqlcodec_primitives::ColumnType;
use std::fmt::{self, Display};

///
/// TypeDescriptor
///

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum TypeDescriptor {
    Scalar(ColumnType),
    Counter,
    List(Box<Self>),
    Set(Box<Self>),
    Map(Box<Self>, Box<Self>),
    Tuple(Vec<Self>),
    UserDefined(String),
}

impl TypeDescriptor {
    /// Parse a CQL type definition. `frozen<T>` is unwrapped to `T`.
    pub fn parse(definition: &str) -> Result<Self, CodecError> {
        let mut parser = Parser {
            definition,
            rest: definition,
        };
        let descriptor = parser.parse_type()?;
        parser.skip_whitespace();
        if !parser.rest.is_empty() {
            return Err(parser.error(format!("unexpected trailing '{}'", parser.rest)));
        }

        Ok(descriptor)
    }

    #[must_use]
    pub const fn as_scalar(&self) -> Option<ColumnType> {
        match self {
            Self::Scalar(ty) => Some(*ty),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::List(_) | Self::Set(_) | Self::Map(..))
    }

    /// Render back to CQL definition text.
    #[must_use]
    pub fn cql_definition(&self) -> String {
        self.to_string()
    }
}

impl From<ColumnType> for TypeDescriptor {
    fn from(ty: ColumnType) -> Self {
        Self::Scalar(ty)
    }
}

impl Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(ty) => write!(f, "{ty}"),
            Self::Counter => f.write_str("counter"),
            Self::List(elem) => write!(f, "list<{elem}>"),
            Self::Set(elem) => write!(f, "set<{elem}>"),
            Self::Map(key, value) => write!(f, "map<{key}, {value}>"),
            Self::Tuple(elems) => {
                f.write_str("tuple<")?;
                for (i, elem) in elems.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{elem}")?;
                }
                f.write_str(">")
            }
            Self::UserDefined(name) if is_plain_identifier(name) => f.write_str(name),
            Self::UserDefined(name) => write!(f, "\"{}\"", name.replace('"', "\"\"")),
        }
    }
}

const RESERVED: [&str; 6] = ["counter", "frozen", "list", "map", "set", "tuple"];

// Names that would read back as the same user type without quotes.
fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let lexical = chars
        .next()
        .is_some_and(|c| c.is_ascii_lowercase() || c == '_')
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '.');

    lexical && !RESERVED.contains(&name) && ColumnType::from_cql_name(name).is_none()
}

///
/// Parser
/// recursive descent over the definition text
///

struct Parser<'a> {
    definition: &'a str,
    rest: &'a str,
}

impl Parser<'_> {
    fn error(&self, cause: impl Display) -> CodecError {
        CodecError::definition(self.definition, cause)
    }

    fn skip_whitespace(&mut self) {
        self.rest = self.rest.trim_start();
    }

    fn eat(&mut self, c: char) -> bool {
        self.skip_whitespace();
        match self.rest.strip_prefix(c) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    fn expect(&mut self, c: char) -> Result<(), CodecError> {
        if self.eat(c) {
            Ok(())
        } else {
            Err(self.error(format!("expected '{c}'")))
        }
    }

    fn parse_type(&mut self) -> Result<TypeDescriptor, CodecError> {
        self.skip_whitespace();
        if self.rest.starts_with('"') {
            return self.parse_quoted().map(TypeDescriptor::UserDefined);
        }

        let name = self.parse_name()?;
        if !self.eat('<') {
            return Ok(Self::simple(&name));
        }

        let descriptor = match name.as_str() {
            "frozen" => self.parse_type()?,
            "list" => TypeDescriptor::List(Box::new(self.parse_type()?)),
            "set" => TypeDescriptor::Set(Box::new(self.parse_type()?)),
            "map" => {
                let key = self.parse_type()?;
                self.expect(',')?;
                TypeDescriptor::Map(Box::new(key), Box::new(self.parse_type()?))
            }
            "tuple" => {
                let mut elems = vec![self.parse_type()?];
                while self.eat(',') {
                    elems.push(self.parse_type()?);
                }
                TypeDescriptor::Tuple(elems)
            }
            other => return Err(self.error(format!("'{other}' takes no type parameters"))),
        };
        self.expect('>')?;

        Ok(descriptor)
    }

    // Unquoted names are case-insensitive; unknown ones name a user type.
    fn simple(name: &str) -> TypeDescriptor {
        if name == "counter" {
            return TypeDescriptor::Counter;
        }

        ColumnType::from_cql_name(name)
            .map_or_else(|| TypeDescriptor::UserDefined(name.to_string()), TypeDescriptor::Scalar)
    }

    fn parse_name(&mut self) -> Result<String, CodecError> {
        let end = self
            .rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '.'))
            .unwrap_or(self.rest.len());
        if end == 0 {
            return Err(match self.rest.chars().next() {
                Some(c) => self.error(format!("unexpected '{c}'")),
                None => self.error("missing type name"),
            });
        }

        let (name, rest) = self.rest.split_at(end);
        self.rest = rest;

        Ok(name.to_ascii_lowercase())
    }

    // `"name"` with `""` standing for an embedded quote; case is kept.
    fn parse_quoted(&mut self) -> Result<String, CodecError> {
        let mut chars = self.rest.char_indices().skip(1);
        let mut name = String::new();

        while let Some((i, c)) = chars.next() {
            if c != '"' {
                name.push(c);
                continue;
            }
            if self.rest[i + 1..].starts_with('"') {
                chars.next();
                name.push('"');
                continue;
            }
            if name.is_empty() {
                return Err(self.error("empty quoted name"));
            }
            self.rest = &self.rest[i + 1..];
            return Ok(name);
        }

        Err(self.error("unterminated quoted name"))
    }
}

///
/// TESTS
///
