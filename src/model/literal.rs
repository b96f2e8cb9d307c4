//! Literal and term values

use serde::Serialize;
use std::fmt;

use super::xsd;

/// An RDF literal
///
/// A literal is exactly one of three kinds: plain (no datatype, no language tag),
/// language-tagged (language tag, no datatype) or typed (datatype, no language tag).
/// The constructors are the only way to build one, so a datatype and a non-empty
/// language tag are never present together.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Literal {
    lexical: String,
    datatype: Option<String>,
    language: Option<String>,
}

impl Literal {
    /// Create a plain literal
    pub fn plain(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: None,
            language: None,
        }
    }

    /// Create a language-tagged literal; an empty tag yields a plain literal
    pub fn lang_tagged(lexical: impl Into<String>, language: impl Into<String>) -> Self {
        let language = language.into();
        Self {
            lexical: lexical.into(),
            datatype: None,
            language: (!language.is_empty()).then_some(language),
        }
    }

    /// Create a typed literal
    pub fn typed(lexical: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: Some(datatype.into()),
            language: None,
        }
    }

    /// Create an `xsd:string` literal
    pub fn string(lexical: impl Into<String>) -> Self {
        Self::typed(lexical, xsd::STRING)
    }

    /// Create an `xsd:integer` literal
    pub fn integer(value: i64) -> Self {
        Self::typed(value.to_string(), xsd::INTEGER)
    }

    /// Create an `xsd:double` literal
    pub fn double(value: f64) -> Self {
        let lexical = if value.is_nan() {
            "NaN".to_string()
        } else if value == f64::INFINITY {
            "INF".to_string()
        } else if value == f64::NEG_INFINITY {
            "-INF".to_string()
        } else {
            value.to_string()
        };
        Self::typed(lexical, xsd::DOUBLE)
    }

    /// Create an `xsd:boolean` literal
    pub fn boolean(value: bool) -> Self {
        Self::typed(if value { "true" } else { "false" }, xsd::BOOLEAN)
    }

    pub fn lexical_form(&self) -> &str {
        &self.lexical
    }

    pub fn datatype(&self) -> Option<&str> {
        self.datatype.as_deref()
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Language tag, or the empty string when there is none
    pub fn language_or_empty(&self) -> &str {
        self.language.as_deref().unwrap_or("")
    }

    pub fn is_plain(&self) -> bool {
        self.datatype.is_none() && self.language.is_none()
    }

    pub fn is_lang_tagged(&self) -> bool {
        self.language.is_some()
    }

    pub fn is_typed(&self) -> bool {
        self.datatype.is_some()
    }

    /// Check for an exact datatype match
    pub fn has_datatype(&self, datatype: &str) -> bool {
        self.datatype.as_deref() == Some(datatype)
    }

    pub fn is_string_typed(&self) -> bool {
        self.has_datatype(xsd::STRING)
    }

    /// New literal with another lexical form and this literal's datatype or language tag
    pub fn with_lexical_form(&self, lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: self.datatype.clone(),
            language: self.language.clone(),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for c in self.lexical.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                _ => write!(f, "{c}")?,
            }
        }
        f.write_str("\"")?;
        if let Some(language) = &self.language {
            write!(f, "@{language}")
        } else if let Some(datatype) = &self.datatype {
            write!(f, "^^<{datatype}>")
        } else {
            Ok(())
        }
    }
}

/// The value of an evaluated expression
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Term {
    /// IRI reference
    Iri(String),
    /// Blank node with its label
    BlankNode(String),
    /// Literal value
    Literal(Literal),
}

impl Term {
    pub fn iri(iri: impl Into<String>) -> Self {
        Self::Iri(iri.into())
    }

    pub fn blank_node(label: impl Into<String>) -> Self {
        Self::BlankNode(label.into())
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    pub fn into_literal(self) -> Option<Literal> {
        match self {
            Self::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    /// Short name of the term kind for diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Iri(_) => "IRI",
            Self::BlankNode(_) => "blank node",
            Self::Literal(_) => "literal",
        }
    }
}

impl From<Literal> for Term {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(iri) => write!(f, "<{iri}>"),
            Self::BlankNode(label) => write!(f, "_:{label}"),
            Self::Literal(literal) => literal.fmt(f),
        }
    }
}
