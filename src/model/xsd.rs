//! XML Schema datatype IRIs and their classification

/// XML Schema namespace
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema#";

pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
pub const FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";
pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";

pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
pub const LONG: &str = "http://www.w3.org/2001/XMLSchema#long";
pub const INT: &str = "http://www.w3.org/2001/XMLSchema#int";
pub const SHORT: &str = "http://www.w3.org/2001/XMLSchema#short";
pub const BYTE: &str = "http://www.w3.org/2001/XMLSchema#byte";
pub const NON_NEGATIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#nonNegativeInteger";
pub const NON_POSITIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#nonPositiveInteger";
pub const NEGATIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#negativeInteger";
pub const POSITIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#positiveInteger";
pub const UNSIGNED_LONG: &str = "http://www.w3.org/2001/XMLSchema#unsignedLong";
pub const UNSIGNED_INT: &str = "http://www.w3.org/2001/XMLSchema#unsignedInt";
pub const UNSIGNED_SHORT: &str = "http://www.w3.org/2001/XMLSchema#unsignedShort";
pub const UNSIGNED_BYTE: &str = "http://www.w3.org/2001/XMLSchema#unsignedByte";

/// Numeric type promotion class of a datatype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    /// xsd:integer and every type derived from it
    Integer,
    Decimal,
    Float,
    Double,
}

/// Classify a datatype IRI, `None` when it is not numeric
pub fn numeric_kind(datatype: &str) -> Option<NumericKind> {
    match datatype {
        INTEGER | LONG | INT | SHORT | BYTE | NON_NEGATIVE_INTEGER | NON_POSITIVE_INTEGER
        | NEGATIVE_INTEGER | POSITIVE_INTEGER | UNSIGNED_LONG | UNSIGNED_INT | UNSIGNED_SHORT
        | UNSIGNED_BYTE => Some(NumericKind::Integer),
        DECIMAL => Some(NumericKind::Decimal),
        FLOAT => Some(NumericKind::Float),
        DOUBLE => Some(NumericKind::Double),
        _ => None,
    }
}

/// Check whether a datatype IRI names a numeric type
pub fn is_numeric(datatype: &str) -> bool {
    numeric_kind(datatype).is_some()
}
