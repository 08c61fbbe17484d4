//! Error types for CityGML feature extraction
//!
//! All errors carry an error code for categorization. Value conversion errors
//! additionally carry the feature and attribute they were raised for, so a
//! failed parse of a large document can be traced back to the offending element.
//!
//! # Error Codes
//!
//! Error codes follow the pattern: `E<category><number>`
//!
//! Categories:
//! - **E1xxx**: I/O errors
//! - **E2xxx**: XML parsing and namespace errors
//! - **E3xxx**: Value conversion errors
//! - **E4xxx**: Unsupported constructs
//! - **E5xxx**: Rule catalogue consistency errors
//!
//! ## Common Error Codes
//!
//! - `E1001`: I/O error reading a file
//! - `E2001`: XML parsing error in a CityGML document
//! - `E2002`: XML parsing error in a code list dictionary
//! - `E2003`: Invalid XML structure
//! - `E2004`: Unknown namespace prefix
//! - `E2005`: Unknown namespace URI
//! - `E3002`: Value conversion error (number, date)
//! - `E4001`: Unsupported construct
//! - `E4002`: Unsupported geometry path
//! - `E4003`: Unsupported attribute datatype
//! - `E5001`: Duplicate rule identifier
//! - `E5002`: Duplicate tag spelling
//! - `E5003`: Inconsistent rule catalogue

use std::io;
use thiserror::Error;

/// Result type for CityGML operations
pub type Result<T> = std::result::Result<T, Error>;

/// Location of a value conversion failure
///
/// Identifies the feature element and attribute being read when a literal
/// could not be converted. All fields are optional because failures can occur
/// before the feature identifier is known.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorContext {
    /// Prefixed tag of the feature element (e.g. `bldg:Building`)
    pub feature_type: Option<String>,

    /// `gml:id` of the feature element
    pub feature_id: Option<String>,

    /// Name of the attribute being extracted
    pub attribute: Option<String>,

    /// A helpful hint for resolving the error
    pub hint: Option<String>,
}

impl ErrorContext {
    /// Create a new empty error context
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an error context for a feature element
    pub fn feature(feature_type: impl Into<String>, feature_id: Option<&str>) -> Self {
        Self {
            feature_type: Some(feature_type.into()),
            feature_id: feature_id.map(str::to_owned),
            attribute: None,
            hint: None,
        }
    }

    /// Set the attribute name
    pub fn attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }

    /// Set the hint
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();

        match (&self.feature_type, &self.feature_id) {
            (Some(ty), Some(id)) => parts.push(format!("Feature: {} (gml:id={})", ty, id)),
            (Some(ty), None) => parts.push(format!("Feature: {}", ty)),
            (None, Some(id)) => parts.push(format!("Feature: gml:id={}", id)),
            (None, None) => {}
        }

        if let Some(ref attribute) = self.attribute {
            parts.push(format!("Attribute: {}", attribute));
        }

        if let Some(ref hint) = self.hint {
            parts.push(format!("Hint: {}", hint));
        }

        if !parts.is_empty() {
            write!(f, "\n{}", parts.join("\n"))
        } else {
            Ok(())
        }
    }
}

/// Errors that can occur when extracting features from CityGML documents
#[derive(Error, Debug)]
pub enum Error {
    /// IO error occurred while reading a document
    ///
    /// **Error Code**: E1001
    ///
    /// **Common Causes**:
    /// - File not found
    /// - Insufficient permissions
    /// - Document is not valid UTF-8
    #[error("[E1001] I/O error: {0}")]
    Io(#[from] io::Error),

    /// XML parsing error in the CityGML document
    ///
    /// **Error Code**: E2001
    ///
    /// **Common Causes**:
    /// - Malformed XML syntax
    /// - Undeclared namespace prefix
    /// - Truncated file
    #[error("[E2001] XML parsing error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// XML parsing error in a code list dictionary
    ///
    /// **Error Code**: E2002
    ///
    /// Only surfaced by [`crate::codelist::parse_dictionary`]; the code list
    /// store itself treats unreadable dictionaries as empty.
    #[error("[E2002] Code list parsing error: {0}")]
    CodelistXml(#[from] quick_xml::Error),

    /// Invalid XML structure
    ///
    /// **Error Code**: E2003
    ///
    /// **Common Causes**:
    /// - Required child element missing (e.g. a ring without coordinates)
    /// - Attribute value in an unexpected form
    #[error("[E2003] Invalid XML structure: {0}")]
    InvalidXml(String),

    /// A prefix has no namespace URI in the active binding
    ///
    /// **Error Code**: E2004
    ///
    /// **Suggestions**:
    /// - Check the prefix spelling in the rule path
    /// - Version-ambiguous vocabularies are spelled `uro:` / `urf:` in rules
    #[error("[E2004] Unknown namespace prefix: {0}")]
    UnknownPrefix(String),

    /// A namespace URI has no prefix in the active binding
    ///
    /// **Error Code**: E2005
    #[error("[E2005] Unknown namespace URI: {0}")]
    UnknownNamespace(String),

    /// Value conversion error
    ///
    /// **Error Code**: E3002
    ///
    /// **Common Causes**:
    /// - Non-numeric text in a numeric attribute
    /// - Dates not in ISO-8601 calendar form (`YYYY-MM-DD`)
    /// - Coordinate lists whose length is not a multiple of the dimension
    ///
    /// **Suggestions**:
    /// - Verify the document was produced by a conforming pipeline
    #[error("[E3002] Parse error: {0}")]
    ParseError(String),

    /// Unsupported construct
    ///
    /// **Error Code**: E4001
    ///
    /// **Common Causes**:
    /// - Unknown generic attribute element (`gen:*`)
    #[error("[E4001] Unsupported construct: {0}")]
    Unsupported(String),

    /// A geometry path ends in an element kind the assembler does not know
    ///
    /// **Error Code**: E4002
    ///
    /// This signals a rule catalogue bug, not a data problem.
    #[error("[E4002] Unsupported geometry path: {0}")]
    UnsupportedGeometryPath(String),

    /// An attribute rule uses a datatype the plain attribute loop cannot read
    ///
    /// **Error Code**: E4003
    #[error("[E4003] Unsupported attribute datatype: {0}")]
    UnsupportedDatatype(String),

    /// A rule with the same identifier is already registered
    ///
    /// **Error Code**: E5001
    #[error("[E5001] Duplicate rule id: {0}")]
    DuplicateRuleId(String),

    /// A tag spelling is claimed by more than one rule
    ///
    /// **Error Code**: E5002
    #[error("[E5002] Duplicate tag: {0}")]
    DuplicateTag(String),

    /// The rule catalogue failed validation
    ///
    /// **Error Code**: E5003
    ///
    /// **Common Causes**:
    /// - A semantic part or nested attribute path targets an unregistered tag
    /// - An attribute name does not occur in its path
    /// - A referenced static code table does not exist
    #[error("[E5003] Invalid rule catalogue: {0}")]
    InvalidCatalogue(String),
}

impl From<std::num::ParseFloatError> for Error {
    fn from(err: std::num::ParseFloatError) -> Self {
        Error::ParseError(format!("Failed to parse floating-point number: {}", err))
    }
}

impl From<std::num::ParseIntError> for Error {
    fn from(err: std::num::ParseIntError) -> Self {
        Error::ParseError(format!("Failed to parse integer: {}", err))
    }
}

impl From<chrono::ParseError> for Error {
    fn from(err: chrono::ParseError) -> Self {
        Error::ParseError(format!("Failed to parse date: {}", err))
    }
}

impl Error {
    /// Create an InvalidXml error with element context
    ///
    /// # Example
    /// ```ignore
    /// Error::invalid_xml_element("gml:LinearRing", "missing gml:posList")
    /// ```
    pub fn invalid_xml_element(element: &str, message: &str) -> Self {
        Error::InvalidXml(format!("Element '<{}>': {}", element, message))
    }

    /// Create a ParseError for a literal that could not be converted
    ///
    /// # Arguments
    /// * `context` - The feature and attribute being read
    /// * `value` - The literal that failed to convert
    /// * `expected_type` - The expected type (e.g., "floating-point number")
    pub fn value_conversion(context: &ErrorContext, value: &str, expected_type: &str) -> Self {
        Error::ParseError(format!(
            "Failed to convert '{}': expected {}.{}",
            value, expected_type, context
        ))
    }

    /// Create a ParseError with context about what was being parsed
    pub fn parse_error_with_context(field_name: &str, value: &str, expected_type: &str) -> Self {
        Error::ParseError(format!(
            "Failed to parse '{}': expected {}, got '{}'. \
             Verify the value is properly formatted.",
            field_name, expected_type, value
        ))
    }
}
