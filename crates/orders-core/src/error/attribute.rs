use super::Error;

/// Error when a decoded item lacks an attribute the record requires.
#[derive(Debug, Clone)]
pub(super) struct MissingAttribute {
    name: Box<str>,
}

impl std::error::Error for MissingAttribute {}

impl core::fmt::Display for MissingAttribute {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "missing attribute `{}`", self.name)
    }
}

/// Error when an attribute is present but holds a different kind of value.
#[derive(Debug, Clone)]
pub(super) struct UnexpectedAttributeType {
    name: Box<str>,
    expected: &'static str,
    found: &'static str,
}

impl std::error::Error for UnexpectedAttributeType {}

impl core::fmt::Display for UnexpectedAttributeType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "attribute `{}` has type {}, expected {}",
            self.name, self.found, self.expected
        )
    }
}

/// Error when a number attribute does not hold an integer.
#[derive(Debug, Clone)]
pub(super) struct InvalidNumber {
    name: Box<str>,
    value: Box<str>,
}

impl std::error::Error for InvalidNumber {}

impl core::fmt::Display for InvalidNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "attribute `{}` is not a valid integer: {:?}",
            self.name, self.value
        )
    }
}

impl Error {
    pub fn missing_attribute(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingAttribute(MissingAttribute {
            name: name.into().into(),
        }))
    }

    pub fn is_missing_attribute(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::MissingAttribute(_)))
    }

    /// Creates an error for an attribute whose type descriptor (`S`, `N`, ...)
    /// is not the one the record expects.
    pub fn unexpected_attribute_type(
        name: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Error {
        Error::from(super::ErrorKind::UnexpectedAttributeType(
            UnexpectedAttributeType {
                name: name.into().into(),
                expected,
                found,
            },
        ))
    }

    pub fn is_unexpected_attribute_type(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::UnexpectedAttributeType(_)))
    }

    pub fn invalid_number(name: impl Into<String>, value: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidNumber(InvalidNumber {
            name: name.into().into(),
            value: value.into().into(),
        }))
    }

    pub fn is_invalid_number(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::InvalidNumber(_)))
    }
}
