use core::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ParseErrorKind {
    /// The buffer ends before the fixed prefix of a layer does.
    PacketTooShort,
    /// The buffer cannot be interpreted as this protocol stack.
    ProtocolUnknown,
    VersionInvalid,
}
ndcraft_error::make_error!(ParseErrorKind => pub ParseError);

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::PacketTooShort => write!(f, "truncated buffer"),
            ParseErrorKind::ProtocolUnknown => write!(f, "unparsable buffer"),
            ParseErrorKind::VersionInvalid => write!(f, "invalid IP version"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BuildErrorKind {
    BufferTooShort,
}
ndcraft_error::make_error!(BuildErrorKind => pub BuildError);

impl fmt::Display for BuildErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildErrorKind::BufferTooShort => write!(f, "buffer too short"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FieldErrorKind {
    /// The field is not declared by the active header variant, or the
    /// calculated field name is not recognized.
    Unsupported,
    /// The value cannot be represented in the field.
    ValueInvalid,
}
ndcraft_error::make_error!(FieldErrorKind => pub FieldError);

impl fmt::Display for FieldErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldErrorKind::Unsupported => write!(f, "unsupported field"),
            FieldErrorKind::ValueInvalid => write!(f, "invalid field value"),
        }
    }
}
