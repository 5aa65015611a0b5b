
/// Raised when cell text is neither blank, a dash placeholder, nor one of the
/// recognised numeric encodings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub text: String,
}

impl ParseError {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Could not parse {:?} as a number!", self.text)
    }
}

impl std::error::Error for ParseError {}
