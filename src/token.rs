use std::fmt;

/// A lexical unit of a single SIE line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// `#LABEL`, stored without the leading `#`.
    EntryLabel(String),
    BeginArray,
    EndArray,
    /// Quoted or unquoted value, already unescaped.
    StringValue(String),
}

impl Token {
    /// Textual payload of the token, `None` for array delimiters.
    pub fn value(&self) -> Option<&str> {
        match self {
            Token::EntryLabel(label) => Some(label),
            Token::StringValue(value) => Some(value),
            Token::BeginArray | Token::EndArray => None,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Token::EntryLabel(label) => Some(label),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::EntryLabel(label) => write!(f, "#{}", label),
            Token::BeginArray => write!(f, "{{"),
            Token::EndArray => write!(f, "}}"),
            Token::StringValue(value) => write!(f, "{:?}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::Token;

    #[test]
    fn token_values() {
        assert_eq!(Token::EntryLabel("VER".into()).value(), Some("VER"));
        assert_eq!(Token::StringValue("1500".into()).value(), Some("1500"));
        assert_eq!(Token::BeginArray.value(), None);
        assert_eq!(Token::StringValue("x".into()).label(), None);
    }

    #[test]
    fn display_restores_markers() {
        assert_eq!(format!("{}", Token::EntryLabel("KONTO".into())), "#KONTO");
        assert_eq!(format!("{}", Token::BeginArray), "{");
        assert_eq!(format!("{}", Token::EndArray), "}");
        assert_eq!(format!("{}", Token::StringValue("a b".into())), "\"a b\"");
    }
}
