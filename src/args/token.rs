//! Tokenizer — raw args → classified tokens.

use crate::args::name::{negated_base, strip_dashes, FlagName};
use crate::args::value::BoolReading;

/// A classified command-line entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `-X`, `--X`, `-X=value`.
    Positive { name: FlagName, value: String },
    /// `-noX[=value]`, keyed by the base flag `-X`.
    Negated { name: FlagName, value: String },
    /// Positional argument, or a dash with no name (`-`, `--`, `-=v`).
    Skipped(String),
}

impl Token {
    /// Classify one raw argument.
    pub fn classify(raw: &str) -> Self {
        if !raw.starts_with('-') {
            return Self::Skipped(raw.to_string());
        }

        let body = strip_dashes(raw);
        let (name, value) = match body.split_once('=') {
            Some((name, value)) => (name, value),
            None => (body, ""),
        };

        if name.is_empty() {
            return Self::Skipped(raw.to_string());
        }

        match negated_base(name) {
            Some(base) => Self::Negated {
                name: FlagName::from_bare(base),
                value: value.to_string(),
            },
            None => Self::Positive {
                name: FlagName::from_bare(name),
                value: value.to_string(),
            },
        }
    }

    /// For negated tokens, whether the value asserts the negation.
    /// `-noX=0` cancels it.
    pub fn asserts_negation(&self) -> bool {
        match self {
            Self::Negated { value, .. } => BoolReading::of(value).asserts_negation(),
            Self::Positive { .. } | Self::Skipped(_) => false,
        }
    }
}

/// Classify raw args in order. The program name must already be stripped.
pub fn tokenize<I, S>(raw_args: I) -> Vec<Token>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw_args
        .into_iter()
        .map(|arg| {
            let token = Token::classify(arg.as_ref());
            tracing::trace!(raw = arg.as_ref(), ?token, "classified argument");
            token
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positive(name: &str, value: &str) -> Token {
        Token::Positive {
            name: FlagName::canonical(name).unwrap(),
            value: value.to_string(),
        }
    }

    fn negated(name: &str, value: &str) -> Token {
        Token::Negated {
            name: FlagName::canonical(name).unwrap(),
            value: value.to_string(),
        }
    }

    #[test]
    fn bare_flag_has_empty_value() {
        assert_eq!(Token::classify("-TGC"), positive("TGC", ""));
        assert_eq!(Token::classify("--TGC"), positive("TGC", ""));
    }

    #[test]
    fn splits_on_first_equals_only() {
        assert_eq!(Token::classify("-TGC=a=b"), positive("TGC", "a=b"));
        assert_eq!(Token::classify("-TGC="), positive("TGC", ""));
    }

    #[test]
    fn no_prefix_negates_the_base_flag() {
        assert_eq!(Token::classify("-noTGC"), negated("TGC", ""));
        assert_eq!(Token::classify("--noTGC=1"), negated("TGC", "1"));
        assert!(Token::classify("-noTGC").asserts_negation());
        assert!(Token::classify("-noTGC=yes").asserts_negation());
        assert!(!Token::classify("-noTGC=0").asserts_negation());
    }

    #[test]
    fn lone_no_is_a_positive_flag() {
        assert_eq!(Token::classify("-no"), positive("no", ""));
    }

    #[test]
    fn no_prefixed_names_are_always_negations() {
        assert_eq!(Token::classify("-notify"), negated("tify", ""));
    }

    #[test]
    fn positional_and_empty_names_are_skipped() {
        assert_eq!(Token::classify("file.txt"), Token::Skipped("file.txt".into()));
        assert_eq!(Token::classify("-"), Token::Skipped("-".into()));
        assert_eq!(Token::classify("--"), Token::Skipped("--".into()));
        assert_eq!(Token::classify("-=5"), Token::Skipped("-=5".into()));
    }

    #[test]
    fn tokenize_keeps_order() {
        let tokens = tokenize(["-a", "pos", "--nob=0"]);
        assert_eq!(
            tokens,
            vec![
                positive("a", ""),
                Token::Skipped("pos".into()),
                negated("b", "0"),
            ]
        );
    }
}
