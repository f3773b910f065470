//! Lexer for step name templates using logos
//!
//! Every byte of a template belongs to exactly one token, so lexing never
//! fails and never needs to backtrack. Placeholder recognition happens one
//! level up, in [`super::placeholder`].

use logos::Logos;

/// Byte range in template text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    #[token("{")]
    BraceOpen,
    #[token("}")]
    BraceClose,
    #[token(".")]
    Dot,

    /// A placeholder segment candidate
    #[regex(r"[A-Za-z0-9_$]+")]
    Word,

    /// Any run of characters that can never be part of a placeholder
    #[regex(r"[^{}.A-Za-z0-9_$]+")]
    Text,
}

/// Lex a template into tokens with spans
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .map(|(tok, span)| (tok.unwrap_or(Token::Text), span))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<Token> {
        lex(input).map(|(t, _)| t).collect()
    }

    #[test]
    fn test_placeholder_tokens() {
        assert_eq!(
            kinds("{user.name}"),
            vec![
                Token::BraceOpen,
                Token::Word,
                Token::Dot,
                Token::Word,
                Token::BraceClose
            ]
        );
    }

    #[test]
    fn test_dollar_and_digits_are_word_characters() {
        assert_eq!(kinds("$this0_"), vec![Token::Word]);
    }

    #[test]
    fn test_text_runs_are_merged() {
        assert_eq!(
            kinds("log in as {x}!"),
            vec![
                Token::Word,
                Token::Text,
                Token::Word,
                Token::Text,
                Token::Word,
                Token::Text,
                Token::BraceOpen,
                Token::Word,
                Token::BraceClose,
                Token::Text
            ]
        );
    }

    #[test]
    fn test_non_ascii_is_text() {
        let tokens: Vec<_> = lex("é{a}").collect();
        assert_eq!(tokens[0], (Token::Text, 0..2));
        assert_eq!(tokens[1], (Token::BraceOpen, 2..3));
    }

    #[test]
    fn test_spans_cover_input() {
        let input = "a {b.c} } { d";
        let mut end = 0;
        for (_, span) in lex(input) {
            assert_eq!(span.start, end);
            end = span.end;
        }
        assert_eq!(end, input.len());
    }
}
