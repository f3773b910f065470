//! Left-to-right placeholder matching over the token stream

use logos::{Lexer, Logos};

use super::lexer::{Span, Token};

/// A placeholder found in a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'t> {
    /// Byte range of the whole token, braces included
    pub span: Span,
    /// Text between the braces
    pub inner: &'t str,
    /// The whole token, braces included
    pub raw: &'t str,
}

impl<'t> Placeholder<'t> {
    /// The dot-separated path segments
    pub fn segments(&self) -> Vec<&'t str> {
        self.inner.split('.').collect()
    }
}

/// Lazy iterator over the placeholders of a template
///
/// Clones continue independently from the same position; call [`scan`] again
/// for a fresh pass.
#[derive(Clone)]
pub struct Placeholders<'t> {
    source: &'t str,
    lexer: Lexer<'t, Token>,
}

/// Find all placeholders in `template`, in order
pub fn scan(template: &str) -> Placeholders<'_> {
    Placeholders {
        source: template,
        lexer: Token::lexer(template),
    }
}

impl<'t> Iterator for Placeholders<'t> {
    type Item = Placeholder<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(tok) = self.lexer.next() {
            if tok != Ok(Token::BraceOpen) {
                continue;
            }
            let start = self.lexer.span().start;
            let mut ahead = self.lexer.clone();
            if let Some(end) = match_rest(&mut ahead) {
                self.lexer = ahead;
                return Some(Placeholder {
                    span: start..end,
                    inner: &self.source[start + 1..end - 1],
                    raw: &self.source[start..end],
                });
            }
            // Not a placeholder; resume right after this brace.
        }
        None
    }
}

/// Match `Word (Dot Word)* BraceClose`, returning the end offset of the brace
fn match_rest(lexer: &mut Lexer<'_, Token>) -> Option<usize> {
    if lexer.next() != Some(Ok(Token::Word)) {
        return None;
    }
    loop {
        match lexer.next() {
            Some(Ok(Token::Dot)) => {
                if lexer.next() != Some(Ok(Token::Word)) {
                    return None;
                }
            }
            Some(Ok(Token::BraceClose)) => return Some(lexer.span().end),
            _ => return None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn inners(template: &str) -> Vec<&str> {
        scan(template).map(|p| p.inner).collect()
    }

    #[test]
    fn test_no_placeholders() {
        assert!(inners("").is_empty());
        assert!(inners("plain step name").is_empty());
    }

    #[test]
    fn test_single_placeholder() {
        let found: Vec<_> = scan("login as {username}").collect();
        assert_eq!(
            found,
            vec![Placeholder {
                span: 9..19,
                inner: "username",
                raw: "{username}",
            }]
        );
    }

    #[test]
    fn test_dotted_placeholder_segments() {
        let p = scan("user {user.address.city}").next().unwrap();
        assert_eq!(p.segments(), vec!["user", "address", "city"]);
    }

    #[test]
    fn test_multiple_in_order() {
        assert_eq!(inners("{0} and {1} and {$x}"), vec!["0", "1", "$x"]);
    }

    #[test]
    fn test_malformed_braces_are_literal() {
        assert!(inners("{} { a } {a.} {.a} {a..b} {a-b} {a").is_empty());
    }

    #[test]
    fn test_nested_open_brace_restarts() {
        let found: Vec<_> = scan("{{a}}").collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].span, 1..4);
        assert_eq!(found[0].raw, "{a}");
    }

    #[test]
    fn test_broken_token_does_not_hide_next() {
        assert_eq!(inners("{a {b}"), vec!["b"]);
        assert_eq!(inners("{a.{b.c}"), vec!["b.c"]);
    }

    #[test]
    fn test_scan_is_restartable() {
        let template = "{a} {b}";
        let first: Vec<_> = scan(template).collect();
        let second: Vec<_> = scan(template).collect();
        assert_eq!(first, second);
    }
}
