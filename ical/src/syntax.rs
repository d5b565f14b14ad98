// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Syntax analysis of content lines (RFC 5545 Section 3.1) on top of the lexer tokens.
//!
//! ```txt
//! contentline   = name *(";" param ) ":" value CRLF
//! param         = param-name "=" param-value *("," param-value)
//! param-value   = paramtext / quoted-string
//! ```

use chumsky::extra::ParserExtra;
use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::lexer::{Token, tokenize};

/// One unfolded content line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Span of the line in the source, line break excluded
    pub span: SimpleSpan,

    /// Upper-cased property name
    pub name: String,

    /// Raw parameters, without the leading semicolon
    pub params: Option<String>,

    /// Raw value, still escaped
    pub value: String,
}

/// A syntax error located in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// Byte offset where the error starts
    pub offset: usize,

    /// Lexer could not classify the text at `offset`
    pub lexical: bool,

    /// What the grammar accepted at this point
    pub expected: String,

    /// What was found instead
    pub found: String,
}

/// Split `src` into content lines. Blank lines are dropped.
pub fn content_lines(src: &str) -> Result<Vec<ContentLine>, SyntaxError> {
    if let Some((_, span)) = tokenize(src).find(|(tok, _)| *tok == Token::Error) {
        return Err(SyntaxError {
            offset: span.start,
            lexical: true,
            expected: String::new(),
            found: src.get(span).unwrap_or_default().to_string(),
        });
    }

    let tokens = tokenize(src).map(|(tok, span)| (tok, SimpleSpan::from(span)));
    let eoi = SimpleSpan::from(src.len()..src.len());
    let stream = Stream::from_iter(tokens).map(eoi, |(t, s)| (t, s));
    lines::<'_, '_, _, extra::Err<Rich<'_, Token<'_>>>>()
        .parse(stream)
        .into_result()
        .map_err(|errs| {
            errs.into_iter()
                .min_by_key(|e| e.span().start)
                .map_or_else(
                    || SyntaxError {
                        offset: src.len(),
                        lexical: false,
                        expected: String::new(),
                        found: "end of input".to_string(),
                    },
                    |e| SyntaxError {
                        offset: e.span().start,
                        lexical: false,
                        expected: e
                            .expected()
                            .map(ToString::to_string)
                            .collect::<Vec<_>>()
                            .join(", "),
                        found: e
                            .found()
                            .map_or_else(|| "end of input".to_string(), ToString::to_string),
                    },
                )
        })
}

fn lines<'tokens, 'src: 'tokens, I, E>() -> impl Parser<'tokens, I, Vec<ContentLine>, E> + Clone
where
    I: ValueInput<'tokens, Token = Token<'src>, Span = SimpleSpan>,
    E: ParserExtra<'tokens, I>,
{
    let blank = just(Token::Newline).to(None::<ContentLine>);
    choice((blank, content_line().map(Some)))
        .repeated()
        .collect::<Vec<_>>()
        .then_ignore(end())
        .map(|lines| lines.into_iter().flatten().collect())
}

fn content_line<'tokens, 'src: 'tokens, I, E>() -> impl Parser<'tokens, I, ContentLine, E> + Clone
where
    I: ValueInput<'tokens, Token = Token<'src>, Span = SimpleSpan>,
    E: ParserExtra<'tokens, I>,
{
    let params = just(Token::Semicolon)
        .ignore_then(parameter())
        .repeated()
        .collect::<Vec<_>>()
        .map(|params| (!params.is_empty()).then(|| params.join(";")));

    name()
        .then(params)
        .then_ignore(just(Token::Colon))
        .then(value())
        .map_with(|((name, params), value), e| ContentLine {
            span: e.span(),
            name: name.to_ascii_uppercase(),
            params,
            value,
        })
        .then_ignore(just(Token::Newline).or_not())
}

/// Name of a property or parameter; folding may have split it into several words.
fn name<'tokens, 'src: 'tokens, I, E>() -> impl Parser<'tokens, I, String, E> + Clone
where
    I: ValueInput<'tokens, Token = Token<'src>, Span = SimpleSpan>,
    E: ParserExtra<'tokens, I>,
{
    select! { Token::Word(s) => s }
        .repeated()
        .at_least(1)
        .collect::<Vec<_>>()
        .map(|words| words.concat())
}

/// Parameter kept in its source form, quotes included.
fn parameter<'tokens, 'src: 'tokens, I, E>() -> impl Parser<'tokens, I, String, E> + Clone
where
    I: ValueInput<'tokens, Token = Token<'src>, Span = SimpleSpan>,
    E: ParserExtra<'tokens, I>,
{
    let paramtext = select! {
        t @ (Token::Symbol(_) | Token::Word(_) | Token::UnicodeText(_)) => t.text(),
    }
    .repeated()
    .at_least(1)
    .collect::<Vec<_>>()
    .map(|parts| parts.concat());

    let quoted_string = select! {
        t @ (Token::Comma
            | Token::Colon
            | Token::Semicolon
            | Token::Equal
            | Token::Symbol(_)
            | Token::Word(_)
            | Token::UnicodeText(_)) => t.text(),
    }
    .repeated()
    .collect::<Vec<_>>()
    .delimited_by(just(Token::DQuote), just(Token::DQuote))
    .map(|parts| format!("\"{}\"", parts.concat()));

    let values = choice((quoted_string, paramtext))
        .separated_by(just(Token::Comma))
        .at_least(1)
        .collect::<Vec<_>>();

    name()
        .then_ignore(just(Token::Equal))
        .then(values)
        .map(|(name, values)| format!("{name}={}", values.join(",")))
}

/// Everything up to the line break, token text preserved.
fn value<'tokens, 'src: 'tokens, I, E>() -> impl Parser<'tokens, I, String, E> + Clone
where
    I: ValueInput<'tokens, Token = Token<'src>, Span = SimpleSpan>,
    E: ParserExtra<'tokens, I>,
{
    select! {
        t @ (Token::DQuote
            | Token::Comma
            | Token::Colon
            | Token::Semicolon
            | Token::Equal
            | Token::Symbol(_)
            | Token::Word(_)
            | Token::UnicodeText(_)) => t.text(),
    }
    .repeated()
    .collect::<Vec<_>>()
    .map(|parts| parts.concat())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(src: &str) -> ContentLine {
        let mut lines = content_lines(src).unwrap();
        assert_eq!(lines.len(), 1);
        lines.remove(0)
    }

    #[test]
    fn parses_name_params_and_value() {
        let cl = line("dtstart;VALUE=DATE:20240320\r\n");
        assert_eq!(cl.name, "DTSTART");
        assert_eq!(cl.params.as_deref(), Some("VALUE=DATE"));
        assert_eq!(cl.value, "20240320");
        assert_eq!(cl.span, SimpleSpan::from(0..27));
    }

    #[test]
    fn keeps_quoted_and_multi_valued_params() {
        let cl = line("X-A;X-P=\"a;b:c\";MEMBER=x,\"y\":v;w:z\r\n");
        assert_eq!(cl.params.as_deref(), Some("X-P=\"a;b:c\";MEMBER=x,\"y\""));
        assert_eq!(cl.value, "v;w:z");
    }

    #[test]
    fn accepts_empty_value_and_missing_final_break() {
        let cl = line("DESCRIPTION:");
        assert_eq!(cl.value, "");
    }

    #[test]
    fn joins_folded_names() {
        let cl = line("SUMM\r\n ARY:x\r\n");
        assert_eq!(cl.name, "SUMMARY");
    }

    #[test]
    fn skips_blank_lines() {
        let lines = content_lines("\r\nA:1\r\n\r\nB:2\r\n").unwrap();
        let names: Vec<_> = lines.iter().map(|cl| cl.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn reports_missing_colon() {
        let err = content_lines("A:1\r\nPRODID\r\n").unwrap_err();
        assert!(!err.lexical);
        assert_eq!(err.offset, 11);
        assert_eq!(err.found, "Newline");
    }

    #[test]
    fn reports_unterminated_quote() {
        let err = content_lines("X;P=\"open:v\r\n").unwrap_err();
        assert!(!err.lexical);
    }

    #[test]
    fn reports_lexing_errors() {
        let err = content_lines("A:1\r\nB:x\u{1}\r\n").unwrap_err();
        assert!(err.lexical);
        assert_eq!(err.offset, 8);
        assert_eq!(err.found, "\u{1}");
    }
}
