use crate::parser::ParseError;
use crate::sql::{keyword::Keyword, token::Token, token_kind::TokenKind};
use itertools::Itertools;
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

/// One entry of the tokenizer's pattern table.
///
/// `kind == None` marks text that is recognized but produces no token
/// (whitespace, `--` comments).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenPattern {
    pub regex: &'static str,
    pub kind: Option<TokenKind>,
}

const fn keyword(regex: &'static str, kw: Keyword) -> TokenPattern {
    TokenPattern {
        regex,
        kind: Some(TokenKind::Keyword(kw)),
    }
}

const fn token(regex: &'static str, kind: TokenKind) -> TokenPattern {
    TokenPattern {
        regex,
        kind: Some(kind),
    }
}

const fn skip(regex: &'static str) -> TokenPattern {
    TokenPattern { regex, kind: None }
}

/// Ordered pattern table. At every position the FIRST entry that matches wins,
/// so the index of an entry is its priority:
/// - `NOT NULL` must precede `NOT`,
/// - `INTEGER` must precede `INT`,
/// - `(123)` length suffixes must precede the bare `(`,
/// - every keyword must precede the generic identifier.
///
/// Matching is case-insensitive.
pub const TOKEN_PATTERNS: [TokenPattern; 38] = [
    /* 00 */ keyword(r"\bCREATE\b", Keyword::Create),
    /* 01 */ keyword(r"\bTABLE\b", Keyword::Table),
    /* 02 */ keyword(r"\bIF\b", Keyword::If),
    /* 03 */ token(r"\bNOT\s+NULL\b", TokenKind::NotNull),
    /* 04 */ keyword(r"\bNOT\b", Keyword::Not),
    /* 05 */ keyword(r"\bEXISTS\b", Keyword::Exists),
    /* 06 */ keyword(r"\bPRIMARY\b", Keyword::Primary),
    /* 07 */ keyword(r"\bKEY\b", Keyword::Key),
    /* 08 */ keyword(r"\bDEFAULT\b", Keyword::Default),
    /* 09 */ keyword(r"\bNULL\b", Keyword::Null),
    /* 10 */ keyword(r"\bAUTO_INCREMENT\b", Keyword::AutoIncrement),
    /* 11 */ keyword(r"\bUNIQUE\b", Keyword::Unique),
    /* 12 */ keyword(r"\bCHECK\b", Keyword::Check),
    /* 13 */ keyword(r"\bCOMMENT\b", Keyword::Comment),
    /* 14 */ keyword(r"\bBOOLEAN\b", Keyword::Boolean),
    /* 15 */ keyword(r"\bINTEGER\b", Keyword::Integer),
    /* 16 */ keyword(r"\bINT\b", Keyword::Int),
    /* 17 */ keyword(r"\bVARCHAR\b", Keyword::Varchar),
    /* 18 */ keyword(r"\bTEXT\b", Keyword::Text),
    /* 19 */ keyword(r"\bREAL\b", Keyword::Real),
    /* 20 */ keyword(r"\bENUM\b", Keyword::Enum),
    /* 21 */ keyword(r"\bTIMESTAMP\b", Keyword::Timestamp),
    /* 22 */ keyword(r"\bCURRENT_TIMESTAMP\b", Keyword::CurrentTimestamp),
    /* 23 */ token(r"-?\d+\.\d+", TokenKind::RealLiteral),
    /* 24 */ token(r"-?\d+", TokenKind::IntegerLiteral),
    /* 25 */ token(r"\(\d+\)", TokenKind::VarcharLength),
    /* 26 */ skip(r"\s+"),
    /* 27 */ skip(r"--[^\n]*"),
    /* 28 */ token(r"\(", TokenKind::ParenOpen),
    /* 29 */ token(r"\)", TokenKind::ParenClose),
    /* 30 */ token(r",", TokenKind::Comma),
    /* 31 */ token(r";", TokenKind::Semicolon),
    /* 32 */ token(r"=", TokenKind::Equals),
    /* 33 */ token(r"<>|[<>!]=?|[+*/%-]", TokenKind::Operator),
    /* 34 */ token(r"\.", TokenKind::Dot),
    /* 35 */ token(r"'[^']*'", TokenKind::StringLiteral),
    /* 36 */ token(r"`[^`]*`", TokenKind::QuotedIdentifier),
    /* 37 */ token(r"\b\w+\b", TokenKind::Identifier),
];

/// All patterns fused into one alternation, one capture group per entry.
/// Alternation is leftmost-first, which is what gives table order its meaning.
static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = TOKEN_PATTERNS
        .iter()
        .map(|p| format!("({})", p.regex))
        .join("|");
    Regex::new(&format!("(?i){alternation}")).expect("token pattern table is a valid regex")
});

/// Tokenize one SQL statement into an ordered stream of `Token`s.
///
/// Behavior:
/// - Single left-to-right scan; at each position the first matching entry of
///   `TOKEN_PATTERNS` decides the token kind.
/// - Whitespace and `--` comments are consumed without producing tokens.
/// - Lexemes are kept verbatim (original case, quotes, parentheses).
///
/// Errors:
/// - `ParseError::UnrecognizedToken` for the first run of text no pattern
///   covers (e.g. `?`, `"`, an unterminated `'`).
pub fn tokenize(sql: &str) -> Result<Vec<Token>, ParseError> {
    let mut out = Vec::new();
    let mut cursor = 0;

    for caps in TOKEN_REGEX.captures_iter(sql) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > cursor {
            return Err(unrecognized(sql, cursor, whole.start()));
        }
        cursor = whole.end();

        let Some(index) = caps.iter().skip(1).position(|group| group.is_some()) else {
            continue;
        };
        if let Some(kind) = TOKEN_PATTERNS[index].kind {
            out.push(Token::new(kind, whole.as_str(), whole.start(), whole.end()));
        }
    }

    if cursor < sql.len() {
        return Err(unrecognized(sql, cursor, sql.len()));
    }

    trace!("Tokenized {} bytes into {} tokens", sql.len(), out.len());
    Ok(out)
}

fn unrecognized(sql: &str, start: usize, end: usize) -> ParseError {
    let lexeme = sql[start..end].trim_end();
    ParseError::UnrecognizedToken {
        lexeme: lexeme.to_string(),
        position: start,
    }
}

/// Re-serialize a token stream, one space between lexemes.
///
/// Tokenizing the result yields the same `(kind, lexeme)` sequence as the
/// stream it came from; only whitespace and comments are lost.
pub fn render(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.lexeme.as_str()).join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::keyword::Keyword;
    use crate::sql::token_kind::TokenKind;
    use rstest::rstest;

    fn kinds(sql: &str) -> Vec<TokenKind> {
        tokenize(sql)
            .expect("tokenizes")
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    fn pattern_index(kind: TokenKind) -> usize {
        TOKEN_PATTERNS
            .iter()
            .position(|p| p.kind == Some(kind))
            .expect("kind is in the table")
    }

    #[test]
    fn header_sequence() {
        assert_eq!(
            kinds("CREATE TABLE IF NOT EXISTS users ("),
            vec![
                TokenKind::Keyword(Keyword::Create),
                TokenKind::Keyword(Keyword::Table),
                TokenKind::Keyword(Keyword::If),
                TokenKind::Keyword(Keyword::Not),
                TokenKind::Keyword(Keyword::Exists),
                TokenKind::Identifier,
                TokenKind::ParenOpen,
            ]
        );
    }

    #[test]
    fn every_keyword_beats_identifier() {
        let ident = pattern_index(TokenKind::Identifier);
        assert_eq!(ident, TOKEN_PATTERNS.len() - 1);
        for kw in Keyword::ALL {
            let kind = TokenKind::Keyword(kw);
            assert!(pattern_index(kind) < ident, "{kw} must precede IDENTIFIER");
            for spelling in [kw.as_str().to_string(), kw.as_str().to_ascii_lowercase()] {
                assert_eq!(kinds(&spelling), vec![kind], "{spelling}");
            }
        }
    }

    #[test]
    fn compound_patterns_precede_their_prefixes() {
        assert!(
            pattern_index(TokenKind::NotNull)
                < pattern_index(TokenKind::Keyword(Keyword::Not))
        );
        assert!(
            pattern_index(TokenKind::Keyword(Keyword::Integer))
                < pattern_index(TokenKind::Keyword(Keyword::Int))
        );
        assert!(pattern_index(TokenKind::VarcharLength) < pattern_index(TokenKind::ParenOpen));
        assert!(pattern_index(TokenKind::RealLiteral) < pattern_index(TokenKind::IntegerLiteral));
    }

    #[rstest]
    #[case("NOT NULL", vec![TokenKind::NotNull])]
    #[case("not\n\tnull", vec![TokenKind::NotNull])]
    #[case("NOT EXISTS", vec![TokenKind::Keyword(Keyword::Not), TokenKind::Keyword(Keyword::Exists)])]
    #[case("NULL", vec![TokenKind::Keyword(Keyword::Null)])]
    #[case("INTEGER INT", vec![TokenKind::Keyword(Keyword::Integer), TokenKind::Keyword(Keyword::Int)])]
    #[case("CURRENT_TIMESTAMP", vec![TokenKind::Keyword(Keyword::CurrentTimestamp)])]
    #[case("3.14 42 -7", vec![TokenKind::RealLiteral, TokenKind::IntegerLiteral, TokenKind::IntegerLiteral])]
    #[case("VARCHAR(100)", vec![TokenKind::Keyword(Keyword::Varchar), TokenKind::VarcharLength])]
    #[case("( 100 )", vec![TokenKind::ParenOpen, TokenKind::IntegerLiteral, TokenKind::ParenClose])]
    #[case("'a b', `order`", vec![TokenKind::StringLiteral, TokenKind::Comma, TokenKind::QuotedIdentifier])]
    #[case("ENGINE=InnoDB;", vec![TokenKind::Identifier, TokenKind::Equals, TokenKind::Identifier, TokenKind::Semicolon])]
    #[case("shop.users", vec![TokenKind::Identifier, TokenKind::Dot, TokenKind::Identifier])]
    #[case("a >= 0", vec![TokenKind::Identifier, TokenKind::Operator, TokenKind::IntegerLiteral])]
    #[case("a - 1 <> b", vec![TokenKind::Identifier, TokenKind::Operator, TokenKind::IntegerLiteral, TokenKind::Operator, TokenKind::Identifier])]
    fn classifies(#[case] sql: &str, #[case] expected: Vec<TokenKind>) {
        assert_eq!(kinds(sql), expected);
    }

    #[rstest]
    #[case("created_at")]
    #[case("status_text")]
    #[case("integer_count")]
    #[case("notes")]
    #[case("tableau")]
    fn keyword_prefixed_identifiers_stay_identifiers(#[case] word: &str) {
        let toks = tokenize(word).expect("tokenizes");
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0].kind, TokenKind::Identifier);
        assert_eq!(toks[0].lexeme, word);
    }

    #[test]
    fn preserves_lexemes_and_spans() {
        let sql = "name varchar(64) COMMENT 'display name'";
        let toks = tokenize(sql).expect("tokenizes");
        let lexemes: Vec<_> = toks.iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(lexemes, vec!["name", "varchar", "(64)", "COMMENT", "'display name'"]);
        for t in &toks {
            assert_eq!(&sql[t.start..t.end], t.lexeme);
        }
    }

    #[test]
    fn comments_and_whitespace_are_dropped() {
        let toks = tokenize("id INT, -- primary id\n  name TEXT").expect("tokenizes");
        let idents: Vec<_> = toks.iter().filter_map(|t| t.ident()).collect();
        assert_eq!(idents, vec!["id", "name"]);
        assert_eq!(toks.len(), 5);
    }

    #[rstest]
    #[case("id INT ? 2", "?", 7)]
    #[case("name VARCHAR DEFAULT \"x\"", "\"", 21)]
    #[case("comment 'unterminated", "'", 8)]
    fn unrecognized_text_is_rejected(
        #[case] sql: &str,
        #[case] lexeme: &str,
        #[case] position: usize,
    ) {
        assert_eq!(
            tokenize(sql),
            Err(ParseError::UnrecognizedToken {
                lexeme: lexeme.to_string(),
                position,
            })
        );
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert_eq!(tokenize("").expect("tokenizes"), vec![]);
        assert_eq!(tokenize("  \n -- nothing\n").expect("tokenizes"), vec![]);
    }

    #[rstest]
    #[case("CREATE TABLE IF NOT EXISTS users (id INT AUTO_INCREMENT, name VARCHAR(100), status ENUM('active','inactive') DEFAULT 'active', created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP);")]
    #[case("create table t (\n  a real default 1.5 not   null,\n  `b` text comment 'x, y'\n) ENGINE=InnoDB;")]
    fn render_round_trips(#[case] sql: &str) {
        let toks = tokenize(sql).expect("tokenizes");
        let again = tokenize(&render(&toks)).expect("re-tokenizes");
        let pairs = |ts: &[Token]| {
            ts.iter()
                .map(|t| (t.kind, t.lexeme.clone()))
                .collect::<Vec<_>>()
        };
        assert_eq!(pairs(&toks), pairs(&again));
    }
}
