/*!
A recursive descent parser for propositional formulas.

```text
formula     := disjunction
disjunction := conjunction ( OR conjunction )*
conjunction := unary ( AND unary )*
unary       := NOT unary | atom
atom        := IDENTIFIER | '(' disjunction ')'
```

- AND is any of `AND`, `&`, `&&`, `∧`.
- OR is any of `OR`, `|`, `||`, `∨`.
- NOT is any of `NOT`, `!`, `~`, `¬`.
- An identifier is a letter or underscore, followed by letters, digits, underscores, or primes, and is not a keyword.

Keywords are case sensitive, so `and` is a variable.
Binary connectives associate to the left, and NOT binds tighter than AND, which binds tighter than OR.
*/

use std::{fmt, iter::Peekable, vec::IntoIter};

use crate::{
    misc::log::targets::{self},
    structures::formula::Formula,
    types::err::{self},
};

#[derive(Clone, Debug, PartialEq, Eq)]
enum TokenKind {
    And,
    Or,
    Not,
    Open,
    Close,
    Identifier(String),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => write!(f, "AND"),
            Self::Or => write!(f, "OR"),
            Self::Not => write!(f, "NOT"),
            Self::Open => write!(f, "("),
            Self::Close => write!(f, ")"),
            Self::Identifier(name) => write!(f, "{name}"),
        }
    }
}

#[derive(Clone, Debug)]
struct Token {
    kind: TokenKind,
    position: usize, // In chars
}

impl Token {
    fn unexpected(self) -> err::Parse {
        err::Parse::UnexpectedToken {
            position: self.position,
            found: self.kind.to_string(),
        }
    }
}

fn tokenize(text: &str) -> Result<Vec<Token>, err::Parse> {
    let mut the_tokens = Vec::new();
    let mut chars = text.chars().enumerate().peekable();

    while let Some((position, ch)) = chars.next() {
        let kind = match ch {
            c if c.is_whitespace() => continue,
            '(' => TokenKind::Open,
            ')' => TokenKind::Close,
            '&' => {
                chars.next_if(|(_, c)| *c == '&');
                TokenKind::And
            }
            '|' => {
                chars.next_if(|(_, c)| *c == '|');
                TokenKind::Or
            }
            '∧' => TokenKind::And,
            '∨' => TokenKind::Or,
            '!' | '~' | '¬' => TokenKind::Not,
            c if c.is_ascii_alphabetic() || c == '_' => {
                let mut name = String::from(c);
                while let Some((_, c)) =
                    chars.next_if(|(_, c)| c.is_ascii_alphanumeric() || *c == '_' || *c == '\'')
                {
                    name.push(c);
                }
                match name.as_str() {
                    "AND" => TokenKind::And,
                    "OR" => TokenKind::Or,
                    "NOT" => TokenKind::Not,
                    _ => TokenKind::Identifier(name),
                }
            }
            character => return Err(err::Parse::UnexpectedCharacter { position, character }),
        };
        the_tokens.push(Token { kind, position });
    }

    Ok(the_tokens)
}

struct Parser {
    tokens: Peekable<IntoIter<Token>>,
}

impl Parser {
    fn eat(&mut self, kind: &TokenKind) -> bool {
        self.tokens.next_if(|token| token.kind == *kind).is_some()
    }

    fn disjunction(&mut self) -> Result<Formula, err::Parse> {
        let mut the_formula = self.conjunction()?;
        while self.eat(&TokenKind::Or) {
            the_formula = Formula::disjunction(the_formula, self.conjunction()?);
        }
        Ok(the_formula)
    }

    fn conjunction(&mut self) -> Result<Formula, err::Parse> {
        let mut the_formula = self.unary()?;
        while self.eat(&TokenKind::And) {
            the_formula = Formula::conjunction(the_formula, self.unary()?);
        }
        Ok(the_formula)
    }

    fn unary(&mut self) -> Result<Formula, err::Parse> {
        let mut negations = 0;
        while self.eat(&TokenKind::Not) {
            negations += 1;
        }

        let mut the_formula = self.atom()?;
        for _ in 0..negations {
            the_formula = Formula::negation(the_formula);
        }
        Ok(the_formula)
    }

    fn atom(&mut self) -> Result<Formula, err::Parse> {
        let Some(token) = self.tokens.next() else {
            return Err(err::Parse::UnexpectedEnd);
        };

        match token.kind {
            TokenKind::Identifier(name) => Ok(Formula::Variable(name)),
            TokenKind::Open => {
                let the_formula = self.disjunction()?;
                match self.tokens.next() {
                    Some(Token {
                        kind: TokenKind::Close,
                        ..
                    }) => Ok(the_formula),
                    Some(other) => Err(other.unexpected()),
                    None => Err(err::Parse::UnexpectedEnd),
                }
            }
            _ => Err(token.unexpected()),
        }
    }
}

/// Parses a propositional formula from text.
pub fn parse_formula(text: &str) -> Result<Formula, err::Parse> {
    let the_tokens = tokenize(text)?;
    if the_tokens.is_empty() {
        return Err(err::Parse::Empty);
    }
    log::trace!(target: targets::PARSE, "{} tokens", the_tokens.len());

    let mut parser = Parser {
        tokens: the_tokens.into_iter().peekable(),
    };
    let the_formula = parser.disjunction()?;

    match parser.tokens.next() {
        None => Ok(the_formula),
        Some(token) => Err(token.unexpected()),
    }
}
