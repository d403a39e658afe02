////////////////////////////////////////////////////////////////////////////////
// File: src/internal/tokenize.rs
// Description: Token definitions and tokenizer
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 15.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use std::{fmt::Display, iter::Peekable, str::Chars};

use super::error::CompileError;

use anyhow::Result;

////////////////////////////////////////////////////////////////////////////////
// Constants
////////////////////////////////////////////////////////////////////////////////

// Keywords
pub(crate) const KEYWORD_BOOLEAN: &str = "boolean";
pub(crate) const KEYWORD_CHAR: &str = "char";
pub(crate) const KEYWORD_CLASS: &str = "class";
pub(crate) const KEYWORD_CONSTRUCTOR: &str = "constructor";
pub(crate) const KEYWORD_DO: &str = "do";
pub(crate) const KEYWORD_ELSE: &str = "else";
pub(crate) const KEYWORD_FALSE: &str = "false";
pub(crate) const KEYWORD_FIELD: &str = "field";
pub(crate) const KEYWORD_FUNCTION: &str = "function";
pub(crate) const KEYWORD_IF: &str = "if";
pub(crate) const KEYWORD_INT: &str = "int";
pub(crate) const KEYWORD_LET: &str = "let";
pub(crate) const KEYWORD_METHOD: &str = "method";
pub(crate) const KEYWORD_NULL: &str = "null";
pub(crate) const KEYWORD_RETURN: &str = "return";
pub(crate) const KEYWORD_STATIC: &str = "static";
pub(crate) const KEYWORD_THIS: &str = "this";
pub(crate) const KEYWORD_TRUE: &str = "true";
pub(crate) const KEYWORD_VAR: &str = "var";
pub(crate) const KEYWORD_VOID: &str = "void";
pub(crate) const KEYWORD_WHILE: &str = "while";

// Symbols
pub(crate) const SYMBOL_AMPERSAND: char = '&';
pub(crate) const SYMBOL_ASTERISK: char = '*';
pub(crate) const SYMBOL_COMMA: char = ',';
pub(crate) const SYMBOL_DBL_QUOTE: char = '"';
pub(crate) const SYMBOL_DOT: char = '.';
pub(crate) const SYMBOL_EQUAL: char = '=';
pub(crate) const SYMBOL_GREATER_THAN: char = '>';
pub(crate) const SYMBOL_LEFT_CURLY_BRACE: char = '{';
pub(crate) const SYMBOL_LEFT_PAREN: char = '(';
pub(crate) const SYMBOL_LEFT_SQUARE_BRACKET: char = '[';
pub(crate) const SYMBOL_LESS_THAN: char = '<';
pub(crate) const SYMBOL_MINUS: char = '-';
pub(crate) const SYMBOL_PLUS: char = '+';
pub(crate) const SYMBOL_RIGHT_CURLY_BRACE: char = '}';
pub(crate) const SYMBOL_RIGHT_PAREN: char = ')';
pub(crate) const SYMBOL_RIGHT_SQUARE_BRACKET: char = ']';
pub(crate) const SYMBOL_SEMICOLON: char = ';';
pub(crate) const SYMBOL_SLASH: char = '/';
pub(crate) const SYMBOL_TILDE: char = '~';
pub(crate) const SYMBOL_VERTICAL_BAR: char = '|';

/// Largest value a `push constant` can carry on the target machine.
pub(crate) const MAX_INTEGER_CONSTANT: u16 = 32767;

////////////////////////////////////////////////////////////////////////////////
// Tokens, Keywords, and Symbols
////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
  Identifier(String),
  IntegerConstant(u16),
  Keyword(Keyword),
  StringConstant(String),
  Symbol(Symbol),
}

impl Token {
  pub(crate) fn is_symbol(&self, symbol: Symbol) -> bool {
    return matches!(self, Token::Symbol(s) if *s == symbol);
  }

  pub(crate) fn is_keyword(&self, keyword: Keyword) -> bool {
    return matches!(self, Token::Keyword(k) if *k == keyword);
  }

  pub(crate) fn binary_operator(&self) -> Option<Operator> {
    return match self {
      Token::Symbol(symbol) => symbol.binary_operator(),
      _ => None,
    };
  }
}

impl Display for Token {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    return match self {
      Token::Identifier(id) => write!(f, "identifier `{}`", id),
      Token::IntegerConstant(num) => write!(f, "integer constant `{}`", num),
      Token::Keyword(kw) => write!(f, "keyword `{}`", kw),
      Token::StringConstant(str) => write!(f, "string constant `{}`", str),
      Token::Symbol(sym) => write!(f, "symbol `{}`", sym),
    };
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Keyword {
  Boolean,
  Char,
  Class,
  Constructor,
  Do,
  Else,
  False,
  Field,
  Function,
  If,
  Int,
  Let,
  Method,
  Null,
  Return,
  Static,
  This,
  True,
  Var,
  Void,
  While,
}

impl Keyword {
  fn from_word(word: &str) -> Option<Self> {
    return Some(match word {
      KEYWORD_BOOLEAN => Keyword::Boolean,
      KEYWORD_CHAR => Keyword::Char,
      KEYWORD_CLASS => Keyword::Class,
      KEYWORD_CONSTRUCTOR => Keyword::Constructor,
      KEYWORD_DO => Keyword::Do,
      KEYWORD_ELSE => Keyword::Else,
      KEYWORD_FALSE => Keyword::False,
      KEYWORD_FIELD => Keyword::Field,
      KEYWORD_FUNCTION => Keyword::Function,
      KEYWORD_IF => Keyword::If,
      KEYWORD_INT => Keyword::Int,
      KEYWORD_LET => Keyword::Let,
      KEYWORD_METHOD => Keyword::Method,
      KEYWORD_NULL => Keyword::Null,
      KEYWORD_RETURN => Keyword::Return,
      KEYWORD_STATIC => Keyword::Static,
      KEYWORD_THIS => Keyword::This,
      KEYWORD_TRUE => Keyword::True,
      KEYWORD_VAR => Keyword::Var,
      KEYWORD_VOID => Keyword::Void,
      KEYWORD_WHILE => Keyword::While,
      _ => return None,
    });
  }

  /// Keywords that name a primitive variable type.
  pub(crate) fn is_primitive_type(&self) -> bool {
    return matches!(self, Keyword::Int | Keyword::Char | Keyword::Boolean);
  }
}

impl Display for Keyword {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let word = match self {
      Keyword::Boolean => KEYWORD_BOOLEAN,
      Keyword::Char => KEYWORD_CHAR,
      Keyword::Class => KEYWORD_CLASS,
      Keyword::Constructor => KEYWORD_CONSTRUCTOR,
      Keyword::Do => KEYWORD_DO,
      Keyword::Else => KEYWORD_ELSE,
      Keyword::False => KEYWORD_FALSE,
      Keyword::Field => KEYWORD_FIELD,
      Keyword::Function => KEYWORD_FUNCTION,
      Keyword::If => KEYWORD_IF,
      Keyword::Int => KEYWORD_INT,
      Keyword::Let => KEYWORD_LET,
      Keyword::Method => KEYWORD_METHOD,
      Keyword::Null => KEYWORD_NULL,
      Keyword::Return => KEYWORD_RETURN,
      Keyword::Static => KEYWORD_STATIC,
      Keyword::This => KEYWORD_THIS,
      Keyword::True => KEYWORD_TRUE,
      Keyword::Var => KEYWORD_VAR,
      Keyword::Void => KEYWORD_VOID,
      Keyword::While => KEYWORD_WHILE,
    };

    return write!(f, "{}", word);
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Symbol {
  Amp,
  Asterisk,
  Comma,
  Dot,
  Eq,
  Gt,
  LeftCurlyBrace,
  LeftParen,
  LeftSquareBracket,
  Lt,
  Minus,
  Plus,
  RightCurlyBrace,
  RightParen,
  RightSquareBracket,
  Semicolon,
  Slash,
  Tilde,
  VBar,
}

impl Symbol {
  fn from_char(c: char) -> Option<Self> {
    return Some(match c {
      SYMBOL_AMPERSAND => Symbol::Amp,
      SYMBOL_ASTERISK => Symbol::Asterisk,
      SYMBOL_COMMA => Symbol::Comma,
      SYMBOL_DOT => Symbol::Dot,
      SYMBOL_EQUAL => Symbol::Eq,
      SYMBOL_GREATER_THAN => Symbol::Gt,
      SYMBOL_LEFT_CURLY_BRACE => Symbol::LeftCurlyBrace,
      SYMBOL_LEFT_PAREN => Symbol::LeftParen,
      SYMBOL_LEFT_SQUARE_BRACKET => Symbol::LeftSquareBracket,
      SYMBOL_LESS_THAN => Symbol::Lt,
      SYMBOL_MINUS => Symbol::Minus,
      SYMBOL_PLUS => Symbol::Plus,
      SYMBOL_RIGHT_CURLY_BRACE => Symbol::RightCurlyBrace,
      SYMBOL_RIGHT_PAREN => Symbol::RightParen,
      SYMBOL_RIGHT_SQUARE_BRACKET => Symbol::RightSquareBracket,
      SYMBOL_SEMICOLON => Symbol::Semicolon,
      SYMBOL_SLASH => Symbol::Slash,
      SYMBOL_TILDE => Symbol::Tilde,
      SYMBOL_VERTICAL_BAR => Symbol::VBar,
      _ => return None,
    });
  }

  pub(crate) fn as_char(&self) -> char {
    return match self {
      Symbol::Amp => SYMBOL_AMPERSAND,
      Symbol::Asterisk => SYMBOL_ASTERISK,
      Symbol::Comma => SYMBOL_COMMA,
      Symbol::Dot => SYMBOL_DOT,
      Symbol::Eq => SYMBOL_EQUAL,
      Symbol::Gt => SYMBOL_GREATER_THAN,
      Symbol::LeftCurlyBrace => SYMBOL_LEFT_CURLY_BRACE,
      Symbol::LeftParen => SYMBOL_LEFT_PAREN,
      Symbol::LeftSquareBracket => SYMBOL_LEFT_SQUARE_BRACKET,
      Symbol::Lt => SYMBOL_LESS_THAN,
      Symbol::Minus => SYMBOL_MINUS,
      Symbol::Plus => SYMBOL_PLUS,
      Symbol::RightCurlyBrace => SYMBOL_RIGHT_CURLY_BRACE,
      Symbol::RightParen => SYMBOL_RIGHT_PAREN,
      Symbol::RightSquareBracket => SYMBOL_RIGHT_SQUARE_BRACKET,
      Symbol::Semicolon => SYMBOL_SEMICOLON,
      Symbol::Slash => SYMBOL_SLASH,
      Symbol::Tilde => SYMBOL_TILDE,
      Symbol::VBar => SYMBOL_VERTICAL_BAR,
    };
  }

  pub(crate) fn binary_operator(&self) -> Option<Operator> {
    return match self {
      Symbol::Plus => Some(Operator::Add),
      Symbol::Minus => Some(Operator::Sub),
      Symbol::Asterisk => Some(Operator::Mul),
      Symbol::Slash => Some(Operator::Div),
      Symbol::Amp => Some(Operator::And),
      Symbol::VBar => Some(Operator::Or),
      Symbol::Lt => Some(Operator::Lt),
      Symbol::Gt => Some(Operator::Gt),
      Symbol::Eq => Some(Operator::Eq),
      _ => None,
    };
  }

  pub(crate) fn unary_operator(&self) -> Option<UnaryOperator> {
    return match self {
      Symbol::Minus => Some(UnaryOperator::Neg),
      Symbol::Tilde => Some(UnaryOperator::Not),
      _ => None,
    };
  }
}

impl Display for Symbol {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    return write!(f, "{}", self.as_char());
  }
}

////////////////////////////////////////////////////////////////////////////////
// Operators
////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Operator {
  Add,
  And,
  Div,
  Eq,
  Gt,
  Lt,
  Mul,
  Or,
  Sub,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum UnaryOperator {
  Neg,
  Not,
}

////////////////////////////////////////////////////////////////////////////////
// Tokenizer
////////////////////////////////////////////////////////////////////////////////

pub(crate) struct Tokenizer<'a> {
  chars: Peekable<Chars<'a>>,
  tokens: Vec<Token>,
}

impl<'a> Tokenizer<'a> {
  /// Splits the whole source into tokens. Comments and whitespace are
  /// dropped.
  pub(crate) fn tokenize(source: &'a str) -> Result<Vec<Token>> {
    let mut tokenizer = Self {
      chars: source.chars().peekable(),
      tokens: Vec::new(),
    };

    while let Some(token) = tokenizer.advance()? {
      tokenizer.tokens.push(token);
    }

    return Ok(tokenizer.tokens);
  }

  fn skip_line_comment(&mut self) {
    while self.chars.next_if(|c| return *c != '\n').is_some() {}
  }

  fn skip_block_comment(&mut self) -> Result<()> {
    // The opening `/*` has already been consumed.
    while let Some(c) = self.chars.next() {
      if c == SYMBOL_ASTERISK && self.chars.next_if_eq(&SYMBOL_SLASH).is_some()
      {
        return Ok(());
      }
    }

    return Err(CompileError::lex("Unterminated block comment").into());
  }

  fn parse_keyword_or_identifier(&mut self, start_char: char) -> Token {
    let mut raw_token = String::from(start_char);

    while let Some(c) = self
      .chars
      .next_if(|c| return c.is_ascii_alphanumeric() || *c == '_')
    {
      raw_token.push(c);
    }

    return match Keyword::from_word(&raw_token) {
      Some(keyword) => Token::Keyword(keyword),
      None => Token::Identifier(raw_token),
    };
  }

  fn parse_numeric(&mut self, start_char: char) -> Result<Token> {
    let mut number = String::from(start_char);

    while let Some(c) = self.chars.next_if(char::is_ascii_digit) {
      number.push(c);
    }

    let value = number
      .parse::<u16>()
      .ok()
      .filter(|value| return *value <= MAX_INTEGER_CONSTANT)
      .ok_or_else(|| {
        return CompileError::lex(format!(
          "Integer constant `{}` exceeds the maximum of {}",
          number, MAX_INTEGER_CONSTANT
        ));
      })?;

    return Ok(Token::IntegerConstant(value));
  }

  fn parse_string(&mut self) -> Result<Token> {
    let mut string = String::new();

    loop {
      match self.chars.next() {
        Some(SYMBOL_DBL_QUOTE) => {
          if string.len() > MAX_INTEGER_CONSTANT as usize {
            return Err(
              CompileError::lex(format!(
                "String constant exceeds the maximum length of {}",
                MAX_INTEGER_CONSTANT
              ))
              .into(),
            );
          }

          return Ok(Token::StringConstant(string));
        }
        Some('\n') | None => {
          return Err(
            CompileError::lex(format!(
              "Unterminated string constant `\"{}`",
              string
            ))
            .into(),
          );
        }
        Some(c) if !c.is_ascii() => {
          return Err(
            CompileError::lex(format!(
              "String constant contains the non-ASCII character `{}`",
              c
            ))
            .into(),
          );
        }
        Some(c) => string.push(c),
      }
    }
  }

  fn advance(&mut self) -> Result<Option<Token>> {
    while let Some(c_curr) = self.chars.next() {
      if c_curr.is_whitespace() {
        continue;
      }

      if c_curr == SYMBOL_SLASH {
        if self.chars.next_if_eq(&SYMBOL_SLASH).is_some() {
          self.skip_line_comment();
          continue;
        }

        if self.chars.next_if_eq(&SYMBOL_ASTERISK).is_some() {
          self.skip_block_comment()?;
          continue;
        }
      }

      if c_curr == SYMBOL_DBL_QUOTE {
        return self.parse_string().map(Some);
      }

      if c_curr.is_ascii_digit() {
        return self.parse_numeric(c_curr).map(Some);
      }

      if c_curr.is_ascii_alphabetic() || c_curr == '_' {
        return Ok(Some(self.parse_keyword_or_identifier(c_curr)));
      }

      return match Symbol::from_char(c_curr) {
        Some(symbol) => Ok(Some(Token::Symbol(symbol))),
        None => Err(
          CompileError::lex(format!("Invalid character `{}`", c_curr)).into(),
        ),
      };
    }

    return Ok(None);
  }
}
