////////////////////////////////////////////////////////////////////////////////
// File: src/tests/tokenize.rs
// Description: Tokenizer tests
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 15.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use crate::internal::{
  error::CompileError,
  tokenize::{Keyword, Symbol, Token, Tokenizer},
  xml::{XmlSerializableTokenStream, XmlSerialize},
};

fn lex_error(source: &str) -> CompileError {
  return Tokenizer::tokenize(source)
    .expect_err("source should not tokenize")
    .downcast_ref::<CompileError>()
    .cloned()
    .expect("error should be a compile error");
}

////////////////////////////////////////////////////////////////////////////////
// Test Cases: Token Classes
////////////////////////////////////////////////////////////////////////////////

#[test]
#[doc = "A let statement splits into keyword, identifier, symbols and constants."]
fn let_statement_tokens() {
  let tokens = Tokenizer::tokenize("let x = 7;").unwrap();

  assert_eq!(
    tokens,
    vec![
      Token::Keyword(Keyword::Let),
      Token::Identifier(String::from("x")),
      Token::Symbol(Symbol::Eq),
      Token::IntegerConstant(7),
      Token::Symbol(Symbol::Semicolon),
    ]
  );
}

#[test]
#[doc = "Comments of both forms and whitespace produce no tokens."]
fn comments_are_skipped() {
  let source = "// line comment\n/* block\n comment */ /** doc */ do\t\n";
  let tokens = Tokenizer::tokenize(source).unwrap();

  assert_eq!(tokens, vec![Token::Keyword(Keyword::Do)]);
}

#[test]
#[doc = "A lone slash is the division symbol."]
fn slash_without_comment_is_symbol() {
  let tokens = Tokenizer::tokenize("a/b").unwrap();

  assert_eq!(
    tokens,
    vec![
      Token::Identifier(String::from("a")),
      Token::Symbol(Symbol::Slash),
      Token::Identifier(String::from("b")),
    ]
  );
}

#[test]
#[doc = "String constants keep their inner spaces and drop the quotes."]
fn string_constant() {
  let tokens = Tokenizer::tokenize("\"a b  c\"").unwrap();

  assert_eq!(tokens, vec![Token::StringConstant(String::from("a b  c"))]);
}

#[test]
#[doc = "Identifiers are matched greedily, keywords only as whole words."]
fn keyword_prefix_is_identifier() {
  let tokens = Tokenizer::tokenize("classy do_it while").unwrap();

  assert_eq!(
    tokens,
    vec![
      Token::Identifier(String::from("classy")),
      Token::Identifier(String::from("do_it")),
      Token::Keyword(Keyword::While),
    ]
  );
}

#[test]
#[doc = "Identifiers may start with an underscore and contain digits."]
fn underscore_identifier() {
  let tokens = Tokenizer::tokenize("_tmp2").unwrap();

  assert_eq!(tokens, vec![Token::Identifier(String::from("_tmp2"))]);
}

#[test]
#[doc = "The largest integer constant is accepted."]
fn max_integer_constant() {
  let tokens = Tokenizer::tokenize("32767").unwrap();

  assert_eq!(tokens, vec![Token::IntegerConstant(32767)]);
}

////////////////////////////////////////////////////////////////////////////////
// Test Cases: Lexical Errors
////////////////////////////////////////////////////////////////////////////////

#[test]
#[doc = "Integer constants above 32767 are rejected."]
fn integer_constant_out_of_range() {
  assert!(matches!(lex_error("32768"), CompileError::Lex { .. }));
  assert!(matches!(lex_error("100000"), CompileError::Lex { .. }));
}

#[test]
#[doc = "A string constant must be closed on the same line."]
fn unterminated_string() {
  assert!(matches!(lex_error("\"abc\nx\""), CompileError::Lex { .. }));
  assert!(matches!(lex_error("\"abc"), CompileError::Lex { .. }));
}

#[test]
#[doc = "A block comment must be closed before the end of input."]
fn unterminated_block_comment() {
  assert!(matches!(lex_error("/* never closed"), CompileError::Lex { .. }));
}

#[test]
#[doc = "Characters outside the token classes are rejected."]
fn invalid_character() {
  assert_eq!(
    lex_error("let x = #;"),
    CompileError::lex("Invalid character `#`")
  );
}

#[test]
#[doc = "String constants are restricted to ASCII."]
fn non_ascii_string() {
  assert!(matches!(lex_error("\"grüß\""), CompileError::Lex { .. }));
}

////////////////////////////////////////////////////////////////////////////////
// Test Cases: XML Token Stream
////////////////////////////////////////////////////////////////////////////////

#[test]
#[doc = "Token streams serialize to one escaped line per token."]
fn token_stream_xml() {
  let tokens =
    Tokenizer::tokenize("if (x < 1) { let s = \"a&b\"; }").unwrap();
  let stream = XmlSerializableTokenStream::from(tokens);

  assert_eq!(
    stream.tokens.as_slice().to_xml(0),
    "<tokens>
<keyword> if </keyword>
<symbol> ( </symbol>
<identifier> x </identifier>
<symbol> &lt; </symbol>
<integerConstant> 1 </integerConstant>
<symbol> ) </symbol>
<symbol> { </symbol>
<keyword> let </keyword>
<identifier> s </identifier>
<symbol> = </symbol>
<stringConstant> a&amp;b </stringConstant>
<symbol> ; </symbol>
<symbol> } </symbol>
</tokens>
"
  );
}
