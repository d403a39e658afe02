////////////////////////////////////////////////////////////////////////////////
// File: src/internal/xml.rs
// Description: Token stream and parse tree XML serialization
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 15.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use super::tokenize::{Keyword, Symbol, Token};

use shared::util::helpers::StrManipulation;

////////////////////////////////////////////////////////////////////////////////
// Constants
////////////////////////////////////////////////////////////////////////////////

const XML_IDENTIFIER: &str = "identifier";
const XML_INTEGER_CONSTANT: &str = "integerConstant";
const XML_KEYWORD: &str = "keyword";
const XML_STRING_CONSTANT: &str = "stringConstant";
const XML_SYMBOL: &str = "symbol";
const XML_TOKENS: &str = "tokens";

pub(crate) const XML_CLASS: &str = "class";
pub(crate) const XML_CLASS_VAR_DEC: &str = "classVarDec";
pub(crate) const XML_SUBROUTINE_DEC: &str = "subroutineDec";
pub(crate) const XML_PARAMETER_LIST: &str = "parameterList";
pub(crate) const XML_SUBROUTINE_BODY: &str = "subroutineBody";
pub(crate) const XML_VAR_DEC: &str = "varDec";
pub(crate) const XML_STATEMENTS: &str = "statements";
pub(crate) const XML_LET_STATEMENT: &str = "letStatement";
pub(crate) const XML_IF_STATEMENT: &str = "ifStatement";
pub(crate) const XML_WHILE_STATEMENT: &str = "whileStatement";
pub(crate) const XML_DO_STATEMENT: &str = "doStatement";
pub(crate) const XML_RETURN_STATEMENT: &str = "returnStatement";
pub(crate) const XML_EXPRESSION: &str = "expression";
pub(crate) const XML_TERM: &str = "term";
pub(crate) const XML_EXPRESSION_LIST: &str = "expressionList";

////////////////////////////////////////////////////////////////////////////////
// XML Tag Generation
////////////////////////////////////////////////////////////////////////////////

/// Wraps `content` in `tag`. Inline content is escaped; nested content is
/// expected to be XML already.
pub(crate) fn xml(
  tag: &str,
  content: &str,
  indent: usize,
  inline: bool,
) -> String {
  if inline {
    return format!("<{}> {} </{}>", tag, content.xml_escape(), tag)
      .indent(indent)
      + "\n";
  }

  return format!(
    "{}\n{}{}\n",
    format!("<{}>", tag).indent(indent),
    content,
    format!("</{}>", tag).indent(indent)
  );
}

////////////////////////////////////////////////////////////////////////////////
// Traits
////////////////////////////////////////////////////////////////////////////////

pub(crate) trait XmlSerialize {
  type Output;
  fn to_xml(&self, indent: usize) -> Self::Output;
}

////////////////////////////////////////////////////////////////////////////////
// Helper Structs
////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub(crate) struct XmlSerializableTokenStream {
  pub(crate) tokens: Vec<Token>,
}

impl From<Vec<Token>> for XmlSerializableTokenStream {
  fn from(tokens: Vec<Token>) -> Self {
    return Self { tokens };
  }
}

/// Parse tree written while the compilation engine consumes tokens. Nothing
/// is recorded unless created through [`XmlParseTree::recording`].
#[derive(Debug, Clone, Default)]
pub(crate) struct XmlParseTree {
  recording: bool,
  pub(crate) content: String,
}

impl XmlParseTree {
  pub(crate) fn recording() -> Self {
    return Self {
      recording: true,
      content: String::new(),
    };
  }

  pub(crate) fn open(&mut self, tag: &str, depth: usize) {
    if self.recording {
      self.content += &(format!("<{}>", tag).indent(depth) + "\n");
    }
  }

  pub(crate) fn close(&mut self, tag: &str, depth: usize) {
    if self.recording {
      self.content += &(format!("</{}>", tag).indent(depth) + "\n");
    }
  }

  pub(crate) fn leaf(&mut self, token: &Token, depth: usize) {
    if self.recording {
      self.content += &token.to_xml(depth);
    }
  }
}

////////////////////////////////////////////////////////////////////////////////
// Tokens, Symbols & Keywords
////////////////////////////////////////////////////////////////////////////////

impl XmlSerialize for Token {
  type Output = String;
  fn to_xml(&self, indent: usize) -> Self::Output {
    return match self {
      Token::Identifier(ident) => xml(XML_IDENTIFIER, ident, indent, true),
      Token::IntegerConstant(int) => {
        xml(XML_INTEGER_CONSTANT, &int.to_string(), indent, true)
      }
      Token::Keyword(kw) => kw.to_xml(indent),
      Token::StringConstant(str) => xml(XML_STRING_CONSTANT, str, indent, true),
      Token::Symbol(sym) => sym.to_xml(indent),
    };
  }
}

impl XmlSerialize for &[Token] {
  type Output = String;
  fn to_xml(&self, indent: usize) -> Self::Output {
    return xml(
      XML_TOKENS,
      &self
        .iter()
        .fold(String::new(), |acc, x| return acc + &x.to_xml(indent)),
      indent,
      false,
    );
  }
}

impl XmlSerialize for Symbol {
  type Output = String;
  fn to_xml(&self, indent: usize) -> Self::Output {
    return xml(XML_SYMBOL, &self.to_string(), indent, true);
  }
}

impl XmlSerialize for Keyword {
  type Output = String;
  fn to_xml(&self, indent: usize) -> Self::Output {
    return xml(XML_KEYWORD, &self.to_string(), indent, true);
  }
}
