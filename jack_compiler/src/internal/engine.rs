////////////////////////////////////////////////////////////////////////////////
// File: src/internal/engine.rs
// Description: Single pass parser and VM code generator
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 15.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use super::{
  error::CompileError,
  labels::LabelGenerator,
  symbols::{SymbolTable, Variable},
  tokenize::{Keyword, Symbol, Token, KEYWORD_THIS},
  vm::{
    SymbolKind,
    VmCommand::{self, *},
    VmSegment, MEMORY_ALLOC, STRING_APPEND_CHAR, STRING_NEW,
  },
  writer::VmWriter,
  xml::{
    XmlParseTree, XML_CLASS, XML_CLASS_VAR_DEC, XML_DO_STATEMENT,
    XML_EXPRESSION, XML_EXPRESSION_LIST, XML_IF_STATEMENT, XML_LET_STATEMENT,
    XML_PARAMETER_LIST, XML_RETURN_STATEMENT, XML_STATEMENTS,
    XML_SUBROUTINE_BODY, XML_SUBROUTINE_DEC, XML_TERM, XML_VAR_DEC,
    XML_WHILE_STATEMENT,
  },
};

use anyhow::Result;

////////////////////////////////////////////////////////////////////////////////
// Constants
////////////////////////////////////////////////////////////////////////////////

const END_OF_FILE: &str = "end of file";

/// Deepest parse tree node, counted from `class`.
pub(crate) const MAX_NESTING_DEPTH: usize = 256;

////////////////////////////////////////////////////////////////////////////////
// Compilation Results
////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub(crate) struct ClassContext {
  pub(crate) name: String,
  pub(crate) symbols: SymbolTable,
}

/// Everything produced for one class: the emitted commands plus the symbol
/// tables of the class and of each subroutine in declaration order.
#[derive(Debug, Clone)]
pub(crate) struct VmProgram {
  pub(crate) class: ClassContext,
  pub(crate) subroutines: Vec<(String, SymbolTable)>,
  pub(crate) writer: VmWriter,
}

impl VmProgram {
  pub(crate) fn commands(&self) -> &[VmCommand] {
    return self.writer.commands();
  }
}

////////////////////////////////////////////////////////////////////////////////
// Scopes
////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum SubroutineKind {
  Constructor,
  Function,
  Method,
}

impl SubroutineKind {
  fn from_token(token: &Token) -> Option<Self> {
    match token {
      Token::Keyword(Keyword::Constructor) => {
        return Some(SubroutineKind::Constructor)
      }
      Token::Keyword(Keyword::Function) => {
        return Some(SubroutineKind::Function)
      }
      Token::Keyword(Keyword::Method) => return Some(SubroutineKind::Method),
      _ => return None,
    }
  }
}

fn class_var_kind(token: &Token) -> Option<SymbolKind> {
  match token {
    Token::Keyword(keyword) => return SymbolKind::from_class_keyword(*keyword),
    _ => return None,
  }
}

/// Name resolution inside a subroutine body. The subroutine table shadows the
/// class table.
struct Scope<'s> {
  class: &'s ClassContext,
  subroutine: &'s SymbolTable,
}

impl<'s> Scope<'s> {
  fn resolve(&self, name: &str) -> Option<&'s Variable> {
    if let Some(variable) = self.subroutine.lookup(name) {
      return Some(variable);
    }

    return self.class.symbols.lookup(name);
  }

  fn require(&self, name: &str) -> Result<&'s Variable> {
    return self.resolve(name).ok_or_else(|| {
      return anyhow::Error::from(CompileError::UnresolvedName {
        name: name.to_string(),
      });
    });
  }
}

////////////////////////////////////////////////////////////////////////////////
// Compilation Engine
////////////////////////////////////////////////////////////////////////////////

pub(crate) struct CompilationEngine<'a, 'l> {
  tokens: &'a [Token],
  cursor: usize,
  depth: usize,
  labels: &'l mut LabelGenerator,
  writer: VmWriter,
  subroutines: Vec<(String, SymbolTable)>,
  tree: XmlParseTree,
}

impl<'a, 'l> CompilationEngine<'a, 'l> {
  /// Compiles exactly one class. `labels` carries the label counters across
  /// every class of a run.
  pub(crate) fn compile(
    tokens: &'a [Token],
    labels: &'l mut LabelGenerator,
  ) -> Result<VmProgram> {
    let (program, _) =
      CompilationEngine::run(tokens, labels, XmlParseTree::default())?;
    return Ok(program);
  }

  /// Parses exactly one class and returns its parse tree. The generated code
  /// and labels of this pass are discarded.
  pub(crate) fn parse_tree(tokens: &'a [Token]) -> Result<XmlParseTree> {
    let mut labels = LabelGenerator::default();
    let (_, tree) =
      CompilationEngine::run(tokens, &mut labels, XmlParseTree::recording())?;
    return Ok(tree);
  }

  fn run(
    tokens: &'a [Token],
    labels: &'l mut LabelGenerator,
    tree: XmlParseTree,
  ) -> Result<(VmProgram, XmlParseTree)> {
    let mut engine = Self {
      tokens,
      cursor: 0,
      depth: 0,
      labels,
      writer: VmWriter::default(),
      subroutines: Vec::new(),
      tree,
    };

    let class = engine.compile_class()?;

    if engine.peek().is_some() {
      return Err(engine.unexpected(END_OF_FILE));
    }

    let program = VmProgram {
      class,
      subroutines: engine.subroutines,
      writer: engine.writer,
    };

    return Ok((program, engine.tree));
  }

  //////////////////////////////////////////////////////////////////////////////
  // Token Cursor
  //////////////////////////////////////////////////////////////////////////////

  fn peek(&self) -> Option<&'a Token> {
    return self.tokens.get(self.cursor);
  }

  fn advance(&mut self) {
    if let Some(token) = self.peek() {
      self.tree.leaf(token, self.depth);
    }

    self.cursor += 1;
  }

  /// Enters a parse tree node. Fails once the tree gets deeper than
  /// [`MAX_NESTING_DEPTH`].
  fn open(&mut self, tag: &str) -> Result<()> {
    if self.depth >= MAX_NESTING_DEPTH {
      return Err(
        CompileError::limit(format!(
          "Nesting exceeds {} levels at `{}`",
          MAX_NESTING_DEPTH, tag
        ))
        .into(),
      );
    }

    self.tree.open(tag, self.depth);
    self.depth += 1;
    return Ok(());
  }

  fn close(&mut self, tag: &str) {
    self.depth -= 1;
    self.tree.close(tag, self.depth);
  }

  fn next_is_symbol(&self, symbol: Symbol) -> bool {
    return self.peek().is_some_and(|token| return token.is_symbol(symbol));
  }

  fn next_is_keyword(&self, keyword: Keyword) -> bool {
    return self.peek().is_some_and(|token| return token.is_keyword(keyword));
  }

  fn unexpected(&self, expected: &str) -> anyhow::Error {
    let found = self
      .peek()
      .map(|token| return token.to_string())
      .unwrap_or_else(|| return String::from(END_OF_FILE));

    return CompileError::syntax(expected, found).into();
  }

  fn expect_symbol(&mut self, symbol: Symbol) -> Result<()> {
    if !self.next_is_symbol(symbol) {
      return Err(self.unexpected(&format!("symbol `{}`", symbol)));
    }

    self.advance();
    return Ok(());
  }

  fn expect_keyword(&mut self, keyword: Keyword) -> Result<()> {
    if !self.next_is_keyword(keyword) {
      return Err(self.unexpected(&format!("keyword `{}`", keyword)));
    }

    self.advance();
    return Ok(());
  }

  fn expect_identifier(&mut self, what: &str) -> Result<&'a str> {
    let Some(Token::Identifier(name)) = self.peek() else {
      return Err(self.unexpected(what));
    };

    self.advance();
    return Ok(name.as_str());
  }

  /// `int`, `char`, `boolean` or a class name.
  fn accept_type(&mut self) -> Option<String> {
    let r#type = match self.peek()? {
      Token::Keyword(keyword) if keyword.is_primitive_type() => {
        keyword.to_string()
      }
      Token::Identifier(class_name) => class_name.clone(),
      _ => return None,
    };

    self.advance();
    return Some(r#type);
  }

  fn expect_type(&mut self) -> Result<String> {
    return match self.accept_type() {
      Some(r#type) => Ok(r#type),
      None => Err(self.unexpected("type")),
    };
  }

  //////////////////////////////////////////////////////////////////////////////
  // Program Structure
  //////////////////////////////////////////////////////////////////////////////

  fn compile_class(&mut self) -> Result<ClassContext> {
    self.open(XML_CLASS)?;
    self.expect_keyword(Keyword::Class)?;
    let name = self.expect_identifier("class name")?;
    self.expect_symbol(Symbol::LeftCurlyBrace)?;

    let mut class = ClassContext {
      name: name.to_string(),
      symbols: SymbolTable::default(),
    };

    while let Some(kind) = self.peek().and_then(class_var_kind) {
      self.compile_class_var_dec(&mut class, kind)?;
    }

    while let Some(kind) = self.peek().and_then(SubroutineKind::from_token) {
      self.compile_subroutine(&class, kind)?;
    }

    self.expect_symbol(Symbol::RightCurlyBrace)?;
    self.close(XML_CLASS);

    return Ok(class);
  }

  fn compile_class_var_dec(
    &mut self,
    class: &mut ClassContext,
    kind: SymbolKind,
  ) -> Result<()> {
    self.open(XML_CLASS_VAR_DEC)?;
    // `static` | `field`
    self.advance();

    let r#type = self.expect_type()?;
    self.compile_var_names(&mut class.symbols, &r#type, kind)?;
    self.close(XML_CLASS_VAR_DEC);

    return Ok(());
  }

  /// `name (',' name)* ';'`, every name declared with the same type and kind.
  fn compile_var_names(
    &mut self,
    symbols: &mut SymbolTable,
    r#type: &str,
    kind: SymbolKind,
  ) -> Result<()> {
    loop {
      let name = self.expect_identifier("variable name")?;
      symbols.insert(name, r#type, kind)?;

      if !self.next_is_symbol(Symbol::Comma) {
        break;
      }

      self.advance();
    }

    return self.expect_symbol(Symbol::Semicolon);
  }

  fn compile_subroutine(
    &mut self,
    class: &ClassContext,
    kind: SubroutineKind,
  ) -> Result<()> {
    self.open(XML_SUBROUTINE_DEC)?;
    // `constructor` | `function` | `method`
    self.advance();

    if self.next_is_keyword(Keyword::Void) {
      self.advance();
    } else if self.accept_type().is_none() {
      return Err(self.unexpected("keyword `void` or type"));
    }

    let name = self.expect_identifier("subroutine name")?;
    let mut symbols = SymbolTable::default();

    if kind == SubroutineKind::Method {
      symbols.insert(KEYWORD_THIS, &class.name, SymbolKind::Argument)?;
    }

    self.expect_symbol(Symbol::LeftParen)?;
    self.compile_parameter_list(&mut symbols)?;
    self.expect_symbol(Symbol::RightParen)?;

    self.open(XML_SUBROUTINE_BODY)?;
    self.expect_symbol(Symbol::LeftCurlyBrace)?;

    while self.next_is_keyword(Keyword::Var) {
      self.compile_var_dec(&mut symbols)?;
    }

    // Locals are only known once every `var` declaration has been read.
    let full_name = format!("{}.{}", class.name, name);
    self
      .writer
      .emit(function(full_name.clone(), symbols.count(SymbolKind::Local)));

    match kind {
      SubroutineKind::Constructor => self.writer.emit_all([
        push(VmSegment::Constant, class.symbols.count(SymbolKind::Field)),
        call(String::from(MEMORY_ALLOC), 1),
        pop(VmSegment::Pointer, 0),
      ]),
      SubroutineKind::Method => self.writer.emit_all([
        push(VmSegment::Argument, 0),
        pop(VmSegment::Pointer, 0),
      ]),
      SubroutineKind::Function => {}
    }

    let scope = Scope {
      class,
      subroutine: &symbols,
    };

    self.compile_statements(&scope)?;
    self.expect_symbol(Symbol::RightCurlyBrace)?;
    self.close(XML_SUBROUTINE_BODY);
    self.close(XML_SUBROUTINE_DEC);

    self.subroutines.push((full_name, symbols));

    return Ok(());
  }

  fn compile_parameter_list(
    &mut self,
    symbols: &mut SymbolTable,
  ) -> Result<()> {
    self.open(XML_PARAMETER_LIST)?;

    if !self.next_is_symbol(Symbol::RightParen) {
      loop {
        let r#type = self.expect_type()?;
        let name = self.expect_identifier("parameter name")?;
        symbols.insert(name, &r#type, SymbolKind::Argument)?;

        if !self.next_is_symbol(Symbol::Comma) {
          break;
        }

        self.advance();
      }
    }

    self.close(XML_PARAMETER_LIST);
    return Ok(());
  }

  fn compile_var_dec(&mut self, symbols: &mut SymbolTable) -> Result<()> {
    self.open(XML_VAR_DEC)?;
    self.expect_keyword(Keyword::Var)?;
    let r#type = self.expect_type()?;

    self.compile_var_names(symbols, &r#type, SymbolKind::Local)?;
    self.close(XML_VAR_DEC);

    return Ok(());
  }

  //////////////////////////////////////////////////////////////////////////////
  // Statements
  //////////////////////////////////////////////////////////////////////////////

  fn compile_statements(&mut self, scope: &Scope) -> Result<()> {
    self.open(XML_STATEMENTS)?;

    loop {
      match self.peek() {
        Some(Token::Keyword(Keyword::Let)) => self.compile_let(scope)?,
        Some(Token::Keyword(Keyword::If)) => self.compile_if(scope)?,
        Some(Token::Keyword(Keyword::While)) => self.compile_while(scope)?,
        Some(Token::Keyword(Keyword::Do)) => self.compile_do(scope)?,
        Some(Token::Keyword(Keyword::Return)) => self.compile_return(scope)?,
        _ => break,
      }
    }

    self.close(XML_STATEMENTS);
    return Ok(());
  }

  fn compile_let(&mut self, scope: &Scope) -> Result<()> {
    self.open(XML_LET_STATEMENT)?;
    self.expect_keyword(Keyword::Let)?;
    let name = self.expect_identifier("variable name")?;
    let target = scope.require(name)?;

    if !self.next_is_symbol(Symbol::LeftSquareBracket) {
      self.expect_symbol(Symbol::Eq)?;
      self.compile_expression(scope)?;
      self.expect_symbol(Symbol::Semicolon)?;

      self.writer.emit(target.pop());
      self.close(XML_LET_STATEMENT);
      return Ok(());
    }

    self.advance();
    self.writer.emit(target.push());
    self.compile_expression(scope)?;
    self.expect_symbol(Symbol::RightSquareBracket)?;
    self.writer.emit(add);

    self.expect_symbol(Symbol::Eq)?;
    self.compile_expression(scope)?;
    self.expect_symbol(Symbol::Semicolon)?;

    // The right-hand side may overwrite `pointer 1`.
    self.writer.emit_all([
      pop(VmSegment::Temp, 0),
      pop(VmSegment::Pointer, 1),
      push(VmSegment::Temp, 0),
      pop(VmSegment::That, 0),
    ]);
    self.close(XML_LET_STATEMENT);

    return Ok(());
  }

  fn compile_if(&mut self, scope: &Scope) -> Result<()> {
    self.open(XML_IF_STATEMENT)?;
    self.expect_keyword(Keyword::If)?;
    let labels = self.labels.new_if()?;

    self.expect_symbol(Symbol::LeftParen)?;
    self.compile_expression(scope)?;
    self.expect_symbol(Symbol::RightParen)?;
    self.writer.emit_all([not, if_goto(labels.start.clone())]);

    self.expect_symbol(Symbol::LeftCurlyBrace)?;
    self.compile_statements(scope)?;
    self.expect_symbol(Symbol::RightCurlyBrace)?;
    self
      .writer
      .emit_all([goto(labels.end.clone()), label(labels.start)]);

    if self.next_is_keyword(Keyword::Else) {
      self.advance();
      self.expect_symbol(Symbol::LeftCurlyBrace)?;
      self.compile_statements(scope)?;
      self.expect_symbol(Symbol::RightCurlyBrace)?;
    }

    self.writer.emit(label(labels.end));
    self.close(XML_IF_STATEMENT);

    return Ok(());
  }

  fn compile_while(&mut self, scope: &Scope) -> Result<()> {
    self.open(XML_WHILE_STATEMENT)?;
    self.expect_keyword(Keyword::While)?;
    let labels = self.labels.new_while()?;

    self.writer.emit(label(labels.start.clone()));

    self.expect_symbol(Symbol::LeftParen)?;
    self.compile_expression(scope)?;
    self.expect_symbol(Symbol::RightParen)?;
    self.writer.emit_all([not, if_goto(labels.end.clone())]);

    self.expect_symbol(Symbol::LeftCurlyBrace)?;
    self.compile_statements(scope)?;
    self.expect_symbol(Symbol::RightCurlyBrace)?;
    self.writer.emit_all([goto(labels.start), label(labels.end)]);
    self.close(XML_WHILE_STATEMENT);

    return Ok(());
  }

  fn compile_do(&mut self, scope: &Scope) -> Result<()> {
    self.open(XML_DO_STATEMENT)?;
    self.expect_keyword(Keyword::Do)?;
    let name = self.expect_identifier("subroutine name")?;
    self.compile_subroutine_call(scope, name)?;
    self.expect_symbol(Symbol::Semicolon)?;

    // Discard the return value.
    self.writer.emit(pop(VmSegment::Temp, 0));
    self.close(XML_DO_STATEMENT);

    return Ok(());
  }

  fn compile_return(&mut self, scope: &Scope) -> Result<()> {
    self.open(XML_RETURN_STATEMENT)?;
    self.expect_keyword(Keyword::Return)?;

    if self.next_is_symbol(Symbol::Semicolon) {
      self.writer.emit(push(VmSegment::Constant, 0));
    } else {
      self.compile_expression(scope)?;
    }

    self.expect_symbol(Symbol::Semicolon)?;
    self.writer.emit(r#return);
    self.close(XML_RETURN_STATEMENT);

    return Ok(());
  }

  //////////////////////////////////////////////////////////////////////////////
  // Expressions
  //////////////////////////////////////////////////////////////////////////////

  /// Operators have no precedence and associate to the left.
  fn compile_expression(&mut self, scope: &Scope) -> Result<()> {
    self.open(XML_EXPRESSION)?;
    self.compile_term(scope)?;

    while let Some(op) = self.peek().and_then(Token::binary_operator) {
      self.advance();
      self.compile_term(scope)?;
      self.writer.emit(op.into());
    }

    self.close(XML_EXPRESSION);
    return Ok(());
  }

  fn compile_term(&mut self, scope: &Scope) -> Result<()> {
    let Some(token) = self.peek() else {
      return Err(self.unexpected("term"));
    };

    self.open(XML_TERM)?;

    match token {
      Token::IntegerConstant(value) => {
        self.advance();
        self.writer.emit(push(VmSegment::Constant, *value));
      }
      Token::StringConstant(string) => {
        self.advance();
        self.compile_string_constant(string)?;
      }
      Token::Keyword(Keyword::True) => {
        self.advance();
        self.writer.emit_all([push(VmSegment::Constant, 1), neg]);
      }
      Token::Keyword(Keyword::False | Keyword::Null) => {
        self.advance();
        self.writer.emit(push(VmSegment::Constant, 0));
      }
      Token::Keyword(Keyword::This) => {
        self.advance();
        self.writer.emit(push(VmSegment::Pointer, 0));
      }
      Token::Symbol(Symbol::LeftParen) => {
        self.advance();
        self.compile_expression(scope)?;
        self.expect_symbol(Symbol::RightParen)?;
      }
      Token::Symbol(symbol) => {
        let Some(op) = symbol.unary_operator() else {
          return Err(self.unexpected("term"));
        };

        self.advance();
        self.compile_term(scope)?;
        self.writer.emit(op.into());
      }
      Token::Identifier(name) => {
        self.advance();
        self.compile_identifier_term(scope, name)?;
      }
      Token::Keyword(_) => return Err(self.unexpected("term")),
    }

    self.close(XML_TERM);
    return Ok(());
  }

  /// Builds the string at runtime one character at a time.
  fn compile_string_constant(&mut self, string: &str) -> Result<()> {
    // ASCII content is guaranteed by the tokenizer.
    let length = u16::try_from(string.len()).map_err(|_| {
      return CompileError::limit("String constant is too long");
    })?;

    self.writer.emit_all([
      push(VmSegment::Constant, length),
      call(String::from(STRING_NEW), 1),
    ]);

    for byte in string.bytes() {
      self.writer.emit_all([
        push(VmSegment::Constant, u16::from(byte)),
        call(String::from(STRING_APPEND_CHAR), 2),
      ]);
    }

    return Ok(());
  }

  /// The identifier has already been consumed; the following token decides
  /// between array access, subroutine call and plain variable.
  fn compile_identifier_term(
    &mut self,
    scope: &Scope,
    name: &'a str,
  ) -> Result<()> {
    match self.peek() {
      Some(Token::Symbol(Symbol::LeftSquareBracket)) => {
        let array = scope.require(name)?;

        self.advance();
        self.writer.emit(array.push());
        self.compile_expression(scope)?;
        self.expect_symbol(Symbol::RightSquareBracket)?;

        self.writer.emit_all([
          add,
          pop(VmSegment::Pointer, 1),
          push(VmSegment::That, 0),
        ]);
      }
      Some(Token::Symbol(Symbol::LeftParen | Symbol::Dot)) => {
        self.compile_subroutine_call(scope, name)?;
      }
      _ => self.writer.emit(scope.require(name)?.push()),
    }

    return Ok(());
  }

  /// `name(args)` calls a method on `this`. `Qualifier.name(args)` is a
  /// method call if the qualifier is a variable, otherwise a call of a
  /// function or constructor of the class `Qualifier`.
  fn compile_subroutine_call(
    &mut self,
    scope: &Scope,
    name: &'a str,
  ) -> Result<()> {
    let (target, receiver_args) = if self.next_is_symbol(Symbol::Dot) {
      self.advance();
      let subroutine = self.expect_identifier("subroutine name")?;

      match scope.resolve(name) {
        Some(receiver) => {
          self.writer.emit(receiver.push());
          (format!("{}.{}", receiver.r#type, subroutine), 1)
        }
        None => (format!("{}.{}", name, subroutine), 0),
      }
    } else {
      self.writer.emit(push(VmSegment::Pointer, 0));
      (format!("{}.{}", scope.class.name, name), 1)
    };

    self.expect_symbol(Symbol::LeftParen)?;
    let n_args = self.compile_expression_list(scope, &target)?;
    self.expect_symbol(Symbol::RightParen)?;

    let n_args = n_args
      .checked_add(receiver_args)
      .ok_or_else(|| return too_many_arguments(&target))?;

    self.writer.emit(call(target, n_args));

    return Ok(());
  }

  /// Returns the number of expressions compiled.
  fn compile_expression_list(
    &mut self,
    scope: &Scope,
    target: &str,
  ) -> Result<u16> {
    self.open(XML_EXPRESSION_LIST)?;
    let mut count: u16 = 0;

    if !self.next_is_symbol(Symbol::RightParen) {
      loop {
        self.compile_expression(scope)?;
        count = count
          .checked_add(1)
          .ok_or_else(|| return too_many_arguments(target))?;

        if !self.next_is_symbol(Symbol::Comma) {
          break;
        }

        self.advance();
      }
    }

    self.close(XML_EXPRESSION_LIST);
    return Ok(count);
  }
}

fn too_many_arguments(target: &str) -> CompileError {
  return CompileError::limit(format!(
    "More than {} arguments in call of `{}`",
    u16::MAX,
    target
  ));
}
