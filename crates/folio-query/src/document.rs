//! Parser for the query documents the gateway accepts.
//!
//! The accepted language is the read-only subset of GraphQL that portfolio
//! clients send:
//!
//! ```text
//! # comments run to end of line
//! query Work($type: ExperienceType = WORK, $id: ID!) {
//!   jobs: experiences(type: $type) { id role company }
//!   experience(id: $id) { __typename role }
//! }
//! ```
//!
//! Supported: named or anonymous `query` operations (including the `{ ... }`
//! shorthand), variable definitions with defaults, aliases, arguments
//! (strings, integers, booleans, `null`, enum literals, lists, variables),
//! and nested selection sets. Fragments, directives, floats, object literals,
//! block strings, mutations and subscriptions are rejected.

use std::fmt;

use crate::error::QueryError;

/// Deepest selection-set nesting accepted.
const MAX_DEPTH: usize = 32;

// ---------------------------------------------------------------------------
// AST
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub operations: Vec<Operation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub name: Option<String>,
    pub variables: Vec<VariableDefinition>,
    pub selection: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDefinition {
    pub name: String,
    pub ty: TypeRef,
    pub default: Option<Value>,
}

/// A variable's declared type, e.g. `[String!]!`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    Named(String),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    #[must_use]
    pub const fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub alias: Option<String>,
    pub name: String,
    pub arguments: Vec<Argument>,
    pub selection: Vec<Field>,
}

impl Field {
    /// Key the field's value is returned under: the alias, else the name.
    #[must_use]
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    #[must_use]
    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments
            .iter()
            .find(|arg| arg.name == name)
            .map(|arg| &arg.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub name: String,
    pub value: Value,
}

/// An argument or default value as written in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    String(String),
    Enum(String),
    List(Vec<Value>),
    Variable(String),
}

impl Document {
    /// Parse a query document.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Syntax` with the line and column of the first
    /// problem, or `QueryError::Operation` for mutations and subscriptions.
    pub fn parse(source: &str) -> Result<Self, QueryError> {
        let tokens = tokenize(source)?;
        Parser { tokens, pos: 0 }.document()
    }

    /// Pick the operation to run.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Operation` when `name` matches no operation, or
    /// when `name` is absent and the document holds more than one.
    pub fn operation(&self, name: Option<&str>) -> Result<&Operation, QueryError> {
        match name.filter(|n| !n.is_empty()) {
            Some(name) => self
                .operations
                .iter()
                .find(|op| op.name.as_deref() == Some(name))
                .ok_or_else(|| {
                    QueryError::Operation(format!("Unknown operation named \"{name}\"."))
                }),
            None => match self.operations.as_slice() {
                [only] => Ok(only),
                _ => Err(QueryError::Operation(
                    "Must provide operation name if query contains multiple operations.".into(),
                )),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Lexer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Name(String),
    Int(i64),
    Str(String),
    Punct(char),
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "Name \"{name}\""),
            Self::Int(value) => write!(f, "Int \"{value}\""),
            Self::Str(value) => write!(f, "String \"{value}\""),
            Self::Punct(c) => write!(f, "\"{c}\""),
            Self::Eof => f.write_str("<EOF>"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Pos {
    line: usize,
    column: usize,
}

fn syntax(pos: Pos, message: impl Into<String>) -> QueryError {
    QueryError::Syntax {
        message: message.into(),
        line: pos.line,
        column: pos.column,
    }
}

struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    pos: Pos,
}

impl Lexer<'_> {
    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.pos.line += 1;
            self.pos.column = 1;
        } else {
            self.pos.column += 1;
        }
        Some(c)
    }

    fn skip_ignored(&mut self) {
        while let Some(&c) = self.chars.peek() {
            match c {
                ' ' | '\t' | '\n' | '\r' | ',' | '\u{feff}' => {
                    self.bump();
                }
                '#' => {
                    while self.chars.peek().is_some_and(|&c| c != '\n') {
                        self.bump();
                    }
                }
                _ => break,
            }
        }
    }

    fn next_token(&mut self) -> Result<(Token, Pos), QueryError> {
        self.skip_ignored();
        let start = self.pos;
        let Some(c) = self.bump() else {
            return Ok((Token::Eof, start));
        };

        let token = match c {
            '{' | '}' | '(' | ')' | '[' | ']' | ':' | '$' | '=' | '!' => Token::Punct(c),
            '.' => return Err(syntax(start, "fragments are not supported")),
            '@' => return Err(syntax(start, "directives are not supported")),
            '"' => Token::Str(self.string(start)?),
            '-' | '0'..='9' => Token::Int(self.int(c, start)?),
            c if c == '_' || c.is_ascii_alphabetic() => {
                let mut name = String::from(c);
                while let Some(&n) = self.chars.peek() {
                    if n == '_' || n.is_ascii_alphanumeric() {
                        name.push(n);
                        self.bump();
                    } else {
                        break;
                    }
                }
                Token::Name(name)
            }
            other => return Err(syntax(start, format!("Unexpected character \"{other}\"."))),
        };
        Ok((token, start))
    }

    fn string(&mut self, start: Pos) -> Result<String, QueryError> {
        if self.chars.peek() == Some(&'"') {
            self.bump();
            if self.chars.peek() == Some(&'"') {
                return Err(syntax(start, "block strings are not supported"));
            }
            return Ok(String::new());
        }

        let mut value = String::new();
        loop {
            match self.bump() {
                None | Some('\n') => return Err(syntax(start, "Unterminated string.")),
                Some('"') => return Ok(value),
                Some('\\') => {
                    let escaped = match self.bump() {
                        Some('"') => '"',
                        Some('\\') => '\\',
                        Some('/') => '/',
                        Some('b') => '\u{8}',
                        Some('f') => '\u{c}',
                        Some('n') => '\n',
                        Some('r') => '\r',
                        Some('t') => '\t',
                        Some('u') => self.unicode_escape(start)?,
                        _ => return Err(syntax(start, "Invalid escape sequence in string.")),
                    };
                    value.push(escaped);
                }
                Some(c) => value.push(c),
            }
        }
    }

    fn unicode_escape(&mut self, start: Pos) -> Result<char, QueryError> {
        let mut code = 0u32;
        for _ in 0..4 {
            let digit = self
                .bump()
                .and_then(|c| c.to_digit(16))
                .ok_or_else(|| syntax(start, "Invalid unicode escape in string."))?;
            code = code * 16 + digit;
        }
        char::from_u32(code).ok_or_else(|| syntax(start, "Invalid unicode escape in string."))
    }

    fn int(&mut self, first: char, start: Pos) -> Result<i64, QueryError> {
        let mut digits = String::from(first);
        while let Some(&c) = self.chars.peek() {
            if c.is_ascii_digit() {
                digits.push(c);
                self.bump();
            } else {
                break;
            }
        }
        if matches!(self.chars.peek(), Some('.' | 'e' | 'E')) {
            return Err(syntax(start, "float values are not supported"));
        }
        digits
            .parse()
            .map_err(|_| syntax(start, format!("Invalid number \"{digits}\".")))
    }
}

fn tokenize(source: &str) -> Result<Vec<(Token, Pos)>, QueryError> {
    let mut lexer = Lexer {
        chars: source.chars().peekable(),
        pos: Pos { line: 1, column: 1 },
    };
    let mut tokens = Vec::new();
    loop {
        let (token, pos) = lexer.next_token()?;
        let done = token == Token::Eof;
        tokens.push((token, pos));
        if done {
            return Ok(tokens);
        }
    }
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

struct Parser {
    tokens: Vec<(Token, Pos)>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).map_or(&Token::Eof, |(t, _)| t)
    }

    fn position(&self) -> Pos {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map_or(Pos { line: 1, column: 1 }, |(_, p)| *p)
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn unexpected(&self, expected: &str) -> QueryError {
        syntax(
            self.position(),
            format!("Expected {expected}, found {}.", self.peek()),
        )
    }

    fn at(&self, c: char) -> bool {
        *self.peek() == Token::Punct(c)
    }

    fn eat(&mut self, c: char) -> bool {
        if self.at(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, c: char) -> Result<(), QueryError> {
        if self.eat(c) {
            Ok(())
        } else {
            Err(self.unexpected(&format!("\"{c}\"")))
        }
    }

    fn name(&mut self) -> Result<String, QueryError> {
        if let Token::Name(name) = self.peek() {
            let name = name.clone();
            self.pos += 1;
            Ok(name)
        } else {
            Err(self.unexpected("Name"))
        }
    }

    fn document(mut self) -> Result<Document, QueryError> {
        let mut operations = Vec::new();
        while *self.peek() != Token::Eof {
            operations.push(self.operation()?);
        }
        if operations.is_empty() {
            return Err(syntax(self.position(), "Unexpected <EOF>."));
        }
        if operations.len() > 1 && operations.iter().any(|op| op.name.is_none()) {
            return Err(QueryError::Operation(
                "This anonymous operation must be the only defined operation.".into(),
            ));
        }
        Ok(Document { operations })
    }

    fn operation(&mut self) -> Result<Operation, QueryError> {
        if self.at('{') {
            return Ok(Operation {
                name: None,
                variables: Vec::new(),
                selection: self.selection_set(0)?,
            });
        }

        let start = self.position();
        match self.name()?.as_str() {
            "query" => {}
            "mutation" | "subscription" => {
                return Err(QueryError::Operation(
                    "Only query operations are supported.".into(),
                ));
            }
            "fragment" => return Err(syntax(start, "fragments are not supported")),
            other => return Err(syntax(start, format!("Unexpected Name \"{other}\"."))),
        }

        let name = match self.peek() {
            Token::Name(_) => Some(self.name()?),
            _ => None,
        };
        let variables = if self.at('(') {
            self.variable_definitions()?
        } else {
            Vec::new()
        };
        Ok(Operation {
            name,
            variables,
            selection: self.selection_set(0)?,
        })
    }

    fn variable_definitions(&mut self) -> Result<Vec<VariableDefinition>, QueryError> {
        self.expect('(')?;
        let mut definitions = Vec::new();
        while !self.eat(')') {
            self.expect('$')?;
            let name = self.name()?;
            self.expect(':')?;
            let ty = self.type_ref()?;
            let default = if self.eat('=') {
                Some(self.value(true)?)
            } else {
                None
            };
            definitions.push(VariableDefinition { name, ty, default });
        }
        if definitions.is_empty() {
            return Err(self.unexpected("Variable"));
        }
        Ok(definitions)
    }

    fn type_ref(&mut self) -> Result<TypeRef, QueryError> {
        let inner = if self.eat('[') {
            let item = self.type_ref()?;
            self.expect(']')?;
            TypeRef::List(Box::new(item))
        } else {
            TypeRef::Named(self.name()?)
        };
        Ok(if self.eat('!') {
            TypeRef::NonNull(Box::new(inner))
        } else {
            inner
        })
    }

    fn selection_set(&mut self, depth: usize) -> Result<Vec<Field>, QueryError> {
        if depth >= MAX_DEPTH {
            return Err(syntax(
                self.position(),
                format!("selections nest deeper than {MAX_DEPTH} levels"),
            ));
        }
        self.expect('{')?;
        let mut fields = vec![self.field(depth)?];
        while !self.eat('}') {
            fields.push(self.field(depth)?);
        }
        Ok(fields)
    }

    fn field(&mut self, depth: usize) -> Result<Field, QueryError> {
        let first = self.name()?;
        let (alias, name) = if self.eat(':') {
            (Some(first), self.name()?)
        } else {
            (None, first)
        };
        let arguments = if self.at('(') {
            self.arguments()?
        } else {
            Vec::new()
        };
        let selection = if self.at('{') {
            self.selection_set(depth + 1)?
        } else {
            Vec::new()
        };
        Ok(Field {
            alias,
            name,
            arguments,
            selection,
        })
    }

    fn arguments(&mut self) -> Result<Vec<Argument>, QueryError> {
        self.expect('(')?;
        let mut arguments = Vec::new();
        while !self.eat(')') {
            let name = self.name()?;
            self.expect(':')?;
            let value = self.value(false)?;
            arguments.push(Argument { name, value });
        }
        if arguments.is_empty() {
            return Err(self.unexpected("Name"));
        }
        Ok(arguments)
    }

    fn value(&mut self, constant: bool) -> Result<Value, QueryError> {
        let start = self.position();
        match self.advance() {
            Token::Punct('$') if !constant => Ok(Value::Variable(self.name()?)),
            Token::Punct('$') => Err(syntax(start, "Unexpected variable in constant value.")),
            Token::Punct('[') => {
                let mut items = Vec::new();
                while !self.eat(']') {
                    items.push(self.value(constant)?);
                }
                Ok(Value::List(items))
            }
            Token::Punct('{') => Err(syntax(start, "object values are not supported")),
            Token::Int(value) => Ok(Value::Int(value)),
            Token::Str(value) => Ok(Value::String(value)),
            Token::Name(name) => Ok(match name.as_str() {
                "true" => Value::Bool(true),
                "false" => Value::Bool(false),
                "null" => Value::Null,
                _ => Value::Enum(name),
            }),
            other => Err(syntax(start, format!("Unexpected {other}."))),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn field(name: &str) -> Field {
        Field {
            alias: None,
            name: name.into(),
            arguments: vec![],
            selection: vec![],
        }
    }

    #[test]
    fn parses_shorthand_query() {
        let doc = Document::parse("{ profile { name } }").unwrap();
        let op = doc.operation(None).unwrap();
        assert_eq!(op.name, None);
        assert_eq!(
            op.selection,
            vec![Field {
                selection: vec![field("name")],
                ..field("profile")
            }]
        );
    }

    #[test]
    fn parses_header_variables_aliases_and_arguments() {
        let source = r#"
            # career page
            query Career($type: ExperienceType = WORK, $id: ID!) {
              jobs: experiences(type: $type) { id role }
              one: experience(id: $id) { __typename }
              projects(type: WEB_APP, featured: true) { slug }
              project(slug: "trail\"mix") { title }
            }
        "#;
        let doc = Document::parse(source).unwrap();
        let op = doc.operation(Some("Career")).unwrap();

        assert_eq!(
            op.variables,
            vec![
                VariableDefinition {
                    name: "type".into(),
                    ty: TypeRef::Named("ExperienceType".into()),
                    default: Some(Value::Enum("WORK".into())),
                },
                VariableDefinition {
                    name: "id".into(),
                    ty: TypeRef::NonNull(Box::new(TypeRef::Named("ID".into()))),
                    default: None,
                },
            ]
        );
        assert_eq!(op.selection[0].response_key(), "jobs");
        assert_eq!(op.selection[0].name, "experiences");
        assert_eq!(
            op.selection[0].argument("type"),
            Some(&Value::Variable("type".into()))
        );
        assert_eq!(
            op.selection[2].arguments,
            vec![
                Argument {
                    name: "type".into(),
                    value: Value::Enum("WEB_APP".into()),
                },
                Argument {
                    name: "featured".into(),
                    value: Value::Bool(true),
                },
            ]
        );
        assert_eq!(
            op.selection[3].argument("slug"),
            Some(&Value::String("trail\"mix".into()))
        );
    }

    #[test]
    fn type_refs_display_like_source() {
        let doc = Document::parse("query Q($tags: [String!]!) { tags { name } }").unwrap();
        let ty = &doc.operations[0].variables[0].ty;
        assert_eq!(ty.to_string(), "[String!]!");
        assert!(ty.is_non_null());
    }

    #[test]
    fn selects_operation_by_name() {
        let doc = Document::parse("query A { tags { id } } query B { profile { id } }").unwrap();
        assert_eq!(doc.operation(Some("B")).unwrap().selection[0].name, "profile");
        assert!(matches!(
            doc.operation(None),
            Err(QueryError::Operation(_))
        ));
        assert!(matches!(
            doc.operation(Some("C")),
            Err(QueryError::Operation(_))
        ));
    }

    #[test]
    fn syntax_errors_carry_position() {
        let err = Document::parse("{\n  profile {\n    name\n").unwrap_err();
        assert_eq!(
            err,
            QueryError::Syntax {
                message: "Expected Name, found <EOF>.".into(),
                line: 4,
                column: 1,
            }
        );
    }

    #[rstest]
    #[case("mutation { profile { id } }")]
    #[case("subscription S { tags { id } }")]
    #[case("{ tags { id } } { profile { id } }")]
    fn rejects_non_query_operations(#[case] source: &str) {
        assert!(matches!(
            Document::parse(source),
            Err(QueryError::Operation(_))
        ));
    }

    #[rstest]
    #[case("")]
    #[case("{ }")]
    #[case("{ profile { ...ProfileFields } }")]
    #[case("{ profile @include(if: true) { id } }")]
    #[case("{ skills(limit: 1.5) { id } }")]
    #[case("{ project(slug: \"open) { id } }")]
    #[case("{ project(filter: { slug: \"x\" }) { id } }")]
    #[case("query Q($x: Int = $y) { tags { id } }")]
    #[case("query Q() { tags { id } }")]
    fn rejects_unsupported_or_broken_syntax(#[case] source: &str) {
        assert!(matches!(
            Document::parse(source),
            Err(QueryError::Syntax { .. })
        ));
    }

    #[test]
    fn commas_and_comments_are_ignored() {
        let doc = Document::parse("{ tags { id, name, # trailing\n slug } }").unwrap();
        let names: Vec<&str> = doc.operations[0].selection[0]
            .selection
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, ["id", "name", "slug"]);
    }

    #[test]
    fn deep_nesting_is_rejected() {
        let source = format!("{}{}", "{ a ".repeat(40), "}".repeat(40));
        assert!(matches!(
            Document::parse(&source),
            Err(QueryError::Syntax { .. })
        ));
    }
}
