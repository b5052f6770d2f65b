//! Compilation of generated stylesheet source into plain CSS.
//!
//! Only the subset the generator emits is understood: block comments,
//! variable declarations, nested rules using `&`, and declarations. That is
//! enough to flatten either dialect into browser-ready CSS.

use crate::error::{BuildError, Result};
use crate::styles::dialect::Dialect;
use std::collections::HashMap;

/// Turns stylesheet source text into compiled CSS.
pub trait StyleCompiler: Send + Sync {
    fn compile(&self, source: &str) -> Result<String>;
}

/// Built-in compiler for the nested-rule subset of LESS/SCSS.
#[derive(Debug, Clone)]
pub struct NestedStyleCompiler {
    sigil: char,
}

impl NestedStyleCompiler {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            sigil: dialect.sigil(),
        }
    }
}

impl Default for NestedStyleCompiler {
    fn default() -> Self {
        Self::new(Dialect::Less)
    }
}

impl StyleCompiler for NestedStyleCompiler {
    fn compile(&self, source: &str) -> Result<String> {
        let items = Parser::new(source).parse_stylesheet()?;

        let mut variables = HashMap::new();
        let mut rules = Vec::new();
        flatten(&items, &[], self.sigil, &mut variables, &mut rules)?;

        let mut out = String::new();
        for rule in rules.iter().filter(|r| !r.declarations.is_empty()) {
            out.push_str(&rule.selectors.join(", "));
            out.push_str(" {\n");
            for (property, value) in &rule.declarations {
                out.push_str(&format!("  {}: {};\n", property, value));
            }
            out.push_str("}\n");
        }
        Ok(out)
    }
}

#[derive(Debug, PartialEq)]
enum Item {
    Declaration { property: String, value: String, line: usize },
    Rule { selector: String, items: Vec<Item> },
}

struct FlatRule {
    selectors: Vec<String>,
    declarations: Vec<(String, String)>,
}

fn flatten(
    items: &[Item],
    parents: &[String],
    sigil: char,
    variables: &mut HashMap<String, String>,
    rules: &mut Vec<FlatRule>,
) -> Result<()> {
    // Reserve this block's slot so its declarations print before nested rules
    let slot = rules.len();
    rules.push(FlatRule {
        selectors: parents.to_vec(),
        declarations: Vec::new(),
    });

    for item in items {
        match item {
            Item::Declaration { property, value, line } => {
                let value = substitute(value, sigil, variables, *line)?;
                if let Some(name) = property.strip_prefix(sigil) {
                    variables.insert(name.to_string(), value);
                } else if parents.is_empty() {
                    return Err(BuildError::Compile(format!(
                        "line {}: declaration `{}` outside of a rule",
                        line, property
                    )));
                } else {
                    rules[slot].declarations.push((property.clone(), value));
                }
            }
            Item::Rule { selector, items } => {
                let selectors = resolve_selectors(parents, selector);
                flatten(items, &selectors, sigil, variables, rules)?;
            }
        }
    }
    Ok(())
}

/// Combine parent and child selector lists, expanding `&`.
fn resolve_selectors(parents: &[String], selector: &str) -> Vec<String> {
    let children: Vec<&str> = selector.split(',').map(str::trim).collect();
    if parents.is_empty() {
        return children
            .iter()
            .map(|c| c.replace('&', "").trim().to_string())
            .collect();
    }

    let mut out = Vec::new();
    for parent in parents {
        for child in &children {
            if child.contains('&') {
                out.push(child.replace('&', parent));
            } else {
                out.push(format!("{} {}", parent, child));
            }
        }
    }
    out
}

/// Replace variable references in a declaration value.
fn substitute(
    value: &str,
    sigil: char,
    variables: &HashMap<String, String>,
    line: usize,
) -> Result<String> {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    let mut quote: Option<char> = None;

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            out.push(c);
            if c == q {
                quote = None;
            }
            continue;
        }
        if c == '"' || c == '\'' {
            quote = Some(c);
            out.push(c);
            continue;
        }
        if c != sigil {
            out.push(c);
            continue;
        }

        let mut name = String::new();
        while let Some(&n) = chars.peek() {
            if n.is_alphanumeric() || n == '-' || n == '_' {
                name.push(n);
                chars.next();
            } else {
                break;
            }
        }
        match variables.get(&name) {
            Some(resolved) => out.push_str(resolved),
            None => {
                return Err(BuildError::Compile(format!(
                    "line {}: undefined variable {}{}",
                    line, sigil, name
                )))
            }
        }
    }
    Ok(out)
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
    line: usize,
}

impl Parser {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
        }
    }

    fn parse_stylesheet(&mut self) -> Result<Vec<Item>> {
        let items = self.parse_block()?;
        if self.pos < self.chars.len() {
            return Err(BuildError::Compile(format!(
                "line {}: unexpected `}}`",
                self.line
            )));
        }
        Ok(items)
    }

    /// Parse statements until a closing brace (left unconsumed) or EOF.
    fn parse_block(&mut self) -> Result<Vec<Item>> {
        let mut items = Vec::new();
        let mut text = String::new();
        let mut start_line = self.line;

        while let Some(c) = self.peek() {
            match c {
                '/' if self.peek_at(1) == Some('*') => self.skip_comment()?,
                '"' | '\'' => {
                    if text.trim().is_empty() {
                        start_line = self.line;
                    }
                    self.read_quoted(&mut text)?;
                }
                '{' => {
                    self.bump();
                    let selector = collapse_whitespace(&text);
                    if selector.is_empty() {
                        return Err(BuildError::Compile(format!(
                            "line {}: block without selector",
                            self.line
                        )));
                    }
                    let open_line = self.line;
                    let nested = self.parse_block()?;
                    if self.peek() != Some('}') {
                        return Err(BuildError::Compile(format!(
                            "line {}: unclosed block `{}`",
                            open_line, selector
                        )));
                    }
                    self.bump();
                    items.push(Item::Rule {
                        selector,
                        items: nested,
                    });
                    text.clear();
                }
                ';' => {
                    self.bump();
                    items.push(self.declaration(&text, start_line)?);
                    text.clear();
                }
                '}' => break,
                _ => {
                    if text.trim().is_empty() && !c.is_whitespace() {
                        start_line = self.line;
                    }
                    text.push(c);
                    self.bump();
                }
            }
        }

        // A final declaration may omit its semicolon
        if !text.trim().is_empty() {
            items.push(self.declaration(&text, start_line)?);
        }
        Ok(items)
    }

    fn declaration(&self, text: &str, line: usize) -> Result<Item> {
        let text = text.trim();
        match text.split_once(':') {
            Some((property, value)) if !property.trim().is_empty() => Ok(Item::Declaration {
                property: property.trim().to_string(),
                value: value.trim().to_string(),
                line,
            }),
            _ => Err(BuildError::Compile(format!(
                "line {}: expected `property: value`, found `{}`",
                line, text
            ))),
        }
    }

    fn skip_comment(&mut self) -> Result<()> {
        let open_line = self.line;
        self.bump();
        self.bump();
        while let Some(c) = self.peek() {
            if c == '*' && self.peek_at(1) == Some('/') {
                self.bump();
                self.bump();
                return Ok(());
            }
            self.bump();
        }
        Err(BuildError::Compile(format!(
            "line {}: unterminated comment",
            open_line
        )))
    }

    fn read_quoted(&mut self, text: &mut String) -> Result<()> {
        let open_line = self.line;
        let quote = self.peek().unwrap_or('"');
        text.push(quote);
        self.bump();
        while let Some(c) = self.peek() {
            text.push(c);
            self.bump();
            if c == quote {
                return Ok(());
            }
        }
        Err(BuildError::Compile(format!(
            "line {}: unterminated string",
            open_line
        )))
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) {
        if self.peek() == Some('\n') {
            self.line += 1;
        }
        self.pos += 1;
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
