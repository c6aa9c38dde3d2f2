//! Colorized JSON rendering for query results
//!
//! Each token type gets its own color: keys blue, strings green, numbers
//! cyan, booleans yellow, null magenta. Punctuation stays uncolored, so
//! removing the ANSI sequences always leaves valid JSON behind.

use colored::*;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces per nesting level
    pub indent: usize,
    /// Emit ANSI color sequences
    pub color: bool,
    /// Single line, no whitespace
    pub compact: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            color: true,
            compact: false,
        }
    }
}

/// Render a JSON document for the terminal
pub fn render(value: &Value, options: &RenderOptions) -> String {
    let mut renderer = Renderer {
        out: String::new(),
        options,
    };
    renderer.write_value(value, 0);
    renderer.out
}

struct Renderer<'a> {
    out: String,
    options: &'a RenderOptions,
}

impl Renderer<'_> {
    fn write_value(&mut self, value: &Value, depth: usize) {
        match value {
            Value::Null => self.write_token("null", |s| s.magenta()),
            Value::Bool(b) => self.write_token(&b.to_string(), |s| s.yellow()),
            Value::Number(n) => self.write_token(&n.to_string(), |s| s.cyan()),
            Value::String(s) => self.write_token(&quote(s), |s| s.green()),
            Value::Array(items) => {
                if items.is_empty() {
                    self.out.push_str("[]");
                    return;
                }
                self.out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.out.push(',');
                    }
                    self.newline(depth + 1);
                    self.write_value(item, depth + 1);
                }
                self.newline(depth);
                self.out.push(']');
            }
            Value::Object(map) => {
                if map.is_empty() {
                    self.out.push_str("{}");
                    return;
                }
                self.out.push('{');
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        self.out.push(',');
                    }
                    self.newline(depth + 1);
                    self.write_token(&quote(key), |s| s.blue());
                    self.out.push(':');
                    if !self.options.compact {
                        self.out.push(' ');
                    }
                    self.write_value(item, depth + 1);
                }
                self.newline(depth);
                self.out.push('}');
            }
        }
    }

    fn write_token(&mut self, text: &str, paint: fn(&str) -> ColoredString) {
        if self.options.color {
            self.out.push_str(&paint(text).to_string());
        } else {
            self.out.push_str(text);
        }
    }

    fn newline(&mut self, depth: usize) {
        if self.options.compact {
            return;
        }
        self.out.push('\n');
        self.out
            .extend(std::iter::repeat(' ').take(depth * self.options.indent));
    }
}

/// JSON string literal with escapes
fn quote(s: &str) -> String {
    Value::from(s).to_string()
}
