//! C# source emission for constant containers.
//!
//! The output is a `static class` holding one `public const string` per entry,
//! optionally wrapped in a namespace. Nothing time- or machine-dependent is
//! written, so identical input always renders to identical bytes.

use std::fmt::Write;

use super::identifier::Identifier;

const INDENT: &str = "    ";

const HEADER: &str = "\
// <auto-generated>
//     This code was generated by unity-constants.
//     Changes to this file will be lost when the code is regenerated.
// </auto-generated>
";

/// Reserved C# keywords. Contextual keywords (`var`, `value`, ...) are valid
/// member names and are not listed.
const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// One constant: its code name and the string it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantEntry {
    pub identifier: Identifier,
    pub value: String,
}

impl ConstantEntry {
    pub fn new(identifier: Identifier, value: impl Into<String>) -> Self {
        Self {
            identifier,
            value: value.into(),
        }
    }
}

/// Everything needed to render one constants file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub namespace: Option<String>,
    pub container: Identifier,
    pub entries: Vec<ConstantEntry>,
}

impl GeneratedFile {
    /// Renders the file. `None` when there is nothing to declare.
    pub fn render(&self) -> Option<String> {
        emit(self.namespace.as_deref(), &self.container, &self.entries)
    }
}

/// Renders a static class named `container` with one string constant per
/// entry, in entry order.
///
/// Returns `None` for an empty entry list: an empty class is never written.
pub fn emit(
    namespace: Option<&str>,
    container: &Identifier,
    entries: &[ConstantEntry],
) -> Option<String> {
    if entries.is_empty() {
        return None;
    }

    let namespace = namespace.filter(|ns| !ns.is_empty());
    let base = if namespace.is_some() { INDENT } else { "" };

    let mut out = String::from(HEADER);
    out.push('\n');

    if let Some(ns) = namespace {
        let segments: Vec<String> = ns.split('.').map(escape_identifier).collect();
        let _ = writeln!(out, "namespace {}", segments.join("."));
        out.push_str("{\n");
    }

    let _ = writeln!(
        out,
        "{}public static class {}",
        base,
        escape_identifier(container.as_str())
    );
    let _ = writeln!(out, "{}{{", base);
    for entry in entries {
        let _ = writeln!(
            out,
            "{}{}public const string {} = {};",
            base,
            INDENT,
            escape_identifier(entry.identifier.as_str()),
            string_literal(&entry.value)
        );
    }
    let _ = writeln!(out, "{}}}", base);

    if namespace.is_some() {
        out.push_str("}\n");
    }

    Some(out)
}

/// Prefixes reserved keywords with `@` so they can be used as names.
pub fn escape_identifier(name: &str) -> String {
    if is_keyword(name) {
        format!("@{}", name)
    } else {
        name.to_string()
    }
}

pub fn is_keyword(name: &str) -> bool {
    CSHARP_KEYWORDS.contains(&name)
}

/// Quotes `value` as a regular C# string literal.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\0' => out.push_str("\\0"),
            '\u{7}' => out.push_str("\\a"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{b}' => out.push_str("\\v"),
            '\u{2028}' | '\u{2029}' => {
                let _ = write!(out, "\\u{:04X}", ch as u32);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
