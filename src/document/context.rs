//! The evaluation unit handed to lint rules.

use super::node::YamlNode;

/// One document, in both of its synchronized forms.
///
/// `content` must be a faithful parse of `source_code` at construction time;
/// nothing downstream re-derives one from the other. Rules read `content`
/// for checks and receive `source_code` separately for fixes. Contexts are
/// never mutated after construction.
#[derive(Debug, Clone)]
pub struct LintContext {
    /// Origin identifier, used only for reporting.
    pub path: String,
    /// Parsed structural representation.
    pub content: YamlNode,
    /// Exact original text, byte-for-byte, including comments and whitespace.
    pub source_code: String,
}

impl LintContext {
    /// Pair a parsed document with its original text.
    pub fn new(path: impl Into<String>, content: YamlNode, source_code: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content,
            source_code: source_code.into(),
        }
    }
}
