//! Buffered code interpolation.
//!
//! A `= expr` line is a Code node with `buffer` set: Pug would evaluate the
//! expression at render time and write the escaped result into the output.
//! Under Vue the expression must instead survive into the emitted HTML for
//! the runtime to evaluate, so the node is rewritten into a Text node holding
//! `{{expr}}`.
//!
//! Only buffered, escaped code qualifies. Unbuffered code (`- expr`) produces
//! no output and stays a Code node, and unescaped output (`!= expr`) is left
//! alone because mustache interpolation always escapes.

use crate::ast::{Node, TextNode};
use crate::directives;

/// Rewrites `node` in place when it is a buffered, escaped Code node.
/// Everything else is left untouched.
pub(super) fn rewrite(node: &mut Node) {
    if let Node::Code(code) = node
        && code.buffer
        && code.must_escape
    {
        let text = TextNode {
            val: directives::mustache(&code.val),
            span: std::mem::take(&mut code.span),
            rest: std::mem::take(&mut code.rest),
        };
        *node = Node::Text(text);
    }
}
