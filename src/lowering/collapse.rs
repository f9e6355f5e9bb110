//! Branch collapsing.
//!
//! A lowered branch body is a list of sibling nodes, but a directive
//! attribute needs exactly one element to sit on. This module decides where
//! it goes:
//!
//! - empty body: a buffered Comment stands in, so the branch stays visible
//!   in the rendered output instead of silently vanishing
//! - exactly one Tag that carries no control directive yet: the directives
//!   are appended to its attribute list
//! - anything else: the body is wrapped in a synthesized `<template>`
//!   element, which Vue unwraps at render time
//!
//! The wrap covers both multi-node bodies and single nodes that cannot take
//! an attribute (Text, Comment, ...), as well as a nested chain's outermost
//! element that already holds a `v-if` or `v-for` of its own. Attaching a
//! second control directive there would silently change which condition wins,
//! so collision forces a wrapper.

use crate::ast::{Attr, BlockNode, CommentNode, Fields, Node, Span, TagNode};
use crate::directives;

/// Collapses a branch body to a single node carrying `attrs`. `origin` is
/// the span of the control node this branch came from; synthesized nodes
/// inherit it so diagnostics keep pointing at the source line.
pub(super) fn collapse_branch(
    mut body: Vec<Node>,
    attrs: Vec<Attr>,
    placeholder: &str,
    origin: &Span,
) -> Node {
    if body.len() > 1 {
        return wrap_in_template(body, attrs, origin);
    }
    match body.pop() {
        None => Node::Comment(CommentNode {
            val: placeholder.to_string(),
            buffer: true,
            span: origin.clone(),
            rest: Fields::new(),
        }),
        Some(Node::Tag(mut tag)) if !carries_control_directive(&tag.attrs) => {
            tag.attrs.extend(attrs);
            Node::Tag(tag)
        }
        Some(single) => wrap_in_template(vec![single], attrs, origin),
    }
}

/// Synthesizes `<template>` around `children`, carrying `attrs`.
fn wrap_in_template(children: Vec<Node>, attrs: Vec<Attr>, origin: &Span) -> Node {
    let block = BlockNode {
        nodes: children,
        span: origin.clone(),
        rest: Fields::new(),
    };
    Node::Tag(TagNode {
        name: directives::TEMPLATE_TAG.to_string(),
        self_closing: false,
        block: Some(Box::new(Node::Block(block))),
        attrs,
        attribute_blocks: Vec::new(),
        is_inline: false,
        span: origin.clone(),
        rest: Fields::new(),
    })
}

fn carries_control_directive(attrs: &[Attr]) -> bool {
    attrs
        .iter()
        .any(|attr| directives::is_control_directive(&attr.name))
}
