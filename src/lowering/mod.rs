//! The Vue lowering pass.
//!
//! Rewrites a parsed Pug tree so that rendering it produces Vue template
//! syntax instead of evaluated output: `if`/`else if`/`else` chains become
//! sibling elements carrying `v-if`/`v-else-if`/`v-else` attributes, `each`
//! loops become elements carrying `v-for`, and buffered escaped code becomes
//! `{{ ... }}` interpolation text. Control flow is thereby deferred from
//! template compile time to the Vue runtime.
//!
//! # Architecture
//!
//! The pass is a single recursive walk over sibling lists. Each transformer
//! consumes an owned control node and returns its replacement nodes, which
//! the walk splices into the list in place; the cursor then skips the
//! replacements, so nothing is visited twice. Nodes the pass does not
//! recognize are left untouched apart from descending into their child
//! block.
//!
//! Structural assumptions (a conditional's consequent is a Block, a loop has
//! a Block body) are checked at the point of first use, never up front, and
//! violations surface as [`LowerError`].

use crate::ast::{BlockNode, Node};
use crate::error::LowerError;

mod collapse;
mod conditional;
mod each;
mod interpolation;


/// Lowers a whole template tree. The root must be the Block node every Pug
/// parse produces; the same tree is returned with control nodes rewritten.
pub fn lower_tree(tree: Node) -> Result<Node, LowerError> {
    match tree {
        Node::Block(mut root) => {
            lower_nodes(&mut root.nodes)?;
            Ok(Node::Block(root))
        }
        other => Err(LowerError::ExpectedBlock {
            context: "template root",
            found: other.kind_name().to_string(),
            span: other.span().clone(),
        }),
    }
}

/// Walks one sibling list, dispatching control nodes to their transformers
/// and splicing the results back in at the same position.
pub(crate) fn lower_nodes(nodes: &mut Vec<Node>) -> Result<(), LowerError> {
    let mut index = 0;
    while index < nodes.len() {
        if matches!(nodes[index], Node::Conditional(_)) {
            let replacements = match nodes.remove(index) {
                Node::Conditional(node) => conditional::lower_chain(node, false)?,
                _ => unreachable!("kind checked before removal"),
            };
            let inserted = replacements.len();
            nodes.splice(index..index, replacements);
            index += inserted;
        } else if matches!(nodes[index], Node::Each(_)) {
            let lowered = match nodes.remove(index) {
                Node::Each(node) => each::lower_loop(node)?,
                _ => unreachable!("kind checked before removal"),
            };
            nodes.insert(index, lowered);
            index += 1;
        } else {
            descend(&mut nodes[index])?;
            index += 1;
        }
    }
    Ok(())
}

/// Recurses into a non-control node's child block, then rewrites the node
/// itself if it is interpolatable code.
fn descend(node: &mut Node) -> Result<(), LowerError> {
    let context = match node {
        Node::Tag(_) => "tag body",
        Node::Code(_) => "code block",
        _ => "child block",
    };
    if let Some(child) = node.child_block_mut() {
        let block = expect_block_mut(child, context)?;
        lower_nodes(&mut block.nodes)?;
    }
    interpolation::rewrite(node);
    Ok(())
}

/// Dereferences an owned node that the tree shape promises is a Block.
fn expect_block(node: Node, context: &'static str) -> Result<BlockNode, LowerError> {
    match node {
        Node::Block(block) => Ok(block),
        other => Err(LowerError::ExpectedBlock {
            context,
            found: other.kind_name().to_string(),
            span: other.span().clone(),
        }),
    }
}

/// Borrowing variant of [`expect_block`] for blocks rewritten in place.
fn expect_block_mut<'a>(
    node: &'a mut Node,
    context: &'static str,
) -> Result<&'a mut BlockNode, LowerError> {
    match node {
        Node::Block(block) => Ok(block),
        other => Err(LowerError::ExpectedBlock {
            context,
            found: other.kind_name().to_string(),
            span: other.span().clone(),
        }),
    }
}
