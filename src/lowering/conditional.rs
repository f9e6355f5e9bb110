//! Conditional chain lowering.
//!
//! A parsed `if`/`else if`/`else` chain arrives as one Conditional node whose
//! `alternate` links to the next branch. Lowering flattens the chain into one
//! sibling node per branch: the first carries `v-if`, continuations carry
//! `v-else-if`, and a trailing `else` Block carries a valueless `v-else`.
//! Branch bodies are lowered first, so nested chains are already in directive
//! form before their branch collapses around them.

use tracing::trace;

use crate::ast::{Attr, AttrValue, ConditionalNode, Node};
use crate::directives;
use crate::error::LowerError;

use super::{collapse, expect_block, lower_nodes};

/// Lowers one Conditional and every branch chained behind it, returning the
/// replacement siblings in source order. `is_alternate` is true when this
/// node was reached through another conditional's `alternate` link, which is
/// what turns `v-if` into `v-else-if`.
pub(super) fn lower_chain(
    node: ConditionalNode,
    is_alternate: bool,
) -> Result<Vec<Node>, LowerError> {
    let ConditionalNode {
        test,
        consequent,
        alternate,
        span,
        rest: _,
    } = node;

    let name = if is_alternate {
        directives::V_ELSE_IF
    } else {
        directives::V_IF
    };
    trace!(directive = name, test = %test, "lowering conditional branch");

    let mut consequent = expect_block(*consequent, "conditional consequent")?;
    lower_nodes(&mut consequent.nodes)?;

    let attr = Attr::directive(name, AttrValue::quoted(&test));
    let placeholder = format!("empty {name}={test}");
    let mut lowered = vec![collapse::collapse_branch(
        consequent.nodes,
        vec![attr],
        &placeholder,
        &span,
    )];

    if let Some(alternate) = alternate {
        match *alternate {
            Node::Block(mut block) => {
                lower_nodes(&mut block.nodes)?;
                let attr = Attr::directive(directives::V_ELSE, AttrValue::Literal(true));
                let else_span = block.span.clone();
                lowered.push(collapse::collapse_branch(
                    block.nodes,
                    vec![attr],
                    "empty v-else",
                    &else_span,
                ));
            }
            Node::Conditional(next) => {
                lowered.extend(lower_chain(next, true)?);
            }
            other => {
                return Err(LowerError::UnexpectedAlternate {
                    found: other.kind_name().to_string(),
                    span: other.span().clone(),
                });
            }
        }
    }

    Ok(lowered)
}
