//! Loop lowering.
//!
//! An `each val, key in obj` node becomes a single element carrying
//! `v-for="(val, key) in obj"` (or `v-for="val in obj"` without an index
//! variable). When the index variable is named `key` (compared
//! case-insensitively), a bound `:key` referencing it is emitted alongside so
//! Vue keys the rendered list.

use tracing::trace;

use crate::ast::{Attr, AttrValue, EachNode, Node};
use crate::directives;
use crate::error::LowerError;

use super::{collapse, expect_block, lower_nodes};

/// Lowers one Each node into its replacement element.
pub(super) fn lower_loop(node: EachNode) -> Result<Node, LowerError> {
    let EachNode {
        obj,
        val,
        key,
        block,
        span,
        rest: _,
    } = node;

    let mut body = expect_block(*block, "loop body")?;
    lower_nodes(&mut body.nodes)?;

    // The Pug parser emits `key: null` for loops without an index variable.
    let key = key.filter(|name| !name.is_empty());
    let expr = match &key {
        Some(key) => format!("\"({val}, {key}) in {obj}\""),
        None => format!("\"{val} in {obj}\""),
    };
    trace!(expr = %expr, "lowering each loop");

    let mut attrs = vec![Attr::directive(
        directives::V_FOR,
        AttrValue::Expr(expr.clone()),
    )];
    if let Some(key) = &key
        && key.eq_ignore_ascii_case(directives::KEY_VARIABLE)
    {
        attrs.push(Attr::directive(
            directives::KEY_BINDING,
            AttrValue::quoted(key),
        ));
    }

    let placeholder = format!("empty v-for={expr}");
    Ok(collapse::collapse_branch(
        body.nodes,
        attrs,
        &placeholder,
        &span,
    ))
}
