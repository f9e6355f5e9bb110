//! Compiler extension hooks.
//!
//! The Pug compilation pipeline exposes named hook points that plugins
//! attach to; [`CompilerPlugin`] mirrors the two this crate cares about.
//! Hooks take the tree by value and hand back the (possibly rebuilt) tree,
//! so a plugin can replace nodes wholesale without the pipeline needing to
//! know.

use crate::ast::Node;
use crate::error::LowerError;
use crate::lowering;
use crate::options::CompileOptions;

/// A transformation attached to the template compilation pipeline.
///
/// Both hooks default to the identity transform, so implementors override
/// only the phase they participate in.
pub trait CompilerPlugin {
    /// Runs immediately after parsing, before linking and inlining.
    fn post_parse(&self, tree: Node, _options: &CompileOptions) -> Result<Node, LowerError> {
        Ok(tree)
    }

    /// Runs on the fully assembled tree, right before code generation.
    fn pre_codegen(&self, tree: Node, _options: &CompileOptions) -> Result<Node, LowerError> {
        Ok(tree)
    }
}

/// The Vue lowering pass as a pipeline plugin.
///
/// Hooked at `pre_codegen` so that includes and extends have already been
/// resolved into the tree; every control node, wherever it came from, gets
/// rewritten in one sweep.
pub struct VueLowering;

impl CompilerPlugin for VueLowering {
    fn pre_codegen(&self, tree: Node, options: &CompileOptions) -> Result<Node, LowerError> {
        let _span = tracing::debug_span!(
            "vue_lowering",
            filename = options.filename.as_deref().unwrap_or("<anonymous>")
        )
        .entered();
        lowering::lower_tree(tree)
    }
}
