//! Lowers parsed Pug template trees into Vue directive form.
//!
//! Pug's own renderer evaluates `if`, `each` and `= expr` at compile time.
//! When the rendered markup is handed to Vue as a template, that is too
//! early: the data lives in the component, not in the template compiler. The
//! [`lowering`] pass rewrites those control nodes into plain markup carrying
//! `v-if`/`v-else-if`/`v-else`, `v-for`/`:key` and `{{ }}` interpolation, so
//! control flow runs where the data is.
//!
//! The pass plugs into a compilation pipeline via [`plugin::VueLowering`],
//! and [`loader::Loader`] wires it between a [`loader::TemplateCompiler`]'s
//! parse and render phases the way a bundler integration would.

// Typed view of the Pug AST JSON interchange format
pub mod ast;
pub use ast::{Attr, AttrValue, Node, Span};
#[cfg(test)]
#[path = "tests/ast_tests.rs"]
mod ast_tests;

// Names of the emitted Vue template dialect
pub mod directives;

// Lowering and pipeline errors
pub mod error;
pub use error::{CompileError, LowerError};

// The lowering pass itself
pub mod lowering;
pub use lowering::lower_tree;

// Compilation pipeline glue
pub mod loader;
pub mod options;
pub mod plugin;
pub use loader::{DependencyTracker, Loader, Parsed, TemplateCompiler};
pub use options::CompileOptions;
pub use plugin::{CompilerPlugin, VueLowering};

// PUGVUE_LOG / PUGVUE_LOG_FORMAT environment configuration
pub mod tracing_config;
