//! Build-tool loader glue.
//!
//! [`Loader`] is the piece a bundler integration calls: it owns a template
//! compiler and a plugin list (with [`VueLowering`] preinstalled), and for
//! each resource runs parse, plugin hooks, dependency reporting, and render.
//! The compiler itself stays behind the [`TemplateCompiler`] trait; this
//! crate only orchestrates.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::ast::Node;
use crate::error::CompileError;
use crate::options::CompileOptions;
use crate::plugin::{CompilerPlugin, VueLowering};

/// A parsed template: the tree plus every file the parse touched
/// (the template itself, includes, extended layouts).
pub struct Parsed {
    pub tree: Node,
    pub dependencies: Vec<String>,
}

/// The template compiler the loader drives.
pub trait TemplateCompiler {
    /// Parses source text into a tree, resolving includes and extends.
    fn parse(&self, source: &str, options: &CompileOptions) -> Result<Parsed, CompileError>;

    /// Renders a (lowered) tree to markup.
    fn render(&self, tree: &Node, options: &CompileOptions) -> Result<String, CompileError>;
}

/// Receives the files a compilation depended on, so the build tool can
/// watch them for rebuilds.
pub trait DependencyTracker {
    fn add_dependency(&mut self, path: &str);
}

/// Collecting dependencies into a plain vector, mostly for tests and
/// one-shot CLI use.
impl DependencyTracker for Vec<String> {
    fn add_dependency(&mut self, path: &str) {
        self.push(path.to_string());
    }
}

/// Drives a [`TemplateCompiler`] through the full load pipeline.
pub struct Loader<C> {
    compiler: C,
    plugins: Vec<Box<dyn CompilerPlugin>>,
}

impl<C: TemplateCompiler> Loader<C> {
    /// Creates a loader with the Vue lowering pass registered.
    pub fn new(compiler: C) -> Self {
        Self {
            compiler,
            plugins: vec![Box::new(VueLowering)],
        }
    }

    /// Registers an additional plugin. Hooks run in registration order, and
    /// the lowering pass registered by [`Loader::new`] runs first.
    pub fn with_plugin(mut self, plugin: Box<dyn CompilerPlugin>) -> Self {
        self.plugins.push(plugin);
        self
    }

    /// Loads one template: parse, run plugin hooks, report dependencies,
    /// render. `resource` is the path of the template being loaded; it
    /// becomes the compile `filename` unless the options already set one.
    pub fn load(
        &self,
        source: &str,
        resource: &str,
        options: CompileOptions,
        tracker: &mut dyn DependencyTracker,
    ) -> Result<String, CompileError> {
        let options = options.for_resource(resource);
        let _span = tracing::debug_span!("load", resource).entered();

        let Parsed {
            mut tree,
            dependencies,
        } = self.compiler.parse(source, &options)?;

        for plugin in &self.plugins {
            tree = plugin.post_parse(tree, &options)?;
        }
        for plugin in &self.plugins {
            tree = plugin.pre_codegen(tree, &options)?;
        }

        // Parsers report a file once per include; the build tool wants each
        // path once.
        let mut seen = FxHashSet::default();
        for dependency in &dependencies {
            if seen.insert(dependency.as_str()) {
                tracker.add_dependency(dependency);
            }
        }
        debug!(
            dependencies = dependencies.len(),
            plugins = self.plugins.len(),
            "template lowered"
        );

        self.compiler.render(&tree, &options)
    }
}
