//! Options handed to the template compiler for a single compilation.

use serde::{Deserialize, Serialize};

use crate::ast::Fields;

/// Per-compilation settings, shaped like the option object a Pug compiler
/// takes. The loader fills `filename` from the resource path when the caller
/// leaves it unset; everything else keeps its default unless overridden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompileOptions {
    /// Template path, used for error positions and relative includes.
    pub filename: Option<String>,
    /// Doctype the renderer assumes. HTML by default so that valueless
    /// attributes render in their terse form.
    pub doctype: String,
    /// Whether the compiler embeds debugging instrumentation in the
    /// rendered output.
    pub compile_debug: bool,
    /// Pretty-print the rendered markup.
    pub pretty: bool,
    /// Passthrough for compiler settings this crate does not interpret.
    #[serde(flatten)]
    pub extra: Fields,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            filename: None,
            doctype: "html".to_string(),
            compile_debug: false,
            pretty: false,
            extra: Fields::new(),
        }
    }
}

impl CompileOptions {
    /// Fills `filename` from the resource being loaded unless the caller
    /// already set one explicitly.
    pub(crate) fn for_resource(mut self, resource: &str) -> Self {
        if self.filename.is_none() {
            self.filename = Some(resource.to_string());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_loader_contract() {
        let options = CompileOptions::default();
        assert_eq!(options.doctype, "html");
        assert!(!options.compile_debug);
        assert!(!options.pretty);
        assert!(options.filename.is_none());
    }

    #[test]
    fn test_for_resource_fills_missing_filename() {
        let options = CompileOptions::default().for_resource("views/app.pug");
        assert_eq!(options.filename.as_deref(), Some("views/app.pug"));
    }

    #[test]
    fn test_for_resource_keeps_explicit_filename() {
        let options = CompileOptions {
            filename: Some("custom.pug".to_string()),
            ..Default::default()
        };
        let options = options.for_resource("views/app.pug");
        assert_eq!(options.filename.as_deref(), Some("custom.pug"));
    }

    #[test]
    fn test_unknown_settings_round_trip() {
        let json = r#"{"doctype":"xml","compileDebug":true,"cache":false}"#;
        let options: CompileOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.doctype, "xml");
        assert!(options.compile_debug);
        assert_eq!(options.extra["cache"], serde_json::json!(false));
        let back = serde_json::to_value(&options).unwrap();
        assert_eq!(back["cache"], serde_json::json!(false));
    }
}
