//! Declaration rendering for before/after display.
//!
//! Rendering happens only on request and only for snapshots that carry
//! [`Documentation`]; the classifier never renders anything.

use crate::model::{Documentation, TypeSnapshot};

/// Turns a captured declaration into display text
pub trait DeclRenderer {
    /// Render `doc` as declared in `package`
    fn render(&self, package: &str, doc: &Documentation) -> String;
}

/// Renders the doc comment as `//` lines followed by the declaration source
///
/// ```
/// use apicompat_core::model::Documentation;
/// use apicompat_core::render::{DeclRenderer, SourceRenderer};
///
/// let doc = Documentation {
///     text: "Config holds server settings.".to_string(),
///     decl: "type Config struct {\n\tPort int\n}".to_string(),
/// };
/// assert_eq!(
///     SourceRenderer.render("srv", &doc),
///     "// Config holds server settings.\ntype Config struct {\n\tPort int\n}"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceRenderer;

impl DeclRenderer for SourceRenderer {
    fn render(&self, _package: &str, doc: &Documentation) -> String {
        let mut output = String::new();

        for line in doc.text.lines() {
            if line.is_empty() {
                output.push_str("//\n");
            } else {
                output.push_str(&format!("// {}\n", line));
            }
        }

        output.push_str(doc.decl.trim_end());
        output
    }
}

/// Render one side of a change; empty when absent or undocumented
pub fn render_snapshot<R: DeclRenderer + ?Sized>(
    snapshot: Option<&TypeSnapshot>,
    renderer: &R,
) -> String {
    match snapshot.and_then(|s| s.doc.as_ref().map(|doc| (s, doc))) {
        Some((snap, doc)) => renderer.render(&snap.package, doc),
        None => String::new(),
    }
}
