//! C# rendering of the code model.
//!
//! Output is normalized: four-space indentation, one declaration or statement
//! per line, `\n` line endings, exactly one blank line between member groups
//! and a trailing newline. The same model and banner always render to the
//! same bytes.

use crate::config::{Banner, GeneratorConfig};
use crate::model::{CodeModel, Expr, Field, Member, Method, Property, Statement, Visibility};
use std::collections::BTreeSet;
use std::fmt;

/// Indentation unit.
const INDENT: &str = "    ";

/// Attribute marking a private field as assignable from the editor.
const SERIALIZED_ATTRIBUTE: &str = "[SerializeField]";

/// Rendered output: a fixed header followed by the normalized source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    /// Non-editable file banner.
    pub header: String,
    /// Normalized source text.
    pub body: String,
}

impl GeneratedArtifact {
    /// Returns the full file content.
    #[must_use]
    pub fn contents(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GeneratedArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.header, self.body)
    }
}

/// Renders the banner comment placed at the top of every generated file.
#[must_use]
pub fn render_header(banner: &Banner) -> String {
    let mut w = CodeWriter::new();
    w.line("// <auto-generated>");
    w.line(format!(
        "//     This file was generated by {} {}.",
        banner.tool_name, banner.version
    ));
    w.line("//     Manual changes to this file will be lost when the code is regenerated.");
    w.line("// </auto-generated>");
    w.finish()
}

/// Indentation-aware line writer.
#[derive(Debug, Default)]
pub struct CodeWriter {
    output: String,
    depth: usize,
}

impl CodeWriter {
    /// Creates an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes one line at the current indentation.
    pub fn line(&mut self, text: impl AsRef<str>) {
        for _ in 0..self.depth {
            self.output.push_str(INDENT);
        }
        self.output.push_str(text.as_ref());
        self.output.push('\n');
    }

    /// Writes an empty line with no indentation.
    pub fn blank_line(&mut self) {
        self.output.push('\n');
    }

    /// Writes an opening brace and indents following lines.
    pub fn open_block(&mut self) {
        self.line("{");
        self.depth += 1;
    }

    /// Dedents and writes a closing brace.
    pub fn close_block(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
    }

    /// Returns the written text.
    #[must_use]
    pub fn finish(self) -> String {
        self.output
    }
}

/// Member grouping used to place blank lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Group {
    Serialized,
    Fields,
    Properties,
    Methods,
}

impl Group {
    fn of(member: Member<'_>) -> Self {
        match member {
            Member::Field(field) if field.serialized => Self::Serialized,
            Member::Field(_) => Self::Fields,
            Member::Property(_) => Self::Properties,
            Member::Method(_) => Self::Methods,
        }
    }
}

/// Renders a [`CodeModel`] as a C# compilation unit.
pub struct CSharpRenderer<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> CSharpRenderer<'a> {
    /// Creates a new renderer.
    #[must_use]
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Renders the model with the configured banner.
    #[must_use]
    pub fn render(&self, model: &CodeModel) -> GeneratedArtifact {
        GeneratedArtifact {
            header: render_header(&self.config.banner),
            body: self.render_body(model),
        }
    }

    fn render_body(&self, model: &CodeModel) -> String {
        let mut w = CodeWriter::new();

        let imports: BTreeSet<&str> = self.config.imports.iter().map(String::as_str).collect();
        for import in &imports {
            w.line(format!("using {import};"));
        }
        if !imports.is_empty() {
            w.blank_line();
        }

        if let Some(namespace) = &model.namespace {
            w.line(format!("namespace {namespace}"));
            w.open_block();
        }

        w.line(format!(
            "public partial class {} : {}",
            model.class_name, model.base_type
        ));
        w.open_block();

        let mut previous: Option<Group> = None;
        for member in model.members() {
            let group = Group::of(member);
            if previous.is_some_and(|p| p != group) {
                w.blank_line();
            }
            match member {
                Member::Field(field) => render_field(&mut w, field),
                Member::Property(property) => render_property(&mut w, property),
                Member::Method(method) => render_method(&mut w, method),
            }
            previous = Some(group);
        }

        w.close_block();
        if model.namespace.is_some() {
            w.close_block();
        }

        w.finish()
    }
}

fn visibility(v: Visibility) -> &'static str {
    match v {
        Visibility::Public => "public",
        Visibility::Private => "private",
    }
}

fn render_field(w: &mut CodeWriter, field: &Field) {
    if field.serialized {
        w.line(SERIALIZED_ATTRIBUTE);
    }
    w.line(format!(
        "{} {} {};",
        visibility(field.visibility),
        field.ty,
        field.name
    ));
}

fn render_property(w: &mut CodeWriter, property: &Property) {
    w.line(format!(
        "{} {} {} => {};",
        visibility(property.visibility),
        property.ty,
        property.name,
        render_expr(&property.getter)
    ));
}

fn render_method(w: &mut CodeWriter, method: &Method) {
    w.line(format!("{} void {}()", visibility(method.visibility), method.name));
    w.open_block();
    for statement in &method.body {
        w.line(render_statement(statement));
    }
    w.close_block();
}

fn render_statement(statement: &Statement) -> String {
    match statement {
        Statement::Assign { target, value } => format!("{target} = {};", render_expr(value)),
    }
}

/// Renders an expression. Member access and invocation bind tighter than a
/// cast, so no parentheses are needed around cast operands.
fn render_expr(expr: &Expr) -> String {
    match expr {
        Expr::Ident(name) => name.clone(),
        Expr::NullSafeMember { target, member } => {
            let target = render_expr(target);
            format!("{target} != null ? {target}.{member} : null")
        }
        Expr::Query {
            target,
            method,
            key,
        } => format!("{}.{method}({})", render_expr(target), string_literal(key)),
        Expr::Cast { ty, expr } => format!("({ty}){}", render_expr(expr)),
    }
}

/// Quotes a value as a C# string literal.
fn string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for c in value.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            // C# line terminators and other control characters
            '\u{0085}' | '\u{2028}' | '\u{2029}' => push_unicode_escape(&mut literal, c),
            c if c.is_control() => push_unicode_escape(&mut literal, c),
            c => literal.push(c),
        }
    }
    literal.push('"');
    literal
}

fn push_unicode_escape(literal: &mut String, c: char) {
    literal.push_str(&format!("\\u{:04X}", u32::from(c)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::BindableElement;
    use crate::model::ModelBuilder;

    fn render(config: &GeneratorConfig, bindings: &[BindableElement]) -> GeneratedArtifact {
        let model = ModelBuilder::new(config)
            .build("MainMenu", bindings)
            .expect("Failed to build");
        CSharpRenderer::new(config).render(&model)
    }

    fn test_config() -> GeneratorConfig {
        GeneratorConfig::new().banner(Banner::new("uxbind", "1.2.3"))
    }

    #[test]
    fn test_render_scenario() {
        let bindings = vec![
            BindableElement::new("Button", "submitBtn"),
            BindableElement::new("Label", "status"),
            BindableElement::new("Toggle", "enableX"),
        ];
        let artifact = render(&test_config(), &bindings);

        let expected = "\
// <auto-generated>
//     This file was generated by uxbind 1.2.3.
//     Manual changes to this file will be lost when the code is regenerated.
// </auto-generated>

using UnityEngine;
using UnityEngine.UIElements;

public partial class MainMenu : MonoBehaviour
{
    [SerializeField]
    private UIDocument _document;

    private Button _submitBtn;
    private Label _status;
    private Toggle _enableX;

    public VisualElement Root => _document != null ? _document.rootVisualElement : null;

    public void InitializeDocument()
    {
        _submitBtn = (Button)Root.Q(\"submitBtn\");
        _status = (Label)Root.Q(\"status\");
        _enableX = (Toggle)Root.Q(\"enableX\");
    }
}
";
        assert_eq!(artifact.contents(), expected);
    }

    #[test]
    fn test_render_empty_document() {
        let artifact = render(&test_config(), &[]);

        let expected = "\
using UnityEngine;
using UnityEngine.UIElements;

public partial class MainMenu : MonoBehaviour
{
    [SerializeField]
    private UIDocument _document;

    public VisualElement Root => _document != null ? _document.rootVisualElement : null;

    public void InitializeDocument()
    {
    }
}
";
        assert_eq!(artifact.body, expected);
    }

    #[test]
    fn test_render_namespace() {
        let config = test_config().namespace("Game.UI");
        let artifact = render(&config, &[BindableElement::new("Label", "title")]);

        assert!(artifact.body.contains("namespace Game.UI\n{\n    public partial class MainMenu"));
        assert!(artifact.body.contains("\n        private Label _title;\n"));
        assert!(
            artifact
                .body
                .contains("\n            _title = (Label)Root.Q(\"title\");\n")
        );
        assert!(artifact.body.ends_with("    }\n}\n"));
    }

    #[test]
    fn test_render_imports_sorted_and_deduplicated() {
        let config = test_config().imports(["UnityEngine.UIElements", "UnityEngine", "UnityEngine"]);
        let artifact = render(&config, &[]);
        assert!(
            artifact
                .body
                .starts_with("using UnityEngine;\nusing UnityEngine.UIElements;\n\n")
        );
    }

    #[test]
    fn test_render_without_imports() {
        let config = test_config().imports(Vec::<String>::new());
        let artifact = render(&config, &[]);
        assert!(artifact.body.starts_with("public partial class MainMenu"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let bindings = vec![
            BindableElement::new("Button", "ok"),
            BindableElement::new("Button", "cancel"),
        ];
        let config = test_config();
        assert_eq!(render(&config, &bindings), render(&config, &bindings));
    }

    #[test]
    fn test_header_changes_with_version_only() {
        let bindings = vec![BindableElement::new("Button", "ok")];
        let old = render(&test_config(), &bindings);
        let new = render(
            &GeneratorConfig::new().banner(Banner::new("uxbind", "2.0.0")),
            &bindings,
        );
        assert_ne!(old.header, new.header);
        assert_eq!(old.body, new.body);
    }

    #[test]
    fn test_string_literal_escapes() {
        assert_eq!(string_literal("plain"), "\"plain\"");
        assert_eq!(string_literal("a\"b\\c"), "\"a\\\"b\\\\c\"");
        assert_eq!(string_literal("a\nb\tc"), "\"a\\nb\\tc\"");
        assert_eq!(string_literal("a\u{2028}b"), "\"a\\u2028b\"");
        assert_eq!(string_literal("a\u{2029}b"), "\"a\\u2029b\"");
        assert_eq!(string_literal("a\u{0085}b"), "\"a\\u0085b\"");
        assert_eq!(string_literal("a\u{0000}b\u{001B}"), "\"a\\u0000b\\u001B\"");
        assert_eq!(string_literal("über"), "\"über\"");
    }

    #[test]
    fn test_code_writer_blocks() {
        let mut w = CodeWriter::new();
        w.line("a");
        w.open_block();
        w.line("b");
        w.blank_line();
        w.close_block();
        assert_eq!(w.finish(), "a\n{\n    b\n\n}\n");
    }
}
