//! Command line front end.

use anyhow::{Context, bail};
use clap::Parser;
use std::path::PathBuf;
use uxbind_codegen::{Generator, GeneratorConfig};
use uxbind_markup::DocumentAsset;

/// Generate typed C# bindings for UXML documents.
#[derive(Parser, Debug)]
#[command(name = "uxbind", version, about)]
pub struct Args {
    /// UXML documents to generate bindings for.
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output path (single input only). Defaults to `<name>.g.cs` next to the
    /// document.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Namespace wrapping the generated class.
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Class name override (single input only).
    #[arg(long)]
    pub class_name: Option<String>,

    /// Print the generated code instead of writing files.
    #[arg(long)]
    pub stdout: bool,
}

impl Args {
    /// Builds the generator configuration from the arguments.
    #[must_use]
    pub fn config(&self) -> GeneratorConfig {
        let config = GeneratorConfig::new();
        match &self.namespace {
            Some(namespace) => config.namespace(namespace.clone()),
            None => config,
        }
    }

    /// Builds the asset descriptors for all inputs.
    ///
    /// # Errors
    /// Fails if an override meant for a single input is given with several.
    pub fn assets(&self) -> anyhow::Result<Vec<DocumentAsset>> {
        if self.inputs.len() > 1 && (self.output.is_some() || self.class_name.is_some()) {
            bail!("--output and --class-name require a single input");
        }

        Ok(self
            .inputs
            .iter()
            .map(|input| {
                let asset = DocumentAsset::from_path(input);
                match &self.output {
                    Some(output) => asset.with_output_path(output),
                    None => asset,
                }
            })
            .collect())
    }
}

/// Runs generation for every input, stopping at the first failure.
///
/// # Returns
/// The generated texts when `--stdout` is set, otherwise the written paths
/// as display strings.
///
/// # Errors
/// Returns the first generation or write failure, with the input named.
pub fn run(args: &Args) -> anyhow::Result<Vec<String>> {
    let generator = Generator::new(args.config());
    let mut results = Vec::with_capacity(args.inputs.len());

    for asset in args.assets()? {
        let input = asset.full_path.display().to_string();
        let class_name = args.class_name.as_deref();
        if args.stdout {
            let artifact = match class_name {
                Some(class_name) => generator.generate_asset_as(&asset, class_name),
                None => generator.generate_asset(&asset),
            }
            .with_context(|| format!("failed to generate bindings for {input}"))?;
            results.push(artifact.contents());
        } else {
            let written = match class_name {
                Some(class_name) => generator.generate_to_file_as(&asset, class_name),
                None => generator.generate_to_file(&asset),
            }
            .with_context(|| format!("failed to generate bindings for {input}"))?;
            tracing::debug!(input = %input, output = %written.display(), "generated");
            results.push(written.display().to_string());
        }
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    const MENU: &str = r#"<ui:UXML xmlns:ui="UnityEngine.UIElements">
    <ui:Button name="play" />
</ui:UXML>"#;

    #[test]
    fn test_parse_args() {
        let args = Args::try_parse_from(["uxbind", "a.uxml", "-n", "Game.UI", "--stdout"])
            .expect("Failed to parse args");
        assert_eq!(args.inputs, vec![PathBuf::from("a.uxml")]);
        assert_eq!(args.namespace.as_deref(), Some("Game.UI"));
        assert!(args.stdout);
    }

    #[test]
    fn test_requires_input() {
        assert!(Args::try_parse_from(["uxbind"]).is_err());
    }

    #[test]
    fn test_single_input_overrides() {
        let args = Args::try_parse_from(["uxbind", "a.uxml", "b.uxml", "-o", "out.cs"])
            .expect("Failed to parse args");
        assert!(args.assets().is_err());
    }

    #[test]
    fn test_run_writes_files() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input = dir.path().join("TitleScreen.uxml");
        std::fs::write(&input, MENU).expect("Failed to write fixture");
        let output = dir.path().join("gen/Title.cs");

        let args = Args::try_parse_from([
            OsString::from("uxbind"),
            input.into_os_string(),
            OsString::from("-o"),
            output.clone().into_os_string(),
            OsString::from("--class-name"),
            OsString::from("Title"),
        ])
        .expect("Failed to parse args");
        let written = run(&args).expect("Failed to run");

        assert_eq!(written, vec![output.display().to_string()]);
        let text = std::fs::read_to_string(&output).expect("Failed to read");
        assert!(text.contains("public partial class Title : MonoBehaviour"));
        assert!(text.contains("_play = (Button)Root.Q(\"play\");"));
    }

    #[test]
    fn test_class_name_override_kept_verbatim() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input = dir.path().join("TitleScreen.uxml");
        std::fs::write(&input, MENU).expect("Failed to write fixture");

        let args = Args {
            inputs: vec![input],
            output: None,
            namespace: None,
            class_name: Some("my_view".to_string()),
            stdout: true,
        };
        let texts = run(&args).expect("Failed to run");

        assert!(texts[0].contains("public partial class my_view : MonoBehaviour"));
        assert!(!texts[0].contains("class MyView"));
    }

    #[test]
    fn test_run_stdout_with_namespace() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input = dir.path().join("TitleScreen.uxml");
        std::fs::write(&input, MENU).expect("Failed to write fixture");

        let args = Args {
            inputs: vec![input],
            output: None,
            namespace: Some("Game.UI".to_string()),
            class_name: None,
            stdout: true,
        };
        let texts = run(&args).expect("Failed to run");

        assert_eq!(texts.len(), 1);
        assert!(texts[0].contains("namespace Game.UI"));
        assert!(!dir.path().join("TitleScreen.g.cs").exists());
    }

    #[test]
    fn test_run_reports_failing_input() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input = dir.path().join("Broken.uxml");
        std::fs::write(&input, "<UXML>").expect("Failed to write fixture");

        let args = Args {
            inputs: vec![input],
            output: None,
            namespace: None,
            class_name: None,
            stdout: false,
        };
        let err = run(&args).expect_err("Expected failure");
        assert!(format!("{err:#}").contains("Broken.uxml"));
    }
}
