use std::io::{self, Read, Write};
use std::path::PathBuf;

use cabotikz::{Platform, SourceContext, StyleConfig};
use clap::Parser;
use miette::{IntoDiagnostic, WrapErr};

/// Convert `cabocha -f1` output into tikz-dependency LaTeX, one document per sentence.
///
/// Compile the result with XeLaTeX.
#[derive(Parser, Debug)]
#[command(name = "cabotikz", version, about)]
struct Cli {
    /// CaboCha output to convert; standard input when omitted
    file: Option<PathBuf>,

    /// Argument of \documentclass
    #[arg(long = "doc-option", default_value = cabotikz::config::DEFAULT_DOC_CLASS)]
    doc_opt: String,

    /// Japanese font [default: depends on the platform]
    #[arg(long)]
    font: Option<String>,

    /// Options of the dependency environment
    #[arg(long = "dep-option", default_value = cabotikz::config::DEFAULT_DEP_OPT)]
    dep_opt: String,

    /// Options of the deptext environment
    #[arg(long = "deptxt-option", default_value = cabotikz::config::DEFAULT_DEPTEXT_OPT)]
    deptxt_opt: String,
}

impl Cli {
    fn style(&self) -> StyleConfig {
        let style = StyleConfig::for_platform(Platform::current())
            .with_doc_class(&self.doc_opt)
            .with_dep_opt(&self.dep_opt)
            .with_deptext_opt(&self.deptxt_opt);
        match &self.font {
            Some(font) => style.with_font(font),
            None => style,
        }
    }

    fn read_input(&self) -> miette::Result<SourceContext> {
        match &self.file {
            Some(path) => {
                let source = std::fs::read_to_string(path)
                    .into_diagnostic()
                    .wrap_err_with(|| format!("failed to read {}", path.display()))?;
                Ok(SourceContext::new(path.display().to_string(), source))
            }
            None => {
                let mut source = String::new();
                io::stdin()
                    .read_to_string(&mut source)
                    .into_diagnostic()
                    .wrap_err("failed to read standard input")?;
                Ok(SourceContext::new("<stdin>", source))
            }
        }
    }
}

fn main() -> miette::Result<()> {
    // stdout carries the LaTeX, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = cli.read_input()?;
    let style = cli.style();
    tracing::debug!(?style, source = %ctx.name, "converting");

    let latex = cabotikz::convert(&ctx, &style)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(latex.as_bytes())
        .and_then(|()| stdout.flush())
        .into_diagnostic()
        .wrap_err("failed to write output")?;
    Ok(())
}
