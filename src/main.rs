//! autodoc — render documentation pages from selection lists.
//!
//! Supports two modes:
//!
//! - **stdin mode**: `autodoc -m symbols.json < api.autodoc`
//! - **file mode**: `autodoc -m symbols.json -o site/api docs/*.autodoc`
//!
//! Every `.autodoc` file is one page; its lines name the modules
//! (`package.module`) and classes (`package.module::Class`) to document.

use anyhow::{Context, Result};
use autodoc::loader::ManifestLoader;
use autodoc::parser::HeaderMatch;
use autodoc::render::{self, markdown::CommonMark};
use autodoc::Options;
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "autodoc",
    about = "Generate documentation pages from the docstrings of selected modules and classes"
)]
struct Cli {
    /// Selection files (glob patterns and directories supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// JSON symbol manifest describing modules, classes and routines
    #[arg(short = 'm', long, env = "AUTODOC_MANIFEST")]
    manifest: PathBuf,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: html (default), json
    #[arg(short = 'f', long, default_value = "html")]
    format: String,

    /// Page template file or directory containing _template.html.
    /// Supports ${title}, ${toc} and ${content} substitution.
    #[arg(short = 't', long)]
    template: Option<String>,

    /// Only recognize section headers at the start of a line
    #[arg(long)]
    strict_headers: bool,

    /// Log progress to stderr (RUST_LOG overrides)
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            header_match: if self.strict_headers {
                HeaderMatch::LineStart
            } else {
                HeaderMatch::Anywhere
            },
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let loader = ManifestLoader::from_path(&cli.manifest)?;

    if cli.files.is_empty() {
        return stdin_mode(&cli, &loader);
    }

    file_mode(&cli, &loader)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "autodoc=debug" } else { "autodoc=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// stdin mode: read one selection list from stdin, write the page to stdout.
fn stdin_mode(cli: &Cli, loader: &ManifestLoader) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let template = resolve_template(cli.template.as_deref(), None)?;
    let page = autodoc::build_page("", &input, loader, &CommonMark, cli.options())?;
    let renderer = render::create_renderer(&cli.format, template)?;
    print!("{}", renderer.render(&page)?);
    Ok(())
}

/// file mode: one page per selection file, written to the output directory.
fn file_mode(cli: &Cli, loader: &ManifestLoader) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let template = resolve_template(cli.template.as_deref(), Some(output_dir))?;
    let renderer = render::create_renderer(&cli.format, template)?;
    let ext = renderer.file_extension();

    let input_files = expand_globs(&cli.files)?;
    for path in &input_files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        let name = derive_output_name(&path.to_string_lossy());
        // Each page is an independent run over the same manifest.
        let page = autodoc::build_page(&name, &content, loader, &CommonMark, cli.options())
            .with_context(|| format!("failed to document {}", path.display()))?;

        let out_path = output_dir.join(format!("{}.{}", name, ext));
        let rendered = renderer
            .render(&page)
            .with_context(|| format!("failed to render {}", path.display()))?;
        fs::write(&out_path, rendered)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        info!(page = %out_path.display(), symbols = page.docs.len(), "wrote page");
    }

    Ok(())
}

/// Template file name looked up inside a template directory or the output
/// directory.
const TEMPLATE_FILE: &str = "_template.html";

/// Resolve the page template from the -t flag.
///
/// A file is used as-is, a directory must contain `_template.html`. Without
/// the flag, `_template.html` in the output directory is picked up if present.
fn resolve_template(template_arg: Option<&str>, output_dir: Option<&Path>) -> Result<Option<String>> {
    let candidate = match template_arg {
        Some(t) => {
            let path = Path::new(t);
            if path.is_file() {
                path.to_path_buf()
            } else if path.is_dir() {
                path.join(TEMPLATE_FILE)
            } else {
                anyhow::bail!("template not found: {}", t);
            }
        }
        None => match output_dir {
            Some(dir) => dir.join(TEMPLATE_FILE),
            None => return Ok(None),
        },
    };

    if !candidate.is_file() {
        if template_arg.is_some() {
            anyhow::bail!("template not found: {}", candidate.display());
        }
        return Ok(None);
    }

    debug!(template = %candidate.display(), "using page template");
    let template = fs::read_to_string(&candidate)
        .with_context(|| format!("failed to read template: {}", candidate.display()))?;
    Ok(Some(template))
}

/// Extension of selection files.
const SELECTION_EXTENSION: &str = "autodoc";

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for `.autodoc` files.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // Directories are scanned non-recursively
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() && p.extension().and_then(|e| e.to_str()) == Some(SELECTION_EXTENSION) {
                    files.push(p);
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            warn!("no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

/// Derive the page name (without extension) from a selection file path.
/// "docs/api.autodoc" → "api"
fn derive_output_name(source: &str) -> String {
    let filename = source.rsplit(['/', '\\']).next().unwrap_or(source);
    filename
        .strip_suffix(".autodoc")
        .unwrap_or(filename)
        .to_string()
}
