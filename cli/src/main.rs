//! mdocx CLI - Markdown to Word conversion tool

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use mdocx::style::{to_json, JsonFormat, Template};
use mdocx::{AssemblyStats, ClassifyOptions, ConvertOptions, ConverterRegistry, InputFormat};

type CliResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "mdocx")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert Markdown to styled Word documents", long_about = None)]
struct Cli {
    /// Input Markdown or text file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output .docx file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(flatten)]
    style: StyleArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone, Default)]
struct StyleArgs {
    /// Style template (default, academic, business, technical)
    #[arg(short, long, env = "MDOCX_TEMPLATE")]
    template: Option<String>,

    /// JSON file with custom styles merged over the template
    #[arg(long, value_name = "FILE", env = "MDOCX_STYLES")]
    styles: Option<PathBuf>,
}

#[derive(Args, Clone)]
struct LayoutArgs {
    /// Keep a leading level-1 heading as a heading instead of the title
    #[arg(long)]
    no_title: bool,

    /// Maximum heading level (1-6)
    #[arg(long, default_value = "6")]
    max_heading: u8,
}

impl Default for LayoutArgs {
    fn default() -> Self {
        Self {
            no_title: false,
            max_heading: 6,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one or more files to .docx
    Convert {
        /// Input files
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Output file (one input) or directory (several inputs)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        #[command(flatten)]
        style: StyleArgs,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// List style templates
    Templates,

    /// Print the resolved styles as JSON
    Styles {
        #[command(flatten)]
        style: StyleArgs,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show the styled elements a conversion would write
    Outline {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        style: StyleArgs,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            inputs,
            output,
            style,
            layout,
        }) => cmd_convert(&inputs, output.as_deref(), &style, &layout),
        Some(Commands::Templates) => {
            cmd_templates();
            Ok(())
        }
        Some(Commands::Styles { style, compact }) => cmd_styles(&style, compact),
        Some(Commands::Outline {
            input,
            style,
            layout,
        }) => cmd_outline(&input, &style, &layout),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(
                    &[input],
                    cli.output.as_deref(),
                    &cli.style,
                    &LayoutArgs::default(),
                )
            } else {
                println!("{}", "Usage: mdocx <FILE> [OUTPUT]".yellow());
                println!("       mdocx --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn build_options(style: &StyleArgs, layout: &LayoutArgs) -> CliResult<ConvertOptions> {
    let classify = ClassifyOptions::new()
        .with_title_promotion(!layout.no_title)
        .with_max_heading(layout.max_heading);

    let mut options = ConvertOptions::new()
        .with_classify_options(classify)
        .with_stats(true);

    if let Some(ref template) = style.template {
        options = options.with_template(template.as_str());
    }
    if let Some(ref path) = style.styles {
        let json = fs::read_to_string(path)
            .map_err(|e| format!("Cannot read styles file {}: {}", path.display(), e))?;
        options = options.with_custom_styles_json(json);
    }

    Ok(options)
}

fn cmd_convert(
    inputs: &[PathBuf],
    output: Option<&Path>,
    style: &StyleArgs,
    layout: &LayoutArgs,
) -> CliResult {
    let options = build_options(style, layout)?;
    let registry = ConverterRegistry::with_defaults();

    if let [input] = inputs {
        let result = registry.convert(input, &options)?;
        let path = output
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| input.with_extension("docx"));
        fs::write(&path, &result.bytes)?;

        println!("{} {}", "Saved to".green(), path.display());
        if let Some(ref stats) = result.stats {
            print_stats(stats);
        }
        return Ok(());
    }

    check_output_names(inputs)?;
    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );
    pb.set_message("Converting...");

    let mut failed = 0;
    for (input, result) in registry.convert_many(inputs, &options) {
        match result {
            Ok(result) => {
                let path = output_dir.join(&result.suggested_filename);
                fs::write(&path, &result.bytes)?;
                pb.println(format!("{} {}", "Saved".green(), path.display()));
            }
            Err(e) => {
                failed += 1;
                pb.println(format!("{} {}: {}", "Failed".red(), input.display(), e));
            }
        }
        pb.inc(1);
    }
    pb.finish_with_message("Done!");

    if failed > 0 {
        return Err(format!("{} of {} files failed", failed, inputs.len()).into());
    }
    Ok(())
}

/// Fail when two inputs would be written to the same `<stem>.docx`.
fn check_output_names(inputs: &[PathBuf]) -> CliResult {
    let mut seen: HashMap<String, &Path> = HashMap::new();
    for input in inputs {
        let Some(stem) = input.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let name = format!("{}.docx", stem);
        if let Some(previous) = seen.insert(name.clone(), input) {
            return Err(format!(
                "{} and {} would both be saved as {}",
                previous.display(),
                input.display(),
                name
            )
            .into());
        }
    }
    Ok(())
}

fn cmd_templates() {
    println!("{}", "Style Templates".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for template in Template::ALL {
        let aliases = template.aliases();
        if aliases.is_empty() {
            println!("{}", template.name().bold());
        } else {
            println!(
                "{} {}",
                template.name().bold(),
                format!("({})", aliases.join(", ")).dimmed()
            );
        }
        println!("  {}", template.description());
    }
}

fn cmd_styles(style: &StyleArgs, compact: bool) -> CliResult {
    let options = build_options(style, &LayoutArgs::default())?;
    let styles = options.resolve_styles()?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    println!("{}", to_json(&styles, format)?);

    Ok(())
}

fn cmd_outline(input: &Path, style: &StyleArgs, layout: &LayoutArgs) -> CliResult {
    let format = input
        .extension()
        .and_then(|e| e.to_str())
        .and_then(InputFormat::from_extension)
        .unwrap_or_default();
    let options = build_options(style, layout)?.with_format(format);

    let bytes = fs::read(input)?;
    let elements = mdocx::outline(&bytes, &options)?;

    println!("{}", "Document Outline".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for (i, element) in elements.iter().enumerate() {
        let font = &element.style.font;
        let mut flags = String::new();
        if font.bold {
            flags.push_str(" bold");
        }
        if font.italic {
            flags.push_str(" italic");
        }
        let first_line = element.lines.first().map(String::as_str).unwrap_or("");
        let more = if element.lines.len() > 1 {
            format!(" (+{} lines)", element.lines.len() - 1)
        } else {
            String::new()
        };

        println!(
            "{:>3}. {:<10} {} {}",
            i + 1,
            element.role.key().bold(),
            format!("[{} {}pt{}]", font.family, font.size, flags).dimmed(),
            truncate(first_line, 60)
        );
        if !more.is_empty() {
            println!("     {}", more.dimmed());
        }
    }

    println!("\n{}: {}", "Elements".bold(), elements.len());
    Ok(())
}

fn print_stats(stats: &AssemblyStats) {
    println!(
        "  {} {} elements ({} headings, {} paragraphs, {} code blocks)",
        "├─".dimmed(),
        stats.element_count(),
        stats.heading_count + stats.title_count,
        stats.paragraph_count,
        stats.code_block_count
    );
    println!(
        "  {} {} words, {} skipped",
        "└─".dimmed(),
        stats.word_count,
        stats.skipped_nodes
    );
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut)
}

fn cmd_version() {
    println!("{} {}", "mdocx".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Markdown to Word conversion tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/mdocx".dimmed());
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 3), "abc…");
    }

    #[test]
    fn test_build_options_reads_styles_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("styles.json");
        fs::write(&path, r#"{"title": {"font": {"size": 20}}}"#).unwrap();

        let style = StyleArgs {
            template: Some("technical".into()),
            styles: Some(path),
        };
        let layout = LayoutArgs {
            no_title: true,
            max_heading: 3,
        };
        let options = build_options(&style, &layout).unwrap();
        assert!(!options.classify.promote_first_heading);
        assert_eq!(options.classify.max_heading_level, 3);
        assert_eq!(options.resolve_styles().unwrap().title.font.size, 20.0);
    }

    #[test]
    fn test_check_output_names_collision() {
        let inputs = vec![PathBuf::from("a/notes.md"), PathBuf::from("b/notes.txt")];
        let err = check_output_names(&inputs).unwrap_err();
        assert!(err.to_string().contains("notes.docx"));

        let inputs = vec![PathBuf::from("a/notes.md"), PathBuf::from("a/guide.md")];
        assert!(check_output_names(&inputs).is_ok());
    }

    #[test]
    fn test_batch_convert_refuses_colliding_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let mut inputs = Vec::new();
        for sub in ["one", "two"] {
            let sub_dir = dir.path().join(sub);
            fs::create_dir_all(&sub_dir).unwrap();
            let path = sub_dir.join("notes.md");
            fs::write(&path, "# Notes").unwrap();
            inputs.push(path);
        }
        let out = dir.path().join("out");

        let result = cmd_convert(&inputs, Some(&out), &StyleArgs::default(), &LayoutArgs::default());
        assert!(result.is_err());
        assert!(!out.join("notes.docx").exists());
    }

    #[test]
    fn test_build_options_missing_styles_file() {
        let style = StyleArgs {
            template: None,
            styles: Some(PathBuf::from("/nonexistent/styles.json")),
        };
        assert!(build_options(&style, &LayoutArgs::default()).is_err());
    }
}
