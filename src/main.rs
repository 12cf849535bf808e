//! dirtally - Directory tree reports from flat path inventories.
//!
//! Usage:
//!   dirtally tree <INVENTORY>       Write the collapsible HTML tree report
//!   dirtally summary <INVENTORY>    Print the tree with sizes to the terminal
//!   dirtally stats <INVENTORY>      Extension, date and size statistics
//!   dirtally export <INVENTORY>     Export the propagated tree to JSON
//!   dirtally --help                 Show help

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::EnvFilter;

use dirtally_analyze::{StatsAnalyzer, StatsConfig, StatsReport};
use dirtally_build::{build_tree, BuildConfig, PathTree, TreeNode};
use dirtally_core::Inventory;
use dirtally_render::{ChildOrder, DisplayUnit, RenderConfig, ReportDocument, TreeRenderer};

const REPORT_TITLE: &str = "File Directory Navigator";

#[derive(Parser)]
#[command(
    name = "dirtally",
    version,
    about = "Directory tree reports from flat path inventories",
    long_about = "dirtally rebuilds the folder hierarchy of an inventory of file and folder \
                  paths, totals sizes up the tree and renders it as a collapsible HTML \
                  report, a terminal summary, statistics or JSON."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// Options shared by every command that reads an inventory.
#[derive(Args)]
struct InputArgs {
    /// Inventory JSON file
    inventory: PathBuf,

    /// Path separator used in the inventory
    #[arg(long, default_value = "\\")]
    separator: char,

    /// Keep a leading doubled separator as part of the first segment
    #[arg(long)]
    keep_network_prefix: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Write the HTML directory tree report
    Tree {
        #[command(flatten)]
        input: InputArgs,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Unit visible by default (bytes, kb, mb, gb)
        #[arg(short, long, default_value = "bytes")]
        unit: DisplayUnit,

        /// Render folders that have no children
        #[arg(long)]
        show_empty: bool,

        /// Child order (insertion, name, size-descending)
        #[arg(long, default_value = "insertion")]
        order: ChildOrder,
    },

    /// Print the tree with sizes
    Summary {
        #[command(flatten)]
        input: InputArgs,

        /// Maximum depth to display
        #[arg(short, long, default_value = "3")]
        depth: u32,

        /// Number of largest entries to show per folder
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },

    /// Show inventory statistics
    Stats {
        #[command(flatten)]
        input: InputArgs,

        /// Number of largest files to list
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Export the propagated tree to JSON
    Export {
        #[command(flatten)]
        input: InputArgs,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Tree {
            input,
            output,
            unit,
            show_empty,
            order,
        } => {
            let config = RenderConfig::builder()
                .default_unit(unit)
                .show_empty_folders(show_empty)
                .order(order)
                .build()?;
            run_tree(&input, config, output)?;
        }
        Command::Summary { input, depth, top } => {
            run_summary(&input, depth, top)?;
        }
        Command::Stats { input, top, format } => {
            run_stats(&input, top, format)?;
        }
        Command::Export { input, output } => {
            run_export(&input, output)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "dirtally=debug" } else { "dirtally=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

impl InputArgs {
    fn load(&self) -> Result<Inventory> {
        Inventory::from_path(&self.inventory)
            .with_context(|| format!("Failed to load inventory {}", self.inventory.display()))
    }

    fn build_config(&self) -> Result<BuildConfig> {
        let config = BuildConfig::builder()
            .separator(self.separator)
            .strip_network_prefix(!self.keep_network_prefix)
            .build()
            .context("Invalid build configuration")?;
        Ok(config)
    }

    /// Load the inventory and build its propagated tree.
    fn load_tree(&self) -> Result<(Inventory, PathTree)> {
        let inventory = self.load()?;
        tracing::info!(
            entries = inventory.entries.len(),
            path = %self.inventory.display(),
            "Building tree"
        );
        let tree = build_tree(inventory.records(), self.build_config()?);
        report_warnings(&tree);
        Ok((inventory, tree))
    }
}

/// Write the HTML report.
fn run_tree(input: &InputArgs, config: RenderConfig, output: Option<PathBuf>) -> Result<()> {
    let (inventory, tree) = input.load_tree()?;

    let default_unit = config.default_unit;
    let fragment = TreeRenderer::with_config(config).render(&tree, "");
    let html = ReportDocument::new(REPORT_TITLE, &fragment)
        .with_details(&inventory.details)
        .with_totals(tree.total_files(), tree.total)
        .with_default_unit(default_unit)
        .to_html();

    write_output(output.as_deref(), &html)
}

/// Print a terminal summary of the tree.
fn run_summary(input: &InputArgs, max_depth: u32, top_n: usize) -> Result<()> {
    let (_, tree) = input.load_tree()?;

    println!();
    println!("{}", "─".repeat(60));
    println!(" {} - {}", input.inventory.display(), format_size(tree.total_size()));
    println!(
        " {} files, {} folders ({} synthetic)",
        tree.stats.total_files, tree.stats.total_folders, tree.stats.synthetic_folders
    );
    println!(" Built in {:.2}s", tree.build_duration.as_secs_f64());
    println!("{}", "─".repeat(60));
    println!();

    let root_size = tree.total_size();
    for node in largest_first(tree.top_level(), top_n) {
        print_node(&tree, node, 0, max_depth, top_n, root_size);
    }
    if let Some(note) = remainder_note(tree.roots.len(), top_n, 0) {
        println!("{note}");
    }

    Ok(())
}

/// Compute and print statistics.
fn run_stats(input: &InputArgs, top_n: usize, format: OutputFormat) -> Result<()> {
    let inventory = input.load()?;

    let config = StatsConfig::builder()
        .top_files(top_n)
        .separator(input.separator)
        .build()?;
    let report = StatsAnalyzer::with_config(config).analyze_inventory(&inventory);

    match format {
        OutputFormat::Text => print_stats(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

/// Export the propagated tree to JSON.
fn run_export(input: &InputArgs, output: Option<PathBuf>) -> Result<()> {
    let (_, tree) = input.load_tree()?;
    let json = serde_json::to_string_pretty(&tree)?;
    write_output(output.as_deref(), &json)
}

fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}

fn report_warnings(tree: &PathTree) {
    if tree.has_warnings() {
        eprintln!(
            "{} warning(s) while building the tree ({} record(s) skipped)",
            tree.warnings.len(),
            tree.stats.records_skipped
        );
    }
}

fn print_stats(report: &StatsReport) {
    println!();
    println!("{}", "─".repeat(70));
    println!(" Inventory Statistics");
    println!("{}", "─".repeat(70));
    println!();
    println!(
        " {} files, {} ({:.4} GB)",
        report.total_files,
        format_size(report.total_size.bytes),
        report.total_size.gb
    );
    println!();

    println!(" Extensions by count:");
    for ext in report.extensions.by_count.iter().take(15) {
        println!("   {:<12} {:>8} files", ext.extension, ext.file_count);
    }
    println!();

    println!(" Extensions by size:");
    for ext in report.extensions.by_size.iter().take(15) {
        println!(
            "   {:<12} {:>10} {:>12.4} GB",
            ext.extension,
            format_size(ext.total_size.bytes),
            ext.total_size.gb
        );
    }
    println!();

    println!(" Size distribution:");
    let max_count = report
        .size_buckets
        .iter()
        .map(|b| b.file_count)
        .max()
        .unwrap_or(0)
        .max(1);
    for bucket in &report.size_buckets {
        println!(
            "   {:<22} {:>8} files {:>10}  {}",
            bucket.label,
            bucket.file_count,
            format_size(bucket.total_size.bytes),
            make_bar(bucket.file_count as f64 / max_count as f64, 20)
        );
    }
    println!();

    println!(" Files created per year:");
    for year in &report.dates.by_year {
        println!("   {:<6} {:>8}", year.date, year.file_count);
    }
    if report.dates.undated > 0 {
        println!("   {:<6} {:>8}", "none", report.dates.undated);
    }
    println!();

    println!(" Largest files:");
    for file in &report.top_files {
        println!(
            "   {:>10} {:>10.4} GB  {}",
            format_size(file.size.bytes),
            file.size.gb,
            file.path
        );
    }
    println!();
}

/// Up to `top_n` nodes, largest cumulative size first.
fn largest_first<'a>(nodes: impl Iterator<Item = &'a TreeNode>, top_n: usize) -> Vec<&'a TreeNode> {
    let mut nodes: Vec<&TreeNode> = nodes.collect();
    nodes.sort_by(|a, b| b.cumulative.bytes.cmp(&a.cumulative.bytes));
    nodes.truncate(top_n);
    nodes
}

/// Print a node and its children.
fn print_node(
    tree: &PathTree,
    node: &TreeNode,
    depth: u32,
    max_depth: u32,
    top_n: usize,
    root_size: u64,
) {
    let indent = "  ".repeat(depth as usize);
    let size = node.cumulative.bytes;
    let ratio = if root_size > 0 {
        size as f64 / root_size as f64 * 100.0
    } else {
        0.0
    };

    let dir_marker = if node.is_folder() { "/" } else { "" };

    println!(
        "{}{}{:<40} {:>10} {:>5.1}% {}",
        indent,
        if node.has_children() { "▼ " } else { "  " },
        truncate(&format!("{}{}", node.name, dir_marker), 40),
        format_size(size),
        ratio,
        make_bar(ratio / 100.0, 10)
    );

    if node.has_children() && depth < max_depth {
        for child in largest_first(tree.children(node), top_n) {
            print_node(tree, child, depth + 1, max_depth, top_n, root_size);
        }

        if let Some(note) = remainder_note(node.child_count(), top_n, depth + 1) {
            println!("{note}");
        }
    }
}

/// The "... and N more" line for entries cut by `top_n`, if any were cut.
fn remainder_note(total: usize, top_n: usize, depth: u32) -> Option<String> {
    let remaining = total.saturating_sub(top_n);
    (remaining > 0).then(|| format!("{}  ... and {} more", "  ".repeat(depth as usize), remaining))
}

/// Create a simple ASCII bar.
fn make_bar(ratio: f64, width: usize) -> String {
    let filled = ((ratio * width as f64).round() as usize).min(width);
    let empty = width - filled;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

/// Format size in human-readable form.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}

/// Truncate a string to at most `max_len` characters.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{head}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dirtally_build::Record;

    #[test]
    fn test_remainder_note() {
        assert_eq!(remainder_note(3, 10, 0), None);
        assert_eq!(remainder_note(10, 10, 0), None);
        assert_eq!(remainder_note(12, 10, 0).as_deref(), Some("  ... and 2 more"));
        assert_eq!(remainder_note(5, 1, 2).as_deref(), Some("      ... and 4 more"));
    }

    #[test]
    fn test_top_level_cut_is_noted() {
        let tree = build_tree(
            [
                Record::file("A\\a", 30),
                Record::file("B\\b", 20),
                Record::file("C\\c", 10),
            ],
            BuildConfig::default(),
        );
        let shown = largest_first(tree.top_level(), 2);

        assert_eq!(shown.iter().map(|n| n.name.as_str()).collect::<Vec<_>>(), ["A", "B"]);
        assert_eq!(
            remainder_note(tree.roots.len(), 2, 0).as_deref(),
            Some("  ... and 1 more")
        );
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("ééééé", 3), "éé…");
    }
}
