use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "spritec", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,

    /// More log output (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a frame listing into an atlas JSON file.
    Compile(CompileArgs),
    /// Compile a frame listing and report diagnostics without writing an atlas.
    Check(CheckArgs),
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Input frame listing (`name x y width height` per line).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Playback rules JSON (defaults to the built-in table).
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Fail instead of overwriting when a sprite name repeats.
    #[arg(long, default_value_t = false)]
    reject_duplicates: bool,

    /// Report sprites whose frames are split across the listing.
    #[arg(long, default_value_t = false)]
    check_order: bool,

    /// Write diagnostics as JSON to this path.
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct CompileArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Output atlas JSON path.
    #[arg(long)]
    out: PathBuf,

    /// Do not write the atlas if any error diagnostic was produced.
    #[arg(long, default_value_t = false)]
    strict: bool,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    match cli.cmd {
        Command::Compile(args) => cmd_compile(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => tracing::Level::ERROR,
        (false, 0) => tracing::Level::WARN,
        (false, 1) => tracing::Level::INFO,
        (false, _) => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run_compiler(args: &CommonArgs) -> anyhow::Result<spritec::CompileOutput> {
    let rules = match &args.rules {
        Some(path) => spritec::PlaybackRules::from_path(path)?,
        None => spritec::PlaybackRules::default(),
    };
    let opts = spritec::CompileOptions {
        duplicates: if args.reject_duplicates {
            spritec::DuplicatePolicy::Reject
        } else {
            spritec::DuplicatePolicy::Overwrite
        },
        check_order: args.check_order,
        rules,
    };

    let text = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read frame listing '{}'", args.in_path.display()))?;
    let out = spritec::AtlasCompiler::new(opts)?
        .compile_str(&text)
        .with_context(|| format!("compile '{}'", args.in_path.display()))?;

    if let Some(report) = &args.report {
        let json = serde_json::to_string_pretty(&out.diagnostics)
            .with_context(|| "serialize diagnostics")?;
        write_file(report, &json)?;
    }
    Ok(out)
}

fn cmd_compile(args: CompileArgs) -> anyhow::Result<()> {
    let out = run_compiler(&args.common)?;

    if args.strict && out.has_errors() {
        let n = out
            .diagnostics
            .iter()
            .filter(|d| d.level == spritec::Level::Error)
            .count();
        anyhow::bail!(
            "{n} error diagnostic(s); not writing '{}'",
            args.out.display()
        );
    }

    let json = out.atlas.to_json()?;
    write_file(&args.out, &json)?;

    eprintln!("wrote {} ({} sprites)", args.out.display(), out.atlas.len());
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let out = run_compiler(&args.common)?;
    for d in out.diagnostics.iter().filter(|d| d.level > spritec::Level::Info) {
        println!("{}:{}: {}: {d}", args.common.in_path.display(), d.line, d.level);
    }
    eprintln!(
        "{} sprites, {} diagnostics",
        out.atlas.len(),
        out.diagnostics.len()
    );
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("write '{}'", path.display()))
}
