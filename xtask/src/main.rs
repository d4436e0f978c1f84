// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask
//!
//! Developer commands for the linemate workspace.
//!
//! - `cargo xtask ci` lints, builds and tests everything
//! - `cargo xtask serve --database linemate.db` runs the server locally
//! - `cargo xtask coverage` writes `target/lcov.info`

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{io, process::Output};

use cargo_metadata::MetadataCommand;
use clap::{Args as ClapArgs, Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use duct::{Expression, cmd};
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

/// Every cargo invocation that builds code covers all targets and features.
const ALL_TARGETS: [&str; 2] = ["--all-targets", "--all-features"];

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    if let Err(err) = args.command.run() {
        tracing::error!("{err:#}");
        std::process::exit(1);
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Lint, build and test
    CI,

    /// Build every crate
    #[command(visible_alias = "b")]
    Build,

    /// Type-check every crate
    #[command(visible_alias = "c")]
    Check,

    /// Run clippy, rustdoc and rustfmt checks
    #[command(visible_alias = "l")]
    Lint,

    /// Run clippy with warnings denied
    #[command(visible_alias = "cl")]
    LintClippy,

    /// Build docs with warnings denied
    #[command(visible_alias = "d")]
    LintDocs,

    /// Check formatting
    #[command(visible_alias = "lf")]
    LintFormatting,

    /// Apply clippy suggestions
    #[command(visible_alias = "fc")]
    FixClippy,

    /// Format the workspace
    #[command(visible_alias = "fmt")]
    FixFormatting,

    /// Run unit, property and doc tests
    #[command(visible_alias = "t")]
    Test,

    /// Write an lcov coverage report to `target/lcov.info`
    #[command(visible_alias = "cov")]
    Coverage,

    /// Run `linemate-server`
    #[command(visible_alias = "s")]
    Serve(ServeArgs),
}

#[derive(Clone, Debug, ClapArgs)]
struct ServeArgs {
    /// `SQLite` file to keep the game in
    #[arg(short, long, default_value = "linemate.db")]
    database: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => ci(),
            Self::Build => cargo(&["build"], &ALL_TARGETS),
            Self::Check => cargo(&["check"], &ALL_TARGETS),
            Self::Lint => lint(),
            Self::LintClippy => lint_clippy(),
            Self::LintDocs => lint_docs(),
            Self::LintFormatting => nightly(&["fmt", "--all", "--check"]),
            Self::FixClippy => cargo(
                &["clippy", "--fix", "--allow-dirty", "--allow-staged"],
                &ALL_TARGETS,
            ),
            Self::FixFormatting => nightly(&["fmt", "--all"]),
            Self::Test => test(),
            Self::Coverage => cargo(
                &["llvm-cov", "--lcov", "--output-path", "target/lcov.info"],
                &["--all-features"],
            ),
            Self::Serve(args) => serve(&args),
        }
    }
}

fn ci() -> Result<()> {
    lint()?;
    cargo(&["build"], &ALL_TARGETS)?;
    test()
}

fn lint() -> Result<()> {
    lint_clippy()?;
    lint_docs()?;
    Command::LintFormatting.run()
}

fn lint_clippy() -> Result<()> {
    let flags: Vec<&str> = [&ALL_TARGETS[..], &["--", "-D", "warnings"]].concat();
    cargo(&["clippy"], &flags)
}

/// Doc tests run last; they are the slowest.
fn test() -> Result<()> {
    cargo(&["test"], &ALL_TARGETS)?;
    cargo(&["test", "--doc"], &["--all-features"])
}

/// Builds each workspace crate's docs the way docs.rs would.
fn lint_docs() -> Result<()> {
    let metadata = MetadataCommand::new()
        .exec()
        .wrap_err("failed to read cargo metadata")?;

    for package in metadata.workspace_default_packages() {
        with_nightly(cmd!(
            "cargo",
            "doc",
            "--no-deps",
            "--all-features",
            "--package",
            package.name.as_str()
        ))
        .env("RUSTDOCFLAGS", "--cfg docsrs -D warnings")
        .run_with_trace()?;
    }
    Ok(())
}

fn serve(args: &ServeArgs) -> Result<()> {
    let port: String = args.port.to_string();
    cargo(
        &["run", "--package", "linemate-server", "--"],
        &["--database", &args.database, "--port", &port],
    )
}

fn cargo(subcommand: &[&str], flags: &[&str]) -> Result<()> {
    cmd("cargo", subcommand.iter().chain(flags).copied()).run_with_trace()?;
    Ok(())
}

fn nightly(args: &[&str]) -> Result<()> {
    with_nightly(cmd("cargo", args)).run_with_trace()?;
    Ok(())
}

/// Points a nested cargo call at the nightly toolchain.
///
/// `CARGO` is set by the outer `cargo xtask` and would pin the toolchain.
fn with_nightly(expression: Expression) -> Expression {
    expression
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
}

trait ExpressionExt {
    /// Logs the command, runs it, and logs it again if it fails.
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::info!("running command: {:?}", self);
        self.run()
            .inspect_err(|_| tracing::error!("failed to run command: {:?}", self))
    }
}
