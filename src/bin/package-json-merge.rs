//! package-json-merge - merge multiple package.json files into one.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use package_json_merge::{MergeCommand, MergeOptions};

#[derive(Debug, Parser)]
#[command(
    name = "package-json-merge",
    version,
    about = "CLI to merge multiple package.json",
    override_usage = "package-json-merge [OPTIONS] json1 json2 ... target_json"
)]
struct Cli {
    /// Source manifests followed by the target manifest
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Create target package.json
    #[arg(short = 'n', long = "new")]
    create_new: bool,

    /// Merge only dependencies, devDependencies and peerDependencies
    #[arg(long)]
    only_dependencies: bool,

    /// Set the name of the target package
    #[arg(long)]
    name: Option<String>,

    /// Set the version of the target package
    #[arg(long)]
    package_version: Option<String>,

    /// Set the description of the target package
    #[arg(long)]
    description: Option<String>,

    /// Fields that must not be merged (repeatable, comma-separated)
    #[arg(long, value_delimiter = ',')]
    not_merge: Vec<String>,

    /// Log which fields are merged, kept or created
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn merge_options(&self) -> MergeOptions {
        let mut builder = MergeOptions::builder()
            .only_dependencies(self.only_dependencies)
            .not_merge(self.not_merge.iter().cloned());
        if let Some(name) = &self.name {
            builder = builder.name(name.as_str());
        }
        if let Some(version) = &self.package_version {
            builder = builder.package_version(version.as_str());
        }
        if let Some(description) = &self.description {
            builder = builder.description(description.as_str());
        }
        builder.build()
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = cli.merge_options();
    let command = match MergeCommand::from_paths(cli.files, cli.create_new, options) {
        Ok(command) => command,
        Err(e) if e.is_usage() => {
            println!("{}", e);
            // Printing help only fails if stdout is gone.
            let _ = Cli::command().print_help();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("Something went wrong : {}", e);
            return ExitCode::FAILURE;
        }
    };

    match command.run() {
        Ok(_) => {
            println!("Finish");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Something went wrong : {}", e);
            ExitCode::FAILURE
        }
    }
}
