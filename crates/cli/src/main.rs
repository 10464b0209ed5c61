mod demo;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use libris_kernel::settings::{CatalogPolicy, Settings};

#[derive(Parser)]
#[command(name = "libris")]
#[command(about = "In-memory library catalog tooling")]
struct Cli {
    /// Override the configured catalog policy
    #[arg(long, global = true, value_enum)]
    policy: Option<PolicyArg>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the catalog self-checks and report each result
    Demo,
    /// Print the effective settings as JSON
    Settings,
    /// Print a stocked sample catalog as JSON
    Catalog,
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    Strict,
    Permissive,
}

impl From<PolicyArg> for CatalogPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Strict => CatalogPolicy::Strict,
            PolicyArg::Permissive => CatalogPolicy::Permissive,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load().with_context(|| "failed to load Libris settings")?;
    if let Some(policy) = cli.policy {
        settings.catalog.policy = policy.into();
    }

    libris_telemetry::init(&settings.telemetry);

    tracing::info!(
        env = ?settings.environment,
        policy = ?settings.catalog.policy,
        "libris bootstrap complete"
    );

    match cli.command {
        Command::Demo => {
            let checks = demo::run(settings.catalog.policy);
            for check in &checks {
                let outcome = if check.passed { "Passed" } else { "Failed" };
                println!("Test {}: {}", check.name, outcome);
            }

            let failed = checks.iter().filter(|check| !check.passed).count();
            if failed > 0 {
                anyhow::bail!("{} of {} checks failed", failed, checks.len());
            }
        }
        Command::Settings => {
            let rendered = serde_json::to_string_pretty(&settings)
                .with_context(|| "failed to render settings")?;
            println!("{rendered}");
        }
        Command::Catalog => {
            let library = demo::sample_library(settings.catalog.policy)
                .with_context(|| "failed to stock sample catalog")?;
            let rendered = serde_json::to_string_pretty(&library)
                .with_context(|| "failed to render catalog")?;
            println!("{rendered}");
        }
    }

    Ok(())
}
