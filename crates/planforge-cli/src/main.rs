//! planforge - publish CI build plans from code
//!
//! ## Commands
//!
//! - `list`: Show the plan catalog
//! - `validate`: Build and offline-validate one or all plans
//! - `publish`: Publish a plan and its permissions to the server

mod telemetry;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use planforge_client::{Publisher, ServerConfig};
use planforge_plans::{
    build_plan, build_plan_permissions, catalog, find_plan, TeamConfig,
};
use planforge_specs::{validate_permissions, validate_plan};

#[derive(Parser)]
#[command(name = "planforge")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Publish CI build plans from code", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the plan catalog
    List,

    /// Build and offline-validate one plan, or all plans
    Validate {
        /// Plan key (default: every plan in the catalog)
        plan_key: Option<String>,
    },

    /// Publish a plan and its permissions to the server
    Publish {
        /// Plan key
        plan_key: String,

        /// Validate and print the serialized plan without contacting the server
        #[arg(long)]
        dry_run: bool,

        /// Server base URL (default: PLANFORGE_SERVER or http://localhost:8085)
        #[arg(long)]
        server: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.verbose, cli.json);

    let team_config = TeamConfig::from_env();

    match cli.command {
        Commands::List => cmd_list(&team_config),
        Commands::Validate { plan_key } => cmd_validate(&team_config, plan_key.as_deref()),
        Commands::Publish {
            plan_key,
            dry_run,
            server,
        } => cmd_publish(&team_config, &plan_key, dry_run, server.as_deref()).await,
    }
}

fn cmd_list(team_config: &TeamConfig) -> Result<()> {
    for description in catalog(team_config) {
        println!(
            "{}-{}  {}  ({} tasks)",
            description.project_key,
            description.plan_key,
            description.plan_name,
            description.tasks.len()
        );
    }
    Ok(())
}

fn cmd_validate(team_config: &TeamConfig, plan_key: Option<&str>) -> Result<()> {
    let descriptions = match plan_key {
        Some(key) => vec![resolve(team_config, key)?],
        None => catalog(team_config),
    };

    for description in descriptions {
        let plan = build_plan(&description);
        validate_plan(&plan)
            .with_context(|| format!("plan {} failed validation", description.plan_key))?;
        let permissions = build_plan_permissions(team_config, &plan.identifier());
        validate_permissions(&permissions)
            .with_context(|| format!("permissions {} failed validation", description.plan_key))?;
        println!("{}  ok", plan.identifier());
    }
    Ok(())
}

async fn cmd_publish(
    team_config: &TeamConfig,
    plan_key: &str,
    dry_run: bool,
    server: Option<&str>,
) -> Result<()> {
    let description = resolve(team_config, plan_key)?;
    let plan = build_plan(&description);
    let identifier = plan.identifier();

    validate_plan(&plan).with_context(|| format!("plan {identifier} failed validation"))?;
    let permissions = build_plan_permissions(team_config, &identifier);
    validate_permissions(&permissions)
        .with_context(|| format!("permissions {identifier} failed validation"))?;

    if dry_run {
        let plan_payload = serde_json::to_string_pretty(&plan)?;
        println!("{plan_payload}");
        info!(plan = %identifier, "Dry run, not publishing");
        return Ok(());
    }

    let server_config = match server {
        Some(url) => ServerConfig::new(url),
        None => ServerConfig::from_env(),
    };
    let publisher = Publisher::http(server_config).context("Failed to set up publish client")?;

    let receipt = publisher
        .publish(&plan, &permissions)
        .await
        .with_context(|| format!("Failed to publish {identifier}"))?;

    info!(
        plan = %receipt.identifier,
        plan_digest = %receipt.plan_digest,
        permissions_digest = %receipt.permissions_digest,
        "Published plan and permissions"
    );
    println!("published {}", receipt.identifier);
    Ok(())
}

fn resolve(team_config: &TeamConfig, plan_key: &str) -> Result<planforge_plans::PlanDescription> {
    match find_plan(team_config, plan_key) {
        Some(description) => Ok(description),
        None => {
            let known: Vec<String> = catalog(team_config)
                .iter()
                .map(|description| description.plan_key.clone())
                .collect();
            bail!("unknown plan key {plan_key:?}; known plans: {}", known.join(", "))
        }
    }
}
