use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod layout;
mod onboard;
mod writers;

#[derive(Parser)]
#[command(name = "otk")]
#[command(about = "GitOps onboarding toolkit", long_about = None)]
#[command(version)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Create a project namespace with its admin role binding and owner group
	CreateProject(commands::create_project::CreateProjectArgs),

	/// Grant a group a role on a project namespace
	GrantAccess(commands::grant_access::GrantAccessArgs),

	/// Onboard teams onto clusters
	Onboard(commands::onboard::OnboardArgs),
}

/// Initialize tracing with logfmt output format.
fn init_logger(level: &str) {
	let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::registry()
		.with(filter)
		.with(tracing_logfmt::layer())
		.init();
}

/// Extract log level from command.
fn log_level(command: &Commands) -> &str {
	match command {
		Commands::CreateProject(args) => &args.log_level,
		Commands::GrantAccess(args) => &args.log_level,
		Commands::Onboard(args) => match &args.command {
			commands::onboard::OnboardCommands::Cluster(cluster) => &cluster.log_level,
		},
	}
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	init_logger(log_level(&cli.command));

	match cli.command {
		Commands::CreateProject(args) => commands::create_project::run(args),
		Commands::GrantAccess(args) => commands::grant_access::run(args),
		Commands::Onboard(args) => commands::onboard::run(args),
	}
}
