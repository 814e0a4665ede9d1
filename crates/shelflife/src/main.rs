mod cli;
mod commands;
mod context;
mod logging;
mod output;

use clap::Parser;

use cli::{Cli, Commands};
use context::RuntimeContext;

fn run(ctx: &RuntimeContext, command: &Commands) -> anyhow::Result<()> {
    match command {
        Commands::Init => commands::init::run(ctx),
        Commands::List(args) => commands::list::run(ctx, args),
        Commands::Show(args) => commands::show::run(ctx, args),
        Commands::Summary(args) => commands::summary::run(ctx, args),
        Commands::Alerts(args) => commands::alerts::run(ctx, args),
        Commands::Validate => commands::validate::run(ctx),
    }
}

fn main() {
    let cli = Cli::parse();

    let result = RuntimeContext::from_global_args(&cli.global).and_then(|ctx| {
        logging::init(&ctx.config.logging.level);
        tracing::debug!(command = cli.command.name(), now = %ctx.now, "starting");
        run(&ctx, &cli.command)
    });

    if let Err(e) = result {
        if cli.global.json {
            output::output_json_error(cli.command.name(), &format!("{e:#}"));
        } else {
            output::print_error(&format!("Error: {e:#}"));
        }
        std::process::exit(1);
    }
}
