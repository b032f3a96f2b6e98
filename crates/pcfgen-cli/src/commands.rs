use super::args::{Cli, Commands};
use super::handlers;
use crate::context::ExecutionContext;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let context = || ExecutionContext::new(&cli.config, cli.format);

    match cli.command {
        Commands::Init { force } => handlers::init::handle(&cli.config, force, cli.format),

        Commands::Generate {
            input,
            template,
            output_dir,
            keep,
            dry_run,
        } => handlers::generate::handle(
            &context()?,
            handlers::generate::GenerateArgs {
                input,
                template,
                output_dir,
                keep,
                dry_run,
            },
        ),

        Commands::Check { input, template } => {
            handlers::check::handle(&context()?, input, template)
        }

        Commands::Columns { input } => handlers::columns::handle(&context()?, input),
    }
}
