use clap::Parser;
use miette::Result;

use abriplan::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    match cli.command {
        Commands::Generate(args) => abriplan::cli::commands::generate::run(args, &global),
        Commands::Families(args) => abriplan::cli::commands::families::run(args, &global),
        Commands::Plan(args) => abriplan::cli::commands::plan::run(args, &global),
        Commands::Harvest(args) => abriplan::cli::commands::harvest::run(args, &global),
        Commands::Export(args) => abriplan::cli::commands::export::run(args, &global),
        Commands::Completions(args) => abriplan::cli::commands::completions::run(args),
    }
}
