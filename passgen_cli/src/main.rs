use anyhow::Result;
use clap::Parser;

use args::Cli;
use passgen::fs::config::Preferences;

mod args;
mod commands;

fn init_logger() {
    use std::io::Write;

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let color = buf.default_level_style(record.level());

            writeln!(
                buf,
                "{}:{} {} {color}{}{color:#} - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                buf.timestamp(),
                record.level(),
                record.args()
            )
        })
        .init();
}

fn main() -> Result<()> {
    init_logger();

    let args = Cli::parse();

    let mut stdout = std::io::stdout().lock();

    if let Some(password) = &args.check {
        return commands::check(&mut stdout, password, args.quiet);
    }

    let (config, count) = commands::resolve(&args, Preferences::get());

    commands::generate(&mut stdout, &config, count, args.quiet, args.entropy)?;

    if args.save_defaults {
        commands::save_defaults(&mut stdout, config, count, args.quiet)?;
    }

    Ok(())
}
