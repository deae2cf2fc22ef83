use std::io::{self, Write};

use anyhow::Result;
use colored::{ColoredString, Colorize};

use passgen::fs::config::Preferences;
use passgen::{CharacterPool, GenerationConfig, Strength, StrengthReport};

use crate::args::Cli;

pub fn generate(
    out: &mut impl Write,
    config: &GenerationConfig,
    count: usize,
    quiet: bool,
    entropy: bool,
) -> Result<()> {
    let passwords = passgen::generate_multiple(config, count)?;

    if quiet {
        for password in &passwords {
            writeln!(out, "{password}")?;
        }
        return Ok(());
    }

    if let [password] = passwords.as_slice() {
        writeln!(out, "Generated password: {}", password.as_str().bold())?;
    } else {
        writeln!(out, "Generated {count} passwords:")?;
        for (i, password) in passwords.iter().enumerate() {
            writeln!(out, "  {}: {password}", i + 1)?;
        }
    }

    if entropy {
        let bits = CharacterPool::build(config)?.entropy_bits(config.length);
        writeln!(out, "Estimated entropy: {bits:.1} bits")?;
    }

    Ok(())
}

pub fn check(out: &mut impl Write, password: &str, quiet: bool) -> Result<()> {
    let report = passgen::score(password);

    if quiet {
        writeln!(out, "{}", report.score)?;
        return Ok(());
    }

    write_report(out, password, &report)?;

    Ok(())
}

fn write_report(out: &mut impl Write, password: &str, report: &StrengthReport) -> io::Result<()> {
    writeln!(out, "Password: {password}")?;
    writeln!(out, "Length: {}", report.length)?;
    writeln!(out, "Has lowercase: {}", report.has_lower)?;
    writeln!(out, "Has uppercase: {}", report.has_upper)?;
    writeln!(out, "Has digits: {}", report.has_digit)?;
    writeln!(out, "Has symbols: {}", report.has_symbol)?;
    writeln!(out, "Strength score: {}/100", report.score)?;
    writeln!(out, "Strength: {}", colored_label(report.label))?;

    for suggestion in report.suggestions() {
        writeln!(out, "  {} {suggestion}", "-".dimmed())?;
    }

    Ok(())
}

fn colored_label(label: Strength) -> ColoredString {
    let text = label.to_string();

    match label {
        Strength::Strong => text.green().bold(),
        Strength::Medium => text.yellow().bold(),
        Strength::Weak => text.red().bold(),
    }
}

/// Command line options take precedence over stored preferences, which are
/// skipped entirely with `--reset-defaults`.
pub fn resolve(args: &Cli, preferences: &Preferences) -> (GenerationConfig, usize) {
    let defaults = Preferences::default();
    let preferences = if args.reset_defaults {
        &defaults
    } else {
        preferences
    };

    let mut config = preferences.generation.clone();

    if let Some(length) = args.length {
        config.length = length.into();
    }
    if let Some(exclude) = &args.exclude {
        config.exclude_chars = exclude.chars().collect();
    }

    config.use_lowercase &= !args.classes.no_lowercase;
    config.use_uppercase &= !args.classes.no_uppercase;
    config.use_digits &= !args.classes.no_digits;
    config.use_symbols &= !args.classes.no_symbols;

    let count = args.count.map_or(preferences.count, usize::from);

    (config, count)
}

pub fn save_defaults(
    out: &mut impl Write,
    config: GenerationConfig,
    count: usize,
    quiet: bool,
) -> Result<()> {
    let preferences = Preferences {
        count,
        generation: config,
    };

    let path = preferences.save()?;

    if !quiet {
        let message = format!("Defaults saved in {}", path.display()).green();
        writeln!(out, "{message}")?;
    }

    Ok(())
}
