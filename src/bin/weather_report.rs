/// Weather report tool
///
/// Usage: weather_report [--config FILE] [--store FILE] [--hours N] [--steps N]
///                       [--command "set wind 4"]... [--json]
///
/// Loads a session, runs the given commands, then advances in-world time by
/// N hours per step and prints a report after every step.

use anyhow::{bail, Context, Result};
use tabletop_weather::{JsonFileStore, MemoryStore, WeatherCommand, WeatherConfig, WeatherSession};

struct Args {
    config: Option<String>,
    store: Option<String>,
    hours: f64,
    steps: u32,
    commands: Vec<WeatherCommand>,
    json: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        config: None,
        store: None,
        hours: 4.0,
        steps: 6,
        commands: Vec::new(),
        json: false,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => args.config = Some(iter.next().context("--config needs a path")?),
            "--store" => args.store = Some(iter.next().context("--store needs a path")?),
            "--hours" => {
                let value = iter.next().context("--hours needs a number")?;
                args.hours = value.parse().with_context(|| format!("invalid --hours '{}'", value))?;
            }
            "--steps" => {
                let value = iter.next().context("--steps needs a number")?;
                args.steps = value.parse().with_context(|| format!("invalid --steps '{}'", value))?;
            }
            "--command" => {
                let line = iter.next().context("--command needs a command line")?;
                args.commands.push(line.parse()?);
            }
            "--json" => args.json = true,
            other => bail!("unknown argument '{}'", other),
        }
    }

    Ok(args)
}

fn print_report(session: &WeatherSession, json: bool) -> Result<()> {
    let report = session.report();
    if json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}\n", report);
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => WeatherConfig::load(path)?,
        None => WeatherConfig::default(),
    };

    let mut session = match &args.store {
        Some(path) => WeatherSession::new(config, JsonFileStore::open(path)?)?,
        None => WeatherSession::new(config, MemoryStore::new())?,
    };

    for command in args.commands {
        session
            .execute(command.clone())
            .with_context(|| format!("command '{}' failed", command))?;
    }

    print_report(&session, args.json)?;

    for _ in 0..args.steps {
        let mut refreshed = false;
        let mut remaining = args.hours;
        // Feed time in interval-sized chunks so long steps still refresh
        let interval = session.config().update_interval_hours;
        while remaining > 0.0 {
            let chunk = remaining.min(interval);
            refreshed |= session.advance_time(chunk)?;
            remaining -= chunk;
        }
        if refreshed {
            print_report(&session, args.json)?;
        } else {
            log::info!("No refresh yet at {}", session.clock().format());
        }
    }

    Ok(())
}
