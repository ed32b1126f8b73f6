use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, Command};
use sceneops_cli::{commands, logging, SceneopsConfig};
use sceneops_copilot::DEFAULT_PROMPT;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

fn cli() -> Command {
    Command::new("sceneops")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Run whitelisted 3D scene plans")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Path to a TOML configuration file"),
        )
        .arg(
            Arg::new("log-filter")
                .long("log-filter")
                .global(true)
                .help("Tracing filter used when RUST_LOG is unset (default: info)"),
        )
        .subcommand(
            Command::new("run")
                .about("Execute plan text against an in-memory scene")
                .arg(
                    Arg::new("file")
                        .long("file")
                        .short('f')
                        .value_parser(value_parser!(PathBuf))
                        .help("Read plan text from a file instead of stdin"),
                ),
        )
        .subcommand(
            Command::new("prompt")
                .about("Generate a plan from a request and execute it")
                .arg(
                    Arg::new("text")
                        .default_value(DEFAULT_PROMPT)
                        .help("Natural-language request"),
                ),
        )
        .subcommand(
            Command::new("capabilities")
                .about("List whitelisted capabilities")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(Command::new("examples").about("Show example requests"))
}

fn read_plan_text(file: Option<&PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read plan file {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read plan from stdin")?;
            Ok(text)
        }
    }
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let matches = cli().get_matches();

    logging::init(matches.get_one::<String>("log-filter").map(String::as_str));

    let config = SceneopsConfig::load(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))
        .context("failed to load configuration")?;
    tracing::debug!("Configuration: {:?}", config);

    let mut stdout = std::io::stdout().lock();

    match matches.subcommand() {
        Some(("run", args)) => {
            let text = read_plan_text(args.get_one::<PathBuf>("file"))?;
            let success = commands::run_plan(&text, &mut stdout)?;
            Ok(exit_code(success))
        }
        Some(("prompt", args)) => {
            let text = args
                .get_one::<String>("text")
                .map_or(DEFAULT_PROMPT, String::as_str);
            let success = commands::run_prompt(text, &config, &mut stdout)?;
            Ok(exit_code(success))
        }
        Some(("capabilities", args)) => {
            commands::capabilities(args.get_flag("json"), &mut stdout)?;
            Ok(ExitCode::SUCCESS)
        }
        Some(("examples", _)) => {
            commands::examples(&mut stdout)?;
            Ok(ExitCode::SUCCESS)
        }
        _ => {
            cli().print_help()?;
            Ok(ExitCode::FAILURE)
        }
    }
}
