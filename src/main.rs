// SPDX-License-Identifier: MPL-2.0
use qa_console::app::{self, config, Flags};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const HELP: &str = "\
QA Console

USAGE:
  qa_console [OPTIONS]

OPTIONS:
  --lang <LOCALE>       Interface language (pt-BR, en-US)
  --api-url <URL>       API base URL (overrides QA_CONSOLE_API_URL and settings.toml)
  --config-dir <DIR>    Directory holding settings.toml
  --init-config         Write a default settings.toml and exit
  -h, --help            Print this help
";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("qa_console=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    init_tracing();

    let init_config = args.contains("--init-config");
    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unrecognized arguments");
    }

    if init_config {
        return match config::save_with_override(
            &config::Config::default(),
            flags.config_dir.as_ref().map(PathBuf::from),
        ) {
            Ok(path) => {
                println!("{}", path.display());
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("error: {err}");
                ExitCode::FAILURE
            }
        };
    }

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        api_url: args.opt_value_from_str("--api-url")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}
