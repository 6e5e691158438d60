// SPDX-License-Identifier: MPL-2.0
use journal_strip::app::{self, config, paths, Flags};
use journal_strip::application::port::ContentSource;
use journal_strip::infrastructure::ContentfulSource;
use journal_strip::logging;
use std::process::ExitCode;
use std::sync::Arc;

const HELP: &str = "\
Journal Strip

USAGE:
  journal_strip [OPTIONS]

OPTIONS:
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --config-dir <PATH>   Directory holding settings.toml
  -h, --help            Print this help

ENVIRONMENT:
  CONTENTFUL_SPACE_ID       Contentful space to read from
  CONTENTFUL_ACCESS_TOKEN   Delivery API access token
  JOURNAL_STRIP_CONFIG_DIR  Same as --config-dir
  RUST_LOG                  Log filter (default: info)
";

struct Args {
    lang: Option<String>,
    config_dir: Option<String>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Warning: unused arguments left: {remaining:?}");
    }

    Ok(Some(parsed))
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(error) => {
            eprintln!("Error: {error}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(error) = logging::init() {
        eprintln!("Warning: {error}");
    }

    paths::init_cli_overrides(args.config_dir);

    let (mut config, config_warning) = config::load();
    config::apply_env_overrides(&mut config);

    let source = match ContentfulSource::new(config.contentful_settings()) {
        Ok(source) => source,
        Err(error) => {
            tracing::error!(%error, "failed to create the HTTP client");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(settings = ?source.settings(), "content source ready");
    let content_source: Arc<dyn ContentSource> = Arc::new(source);

    let flags = Flags {
        lang: args.lang,
        config,
        config_warning,
        content_source,
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
