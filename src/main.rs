// SPDX-License-Identifier: MPL-2.0
use chat_lens::app::{self, Flags};
use chat_lens::logging;
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "\
Usage: chat_lens [OPTIONS]

Options:
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --chat <ID>           Chat whose media is shown
  --database <PATH>     Message store file
  --media-dir <DIR>     Downloaded media directory
  --config-dir <DIR>    Directory holding settings.toml
  --data-dir <DIR>      Application data directory
  --password            Open the Change Password form
  -h, --help            Print this help
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        chat: args.opt_value_from_str("--chat")?,
        database: args.opt_value_from_str::<_, PathBuf>("--database")?,
        media_dir: args.opt_value_from_str::<_, PathBuf>("--media-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        open_password: args.contains("--password"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(flags)
}

fn main() -> ExitCode {
    logging::init();

    let mut help_args = pico_args::Arguments::from_env();
    if help_args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("chat_lens: {err}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
