// SPDX-License-Identifier: MPL-2.0
use iced_carousel::app::{self, Flags};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

const HELP: &str = "\
iced_carousel - image carousel

USAGE:
  iced_carousel [OPTIONS] [DIRECTORY]

OPTIONS:
  --config-dir <PATH>  Directory holding settings.toml
  --data-dir <PATH>    Directory holding session state
  -v, --verbose        More logging (repeat for trace)
  -h, --help           Print this help
";

fn init_tracing(verbosity: usize) {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "iced_carousel={level},wgpu=warn,iced_wgpu=warn,naga=warn,cosmic_text=warn"
        ))
    });
    fmt().with_env_filter(filter).with_target(true).init();
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let mut verbosity = 0;
    while args.contains(["-v", "--verbose"]) {
        verbosity += 1;
    }
    init_tracing(verbosity);

    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring --config-dir");
        None
    });
    let data_dir: Option<String> = args.opt_value_from_str("--data-dir").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring --data-dir");
        None
    });
    let directory = args
        .finish()
        .into_iter()
        .next()
        .map(PathBuf::from);

    app::run(Flags {
        directory,
        data_dir,
        config_dir,
    })
}
