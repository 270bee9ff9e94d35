// SPDX-License-Identifier: MPL-2.0
use thumbnail_gallery::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Usage: thumbnail_gallery [OPTIONS] [MANIFEST]

Arguments:
  [MANIFEST]  Gallery manifest (.toml) to open

Options:
  --lang <LOCALE>      Interface language (e.g. en-US, fr)
  --config-dir <DIR>   Directory holding settings.toml
  -h, --help           Print help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring invalid --lang value");
        None
    });
    let config_dir = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring invalid --config-dir value");
        None
    });
    let manifest_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    app::run(Flags {
        lang,
        config_dir,
        manifest_path,
    })
}
