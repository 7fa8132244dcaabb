use flash_cues::app::{self, paths, Flags};
use std::path::PathBuf;

const HELP: &str = "\
Usage: flash_cues [OPTIONS] [PAGE]

Arguments:
  [PAGE]                 Markup file to host (a demo page is shown when omitted)

Options:
  --lang <LANG>          UI language, e.g. en-US or it
  --config-dir <DIR>     Directory holding settings.toml
  -h, --help             Print help
";

fn main() -> iced::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        log::warn!("ignoring --lang: {err}");
        None
    });
    let config_dir: Option<String> = args
        .opt_value_from_str("--config-dir")
        .unwrap_or_else(|err| {
            log::warn!("ignoring --config-dir: {err}");
            None
        });
    let page_path = args.finish().into_iter().next().map(PathBuf::from);

    paths::init_cli_overrides(config_dir);

    app::run(Flags { lang, page_path })
}
