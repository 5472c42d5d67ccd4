// SPDX-License-Identifier: MPL-2.0
use iced_tour::app::{self, paths, Flags};
use iced_tour::tour;
use std::path::PathBuf;

const USAGE: &str = "\
Usage: iced_tour [OPTIONS] [MANIFEST]

Arguments:
  [MANIFEST]          Tour manifest (.toml) to open

Options:
      --slide N       Show slide N (1-based) after opening
      --lang CODE     UI language (e.g. en-US, fr)
      --config-dir D  Directory for settings.toml
      --data-dir D    Directory for persisted state
      --list          Print the resolved tour's slides and exit
  -h, --help          Print help
  -V, --version       Print version";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        println!("{}", USAGE);
        return Ok(());
    }
    if args.contains(["-V", "--version"]) {
        println!("iced_tour {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let list = args.contains("--list");
    let flags = Flags {
        lang: flag_value::<String>(&mut args, "--lang"),
        slide: flag_value::<u32>(&mut args, "--slide"),
        config_dir: flag_value::<String>(&mut args, "--config-dir"),
        data_dir: flag_value::<String>(&mut args, "--data-dir"),
        tour_path: None,
    };

    let mut remaining = args.finish().into_iter();
    let tour_path = remaining.next().and_then(|s| s.into_string().ok());
    if let Some(unexpected) = remaining.next() {
        eprintln!("unexpected argument: {:?}", unexpected);
        eprintln!("{}", USAGE);
        std::process::exit(2);
    }
    let flags = Flags { tour_path, ..flags };

    paths::init_cli_overrides(flags.config_dir.clone(), flags.data_dir.clone());

    if list {
        list_tour(flags.tour_path.as_deref());
        return Ok(());
    }

    app::run(flags)
}

fn flag_value<T>(args: &mut pico_args::Arguments, name: &'static str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match args.opt_value_from_str(name) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("invalid value for {}: {}", name, e);
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    }
}

/// Prints the resolved tour's numbered slides to stdout.
///
/// Resolves the manifest from the positional argument, falling back to the
/// tour persisted from the previous session.
fn list_tour(manifest_arg: Option<&str>) {
    let manifest_path = match manifest_arg.map(PathBuf::from) {
        Some(path) => path,
        None => {
            let (state, _) = app::persisted_state::AppState::load();
            match state.last_tour {
                Some(path) => path,
                None => {
                    eprintln!("no tour to list: pass a manifest path");
                    std::process::exit(1);
                }
            }
        }
    };

    match tour::load_tour(&manifest_path) {
        Ok(tour) => {
            println!("{}", tour.title());
            println!("  0. {} (overview)", tour.overview().label());
            for (offset, slide) in tour.slides().iter().enumerate() {
                println!("  {}. {}", offset + 1, slide.label());
            }
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
