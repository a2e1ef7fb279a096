use std::path::PathBuf;

use anyhow::{bail, Context};
use figurekit::designer::outline;
use figurekit::{designer_from_config, format_outline, init_logging, Config, BUILD_DATE, VERSION};

const USAGE: &str = "usage: figurekit [--config FILE] [--save-as FILE] [DOCUMENT]";

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    save_as: Option<PathBuf>,
    document: Option<PathBuf>,
}

fn parse_args() -> anyhow::Result<Option<Args>> {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--version" | "-V" => {
                println!("figurekit {} ({})", VERSION, BUILD_DATE);
                return Ok(None);
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                return Ok(None);
            }
            "--config" => {
                let path = it.next().context("--config needs a file")?;
                args.config = Some(PathBuf::from(path));
            }
            "--save-as" => {
                let path = it.next().context("--save-as needs a file")?;
                args.save_as = Some(PathBuf::from(path));
            }
            other if other.starts_with('-') => bail!("unknown option {}\n{}", other, USAGE),
            other => args.document = Some(PathBuf::from(other)),
        }
    }
    Ok(Some(args))
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let Some(args) = parse_args()? else {
        return Ok(());
    };

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("failed to read config {}", path.display()))?,
        None => match Config::default_path() {
            Ok(path) => Config::load_or_default(&path),
            Err(e) => {
                tracing::warn!("{}", e);
                Config::default()
            }
        },
    };

    let mut state = designer_from_config(&config)
        .with_clipboard(figurekit::clipboard::best_available());

    let Some(document) = &args.document else {
        println!("figurekit {}", VERSION);
        println!("tools: {}", state.tools.list_tools().join(", "));
        return Ok(());
    };

    let count = state.load_from_file(document)?;
    println!("{}: {} figures", document.display(), count);
    print!("{}", format_outline(&outline::build(&state.storage)));

    if let Some(target) = &args.save_as {
        state.save_to_file(target)?;
        println!("saved to {}", target.display());
    }

    Ok(())
}
