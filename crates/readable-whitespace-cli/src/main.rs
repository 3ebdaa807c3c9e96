use anyhow::{Context, Result, bail};
use readable_whitespace_config::Config;
use readable_whitespace_engine::{
    HintMarker, HintRules, PREVIEW_SOURCE, Placement, TextBuffer, hints_for_source_with,
    render_to_string,
};
use readable_whitespace_syntax::{debug_tree, parse};
use std::{
    env,
    path::{Path, PathBuf},
    process,
};

mod viewer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    View,
    Print,
    Hints,
    Tree,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    File(PathBuf),
    Preview,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    mode: Mode,
    input: Input,
    config: Option<PathBuf>,
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {program} [--print | --hints | --tree] [--config <path>] <file>\n       {program} [--print | --hints | --tree] --preview"
    )
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut mode = Mode::View;
    let mut input = None;
    let mut config = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let next_mode = match arg.as_str() {
            "--print" => Some(Mode::Print),
            "--hints" => Some(Mode::Hints),
            "--tree" => Some(Mode::Tree),
            _ => None,
        };
        if let Some(next_mode) = next_mode {
            if mode != Mode::View {
                bail!("only one of --print, --hints and --tree may be given");
            }
            mode = next_mode;
            continue;
        }

        match arg.as_str() {
            "--config" => {
                let Some(path) = iter.next() else {
                    bail!("--config needs a path");
                };
                config = Some(PathBuf::from(path));
            }
            "--preview" => {
                if input.replace(Input::Preview).is_some() {
                    bail!("give either a file or --preview, not both");
                }
            }
            flag if flag.starts_with("--") => bail!("unknown option {flag}"),
            path => {
                if input.replace(Input::File(PathBuf::from(path))).is_some() {
                    bail!("give either a file or --preview, not both");
                }
            }
        }
    }

    let Some(input) = input else {
        bail!("no file given");
    };
    Ok(Args {
        mode,
        input,
        config,
    })
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("Config file '{}' does not exist", path.display())),
        None => Ok(Config::load()?.unwrap_or_default()),
    }
}

/// One line per marker: `<offset> <above|below> line <n>`, lines counted from 1.
fn format_hints(source: &str, markers: &[HintMarker]) -> String {
    let text = TextBuffer::new(source);
    markers
        .iter()
        .map(|marker| {
            let placement = match marker.placement {
                Placement::Above => "above",
                Placement::Below => "below",
            };
            let line = text
                .line_of_offset(marker.offset)
                .map_or_else(|| "?".to_string(), |line| (line + 1).to_string());
            format!("{} {placement} line {line}\n", marker.offset)
        })
        .collect()
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("readable-whitespace", String::as_str);

    let args = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{}", usage(program));
            process::exit(2);
        }
    };

    if let Err(e) = run(args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    let (title, source) = match &args.input {
        Input::Preview => ("preview".to_string(), PREVIEW_SOURCE.to_string()),
        Input::File(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read '{}'", path.display()))?;
            (path.display().to_string(), source)
        }
    };

    let rules = HintRules {
        above_return: config.rules.above_return,
        below_closing_brace: config.rules.below_closing_brace,
    };
    let markers = hints_for_source_with(&source, rules);
    log::info!("{title}: {} hints", markers.len());

    match args.mode {
        Mode::Print => print!(
            "{}",
            render_to_string(&source, &markers, &config.display.hint_glyph)
        ),
        Mode::Hints => print!("{}", format_hints(&source, &markers)),
        Mode::Tree => print!("{}", debug_tree(&parse(&source))),
        Mode::View => viewer::run(&title, &source, &markers, &config.display.hint_glyph)?,
    }

    Ok(())
}
