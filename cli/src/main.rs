use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use serde_json::json;
use vizspace::anchors::find_closest_anchor_pair;
use vizspace::geometry::Rect;
use vizspace::routing::{LineKind, path_data, sketch};
use vizspace::{ConfigError, Event, Input, Scene, Workspace, WorkspaceConfig};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    #[error("io failed on {path}: {source}")]
    Io { path: String, source: io::Error },
    #[error("line {line}: {source}")]
    Script { line: usize, source: serde_json::Error },
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no anchor pair: one of the boxes is empty")]
    NoAnchorPair,
}

#[derive(Parser, Debug)]
#[command(name = "vizspace", about = "Headless visualization workspace")]
struct Cli {
    /// JSON config file; falls back to VIZ_* environment variables.
    #[arg(long, env = "VIZ_CONFIG")]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a JSONL script of scene commands and inputs.
    Replay(ReplayArgs),
    /// Print the closest anchor pair and path between two boxes.
    Anchors(AnchorsArgs),
}

#[derive(Args, Debug)]
struct ReplayArgs {
    #[arg(long, default_value = "-", help = "Script file path, or - for stdin")]
    input: String,

    #[arg(long, default_value_t = 0.0)]
    workspace_x: f64,

    #[arg(long, default_value_t = 0.0)]
    workspace_y: f64,

    #[arg(long, default_value_t = 1280.0)]
    workspace_width: f64,

    #[arg(long, default_value_t = 800.0)]
    workspace_height: f64,

    /// Print the overlay SVG instead of the edge list at the end.
    #[arg(long, default_value_t = false)]
    svg: bool,

    /// Emit scroll/zoom notifications only at the end of the script.
    #[arg(long, default_value_t = false)]
    defer_notifications: bool,
}

#[derive(Args, Debug)]
struct AnchorsArgs {
    /// Source box as `x,y,width,height`.
    #[arg(long, value_parser = parse_rect)]
    from: Rect,

    /// Target box as `x,y,width,height`.
    #[arg(long, value_parser = parse_rect)]
    to: Rect,

    #[arg(long, default_value_t = vizspace::consts::ANCHOR_PADDING)]
    padding: f64,

    #[arg(long, value_enum, default_value_t = KindArg::Rectilinear)]
    kind: KindArg,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindArg {
    Rectilinear,
    Direct,
}

impl From<KindArg> for LineKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Rectilinear => LineKind::Rectilinear,
            KindArg::Direct => LineKind::Direct,
        }
    }
}

/// Script lines that edit the in-memory scene instead of the workspace.
#[derive(Debug, Deserialize)]
#[serde(tag = "scene", rename_all = "camelCase")]
enum SceneCommand {
    Place { key: String, x: f64, y: f64, width: f64, height: f64 },
    Remove { key: String },
    Workspace { x: f64, y: f64, width: f64, height: f64 },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScriptLine {
    Scene(SceneCommand),
    Input(Input),
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let raw = fs::read_to_string(path).map_err(|source| CliError::Io { path: path.clone(), source })?;
            WorkspaceConfig::from_json(&raw)?
        }
        None => WorkspaceConfig::from_env()?,
    };

    match cli.command {
        Command::Replay(args) => run_replay(config, &args),
        Command::Anchors(args) => run_anchors(&args),
    }
}

fn parse_rect(raw: &str) -> Result<Rect, String> {
    let parts: Vec<f64> = raw
        .split(',')
        .map(|part| part.trim().parse::<f64>().map_err(|error| format!("{part:?}: {error}")))
        .collect::<Result<_, _>>()?;
    match parts.as_slice() {
        [x, y, width, height] => Ok(Rect::new(*x, *y, *width, *height)),
        _ => Err(format!("expected x,y,width,height, got {raw:?}")),
    }
}

fn open_input(path: &str) -> Result<Box<dyn BufRead>, CliError> {
    if path == "-" {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let file = File::open(path).map_err(|source| CliError::Io { path: path.to_owned(), source })?;
    Ok(Box::new(BufReader::new(file)))
}

fn run_replay(config: WorkspaceConfig, args: &ReplayArgs) -> Result<(), CliError> {
    let workspace_rect = Rect::new(args.workspace_x, args.workspace_y, args.workspace_width, args.workspace_height);
    let mut ws = Workspace::with_config(Scene::new(workspace_rect), config);
    let reader = open_input(&args.input)?;
    let mut out = io::stdout().lock();
    let stdout_err = |source: io::Error| CliError::Io { path: "stdout".to_owned(), source };

    let mut applied = 0_usize;
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| CliError::Io { path: args.input.clone(), source })?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let parsed: ScriptLine =
            serde_json::from_str(trimmed).map_err(|source| CliError::Script { line: idx + 1, source })?;

        let mut events = match parsed {
            ScriptLine::Scene(command) => apply_scene(&mut ws, command),
            ScriptLine::Input(input) => ws.dispatch(input),
        };
        settle_moves(&mut ws, &mut events);
        if !args.defer_notifications {
            events.extend(ws.flush_notifications());
        }
        for event in &events {
            writeln!(out, "{}", serde_json::to_string(event)?).map_err(stdout_err)?;
        }
        applied += 1;
    }

    for event in ws.flush_notifications() {
        writeln!(out, "{}", serde_json::to_string(&event)?).map_err(stdout_err)?;
    }
    if args.svg {
        writeln!(out, "{}", ws.render_svg()).map_err(stdout_err)?;
    } else {
        writeln!(out, "{}", serde_json::to_string_pretty(&ws.render())?).map_err(stdout_err)?;
    }
    tracing::info!(lines = applied, edges = ws.edges().len(), "replay complete");
    Ok(())
}

fn apply_scene(ws: &mut Workspace<Scene>, command: SceneCommand) -> Vec<Event> {
    match command {
        SceneCommand::Place { key, x, y, width, height } => {
            ws.layout_mut().place(key.clone(), Rect::new(x, y, width, height));
            ws.geometry_changed(&key)
        }
        SceneCommand::Remove { key } => {
            ws.layout_mut().remove(&key);
            ws.geometry_changed(&key)
        }
        SceneCommand::Workspace { x, y, width, height } => {
            ws.layout_mut().set_workspace_rect(Rect::new(x, y, width, height));
            ws.recompute_all()
        }
    }
}

/// Play the host's part for `moved`: write the new position, then report
/// the geometry change back.
fn settle_moves(ws: &mut Workspace<Scene>, events: &mut Vec<Event>) {
    let moved = ws.layout_mut().apply(events);
    for key in moved {
        let follow_up = ws.geometry_changed(&key);
        events.extend(follow_up);
    }
}

fn run_anchors(args: &AnchorsArgs) -> Result<(), CliError> {
    let pair = find_closest_anchor_pair(&args.from, &args.to, args.padding, &[]).ok_or(CliError::NoAnchorPair)?;
    let line = sketch(&pair, args.kind.into());
    let path = path_data(&line.points);
    let rendered = serde_json::to_string_pretty(&json!({
        "pair": pair,
        "points": line.points,
        "path": path,
    }))?;
    println!("{rendered}");
    Ok(())
}
