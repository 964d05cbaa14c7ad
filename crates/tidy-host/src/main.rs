//! `tidy`: rename layers of a scene document from the command line

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::{Path, PathBuf};
use tidy_core::{
    AllOptions, EngineConfig, HostEvent, JsonFileSettingsStore, Language, MemorySettingsStore,
    OptionKey, PluginEvent, PluginSession, RenameEngine, SettingsStore,
};
use tidy_scene::{NodeId, SceneDocument, SceneStore};
use tracing_subscriber::EnvFilter;

const OPTION_FLAGS: [(&str, &str); 6] = [
    ("locked", "Also rename locked layers"),
    ("hidden", "Also rename hidden layers"),
    ("instance", "Also rename instances and their contents"),
    ("custom-names", "Replace custom names too"),
    ("show-spacing", "Append auto-layout spacing to frame names"),
    ("pascal-case", "Use PascalCase instead of kebab-case"),
];

fn option_args(command: Command) -> Command {
    let command = OPTION_FLAGS.iter().fold(command, |command, (name, help)| {
        command.arg(
            Arg::new(*name)
                .long(*name)
                .action(ArgAction::SetTrue)
                .help(*help),
        )
    });
    command.arg(
        Arg::new("language")
            .long("language")
            .value_parser(value_parser!(Language))
            .help("Notification language (en, zh)"),
    )
}

fn settings_arg() -> Arg {
    Arg::new("settings")
        .long("settings")
        .value_parser(value_parser!(PathBuf))
        .help("JSON settings file holding the saved options")
}

fn cli() -> Command {
    Command::new("tidy")
        .version(tidy_core::VERSION)
        .about("Rename design layers to a consistent convention")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(option_args(
            Command::new("rename")
                .about("Rename the selected layers of a scene document")
                .arg(
                    Arg::new("scene")
                        .long("scene")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Scene document (JSON)"),
                )
                .arg(
                    Arg::new("selection")
                        .long("selection")
                        .value_delimiter(',')
                        .help("Comma-separated node ids; defaults to the document's selection"),
                )
                .arg(settings_arg())
                .arg(
                    Arg::new("engine-config")
                        .long("engine-config")
                        .value_parser(value_parser!(PathBuf))
                        .help("Engine configuration (TOML or JSON)"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .value_parser(value_parser!(PathBuf))
                        .help("Write the renamed document here instead of stdout"),
                ),
        ))
        .subcommand(option_args(
            Command::new("settings")
                .about("Show saved options, or update them with the given flags")
                .arg(settings_arg().required(true)),
        ))
}

/// Saved options with any flags given on the command line switched on
fn apply_flags(mut options: AllOptions, args: &ArgMatches) -> AllOptions {
    let flag = |name| args.get_flag(name);
    options.locked |= flag("locked");
    options.hidden |= flag("hidden");
    options.instance |= flag("instance");
    options.rename_custom_names |= flag("custom-names");
    options.show_spacing |= flag("show-spacing");
    options.use_pascal_case |= flag("pascal-case");
    if let Some(language) = args.get_one::<Language>("language") {
        options.language = *language;
    }
    options
}

fn has_overrides(args: &ArgMatches) -> bool {
    OPTION_FLAGS.iter().any(|(name, _)| args.get_flag(name)) || args.contains_id("language")
}

/// Option panel as the plugin shows it, in the options' own language
fn render_panel(options: &AllOptions) -> String {
    let messages = options.language.messages();
    let line = |key: OptionKey| {
        let mark = if options.is_enabled(key) { "x" } else { " " };
        format!("[{mark}] {} {}\n", key.emoji(), messages.option(key).title)
    };

    let mut panel = format!("{}\n", messages.rename_targets_label);
    panel.extend(OptionKey::RENAME_TARGETS.into_iter().map(&line));
    panel.push_str(messages.settings_title);
    panel.push('\n');
    panel.extend(OptionKey::SETTINGS.into_iter().map(&line));
    panel
}

async fn load_scene(path: &Path, selection: Option<Vec<NodeId>>) -> Result<SceneDocument> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading scene {}", path.display()))?;
    let mut doc = SceneDocument::from_json(&text)
        .with_context(|| format!("parsing scene {}", path.display()))?;

    match selection {
        Some(ids) => doc.select(ids).context("applying --selection")?,
        None if doc.selection().is_empty() => doc.select_all(),
        None => {}
    }
    Ok(doc)
}

async fn rename_with<T: SettingsStore>(
    doc: SceneDocument,
    store: T,
    engine: RenameEngine,
    args: &ArgMatches,
) -> Result<SceneDocument> {
    let session = PluginSession::new(doc, store, engine);
    for event in session.start().await {
        tracing::debug!(?event, "session started");
    }

    let options = apply_flags(session.options(), args);
    for event in session.handle(PluginEvent::Rename(options)).await? {
        if let HostEvent::Notify(message) = event {
            eprintln!("{message}");
        }
    }

    if let Some(report) = session.last_report() {
        eprintln!(
            "visited {} · renamed {} · kept {} · skipped {}",
            report.visited, report.written, report.kept_custom, report.skipped
        );
    }
    Ok(session.into_scene())
}

async fn rename(args: &ArgMatches) -> Result<()> {
    let scene_path = args
        .get_one::<PathBuf>("scene")
        .context("--scene is required")?;
    let selection = args
        .get_many::<String>("selection")
        .map(|ids| ids.map(|id| NodeId::new(id.as_str())).collect());

    let config = match args.get_one::<PathBuf>("engine-config") {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    let engine = RenameEngine::new(config)?;
    let doc = load_scene(scene_path, selection).await?;

    let doc = match args.get_one::<PathBuf>("settings") {
        Some(path) => rename_with(doc, JsonFileSettingsStore::new(path), engine, args).await?,
        None => rename_with(doc, MemorySettingsStore::new(), engine, args).await?,
    };

    let json = doc.to_json()?;
    match args.get_one::<PathBuf>("output") {
        Some(path) => tokio::fs::write(path, json)
            .await
            .with_context(|| format!("writing {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}

async fn settings(args: &ArgMatches) -> Result<()> {
    let path = args
        .get_one::<PathBuf>("settings")
        .context("--settings is required")?;
    let store = JsonFileSettingsStore::new(path);
    let mut options = store.load().await?;

    if has_overrides(args) {
        options = apply_flags(options, args);
        store.save(&options).await?;
        tracing::info!(path = %path.display(), "settings updated");
    }

    eprint!("{}", render_panel(&options));
    println!("{}", serde_json::to_string_pretty(&options)?);
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();
    match matches.subcommand() {
        Some(("rename", args)) => rename(args).await,
        Some(("settings", args)) => settings(args).await,
        Some((other, _)) => anyhow::bail!("unknown command: {other}"),
        None => anyhow::bail!("no command given"),
    }
}
