//! Binary entrypoint for the gearconf CLI.
//!
//! Commands:
//! - `init` - create a starter `config.toml` and the default gear vocabulary file
//! - `edit [--key <key>]` - run the interactive gear editor on stdin/stdout
//! - `show [--json]` - print every gear configuration
//! - `check <namespace> <category> <value>` - test a value against a vocabulary
//! - `item tag|set|show|copy|list|delete` - manage per-item gear attributes
//!
//! See the library crate docs for module-level details: `gearconf::`.
use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};

use gearconf::config::Config;
use gearconf::gear::accessors::{describe, get_attribute, set_attribute, validate_attribute};
use gearconf::gear::{
    AttrValue, Category, ConfigTree, GearCarrier, GearConfigStore, GearField, GearItemStore,
    Namespace, WieldedField,
};
use gearconf::logutil::escape_log;
use gearconf::olc::{GearMenus, OlcState, WriterSession};
use gearconf::validation::validate_config_key;

#[derive(Parser)]
#[command(name = "gearconf")]
#[command(about = "Gear vocabulary configuration and item attribute tools for MUD servers")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Create config.toml and the default gear vocabulary file
    Init {
        /// Overwrite an existing config.toml
        #[arg(short, long)]
        force: bool,
    },
    /// Edit gear vocabularies interactively
    Edit {
        /// Configuration key to edit (defaults to gear.config_key)
        #[arg(short, long)]
        key: Option<String>,
    },
    /// Print every gear configuration
    Show {
        /// Print the persisted JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Check whether a value belongs to a vocabulary
    Check {
        namespace: String,
        category: String,
        value: String,
        /// Configuration key (defaults to gear.config_key)
        #[arg(short, long)]
        key: Option<String>,
    },
    /// Manage per-item gear attributes
    Item {
        #[command(subcommand)]
        action: ItemCommands,
    },
}

#[derive(Subcommand)]
enum ItemCommands {
    /// Attach a default wielded or equipped record, creating the item if needed
    Tag { id: String, namespace: String },
    /// Set one attribute
    Set {
        id: String,
        namespace: String,
        field: String,
        value: String,
        /// Skip the vocabulary check for category-backed fields
        #[arg(long)]
        force: bool,
    },
    /// Print an item's attribute records
    Show { id: String },
    /// Duplicate an item under a new id
    Copy { id: String },
    /// List stored item ids
    List,
    /// Delete an item
    Delete { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let pre_config = match cli.command {
        Commands::Init { .. } => None,
        _ => match Config::load(&cli.config).await {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                eprintln!("{} (using built-in defaults)", e);
                None
            }
        },
    };
    let interactive = matches!(cli.command, Commands::Edit { .. });
    init_logging(&pre_config, cli.verbose, interactive);
    let config = pre_config.unwrap_or_default();

    match cli.command {
        Commands::Init { force } => {
            if !force && tokio::fs::try_exists(&cli.config).await.unwrap_or(false) {
                bail!(
                    "{} already exists; pass --force to overwrite it",
                    cli.config
                );
            }
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
            let store = GearConfigStore::load(&config.gear.config_file);
            println!(
                "Created {} and gear vocabularies at {} ({} configuration(s))",
                cli.config,
                store.path().display(),
                store.len()
            );
        }
        Commands::Edit { key } => {
            let key = resolve_key(&config, key)?;
            run_editor(&config, key).await?;
        }
        Commands::Show { json } => {
            let store = GearConfigStore::load(&config.gear.config_file);
            if json {
                println!("{}", store.to_json()?);
            } else {
                for (key, tree) in store.iter() {
                    print_tree(key, tree);
                }
            }
        }
        Commands::Check {
            namespace,
            category,
            value,
            key,
        } => {
            let key = resolve_key(&config, key)?;
            let ns: Namespace = namespace.parse()?;
            let cat: Category = category.parse()?;
            if !ns.has_category(cat) {
                bail!("{} has no {} category", ns, cat);
            }
            let store = GearConfigStore::load(&config.gear.config_file);
            if store.get(&key).is_none() {
                bail!("configuration '{}' not found", key);
            }
            if store.is_valid_in(&key, ns, cat, &value) {
                println!("'{}' is a valid {} {} entry", value, ns, cat.noun());
            } else {
                println!("'{}' is NOT a valid {} {} entry", value, ns, cat.noun());
                std::process::exit(1);
            }
        }
        Commands::Item { action } => run_item_command(&config, action)?,
    }

    Ok(())
}

fn resolve_key(config: &Config, key: Option<String>) -> Result<String> {
    let key = key.unwrap_or_else(|| config.gear.config_key.clone());
    validate_config_key(&key).map_err(|e| anyhow!("invalid configuration key '{}': {}", key, e))
}

async fn run_editor(config: &Config, key: String) -> Result<()> {
    let mut store = GearConfigStore::load(&config.gear.config_file);
    if store.get(&key).is_none() {
        info!("Creating gear configuration '{}' from defaults", key);
        store.insert(key.clone(), ConfigTree::with_defaults());
    }

    let mut session = WriterSession::new(std::io::stdout());
    let mut editor = GearMenus::new(key.clone())
        .with_line_width(config.editor.line_width)
        .with_preview_items(config.editor.preview_items)
        .with_quit_label(config.editor.quit_key.clone())
        .into_engine()
        .on_exit(|store: &mut GearConfigStore| match store.save() {
            Ok(()) => println!("Gear configuration saved to {}", store.path().display()),
            Err(e) => {
                log::error!(
                    "Failed to save gear configuration to {}: {}",
                    store.path().display(),
                    e
                );
                eprintln!("Save failed: {}", e);
            }
        });

    info!("Editing gear configuration '{}'", key);
    editor.start(&store, &mut session);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        log::debug!("editor input: {}", escape_log(&line));
        if editor.handle_input(&mut store, &mut session, &line) == OlcState::Terminated {
            return Ok(());
        }
    }
    warn!("Input closed before the editor was quit; changes were not saved");
    Ok(())
}

fn print_tree(key: &str, tree: &ConfigTree) {
    println!("[{}]", key);
    for ns in Namespace::ALL {
        for cat in ns.categories() {
            let items = tree.list(ns, *cat).map(|l| l.items()).unwrap_or(&[]);
            println!("  {}.{} ({}): {}", ns, cat, items.len(), items.join(", "));
        }
    }
}

fn run_item_command(config: &Config, action: ItemCommands) -> Result<()> {
    let items = GearItemStore::open(&config.storage.item_db)?;
    match action {
        ItemCommands::Tag { id, namespace } => {
            let ns: Namespace = namespace.parse()?;
            let attached = match ns {
                Namespace::Wielded => items.tag_wielded(&id)?,
                Namespace::Equipped => items.tag_equipped(&id)?,
            };
            if attached {
                println!("Tagged {} as {}", id, ns);
            } else {
                println!("{} is already {}", id, ns);
            }
        }
        ItemCommands::Set {
            id,
            namespace,
            field,
            value,
            force,
        } => {
            let ns: Namespace = namespace.parse()?;
            let field = GearField::parse(ns, &field)?;
            let mut item = items.get_item(&id)?;
            if !force {
                let store = GearConfigStore::load(&config.gear.config_file);
                validate_attribute(&store, &config.gear.config_key, field, &value)?;
            }
            if field == GearField::Wielded(WieldedField::RangedType) {
                if let Some(w) = item.wielded() {
                    if !w.is_ranged() {
                        warn!(
                            "{}: ranged_type set while weapon_category is '{}'",
                            id,
                            w.weapon_category()
                        );
                    }
                }
            }
            if !set_attribute(&mut item, field, AttrValue::from(value))? {
                bail!("{} is not tagged {}; run `item tag {} {}` first", id, ns, id, ns);
            }
            let stored = get_attribute(&item, field).map(|v| v.to_string()).unwrap_or_default();
            items.put_item(item)?;
            println!("{}.{}.{} = {}", id, ns, field.as_str(), stored);
        }
        ItemCommands::Show { id } => {
            let item = items.get_item(&id)?;
            println!("{} ({})", item.id, item.name);
            for ns in Namespace::ALL {
                let fields = describe(&item, ns);
                if fields.is_empty() {
                    continue;
                }
                println!("  [{}]", ns);
                for (name, value) in fields {
                    println!("    {:<18} {}", name, value);
                }
            }
        }
        ItemCommands::Copy { id } => {
            let copy = items.duplicate(&id)?;
            println!("Copied {} to {}", id, copy.id);
        }
        ItemCommands::List => {
            for id in items.list_item_ids()? {
                println!("{}", id);
            }
        }
        ItemCommands::Delete { id } => {
            items.delete_item(&id)?;
            println!("Deleted {}", id);
        }
    }
    Ok(())
}

/// Initialize env_logger. In interactive mode with a log file configured the
/// console stays quiet so log lines do not interleave with menus.
fn init_logging(config: &Option<Config>, verbosity: u8, interactive: bool) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let configured = config
        .as_ref()
        .and_then(|cfg| cfg.logging.level.parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Info);
    let base_level = match verbosity {
        0 => configured,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);

    let log_file = config
        .as_ref()
        .and_then(|cfg| cfg.logging.file.clone())
        .and_then(|file| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(file)
                .ok()
        });

    if let Some(f) = log_file {
        let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
        let echo_console = atty::is(atty::Stream::Stdout) && !interactive;
        builder.format(move |fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            let line = format!("{} [{}] {}", ts, record.level(), record.args());
            if let Ok(mut guard) = write_mutex.lock() {
                let _ = writeln!(guard, "{}", line);
            }
            if echo_console {
                writeln!(fmt, "{}", line)
            } else {
                Ok(())
            }
        });
    } else {
        builder.format(|fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
        });
    }
    let _ = builder.try_init();
}
