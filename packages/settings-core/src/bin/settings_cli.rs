//! Settings CLI
//!
//! Inspect and convert randomizer settings against the standard table.
//!
//! # Usage
//!
//! ```bash
//! # Validate an override document (fails on the first problem)
//! cargo run --bin settings-cli -- validate --file plando.json
//!
//! # Settings string for a preset with an override on top
//! cargo run --bin settings-cli -- encode --preset Tournament --file plando.json
//!
//! # Change one setting of an existing string
//! cargo run --bin settings-cli -- encode --from "$STRING" --set bridge=open --provenance
//!
//! # Back to JSON
//! cargo run --bin settings-cli -- decode "$(cargo run -q --bin settings-cli -- encode --preset Beginner)"
//!
//! # What disables a setting, and what it is worth to the sampler
//! cargo run --bin settings-cli -- explain bridge_tokens
//! ```

use clap::{Parser, Subcommand};
use settings_core::catalog::{shared_registry, standard_presets};
use settings_core::{
    ConfigProvenance, Configuration, OverrideDocument, SettingSource, SettingValue, SettingsCodec,
    SettingsRegistry, Validatable,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "settings-cli")]
#[command(about = "Randomizer settings - validation and settings strings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an override document
    Validate {
        /// Override document (JSON)
        #[arg(short, long)]
        file: PathBuf,

        /// Skip disable-rule conflict checks
        #[arg(long)]
        no_conflicts: bool,
    },

    /// Print the settings string for a configuration
    Encode {
        /// Start from a bundled preset instead of the defaults
        #[arg(short, long, conflicts_with = "from")]
        preset: Option<String>,

        /// Start from an existing settings string
        #[arg(long)]
        from: Option<String>,

        /// Override document applied on top
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Single assignment applied last (value parsed as JSON, else text)
        #[arg(long = "set", value_name = "NAME=VALUE")]
        assignments: Vec<String>,

        /// Also print where each non-default value came from
        #[arg(long)]
        provenance: bool,
    },

    /// Decode a settings string to JSON
    Decode {
        /// Settings string
        string: String,
    },

    /// Describe one setting and what disables it
    Explain {
        /// Setting name
        setting: String,
    },

    /// List bundled presets
    Presets,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let registry = shared_registry()?;

    match cli.command {
        Commands::Validate { file, no_conflicts } => {
            validate_document(registry, &file, !no_conflicts)?;
        }
        Commands::Encode {
            preset,
            from,
            file,
            assignments,
            provenance,
        } => {
            let base = match (preset, from) {
                (Some(name), _) => Base::Preset(name),
                (None, Some(text)) => Base::SettingsString(text),
                (None, None) => Base::Defaults,
            };
            encode(registry, base, file.as_deref(), &assignments, provenance)?;
        }
        Commands::Decode { string } => {
            let config = SettingsCodec::new(registry).decode(&string)?;
            println!("{}", config.to_json_string()?);
        }
        Commands::Explain { setting } => {
            explain(registry, &setting)?;
        }
        Commands::Presets => {
            let presets = standard_presets(registry)?;
            for preset in presets.iter() {
                match &preset.description {
                    Some(description) => println!("{:<20} {}", preset.name, description),
                    None => println!("{}", preset.name),
                }
            }
        }
    }

    Ok(())
}

fn read_document(path: &Path) -> Result<OverrideDocument, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(OverrideDocument::from_json_str(&json)?)
}

fn validate_document(
    registry: &SettingsRegistry,
    path: &Path,
    check_conflicts: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = read_document(path)?;
    if check_conflicts {
        document.validate_against(registry)?;
    } else {
        registry.validate(&document.settings, false)?;
    }
    println!(
        "{}: {} {} settings OK",
        path.display(),
        document.document_name(),
        document.settings.len()
    );
    Ok(())
}

enum Base {
    Defaults,
    Preset(String),
    SettingsString(String),
}

fn encode(
    registry: &SettingsRegistry,
    base: Base,
    file: Option<&Path>,
    assignments: &[String],
    show_provenance: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (mut config, mut provenance) = match base {
        Base::Defaults => (Configuration::defaults(registry), ConfigProvenance::new()),
        Base::Preset(name) => standard_presets(registry)?.resolve(&name, registry)?,
        Base::SettingsString(text) => SettingsCodec::new(registry).decode_tracked(&text)?,
    };

    let mut explicit = Configuration::new();
    if let Some(path) = file {
        let document = read_document(path)?;
        document.apply(registry, &mut config, &mut provenance, &path.display().to_string())?;
        explicit.merge(&document.settings);
    }

    for assignment in assignments {
        let (name, value) = parse_assignment(assignment)?;
        config.insert(name, value.clone());
        explicit.insert(name, value);
        provenance.track(name, SettingSource::CommandLine);
    }

    // Explicit values are never forced away; a disabled one is a conflict
    config.apply_disabled_defaults(registry);
    config.merge(&explicit);
    registry.validate(&config, true)?;
    println!("{}", SettingsCodec::new(registry).encode(&config));

    if show_provenance {
        eprintln!("{}", provenance.summary());
    }
    Ok(())
}

fn parse_assignment(assignment: &str) -> Result<(&str, SettingValue), Box<dyn std::error::Error>> {
    let (name, raw) = assignment
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", assignment))?;
    let value = serde_json::from_str::<SettingValue>(raw)
        .unwrap_or_else(|_| SettingValue::Text(raw.to_string()));
    Ok((name.trim(), value))
}

fn explain(registry: &SettingsRegistry, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let descriptor = registry.descriptor(name)?;

    println!("{}", descriptor.name());
    if let Some(text) = descriptor.gui_text() {
        println!("  label:            {}", text);
    }
    println!("  type:             {}", descriptor.value_type().as_str());
    println!("  default:          {}", descriptor.default_value());
    println!("  disabled default: {}", descriptor.disabled_default());
    println!(
        "  shared:           {} ({} bits)",
        descriptor.shared(),
        descriptor.bit_width()
    );
    if let Some(range) = descriptor.range() {
        println!(
            "  range:            {}..={} step {}",
            range.min, range.max, range.step
        );
    }
    if !descriptor.choices().is_empty() {
        println!("  choices:          {}", descriptor.choices().value_labels().join(", "));
    }

    let triggers = registry.dependency_of(name);
    if triggers.is_empty() {
        println!("  disabled by:      nothing");
    }
    for trigger in triggers {
        println!("  disabled by:      {} {}", trigger.source, trigger.trigger);
    }

    if let Some(table) = registry
        .distribution(name)
        .filter(|table| !table.entries().is_empty())
    {
        if let Some(key) = descriptor.randomize_key() {
            println!("  randomized by:    {}", key);
        }
        for entry in table.entries() {
            println!(
                "    {:<24} {:>5.1}%",
                entry.value.to_string(),
                table.probability(&entry.value) * 100.0
            );
        }
    }
    Ok(())
}
