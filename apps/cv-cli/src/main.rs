use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use cv_core::{VarBuilder, VarValue, is_catalog_name, parse_finite};
use cv_document::{DocumentError, DocumentFormat, read_vars};
use cv_registry::{RegistryConfig, RegistryError, VariableRegistry};
use cv_store::{FileStore, StoreError};

#[derive(Parser)]
#[command(name = "cv-cli")]
#[command(about = "calcvars CLI - manage calculator variables", long_about = None)]
struct Cli {
    /// Path to the preferences file holding the stored variables
    #[arg(long, default_value = "calcvars.json")]
    store: PathBuf,
    /// Optional YAML registry configuration (storage key, format)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Document format, overrides the configuration
    #[arg(long)]
    format: Option<DocumentFormat>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all variables, constants included
    List,
    /// Show one variable
    Get {
        /// Variable name
        name: String,
    },
    /// Create or update a variable
    Set {
        /// Variable name
        name: String,
        /// Numeric literal or expression
        value: String,
        /// Free-text description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Remove a variable
    Remove {
        /// Variable name
        name: String,
    },
    /// Replace user variables with those of a document file, keeping constants
    Merge {
        /// Path to the document
        document: PathBuf,
    },
    /// Print the stored document of user variables
    Export,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Failed to read document: {0}")]
    Document(#[from] DocumentError),

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Variable not found: {0}")]
    NotFound(String),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RegistryConfig::default(),
    };
    if let Some(format) = cli.format {
        config.format = format;
    }

    tracing::debug!(key = %config.storage_key, format = %config.format, "registry config");
    let mut store = FileStore::open(&cli.store)?;
    tracing::debug!(path = %store.path().display(), "store ready");
    let mut registry = VariableRegistry::with_config(config);
    registry.load(Some(&store))?;

    match cli.command {
        Commands::List => cmd_list(&registry),
        Commands::Get { name } => cmd_get(&registry, &name),
        Commands::Set {
            name,
            value,
            description,
        } => {
            cmd_set(&mut registry, &name, &value, description)?;
            registry.save(&mut store)?;
            Ok(())
        }
        Commands::Remove { name } => {
            cmd_remove(&mut registry, &name)?;
            registry.save(&mut store)?;
            Ok(())
        }
        Commands::Merge { document } => {
            cmd_merge(&mut registry, &document)?;
            registry.save(&mut store)?;
            Ok(())
        }
        Commands::Export => cmd_export(&registry),
    }
}

fn load_config(path: &Path) -> CliResult<RegistryConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| CliError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    RegistryConfig::from_yaml(&content).map_err(|e| CliError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })
}

fn cmd_list(registry: &VariableRegistry) -> CliResult<()> {
    if registry.is_empty() {
        println!("No variables defined");
        return Ok(());
    }

    for var in registry.vars() {
        let marker = if var.is_system() { " [system]" } else { "" };
        match var.description() {
            Some(description) => println!("  {var}{marker}  # {description}"),
            None => println!("  {var}{marker}"),
        }
    }
    Ok(())
}

fn cmd_get(registry: &VariableRegistry, name: &str) -> CliResult<()> {
    let var = registry
        .get_var(name)
        .ok_or_else(|| CliError::NotFound(name.to_string()))?;
    println!("{var}");
    if let Some(description) = var.description() {
        println!("  {description}");
    }
    Ok(())
}

fn cmd_set(
    registry: &mut VariableRegistry,
    name: &str,
    value: &str,
    description: Option<String>,
) -> CliResult<()> {
    let value = match parse_finite(value) {
        Some(number) => VarValue::Number(number),
        None => VarValue::Expression(value.to_string()),
    };
    let mut builder = VarBuilder::new(name, value);
    if let Some(description) = description {
        builder = builder.description(description);
    }

    let existed = registry.contains(name);
    let var = registry.add_var(None, builder)?;
    if existed {
        println!("✓ Updated {var}");
    } else {
        println!("✓ Added {var}");
    }
    if is_catalog_name(name) {
        println!("  note: {name} now shadows the built-in constant");
    }
    Ok(())
}

fn cmd_remove(registry: &mut VariableRegistry, name: &str) -> CliResult<()> {
    let removed = registry
        .remove(name)
        .ok_or_else(|| CliError::NotFound(name.to_string()))?;
    if removed.is_system() {
        println!("✓ Removed constant {} until next load", removed.name());
    } else {
        println!("✓ Removed {}", removed.name());
    }
    Ok(())
}

fn cmd_merge(registry: &mut VariableRegistry, document: &Path) -> CliResult<()> {
    let format = registry.config().format;
    let incoming = read_vars(document, &format)?;
    let count = incoming.len();
    registry.merge(incoming);
    println!(
        "✓ Merged {} variables from {} ({} total)",
        count,
        document.display(),
        registry.len()
    );
    Ok(())
}

fn cmd_export(registry: &VariableRegistry) -> CliResult<()> {
    use cv_document::DocumentCodec;

    let user_vars: Vec<_> = registry.user_vars().cloned().collect();
    let text = registry
        .config()
        .format
        .encode(&user_vars)
        .map_err(RegistryError::Encode)?;
    println!("{text}");
    Ok(())
}
