//! Vault Console CLI
//!
//! Usage:
//!   vault-console [OPTIONS] [FILE]
//!
//! Options:
//!   -m, --messages <FILE>   Message catalog for localized labels (TOML format)
//!   -c, --check-messages    Validate the message catalog and exit
//!   --fragment              Emit only the <table> fragment
//!   --compact               Emit markup without indentation
//!   -p, --class-prefix <P>  Prefix for console CSS class names
//!   -h, --help              Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use vault_console::view::{render_models_page, render_models_table};
use vault_console::{parse_models, HtmlConfig, MessageCatalog};

#[derive(Parser)]
#[command(name = "vault-console")]
#[command(about = "HTML view rendering for a signing-vault administration console")]
struct Cli {
    /// Models records file in TOML format (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Message catalog for localized labels (TOML format)
    #[arg(short, long)]
    messages: Option<PathBuf>,

    /// Validate the message catalog patterns and exit
    #[arg(short, long)]
    check_messages: bool,

    /// Emit only the <table> fragment without the page shell
    #[arg(long)]
    fragment: bool,

    /// Emit markup without indentation
    #[arg(long)]
    compact: bool,

    /// Prefix for console CSS class names (e.g. "sv-")
    #[arg(short = 'p', long)]
    class_prefix: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    // Catalog validation is a standalone mode
    if cli.check_messages {
        let path = match &cli.messages {
            Some(path) => path,
            None => {
                eprintln!("--check-messages requires --messages <FILE>");
                std::process::exit(1);
            }
        };
        let catalog = match MessageCatalog::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading catalog '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        };

        let findings = catalog.validate();
        if findings.is_empty() {
            println!(
                "{}: {} messages OK",
                path.display(),
                catalog.messages.len()
            );
            return;
        }
        for finding in &findings {
            eprint!("{}", finding.error.format(&finding.pattern, &finding.id));
        }
        std::process::exit(1);
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load message catalog
    let catalog = match &cli.messages {
        Some(path) => match MessageCatalog::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading catalog '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => MessageCatalog::default(),
    };

    // Read input
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let models = match parse_models(&source) {
        Ok(models) => models,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut config = HtmlConfig::default().with_pretty_print(!cli.compact);
    if let Some(prefix) = &cli.class_prefix {
        config = config.with_class_prefix(prefix.clone());
    }

    let html = if cli.fragment {
        render_models_table(&models, &catalog, &config)
    } else {
        render_models_page(&models, &catalog, &config)
    };
    println!("{}", html);
}

fn print_intro() {
    println!(
        r#"Vault Console - HTML view rendering for a signing-vault administration console

USAGE:
    vault-console [OPTIONS] [FILE]
    cat models.toml | vault-console

OPTIONS:
    -m, --messages <FILE>   Message catalog for localized labels (TOML)
    -c, --check-messages    Validate catalog patterns and exit
    --fragment              Emit only the <table> fragment
    --compact               Emit markup without indentation
    -p, --class-prefix      Prefix for console CSS class names
    -h, --help              Print help

QUICK START:
    vault-console models.toml > models.html

A records file lists models as TOML tables:

    [[models]]
    id = "42"
    brand-id = "vendorco"
    model = "edge-gateway"
    revision = 2
    authority-id = "vendorco"
    key-id = "61abf588e52be7a3"

Each model renders as a table row with an edit link and the model's
brand, name, revision and signing authority/key identifiers."#
    );
}
