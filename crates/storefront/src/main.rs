//! Ember North storefront - terminal driver.
//!
//! Drives the storefront without a browser. `render` prints a single
//! page and exits; `browse` opens an interactive session where typing a
//! path navigates and a handful of cart commands mutate state, with the
//! current page re-rendered after every command.
//!
//! # Usage
//!
//! ```bash
//! # Render one page
//! ember-north-storefront render --path /product/2
//!
//! # Interactive session
//! ember-north-storefront browse
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};

use ember_north_core::{ProductId, Size};
use ember_north_storefront::app::{Storefront, UiEvent};
use ember_north_storefront::config::StorefrontConfig;
use ember_north_storefront::error::AppError;

#[derive(Parser)]
#[command(name = "ember-north-storefront")]
#[command(author, version, about = "Ember North storefront")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a single page to stdout
    Render {
        /// Logical path to render (e.g. /product/2)
        #[arg(short, long, default_value = "/")]
        path: String,
    },
    /// Interactive browsing session
    Browse,
}

fn main() {
    // Initialize tracing with EnvFilter; default to info for this crate
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "ember_north_storefront=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = StorefrontConfig::from_env()?;
    let mut app = Storefront::new(config);

    match cli.command.unwrap_or(Commands::Browse) {
        Commands::Render { path } => {
            app.navigate(&path);
            let mut out = io::stdout().lock();
            writeln!(out, "{}", app.render()?)?;
        }
        Commands::Browse => browse(&mut app)?,
    }

    Ok(())
}

/// Interactive loop: one command per line, re-render after each.
fn browse(app: &mut Storefront) -> Result<(), AppError> {
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    writeln!(out, "{}", app.render()?)?;
    prompt(&mut out)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line == "quit" || line == "exit" {
            break;
        }
        if let Err(e) = apply_command(app, line) {
            writeln!(out, "error: {e}")?;
        }
        writeln!(out, "{}", app.render()?)?;
        prompt(&mut out)?;
    }

    Ok(())
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

/// Commands: a path starting with `/` navigates; `add`, `remove`, `qty`,
/// and `clear` drive the cart.
fn apply_command(app: &mut Storefront, line: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut parts = line.split_whitespace();
    match parts.next() {
        None => {}
        Some("add") => {
            let (product_id, size) = parse_line_target(&mut parts)?;
            app.handle(UiEvent::AddToCart { product_id, size });
        }
        Some("remove") => {
            let (product_id, size) = parse_line_target(&mut parts)?;
            app.handle(UiEvent::RemoveLine { product_id, size });
        }
        Some("qty") => {
            let (product_id, size) = parse_line_target(&mut parts)?;
            let quantity = parts
                .next()
                .ok_or("usage: qty <product-id> <size> <quantity>")?
                .parse()?;
            app.handle(UiEvent::SetQuantity {
                product_id,
                size,
                quantity,
            });
        }
        Some("clear") => app.handle(UiEvent::ClearCart),
        Some(path) if path.starts_with('/') => app.navigate(path),
        Some(other) => return Err(format!("unrecognized command: {other}").into()),
    }
    Ok(())
}

/// Parse the `<product-id> <size>` pair shared by the cart commands.
fn parse_line_target<'a>(
    parts: &mut impl Iterator<Item = &'a str>,
) -> Result<(ProductId, Size), Box<dyn std::error::Error>> {
    let product_id = parts
        .next()
        .ok_or("expected a product id")?
        .parse::<ProductId>()?;
    let size = parts.next().ok_or("expected a size code")?.parse::<Size>()?;
    Ok((product_id, size))
}
