//! Client Dashboard - users and posts of a demo REST API in the terminal
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use cdash_app::Route;
use cdash_core::prelude::*;
use cdash_core::Locale;
use clap::Parser;
use client_dashboard::LaunchOptions;

/// Client Dashboard - users and posts of a demo REST API in the terminal
#[derive(Parser, Debug)]
#[command(name = "cdash")]
#[command(about = "A terminal dashboard for users and posts", long_about = None)]
struct Args {
    /// Page to open: "/", "/users" or "/users/<id>"
    #[arg(value_name = "ROUTE", default_value = "/")]
    route: String,

    /// API base URL
    #[arg(long)]
    api_url: Option<String>,

    /// Display language for this session (de, en)
    #[arg(long, value_parser = parse_locale)]
    locale: Option<Locale>,

    /// Users per page
    #[arg(long)]
    page_size: Option<usize>,

    /// Directory holding config.toml and preferences.toml
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Initial users search query
    #[arg(long)]
    search: Option<String>,

    /// Initial users page
    #[arg(long)]
    page: Option<usize>,

    /// Run in headless mode (JSON output, no TUI)
    #[arg(long)]
    headless: bool,
}

fn parse_locale(code: &str) -> std::result::Result<Locale, String> {
    Locale::parse(code).ok_or_else(|| format!("unknown locale {code:?}, expected de or en"))
}

impl Args {
    fn options(&self) -> LaunchOptions {
        LaunchOptions {
            api_url: self.api_url.clone(),
            locale: self.locale,
            page_size: self.page_size,
            config_dir: self.config_dir.clone(),
            search: self.search.clone(),
            page: self.page,
            route: Route::parse(&self.route),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let options = args.options();

    if args.headless {
        if !client_dashboard::run_headless(options).await? {
            std::process::exit(1);
        }
        return Ok(());
    }

    client_dashboard::run(options).await
}
