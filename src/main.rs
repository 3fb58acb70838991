use anyhow::{bail, Context, Result};
use clap::Parser;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use kabar::{Article, Feed, SearchEngine};

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so `--json` output stays clean on stdout.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("kabar={}", default_level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Search {
            query,
            feed,
            category,
            limit,
            json,
        } => run_search(&query, &feed, &category, limit, json),
        Commands::List {
            feed,
            oldest,
            limit,
            json,
        } => {
            let feed = load_feed(&feed)?;
            let (label, articles) = if oldest {
                ("ARCHIVE (OLDEST FIRST)", feed.oldest())
            } else {
                ("LATEST", feed.latest())
            };
            print_articles(label, &articles, limit, json)
        }
        Commands::Tag {
            name,
            feed,
            limit,
            json,
        } => {
            let feed = load_feed(&feed)?;
            let articles = feed.by_category(&name);
            print_articles(&format!("CATEGORY \"{}\"", name), &articles, limit, json)
        }
        Commands::Show { id, feed, json } => {
            let loaded = load_feed(&feed)?;
            let Some(article) = loaded.get(&id) else {
                bail!("no article with id {} in {}", id, describe(&feed));
            };
            if json {
                println!("{}", serde_json::to_string_pretty(article).context("serializing article")?);
            } else {
                display::print_article_detail(article);
            }
            Ok(())
        }
        Commands::Categories { feed } => {
            let feed = load_feed(&feed)?;
            display::print_categories(&feed.categories());
            Ok(())
        }
    }
}

fn load_feed(path: &str) -> Result<Feed> {
    Feed::from_path(path).with_context(|| format!("loading feed from {}", describe(path)))
}

fn describe(path: &str) -> String {
    if path == "-" {
        "stdin".to_string()
    } else {
        format!("'{}'", path)
    }
}

fn run_search(query: &str, feed_path: &str, category: &str, limit: usize, json: bool) -> Result<()> {
    let feed = load_feed(feed_path)?;
    let engine = SearchEngine::new();

    let start = Instant::now();
    let result = engine.search_with_category(query, category, &feed.articles);
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    if json {
        let serialized = serde_json::to_string_pretty(&result).context("serializing result")?;
        println!("{}", serialized);
    } else {
        display::print_search_result(query, &result, limit, elapsed_ms);
    }
    Ok(())
}

fn print_articles(label: &str, articles: &[&Article], limit: usize, json: bool) -> Result<()> {
    if json {
        let shown: Vec<&Article> = articles.iter().take(limit).copied().collect();
        let serialized = serde_json::to_string_pretty(&shown).context("serializing articles")?;
        println!("{}", serialized);
    } else {
        display::print_article_list(label, articles, limit);
    }
    Ok(())
}
