mod config;
mod logger;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use hifz_catalog::{division_pages, reverse_division, standard_division_of_page};
use hifz_engine::{
    Catalog, Chapter, Position, SessionRecord, advance_chapter, compute_divisions, locate,
    pages_of, propose_next, recited_pages,
};
use serde::Serialize;
use serde_json::json;

use crate::config::CliConfig;

#[derive(Parser)]
#[command(name = "hifz", about = "Reverse-order memorization progress over the 604-page mushaf")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON catalog replacing the bundled layout
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Chapter details by id or name
    Chapter {
        /// Chapter id (1-114) or name
        chapter: String,
    },
    /// Pages occupied by a chapter
    Pages {
        /// Chapter id or name
        chapter: String,
    },
    /// Page coordinate of a verse
    Locate {
        /// Verse as chapter:verse, e.g. 2:255
        position: String,
        /// Locate the end of the verse instead of its start
        #[arg(long)]
        end: bool,
    },
    /// Pages recited from one verse through another, in half pages
    Distance {
        /// First verse (chapter:verse)
        from: String,
        /// Last verse, inclusive (chapter:verse)
        to: String,
    },
    /// Divisions memorized so far
    Divisions {
        /// Current chapter id or name
        #[arg(long)]
        chapter: String,
        /// JSON array of session records
        #[arg(long)]
        history: Option<PathBuf>,
        /// Memorization is flagged complete
        #[arg(long)]
        complete: bool,
    },
    /// Propose the next session
    Propose {
        /// Current chapter id or name
        #[arg(long)]
        chapter: String,
        /// JSON array of session records
        #[arg(long)]
        history: Option<PathBuf>,
        /// Pages per day (default from config, else 1)
        #[arg(long)]
        target: Option<f64>,
    },
    /// Chapter to move to after finishing one
    Advance {
        /// Finished chapter id or name
        chapter: String,
    },
    /// Division (juz) of a page, in both numberings
    Juz {
        /// Page number (1-604)
        page: u16,
    },
    /// Write the catalog as JSON to stdout
    ExportCatalog,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logger::init(logger::level_for_verbosity(cli.verbose));
    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    if cli.verbose == 0 {
        if let Some(level) = config.level_filter() {
            logger::init(level);
        }
    }

    let loaded;
    let catalog: &Catalog = match cli.catalog.as_ref().or(config.catalog.as_ref()) {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read catalog {}", path.display()))?;
            loaded = Catalog::from_json(&contents)
                .with_context(|| format!("Invalid catalog {}", path.display()))?;
            log::info!(
                "using catalog {} ({} chapters, {} pages)",
                path.display(),
                loaded.chapter_count(),
                loaded.page_count()
            );
            &loaded
        }
        None => Catalog::standard(),
    };

    run(cli.command, catalog, &config, cli.json)
}

fn run(command: Commands, catalog: &Catalog, config: &CliConfig, json: bool) -> Result<()> {
    match command {
        Commands::Chapter { chapter } => {
            let ch = resolve_chapter(catalog, &chapter)?;
            let pages = pages_of(catalog, ch.id)?;
            emit(json, &json!({ "chapter": ch, "pages": pages }), || {
                format!(
                    "{} {} ({}) - {} verses, pages {}-{}",
                    ch.id, ch.name, ch.arabic_name, ch.verse_count, pages.first, pages.last
                )
            })
        }

        Commands::Pages { chapter } => {
            let ch = resolve_chapter(catalog, &chapter)?;
            let pages = pages_of(catalog, ch.id)?;
            emit(json, &pages, || {
                let mut lines = vec![format!("{} {}: {} pages", ch.id, ch.name, pages.len())];
                for page in pages {
                    if let Some(range) = catalog.page(page).ok().and_then(|c| c.range_of(ch.id)) {
                        lines.push(format!("  page {page}: verses {}-{}", range.first, range.last));
                    }
                }
                lines.join("\n")
            })
        }

        Commands::Locate { position, end } => {
            let pos: Position = position.parse()?;
            let coord = locate(catalog, pos, end)?;
            emit(json, &coord, || {
                format!(
                    "{pos} {} at {:.4} (page {}, {:.1}% down)",
                    if end { "ends" } else { "starts" },
                    coord.value,
                    coord.page(),
                    coord.fraction() * 100.0
                )
            })
        }

        Commands::Distance { from, to } => {
            let from: Position = from.parse()?;
            let to: Position = to.parse()?;
            if to < from {
                return Err(anyhow!("{to} comes before {from}"));
            }
            let pages = recited_pages(catalog, from, to)?;
            emit(json, &json!({ "from": from, "to": to, "pages": pages }), || {
                format!("{from} - {to}: {pages:.1} pages")
            })
        }

        Commands::Divisions {
            chapter,
            history,
            complete,
        } => {
            let ch = resolve_chapter(catalog, &chapter)?;
            let history = load_history(history.as_deref())?;
            let count = compute_divisions(catalog, ch.id, &history, complete)?;
            emit(json, &count, || {
                if count.complete {
                    "complete: 30 of 30 divisions".to_string()
                } else {
                    format!(
                        "{:.1} of 30 divisions ({} pages)",
                        count.rounded(),
                        count.completed_pages
                    )
                }
            })
        }

        Commands::Propose {
            chapter,
            history,
            target,
        } => {
            let ch = resolve_chapter(catalog, &chapter)?;
            let history = load_history(history.as_deref())?;
            let target = target.unwrap_or(config.daily_target_pages);
            let proposal = propose_next(catalog, ch.id, &history, target)?;
            emit(json, &proposal, || match &proposal {
                Some(p) => format!(
                    "{} {}: pages {}-{}, verses {}-{}",
                    ch.id, ch.name, p.from_page, p.to_page, p.from_verse, p.to_verse
                ),
                None => format!("{} {} is finished; advance to the next chapter", ch.id, ch.name),
            })
        }

        Commands::Advance { chapter } => {
            let ch = resolve_chapter(catalog, &chapter)?;
            let advance = advance_chapter(catalog, ch.id)?;
            let next = catalog.chapter(advance.next)?;
            emit(json, &advance, || {
                let mut line = format!("next chapter: {} {}", next.id, next.name);
                if advance.wrapped {
                    line.push_str(" (wrapped to the last chapter)");
                }
                line
            })
        }

        Commands::Juz { page } => {
            let standard = standard_division_of_page(page)?;
            let reversed = reverse_division(standard)?;
            let pages = division_pages(standard)?;
            emit(
                json,
                &json!({
                    "page": page,
                    "standard": standard,
                    "reversed": reversed,
                    "first_page": pages.start(),
                    "last_page": pages.end(),
                }),
                || {
                    format!(
                        "page {page}: juz {standard} (reversed {reversed}), pages {}-{}",
                        pages.start(),
                        pages.end()
                    )
                },
            )
        }

        Commands::ExportCatalog => {
            println!("{}", catalog.to_json()?);
            Ok(())
        }
    }
}

/// Chapter by id, falling back to a name lookup for anything non-numeric.
fn resolve_chapter<'a>(catalog: &'a Catalog, query: &str) -> Result<&'a Chapter> {
    match query.trim().parse::<u64>() {
        Ok(n) => {
            let id = u8::try_from(n).map_err(|_| anyhow!("invalid chapter id: {n}"))?;
            Ok(catalog.chapter(id)?)
        }
        Err(_) => catalog
            .chapter_by_name(query)
            .ok_or_else(|| anyhow!("Unknown chapter: {query}")),
    }
}

fn load_history(path: Option<&Path>) -> Result<Vec<SessionRecord>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read history {}", path.display()))?;
    let history: Vec<SessionRecord> = serde_json::from_str(&contents)
        .with_context(|| format!("Invalid history {}", path.display()))?;
    log::debug!("loaded {} session records from {}", history.len(), path.display());
    Ok(history)
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", text());
    }
    Ok(())
}
