use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use scrapnet_config::Config;
use scrapnet_engine::{LinkGraph, ParsedPage, image_urls, load_export};
use std::io::{Write, stdout};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "scrapnet", version, about = "Explore the link graph of a note export")]
struct Cli {
    /// Export JSON to read instead of the configured one
    #[arg(long, global = true)]
    export: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a config file pointing at the --export path
    Init {
        #[arg(long)]
        related_limit: Option<usize>,
    },
    #[command(flatten)]
    Query(Query),
}

#[derive(Subcommand)]
enum Query {
    /// Page, edge and dangling link counts
    Stats,
    /// Outgoing and incoming links of a page
    Links { title: String },
    /// Pages two links away
    Related {
        title: String,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Each outgoing link of a page with the lines that contain it
    Contexts { title: String },
    /// Parsed lines of a page as JSON
    Show { title: String },
    /// Every distinct image URL in the export
    Images,
}

struct Workspace {
    pages: Vec<ParsedPage>,
    graph: LinkGraph,
    related_limit: usize,
}

impl Workspace {
    fn load(export: Option<PathBuf>) -> Result<Self> {
        let config = Config::load()?;
        let related_limit = config
            .as_ref()
            .map_or(Config::DEFAULT_RELATED_LIMIT, |c| c.related_limit);

        let export_path = match (export, config) {
            (Some(path), _) => Config::expand_path(&path).unwrap_or(path),
            (None, Some(config)) => config.export_path,
            (None, None) => bail!(
                "No export given. Pass --export <PATH> or set export_path in {}",
                Config::config_path().display()
            ),
        };
        log::info!("Loading export from {}", export_path.display());

        let export = load_export(&export_path)
            .with_context(|| format!("Failed to load {}", export_path.display()))?;
        let pages = export.parse_pages();
        let graph = LinkGraph::build(&pages);
        log::info!(
            "Loaded {} pages with {} links",
            pages.len(),
            graph.edge_count()
        );

        Ok(Self {
            pages,
            graph,
            related_limit,
        })
    }

    fn page(&self, title: &str) -> Result<&ParsedPage> {
        match self.pages.iter().find(|p| p.title == title) {
            Some(page) => Ok(page),
            None => bail!("No page titled {title:?}"),
        }
    }

    fn run(&self, query: Query, out: &mut impl Write) -> Result<()> {
        match query {
            Query::Stats => {
                writeln!(out, "pages: {}", self.graph.existing_pages().len())?;
                writeln!(out, "links: {}", self.graph.edge_count())?;
                writeln!(
                    out,
                    "dangling targets: {}",
                    self.graph.dangling_targets().count()
                )?;
            }
            Query::Links { title } => {
                let hop = self.graph.one_hop(&title);
                writeln!(out, "outgoing:")?;
                for t in hop.outgoing {
                    writeln!(out, "  {t}{}", self.missing_marker(t))?;
                }
                writeln!(out, "incoming:")?;
                for t in hop.incoming {
                    writeln!(out, "  {t}")?;
                }
            }
            Query::Related { title, limit } => {
                let limit = limit.unwrap_or(self.related_limit);
                for t in self.graph.related_pages(&title, limit) {
                    writeln!(out, "{t}")?;
                }
            }
            Query::Contexts { title } => {
                for (target, lines) in self.graph.contexts_from(&title) {
                    writeln!(out, "{target}{}", self.missing_marker(target))?;
                    for line in lines {
                        writeln!(out, "  | {line}")?;
                    }
                }
            }
            Query::Show { title } => {
                let page = self.page(&title)?;
                serde_json::to_writer_pretty(&mut *out, &page.parsed)?;
                writeln!(out)?;
            }
            Query::Images => {
                for url in image_urls(&self.pages) {
                    writeln!(out, "{url}")?;
                }
            }
        }
        Ok(())
    }

    fn missing_marker(&self, title: &str) -> &'static str {
        if self.graph.page_exists(title) {
            ""
        } else {
            " (missing)"
        }
    }
}

fn init(
    export: Option<PathBuf>,
    related_limit: Option<usize>,
    config_path: &Path,
    out: &mut impl Write,
) -> Result<()> {
    let Some(export_path) = export else {
        bail!("init needs --export <PATH>");
    };
    let mut config = Config::new(export_path);
    if let Some(limit) = related_limit {
        config.related_limit = limit;
    }
    config
        .save_to_path(config_path)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    writeln!(out, "Wrote {}", config_path.display())?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Init { related_limit } => {
            init(cli.export, related_limit, &Config::config_path(), &mut stdout())
        }
        Command::Query(query) => {
            Workspace::load(cli.export).and_then(|ws| ws.run(query, &mut stdout()))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrapnet_engine::parse_export;
    use tempfile::TempDir;

    fn workspace() -> Workspace {
        let export = parse_export(
            r##"{ "pages": [
                { "title": "A", "lines": ["A", "[B] [Ghost]", "[https://gyazo.com/1]"] },
                { "title": "B", "lines": ["B", "#C"] },
                { "title": "C", "lines": ["C"] }
            ] }"##,
        )
        .unwrap();
        let pages = export.parse_pages();
        let graph = LinkGraph::build(&pages);
        Workspace {
            pages,
            graph,
            related_limit: 10,
        }
    }

    fn run(query: Query) -> String {
        let mut out = Vec::new();
        workspace().run(query, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn stats() {
        assert_eq!(run(Query::Stats), "pages: 3\nlinks: 3\ndangling targets: 1\n");
    }

    #[test]
    fn links_mark_missing_pages() {
        let out = run(Query::Links {
            title: "A".to_string(),
        });
        assert_eq!(out, "outgoing:\n  B\n  Ghost (missing)\nincoming:\n");
    }

    #[test]
    fn related_respects_limit() {
        let out = run(Query::Related {
            title: "A".to_string(),
            limit: Some(0),
        });
        assert!(out.is_empty());
        let out = run(Query::Related {
            title: "A".to_string(),
            limit: None,
        });
        assert_eq!(out, "C\n");
    }

    #[test]
    fn contexts() {
        let out = run(Query::Contexts {
            title: "B".to_string(),
        });
        assert_eq!(out, "C\n  | #C\n");
    }

    #[test]
    fn show_unknown_page_fails() {
        let mut out = Vec::new();
        let err = workspace()
            .run(
                Query::Show {
                    title: "Nope".to_string(),
                },
                &mut out,
            )
            .unwrap_err();
        assert!(err.to_string().contains("Nope"));
    }

    #[test]
    fn show_dumps_json() {
        let out = run(Query::Show {
            title: "B".to_string(),
        });
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[1]["nodes"][0]["kind"], "hashtag");
    }

    #[test]
    fn images() {
        assert_eq!(run(Query::Images), "https://gyazo.com/1\n");
    }

    #[test]
    fn cli_parses_global_export_flag() {
        let cli = Cli::parse_from([
            "scrapnet", "related", "A", "--limit", "3", "--export", "x.json",
        ]);
        assert_eq!(cli.export, Some(PathBuf::from("x.json")));
        assert!(matches!(
            cli.command,
            Command::Query(Query::Related { limit: Some(3), .. })
        ));
    }

    #[test]
    fn init_writes_loadable_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("scrapnet/config.toml");
        let mut out = Vec::new();

        init(
            Some(PathBuf::from("/data/export.json")),
            Some(4),
            &config_path,
            &mut out,
        )
        .unwrap();

        let config = Config::load_from_path(&config_path).unwrap().unwrap();
        assert_eq!(config.export_path, PathBuf::from("/data/export.json"));
        assert_eq!(config.related_limit, 4);
        assert!(String::from_utf8(out).unwrap().starts_with("Wrote "));
    }

    #[test]
    fn init_without_export_fails() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let err = init(None, None, &config_path, &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("--export"));
        assert!(!config_path.exists());
    }

    #[test]
    fn cli_parses_init() {
        let cli = Cli::parse_from([
            "scrapnet",
            "--export",
            "e.json",
            "init",
            "--related-limit",
            "5",
        ]);
        assert!(matches!(
            cli.command,
            Command::Init {
                related_limit: Some(5)
            }
        ));
    }
}
