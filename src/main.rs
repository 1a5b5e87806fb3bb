use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;

use settle_scout::{
    config::AppConfig,
    generator::BoardGenerator,
    layout::{BoardLayout, LayoutLoader},
    report::ReportWriter,
    scoring::{best_nodes, NodeScorer},
    web::{self, WebServerConfig},
    Topology,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Settlement node scoring for hex resource boards")]
struct Cli {
    /// Path to a YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score every node of a board and print the results
    Score {
        /// Board layout file (YAML, or JSON with a .json extension)
        #[arg(long, conflicts_with = "seed")]
        layout: Option<PathBuf>,

        /// Score a generated board instead of a layout file
        #[arg(long)]
        seed: Option<u64>,

        /// Resources the player already produces, comma separated
        #[arg(long, value_delimiter = ',')]
        holdings: Option<Vec<String>>,

        /// Number of best picks to highlight (config default when omitted)
        #[arg(long)]
        top: Option<usize>,

        /// Print the full result map as JSON
        #[arg(long)]
        json: bool,

        /// Also write a JSON report into the configured report directory
        #[arg(long)]
        report: bool,

        /// Report directory override (implies --report)
        #[arg(long)]
        report_dir: Option<PathBuf>,
    },
    /// Print a generated board layout as YAML
    Generate {
        #[arg(long, default_value_t = 7)]
        seed: u64,
    },
    /// Run the HTTP scoring service
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        port: Option<u16>,
    },
}

fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;
    init_logging(&config.logging.level);

    match cli.command {
        Command::Score {
            layout,
            seed,
            holdings,
            top,
            json,
            report,
            report_dir,
        } => {
            let mut board = match (layout, seed) {
                (Some(path), _) => LayoutLoader::new(".").load(path)?,
                (None, Some(seed)) => BoardLayout {
                    name: format!("random_{seed}"),
                    description: None,
                    tiles: BoardGenerator::new(seed).generate(),
                    holdings: None,
                    ports: None,
                },
                (None, None) => BoardLayout::sample(),
            };
            if let Some(holdings) = holdings {
                board.holdings = Some(holdings);
            }

            let prepared = board.prepare()?;
            let scorer = NodeScorer::new(prepared.topology);
            let scores = scorer.score_board(&prepared.grid, prepared.holdings.as_ref());

            if json {
                println!("{}", serde_json::to_string_pretty(&scores)?);
            } else {
                for (node, result) in &scores {
                    println!(
                        "n{node:<3} {:>5.1}  {:<28} {}",
                        result.score, result.resources, result.description
                    );
                }
                let count = top.unwrap_or(config.scoring.top_picks);
                println!();
                for (rank, pick) in best_nodes(&scores, count, &[]).iter().enumerate() {
                    println!("#{} n{} ({:.1})", rank + 1, pick.node, pick.score);
                }
            }

            if report || report_dir.is_some() {
                let dir = report_dir.unwrap_or_else(|| PathBuf::from(&config.reports.output_dir));
                let path = ReportWriter::new(dir).write(&board.name, &scores)?;
                info!("report written to {}", path.display());
            }
        }
        Command::Generate { seed } => {
            let layout = BoardLayout {
                name: format!("random_{seed}"),
                description: Some(format!("Generated from seed {seed}")),
                tiles: BoardGenerator::new(seed).generate(),
                holdings: None,
                ports: None,
            };
            print!("{}", serde_yaml::to_string(&layout)?);
        }
        Command::Serve { host, port } => {
            let host = host.unwrap_or(config.server.host);
            let port = port.unwrap_or(config.server.port);
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(web::run(WebServerConfig {
                host,
                port,
                topology: Topology::standard(),
            }))?;
        }
    }

    Ok(())
}
