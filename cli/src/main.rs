//! Linkrank CLI: rank the vertices of a graph file with PageRank
//!
//! Reads a JSON graph description (see `input`), builds a `Graph<String>`
//! and prints scores, degrees or a summary.

mod input;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use indexmap::IndexMap;
use linkrank::{page_rank, ranked, Graph, PageRankConfig};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "linkrank", version, about = "Rank graph vertices with PageRank")]
struct Cli {
    /// Output format
    #[arg(long, default_value = "table", global = true, env = "LINKRANK_FORMAT")]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute PageRank scores
    Rank {
        /// Graph file (JSON), or `-` for stdin
        file: PathBuf,

        /// Number of iterations
        #[arg(long, default_value_t = PageRankConfig::default().iterations)]
        iterations: usize,

        /// Damping factor in [0, 1]
        #[arg(long, default_value_t = PageRankConfig::default().damping_factor)]
        damping: f64,

        /// Only show the highest ranked vertices
        #[arg(long)]
        top: Option<usize>,
    },
    /// Show in-degree and out-degree of every vertex
    Degrees {
        /// Graph file (JSON), or `-` for stdin
        file: PathBuf,
    },
    /// Show a summary of the graph
    Info {
        /// Graph file (JSON), or `-` for stdin
        file: PathBuf,
    },
}

#[derive(Serialize)]
struct RankRow<'a> {
    vertex: &'a str,
    score: f64,
}

#[derive(Serialize)]
struct DegreeRow<'a> {
    vertex: &'a str,
    in_degree: usize,
    out_degree: usize,
}

#[derive(Serialize)]
struct Summary<'a> {
    directed: bool,
    vertices: usize,
    edges: usize,
    graph: &'a Graph<String>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Rank {
            file,
            iterations,
            damping,
            top,
        } => {
            if !(0.0..=1.0).contains(&damping) {
                bail!("Damping factor must be between 0 and 1, got {}", damping);
            }
            let config = PageRankConfig::default()
                .with_iterations(iterations)
                .with_damping_factor(damping);
            let graph = input::load_graph(&file)?;
            run_rank(&graph, &config, top, &cli.format)
        }
        Commands::Degrees { file } => run_degrees(&input::load_graph(&file)?, &cli.format),
        Commands::Info { file } => run_info(&input::load_graph(&file)?, &cli.format),
    }
}

fn run_rank(
    graph: &Graph<String>,
    config: &PageRankConfig,
    top: Option<usize>,
    format: &OutputFormat,
) -> Result<()> {
    if graph.number_of_vertices() == 0 {
        bail!("PageRank needs at least one vertex");
    }

    let scores = page_rank(graph, config);
    let rows: Vec<RankRow> = ranked(&scores)
        .into_iter()
        .take(top.unwrap_or(usize::MAX))
        .map(|(vertex, score)| RankRow {
            vertex: vertex.as_str(),
            score,
        })
        .collect();
    info!("Ranked {} vertices", scores.len());

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rank_object(&rows))?);
        }
        OutputFormat::Csv => {
            println!("vertex,score");
            for row in &rows {
                println!("{},{}", csv_field(row.vertex), row.score);
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Vertex", "Score"]);
            for row in &rows {
                table.add_row(vec![row.vertex.to_string(), format!("{:.6}", row.score)]);
            }
            println!("{}", table);
            println!("{} row(s)", rows.len());
        }
    }

    Ok(())
}

/// Vertex -> score, keeping the rank order of `rows`
fn rank_object<'a>(rows: &[RankRow<'a>]) -> IndexMap<&'a str, f64> {
    rows.iter().map(|row| (row.vertex, row.score)).collect()
}

fn run_degrees(graph: &Graph<String>, format: &OutputFormat) -> Result<()> {
    let mut rows = Vec::with_capacity(graph.number_of_vertices());
    for v in graph.vertices() {
        rows.push(DegreeRow {
            vertex: v.as_str(),
            in_degree: graph.in_degree(v),
            out_degree: graph.out_degree(v)?,
        });
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Csv => {
            println!("vertex,in_degree,out_degree");
            for row in &rows {
                println!("{},{},{}", csv_field(row.vertex), row.in_degree, row.out_degree);
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Vertex", "In", "Out"]);
            for row in &rows {
                table.add_row(vec![
                    row.vertex.to_string(),
                    row.in_degree.to_string(),
                    row.out_degree.to_string(),
                ]);
            }
            println!("{}", table);
        }
    }

    Ok(())
}

fn run_info(graph: &Graph<String>, format: &OutputFormat) -> Result<()> {
    let summary = Summary {
        directed: graph.is_directed(),
        vertices: graph.number_of_vertices(),
        edges: graph.number_of_edges(),
        graph,
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        _ => {
            println!("Directed: {}", summary.directed);
            println!("Vertices: {}", summary.vertices);
            println!("Edges:    {}", summary.edges);
        }
    }

    Ok(())
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
