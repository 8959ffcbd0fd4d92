use clap::{Parser, Subcommand};
use league_simulator_rust::config::Settings;
use league_simulator_rust::models::{Match, Season, SimulationParams, TableAdjustments};
use league_simulator_rust::{logging, monte_carlo};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "league-simulator-rust")]
#[command(about = "Monte Carlo league-table position predictor")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server.
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run a small three-team simulation locally and print the result —
    /// a smoke test that doesn't need the HTTP layer.
    Demo,
}

#[tokio::main]
async fn main() {
    let settings = Settings::load();
    logging::init(&settings.log_level);

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve { host, port }) => serve(settings, host, port).await,
        Some(Commands::Demo) => demo(),
        None => serve(settings, None, None).await,
    }
}

async fn serve(mut settings: Settings, host: Option<String>, port: Option<u16>) {
    if let Some(host) = host {
        settings.host = host;
    }
    if let Some(port) = port {
        settings.port = port;
    }

    let app = league_simulator_rust::api::create_router();
    let addr = settings.socket_addr();

    tracing::info!(%addr, "starting league-simulator-rust HTTP server");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {addr}: {e}"));

    axum::serve(listener, app).await.unwrap_or_else(|e| panic!("server error: {e}"));
}

fn demo() {
    println!("League Simulator Rust - High Performance Monte Carlo Engine");
    println!("============================================================");

    let season = Season {
        matches: vec![
            Match { team_home: 0, team_away: 1, goals_home: Some(2), goals_away: Some(1) },
            Match { team_home: 1, team_away: 2, goals_home: None, goals_away: None },
            Match { team_home: 2, team_away: 0, goals_home: None, goals_away: None },
        ],
        team_elos: vec![1500.0, 1600.0, 1400.0],
        number_teams: 3,
    };

    let params = SimulationParams { iterations: 1000, ..Default::default() };

    let team_names = vec![
        "Bayern Munich".to_string(),
        "Borussia Dortmund".to_string(),
        "RB Leipzig".to_string(),
    ];

    println!("\nRunning {} Monte Carlo simulations...", params.iterations);
    let start = Instant::now();

    let result = monte_carlo::run(&season, &params, &TableAdjustments::default(), &team_names);

    let duration = start.elapsed();
    println!("Completed in {duration:.2?}");

    println!("\nProbability Matrix (Team x Position):");
    println!("Team                  | 1st    | 2nd    | 3rd    |");
    println!("--------------------- |--------|--------|--------|");

    for (i, team_name) in result.team_names.iter().enumerate() {
        print!("{team_name:20} |");
        for prob in &result.probability_matrix[i] {
            print!(" {:.2}% |", prob * 100.0);
        }
        println!();
    }

    println!(
        "\nPerformance: {:.0} simulations/second",
        params.iterations as f64 / duration.as_secs_f64()
    );
}
