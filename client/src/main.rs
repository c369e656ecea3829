mod cli;
mod matches;
mod options;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, PlayerKind};
use common::{ConfigLoader, FsExt};
use dotenv::dotenv;
use env_logger::Env;
use log::{debug, info};
use options::MatchOptions;

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let (config, players, games) = match &cli.command {
        Commands::Match(match_args) => (
            &match_args.config,
            vec![match_args.player],
            match_args.games,
        ),
        Commands::All(all_args) => (
            &all_args.config,
            PlayerKind::all().to_vec(),
            all_args.games,
        ),
    };

    let config_path = config.relative_to_cwd()?;
    let config = ConfigLoader::new_or_default(config_path, "arena".to_string())?;

    let mut options: MatchOptions = config.load()?;

    if let Some(games) = games {
        options.arena.num_games = games;
    }

    debug!("{}", serde_json::to_string(&options)?);

    let game_engine = options.board.game_engine()?;

    info!(
        "Playing on a {}x{} board, {} in a row wins",
        game_engine.height(),
        game_engine.width(),
        game_engine.k()
    );

    let results = players
        .into_iter()
        .map(|player| {
            matches::play_against_random(player, &game_engine, &options)
                .with_context(|| format!("Failed to play {}", player.match_name()))
        })
        .collect::<Result<Vec<_>>>()?;

    println!("{}", serde_json::to_string_pretty(&results)?);

    Ok(())
}
