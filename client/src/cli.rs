use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[clap(author, version)]
#[clap(name = "Gomoku Arena Client")]
#[clap(about = "Plays matches between search strategies and a random player", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Plays one strategy against the random player.
    Match(MatchCommand),
    /// Plays MCTS, alpha-beta and hybrid each against the random player.
    All(AllCommand),
}

#[derive(Args)]
pub struct MatchCommand {
    #[clap(short, long, default_value_t = String::from("arena.conf"))]
    pub config: String,

    #[clap(short, long, value_enum)]
    pub player: PlayerKind,

    /// Overrides `num_games` from the config.
    #[clap(short, long)]
    pub games: Option<usize>,
}

#[derive(Args)]
pub struct AllCommand {
    #[clap(short, long, default_value_t = String::from("arena.conf"))]
    pub config: String,

    #[clap(short, long)]
    pub games: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PlayerKind {
    Mcts,
    AlphaBeta,
    Hybrid,
}

impl PlayerKind {
    pub fn all() -> [PlayerKind; 3] {
        [PlayerKind::Mcts, PlayerKind::AlphaBeta, PlayerKind::Hybrid]
    }

    pub fn match_name(&self) -> &'static str {
        match self {
            PlayerKind::Mcts => "mcts vs random",
            PlayerKind::AlphaBeta => "alpha-beta vs random",
            PlayerKind::Hybrid => "hybrid vs random",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_match_command() {
        let cli = Cli::try_parse_from(["client", "match", "--player", "alpha-beta", "--games", "3"])
            .unwrap();

        match cli.command {
            Commands::Match(args) => {
                assert_eq!(args.player, PlayerKind::AlphaBeta);
                assert_eq!(args.games, Some(3));
                assert_eq!(args.config, "arena.conf");
            }
            Commands::All(_) => panic!("Expected the match command"),
        }
    }

    #[test]
    fn test_parse_all_command() {
        let cli = Cli::try_parse_from(["client", "all", "--config", "other.conf"]).unwrap();

        match cli.command {
            Commands::All(args) => {
                assert_eq!(args.config, "other.conf");
                assert_eq!(args.games, None);
            }
            Commands::Match(_) => panic!("Expected the all command"),
        }
    }

    #[test]
    fn test_match_requires_a_player() {
        assert!(Cli::try_parse_from(["client", "match"]).is_err());
        assert!(Cli::try_parse_from(["client", "match", "--player", "greedy"]).is_err());
    }
}
