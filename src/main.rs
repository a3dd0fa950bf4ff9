use clap::{ArgAction, Parser};
use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::PathBuf;
use strum::IntoEnumIterator;
use tipoff::game_engine::tournament::Tournament;
use tipoff::game_engine::types::{PotLabel, Stage};
use tipoff::store;
use tipoff::types::AppResult;

#[derive(Parser, Debug)]
#[clap(name="Tipoff", about = "Olympic basketball tournament simulator", author, version, long_about = None)]
struct Args {
    #[clap(long, action=ArgAction::Set, help = "Set random seed for a reproducible run")]
    seed: Option<u64>,
    #[clap(long, action=ArgAction::Set, help = "Load group rosters from a JSON file")]
    groups: Option<PathBuf>,
    #[clap(long, action=ArgAction::Set, help = "Load exhibition results from a JSON file")]
    exhibitions: Option<PathBuf>,
}

fn main() -> AppResult<()> {
    let logfile_path = store::store_path("tipoff.log")?;
    let logfile = FileAppender::builder()
        .append(false)
        .encoder(Box::new(PatternEncoder::new("{l} - {m}\n")))
        .build(logfile_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("logfile", Box::new(logfile)))
        .build(Root::builder().appender("logfile").build(LevelFilter::Info))?;

    log4rs::init_config(config)?;
    let args = Args::parse();

    let groups = match args.groups {
        Some(path) => store::load_groups_from(&path)?,
        None => store::load_groups()?,
    };
    let exhibitions = match args.exhibitions {
        Some(path) => store::load_exhibitions_from(&path)?,
        None => store::load_exhibitions()?,
    };

    let mut tournament = Tournament::new(groups, exhibitions, args.seed)?;

    tournament.play_group_stage()?;

    println!("Group stage:");
    for game in tournament.games() {
        println!(
            "  {} - {} ({}:{})",
            game.winner_name, game.loser_name, game.winner_score, game.loser_score
        );
    }

    println!("\nFinal group standings:");
    for (label, standings) in tournament.group_standings() {
        println!("\nGroup {label}:");
        for (position, id) in standings.iter().enumerate() {
            let team = tournament.world().team(id);
            println!(
                "  {}. {} - Wins: {}, Losses: {}, Points: {}, Scored: {}, Received: {}, Difference: {:+}",
                position + 1,
                team.name,
                team.wins,
                team.losses,
                team.points,
                team.scored_points,
                team.received_points,
                team.point_difference()
            );
        }
    }

    tournament.draw_knockout_bracket()?;

    let pots = tournament.pots().expect("Pots should be drawn");
    println!("\nPots:");
    for label in PotLabel::iter() {
        println!("  Pot {label}:");
        for id in pots.teams(label) {
            println!("    {}", tournament.world().team(id).name);
        }
    }

    println!("\nQuarterfinal draw:");
    for pairing in tournament.quarterfinals() {
        println!(
            "  {} - {}",
            tournament.world().team(&pairing.home).name,
            tournament.world().team(&pairing.away).name
        );
    }

    let medals = tournament.play_knockout_stage()?;

    for stage in [
        Stage::Quarterfinal,
        Stage::Semifinal,
        Stage::ThirdPlace,
        Stage::Final,
    ] {
        println!("\n{stage}:");
        for game in tournament.games().iter().filter(|game| game.stage == stage) {
            println!(
                "  {} - {} ({}:{})",
                game.winner_name, game.loser_name, game.winner_score, game.loser_score
            );
        }
    }

    println!("\nMedals:");
    println!("  1. {}", tournament.world().team(&medals.gold).name);
    println!("  2. {}", tournament.world().team(&medals.silver).name);
    println!("  3. {}", tournament.world().team(&medals.bronze).name);

    Ok(())
}
