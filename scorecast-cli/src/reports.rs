//! Report generators over a finished simulation batch.
use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use colored::Colorize;
use scorecast_engine::{GameResult, Lineup, SimulationSummary, TeamSummary};

pub fn generate_console_report<W: Write>(
    out: &mut W,
    summary: &SimulationSummary,
    duration: Duration,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Simulation Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "=====================".cyan())?;
    writeln!(out, "Trials: {}", summary.iterations_run)?;
    writeln!(out, "Total time: {duration:?}")?;
    writeln!(out)?;

    for team in [&summary.away, &summary.home] {
        write_team_block(out, team)?;
    }

    let (favorite, probability) = favored_team(summary);
    writeln!(
        out,
        "🏆 {} wins {:.1}% of simulated games",
        favorite.bright_white().bold(),
        probability * 100.0
    )?;
    Ok(())
}

fn write_team_block<W: Write>(out: &mut W, team: &TeamSummary) -> Result<()> {
    writeln!(out, "{}", team.name.bold())?;
    writeln!(
        out,
        "   Runs: {:.2} ± {:.2} per game",
        team.mean_runs, team.stdev_runs
    )?;
    writeln!(
        out,
        "   Win probability: {}",
        format!("{:.1}%", team.win_probability * 100.0).green()
    )?;
    writeln!(out)?;
    Ok(())
}

pub fn generate_json_report<W: Write>(out: &mut W, summary: &SimulationSummary) -> Result<()> {
    let json_output = serde_json::to_string_pretty(summary)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}

pub fn generate_markdown_report<W: Write>(
    out: &mut W,
    summary: &SimulationSummary,
) -> Result<()> {
    writeln!(out, "# Scorecast Simulation Results\n")?;
    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Trials**: {}\n", summary.iterations_run)?;
    writeln!(out, "| Team | Mean runs | Std dev | Win probability |")?;
    writeln!(out, "|------|-----------|---------|-----------------|")?;
    for team in [&summary.away, &summary.home] {
        writeln!(
            out,
            "| {} | {:.2} | {:.2} | {:.1}% |",
            team.name,
            team.mean_runs,
            team.stdev_runs,
            team.win_probability * 100.0
        )?;
    }
    let (favorite, probability) = favored_team(summary);
    writeln!(
        out,
        "\n**{favorite}** wins {:.1}% of simulated games.",
        probability * 100.0
    )?;
    Ok(())
}

/// Print one sample game as an inning-by-inning box score.
pub fn print_box_score<W: Write>(
    out: &mut W,
    away: &Lineup,
    home: &Lineup,
    game: &GameResult,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "⚾ Sample Box Score".bright_yellow().bold())?;

    let width = away.name().len().max(home.name().len());
    let mut header = format!("{:width$} ", "");
    for inning in 1..=game.innings {
        header.push_str(&format!("{inning:>3}"));
    }
    writeln!(out, "{header}   R")?;

    for (name, line, total) in [
        (away.name(), &game.away_line, game.away_runs),
        (home.name(), &game.home_line, game.home_runs),
    ] {
        let mut row = format!("{name:width$} ");
        for runs in line {
            row.push_str(&format!("{runs:>3}"));
        }
        writeln!(out, "{row} | {total}")?;
    }
    writeln!(
        out,
        "Final: {} {}, {} {}",
        away.name(),
        game.away_runs,
        home.name(),
        game.home_runs
    )?;
    Ok(())
}

fn favored_team(summary: &SimulationSummary) -> (&str, f64) {
    if summary.home.win_probability >= summary.away.win_probability {
        (&summary.home.name, summary.home.win_probability)
    } else {
        (&summary.away.name, summary.away.win_probability)
    }
}
