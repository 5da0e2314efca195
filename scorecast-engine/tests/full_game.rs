use scorecast_engine::{
    BattingLine, Lineup, LineupSheet, REGULATION_INNINGS, RngBundle, Side, SimulationPlan,
    run_simulation, simulate_game,
};

fn lineup(team: &str, hits: u32) -> Lineup {
    let sheet = LineupSheet {
        team: team.to_string(),
        batters: (0..9)
            .map(|idx| BattingLine {
                name: format!("{team}{idx}"),
                ab: 300,
                h: hits,
                doubles: 20,
                triples: 5,
                hr: 5,
                bb: 30,
                so: 50,
                sf: 5,
                sh: 5,
                gdp: 5,
                sb: 10,
                cs: 5,
            })
            .collect(),
    };
    Lineup::from_sheet(&sheet).expect("valid sheet")
}

#[test]
fn every_game_satisfies_the_scoreboard_invariants() {
    let away = lineup("Visitors", 90);
    let home = lineup("Hosts", 93);
    for seed in 0..200u64 {
        let result = simulate_game(&away, &home, &RngBundle::from_user_seed(seed));

        assert_ne!(result.away_runs, result.home_runs, "seed {seed} tied");
        assert!(result.innings >= REGULATION_INNINGS);
        assert_eq!(result.away_line.len(), result.innings);
        assert_eq!(result.home_line.len(), result.innings);
        assert_eq!(result.away_line.iter().sum::<u32>(), result.away_runs);
        assert_eq!(result.home_line.iter().sum::<u32>(), result.home_runs);

        let expected = if result.home_runs > result.away_runs {
            Side::Home
        } else {
            Side::Away
        };
        assert_eq!(result.winner, expected);
    }
}

#[test]
fn extra_inning_games_complete_whole_innings() {
    let away = lineup("Visitors", 90);
    let home = lineup("Hosts", 90);
    let mut saw_extras = false;
    for seed in 0..400u64 {
        let result = simulate_game(&away, &home, &RngBundle::from_user_seed(seed));
        if result.innings > REGULATION_INNINGS {
            saw_extras = true;
            // Both sides batted in every extra inning; the decided inning
            // still carries a home half entry.
            assert_eq!(result.away_line.len(), result.home_line.len());
        }
    }
    assert!(saw_extras, "no extra-inning game in 400 trials");
}

#[test]
fn batch_summary_is_consistent_with_its_own_game_list() {
    let away = lineup("Visitors", 90);
    let home = lineup("Hosts", 96);
    let summary = run_simulation(&away, &home, SimulationPlan::new(500, 4242));

    assert_eq!(summary.iterations_run, 500);
    assert_eq!(summary.away.runs.len(), 500);
    let away_total: u32 = summary.away.runs.iter().sum();
    let expected_mean = f64::from(away_total) / 500.0;
    assert!((summary.away.mean_runs - expected_mean).abs() < 1e-9);
    let wins = summary.away.win_probability + summary.home.win_probability;
    assert!((wins - 1.0).abs() < 1e-12);
    assert_eq!(summary.away.name, "Visitors");
    assert_eq!(summary.home.name, "Hosts");
}
