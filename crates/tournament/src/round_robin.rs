//! Round-robin driver: every test agent plays every opponent

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::config::TournamentConfig;
use crate::error::TournamentError;
use crate::match_runner::MatchRunner;
use crate::results::TournamentResults;

/// Run the configured tournament.
///
/// Each pairing gets `num_matches` fresh random openings, all drawn from a
/// generator seeded with `config.seed`, so a run is reproducible whenever
/// the time limit is disabled.
pub fn run_tournament(config: &TournamentConfig) -> Result<TournamentResults, TournamentError> {
    config.validate()?;

    let runner = MatchRunner::new(config.match_config());
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut results = TournamentResults::new(config.clone());

    info!(
        name = %config.name,
        test_agents = config.test_agents.len(),
        opponents = config.opponents.len(),
        games_per_pairing = 2 * config.num_matches,
        "starting tournament"
    );

    for test_spec in &config.test_agents {
        let mut test_agent = test_spec.build(rng.gen())?;

        for opponent_spec in &config.opponents {
            let mut opponent = opponent_spec.build(rng.gen())?;
            let openings = (0..config.num_matches)
                .map(|_| runner.random_opening(&mut rng))
                .collect::<Result<Vec<_>, _>>()?;

            let result = runner.run_match(test_agent.as_mut(), opponent.as_mut(), &openings)?;

            info!(
                agent = %test_spec.name,
                opponent = %opponent_spec.name,
                wins = result.wins,
                losses = result.losses,
                forfeits = result.forfeits,
                "match finished"
            );
            results.add_match(&test_spec.name, &opponent_spec.name, result);
        }

        info!(
            agent = %test_spec.name,
            win_rate = results.win_rate(&test_spec.name),
            "agent finished"
        );
    }

    Ok(results)
}
