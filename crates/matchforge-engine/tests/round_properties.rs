//! End-to-end properties of planning and committing whole sessions.

use matchforge_core::domain::{MatchKind, PlayerId, Unit, UnitLabel};
use matchforge_core::tally::TallyBoard;
use matchforge_engine::{MatchSettings, Relaxation, RoundContext, SessionState};
use matchforge_test::TeamsFixture;

fn context(fixture: &TeamsFixture, settings: MatchSettings) -> RoundContext<'_> {
    RoundContext {
        roster: &fixture.roster,
        singles_a: &fixture.singles_a,
        singles_b: &fixture.singles_b,
        doubles_a: &fixture.doubles_a,
        doubles_b: &fixture.doubles_b,
        settings,
    }
}

fn resolve_unit<'a>(fixture: &'a TeamsFixture, label: &UnitLabel) -> Option<&'a Unit> {
    [
        &fixture.singles_a,
        &fixture.singles_b,
        &fixture.doubles_a,
        &fixture.doubles_b,
    ]
    .into_iter()
    .find_map(|pool| pool.get(label))
}

#[test]
fn tallies_stay_consistent_with_ledger_replay() {
    let fixture = TeamsFixture::new(4);
    let ctx = context(&fixture, MatchSettings::default());
    let mut state = SessionState::new();

    for _ in 0..6 {
        let planned = ctx
            .plan_round(&state, [MatchKind::Singles, MatchKind::Singles])
            .expect("4v4 singles has pairings for six rounds");
        state.commit_round(planned, false).unwrap();
    }

    // The incremental tallies equal a from-scratch replay of the ledger.
    let replayed = TallyBoard::replay(state.ledger(), |label| resolve_unit(&fixture, label));
    for player in fixture.roster.players() {
        assert_eq!(
            state.tallies().tally_for(&player.id),
            replayed.tally_for(&player.id),
            "tally diverged for {}",
            player.id
        );
        let appearances = state
            .ledger()
            .records()
            .iter()
            .filter(|r| {
                resolve_unit(&fixture, &r.side_a)
                    .is_some_and(|u| u.contains(&player.id))
                    || resolve_unit(&fixture, &r.side_b)
                        .is_some_and(|u| u.contains(&player.id))
            })
            .count() as u32;
        assert_eq!(state.tallies().total_for(&player.id), appearances);
    }
}

#[test]
fn identical_sessions_plan_identical_rounds() {
    let fixture = TeamsFixture::new(4);
    let ctx = context(&fixture, MatchSettings::default());

    let run = || {
        let mut state = SessionState::new();
        let mut labels = Vec::new();
        for _ in 0..5 {
            let planned = ctx
                .plan_round(&state, [MatchKind::Singles, MatchKind::Singles])
                .unwrap();
            for court in &planned.courts {
                labels.push((
                    court.side_a.label().as_str().to_owned(),
                    court.side_b.label().as_str().to_owned(),
                ));
            }
            state.commit_round(planned, false).unwrap();
        }
        labels
    };

    assert_eq!(run(), run());
}

#[test]
fn court_two_never_reuses_court_one_players_even_across_kinds() {
    let fixture = TeamsFixture::new(4);
    let ctx = context(&fixture, MatchSettings::default());
    let state = SessionState::new();

    let planned = ctx
        .plan_round(&state, [MatchKind::Singles, MatchKind::Doubles])
        .unwrap();

    let court1: Vec<&PlayerId> = planned.courts[0].participants().collect();
    assert!(
        planned.courts[1]
            .participants()
            .all(|p| !court1.contains(&p)),
        "court 2 reused a court 1 player: {planned:?}"
    );
}

#[test]
fn first_round_of_fresh_teams_is_fully_rested_and_even() {
    let fixture = TeamsFixture::new(4);
    let ctx = context(&fixture, MatchSettings::default());
    let state = SessionState::new();

    let planned = ctx
        .plan_round(&state, [MatchKind::Singles, MatchKind::Singles])
        .unwrap();

    for court in &planned.courts {
        assert_eq!(court.relaxation, Some(Relaxation::Strict));
    }
    // Nobody has history, so the top candidate pairs two fresh players.
    let first = &planned.courts[0];
    assert_eq!(first.side_a.label().as_str(), "A1");
    assert_eq!(first.side_b.label().as_str(), "B1");
}

#[test]
fn exhausted_history_fails_only_when_both_toggles_are_off() {
    let fixture = TeamsFixture::new(1);
    let locked = MatchSettings {
        allow_consecutive: false,
        allow_repeat_history: false,
        ..Default::default()
    };

    // Seed the lone pairing through a permissive session first.
    let mut state = SessionState::new();
    let permissive = context(
        &fixture,
        MatchSettings {
            allow_consecutive: true,
            allow_repeat_history: true,
            ..Default::default()
        },
    );
    // Only one pairing exists, so two courts can never fill; plan a single
    // round by hand via the manual path.
    let planned = matchforge_engine::plan_manual_round(
        &permissive,
        &state,
        [
            Some(matchforge_engine::ManualSelection {
                kind: MatchKind::Singles,
                side_a: Some("A1".into()),
                side_b: Some("B1".into()),
            }),
            None,
        ],
    )
    .unwrap();
    state.commit_round(planned, false).unwrap();

    // With both toggles off the rematch is unreachable: strict is blocked by
    // history and the relaxed levels are not attempted.
    let ctx = context(&fixture, locked);
    assert!(ctx
        .plan_round(&state, [MatchKind::Singles, MatchKind::Singles])
        .is_err());
}

#[test]
fn doubles_rounds_tally_pairs() {
    let fixture = TeamsFixture::new(6);
    let ctx = context(&fixture, MatchSettings::default());
    let mut state = SessionState::new();

    let planned = ctx
        .plan_round(&state, [MatchKind::Doubles, MatchKind::Singles])
        .unwrap();
    let pair_label = planned.courts[0].side_a.label().clone();
    state.commit_round(planned, false).unwrap();

    assert_eq!(state.tallies().pair_count(&pair_label), 1);
    // Ties keep enumeration order, so the first configured pairs play.
    assert_eq!(pair_label.as_str(), "A-pair1");
    assert_eq!(state.tallies().tally_for(&"A1".into()).doubles, 1);
    assert_eq!(state.tallies().tally_for(&"A1".into()).singles, 0);
}
