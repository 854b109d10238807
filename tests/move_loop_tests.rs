//! End-to-end tests of the move loop with scripted oracles.

use word_ladder::{
    Dictionary, LadderConfig, LadderOutcome, LadderSession, LoopState, MoveLoop, MoveRejection,
    ScriptedOracle, Verdict,
};

fn ladder_dictionary() -> Dictionary {
    Dictionary::from_words(
        4,
        [
            "cold", "bold", "bald", "ball", "tall", "tale", "tame", "warm", "ward", "wart", "cord",
            "card", "word", "corn", "core",
        ],
    )
}

fn config() -> LadderConfig {
    LadderConfig::new("cold", "warm").with_max_attempts(10).with_seed(42)
}

fn history(report: &word_ladder::LadderReport) -> Vec<&str> {
    report.history.iter().map(|w| w.as_str()).collect()
}

// =============================================================================
// Winning
// =============================================================================

#[test]
fn test_clean_run_wins() {
    let dict = ladder_dictionary();
    let session = LadderSession::new(&dict, "cold", "warm").unwrap();
    let oracle = ScriptedOracle::new([
        "<thoughts>Swap l for r.</thoughts>\nAnswer: cord",
        "<thoughts>o to a.</thoughts>\nAnswer: card",
        "<thoughts>c to w.</thoughts>\nAnswer: ward",
        "<thoughts>d to m.</thoughts>\nAnswer: warm",
    ]);

    let report = MoveLoop::new(session, oracle, &config()).run();

    assert_eq!(report.outcome, LadderOutcome::Won);
    assert_eq!(report.attempts, 4);
    assert_eq!(history(&report), vec!["cold", "cord", "card", "ward", "warm"]);
    assert!(report.records.iter().all(|r| r.verdict.is_accepted()));
}

#[test]
fn test_mixed_replies_each_get_a_verdict() {
    let dict = ladder_dictionary();
    let session = LadderSession::new(&dict, "cold", "warm").unwrap();
    let oracle = ScriptedOracle::new([
        "<think>cold -> bold</think>\nAnswer: bold",
        "Answer: cold",
        "$\\boxed{\\text{zoom}}$",
        "Answer: bolt",
    ])
    .then_fail("connection reset")
    .then_reply("**bald**")
    .then_reply("Answer: ball, since it keeps the b")
    .then_reply("Answer: tall");

    let mut game = MoveLoop::new(session, oracle, &config());
    while !game.state().is_terminal() {
        game.step();
    }

    // The script runs out before "warm"; the last two calls fail.
    let verdicts: Vec<Verdict> = game.records().iter().map(|r| r.verdict).collect();
    assert_eq!(
        verdicts,
        vec![
            Verdict::Accepted,
            Verdict::Rejected(MoveRejection::AlreadyVisited),
            Verdict::Rejected(MoveRejection::NotANeighbor),
            Verdict::Rejected(MoveRejection::NotInDictionary),
            Verdict::Rejected(MoveRejection::NoSuggestion),
            Verdict::Accepted,
            Verdict::Accepted,
            Verdict::Accepted,
            Verdict::Rejected(MoveRejection::NoSuggestion),
            Verdict::Rejected(MoveRejection::NoSuggestion),
        ]
    );
    let suggestions: Vec<&str> = game.records().iter().map(|r| r.suggestion.as_str()).collect();
    assert_eq!(
        &suggestions[..8],
        &["bold", "cold", "zoom", "bolt", "", "bald", "ball", "tall"]
    );

    let report = game.into_report();
    assert_eq!(report.outcome, LadderOutcome::Lost);
    assert_eq!(report.attempts, 10);
    assert_eq!(history(&report), vec!["cold", "bold", "bald", "ball", "tall"]);
}

#[test]
fn test_rejections_then_win() {
    let dict = ladder_dictionary();
    let session = LadderSession::new(&dict, "cold", "warm").unwrap();
    let oracle = ScriptedOracle::new([
        "<thoughts>swap l for r</thoughts>\nAnswer: cord",
        "Answer: cold",
        "$\\boxed{\\text{zoom}}$",
        "Answer: cork",
    ])
    .then_fail("timed out")
    .then_reply("**card**")
    .then_reply("<think>c to w</think>\nward")
    .then_reply("Answer: Warm.");

    let report = MoveLoop::new(session, oracle, &config()).run();

    assert_eq!(report.outcome, LadderOutcome::Won);
    assert_eq!(report.attempts, 8);
    assert_eq!(history(&report), vec!["cold", "cord", "card", "ward", "warm"]);
    assert_eq!(
        report.status_line(),
        "GAME_WON attempt=8 history=cold,cord,card,ward,warm"
    );

    let reasons: Vec<Option<MoveRejection>> = report
        .records
        .iter()
        .map(|r| match r.verdict {
            Verdict::Accepted => None,
            Verdict::Rejected(reason) => Some(reason),
        })
        .collect();
    assert_eq!(
        reasons,
        vec![
            None,
            Some(MoveRejection::AlreadyVisited),
            Some(MoveRejection::NotANeighbor),
            Some(MoveRejection::NotInDictionary),
            Some(MoveRejection::NoSuggestion),
            None,
            None,
            None,
        ]
    );
    assert_eq!(report.records[4].oracle_error.as_deref(), Some("oracle unavailable: timed out"));
}

#[test]
fn test_start_equals_target_is_won_without_oracle() {
    let dict = ladder_dictionary();
    let session = LadderSession::new(&dict, "warm", "warm").unwrap();
    let game = MoveLoop::new(session, ScriptedOracle::default(), &config());

    assert_eq!(game.state(), LoopState::Won { attempts: 0 });
    let report = game.run();
    assert_eq!(report.status_line(), "GAME_WON attempt=0 history=warm");
}

// =============================================================================
// Losing
// =============================================================================

#[test]
fn test_always_invalid_oracle_loses() {
    let dict = ladder_dictionary();
    let session = LadderSession::new(&dict, "cold", "warm").unwrap();
    let oracle = ScriptedOracle::repeating("Answer: zzzz");

    let report = MoveLoop::new(session, oracle, &config().with_max_attempts(5)).run();

    assert_eq!(report.outcome, LadderOutcome::Lost);
    assert_eq!(report.attempts, 5);
    assert_eq!(report.history.len(), 1);
    assert_eq!(report.records.len(), 5);
    assert!(report
        .records
        .iter()
        .all(|r| r.verdict == Verdict::Rejected(MoveRejection::NotANeighbor)));
    assert_eq!(report.status_line(), "GAME_LOST attempt=5 history=cold");
}

#[test]
fn test_silent_oracle_loses() {
    let dict = ladder_dictionary();
    let session = LadderSession::new(&dict, "cold", "warm").unwrap();

    let report = MoveLoop::new(session, ScriptedOracle::default(), &config().with_max_attempts(3)).run();

    assert_eq!(report.outcome, LadderOutcome::Lost);
    assert_eq!(report.history.len(), 1);
    assert!(report.records.iter().all(|r| r.oracle_error.is_some()));
}

#[test]
fn test_accepted_moves_consume_budget() {
    let dict = ladder_dictionary();
    let session = LadderSession::new(&dict, "cold", "warm").unwrap();
    let oracle = ScriptedOracle::new(["cord", "card", "ward", "warm"]);

    let report = MoveLoop::new(session, oracle, &config().with_max_attempts(3)).run();

    assert_eq!(report.outcome, LadderOutcome::Lost);
    assert_eq!(history(&report), vec!["cold", "cord", "card", "ward"]);
}

#[test]
fn test_terminal_loop_does_not_call_oracle() {
    let dict = ladder_dictionary();
    let session = LadderSession::new(&dict, "cold", "warm").unwrap();
    let mut game = MoveLoop::new(session, ScriptedOracle::repeating("zzzz"), &config().with_max_attempts(1));

    assert_eq!(game.step(), LoopState::Lost { attempts: 1 });
    assert_eq!(game.step(), LoopState::Lost { attempts: 1 });
    assert_eq!(game.oracle().requests().len(), 1);
}

// =============================================================================
// Requests
// =============================================================================

#[test]
fn test_requests_carry_state_and_hints() {
    let dict = ladder_dictionary();
    let session = LadderSession::new(&dict, "cold", "warm").unwrap();
    let oracle = ScriptedOracle::new(["Answer: cord", "Answer: nope"]);
    let mut game = MoveLoop::new(session, oracle, &config());

    game.step();
    game.step();

    let requests = game.oracle().requests();
    assert_eq!(requests.len(), 2);

    assert!(requests[0].contains("The current word is \"cold\"."));
    assert!(requests[0].contains("The words used so far are: cold."));
    assert!(requests[0].contains("(4 letters)"));
    assert!(requests[0].contains("Some valid next words are: "));

    assert!(requests[1].contains("The current word is \"cord\"."));
    assert!(requests[1].contains("The words used so far are: cold, cord."));

    // Hints for "cord" exclude the visited "cold".
    let hints: Vec<&str> = game.records()[1].hints.iter().map(|w| w.as_str()).collect();
    let mut sorted = hints.clone();
    sorted.sort();
    assert_eq!(sorted, vec!["card", "core", "corn", "word"]);
}

#[test]
fn test_hints_disabled_omits_line() {
    let dict = ladder_dictionary();
    let session = LadderSession::new(&dict, "cold", "warm").unwrap();
    let oracle = ScriptedOracle::new(["Answer: cord"]);
    let mut game = MoveLoop::new(session, oracle, &config().with_hints(false));

    game.step();
    assert!(!game.oracle().requests()[0].contains("Some valid next words"));
    assert!(game.records()[0].hints.is_empty());
}

#[test]
fn test_hint_sampling_is_seeded() {
    let dict = ladder_dictionary();
    let run = |seed: u64| {
        let session = LadderSession::new(&dict, "cord", "warm").unwrap();
        let cfg = config().with_hint_limit(2).with_seed(seed);
        let mut game = MoveLoop::new(session, ScriptedOracle::repeating("zzzz"), &cfg);
        (0..4)
            .map(|_| {
                game.step();
                game.records().last().unwrap().hints.clone()
            })
            .collect::<Vec<_>>()
    };

    let first = run(5);
    assert_eq!(first, run(5));
    assert!(first.iter().all(|hints| hints.len() == 2));
}

#[test]
fn test_noise_stripping_disabled() {
    let dict = ladder_dictionary();
    let session = LadderSession::new(&dict, "cold", "warm").unwrap();
    let oracle = ScriptedOracle::new(["$\\boxed{\\text{cord}}$"]);
    let mut game = MoveLoop::new(session, oracle, &config().with_noise_stripping(false));

    game.step();
    assert_eq!(
        game.records()[0].verdict,
        Verdict::Rejected(MoveRejection::NoSuggestion)
    );
    assert_eq!(game.session().history().len(), 1);
}

#[test]
fn test_report_serializes() {
    let dict = ladder_dictionary();
    let session = LadderSession::new(&dict, "cold", "warm").unwrap();
    let oracle = ScriptedOracle::new(["Answer: cord", "Answer: cold"]);
    let report = MoveLoop::new(session, oracle, &config().with_max_attempts(2)).run();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["outcome"], "lost");
    assert_eq!(json["history"], serde_json::json!(["cold", "cord"]));
    assert_eq!(json["seed"], 42);
    assert_eq!(json["records"][1]["verdict"]["reason"], "already-visited");
}
