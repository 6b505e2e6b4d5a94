use burnout_cli::session::{Session, SessionError};
use burnout_core::error::ScoreError;
use burnout_core::scoring::compute_scores;
use burnout_instruments::instruments::cbi19::cbi19;

#[test]
fn answer_records_and_advances() {
    let mut session = Session::new(cbi19());

    session.answer(3).unwrap();
    assert_eq!(session.responses()[0], Some(3));
    assert_eq!(session.position(), 1);
}

#[test]
fn skip_leaves_the_slot_unanswered() {
    let mut session = Session::new(cbi19());

    session.skip();
    assert_eq!(session.responses()[0], None);
    assert_eq!(session.position(), 1);
}

#[test]
fn back_allows_replacing_an_answer() {
    let mut session = Session::new(cbi19());

    session.answer(0).unwrap();
    session.back();
    session.answer(4).unwrap();

    assert_eq!(session.responses()[0], Some(4));
    assert_eq!(session.position(), 1);
}

#[test]
fn back_saturates_at_the_first_item() {
    let mut session = Session::new(cbi19());

    session.back();
    assert_eq!(session.position(), 0);
}

#[test]
fn out_of_range_option_is_rejected_before_scoring() {
    let mut session = Session::new(cbi19());

    let err = session.answer(5).unwrap_err();
    assert!(matches!(
        err,
        SessionError::Score(ScoreError::OptionIndexOutOfRange {
            item_id: 1,
            index: 5,
            ..
        })
    ));
    // The cursor stays put and nothing is recorded.
    assert_eq!(session.position(), 0);
    assert_eq!(session.responses()[0], None);
}

#[test]
fn recording_past_the_end_is_rejected() {
    let mut session = Session::new(cbi19());

    let err = session.record(99, 0).unwrap_err();
    assert!(matches!(
        err,
        SessionError::Position {
            position: 99,
            items: 19,
        }
    ));
}

#[test]
fn progress_counts_answered_items() {
    let mut session = Session::new(cbi19());

    session.answer(2).unwrap();
    session.skip();
    session.answer(2).unwrap();

    assert_eq!(session.progress(), (2, 19));
}

#[test]
fn session_completes_after_the_last_item() {
    let mut session = Session::new(cbi19());

    for _ in 0..19 {
        assert!(!session.is_complete());
        session.skip();
    }
    assert!(session.is_complete());
    assert!(session.current_item().is_none());

    // Skipping past the end stays put.
    session.skip();
    assert_eq!(session.position(), 19);
}

#[test]
fn finish_matches_a_direct_engine_call() {
    let mut session = Session::new(cbi19());
    for i in 0..19 {
        session.answer(i % 5).unwrap();
    }

    let submission = session.finish().unwrap();
    let direct = compute_scores(cbi19(), session.responses()).unwrap();

    assert_eq!(submission.report, direct);
    assert_eq!(submission.instrument_id, "cbi19");
    assert_eq!(submission.responses, *session.responses());
}

#[test]
fn finish_with_partial_answers_keeps_unanswered_slots() {
    let mut session = Session::new(cbi19());
    session.answer(2).unwrap();
    session.skip();
    session.answer(2).unwrap();

    let submission = session.finish().unwrap();
    assert_eq!(submission.report.item_scores[0], Some(50.0));
    assert_eq!(submission.report.item_scores[1], None);
    assert_eq!(submission.report.item_scores[2], Some(50.0));
}
