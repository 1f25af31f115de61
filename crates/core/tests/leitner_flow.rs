use chrono::Duration;
use leitner_core::model::{AnswerDifficulty, AnswerRecord, BucketMap, BucketSet, Flashcard};
use leitner_core::time::{fixed_clock, fixed_now};
use leitner_core::{
    BucketRange, Error, LeitnerSettings, bucket_range, compute_progress, hint, practice,
    to_bucket_sets, update,
};

fn deck() -> (Flashcard, Flashcard, Flashcard) {
    (
        Flashcard::new("cat", "a small pet").with_tags(["animals"]),
        Flashcard::new("dog", "a loyal pet").with_tags(["animals"]),
        Flashcard::new("owl", "a night bird")
            .with_hint("hoots")
            .with_tags(["animals", "birds"]),
    )
}

#[test]
fn five_day_session_moves_cards_through_buckets() {
    let (cat, dog, owl) = deck();
    let mut buckets: BucketMap = [
        (0, BucketSet::from([cat.clone(), dog.clone(), owl.clone()])),
        (1, BucketSet::new()),
        (2, BucketSet::new()),
        (3, BucketSet::new()),
    ]
    .into_iter()
    .collect();

    let started_at = fixed_now();
    let mut clock = fixed_clock();
    let mut history = Vec::new();
    let mut due_per_day = Vec::new();

    for _ in 0..5 {
        let day = clock.study_day(started_at);
        let due = practice(&to_bucket_sets(&buckets), day);
        due_per_day.push(due.len());

        for card in &due {
            let difficulty = if *card == owl {
                AnswerDifficulty::Hard
            } else {
                AnswerDifficulty::Easy
            };
            buckets = update(&buckets, card, difficulty).unwrap();
            history.push(AnswerRecord::new(card.clone(), difficulty, clock.now()));
        }

        assert_eq!(buckets.total_cards(), 3);
        clock.advance(Duration::days(1));
    }

    // day 1 only reviews bucket 0, where the owl stays stuck
    assert_eq!(due_per_day, vec![3, 1, 3, 3, 3]);
    assert_eq!(buckets.find_card(&cat), Some(3));
    assert_eq!(buckets.find_card(&dog), Some(3));
    assert_eq!(buckets.find_card(&owl), Some(0));
    assert_eq!(
        bucket_range(&buckets),
        Some(BucketRange {
            min_bucket: 0,
            max_bucket: 3
        })
    );

    let report = compute_progress(&buckets, &history, &LeitnerSettings::default()).unwrap();
    assert_eq!(report.total_cards, 3);
    assert_eq!(report.answers.total_attempts, 13);
    assert_eq!(report.answers.breakdown.hard, 5);
    assert_eq!(report.answers.breakdown.easy, 8);
    assert_eq!(report.answers.hardest_cards.len(), 1);
    assert_eq!(report.answers.hardest_cards[0].card, owl);
    assert_eq!(report.recent.total(), 10);
    assert_eq!(report.average_bucket, Some(2.0));
}

#[test]
fn errors_surface_through_crate_error() {
    let (cat, _, _) = deck();
    let buckets = BucketMap::new();

    let err: Error = update(&buckets, &cat, AnswerDifficulty::Easy)
        .map_err(Error::from)
        .unwrap_err();
    assert!(matches!(err, Error::Bucket(_)));

    let err: Error = hint(&Flashcard::new("", "empty front"))
        .map_err(Error::from)
        .unwrap_err();
    assert!(matches!(err, Error::Hint(_)));

    let err: Error = compute_progress(&buckets, &[], &LeitnerSettings::default())
        .map_err(Error::from)
        .unwrap_err();
    assert!(matches!(err, Error::Progress(_)));
}

#[test]
fn hints_for_a_deck() {
    let (cat, dog, owl) = deck();
    let hints: Vec<_> = [&cat, &dog, &owl]
        .into_iter()
        .map(|card| hint(card).unwrap())
        .collect();
    assert_eq!(hints, vec!["c_t", "d_g", "o_l"]);
    assert_eq!(owl.hint(), Some("hoots"));
}
