//! Tests for the pure scoring engine: terms, buckets, progress, standings, ranking.

use golf_tournament_web::{
    back_nine, build_course, final_score_to_par, final_standing_strokes, format_score_to_par,
    front_nine, player_progress, rank_by_final, rank_by_progress, recorded_strokes, score_bucket,
    score_distribution, score_term, DisplayBucket, Player, ScoreTerm, DEFAULT_PARS_18,
};

fn player_with_scores(name: &str, scores: &[(u32, u32)]) -> Player {
    let mut p = Player::new(name);
    for &(hole, strokes) in scores {
        p.record_strokes(hole, strokes);
    }
    p
}

#[test]
fn score_term_classifies_every_diff_at_par_4() {
    assert_eq!(score_term(4, 1), ScoreTerm::Albatross);
    assert_eq!(score_term(4, 2), ScoreTerm::Eagle);
    assert_eq!(score_term(4, 3), ScoreTerm::Birdie);
    assert_eq!(score_term(4, 4), ScoreTerm::Par);
    assert_eq!(score_term(4, 5), ScoreTerm::Bogey);
    assert_eq!(score_term(4, 6), ScoreTerm::DoubleBogey);
    assert_eq!(score_term(4, 7), ScoreTerm::TripleBogeyPlus);
    assert_eq!(score_term(4, 11), ScoreTerm::TripleBogeyPlus);
}

#[test]
fn score_term_display_uses_golf_labels() {
    assert_eq!(score_term(4, 6).to_string(), "Double Bogey");
    assert_eq!(score_term(4, 9).to_string(), "Triple Bogey+");
    assert_eq!(score_term(5, 4).to_string(), "Birdie");
}

#[test]
fn score_bucket_is_coarser_than_score_term() {
    assert_eq!(score_bucket(4, None), DisplayBucket::Unplayed);
    // Albatross and eagle collapse into one styling bucket.
    assert_eq!(score_bucket(5, Some(2)), DisplayBucket::EagleOrBetter);
    assert_eq!(score_bucket(5, Some(3)), DisplayBucket::EagleOrBetter);
    assert_eq!(score_bucket(4, Some(3)), DisplayBucket::Birdie);
    assert_eq!(score_bucket(4, Some(4)), DisplayBucket::Par);
    assert_eq!(score_bucket(4, Some(5)), DisplayBucket::Bogey);
    // Double bogey and worse collapse too.
    assert_eq!(score_bucket(4, Some(6)), DisplayBucket::DoubleBogeyOrWorse);
    assert_eq!(score_bucket(4, Some(9)), DisplayBucket::DoubleBogeyOrWorse);
}

#[test]
fn format_score_to_par_exact_strings() {
    assert_eq!(format_score_to_par(0), "E");
    assert_eq!(format_score_to_par(3), "+3");
    assert_eq!(format_score_to_par(-2), "-2");
}

#[test]
fn progress_with_no_scores_is_all_zero() {
    let course = build_course(&DEFAULT_PARS_18).unwrap();
    let p = Player::new("Nobody");
    let progress = player_progress(&p, &course);
    assert_eq!(progress.total_strokes, 0);
    assert_eq!(progress.holes_played, 0);
    assert_eq!(progress.score_to_par, 0);
}

#[test]
fn progress_counts_only_played_holes() {
    // Par [3,4,5]; only hole 1 played with 5 strokes (+2).
    let course = build_course(&[3, 4, 5]).unwrap();
    let p = player_with_scores("C", &[(1, 5)]);
    let progress = player_progress(&p, &course);
    assert_eq!(progress.total_strokes, 5);
    assert_eq!(progress.holes_played, 1);
    assert_eq!(progress.score_to_par, 2);
}

#[test]
fn final_standing_assumes_par_for_unplayed_holes() {
    // Recorded 4+4=8 strokes on holes 1-2; hole 3 (par 5) unplayed counts as par.
    let course = build_course(&[3, 4, 5]).unwrap();
    let p = player_with_scores("D", &[(1, 4), (2, 4)]);
    assert_eq!(final_standing_strokes(&p, &course), 8 + 5);
    assert_eq!(final_score_to_par(&p, &course), 1);
}

#[test]
fn live_ranking_orders_by_score_to_par() {
    let course = build_course(&[3, 4, 5]).unwrap();
    let a = player_with_scores("A", &[(1, 3), (2, 4), (3, 5)]); // even
    let b = player_with_scores("B", &[(1, 2), (2, 4), (3, 5)]); // -1
    let players = vec![a, b];

    let ranked = rank_by_progress(&players, &course);
    assert_eq!(ranked[0].name, "B");
    assert_eq!(ranked[1].name, "A");
    assert_eq!(
        format_score_to_par(player_progress(ranked[0], &course).score_to_par),
        "-1"
    );
    assert_eq!(
        format_score_to_par(player_progress(ranked[1], &course).score_to_par),
        "E"
    );
}

#[test]
fn ranking_is_stable_on_ties() {
    let course = build_course(&[3, 4, 5]).unwrap();
    // All even through two holes: registration order must hold.
    let first = player_with_scores("First", &[(1, 3), (2, 4)]);
    let second = player_with_scores("Second", &[(1, 3), (2, 4)]);
    let third = player_with_scores("Third", &[(1, 2), (2, 5)]);
    let players = vec![first, second, third];

    let ranked = rank_by_progress(&players, &course);
    assert_eq!(ranked[0].name, "First");
    assert_eq!(ranked[1].name, "Second");
    assert_eq!(ranked[2].name, "Third");
}

#[test]
fn final_ranking_keeps_partial_cards_ordered() {
    let course = build_course(&[3, 4, 5]).unwrap();
    // A finished even; B only played hole 1 at par, so the final total
    // assumes par for the rest: both land on 12 and A keeps roster order.
    let a = player_with_scores("A", &[(1, 3), (2, 4), (3, 5)]);
    let b = player_with_scores("B", &[(1, 3)]);
    let players = vec![a, b];

    let ranked = rank_by_final(&players, &course);
    assert_eq!(final_standing_strokes(ranked[0], &course), 12);
    assert_eq!(final_standing_strokes(ranked[1], &course), 12);
    assert_eq!(ranked[0].name, "A");
}

#[test]
fn front_and_back_nine_split_an_18_hole_course() {
    let course = build_course(&DEFAULT_PARS_18).unwrap();
    let front = front_nine(&course);
    let back = back_nine(&course);
    assert_eq!(front.len(), 9);
    assert_eq!(back.len(), 9);
    assert_eq!(front[0].number, 1);
    assert_eq!(back[0].number, 10);

    let nine = build_course(&[3, 4, 5]).unwrap();
    assert_eq!(front_nine(&nine).len(), 3);
    assert!(back_nine(&nine).is_empty());
}

#[test]
fn recorded_strokes_ignores_unplayed_holes_entirely() {
    let course = build_course(&[3, 4, 5]).unwrap();
    let p = player_with_scores("E", &[(1, 4), (3, 6)]);
    // Unlike the final standing, hole 2 contributes nothing here.
    assert_eq!(recorded_strokes(&p, &course), 10);
}

#[test]
fn distribution_counts_played_holes_per_bracket() {
    let course = build_course(&[4, 4, 4, 4, 4, 4]).unwrap();
    let p = player_with_scores(
        "F",
        &[(1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 9)],
    );
    let dist = score_distribution(&p, &course);
    assert_eq!(dist.eagle_or_better, 1);
    assert_eq!(dist.birdies, 1);
    assert_eq!(dist.pars, 1);
    assert_eq!(dist.bogeys, 1);
    assert_eq!(dist.double_bogeys, 1);
    assert_eq!(dist.triple_or_worse, 1);
}

#[test]
fn par_edits_simply_recompute_against_existing_scores() {
    let mut course = build_course(&[4, 4]).unwrap();
    let p = player_with_scores("G", &[(1, 4), (2, 4)]);
    assert_eq!(player_progress(&p, &course).score_to_par, 0);
    // Scores are plain integers; a par change just shifts the diff.
    course[0].par = 3;
    assert_eq!(player_progress(&p, &course).score_to_par, 1);
}
