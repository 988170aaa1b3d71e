use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::bracket::{
    draw_opening, highest_power_of_two, pair_winners, plan_bracket, rounds_required, OpeningDraw,
    Slot,
};

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

#[test]
fn power_of_two_helpers() {
    assert_eq!(highest_power_of_two(2), 2);
    assert_eq!(highest_power_of_two(5), 4);
    assert_eq!(highest_power_of_two(16), 16);
    assert_eq!(highest_power_of_two(21), 16);

    assert_eq!(rounds_required(2), 1);
    assert_eq!(rounds_required(4), 2);
    assert_eq!(rounds_required(5), 3);
    assert_eq!(rounds_required(8), 3);
    assert_eq!(rounds_required(9), 4);
}

#[test]
fn five_entrants_plan_shape() {
    // ceil(log2(5)) = 3 rounds: one preliminary fixture, then two
    // semi-final fixtures, then the final.
    let plan = plan_bracket(5).unwrap();
    assert_eq!(plan.len(), 3);

    assert!(plan[0].is_preliminary);
    assert_eq!(plan[0].name, "Preliminary");
    assert_eq!(plan[0].fixture_count, 1);

    assert_eq!(plan[1].name, "Semi-finals");
    assert_eq!(plan[1].fixture_count, 2);

    assert_eq!(plan[2].name, "Final");
    assert_eq!(plan[2].fixture_count, 1);
}

#[test]
fn sixteen_entrants_plan_names() {
    let plan = plan_bracket(16).unwrap();
    let names: Vec<&str> = plan.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Round of 16", "Quarter-finals", "Semi-finals", "Final"]);
    assert!(plan.iter().all(|r| !r.is_preliminary));
}

#[test]
fn plan_rejects_tiny_fields() {
    assert!(plan_bracket(0).is_err());
    assert!(plan_bracket(1).is_err());
}

#[test]
fn full_draw_pairs_every_entrant_once() {
    let entrants: Vec<i64> = (1..=8).collect();
    let draw = draw_opening(&entrants, &mut rng(1)).unwrap();

    let OpeningDraw::Full { pairs } = draw else {
        panic!("8 entrants should not need a preliminary round");
    };
    assert_eq!(pairs.len(), 4);

    let mut seen: Vec<i64> = pairs.iter().flat_map(|(h, a)| [*h, *a]).collect();
    seen.sort_unstable();
    assert_eq!(seen, entrants);
}

#[test]
fn preliminary_draw_splits_field_and_seats_byes() {
    let entrants: Vec<i64> = (1..=5).collect();
    let draw = draw_opening(&entrants, &mut rng(7)).unwrap();

    let OpeningDraw::Preliminary { pairs, bye_seats } = draw else {
        panic!("5 entrants need a preliminary round");
    };
    // 5 - 4 = 1 preliminary fixture, 3 byes into the semi-finals.
    assert_eq!(pairs.len(), 1);
    assert_eq!(bye_seats.len(), 3);

    // Bye seats are distinct and within the next round's four seats.
    let mut seats: Vec<(usize, bool)> = bye_seats
        .iter()
        .map(|b| (b.fixture_index, matches!(b.slot, Slot::Home)))
        .collect();
    seats.sort_unstable();
    seats.dedup();
    assert_eq!(seats.len(), 3);
    assert!(bye_seats.iter().all(|b| b.fixture_index < 2));

    // Every entrant appears exactly once across pairs and byes.
    let mut seen: Vec<i64> = pairs.iter().flat_map(|(h, a)| [*h, *a]).collect();
    seen.extend(bye_seats.iter().map(|b| b.player_id));
    seen.sort_unstable();
    assert_eq!(seen, entrants);
}

#[test]
fn pair_winners_requires_even_field() {
    assert!(pair_winners(&[1, 2, 3], &mut rng(3)).is_err());
    assert!(pair_winners(&[1], &mut rng(3)).is_err());

    let pairs = pair_winners(&[1, 2, 3, 4], &mut rng(3)).unwrap();
    assert_eq!(pairs.len(), 2);
    let mut seen: Vec<i64> = pairs.iter().flat_map(|(h, a)| [*h, *a]).collect();
    seen.sort_unstable();
    assert_eq!(seen, vec![1, 2, 3, 4]);
}

#[test]
fn draws_are_deterministic_for_a_seed() {
    let entrants: Vec<i64> = (1..=12).collect();
    let a = draw_opening(&entrants, &mut rng(42)).unwrap();
    let b = draw_opening(&entrants, &mut rng(42)).unwrap();
    assert_eq!(a, b);
}
