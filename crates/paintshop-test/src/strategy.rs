//! `proptest` strategies for requests.

use std::collections::BTreeSet;

use paintshop_core::Request;
use proptest::collection::{btree_set, vec};
use proptest::prelude::*;

/// Requests that pass every structural check: at most `max_colors` colors,
/// no more customers than colors, one to three distinct pairs per order with
/// at most one of them matte.
///
/// Contested and conflicting single-preference pairs are not excluded, so
/// some generated requests are still rejected.
pub fn well_formed_request(max_colors: usize) -> impl Strategy<Value = Request> {
    (1..=max_colors)
        .prop_flat_map(|colors| (Just(colors), 1..=colors))
        .prop_flat_map(|(colors, customers)| {
            vec(order(colors), customers).prop_map(move |demands| {
                Request::new(colors as i64, demands.len() as i64, demands)
            })
        })
}

/// One customer order over `colors` colors, wire-encoded.
fn order(colors: usize) -> impl Strategy<Value = Vec<i64>> {
    let max_pairs = (2 * colors).min(3);
    btree_set((1..=colors as i64, 0..=1i64), 1..=max_pairs).prop_map(keep_one_matte)
}

// Drops every matte pair after the first.
fn keep_one_matte(pairs: BTreeSet<(i64, i64)>) -> Vec<i64> {
    let mut seen_matte = false;
    let kept: Vec<(i64, i64)> = pairs
        .into_iter()
        .filter(|&(_, finish)| {
            if finish == 0 {
                return true;
            }
            !std::mem::replace(&mut seen_matte, true)
        })
        .collect();

    let mut order = vec![kept.len() as i64];
    for (color, finish) in kept {
        order.push(color);
        order.push(finish);
    }
    order
}
