//! Exhaustive reference solver.
//!
//! An assignment serves a request when every customer can be given a
//! distinct color whose assigned finish they like. The reference tries all
//! `2^colors` assignments in lexicographic order and keeps the first one
//! with the fewest matte slots, so it only suits small catalogs.

use paintshop_core::{Finish, Request};

/// Liked (0-based color, finish) pairs per customer.
///
/// Assumes a well-formed request; malformed pairs are skipped.
pub fn decode_orders(request: &Request) -> Vec<Vec<(usize, Finish)>> {
    request
        .demands
        .iter()
        .map(|order| {
            let pairs: Vec<i64> = order.iter().skip(1).copied().collect();
            pairs
                .chunks_exact(2)
                .filter(|pair| pair[0] >= 1)
                .filter_map(|pair| Some((pair[0] as usize - 1, Finish::from_code(pair[1])?)))
                .collect()
        })
        .collect()
}

/// Whether every customer gets a distinct color with a liked finish.
pub fn satisfies_all(finishes: &[Finish], orders: &[Vec<(usize, Finish)>]) -> bool {
    let mut used = vec![false; finishes.len()];
    place(0, finishes, orders, &mut used)
}

fn place(
    customer: usize,
    finishes: &[Finish],
    orders: &[Vec<(usize, Finish)>],
    used: &mut [bool],
) -> bool {
    let Some(order) = orders.get(customer) else {
        return true;
    };
    for &(color, finish) in order {
        if color < finishes.len() && !used[color] && finishes[color] == finish {
            used[color] = true;
            if place(customer + 1, finishes, orders, used) {
                return true;
            }
            used[color] = false;
        }
    }
    false
}

/// The lexicographically smallest assignment with the fewest matte slots,
/// or `None` when no assignment serves every customer.
///
/// # Panics
///
/// Panics if the request has more than 20 colors.
pub fn reference_answer(request: &Request) -> Option<Vec<Finish>> {
    let colors = request.colors as usize;
    assert!(colors <= 20, "reference solver is exhaustive; got {colors} colors");

    let orders = decode_orders(request);
    let mut best: Option<(usize, Vec<Finish>)> = None;
    for mask in 0u32..(1 << colors) {
        let matte = mask.count_ones() as usize;
        if best.as_ref().is_some_and(|(best_matte, _)| matte >= *best_matte) {
            continue;
        }
        // First color is the most significant bit.
        let finishes: Vec<Finish> = (0..colors)
            .map(|color| {
                if mask >> (colors - 1 - color) & 1 == 1 {
                    Finish::Matte
                } else {
                    Finish::Glossy
                }
            })
            .collect();
        if satisfies_all(&finishes, &orders) {
            best = Some((matte, finishes));
        }
    }
    best.map(|(_, finishes)| finishes)
}
