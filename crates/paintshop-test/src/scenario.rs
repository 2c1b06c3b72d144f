//! Known requests with their expected answer lines.

use paintshop_core::Request;

/// A request and the answer line the solver must print for it.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: &'static str,
    pub colors: i64,
    pub customers: i64,
    pub demands: Vec<Vec<i64>>,
    pub expected: &'static str,
}

impl Scenario {
    fn new(
        name: &'static str,
        colors: i64,
        customers: i64,
        demands: Vec<Vec<i64>>,
        expected: &'static str,
    ) -> Self {
        Self {
            name,
            colors,
            customers,
            demands,
            expected,
        }
    }

    pub fn request(&self) -> Request {
        Request::new(self.colors, self.customers, self.demands.clone())
    }

    /// The request as a JSON document.
    pub fn json(&self) -> String {
        self.request().to_json_string()
    }
}

/// Every known scenario.
pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new(
            "contested_color",
            1,
            2,
            vec![vec![1, 1, 0], vec![1, 1, 1]],
            "IMPOSSIBLE",
        ),
        Scenario::new("no_matte", 2, 2, vec![vec![1, 1, 0], vec![1, 2, 0]], "0 0"),
        Scenario::new(
            "all_matte",
            3,
            3,
            vec![vec![1, 1, 1], vec![2, 1, 0, 2, 1], vec![3, 1, 0, 2, 0, 3, 1]],
            "1 1 1",
        ),
        Scenario::new(
            "color_not_requested",
            5,
            2,
            vec![vec![1, 5, 1], vec![2, 1, 0, 2, 1]],
            "0 0 0 0 1",
        ),
        Scenario::new(
            "forced_matte_shares_color",
            5,
            3,
            vec![vec![1, 1, 1], vec![2, 1, 0, 2, 0], vec![1, 5, 0]],
            "1 0 0 0 0",
        ),
        Scenario::new(
            "disjoint_single_colors",
            3,
            3,
            vec![vec![1, 1, 0], vec![1, 2, 1], vec![1, 3, 0]],
            "0 1 0",
        ),
        Scenario::new(
            "free_customer_needs_matte",
            2,
            2,
            vec![vec![1, 1, 0], vec![2, 1, 0, 2, 1]],
            "0 1",
        ),
        Scenario::new(
            "bound_customer_collision",
            2,
            2,
            vec![vec![1, 1, 0], vec![2, 1, 0, 1, 1]],
            "IMPOSSIBLE",
        ),
        Scenario::new(
            "no_open_slot_left",
            3,
            3,
            vec![vec![1, 1, 0], vec![1, 2, 0], vec![2, 1, 1, 2, 0]],
            "IMPOSSIBLE",
        ),
        Scenario::new(
            "three_customers_two_colors",
            4,
            4,
            vec![
                vec![2, 1, 0, 2, 0],
                vec![2, 1, 1, 2, 0],
                vec![2, 1, 0, 2, 1],
                vec![2, 3, 0, 4, 0],
            ],
            "IMPOSSIBLE",
        ),
        Scenario::new("even_length", 2, 1, vec![vec![2, 1, 0, 2]], "IMPOSSIBLE"),
        Scenario::new("wrong_pair_count", 1, 1, vec![vec![2, 1, 0]], "IMPOSSIBLE"),
        Scenario::new(
            "too_many_matte_finishes",
            2,
            1,
            vec![vec![2, 1, 1, 2, 1]],
            "IMPOSSIBLE",
        ),
        Scenario::new(
            "color_beyond_catalog",
            2,
            1,
            vec![vec![2, 1, 0, 3, 0]],
            "IMPOSSIBLE",
        ),
        Scenario::new(
            "more_demands_than_customers",
            2,
            1,
            vec![vec![1, 1, 0], vec![1, 2, 0]],
            "IMPOSSIBLE",
        ),
        Scenario::new("finish_not_binary", 1, 1, vec![vec![1, 1, 2]], "IMPOSSIBLE"),
        Scenario::new("negative_color", 1, 1, vec![vec![1, -1, 0]], "IMPOSSIBLE"),
        Scenario::new(
            "not_enough_colors",
            1,
            2,
            vec![vec![1, 1, 0], vec![1, 1, 0]],
            "IMPOSSIBLE",
        ),
    ]
}

/// Looks up a scenario by name.
///
/// # Panics
///
/// Panics if no scenario has that name.
pub fn scenario(name: &str) -> Scenario {
    scenarios()
        .into_iter()
        .find(|s| s.name == name)
        .unwrap_or_else(|| panic!("unknown scenario `{name}`"))
}
