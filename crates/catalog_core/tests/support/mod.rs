//! Shared test-only fixtures: a product factory with randomized field values
//! and a scenario-table loader for behavior-driven setup.

// Each test binary uses its own subset of these helpers.
#![allow(dead_code)]

use catalog_core::{
    parse_available_flag, NewProduct, Product, ProductRepository, RepoResult,
};
use rand::seq::SliceRandom;
use rand::Rng;

const WORDS: &[&str] = &[
    "anvil", "basket", "candle", "drum", "ember", "fathom", "garnet", "harbor", "ingot",
    "juniper", "kettle", "lantern", "marble", "nickel", "orchid", "pepper", "quartz", "ribbon",
];

/// Generates synthetic products: random word for name/category, random
/// availability, random two-digit price. Ids are assigned by the store on
/// insert, so the factory never fabricates them.
pub struct ProductFactory {
    rng: rand::rngs::ThreadRng,
}

impl ProductFactory {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }

    pub fn build(&mut self) -> NewProduct {
        NewProduct {
            name: self.word(),
            category: self.word(),
            available: self.rng.gen_bool(0.5),
            price: self.rng.gen_range(10..100),
        }
    }

    pub fn create<R: ProductRepository>(&mut self, repo: &R) -> RepoResult<Product> {
        repo.create_product(&self.build())
    }

    fn word(&mut self) -> String {
        WORDS.choose(&mut self.rng)
            .copied()
            .unwrap_or("widget")
            .to_string()
    }
}

/// Bulk-inserts products described as a `name | category | available | price`
/// text table, one row per line, with the first line being the header.
///
/// The `available` column uses the same `"True"` exact-literal convention as
/// the HTTP query parameter.
pub fn load_products_table<R: ProductRepository>(
    repo: &R,
    table: &str,
) -> RepoResult<Vec<Product>> {
    let mut created = Vec::new();

    for line in table.lines().map(str::trim).filter(|line| !line.is_empty()).skip(1) {
        let columns: Vec<&str> = line
            .trim_matches('|')
            .split('|')
            .map(str::trim)
            .collect();
        assert_eq!(
            columns.len(),
            4,
            "scenario row must have name | category | available | price: `{line}`"
        );

        let input = NewProduct {
            name: columns[0].to_string(),
            category: columns[1].to_string(),
            available: parse_available_flag(columns[2]),
            price: columns[3]
                .parse()
                .unwrap_or_else(|_| panic!("invalid price in scenario row `{line}`")),
        };
        created.push(repo.create_product(&input)?);
    }

    Ok(created)
}
