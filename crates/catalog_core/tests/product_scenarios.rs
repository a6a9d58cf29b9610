//! Behavior-driven scenarios over the product service, seeded from scenario
//! tables in the `name | category | available | price` format.

mod support;

use catalog_core::db::open_db_in_memory;
use catalog_core::{
    Product, ProductListQuery, ProductService, ProductUpdate, SqliteProductRepository,
};
use support::load_products_table;

const SINGLE_PRODUCT_TABLE: &str = "
    | name         | category      | available | price |
    | Test Product | Test Category | True      | 10    |
";

/// Builds a service over an in-memory store pre-loaded with the given
/// scenario table, returning the seeded rows for id lookups.
fn given_products(table: &str) -> (ProductService<SqliteProductRepository>, Vec<Product>) {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProductRepository::try_new(conn).unwrap();
    let seeded = load_products_table(&repo, table).unwrap();
    (ProductService::new(repo), seeded)
}

#[test]
fn read_a_product() {
    let (service, seeded) = given_products(SINGLE_PRODUCT_TABLE);

    let product = service.get_product(seeded[0].id).unwrap().unwrap();
    assert_eq!(product.name, "Test Product");
}

#[test]
fn update_a_product() {
    let (service, seeded) = given_products(SINGLE_PRODUCT_TABLE);

    let update = ProductUpdate {
        name: Some("Updated Product".to_string()),
    };
    service.update_product(seeded[0].id, &update).unwrap();

    let product = service.get_product(seeded[0].id).unwrap().unwrap();
    assert_eq!(product.name, "Updated Product");
}

#[test]
fn delete_a_product() {
    let (service, seeded) = given_products(SINGLE_PRODUCT_TABLE);

    assert!(service.delete_product(seeded[0].id).unwrap());
    assert!(service.get_product(seeded[0].id).unwrap().is_none());
}

#[test]
fn list_all_products() {
    let (service, _) = given_products(SINGLE_PRODUCT_TABLE);

    let names: Vec<_> = service
        .list_products(&ProductListQuery::default())
        .unwrap()
        .into_iter()
        .map(|product| product.name)
        .collect();
    assert_eq!(names, vec!["Test Product".to_string()]);
}

#[test]
fn search_products_by_name() {
    let (service, _) = given_products(SINGLE_PRODUCT_TABLE);

    let found = service
        .list_products(&ProductListQuery::by_name("Test Product"))
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].category, "Test Category");
}

#[test]
fn search_products_by_category_and_availability() {
    let (service, _) = given_products(
        "
        | name | category | available | price |
        | A    | C1       | True      | 10    |
        | B    | C1       | False     | 20    |
        ",
    );

    let in_category = service
        .list_products(&ProductListQuery::by_category("C1"))
        .unwrap();
    assert_eq!(in_category.len(), 2);

    let available: Vec<_> = service
        .list_products(&ProductListQuery::by_availability(true))
        .unwrap();
    assert_eq!(available.len(), 1);
    assert_eq!(available[0].name, "A");
}

#[test]
fn scenario_table_parses_availability_with_the_true_literal() {
    let (_, seeded) = given_products(
        "
        | name  | category | available | price |
        | Exact | Flags    | True      | 11    |
        | Lower | Flags    | true      | 12    |
        | Off   | Flags    | False     | 13    |
        ",
    );

    assert!(seeded[0].available);
    // Lowercase `true` is not the exact literal and parses as false.
    assert!(!seeded[1].available);
    assert!(!seeded[2].available);
}
