use common::{ADVENTURE_WORKS, CONTOSO, account_backend, names};
use fluent_query::memory::InMemoryBackend;
use fluent_query::prelude::*;

mod common;

#[test]
fn test_adds_simple_order() {
    let backend = InMemoryBackend::new();
    let mut query = backend.query("account");
    query.order(|o| {
        o.by("name");
    });

    let orders = &query.expression().orders;
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].attribute_name, "name");
    assert_eq!(orders[0].order_type, OrderType::Ascending);
}

#[test]
fn test_adds_multiple_orders_in_call_order() {
    let backend = InMemoryBackend::new();
    let mut query = backend.query("account");
    query
        .order(|o| {
            o.by("name");
        })
        .order(|o| {
            o.by("address1_line1");
        });

    let orders = &query.expression().orders;
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].attribute_name, "name");
    assert_eq!(orders[1].attribute_name, "address1_line1");
}

#[test]
fn test_sets_direction() {
    let backend = InMemoryBackend::new();
    let mut query = backend.query("account");
    query
        .order(|o| {
            o.by("name").ascending();
        })
        .order(|o| {
            o.by("address1_line1").descending();
        });

    let orders = &query.expression().orders;
    assert_eq!(orders[0].order_type, OrderType::Ascending);
    assert_eq!(orders[1].order_type, OrderType::Descending);
}

#[test]
fn test_sorts_results() {
    let backend = account_backend();

    let descending = backend
        .query("account")
        .include_columns(["name"])
        .order(|o| {
            o.descending().by("name");
        })
        .retrieve()
        .unwrap();
    assert_eq!(names(&descending), vec![CONTOSO, ADVENTURE_WORKS]);

    let ascending = backend
        .query("account")
        .include_columns(["name"])
        .order(|o| {
            o.by("name");
        })
        .retrieve()
        .unwrap();
    assert_eq!(names(&ascending), vec![ADVENTURE_WORKS, CONTOSO]);
}

#[test]
fn test_later_keys_break_ties() {
    let backend = InMemoryBackend::with_records([
        Record::new("contact")
            .with_attribute("lastname", "Smith")
            .with_attribute("firstname", "Ann"),
        Record::new("contact")
            .with_attribute("lastname", "Jones")
            .with_attribute("firstname", "Bob"),
        Record::new("contact")
            .with_attribute("lastname", "Smith")
            .with_attribute("firstname", "Zoe"),
    ]);

    let records = backend
        .query("contact")
        .include_all_columns()
        .order(|o| {
            o.by("lastname");
        })
        .order(|o| {
            o.by("firstname").descending();
        })
        .retrieve()
        .unwrap();

    let firstnames: Vec<String> = records
        .iter()
        .map(|r| r.get_as::<String>("firstname").unwrap().unwrap())
        .collect();
    assert_eq!(firstnames, vec!["Bob", "Zoe", "Ann"]);
}
