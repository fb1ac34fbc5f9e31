use common::{ADVENTURE_WORKS, CONTOSO, account_backend, names};
use fluent_query::memory::InMemoryBackend;
use fluent_query::prelude::*;
use serde_json::json;

mod common;

#[test]
fn test_sets_simple_filter() {
    let backend = InMemoryBackend::new();
    let mut query = backend.query("account");
    query.r#where(|f| {
        f.attribute(|a| {
            a.of("contact")
                .named("name")
                .is(ConditionOperator::Equal)
                .value("Test");
        })
        .with()
        .operator(LogicalOperator::And);
    });

    let criteria = query.expression().criteria.as_ref().unwrap();
    assert_eq!(criteria.filter_operator, LogicalOperator::And);

    let condition = &criteria.conditions[0];
    assert_eq!(condition.entity_name.as_deref(), Some("contact"));
    assert_eq!(condition.attribute_name, "name");
    assert_eq!(condition.operator, ConditionOperator::Equal);
    assert_eq!(condition.values, vec![json!("Test")]);
}

#[test]
fn test_sets_nested_filter() {
    let backend = InMemoryBackend::new();
    let mut query = backend.query("account");
    query.r#where(|f| {
        f.attribute(|a| {
            a.of("contact")
                .named("name")
                .is(ConditionOperator::Equal)
                .value("Test");
        })
        .with()
        .operator(LogicalOperator::And)
        .r#where(|nested| {
            nested
                .attribute(|a| {
                    a.of("contact2")
                        .named("name2")
                        .is(ConditionOperator::NotEqual)
                        .value("Test2");
                })
                .with()
                .operator(LogicalOperator::Or);
        });
    });

    let criteria = query.expression().criteria.as_ref().unwrap();
    assert_eq!(criteria.filter_operator, LogicalOperator::And);
    assert_eq!(criteria.conditions[0].attribute_name, "name");

    let nested = &criteria.filters[0];
    assert_eq!(nested.filter_operator, LogicalOperator::Or);
    assert_eq!(nested.conditions[0].entity_name.as_deref(), Some("contact2"));
    assert_eq!(nested.conditions[0].attribute_name, "name2");
    assert_eq!(nested.conditions[0].operator, ConditionOperator::NotEqual);
    assert_eq!(nested.conditions[0].values, vec![json!("Test2")]);
}

#[test]
fn test_operator_defaults_to_and() {
    let backend = InMemoryBackend::new();
    let mut query = backend.query("account");
    query.r#where(|f| {
        f.r#where(|_| {});
    });

    let criteria = query.expression().criteria.as_ref().unwrap();
    assert_eq!(criteria.filter_operator, LogicalOperator::And);
    assert_eq!(criteria.filters[0].filter_operator, LogicalOperator::And);
}

#[test]
fn test_nesting_depth_follows_closures() {
    let backend = InMemoryBackend::new();
    let mut query = backend.query("account");
    query.r#where(|first| {
        first.r#where(|second| {
            second.r#where(|third| {
                third.attribute(|a| {
                    a.named("name").is(ConditionOperator::NotNull);
                });
            });
        });
    });

    let criteria = query.expression().criteria.as_ref().unwrap();
    assert_eq!(criteria.depth(), 3);
    let innermost = &criteria.filters[0].filters[0];
    assert_eq!(innermost.conditions[0].operator, ConditionOperator::NotNull);
    assert!(innermost.filters.is_empty());
}

#[test]
fn test_where_replaces_previous_filter() {
    let backend = InMemoryBackend::new();
    let mut query = backend.query("account");
    query
        .r#where(|f| {
            f.attribute(|a| {
                a.named("name").value("first");
            });
        })
        .r#where(|f| {
            f.attribute(|a| {
                a.named("revenue").is(ConditionOperator::Null);
            });
        });

    let criteria = query.expression().criteria.as_ref().unwrap();
    assert_eq!(criteria.conditions.len(), 1);
    assert_eq!(criteria.conditions[0].attribute_name, "revenue");
    assert!(criteria.filters.is_empty());
}

#[test]
fn test_add_filter_nests_under_existing_and_root() {
    let backend = InMemoryBackend::new();
    let mut query = backend.query("account");
    query
        .r#where(|f| {
            f.attribute(|a| {
                a.named("name").value("first");
            });
        })
        .add_filter(|f| {
            f.attribute(|a| {
                a.named("revenue").is(ConditionOperator::NotNull);
            });
        });

    let criteria = query.expression().criteria.as_ref().unwrap();
    assert_eq!(criteria.filter_operator, LogicalOperator::And);
    assert_eq!(criteria.conditions[0].attribute_name, "name");
    assert_eq!(criteria.filters.len(), 1);
    assert_eq!(criteria.filters[0].conditions[0].attribute_name, "revenue");
}

#[test]
fn test_add_filter_wraps_or_root() {
    let backend = InMemoryBackend::new();
    let mut query = backend.query("account");
    query
        .r#where(|f| {
            f.with().operator(LogicalOperator::Or).attribute(|a| {
                a.named("name").value("first");
            });
        })
        .add_filter(|f| {
            f.attribute(|a| {
                a.named("revenue").is(ConditionOperator::NotNull);
            });
        });

    let criteria = query.expression().criteria.as_ref().unwrap();
    assert_eq!(criteria.filter_operator, LogicalOperator::And);
    assert!(criteria.conditions.is_empty());
    assert_eq!(criteria.filters[0].filter_operator, LogicalOperator::Or);
    assert_eq!(criteria.filters[0].conditions[0].attribute_name, "name");
    assert_eq!(criteria.filters[1].conditions[0].attribute_name, "revenue");
}

#[test]
fn test_add_filter_without_root_installs_it() {
    let backend = InMemoryBackend::new();
    let mut query = backend.query("account");
    query.add_filter(|f| {
        f.attribute(|a| {
            a.named("name").value("only");
        });
    });

    let criteria = query.expression().criteria.as_ref().unwrap();
    assert_eq!(criteria.conditions[0].values, vec![json!("only")]);
    assert!(criteria.filters.is_empty());
}

#[test]
fn test_in_operator_accumulates_values() {
    let backend = account_backend();
    backend.insert(Record::new("account").with_attribute("name", "Fabrikam"));

    let mut records = backend
        .query("account")
        .include_columns(["name"])
        .r#where(|f| {
            f.attribute(|a| {
                a.named("name")
                    .is(ConditionOperator::In)
                    .value(ADVENTURE_WORKS)
                    .value(CONTOSO);
            });
        })
        .retrieve()
        .unwrap();
    records.sort_by_key(|r| r.get_as::<String>("name").unwrap());

    assert_eq!(names(&records), vec![ADVENTURE_WORKS, CONTOSO]);
}

#[test]
fn test_or_filter_combines_conditions() {
    let backend = account_backend();
    backend.insert(Record::new("account").with_attribute("name", "Fabrikam"));

    let records = backend
        .query("account")
        .include_columns(["name"])
        .r#where(|f| {
            f.with()
                .operator(LogicalOperator::Or)
                .attribute(|a| {
                    a.named("name").is(ConditionOperator::BeginsWith).value("Fab");
                })
                .attribute(|a| {
                    a.named("name").is(ConditionOperator::Like).value("%Works");
                });
        })
        .order(|o| {
            o.by("name");
        })
        .retrieve()
        .unwrap();

    assert_eq!(names(&records), vec![ADVENTURE_WORKS, "Fabrikam"]);
}

#[test]
fn test_malformed_condition_fails_at_backend() {
    let backend = account_backend();

    let result = backend
        .query("account")
        .r#where(|f| {
            f.attribute(|a| {
                a.named("name").is(ConditionOperator::Between).value("A");
            });
        })
        .retrieve();

    assert!(matches!(result, Err(FluentQueryError::Backend(_))));
}
