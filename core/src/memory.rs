//! A [`Backend`] over records held in memory.
//!
//! Evaluates the full expression model: criteria, scoped conditions, link
//! entities, orders, distinct, top count, column projection and paging.
//! Link entities with a missing join key are rejected, as a remote store
//! would reject them.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

use parking_lot::RwLock;
use serde_json::Value;

use crate::backend::{Backend, PageResult};
use crate::error::{FluentQueryError, Result};
use crate::expression::{
    ConditionExpression, ConditionOperator, FilterExpression, JoinOperator, LinkEntity,
    LogicalOperator, OrderType, QueryExpression,
};
use crate::record::Record;

/// Records joined so far, keyed by entity name or link alias.
type Row<'a> = BTreeMap<&'a str, &'a Record>;

static NULL: Value = Value::Null;

#[derive(Debug, Default)]
pub struct InMemoryBackend {
    records: RwLock<Vec<Record>>,
    executions: AtomicUsize,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = Record>) -> Self {
        Self {
            records: RwLock::new(records.into_iter().collect()),
            executions: AtomicUsize::new(0),
        }
    }

    pub fn insert(&self, record: Record) {
        self.records.write().push(record);
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Number of `execute_page` calls so far, failed ones included.
    pub fn executions(&self) -> usize {
        self.executions.load(AtomicOrdering::SeqCst)
    }
}

impl Backend for InMemoryBackend {
    fn execute_page(&self, query: &QueryExpression) -> Result<PageResult> {
        self.executions.fetch_add(1, AtomicOrdering::SeqCst);
        let records = self.records.read();
        evaluate(&records, query)
    }
}

fn evaluate(records: &[Record], query: &QueryExpression) -> Result<PageResult> {
    let entity = query.entity_name.as_str();
    if entity.is_empty() {
        return Err(FluentQueryError::backend("query has no entity name"));
    }

    let mut rows: Vec<Row<'_>> = records
        .iter()
        .filter(|record| record.logical_name == entity)
        .map(|record| Row::from([(entity, record)]))
        .collect();

    for link in &query.link_entities {
        rows = join(records, rows, link, entity)?;
    }

    if let Some(criteria) = &query.criteria {
        let mut kept = Vec::with_capacity(rows.len());
        for row in rows {
            if matches_filter(criteria, &row, entity)? {
                kept.push(row);
            }
        }
        rows = kept;
    }

    if !query.orders.is_empty() {
        rows.sort_by(|a, b| {
            query
                .orders
                .iter()
                .map(|order| {
                    let ordering = compare_nulls_first(
                        attribute_of(a, entity, &order.attribute_name),
                        attribute_of(b, entity, &order.attribute_name),
                    );
                    match order.order_type {
                        OrderType::Ascending => ordering,
                        OrderType::Descending => ordering.reverse(),
                    }
                })
                .find(|ordering| *ordering != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        });
    }

    let mut projected: Vec<Record> = rows
        .iter()
        .map(|row| project(row, entity, query))
        .collect();

    if query.distinct {
        let mut unique: Vec<Record> = Vec::with_capacity(projected.len());
        for record in projected {
            if !unique.contains(&record) {
                unique.push(record);
            }
        }
        projected = unique;
    }

    if let Some(top) = query.top_count {
        projected.truncate(top as usize);
    }

    let total = projected.len();
    let total_record_count = query
        .page_info
        .return_total_record_count
        .then_some(total as u64);

    let Some(size) = query.page_info.count.filter(|_| query.top_count.is_none()) else {
        return Ok(PageResult {
            records: projected,
            more_records: false,
            paging_cookie: None,
            total_record_count,
        });
    };

    let page_number = query.page_info.page_number.max(1);
    let start = (page_number as usize - 1).saturating_mul(size as usize);
    let end = start.saturating_add(size as usize).min(total);
    let records = if start < total {
        projected.drain(start..end).collect()
    } else {
        Vec::new()
    };
    let more_records = end < total;

    Ok(PageResult {
        records,
        more_records,
        paging_cookie: more_records.then(|| format!("page:{page_number}")),
        total_record_count,
    })
}

fn join<'a>(
    records: &'a [Record],
    rows: Vec<Row<'a>>,
    link: &'a LinkEntity,
    parent_scope: &'a str,
) -> Result<Vec<Row<'a>>> {
    let missing = |field: &str| FluentQueryError::Backend(format!("link entity is missing {field}"));
    link.link_from_entity_name
        .as_deref()
        .ok_or_else(|| missing("link_from_entity_name"))?;
    let from_attribute = link
        .link_from_attribute_name
        .as_deref()
        .ok_or_else(|| missing("link_from_attribute_name"))?;
    let to_entity = link
        .link_to_entity_name
        .as_deref()
        .ok_or_else(|| missing("link_to_entity_name"))?;
    let to_attribute = link
        .link_to_attribute_name
        .as_deref()
        .ok_or_else(|| missing("link_to_attribute_name"))?;
    let scope = link.scope_name().unwrap_or(to_entity);

    let mut joined = Vec::with_capacity(rows.len());
    for row in rows {
        let key = attribute_of(&row, parent_scope, from_attribute);
        let mut matched = false;

        if !key.is_null() {
            for candidate in records.iter().filter(|r| r.logical_name == to_entity) {
                let target = candidate.attribute(to_attribute).unwrap_or(&NULL);
                if !values_equal(key, target) {
                    continue;
                }
                let candidate_row = Row::from([(scope, candidate)]);
                if let Some(criteria) = &link.link_criteria
                    && !matches_filter(criteria, &candidate_row, scope)?
                {
                    continue;
                }
                let mut extended = row.clone();
                extended.insert(scope, candidate);
                joined.push(extended);
                matched = true;
            }
        }

        if !matched && link.join_operator == JoinOperator::LeftOuter {
            joined.push(row);
        }
    }

    for nested in &link.link_entities {
        joined = join(records, joined, nested, scope)?;
    }
    Ok(joined)
}

fn matches_filter(filter: &FilterExpression, row: &Row<'_>, scope: &str) -> Result<bool> {
    let mut results = Vec::with_capacity(filter.conditions.len() + filter.filters.len());
    for condition in &filter.conditions {
        results.push(matches_condition(condition, row, scope)?);
    }
    for nested in &filter.filters {
        results.push(matches_filter(nested, row, scope)?);
    }

    Ok(match filter.filter_operator {
        LogicalOperator::And => results.iter().all(|r| *r),
        LogicalOperator::Or => results.is_empty() || results.iter().any(|r| *r),
    })
}

fn matches_condition(condition: &ConditionExpression, row: &Row<'_>, scope: &str) -> Result<bool> {
    let operator = condition.operator;
    if let Some(arity) = operator.arity()
        && condition.values.len() != arity
    {
        return Err(FluentQueryError::Backend(format!(
            "condition on '{}' with {operator:?} expects {arity} value(s), got {}",
            condition.attribute_name,
            condition.values.len()
        )));
    }

    let scope = condition.entity_name.as_deref().unwrap_or(scope);
    let actual = attribute_of(row, scope, &condition.attribute_name);
    let values = &condition.values;

    if actual.is_null() {
        return Ok(operator == ConditionOperator::Null);
    }

    let ordered = |accept: fn(Ordering) -> bool| {
        compare(actual, &values[0]).is_some_and(accept)
    };
    let text = |f: fn(&str, &str) -> bool| match (actual.as_str(), values[0].as_str()) {
        (Some(actual), Some(expected)) => f(actual, expected),
        _ => false,
    };
    let between = || {
        compare(actual, &values[0]).is_some_and(|o| o != Ordering::Less)
            && compare(actual, &values[1]).is_some_and(|o| o != Ordering::Greater)
    };

    Ok(match operator {
        ConditionOperator::Equal => values_equal(actual, &values[0]),
        ConditionOperator::NotEqual => !values_equal(actual, &values[0]),
        ConditionOperator::GreaterThan => ordered(|o| o == Ordering::Greater),
        ConditionOperator::GreaterEqual => ordered(|o| o != Ordering::Less),
        ConditionOperator::LessThan => ordered(|o| o == Ordering::Less),
        ConditionOperator::LessEqual => ordered(|o| o != Ordering::Greater),
        ConditionOperator::Like => text(like),
        ConditionOperator::NotLike => !text(like),
        ConditionOperator::BeginsWith => text(|a, e| a.starts_with(e)),
        ConditionOperator::EndsWith => text(|a, e| a.ends_with(e)),
        ConditionOperator::In => values.iter().any(|v| values_equal(actual, v)),
        ConditionOperator::NotIn => !values.iter().any(|v| values_equal(actual, v)),
        ConditionOperator::Between => between(),
        ConditionOperator::NotBetween => !between(),
        ConditionOperator::Null => false,
        ConditionOperator::NotNull => true,
    })
}

fn attribute_of<'a>(row: &Row<'a>, scope: &str, attribute: &str) -> &'a Value {
    row.get(scope)
        .and_then(|record| record.attribute(attribute))
        .unwrap_or(&NULL)
}

fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => a.as_f64()?.partial_cmp(&b.as_f64()?),
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

fn compare_nulls_first(a: &Value, b: &Value) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => compare(a, b).unwrap_or(Ordering::Equal),
    }
}

fn values_equal(a: &Value, b: &Value) -> bool {
    compare(a, b).map_or(a == b, |o| o == Ordering::Equal)
}

/// SQL `LIKE` with `%` (any run) and `_` (any single character).
///
/// Greedy two-pointer match that backtracks only to the last `%` seen.
fn like(text: &str, pattern: &str) -> bool {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();

    let (mut t, mut p) = (0, 0);
    // Position after the last `%` and the text position it is retried from.
    let mut backtrack: Option<(usize, usize)> = None;

    while t < text.len() {
        match pattern.get(p) {
            Some('%') => {
                p += 1;
                backtrack = Some((p, t));
            }
            Some('_') => {
                t += 1;
                p += 1;
            }
            Some(c) if *c == text[t] => {
                t += 1;
                p += 1;
            }
            _ => match backtrack {
                Some((after_wildcard, from)) => {
                    p = after_wildcard;
                    t = from + 1;
                    backtrack = Some((after_wildcard, t));
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|c| *c == '%')
}

fn project(row: &Row<'_>, entity: &str, query: &QueryExpression) -> Record {
    let Some(base) = row.get(entity) else {
        return Record::default();
    };

    let mut record = Record::new(base.logical_name.clone());
    record.id = base.id;
    for (name, value) in &base.attributes {
        if query.column_set.contains(name) {
            record.attributes.insert(name.clone(), value.clone());
        }
    }

    project_links(row, &query.link_entities, &mut record);
    record
}

/// Linked columns are returned as `<alias or entity>.<attribute>`.
fn project_links(row: &Row<'_>, links: &[LinkEntity], record: &mut Record) {
    for link in links {
        let Some(scope) = link.scope_name() else {
            continue;
        };
        if let Some(linked) = row.get(scope) {
            for (name, value) in &linked.attributes {
                if link.columns.contains(name) {
                    record
                        .attributes
                        .insert(format!("{scope}.{name}"), value.clone());
                }
            }
        }
        project_links(row, &link.link_entities, record);
    }
}
