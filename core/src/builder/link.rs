use crate::expression::{JoinOperator, LinkEntity};

use super::FilterBuilder;

/// Builds one [`LinkEntity`], possibly with nested links of its own.
#[derive(Debug, Default)]
pub struct LinkBuilder {
    link: LinkEntity,
}

impl LinkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn build_with<F>(build: F) -> LinkEntity
    where
        F: FnOnce(&mut LinkBuilder),
    {
        let mut builder = LinkBuilder::new();
        build(&mut builder);
        builder.build()
    }

    pub fn from_entity(&mut self, entity_name: impl Into<String>) -> &mut Self {
        self.link.link_from_entity_name = Some(entity_name.into());
        self
    }

    pub fn from_attribute(&mut self, attribute_name: impl Into<String>) -> &mut Self {
        self.link.link_from_attribute_name = Some(attribute_name.into());
        self
    }

    pub fn to_entity(&mut self, entity_name: impl Into<String>) -> &mut Self {
        self.link.link_to_entity_name = Some(entity_name.into());
        self
    }

    pub fn to_attribute(&mut self, attribute_name: impl Into<String>) -> &mut Self {
        self.link.link_to_attribute_name = Some(attribute_name.into());
        self
    }

    pub fn include_columns<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.link.columns.add_columns(names);
        self
    }

    pub fn include_all_columns(&mut self) -> &mut Self {
        self.link.columns = crate::expression::ColumnSet::All;
        self
    }

    /// Sets the link criteria, replacing any previous one.
    pub fn r#where<F>(&mut self, build: F) -> &mut Self
    where
        F: FnOnce(&mut FilterBuilder),
    {
        self.link.link_criteria = Some(FilterBuilder::build_with(build));
        self
    }

    /// Appends a nested link.
    pub fn link<F>(&mut self, build: F) -> &mut Self
    where
        F: FnOnce(&mut LinkBuilder),
    {
        self.link.link_entities.push(Self::build_with(build));
        self
    }

    pub fn with(&mut self) -> LinkSettings<'_> {
        LinkSettings { link: self }
    }

    pub fn build(self) -> LinkEntity {
        self.link
    }
}

/// Optional settings of a link entity.
pub struct LinkSettings<'a> {
    link: &'a mut LinkBuilder,
}

impl<'a> LinkSettings<'a> {
    pub fn alias(self, alias: impl Into<String>) -> &'a mut LinkBuilder {
        self.link.link.entity_alias = Some(alias.into());
        self.link
    }

    pub fn link_type(self, join_operator: JoinOperator) -> &'a mut LinkBuilder {
        self.link.link.join_operator = join_operator;
        self.link
    }
}
