//! Table configuration: ordered columns bound to accessors and formats.

mod rendered;

pub use rendered::*;

use std::collections::HashMap;
use std::collections::HashSet;

use log::debug;
use log::warn;

use crate::accessor::Accessor;
use crate::accessor::Accessors;
use crate::cell::Cell;
use crate::collection::RecordCollection;
use crate::column::ColumnConfig;
use crate::error::ConfigError;
use crate::format::FormatSpec;
use crate::model::RenderContext;

/// A column after validation: its accessor is bound and its effective
/// format specifier is parsed.
struct BoundColumn<R> {
    config: ColumnConfig<R>,
    accessor: Accessor<R>,
    format: Option<FormatSpec>,
}

/// A validated, read-only table configuration.
///
/// Built once per view with [`TableConfig::builder`]. Columns are held in
/// render order: ascending `order`, ties in declaration order.
pub struct TableConfig<R> {
    columns: Vec<BoundColumn<R>>,
}

impl<R> TableConfig<R> {
    pub fn builder() -> TableConfigBuilder<R> {
        TableConfigBuilder::new()
    }

    /// Columns in render order.
    pub fn columns(&self) -> impl Iterator<Item = &ColumnConfig<R>> {
        self.columns.iter().map(|c| &c.config)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// The parsed format that applies to a column, if any.
    ///
    /// Still reported for templated columns even though it is never used
    /// for them.
    pub fn effective_format(&self, property_name: &str) -> Option<&FormatSpec> {
        self.find(property_name).and_then(|c| c.format.as_ref())
    }

    /// Build the cell for one record and one column.
    ///
    /// Returns `None` if no column reads `property_name`.
    pub fn cell(&self, record: &R, property_name: &str, ctx: &RenderContext) -> Option<Cell> {
        self.find(property_name).map(|column| bind_cell(column, record, ctx))
    }

    /// Resolve every cell of every row, in collection order.
    ///
    /// A cell that fails to format is recorded as an error in its slot;
    /// the rest of the table is still rendered.
    pub fn render(&self, records: &RecordCollection<R>, ctx: &RenderContext) -> RenderedTable {
        let headers = self
            .columns
            .iter()
            .map(|c| HeaderCell {
                property_name: c.config.spec.property_name.clone(),
                text: c.config.spec.header.clone(),
                align: c.config.spec.align,
            })
            .collect();

        let rows = records
            .iter()
            .map(|row| {
                let cells = self
                    .columns
                    .iter()
                    .map(|column| {
                        let name = column.config.property_name();
                        let resolved = bind_cell(column, &row.record, ctx).resolve(name);
                        if let Err(e) = &resolved {
                            warn!("Failed to render cell for row {}: {}", row.id, e);
                        }
                        resolved
                    })
                    .collect();
                RenderedRow { id: row.id, cells }
            })
            .collect();

        RenderedTable { headers, rows }
    }

    fn find(&self, property_name: &str) -> Option<&BoundColumn<R>> {
        self.columns
            .iter()
            .find(|c| c.config.property_name() == property_name)
    }
}

fn bind_cell<R>(column: &BoundColumn<R>, record: &R, ctx: &RenderContext) -> Cell {
    if let Some(template) = &column.config.template {
        return Cell::Custom(template(record, ctx));
    }
    let value = (column.accessor)(record, ctx);
    match &column.format {
        Some(spec) => Cell::Formatted(value, spec.clone()),
        None => Cell::Plain(value),
    }
}

/// Builder for [`TableConfig`].
pub struct TableConfigBuilder<R> {
    columns: Vec<ColumnConfig<R>>,
    accessors: Accessors<R>,
    column_formats: HashMap<String, String>,
}

impl<R> TableConfigBuilder<R> {
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
            accessors: Accessors::new(),
            column_formats: HashMap::new(),
        }
    }

    /// Add a column. Declaration order breaks ties between equal `order`s.
    pub fn column(mut self, column: ColumnConfig<R>) -> Self {
        self.columns.push(column);
        self
    }

    pub fn columns(mut self, columns: impl IntoIterator<Item = ColumnConfig<R>>) -> Self {
        self.columns.extend(columns);
        self
    }

    pub fn accessors(mut self, accessors: Accessors<R>) -> Self {
        self.accessors = accessors;
        self
    }

    /// Page-level formats keyed by property name.
    ///
    /// Applied to columns that do not set their own format. Entries for
    /// properties without a column are ignored.
    pub fn column_formats<K, V>(mut self, formats: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.column_formats
            .extend(formats.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Validate and freeze the configuration.
    pub fn build(self) -> Result<TableConfig<R>, ConfigError> {
        let mut seen = HashSet::new();
        let mut columns = Vec::with_capacity(self.columns.len());

        for config in self.columns {
            let name = config.property_name().to_string();
            if !seen.insert(name.clone()) {
                return Err(ConfigError::duplicate_property(name));
            }
            let accessor = self
                .accessors
                .get(&name)
                .cloned()
                .ok_or_else(|| ConfigError::unknown_property(&name))?;

            let specifier = config
                .spec
                .format
                .as_deref()
                .or_else(|| self.column_formats.get(&name).map(String::as_str));
            let format = specifier
                .map(FormatSpec::parse)
                .transpose()
                .map_err(|e| ConfigError::invalid_format(&name, e))?;

            columns.push(BoundColumn {
                config,
                accessor,
                format,
            });
        }

        // stable: equal orders keep declaration order
        columns.sort_by_key(|c| c.config.spec.order);

        debug!(
            "Built table config: [{}]",
            columns
                .iter()
                .map(|c| c.config.property_name())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(TableConfig { columns })
    }
}

impl<R> Default for TableConfigBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}
