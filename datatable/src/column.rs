//! Column configuration types.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;

use crate::fragment::Fragment;
use crate::model::RenderContext;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// The CSS utility class used when rendering HTML.
    pub fn css_class(&self) -> &'static str {
        match self {
            Alignment::Left => "text-left",
            Alignment::Center => "text-center",
            Alignment::Right => "text-right",
        }
    }
}

/// A custom cell renderer. Overrides any format specifier on its column.
pub type Template<R> = Arc<dyn Fn(&R, &RenderContext) -> Fragment + Send + Sync>;

/// The declarative part of a column: everything except the template.
///
/// This is what a host can keep in a settings file.
///
/// ```
/// use datatable::{Alignment, ColumnSpec};
///
/// let spec = ColumnSpec::new("Salary", "Salary")
///     .align(Alignment::Right)
///     .order(3)
///     .format("C2");
/// assert_eq!(spec.format.as_deref(), Some("C2"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSpec {
    /// Which record property the column reads. Unique within a table.
    pub property_name: String,
    /// Header label.
    pub header: String,
    #[serde(default)]
    pub align: Alignment,
    /// Columns render in ascending order; ties keep declaration order.
    #[serde(default)]
    pub order: i32,
    /// Format specifier, e.g. `C2` or `dd-MMM-yyyy`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl ColumnSpec {
    pub fn new(property_name: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            header: header.into(),
            align: Alignment::Left,
            order: 0,
            format: None,
        }
    }

    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    pub fn order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }
}

/// Column configuration.
///
/// # Examples
///
/// ```ignore
/// let columns = vec![
///     ColumnConfig::new("Name", "👤 Name").order(1),
///     ColumnConfig::new("Salary", "💰 Salary")
///         .align(Alignment::Right)
///         .order(3)
///         .template(|e: &Employee, _| Fragment::span().class("fw-bold").content(&e.name)),
/// ];
/// ```
pub struct ColumnConfig<R> {
    pub spec: ColumnSpec,
    pub template: Option<Template<R>>,
}

impl<R> ColumnConfig<R> {
    /// Create a left-aligned column with order 0.
    pub fn new(property_name: impl Into<String>, header: impl Into<String>) -> Self {
        Self::from_spec(ColumnSpec::new(property_name, header))
    }

    pub fn from_spec(spec: ColumnSpec) -> Self {
        Self {
            spec,
            template: None,
        }
    }

    pub fn align(mut self, align: Alignment) -> Self {
        self.spec.align = align;
        self
    }

    pub fn order(mut self, order: i32) -> Self {
        self.spec.order = order;
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.spec.format = Some(format.into());
        self
    }

    /// Set a custom renderer for this column.
    pub fn template<F>(mut self, template: F) -> Self
    where
        F: Fn(&R, &RenderContext) -> Fragment + Send + Sync + 'static,
    {
        self.template = Some(Arc::new(template));
        self
    }

    pub fn property_name(&self) -> &str {
        &self.spec.property_name
    }

    pub fn header(&self) -> &str {
        &self.spec.header
    }
}

impl<R> Clone for ColumnConfig<R> {
    fn clone(&self) -> Self {
        Self {
            spec: self.spec.clone(),
            template: self.template.clone(),
        }
    }
}

impl<R> fmt::Debug for ColumnConfig<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnConfig")
            .field("spec", &self.spec)
            .field("template", &self.template.as_ref().map(|_| "..."))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_from_json() {
        let json = r#"{"propertyName":"JoiningDate","header":"Joined","align":"center","order":5,"format":"dd-MMM-yyyy"}"#;
        let spec: ColumnSpec = serde_json::from_str(json).unwrap();
        assert_eq!(
            spec,
            ColumnSpec::new("JoiningDate", "Joined")
                .align(Alignment::Center)
                .order(5)
                .format("dd-MMM-yyyy")
        );
    }

    #[test]
    fn test_spec_defaults() {
        let spec: ColumnSpec =
            serde_json::from_str(r#"{"propertyName":"Name","header":"Name"}"#).unwrap();
        assert_eq!(spec.align, Alignment::Left);
        assert_eq!(spec.order, 0);
        assert_eq!(spec.format, None);
    }

    #[test]
    fn test_builder_sets_template() {
        let column: ColumnConfig<String> = ColumnConfig::new("Name", "Name")
            .order(2)
            .template(|name: &String, _| Fragment::text(name.to_uppercase()));
        assert_eq!(column.spec.order, 2);
        assert!(column.template.is_some());
    }
}
