//! Property accessors.
//!
//! Columns name a property; the host maps each name to a function that
//! reads it. Computed properties are just accessors that look at the
//! [`RenderContext`], and they are called again on every render.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::model::RenderContext;
use crate::model::Value;

/// Reads one property from a record.
pub type Accessor<R> = Arc<dyn Fn(&R, &RenderContext) -> Value + Send + Sync>;

/// Mapping from property name to accessor.
///
/// # Example
///
/// ```
/// use datatable::Accessors;
///
/// struct Employee {
///     name: String,
///     joined: i32,
/// }
///
/// let accessors = Accessors::new()
///     .with("Name", |e: &Employee, _| e.name.clone().into())
///     .with("YearsAtCompany", |e: &Employee, ctx| {
///         use chrono::Datelike;
///         (ctx.today().year() - e.joined).into()
///     });
/// assert!(accessors.contains("Name"));
/// ```
pub struct Accessors<R> {
    map: HashMap<String, Accessor<R>>,
}

impl<R> Accessors<R> {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Register an accessor (builder pattern). A later registration for the
    /// same name replaces the earlier one.
    pub fn with<F>(mut self, property: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&R, &RenderContext) -> Value + Send + Sync + 'static,
    {
        self.insert(property, accessor);
        self
    }

    pub fn insert<F>(&mut self, property: impl Into<String>, accessor: F)
    where
        F: Fn(&R, &RenderContext) -> Value + Send + Sync + 'static,
    {
        self.map.insert(property.into(), Arc::new(accessor));
    }

    pub fn get(&self, property: &str) -> Option<&Accessor<R>> {
        self.map.get(property)
    }

    pub fn contains(&self, property: &str) -> bool {
        self.map.contains_key(property)
    }

    /// Read a property. `None` if no accessor is registered.
    pub fn read(&self, property: &str, record: &R, ctx: &RenderContext) -> Option<Value> {
        self.map.get(property).map(|accessor| accessor(record, ctx))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<R> Default for Accessors<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for Accessors<R> {
    fn clone(&self) -> Self {
        Self {
            map: self.map.clone(),
        }
    }
}

impl<R> fmt::Debug for Accessors<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.map.keys().collect();
        names.sort();
        f.debug_struct("Accessors").field("properties", &names).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_read_unknown_property() {
        let accessors: Accessors<String> = Accessors::new().with("Len", |s: &String, _| (s.len() as i64).into());
        let ctx = RenderContext::on(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(accessors.read("Len", &"abc".to_string(), &ctx), Some(Value::Long(3)));
        assert_eq!(accessors.read("Missing", &"abc".to_string(), &ctx), None);
    }

    #[test]
    fn test_computed_property_is_not_cached() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let accessors: Accessors<()> = Accessors::new().with("Tick", move |_, _| {
            (counter.fetch_add(1, Ordering::SeqCst) as i64).into()
        });
        let ctx = RenderContext::on(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(accessors.read("Tick", &(), &ctx), Some(Value::Long(0)));
        assert_eq!(accessors.read("Tick", &(), &ctx), Some(Value::Long(1)));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
