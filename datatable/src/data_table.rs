//! A configured table bound to its backing rows and host callbacks.

use std::fmt;

use log::debug;

use crate::collection::RecordCollection;
use crate::collection::RowId;
use crate::model::RenderContext;
use crate::table::RenderedTable;
use crate::table::TableConfig;

type Callback<R> = Box<dyn FnMut(RowId, &R)>;

/// Edit/delete callbacks registered by the host.
pub struct TableActions<R> {
    on_edit: Option<Callback<R>>,
    on_delete: Option<Callback<R>>,
}

impl<R> TableActions<R> {
    pub fn new() -> Self {
        Self {
            on_edit: None,
            on_delete: None,
        }
    }

    /// Called when a row's edit action fires. What "edit" means is up to
    /// the host.
    pub fn on_edit(mut self, callback: impl FnMut(RowId, &R) + 'static) -> Self {
        self.on_edit = Some(Box::new(callback));
        self
    }

    /// Called with the record just before it is removed.
    pub fn on_delete(mut self, callback: impl FnMut(RowId, &R) + 'static) -> Self {
        self.on_delete = Some(Box::new(callback));
        self
    }
}

impl<R> Default for TableActions<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for TableActions<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableActions")
            .field("on_edit", &self.on_edit.is_some())
            .field("on_delete", &self.on_delete.is_some())
            .finish()
    }
}

/// A table configuration, the rows it displays and the host's callbacks.
///
/// The configuration never changes after construction; deletes only touch
/// the rows, and every [`render`](Self::render) reads the rows as they are
/// now.
pub struct DataTable<R> {
    config: TableConfig<R>,
    rows: RecordCollection<R>,
    actions: TableActions<R>,
}

impl<R> DataTable<R> {
    pub fn new(config: TableConfig<R>, rows: RecordCollection<R>) -> Self {
        Self {
            config,
            rows,
            actions: TableActions::new(),
        }
    }

    pub fn with_actions(mut self, actions: TableActions<R>) -> Self {
        self.actions = actions;
        self
    }

    pub fn config(&self) -> &TableConfig<R> {
        &self.config
    }

    pub fn rows(&self) -> &RecordCollection<R> {
        &self.rows
    }

    /// Fire the edit callback for a row.
    ///
    /// Returns `false` if the row does not exist; the callback is not
    /// invoked in that case.
    pub fn edit(&mut self, id: RowId) -> bool {
        let Some(record) = self.rows.get(id) else {
            debug!("Edit ignored: row {} not found", id);
            return false;
        };
        if let Some(on_edit) = self.actions.on_edit.as_mut() {
            on_edit(id, record);
        }
        true
    }

    /// Fire the delete callback for a row, then remove it.
    ///
    /// Unknown ids leave the rows untouched and return `None`.
    pub fn delete(&mut self, id: RowId) -> Option<R> {
        let Some(record) = self.rows.get(id) else {
            debug!("Delete ignored: row {} not found", id);
            return None;
        };
        if let Some(on_delete) = self.actions.on_delete.as_mut() {
            on_delete(id, record);
        }
        let removed = self.rows.remove(id);
        debug!("Deleted row {}, {} remaining", id, self.rows.len());
        removed
    }

    pub fn render(&self, ctx: &RenderContext) -> RenderedTable {
        self.config.render(&self.rows, ctx)
    }
}
