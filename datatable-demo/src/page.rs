//! The employee directory page.

use datatable::Alignment;
use datatable::ColumnConfig;
use datatable::ColumnSpec;
use datatable::DataTable;
use datatable::FormatSpec;
use datatable::Fragment;
use datatable::RenderContext;
use datatable::RenderedTable;
use datatable::TableActions;
use datatable::TableConfig;
use datatable::error::ConfigError;
use datatable::error::FormatError;
use datatable::model::Money;
use log::info;

use crate::employees;
use crate::employees::Employee;
use crate::settings::DemoSettings;

/// Built-in column layout.
pub fn default_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("Name", "👤 Name").align(Alignment::Left).order(1),
        ColumnSpec::new("Position", "🎯 Position").align(Alignment::Center).order(2),
        ColumnSpec::new("Salary", "💰 Salary").align(Alignment::Right).order(3),
        ColumnSpec::new("YearsAtCompany", "⏳ Yrs @ Co.").align(Alignment::Center).order(4),
    ]
}

/// Salary as a bold green whole-dollar amount.
fn salary_template()
-> Result<impl Fn(&Employee, &RenderContext) -> Fragment + Send + Sync + 'static, FormatError> {
    let currency = FormatSpec::parse("C0")?;
    Ok(move |e: &Employee, _: &RenderContext| {
        let text = currency
            .apply(&Money::new(e.salary).into())
            .unwrap_or_else(|_| e.salary.to_string());
        Fragment::span().class("text-success fw-bold").content(text)
    })
}

fn years_template(e: &Employee, ctx: &RenderContext) -> Fragment {
    Fragment::span()
        .class("badge bg-info")
        .content(e.years_at_company(ctx))
}

fn with_template(spec: ColumnSpec) -> Result<ColumnConfig<Employee>, ConfigError> {
    let name = spec.property_name.clone();
    let column = ColumnConfig::from_spec(spec);
    Ok(match name.as_str() {
        "Salary" => {
            let template = salary_template().map_err(|e| ConfigError::invalid_format(&name, e))?;
            column.template(template)
        }
        "YearsAtCompany" => column.template(years_template),
        _ => column,
    })
}

pub struct EmployeePage {
    table: DataTable<Employee>,
}

impl EmployeePage {
    pub fn new(employees: Vec<Employee>, settings: &DemoSettings) -> Result<Self, ConfigError> {
        let specs = settings.columns.clone().unwrap_or_else(default_columns);
        let columns = specs
            .into_iter()
            .map(with_template)
            .collect::<Result<Vec<_>, _>>()?;

        let config = TableConfig::builder()
            .columns(columns)
            .column_formats(settings.column_formats.clone())
            .accessors(employees::accessors())
            .build()?;

        let actions = TableActions::new()
            .on_edit(|_, e: &Employee| {
                // The page has no editor; the click is only logged.
                info!("Edit clicked for: {}", e.name);
            })
            .on_delete(|_, e: &Employee| info!("Delete clicked for: {}", e.name));

        Ok(Self {
            table: DataTable::new(config, employees.into_iter().collect()).with_actions(actions),
        })
    }

    /// Edit the first employee with this name. `false` if there is none.
    pub fn edit(&mut self, name: &str) -> bool {
        match self.table.rows().find(|e| e.name == name) {
            Some(id) => self.table.edit(id),
            None => false,
        }
    }

    /// Delete the first employee with this name.
    pub fn delete(&mut self, name: &str) -> Option<Employee> {
        let id = self.table.rows().find(|e| e.name == name)?;
        self.table.delete(id)
    }

    pub fn employee_count(&self) -> usize {
        self.table.rows().len()
    }

    pub fn render(&self, ctx: &RenderContext) -> RenderedTable {
        self.table.render(ctx)
    }
}
