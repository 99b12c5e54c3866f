//! Integration tests: an employee directory rendered through the full
//! configuration pipeline.

use chrono::Datelike;
use chrono::NaiveDate;
use datatable::Accessors;
use datatable::Alignment;
use datatable::CellContent;
use datatable::ColumnConfig;
use datatable::DataTable;
use datatable::FormatSpec;
use datatable::Fragment;
use datatable::RecordCollection;
use datatable::RenderContext;
use datatable::TableActions;
use datatable::TableConfig;
use datatable::Value;
use datatable::model::Money;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
struct Employee {
    name: &'static str,
    salary: Decimal,
    joining_date: NaiveDate,
    position: &'static str,
}

impl Employee {
    fn years_at_company(&self, ctx: &RenderContext) -> i32 {
        ctx.today().year() - self.joining_date.year()
    }
}

fn employee(name: &'static str, salary: i64, y: i32, m: u32, d: u32, position: &'static str) -> Employee {
    Employee {
        name,
        salary: Decimal::new(salary, 0),
        joining_date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        position,
    }
}

fn employees() -> Vec<Employee> {
    vec![
        employee("John Doe", 50000, 2015, 5, 1, "Software Developer"),
        employee("Jane Smith", 75000, 2018, 9, 10, "Project Manager"),
        employee("Emma Brown", 60000, 2020, 1, 20, "Data Analyst"),
        employee("James White", 55000, 2017, 3, 15, "HR Specialist"),
        employee("Emily Green", 67000, 2019, 7, 30, "UX Designer"),
        employee("Michael Johnson", 85000, 2014, 10, 12, "Lead Developer"),
        employee("Sophia Davis", 72000, 2016, 3, 5, "Product Manager"),
        employee("Benjamin Clark", 40000, 2021, 8, 19, "Marketing Associate"),
        employee("Isabella Lewis", 67000, 2019, 11, 25, "Sales Executive"),
        employee("Oliver Walker", 95000, 2013, 1, 14, "CTO"),
        employee("Ava Martinez", 72000, 2017, 6, 1, "Business Analyst"),
        employee("Ethan Robinson", 85000, 2016, 9, 17, "Backend Developer"),
        employee("Mia Gonzalez", 60000, 2019, 3, 23, "Content Writer"),
        employee("Alexander Lee", 105000, 2011, 12, 5, "Senior Software Engineer"),
        employee("Charlotte Harris", 68000, 2020, 7, 8, "Graphic Designer"),
        employee("Samuel King", 57000, 2018, 5, 30, "QA Engineer"),
        employee("Zoe Scott", 63000, 2019, 2, 22, "Customer Support"),
        employee("Jack Adams", 54000, 2020, 6, 11, "Financial Analyst"),
        employee("Amelia Baker", 78000, 2015, 4, 20, "Marketing Manager"),
        employee("Henry Harris", 92000, 2012, 8, 9, "CFO"),
    ]
}

fn accessors() -> Accessors<Employee> {
    Accessors::new()
        .with("Name", |e: &Employee, _| e.name.into())
        .with("Position", |e: &Employee, _| e.position.into())
        .with("Salary", |e: &Employee, _| Money::new(e.salary).into())
        .with("JoiningDate", |e: &Employee, _| e.joining_date.into())
        .with("YearsAtCompany", |e: &Employee, ctx| e.years_at_company(ctx).into())
}

fn page_formats() -> [(&'static str, &'static str); 3] {
    [
        ("Salary", "C2"),
        ("JoiningDate", "dd-MMM-yyyy"),
        ("YearsAtCompany", "N0"),
    ]
}

fn ctx(year: i32) -> RenderContext {
    RenderContext::on(NaiveDate::from_ymd_opt(year, 6, 1).unwrap())
}

fn texts(table: &datatable::RenderedTable, column: usize) -> Vec<String> {
    table.rows.iter().map(|r| r.texts()[column].clone()).collect()
}

#[test]
fn test_format_scenarios() {
    let salary = Value::from(Money::from_int(50_000));
    assert_eq!(FormatSpec::parse("C0").unwrap().apply(&salary).unwrap(), "$50,000");

    let joined = Value::from(NaiveDate::from_ymd_opt(2018, 9, 10).unwrap());
    assert_eq!(
        FormatSpec::parse("dd-MMM-yyyy").unwrap().apply(&joined).unwrap(),
        "10-Sep-2018"
    );

    assert_eq!(FormatSpec::parse("N0").unwrap().apply(&Value::from(5)).unwrap(), "5");
}

#[test]
fn test_columns_ordered_three_one_two() {
    let config = TableConfig::builder()
        .column(ColumnConfig::new("Name", "Name").order(3))
        .column(ColumnConfig::new("Position", "Position").order(1))
        .column(ColumnConfig::new("Salary", "Salary").order(2))
        .accessors(accessors())
        .build()
        .unwrap();

    let table = config.render(&employees().into_iter().collect(), &ctx(2024));
    let headers: Vec<_> = table.headers.iter().map(|h| h.text.as_str()).collect();
    assert_eq!(headers, vec!["Position", "Salary", "Name"]);
}

#[test]
fn test_page_formats_apply_to_plain_columns() {
    let config = TableConfig::builder()
        .column(ColumnConfig::new("Name", "Name").order(1))
        .column(ColumnConfig::new("Salary", "Salary").order(2).align(Alignment::Right))
        .column(ColumnConfig::new("JoiningDate", "Joined").order(3))
        .column(ColumnConfig::new("YearsAtCompany", "Years").order(4))
        .column_formats(page_formats())
        .accessors(accessors())
        .build()
        .unwrap();

    let table = config.render(&employees().into_iter().collect(), &ctx(2024));
    let jane = table.rows[1].texts();
    assert_eq!(jane, vec!["Jane Smith", "$75,000.00", "10-Sep-2018", "6"]);
    assert_eq!(table.errors().count(), 0);
}

#[test]
fn test_templates_override_page_formats() {
    let config = TableConfig::builder()
        .column(ColumnConfig::new("Name", "👤 Name").order(1))
        .column(
            ColumnConfig::new("Salary", "💰 Salary")
                .order(3)
                .align(Alignment::Right)
                .template(|e: &Employee, _| {
                    let text = FormatSpec::parse("C0")
                        .and_then(|spec| spec.apply(&Money::new(e.salary).into()))
                        .unwrap_or_default();
                    Fragment::span().class("text-success fw-bold").content(text)
                }),
        )
        .column(
            ColumnConfig::new("YearsAtCompany", "⏳ Yrs @ Co.")
                .order(4)
                .align(Alignment::Center)
                .template(|e: &Employee, ctx| {
                    Fragment::span().class("badge bg-info").content(e.years_at_company(ctx))
                }),
        )
        .column_formats(page_formats())
        .accessors(accessors())
        .build()
        .unwrap();

    let table = config.render(&employees().into_iter().collect(), &ctx(2024));
    let john = &table.rows[0];
    assert_eq!(
        john.cells[1],
        Ok(CellContent::Fragment(
            Fragment::span().class("text-success fw-bold").content("$50,000")
        ))
    );
    assert_eq!(
        john.cells[2],
        Ok(CellContent::Fragment(Fragment::span().class("badge bg-info").content(9)))
    );
}

#[test]
fn test_computed_field_follows_render_time() {
    let config = TableConfig::builder()
        .column(ColumnConfig::new("YearsAtCompany", "Years"))
        .column_formats(page_formats())
        .accessors(accessors())
        .build()
        .unwrap();
    let rows: RecordCollection<Employee> = employees().into_iter().collect();

    let earlier = texts(&config.render(&rows, &ctx(2024)), 0);
    let later = texts(&config.render(&rows, &ctx(2026)), 0);
    assert_eq!(earlier[0], "9");
    assert_eq!(later[0], "11");
}

#[test]
fn test_delete_jane_smith() {
    let config = TableConfig::builder()
        .column(ColumnConfig::new("Name", "Name"))
        .accessors(accessors())
        .build()
        .unwrap();
    let mut table = DataTable::new(config, employees().into_iter().collect())
        .with_actions(TableActions::new().on_edit(|_, _| {}).on_delete(|_, _| {}));
    assert_eq!(table.rows().len(), 20);

    let before: Vec<_> = employees().iter().map(|e| e.name).filter(|n| *n != "Jane Smith").collect();

    let jane = table.rows().find(|e| e.name == "Jane Smith").unwrap();
    let removed = table.delete(jane).unwrap();
    assert_eq!(removed.name, "Jane Smith");

    let rendered = table.render(&ctx(2024));
    assert_eq!(rendered.rows.len(), 19);
    let names = texts(&rendered, 0);
    assert_eq!(names, before);

    // deleting again is a no-op
    assert!(table.delete(jane).is_none());
    assert_eq!(table.rows().len(), 19);
}

#[test]
fn test_text_output_layout() {
    let config = TableConfig::builder()
        .column(ColumnConfig::new("Name", "Name").order(1))
        .column(ColumnConfig::new("Salary", "Salary").order(2).align(Alignment::Right))
        .column_formats(page_formats())
        .accessors(accessors())
        .build()
        .unwrap();
    let rows: RecordCollection<Employee> = employees().into_iter().take(2).collect();

    let text = config.render(&rows, &ctx(2024)).to_text();
    assert_eq!(
        text,
        "Name       |     Salary\n\
         -----------+-----------\n\
         John Doe   | $50,000.00\n\
         Jane Smith | $75,000.00\n"
    );
}
