//! Sample employee records.

use chrono::Datelike;
use chrono::NaiveDate;
use datatable::Accessors;
use datatable::RenderContext;
use datatable::model::Money;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub name: String,
    pub salary: Decimal,
    pub joining_date: NaiveDate,
    pub position: String,
}

impl Employee {
    fn new(name: &str, salary: i64, joining_date: (i32, u32, u32), position: &str) -> Self {
        let (y, m, d) = joining_date;
        Self {
            name: name.to_string(),
            salary: Decimal::new(salary, 0),
            joining_date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
            position: position.to_string(),
        }
    }

    /// Whole calendar years between joining and the render date.
    ///
    /// Recomputed on every call.
    pub fn years_at_company(&self, ctx: &RenderContext) -> i32 {
        ctx.today().year() - self.joining_date.year()
    }
}

/// Property accessors for every column the page can show.
pub fn accessors() -> Accessors<Employee> {
    Accessors::new()
        .with("Name", |e: &Employee, _| e.name.as_str().into())
        .with("Salary", |e: &Employee, _| Money::new(e.salary).into())
        .with("JoiningDate", |e: &Employee, _| e.joining_date.into())
        .with("Position", |e: &Employee, _| e.position.as_str().into())
        .with("YearsAtCompany", |e: &Employee, ctx| {
            e.years_at_company(ctx).into()
        })
}

pub fn sample() -> Vec<Employee> {
    vec![
        Employee::new("John Doe", 50000, (2015, 5, 1), "Software Developer"),
        Employee::new("Jane Smith", 75000, (2018, 9, 10), "Project Manager"),
        Employee::new("Emma Brown", 60000, (2020, 1, 20), "Data Analyst"),
        Employee::new("James White", 55000, (2017, 3, 15), "HR Specialist"),
        Employee::new("Emily Green", 67000, (2019, 7, 30), "UX Designer"),
        Employee::new("Michael Johnson", 85000, (2014, 10, 12), "Lead Developer"),
        Employee::new("Sophia Davis", 72000, (2016, 3, 5), "Product Manager"),
        Employee::new("Benjamin Clark", 40000, (2021, 8, 19), "Marketing Associate"),
        Employee::new("Isabella Lewis", 67000, (2019, 11, 25), "Sales Executive"),
        Employee::new("Oliver Walker", 95000, (2013, 1, 14), "CTO"),
        Employee::new("Ava Martinez", 72000, (2017, 6, 1), "Business Analyst"),
        Employee::new("Ethan Robinson", 85000, (2016, 9, 17), "Backend Developer"),
        Employee::new("Mia Gonzalez", 60000, (2019, 3, 23), "Content Writer"),
        Employee::new("Alexander Lee", 105000, (2011, 12, 5), "Senior Software Engineer"),
        Employee::new("Charlotte Harris", 68000, (2020, 7, 8), "Graphic Designer"),
        Employee::new("Samuel King", 57000, (2018, 5, 30), "QA Engineer"),
        Employee::new("Zoe Scott", 63000, (2019, 2, 22), "Customer Support"),
        Employee::new("Jack Adams", 54000, (2020, 6, 11), "Financial Analyst"),
        Employee::new("Amelia Baker", 78000, (2015, 4, 20), "Marketing Manager"),
        Employee::new("Henry Harris", 92000, (2012, 8, 9), "CFO"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_size() {
        let employees = sample();
        assert_eq!(employees.len(), 20);
        assert!(employees.iter().all(|e| e.joining_date.year() > 2000));
    }

    #[test]
    fn test_years_at_company_uses_context() {
        let jane = &sample()[1];
        let in_2024 = RenderContext::on(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let in_2030 = RenderContext::on(NaiveDate::from_ymd_opt(2030, 12, 31).unwrap());
        assert_eq!(jane.years_at_company(&in_2024), 6);
        assert_eq!(jane.years_at_company(&in_2030), 12);
    }
}
