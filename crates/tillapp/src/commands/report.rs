use crate::error::Result;
use crate::model::{DailyReport, Sale};
use crate::store::DataStore;
use chrono::NaiveDate;

/// Response of the daily report query: the aggregate plus the sales that
/// make it up.
#[derive(Debug, Clone)]
pub struct ReportResult {
    pub report: DailyReport,
    pub sales: Vec<Sale>,
}

/// Retrieve the daily report for `date`, synthesizing a zero-valued one
/// if no sale has ever landed on that date. Read-only.
pub fn daily<S: DataStore>(store: &S, date: NaiveDate) -> Result<ReportResult> {
    let doc = store.load()?;
    let report = doc
        .daily_reports
        .get(&date)
        .cloned()
        .unwrap_or_else(|| DailyReport::empty(date));
    let sales = doc
        .sales
        .into_iter()
        .filter(|s| s.date() == date)
        .collect();
    Ok(ReportResult { report, sales })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::sale;
    use crate::store::memory::fixtures::{sample_product, StoreFixture};
    use crate::store::memory::InMemoryStore;
    use chrono::Utc;

    #[test]
    fn test_empty_date_synthesizes_zero_report() {
        let store = InMemoryStore::new();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let result = daily(&store, date).unwrap();
        assert_eq!(result.report.date, date);
        assert_eq!(result.report.total_sales, 0.0);
        assert_eq!(result.report.total_profit, 0.0);
        assert_eq!(result.report.transactions, 0);
        assert!(result.sales.is_empty());
    }

    #[test]
    fn test_report_matches_recorded_sales() {
        let mut fixture = StoreFixture::new().with_product(sample_product("1", 10));
        sale::record(&mut fixture.store, "1", 2).unwrap();
        sale::record(&mut fixture.store, "1", 3).unwrap();

        let today = Utc::now().date_naive();
        let result = daily(&fixture.store, today).unwrap();

        assert_eq!(result.report.transactions, 2);
        assert_eq!(result.report.total_sales, 50.0);
        assert_eq!(result.sales.len(), 2);
        assert!(result.sales.iter().all(|s| s.date() == today));
    }

    #[test]
    fn test_query_does_not_mutate() {
        let fixture = StoreFixture::new().with_product(sample_product("1", 10));
        let before = fixture.store.load().unwrap();

        daily(&fixture.store, Utc::now().date_naive()).unwrap();
        assert_eq!(fixture.store.load().unwrap(), before);
    }

    #[test]
    fn test_other_dates_excluded() {
        let mut fixture = StoreFixture::new().with_product(sample_product("1", 10));
        sale::record(&mut fixture.store, "1", 1).unwrap();

        let other = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
        let result = daily(&fixture.store, other).unwrap();
        assert_eq!(result.report.transactions, 0);
        assert!(result.sales.is_empty());
    }
}
