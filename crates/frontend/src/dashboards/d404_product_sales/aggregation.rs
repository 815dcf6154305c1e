//! Month level totals for the sales chart.

use contracts::dashboards::d404_product_sales::SalesRecord;

pub const MONTH_LABELS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Retail and wholesale sales summed over one calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyAggregate {
    pub month: &'static str,
    pub retail_sales: f64,
    pub wholesale_sales: f64,
}

/// Groups weekly records by the month of their week-ending date.
///
/// Sums are accumulated in record order. The result is ordered January to
/// December and only contains months that occur in `records`. Years are not
/// distinguished: every January lands in the same `JAN` bucket.
pub fn group_by_month(records: &[SalesRecord]) -> Vec<MonthlyAggregate> {
    let mut totals: [Option<(f64, f64)>; 12] = [None; 12];

    for record in records {
        let total = totals[record.week_ending.month_index()].get_or_insert((0.0, 0.0));
        total.0 += record.retail_sales;
        total.1 += record.wholesale_sales;
    }

    MONTH_LABELS
        .into_iter()
        .zip(totals)
        .filter_map(|(month, total)| {
            total.map(|(retail_sales, wholesale_sales)| MonthlyAggregate {
                month,
                retail_sales,
                wholesale_sales,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::calendar::CalendarDate;

    fn record(week: &str, retail: f64, wholesale: f64) -> SalesRecord {
        SalesRecord {
            week_ending: CalendarDate::parse(week).unwrap(),
            retail_sales: retail,
            wholesale_sales: wholesale,
            units_sold: 1,
            retailer_margin: 0.0,
        }
    }

    #[test]
    fn test_weeks_of_one_month_collapse() {
        let records = vec![
            record("2023-01-07", 100.0, 50.0),
            record("2023-01-14", 200.0, 30.0),
        ];

        assert_eq!(
            group_by_month(&records),
            vec![MonthlyAggregate {
                month: "JAN",
                retail_sales: 300.0,
                wholesale_sales: 80.0,
            }]
        );
    }

    #[test]
    fn test_months_are_chronological_without_gaps() {
        let records = vec![
            record("2023-11-04", 1.0, 1.0),
            record("2023-02-04", 1.0, 1.0),
            record("2023-07-01", 1.0, 1.0),
            record("2023-02-25", 1.0, 1.0),
            record("2023-11-25", 1.0, 1.0),
        ];

        let months: Vec<&str> = group_by_month(&records).iter().map(|m| m.month).collect();
        assert_eq!(months, vec!["FEB", "JUL", "NOV"]);
    }

    #[test]
    fn test_totals_are_preserved() {
        let mut records = Vec::new();
        for month in 1..=12u32 {
            for day in [1u32, 8, 15, 22] {
                let seq = (month * 31 + day) as f64;
                records.push(record(
                    &format!("2017-{:02}-{:02}", month, day),
                    seq * 1000.0 + 17.0,
                    seq * 700.0 + 3.0,
                ));
            }
        }

        let monthly = group_by_month(&records);
        let retail_in: f64 = records.iter().map(|r| r.retail_sales).sum();
        let wholesale_in: f64 = records.iter().map(|r| r.wholesale_sales).sum();
        let retail_out: f64 = monthly.iter().map(|m| m.retail_sales).sum();
        let wholesale_out: f64 = monthly.iter().map(|m| m.wholesale_sales).sum();

        assert_eq!(monthly.len(), 12);
        assert_eq!(retail_in, retail_out);
        assert_eq!(wholesale_in, wholesale_out);
    }

    #[test]
    fn test_empty_input() {
        assert!(group_by_month(&[]).is_empty());
    }

    #[test]
    fn test_first_of_month_is_not_shifted() {
        let monthly = group_by_month(&[record("2023-03-01", 5.0, 5.0)]);
        assert_eq!(monthly[0].month, "MAR");
    }
}
