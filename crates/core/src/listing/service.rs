//! Expense list: search, filter, sort, paginate.

use budgetscope_shared::types::PageResponse;

use super::types::{ExpenseListing, ExpenseQuery, ExpenseRow, SortOrder};
use crate::aggregation::AggregationService;
use crate::records::{Centre, CentreDirectory, Expense, Monetary};

/// Service backing the expense list view.
pub struct ListingService;

impl ListingService {
    /// Returns true if `expense` passes the query's search, centre and date filters.
    #[must_use]
    pub fn matches(query: &ExpenseQuery, directory: &CentreDirectory<'_>, expense: &Expense) -> bool {
        Self::admits(query, &query.search.to_lowercase(), directory, expense)
    }

    /// Runs `query` over `expenses`.
    ///
    /// The summary covers every matching expense; only the page is cut.
    #[must_use]
    pub fn run(expenses: &[Expense], centres: &[Centre], query: &ExpenseQuery) -> ExpenseListing {
        let directory = CentreDirectory::new(centres);
        let needle = query.search.to_lowercase();

        let mut matching: Vec<&Expense> = expenses
            .iter()
            .filter(|e| Self::admits(query, &needle, &directory, e))
            .collect();

        match query.sort {
            SortOrder::Asc => matching.sort_by(|a, b| a.amount_value().cmp(&b.amount_value())),
            SortOrder::Desc => matching.sort_by(|a, b| b.amount_value().cmp(&a.amount_value())),
        }

        let summary = AggregationService::expense_summary(matching.iter().copied());
        let page = PageResponse::paginate(matching, query.page).map(|expense| ExpenseRow {
            id: expense.id.clone(),
            description: expense.description.clone(),
            centre_id: expense.centre_id.clone(),
            centre_name: directory.display_name(&expense.centre_id).to_string(),
            amount: expense.amount_value(),
            date: expense.date,
            created_by: expense.created_by.clone(),
        });

        ExpenseListing { page, summary }
    }

    /// `needle` is the lowercased search text.
    fn admits(
        query: &ExpenseQuery,
        needle: &str,
        directory: &CentreDirectory<'_>,
        expense: &Expense,
    ) -> bool {
        let found = needle.is_empty()
            || expense.description.to_lowercase().contains(needle)
            || directory
                .search_name(&expense.centre_id)
                .to_lowercase()
                .contains(needle);

        found
            && query.centre.admits(&expense.centre_id)
            && query.date_from.is_none_or(|from| expense.date >= from)
            && query.date_to.is_none_or(|to| expense.date <= to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use budgetscope_shared::types::{Amount, CentreId, ExpenseId, PageRequest};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn centres() -> Vec<Centre> {
        vec![
            Centre {
                id: CentreId::new("c1"),
                name: "Direction Financière".to_string(),
                responsable: String::new(),
            },
            Centre {
                id: CentreId::new("c2"),
                name: "Informatique".to_string(),
                responsable: String::new(),
            },
        ]
    }

    fn expense(centre: &str, description: &str, day: u32, amount: Decimal) -> Expense {
        Expense {
            id: ExpenseId::generate(),
            centre_id: CentreId::new(centre),
            amount: Amount::new(amount),
            description: description.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            created_by: None,
        }
    }

    fn sample() -> Vec<Expense> {
        vec![
            expense("c1", "Audit annuel", 1, dec!(500)),
            expense("c2", "Licences logiciel", 5, dec!(1200)),
            expense("c2", "Câbles réseau", 10, dec!(80)),
            expense("ghost", "Fournitures", 15, dec!(40)),
        ]
    }

    fn descriptions(listing: &ExpenseListing) -> Vec<&str> {
        listing.page.data.iter().map(|r| r.description.as_str()).collect()
    }

    #[test]
    fn test_default_query_sorts_descending() {
        let listing = ListingService::run(&sample(), &centres(), &ExpenseQuery::default());

        assert_eq!(
            descriptions(&listing),
            vec!["Licences logiciel", "Audit annuel", "Câbles réseau", "Fournitures"]
        );
        assert_eq!(listing.summary.count, 4);
        assert_eq!(listing.summary.total, dec!(1820));
        assert_eq!(listing.summary.average, dec!(455));
    }

    #[test]
    fn test_search_matches_centre_name_case_insensitively() {
        let query = ExpenseQuery::default().with_search("INFORMATIQUE");
        let listing = ListingService::run(&sample(), &centres(), &query);

        assert_eq!(descriptions(&listing), vec!["Licences logiciel", "Câbles réseau"]);
    }

    #[test]
    fn test_search_matches_description() {
        let query = ExpenseQuery::default().with_search("audit");
        let listing = ListingService::run(&sample(), &centres(), &query);

        assert_eq!(descriptions(&listing), vec!["Audit annuel"]);
    }

    #[test]
    fn test_orphans_do_not_match_placeholder_name() {
        let query = ExpenseQuery::default().with_search("n/a");
        let listing = ListingService::run(&sample(), &centres(), &query);

        assert!(listing.page.data.is_empty());
        assert_eq!(listing.summary.count, 0);
    }

    #[test]
    fn test_orphan_rows_display_placeholder_name() {
        let query = ExpenseQuery::default().with_search("fourni");
        let listing = ListingService::run(&sample(), &centres(), &query);

        assert_eq!(listing.page.data[0].centre_name, "N/A");
    }

    #[test]
    fn test_centre_and_inclusive_date_range() {
        let query = ExpenseQuery::default()
            .with_centre(CentreId::new("c2"))
            .with_date_range("2024-03-05", "2024-03-10")
            .unwrap()
            .with_sort(SortOrder::Asc);
        let listing = ListingService::run(&sample(), &centres(), &query);

        assert_eq!(descriptions(&listing), vec!["Câbles réseau", "Licences logiciel"]);
    }

    #[test]
    fn test_empty_bounds_are_unbounded() {
        let query = ExpenseQuery::default().with_date_range("", "").unwrap();
        let listing = ListingService::run(&sample(), &centres(), &query);

        assert_eq!(listing.summary.count, 4);
    }

    #[test]
    fn test_pagination_splits_and_clamps() {
        let expenses: Vec<Expense> = (1..=21)
            .map(|day| expense("c1", "x", day, Decimal::from(day)))
            .collect();

        let sizes: Vec<usize> = (1..=3)
            .map(|page| {
                let query = ExpenseQuery::default().with_page(PageRequest::new(page, 9));
                ListingService::run(&expenses, &centres(), &query).page.data.len()
            })
            .collect();
        assert_eq!(sizes, vec![9, 9, 3]);

        let query = ExpenseQuery::default().with_page(PageRequest::new(5, 9));
        let listing = ListingService::run(&expenses, &centres(), &query);
        assert_eq!(listing.page.meta.page, 3);
        assert_eq!(listing.page.meta.total_pages, 3);
        assert_eq!(listing.page.data.len(), 3);
        assert_eq!(listing.summary.count, 21);
    }

    #[test]
    fn test_equal_amounts_keep_input_order() {
        let expenses = vec![
            expense("c1", "first", 1, dec!(10)),
            expense("c1", "second", 2, dec!(10)),
            expense("c1", "third", 3, dec!(10)),
        ];
        let listing = ListingService::run(&expenses, &centres(), &ExpenseQuery::default());

        assert_eq!(descriptions(&listing), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_matches_agrees_with_run() {
        let expenses = sample();
        let centres = centres();
        let directory = CentreDirectory::new(&centres);
        let query = ExpenseQuery::default().with_search("c");

        let expected = expenses
            .iter()
            .filter(|e| ListingService::matches(&query, &directory, e))
            .count();
        assert_eq!(ListingService::run(&expenses, &centres, &query).summary.count, expected);
    }
}
