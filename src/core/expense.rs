use super::freq::annualize;
use super::types::{CategorySplit, ExpenseAnalysis, ExpenseItem};

/// Annualized household spending, split by whether an item is flagged as the
/// mortgage repayment line.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExpenseTotals {
    pub total_annual: f64,
    pub mortgage_annual: f64,
    pub other_annual: f64,
}

pub fn aggregate_expenses(expenses: &[ExpenseItem]) -> ExpenseTotals {
    let mut totals = ExpenseTotals::default();
    for expense in expenses {
        let annual = annualize(expense.amount, expense.freq_value, expense.freq_unit);
        totals.total_annual += annual;
        if expense.is_mortgage_link {
            totals.mortgage_annual += annual;
        } else {
            totals.other_annual += annual;
        }
    }
    totals
}

/// Per-category annual totals in the order categories first appear, ready for
/// a pie chart.
pub fn analyze_expenses(expenses: &[ExpenseItem]) -> ExpenseAnalysis {
    let mut category_split: Vec<CategorySplit> = Vec::new();
    let mut total_annual = 0.0;
    for expense in expenses {
        let annual = annualize(expense.amount, expense.freq_value, expense.freq_unit);
        total_annual += annual;
        match category_split.iter_mut().find(|c| c.name == expense.category) {
            Some(entry) => entry.value += annual,
            None => category_split.push(CategorySplit {
                name: expense.category.clone(),
                value: annual,
            }),
        }
    }
    ExpenseAnalysis {
        category_split,
        total_annual,
    }
}
