mod engine;
mod expense;
mod freq;
mod projection;
mod tax;
mod types;

pub use engine::run_calculation;
pub use expense::{ExpenseTotals, aggregate_expenses, analyze_expenses};
pub use freq::annualize;
pub use projection::{Projection, run_projection};
pub use tax::{compute_tax_summary, finalize_summary};
pub use types::{
    AnnualSummary, Asset, CalculationRequest, CalculationResponse, CategorySplit, Deduction,
    ExpenseAnalysis, ExpenseItem, Frequency, IncomeStream, IncomeType, MortgageMechanics,
    MortgageParams, MortgageYearResult, NetWorthYearResult, RepaymentFrequency, TaxTreatment,
    UserSettings,
};
