use super::expense::{aggregate_expenses, analyze_expenses};
use super::projection::run_projection;
use super::tax::{compute_tax_summary, finalize_summary};
use super::types::{CalculationRequest, CalculationResponse};

/// Runs the whole pipeline for one request: tax summary, expense totals,
/// month-stepped projection, and the category breakdown, assembled into the
/// response the dashboard renders.
pub fn run_calculation(request: &CalculationRequest) -> CalculationResponse {
    let partial =
        compute_tax_summary(&request.user_settings, &request.incomes, &request.deductions);
    let totals = aggregate_expenses(&request.expenses);
    let summary = finalize_summary(&partial, &totals);
    let projection = run_projection(request, &summary);

    CalculationResponse {
        annual_summary: summary,
        mortgage_projection: projection.mortgage_years,
        net_worth_projection: projection.net_worth_years,
        mortgage_mechanics: projection.mechanics,
        expense_analysis: analyze_expenses(&request.expenses),
    }
}
