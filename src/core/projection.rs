use super::expense::{ExpenseTotals, aggregate_expenses};
use super::types::{
    AnnualSummary, CalculationRequest, MortgageMechanics, MortgageParams, MortgageYearResult,
    NetWorthYearResult, UserSettings,
};

#[derive(Debug, Clone)]
pub struct Projection {
    pub mortgage_years: Vec<MortgageYearResult>,
    pub net_worth_years: Vec<NetWorthYearResult>,
    pub mechanics: MortgageMechanics,
}

/// Steps the mortgage and net-worth charts month by month across the loan
/// term, one snapshot per year boundary, and derives the repayment mechanics
/// shown alongside them.
///
/// The summary must already be finalized: its `surplus` feeds repayment
/// capacity and its `net_income` feeds the investable surplus.
pub fn run_projection(request: &CalculationRequest, summary: &AnnualSummary) -> Projection {
    let totals = aggregate_expenses(&request.expenses);
    let mortgage = &request.mortgage_params;
    let mechanics = repayment_mechanics(mortgage, &totals, summary.surplus);

    // The chart steps monthly regardless of repayment frequency; the chosen
    // frequency only scales how much lands each month.
    let monthly_rate = mortgage.interest_rate / 100.0 / 12.0;
    let freq_to_monthly = mortgage.repayment_freq.periods_per_year() / 12.0;
    let monthly_repay_min = mechanics.min_repayment * freq_to_monthly;
    let monthly_repay_actual = mechanics.actual_repayment * freq_to_monthly;

    let annual_mortgage_cost = monthly_repay_actual * 12.0;
    let real_surplus_annual =
        (summary.net_income - totals.other_annual - annual_mortgage_cost).max(0.0);
    let velocity = wealth_velocity(
        mortgage,
        &request.user_settings,
        real_surplus_annual,
        annual_mortgage_cost,
    );
    let fire_target = request
        .fire_target_override
        .unwrap_or((totals.other_annual + annual_mortgage_cost) * 25.0);

    let growth_factors: Vec<f64> = request
        .assets
        .iter()
        .map(|asset| 1.0 + asset.growth_rate / 100.0)
        .collect();
    let mut asset_values: Vec<f64> = request.assets.iter().map(|asset| asset.value).collect();

    let property_monthly_factor = (1.0 + mortgage.growth_rate / 100.0).powf(1.0 / 12.0);
    let mut balance_standard = mortgage.principal;
    let mut balance_actual = mortgage.principal;
    let mut property_value = mortgage.property_value;

    let total_months = mortgage.loan_term_years.saturating_mul(12);
    let mut mortgage_years = Vec::with_capacity(mortgage.loan_term_years as usize + 1);
    let mut net_worth_years = Vec::with_capacity(mortgage.loan_term_years as usize + 1);

    for month in 0..=total_months {
        if month % 12 == 0 {
            mortgage_years.push(MortgageYearResult {
                year: month as f64 / 12.0,
                balance_standard: dollars(balance_standard),
                balance_actual: dollars(balance_actual),
                property: dollars(property_value),
                equity: dollars(property_value - balance_actual),
                redraw: dollars(balance_standard - balance_actual).max(0),
            });

            let asset_total: f64 = asset_values.iter().sum();
            net_worth_years.push(NetWorthYearResult {
                year: month / 12,
                net_worth: dollars(property_value + asset_total - balance_actual),
                debt: dollars(balance_actual),
                fire_target: dollars(fire_target),
                velocity: dollars(velocity),
            });

            // Snapshots show the year as it opens; growth and the surplus
            // injection land after the books are cut.
            if month > 0 {
                let mut injection = real_surplus_annual;
                if balance_actual <= 0.0 && !request.user_settings.is_renting {
                    // The loan is gone, so its payments are redirected into
                    // savings.
                    injection += annual_mortgage_cost;
                }
                asset_values = advance_assets(&asset_values, &growth_factors, injection);
            }
        }

        if month < total_months {
            property_value *= property_monthly_factor;

            if balance_standard > 0.0 {
                let interest = balance_standard * monthly_rate;
                balance_standard = (balance_standard + interest - monthly_repay_min).max(0.0);
            }
            if balance_actual > 0.0 {
                // Offset cash suppresses interest without being a repayment.
                let effective_principal = (balance_actual - mortgage.offset_balance).max(0.0);
                let interest = effective_principal * monthly_rate;
                balance_actual = (balance_actual + interest - monthly_repay_actual).max(0.0);
            }
        }
    }

    Projection {
        mortgage_years,
        net_worth_years,
        mechanics,
    }
}

/// Standard amortizing payment per period. A zero-length term propagates as
/// infinity rather than failing.
fn amortized_payment(period_rate: f64, periods: f64, principal: f64) -> f64 {
    if period_rate == 0.0 {
        return principal / periods;
    }
    let compound = (1.0 + period_rate).powf(periods);
    period_rate * principal * compound / (compound - 1.0)
}

fn repayment_mechanics(
    mortgage: &MortgageParams,
    totals: &ExpenseTotals,
    surplus: f64,
) -> MortgageMechanics {
    let periods_per_year = mortgage.repayment_freq.periods_per_year();
    let period_rate = mortgage.interest_rate / 100.0 / periods_per_year;
    let total_periods = mortgage.loan_term_years as f64 * periods_per_year;

    let min_repayment = amortized_payment(period_rate, total_periods, mortgage.principal);
    let budget_repayment = totals.mortgage_annual / periods_per_year;
    // Whatever the household plans to pay, the bank still collects the
    // scheduled minimum.
    let actual_repayment = mortgage
        .user_repayment
        .unwrap_or(budget_repayment)
        .max(min_repayment);

    MortgageMechanics {
        min_repayment,
        budget_repayment,
        actual_repayment,
        first_period_interest: (mortgage.principal - mortgage.offset_balance) * period_rate,
        max_capacity: (surplus + totals.mortgage_annual) / periods_per_year,
    }
}

// First-year figures only; the published number stays constant across the
// projection even as balances move.
fn wealth_velocity(
    mortgage: &MortgageParams,
    settings: &UserSettings,
    real_surplus_annual: f64,
    annual_mortgage_cost: f64,
) -> f64 {
    let first_year_interest =
        (mortgage.principal - mortgage.offset_balance) * mortgage.interest_rate / 100.0;
    let principal_paydown = if settings.is_renting {
        0.0
    } else {
        (annual_mortgage_cost - first_year_interest).max(0.0)
    };
    real_surplus_annual + principal_paydown
}

/// One year boundary: every asset compounds at its own rate, then the
/// injection lands in the first asset. Returns a fresh snapshot and leaves
/// the previous one untouched.
fn advance_assets(values: &[f64], growth_factors: &[f64], injection: f64) -> Vec<f64> {
    let mut next: Vec<f64> = values
        .iter()
        .zip(growth_factors)
        .map(|(value, factor)| value * factor)
        .collect();
    // With no assets the injection has nowhere to land and is dropped.
    if let Some(first) = next.first_mut() {
        *first += injection;
    }
    next
}

fn dollars(value: f64) -> i64 {
    value.round() as i64
}
