use super::expense::ExpenseTotals;
use super::freq::annualize;
use super::types::{AnnualSummary, Deduction, IncomeStream, IncomeType, UserSettings};

const MEDICARE_LEVY_RATE: f64 = 0.02;
const MEDICARE_LEVY_FLOOR: f64 = 26_000.0;
// Reportable fringe benefits are grossed up before any threshold test.
const FRINGE_BENEFIT_GROSS_UP: f64 = 1.8868;

/// Annualizes every income stream and applies the 2024-25 schedules: bracket
/// tax, Medicare levy, levy surcharge, and study-loan repayment.
///
/// `total_expenses` and `surplus` are left at zero here; [`finalize_summary`]
/// fills them in once the expense totals are known.
pub fn compute_tax_summary(
    settings: &UserSettings,
    incomes: &[IncomeStream],
    deductions: &[Deduction],
) -> AnnualSummary {
    let mut gross_income = 0.0;
    let mut taxable_income = 0.0;
    let mut super_contribution = 0.0;
    let mut total_packaging = 0.0;
    let mut total_admin_fees = 0.0;

    for income in incomes {
        let annual_gross = annualize(income.amount, income.freq_value, income.freq_unit);
        super_contribution += annual_gross * income.super_rate / 100.0;

        let mut taxable_component = annual_gross;
        if income.income_type == IncomeType::Salary {
            // Packaged amounts and their admin fees come out pre-tax, but
            // only salary streams can package.
            taxable_component -= income.salary_packaging + income.admin_fee;
            total_packaging += income.salary_packaging;
            total_admin_fees += income.admin_fee;
        }

        gross_income += annual_gross;
        taxable_income += taxable_component;
    }

    let total_deductions: f64 = deductions.iter().map(|d| d.amount).sum();
    let taxable_income = (taxable_income - total_deductions).max(0.0);

    let income_tax = if settings.is_resident {
        resident_income_tax(taxable_income)
    } else {
        non_resident_income_tax(taxable_income)
    };

    let medicare_levy = if settings.is_resident && taxable_income > MEDICARE_LEVY_FLOOR {
        taxable_income * MEDICARE_LEVY_RATE
    } else {
        0.0
    };

    let surcharge_income = taxable_income + total_packaging * FRINGE_BENEFIT_GROSS_UP;

    // The surcharge tiers on the grossed-up figure but charges its rate on
    // taxable income; the study-loan schedule charges on the grossed-up
    // figure itself.
    let medicare_levy_surcharge = if settings.is_resident && !settings.has_private_health {
        surcharge_rate(surcharge_income) * taxable_income
    } else {
        0.0
    };

    let hecs_repayment = if settings.has_hecs_debt {
        hecs_rate(surcharge_income) * surcharge_income
    } else {
        0.0
    };

    let total_tax = income_tax + medicare_levy + medicare_levy_surcharge + hecs_repayment;

    AnnualSummary {
        gross_income,
        taxable_income,
        income_tax,
        medicare_levy,
        medicare_levy_surcharge,
        hecs_repayment,
        total_tax,
        // Packaged money and admin fees never arrive as cash.
        net_income: gross_income - total_tax - total_packaging - total_admin_fees,
        super_contribution,
        total_expenses: 0.0,
        surplus: 0.0,
    }
}

/// Completes a tax summary with the household's annual spending. Pure: the
/// input summary is left untouched.
pub fn finalize_summary(summary: &AnnualSummary, totals: &ExpenseTotals) -> AnnualSummary {
    AnnualSummary {
        total_expenses: totals.total_annual,
        surplus: (summary.net_income - totals.total_annual).max(0.0),
        ..summary.clone()
    }
}

fn resident_income_tax(taxable: f64) -> f64 {
    if taxable > 190_000.0 {
        51_638.0 + (taxable - 190_000.0) * 0.45
    } else if taxable > 135_000.0 {
        31_288.0 + (taxable - 135_000.0) * 0.37
    } else if taxable > 45_000.0 {
        4_288.0 + (taxable - 45_000.0) * 0.30
    } else if taxable > 18_200.0 {
        (taxable - 18_200.0) * 0.16
    } else {
        0.0
    }
}

// No tax-free threshold; flat 30% until the upper brackets line up with the
// resident table.
fn non_resident_income_tax(taxable: f64) -> f64 {
    if taxable > 190_000.0 {
        60_850.0 + (taxable - 190_000.0) * 0.45
    } else if taxable > 135_000.0 {
        40_500.0 + (taxable - 135_000.0) * 0.37
    } else {
        taxable * 0.30
    }
}

fn surcharge_rate(surcharge_income: f64) -> f64 {
    if surcharge_income > 151_000.0 {
        0.015
    } else if surcharge_income > 113_000.0 {
        0.0125
    } else if surcharge_income > 97_000.0 {
        0.01
    } else {
        0.0
    }
}

fn hecs_rate(surcharge_income: f64) -> f64 {
    if surcharge_income > 151_201.0 {
        0.10
    } else if surcharge_income > 100_000.0 {
        0.06
    } else if surcharge_income > 54_435.0 {
        0.01
    } else {
        0.0
    }
}
