use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Week,
    Fortnight,
    Month,
    Quarter,
    Year,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IncomeType {
    Salary,
    #[serde(alias = "abn")]
    SelfEmployed,
    Other,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaxTreatment {
    Tft,
    NoTft,
    Abn,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RepaymentFrequency {
    Week,
    Fortnight,
    Month,
}

impl RepaymentFrequency {
    pub fn periods_per_year(self) -> f64 {
        match self {
            RepaymentFrequency::Week => 52.0,
            RepaymentFrequency::Fortnight => 26.0,
            RepaymentFrequency::Month => 12.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserSettings {
    pub name: String,
    pub is_resident: bool,
    pub has_private_health: bool,
    pub has_hecs_debt: bool,
    pub is_renting: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        UserSettings {
            name: String::new(),
            is_resident: true,
            has_private_health: false,
            has_hecs_debt: false,
            is_renting: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStream {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub income_type: IncomeType,
    pub amount: f64,
    pub freq_value: f64,
    pub freq_unit: Frequency,
    pub tax_treatment: TaxTreatment,
    #[serde(default)]
    pub salary_packaging: f64,
    #[serde(default)]
    pub admin_fee: f64,
    #[serde(default = "default_super_rate")]
    pub super_rate: f64,
    /// Withholding figure supplied by the UI; carried through untouched.
    #[serde(default)]
    pub payg_override: Option<f64>,
}

fn default_super_rate() -> f64 {
    11.5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Deduction {
    pub id: String,
    pub name: String,
    pub amount: f64,
    pub category: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseItem {
    pub id: String,
    pub name: String,
    pub amount: f64,
    pub freq_value: f64,
    pub freq_unit: Frequency,
    pub category: String,
    #[serde(default)]
    pub is_mortgage_link: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub value: f64,
    pub category: String,
    pub growth_rate: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageParams {
    pub principal: f64,
    pub offset_balance: f64,
    pub interest_rate: f64,
    pub loan_term_years: u32,
    #[serde(default)]
    pub user_repayment: Option<f64>,
    #[serde(default = "default_repayment_freq")]
    pub repayment_freq: RepaymentFrequency,
    pub property_value: f64,
    pub growth_rate: f64,
    #[serde(default = "default_true")]
    pub use_budget_repayment: bool,
    #[serde(default)]
    pub use_surplus: bool,
}

fn default_repayment_freq() -> RepaymentFrequency {
    RepaymentFrequency::Month
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    pub user_settings: UserSettings,
    pub incomes: Vec<IncomeStream>,
    pub deductions: Vec<Deduction>,
    pub expenses: Vec<ExpenseItem>,
    pub assets: Vec<Asset>,
    pub mortgage_params: MortgageParams,
    #[serde(default)]
    pub fire_target_override: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnnualSummary {
    pub gross_income: f64,
    pub taxable_income: f64,
    pub income_tax: f64,
    pub medicare_levy: f64,
    pub medicare_levy_surcharge: f64,
    pub hecs_repayment: f64,
    pub total_tax: f64,
    pub net_income: f64,
    pub super_contribution: f64,
    pub total_expenses: f64,
    pub surplus: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageYearResult {
    pub year: f64,
    pub balance_standard: i64,
    pub balance_actual: i64,
    pub property: i64,
    pub equity: i64,
    pub redraw: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthYearResult {
    pub year: u32,
    pub net_worth: i64,
    pub debt: i64,
    pub fire_target: i64,
    pub velocity: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MortgageMechanics {
    pub min_repayment: f64,
    pub budget_repayment: f64,
    pub actual_repayment: f64,
    pub first_period_interest: f64,
    pub max_capacity: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategorySplit {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExpenseAnalysis {
    pub category_split: Vec<CategorySplit>,
    pub total_annual: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalculationResponse {
    pub annual_summary: AnnualSummary,
    pub mortgage_projection: Vec<MortgageYearResult>,
    pub net_worth_projection: Vec<NetWorthYearResult>,
    pub mortgage_mechanics: MortgageMechanics,
    pub expense_analysis: ExpenseAnalysis,
}
