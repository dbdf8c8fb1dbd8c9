use axum::{
    Router,
    extract::{Json, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{debug, info};

use crate::core::{
    Asset, CalculationRequest, ExpenseItem, Frequency, IncomeStream, IncomeType, MortgageParams,
    RepaymentFrequency, TaxTreatment, UserSettings, run_calculation,
};

// Category vocabularies the dashboard offers in its pickers. The engine
// itself treats categories as opaque labels.
const EXPENSE_CATEGORIES: &[&str] = &[
    "Mortgage/Rent",
    "Food",
    "Transport",
    "Utilities",
    "Insurance",
    "Health",
    "Entertainment",
    "Debt",
    "Savings",
    "Other",
];

const ASSET_CATEGORIES: &[&str] = &[
    "Shares",
    "Cash",
    "Crypto",
    "Property (Inv)",
    "Collectibles",
    "Other",
];

#[derive(Debug, Serialize)]
struct ApiMessage {
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct HealthStatus {
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Starting state for a fresh dashboard session: the default request plus
/// the category vocabularies, flattened into one object.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DefaultsPayload {
    #[serde(flatten)]
    state: CalculationRequest,
    expense_categories: &'static [&'static str],
    asset_categories: &'static [&'static str],
}

fn default_request() -> CalculationRequest {
    CalculationRequest {
        user_settings: UserSettings::default(),
        incomes: vec![IncomeStream {
            id: "1".to_string(),
            name: "Primary Salary".to_string(),
            income_type: IncomeType::Salary,
            amount: 120_000.0,
            freq_value: 1.0,
            freq_unit: Frequency::Year,
            tax_treatment: TaxTreatment::Tft,
            salary_packaging: 0.0,
            admin_fee: 0.0,
            super_rate: 11.5,
            payg_override: None,
        }],
        deductions: Vec::new(),
        expenses: vec![
            ExpenseItem {
                id: "1".to_string(),
                name: "Mortgage Repayment".to_string(),
                amount: 3_500.0,
                freq_value: 1.0,
                freq_unit: Frequency::Month,
                category: "Mortgage/Rent".to_string(),
                is_mortgage_link: true,
            },
            ExpenseItem {
                id: "2".to_string(),
                name: "Groceries".to_string(),
                amount: 200.0,
                freq_value: 1.0,
                freq_unit: Frequency::Week,
                category: "Food".to_string(),
                is_mortgage_link: false,
            },
        ],
        assets: vec![
            Asset {
                id: "1".to_string(),
                name: "Vanguard ETF (VGS)".to_string(),
                value: 20_000.0,
                category: "Shares".to_string(),
                growth_rate: 7.0,
            },
            Asset {
                id: "2".to_string(),
                name: "Savings Account".to_string(),
                value: 20_000.0,
                category: "Cash".to_string(),
                growth_rate: 4.5,
            },
        ],
        mortgage_params: MortgageParams {
            principal: 500_000.0,
            offset_balance: 20_000.0,
            interest_rate: 6.0,
            loan_term_years: 30,
            user_repayment: None,
            repayment_freq: RepaymentFrequency::Month,
            property_value: 600_000.0,
            growth_rate: 3.0,
            use_budget_repayment: true,
            use_surplus: false,
        },
        fire_target_override: None,
    }
}

fn defaults_payload() -> DefaultsPayload {
    DefaultsPayload {
        state: default_request(),
        expense_categories: EXPENSE_CATEGORIES,
        asset_categories: ASSET_CATEGORIES,
    }
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route("/", get(root_handler))
        .route("/api/health", get(health_handler))
        .route("/defaults", get(defaults_handler))
        .route("/calculate", post(calculate_handler))
        .fallback(not_found_handler);

    let listener = TcpListener::bind(addr).await?;
    info!("HTTP API listening on http://{addr}");

    axum::serve(listener, app).await
}

async fn root_handler() -> Response {
    json_response(
        StatusCode::OK,
        ApiMessage {
            message: "fireplan API is running",
        },
    )
}

async fn health_handler() -> Response {
    json_response(StatusCode::OK, HealthStatus { status: "ok" })
}

async fn defaults_handler() -> Response {
    json_response(StatusCode::OK, defaults_payload())
}

async fn calculate_handler(payload: Result<Json<CalculationRequest>, JsonRejection>) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                &format!("Invalid calculation request: {rejection}"),
            );
        }
    };

    debug!(
        incomes = request.incomes.len(),
        expenses = request.expenses.len(),
        assets = request.assets.len(),
        "running calculation"
    );
    json_response(StatusCode::OK, run_calculation(&request))
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}
