use crate::forms::AskForm;
use advisor::models::AskRequest;

const RISK_APPETITES: [&str; 3] = ["low", "medium", "high"];

/// Validates the submitted form and converts it into a backend request.
/// Blank optional fields are dropped rather than rejected.
pub fn build_ask_request(form: AskForm) -> Result<AskRequest, String> {
    let question = form.question.trim();
    if question.is_empty() {
        return Err("Please enter a question".to_string());
    }

    let age = match normalize_optional(form.age.as_deref()) {
        Some(value) => Some(
            value
                .parse::<u32>()
                .ok()
                .filter(|age| (1..=120).contains(age))
                .ok_or_else(|| format!("age must be a whole number between 1 and 120, got {value}"))?,
        ),
        None => None,
    };

    let monthly_salary = match normalize_optional(form.monthly_salary.as_deref()) {
        Some(value) => Some(parse_amount(&value)?),
        None => None,
    };

    let risk_appetite = match normalize_optional(form.risk_appetite.as_deref()) {
        Some(value) => {
            let lowered = value.to_lowercase();
            if !RISK_APPETITES.contains(&lowered.as_str()) {
                return Err(format!("risk appetite must be low, medium or high, got {value}"));
            }
            Some(lowered)
        }
        None => None,
    };

    Ok(AskRequest {
        question: question.to_string(),
        age,
        monthly_salary,
        risk_appetite,
    })
}

fn parse_amount(value: &str) -> Result<f64, String> {
    let cleaned: String = value
        .chars()
        .filter(|c| !matches!(c, ',' | '₹' | ' '))
        .collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount >= 0.0)
        .ok_or_else(|| format!("monthly salary must be a positive amount, got {value}"))
}

pub fn normalize_optional(input: Option<&str>) -> Option<String> {
    let trimmed = input?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn current_datetime() -> String {
    let format = time::format_description::parse("[year]-[month]-[day] [hour]:[minute]:[second]")
        .unwrap_or_else(|_| time::format_description::parse("[year]-[month]-[day]").expect("format"));
    let now = time::OffsetDateTime::now_local().unwrap_or_else(|_| time::OffsetDateTime::now_utc());
    now.format(&format).unwrap_or_else(|_| "n/a".to_string())
}
