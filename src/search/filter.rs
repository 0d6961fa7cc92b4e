use crate::types::{Program, ProgramType};

/// Structural predicates for listing programs. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub program_type: Option<ProgramType>,
    /// Case-sensitive substring of the organization name
    pub organization: Option<String>,
    /// Inclusive upper bound on `price + additional_price`
    pub max_price: Option<f64>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.program_type.is_none() && self.organization.is_none() && self.max_price.is_none()
    }

    /// Whether a single program satisfies every supplied criterion
    pub fn matches(&self, program: &Program) -> bool {
        if let Some(program_type) = self.program_type {
            if program.program_type != program_type {
                return false;
            }
        }

        if let Some(ref organization) = self.organization {
            if !program.organization.name.contains(organization.as_str()) {
                return false;
            }
        }

        if let Some(max_price) = self.max_price {
            if effective_price(program) > max_price {
                return false;
            }
        }

        true
    }
}

/// Programs matching `criteria`, in input order.
pub fn filter<'p>(programs: &'p [Program], criteria: &FilterCriteria) -> Vec<&'p Program> {
    if criteria.is_empty() {
        return programs.iter().collect();
    }

    let matched: Vec<&Program> = programs.iter().filter(|p| criteria.matches(p)).collect();

    tracing::debug!(
        criteria = ?criteria,
        total = programs.len(),
        matched = matched.len(),
        "filtered programs"
    );

    matched
}

/// Total price a learner pays: base price plus the additional price.
pub fn effective_price(program: &Program) -> f64 {
    parse_price(&program.price) + parse_price(&program.additional_price)
}

/// Parse a price stored as text.
///
/// Leading whitespace is skipped and the longest leading decimal literal
/// (sign, digits, fraction, exponent) is read, so `"300.50 SAR"` is 300.5.
/// Anything without a leading number (`""`, `"free"`, `"-"`) and any
/// non-finite result count as 0.
pub fn parse_price(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    match text[..end].parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}
