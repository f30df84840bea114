//! Per-token pricing for the models this crate talks to.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// USD cost per (input, output) token for a model name.
///
/// Matches on prefix so dated snapshots (`gpt-4o-mini-2024-07-18`) price like
/// their family. Unknown models cost zero.
pub fn model_cost(model: &str) -> (Decimal, Decimal) {
    // Longest prefixes first: "gpt-4o-mini" must win over "gpt-4o".
    const TABLE: &[(&str, Decimal, Decimal)] = &[
        ("gpt-4o-mini", dec!(0.00000015), dec!(0.0000006)),
        ("gpt-4o", dec!(0.0000025), dec!(0.00001)),
        ("gpt-4.1-mini", dec!(0.0000004), dec!(0.0000016)),
        ("gpt-4.1", dec!(0.000002), dec!(0.000008)),
        ("claude-3-5-haiku", dec!(0.0000008), dec!(0.000004)),
        ("claude-sonnet-4", dec!(0.000003), dec!(0.000015)),
        ("claude-3-5-sonnet", dec!(0.000003), dec!(0.000015)),
    ];

    TABLE
        .iter()
        .find(|(prefix, _, _)| model.starts_with(prefix))
        .map(|(_, input, output)| (*input, *output))
        .unwrap_or((Decimal::ZERO, Decimal::ZERO))
}

/// Estimated USD cost of one call.
pub fn estimate_cost(
    (input_rate, output_rate): (Decimal, Decimal),
    input_tokens: u32,
    output_tokens: u32,
) -> Decimal {
    input_rate * Decimal::from(input_tokens) + output_rate * Decimal::from(output_tokens)
}
