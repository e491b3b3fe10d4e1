//! Currency formatting for Brazilian reais.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};

/// Format `amount` the way pt-BR formats BRL, e.g. `1234.5` becomes
/// `"R$ 1.234,50"`.
///
/// Amounts are rounded to the nearest cent (half away from zero). Negative
/// amounts are prefixed with a minus sign, e.g. `"-R$ 12,00"`. NaN and
/// infinite amounts render as zero.
pub fn format_brl(amount: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| brl_formatter("R$ "));

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| brl_formatter("-R$ "));

    if !amount.is_finite() {
        tracing::warn!("cannot format non-finite amount {amount} as currency");
        return "R$ 0,00".to_owned();
    }

    // numfmt truncates extra decimals instead of rounding them.
    let amount = (amount * 100.0).round() / 100.0;

    let mut formatted_string = if amount < 0.0 {
        negative_fmt.fmt_string(amount.abs())
    } else if amount > 0.0 {
        positive_fmt.fmt_string(amount)
    } else {
        // Zero is rendered as "0" and tiny negatives round to -0.0.
        "R$ 0,00".to_owned()
    };

    // numfmt omits the last trailing zero, e.g. "12,30" is rendered as "12,3".
    if formatted_string.as_bytes()[formatted_string.len() - 3] != b',' {
        formatted_string = format!("{formatted_string}0");
    }

    formatted_string
}

/// A separator of '.' also makes numfmt use ',' for the decimal mark.
fn brl_formatter(prefix: &str) -> Formatter {
    Formatter::currency(prefix)
        .and_then(|formatter| formatter.separator('.'))
        .expect("BRL prefix and separator are valid")
        .precision(Precision::Decimals(2))
}
