//! The month/year filter shared by the dashboard and the transaction list.

use maud::{Markup, html};
use serde::{Deserialize, Deserializer, Serialize};
use time::Date;

use crate::{
    Error,
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
    model::TransactionKind,
};

/// The month (1-12) and year the views are showing.
///
/// Serializes to the query string the backend expects, e.g.
/// `month=7&year=2024`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthFilter {
    /// The month, 1 for January.
    pub month: u8,
    /// The calendar year. Not range checked.
    pub year: i32,
}

impl MonthFilter {
    /// The month containing `today`.
    pub fn containing(today: Date) -> Self {
        Self {
            month: u8::from(today.month()),
            year: today.year(),
        }
    }

    /// Encode the filter as a URL query string (without the leading `?`).
    pub fn to_query_string(&self) -> Result<String, Error> {
        encode_query(self)
    }
}

/// The filter for the transaction list.
///
/// The backend also supports narrowing the list down by kind and to pending
/// transactions. Those parameters are only sent when set, so the default
/// query is identical to the [MonthFilter] one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransactionFilter {
    /// The month, 1 for January.
    pub month: u8,
    /// The calendar year.
    pub year: i32,
    /// Only list inflows or outflows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo: Option<TransactionKind>,
    /// Only list transactions that have not been paid yet.
    #[serde(skip_serializing_if = "is_false")]
    pub only_pending: bool,
}

fn is_false(value: &bool) -> bool {
    !value
}

impl TransactionFilter {
    /// The month and year part of the filter.
    pub fn period(&self) -> MonthFilter {
        MonthFilter {
            month: self.month,
            year: self.year,
        }
    }

    /// Encode the filter as a URL query string (without the leading `?`).
    pub fn to_query_string(&self) -> Result<String, Error> {
        encode_query(self)
    }

    /// Append this filter as the query string of `path`.
    ///
    /// Used to carry the filter through htmx requests so the content rendered
    /// after a mutation matches what the user was looking at.
    pub fn url_for(&self, path: &str) -> Result<String, Error> {
        Ok(format!("{path}?{}", self.to_query_string()?))
    }
}

impl From<MonthFilter> for TransactionFilter {
    fn from(period: MonthFilter) -> Self {
        Self {
            month: period.month,
            year: period.year,
            tipo: None,
            only_pending: false,
        }
    }
}

fn encode_query(value: &impl Serialize) -> Result<String, Error> {
    serde_urlencoded::to_string(value).map_err(|error| Error::InvalidQuery(error.to_string()))
}

/// The filter as it arrives in a view request's query string.
///
/// Missing fields fall back to the current month, see [FilterParams::resolve].
#[derive(Debug, Default, Clone, Deserialize)]
pub struct FilterParams {
    /// Accepts zero-padded values such as `07`.
    #[serde(default)]
    pub month: Option<u8>,
    /// The calendar year.
    #[serde(default)]
    pub year: Option<i32>,
    /// An empty value means both kinds.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub tipo: Option<TransactionKind>,
    /// Present as `true` when the checkbox is ticked.
    #[serde(default)]
    pub only_pending: bool,
}

impl FilterParams {
    /// Fill in any missing month or year from `today`.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidRequest] if the month is not in 1-12.
    pub fn resolve(&self, today: Date) -> Result<TransactionFilter, Error> {
        let current = MonthFilter::containing(today);
        let month = self.month.unwrap_or(current.month);

        if !(1..=12).contains(&month) {
            return Err(Error::InvalidRequest(format!(
                "month must be between 1 and 12, got {month}"
            )));
        }

        Ok(TransactionFilter {
            month,
            year: self.year.unwrap_or(current.year),
            tipo: self.tipo,
            only_pending: self.only_pending,
        })
    }
}

/// Select inputs submit an empty string for the "all" option.
fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<TransactionKind>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;

    match value.as_deref() {
        None | Some("") => Ok(None),
        Some("entrada") => Ok(Some(TransactionKind::Entrada)),
        Some("saida") => Ok(Some(TransactionKind::Saida)),
        Some(other) => Err(serde::de::Error::unknown_variant(
            other,
            &["entrada", "saida"],
        )),
    }
}

/// The options for the month selector: values 1-12 with zero-padded labels.
pub fn month_options() -> impl Iterator<Item = (u8, String)> {
    (1..=12).map(|month| (month, format!("{month:02}")))
}

/// Renders the filter controls.
///
/// Applying the filter re-fetches the dashboard content from `content_url`
/// and swaps it into `#dashboard-content`.
pub fn filter_form(filter: &TransactionFilter, content_url: &str) -> Markup {
    html! {
        form
            id="filters"
            hx-get=(content_url)
            hx-target="#dashboard-content"
            hx-swap="outerHTML"
            class="flex flex-wrap items-end gap-4 mb-6"
        {
            div
            {
                label for="month" class=(FORM_LABEL_STYLE) { "Mês" }
                select id="month" name="month" class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for (value, label) in month_options() {
                        option value=(value) selected[value == filter.month] { (label) }
                    }
                }
            }

            div
            {
                label for="year" class=(FORM_LABEL_STYLE) { "Ano" }
                input
                    id="year"
                    name="year"
                    type="number"
                    value=(filter.year)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="tipo-filter" class=(FORM_LABEL_STYLE) { "Tipo" }
                select id="tipo-filter" name="tipo" class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" selected[filter.tipo.is_none()] { "Todos" }
                    option
                        value=(TransactionKind::Entrada.as_str())
                        selected[filter.tipo == Some(TransactionKind::Entrada)]
                    { "Entradas" }
                    option
                        value=(TransactionKind::Saida.as_str())
                        selected[filter.tipo == Some(TransactionKind::Saida)]
                    { "Saídas" }
                }
            }

            div class="flex items-center gap-2"
            {
                input
                    id="only-pending"
                    name="only_pending"
                    type="checkbox"
                    value="true"
                    checked[filter.only_pending];
                label for="only-pending" class="text-sm" { "Somente pendentes" }
            }

            div
            {
                button type="submit" id="apply-filters" class=(BUTTON_PRIMARY_STYLE) { "Aplicar" }
            }
        }
    }
}
