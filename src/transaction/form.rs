//! The form for creating a transaction.

use maud::{Markup, html};
use serde::Deserialize;
use time::Date;

use crate::{
    Error, endpoints,
    filter::TransactionFilter,
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
    model::{NewTransaction, PaymentMethod, TransactionKind},
};

/// The form data for creating a transaction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionForm {
    /// The amount, e.g. `150.75`.
    pub valor: f64,
    /// The due or payment date.
    pub data: Date,
    /// Inflow or outflow.
    pub tipo: TransactionKind,
    /// Free text category, e.g. "Mercado".
    pub categoria: String,
    /// How the transaction is paid.
    pub forma_pagamento: PaymentMethod,
    /// Optional free text, submitted as an empty string when left blank.
    #[serde(default)]
    pub descricao: String,
    /// Missing when the checkbox is unticked.
    #[serde(default)]
    pub pago: bool,
}

impl TransactionForm {
    /// The request body for the backend. A blank description is sent as
    /// `null`.
    pub fn into_new_transaction(self) -> NewTransaction {
        let descricao = match self.descricao.trim() {
            "" => None,
            _ => Some(self.descricao),
        };

        NewTransaction {
            valor: self.valor,
            data: self.data,
            tipo: self.tipo,
            categoria: self.categoria,
            forma_pagamento: self.forma_pagamento,
            descricao,
            pago: self.pago,
        }
    }
}

/// Renders an empty create form that posts to the transactions endpoint with
/// `filter` in the query string.
pub fn transaction_form(filter: &TransactionFilter) -> Result<Markup, Error> {
    let create_url = filter.url_for(endpoints::TRANSACTIONS)?;

    Ok(html! {
        form
            id="transaction-form"
            hx-post=(create_url)
            hx-target="#dashboard-content"
            hx-swap="outerHTML"
            class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4"
        {
            div
            {
                label for="valor" class=(FORM_LABEL_STYLE) { "Valor" }
                input
                    id="valor"
                    name="valor"
                    type="number"
                    step="0.01"
                    min="0.01"
                    placeholder="0,00"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="data" class=(FORM_LABEL_STYLE) { "Data" }
                input id="data" name="data" type="date" required class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="tipo" class=(FORM_LABEL_STYLE) { "Tipo" }
                select id="tipo" name="tipo" required class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value=(TransactionKind::Saida.as_str()) { "Saída" }
                    option value=(TransactionKind::Entrada.as_str()) { "Entrada" }
                }
            }

            div
            {
                label for="categoria" class=(FORM_LABEL_STYLE) { "Categoria" }
                input
                    id="categoria"
                    name="categoria"
                    type="text"
                    minlength="2"
                    maxlength="50"
                    placeholder="Mercado"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="forma_pagamento" class=(FORM_LABEL_STYLE) { "Forma de pagamento" }
                select
                    id="forma_pagamento"
                    name="forma_pagamento"
                    required
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for method in &PaymentMethod::SELECTABLE {
                        option value=(method.as_str()) { (method.label()) }
                    }
                }
            }

            div class="md:col-span-2"
            {
                label for="descricao" class=(FORM_LABEL_STYLE) { "Descrição" }
                input
                    id="descricao"
                    name="descricao"
                    type="text"
                    maxlength="255"
                    placeholder="Opcional"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div class="flex items-center gap-2"
            {
                input id="pago" name="pago" type="checkbox" value="true";
                label for="pago" class="text-sm" { "Pago/Recebido" }
            }

            div class="lg:col-span-4"
            {
                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Salvar" }
            }
        }
    })
}
