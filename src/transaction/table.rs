//! The transaction table and its per-row actions.

use maud::{Markup, html};

use crate::{
    Error,
    controller::DashboardView,
    currency::format_brl,
    endpoints::{self, format_endpoint},
    filter::TransactionFilter,
    html::{
        BUTTON_DELETE_STYLE, BUTTON_SECONDARY_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE,
        TABLE_ROW_STYLE, TAG_OK_STYLE, TAG_WARN_STYLE,
    },
    model::Transaction,
};

/// Renders the transactions of `view` as a table, one row per transaction.
pub fn transaction_table(view: &DashboardView) -> Result<Markup, Error> {
    let rows = view
        .transactions
        .iter()
        .map(|transaction| transaction_row(transaction, &view.filter))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(html! {
        div class="relative overflow-x-auto shadow-md sm:rounded-lg"
        {
            table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Data" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Tipo" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Categoria" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Forma de pagamento" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Descrição" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Valor" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Status" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Ações" }
                    }
                }

                tbody id="transaction-table-body"
                {
                    @for row in rows {
                        (row)
                    }
                }
            }
        }
    })
}

/// Renders one row. The action buttons carry the current filter so the
/// refreshed content shows the same month.
fn transaction_row(transaction: &Transaction, filter: &TransactionFilter) -> Result<Markup, Error> {
    let transaction_url = filter.url_for(&format_endpoint(endpoints::TRANSACTION, transaction.id))?;
    let description = transaction
        .descricao
        .as_deref()
        .filter(|text| !text.is_empty())
        .unwrap_or("-");
    let (status_style, status_text) = if transaction.pago {
        (TAG_OK_STYLE, "Pago/Recebido")
    } else {
        (TAG_WARN_STYLE, "Pendente")
    };
    let toggle_text = if transaction.pago {
        "Marcar pendente"
    } else {
        "Marcar pago"
    };
    let toggle_values = format!(r#"{{"pago": {}}}"#, transaction.pago);

    Ok(html! {
        tr class=(TABLE_ROW_STYLE) data-transaction-id=(transaction.id)
        {
            td class=(TABLE_CELL_STYLE) { (transaction.data) }
            td class=(TABLE_CELL_STYLE) { (transaction.tipo.as_str()) }
            td class=(TABLE_CELL_STYLE) { (transaction.categoria) }
            td class=(TABLE_CELL_STYLE) { (transaction.forma_pagamento.label()) }
            td class=(TABLE_CELL_STYLE) { (description) }
            td class=(TABLE_CELL_STYLE) { (format_brl(transaction.valor)) }
            td class=(TABLE_CELL_STYLE)
            {
                span class=(status_style) { (status_text) }
            }
            td class=(TABLE_CELL_STYLE)
            {
                div class="flex gap-4 items-center"
                {
                    button
                        class=(BUTTON_SECONDARY_STYLE)
                        hx-patch=(transaction_url)
                        hx-vals=(toggle_values)
                        hx-target="#dashboard-content"
                        hx-swap="outerHTML"
                    {
                        (toggle_text)
                    }

                    button
                        class=(BUTTON_DELETE_STYLE)
                        hx-delete=(transaction_url)
                        hx-target="#dashboard-content"
                        hx-swap="outerHTML"
                    {
                        "Excluir"
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use scraper::{ElementRef, Html, Selector};

    use crate::{
        controller::DashboardView,
        filter::{MonthFilter, TransactionFilter},
        model::{DashboardSummary, PaymentMethod, Transaction},
        test_utils::{assert_hx_endpoint, sample_transaction, select_text},
    };

    use super::transaction_table;

    fn view(transactions: Vec<Transaction>) -> DashboardView {
        DashboardView {
            filter: TransactionFilter::from(MonthFilter { month: 7, year: 2024 }),
            summary: DashboardSummary {
                saldo_atual: 0.0,
                total_entradas_mes: 0.0,
                total_saidas_mes: 0.0,
                saldo_futuro: 0.0,
                contas_pagar: vec![],
                contas_receber: vec![],
            },
            transactions,
        }
    }

    fn render(transactions: Vec<Transaction>) -> Html {
        Html::parse_fragment(&transaction_table(&view(transactions)).unwrap().into_string())
    }

    fn must_get_button<'a>(html: &'a Html, row: usize, text: &str) -> ElementRef<'a> {
        let row_selector = Selector::parse("#transaction-table-body tr").unwrap();
        let button_selector = Selector::parse("button").unwrap();

        html.select(&row_selector)
            .nth(row)
            .unwrap_or_else(|| panic!("no row {row}"))
            .select(&button_selector)
            .find(|button| button.text().collect::<String>().trim() == text)
            .unwrap_or_else(|| panic!("no button {text:?} in row {row}"))
    }

    #[test]
    fn renders_one_row_per_transaction() {
        let html = render(vec![sample_transaction(1, false), sample_transaction(2, true)]);

        assert_eq!(select_text(&html, "#transaction-table-body tr").len(), 2);
    }

    #[test]
    fn empty_list_renders_empty_body() {
        let html = render(vec![]);

        assert_eq!(select_text(&html, "#transaction-table-body").len(), 1);
        assert!(select_text(&html, "#transaction-table-body tr").is_empty());
    }

    #[test]
    fn row_cells_show_transaction() {
        let html = render(vec![sample_transaction(1, true)]);

        let cells = select_text(&html, "#transaction-table-body td");
        assert_eq!(cells[0], "2024-07-15");
        assert_eq!(cells[1], "saida");
        assert_eq!(cells[2], "Aluguel");
        assert_eq!(cells[3], "Pix");
        assert_eq!(cells[4], "-");
        assert_eq!(cells[5], "R$ 1.234,50");
        assert_eq!(cells[6], "Pago/Recebido");
    }

    #[test]
    fn row_shows_description_and_unknown_method() {
        let transaction = Transaction {
            descricao: Some("Parcela 2/3".to_owned()),
            forma_pagamento: PaymentMethod::Other("boleto".to_owned()),
            ..sample_transaction(1, false)
        };

        let html = render(vec![transaction]);

        let cells = select_text(&html, "#transaction-table-body td");
        assert_eq!(cells[3], "boleto");
        assert_eq!(cells[4], "Parcela 2/3");
        assert_eq!(cells[6], "Pendente");
    }

    #[test]
    fn paid_row_offers_marking_pending() {
        let html = render(vec![sample_transaction(3, true)]);

        let button = must_get_button(&html, 0, "Marcar pendente");
        assert_hx_endpoint(&button, "/transactions/3?month=7&year=2024", "hx-patch");
        assert_eq!(button.value().attr("hx-vals"), Some(r#"{"pago": true}"#));
        assert_eq!(button.value().attr("hx-target"), Some("#dashboard-content"));
    }

    #[test]
    fn pending_row_offers_marking_paid() {
        let html = render(vec![sample_transaction(3, false)]);

        let button = must_get_button(&html, 0, "Marcar pago");
        assert_eq!(button.value().attr("hx-vals"), Some(r#"{"pago": false}"#));
    }

    #[test]
    fn delete_button_targets_transaction() {
        let html = render(vec![sample_transaction(1, false), sample_transaction(5, false)]);

        let button = must_get_button(&html, 1, "Excluir");
        assert_hx_endpoint(&button, "/transactions/5?month=7&year=2024", "hx-delete");
    }
}
