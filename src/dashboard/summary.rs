//! The balance cards and the lists of pending payables and receivables.

use maud::{Markup, html};

use crate::{
    currency::format_brl,
    html::{CARD_STYLE, TAG_WARN_STYLE},
    model::{DashboardSummary, PendingItem},
};

/// Shown instead of an empty payables list.
pub const NO_PAYABLES_TEXT: &str = "Sem contas a pagar pendentes.";
/// Shown instead of an empty receivables list.
pub const NO_RECEIVABLES_TEXT: &str = "Sem contas a receber pendentes.";

/// Renders the four totals and the two pending lists.
pub(super) fn summary_view(summary: &DashboardSummary) -> Markup {
    html! {
        section id="summary" class="w-full mb-8"
        {
            div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4 mb-6"
            {
                (balance_card("saldo-atual", "Saldo atual", summary.saldo_atual))
                (balance_card("entradas-mes", "Entradas do mês", summary.total_entradas_mes))
                (balance_card("saidas-mes", "Saídas do mês", summary.total_saidas_mes))
                (balance_card("saldo-futuro", "Saldo futuro", summary.saldo_futuro))
            }

            div class="grid grid-cols-1 md:grid-cols-2 gap-4"
            {
                div class=(CARD_STYLE)
                {
                    h3 class="text-lg font-semibold mb-3" { "Contas a pagar" }
                    (pending_list("contas-pagar", &summary.contas_pagar, NO_PAYABLES_TEXT))
                }

                div class=(CARD_STYLE)
                {
                    h3 class="text-lg font-semibold mb-3" { "Contas a receber" }
                    (pending_list("contas-receber", &summary.contas_receber, NO_RECEIVABLES_TEXT))
                }
            }
        }
    }
}

fn balance_card(id: &str, title: &str, amount: f64) -> Markup {
    html! {
        div class=(CARD_STYLE)
        {
            h4 class="text-sm text-gray-600 dark:text-gray-400 mb-1" { (title) }
            div id=(id) class="text-2xl font-bold" { (format_brl(amount)) }
        }
    }
}

/// Renders `items`, or a single placeholder item with `empty_text` when there
/// are none.
fn pending_list(id: &str, items: &[PendingItem], empty_text: &str) -> Markup {
    html! {
        ul id=(id) class="space-y-2"
        {
            @if items.is_empty() {
                li class="list-item text-gray-600 dark:text-gray-400" { (empty_text) }
            } @else {
                @for item in items {
                    (pending_item(item))
                }
            }
        }
    }
}

fn pending_item(item: &PendingItem) -> Markup {
    let class = if item.vencida {
        "list-item vencida pl-3"
    } else {
        "list-item pl-3"
    };

    html! {
        li class=(class)
        {
            strong { (format_brl(item.valor)) }
            " - " (item.categoria)
            br;
            small { (item.data) " • " (item.forma_pagamento.label()) }

            @if let Some(descricao) = item.descricao.as_deref().filter(|text| !text.is_empty()) {
                br;
                small { (descricao) }
            }

            @if item.vencida {
                br;
                span class=(TAG_WARN_STYLE) { "VENCIDA" }
            }
        }
    }
}
