use maud::{Markup, html};

use crate::{
    Error,
    controller::DashboardView,
    dashboard::summary::summary_view,
    endpoints,
    filter::filter_form,
    html::{PAGE_CONTAINER_STYLE, base},
    transaction::{transaction_form, transaction_table},
};

/// The ID of the element every dashboard interaction swaps.
const DASHBOARD_CONTENT_ID: &str = "dashboard-content";

/// Renders everything below the page header for `view`.
///
/// The create form is always rendered empty, so swapping this in after a
/// successful create also resets the form.
pub fn dashboard_content(view: &DashboardView) -> Result<Markup, Error> {
    let create_form = transaction_form(&view.filter)?;
    let table = transaction_table(view)?;

    Ok(html! {
        div id=(DASHBOARD_CONTENT_ID) class="w-full"
        {
            (filter_form(&view.filter, endpoints::DASHBOARD_CONTENT))

            (summary_view(&view.summary))

            section class="w-full mb-8"
            {
                h2 class="text-xl font-bold mb-4" { "Novo lançamento" }
                (create_form)
            }

            section class="w-full"
            {
                h2 class="text-xl font-bold mb-4" { "Lançamentos" }
                (table)
            }
        }
    })
}

/// Renders the full dashboard page for `view`.
pub fn dashboard_page(view: &DashboardView) -> Result<Markup, Error> {
    let content = dashboard_content(view)?;

    let page = html! {
        div class=(PAGE_CONTAINER_STYLE)
        {
            header class="mb-6"
            {
                h1 class="text-3xl font-bold" { "Controle Financeiro" }
                p class="text-gray-600 dark:text-gray-400"
                {
                    "Resumo de " (format!("{:02}/{}", view.filter.month, view.filter.year))
                }
            }

            (content)
        }
    };

    Ok(base("Painel", &page))
}
