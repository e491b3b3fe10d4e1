//! Alert messages shown when an action succeeds or fails.
//!
//! Alerts are swapped into the page's alert container, so the rendered
//! markup is wrapped in an element with the container's ID. That way the
//! container survives whichever swap strategy the triggering element uses.

use maud::{Markup, html};

/// The ID of the element alerts are rendered into.
pub const ALERT_CONTAINER_ID: &str = "alert-container";

/// Pins the alert container to the bottom of the viewport.
pub const ALERT_CONTAINER_STYLE: &str = "position: fixed; bottom: 1rem; left: 50%; \
    transform: translateX(-50%); z-index: 9999;";

/// An alert to display to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    /// The action worked.
    Success {
        /// The headline.
        message: String,
        /// Extra information, may be empty.
        details: String,
    },
    /// The action failed.
    Error {
        /// The headline.
        message: String,
        /// What went wrong and what the user could try, may be empty.
        details: String,
    },
}

impl Alert {
    /// Render the alert inside the alert container.
    pub fn into_html(self) -> Markup {
        self.render(false)
    }

    /// Render the alert as an htmx out-of-band swap so it can ride along with
    /// another response.
    pub fn into_oob_html(self) -> Markup {
        self.render(true)
    }

    fn render(self, out_of_band: bool) -> Markup {
        let (container_style, message, details) = match self {
            Alert::Success { message, details } => (
                "p-4 mb-4 text-sm text-green-800 rounded-lg bg-green-50 \
                dark:bg-gray-800 dark:text-green-400",
                message,
                details,
            ),
            Alert::Error { message, details } => (
                "p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50 \
                dark:bg-gray-800 dark:text-red-400",
                message,
                details,
            ),
        };

        html! {
            div
                id=(ALERT_CONTAINER_ID)
                class="w-full max-w-md px-4"
                style=(ALERT_CONTAINER_STYLE)
                hx-swap-oob=[out_of_band.then_some("true")]
            {
                div class=(container_style) role="alert"
                {
                    span class="font-medium" { (message) }

                    @if !details.is_empty() {
                        " " (details)
                    }
                }
            }
        }
    }
}
