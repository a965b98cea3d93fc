use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(BulkDeleteOrders)]
pub fn bulk_delete_orders() -> Html {
    html! {
        <div class="app-detail-page">
            <section class="app-detail-hero">
                <img
                    src="/resources/bulk_delete_orders.png"
                    alt="Bulk Delete Orders"
                    width="96"
                    height="96"
                />
                <h1>{"Bulk Delete Orders"}</h1>
                <p class="app-detail-tagline">
                    {"Clean up test orders and unwanted data in seconds"}
                </p>
                <div class="app-detail-meta">
                    <span class="app-rating">{"★ 5.0"}</span>
                    <span class="app-installs">{"200+ installs"}</span>
                </div>
                <div class="app-detail-ctas">
                    <a
                        href="https://apps.shopify.com/bulk-delete-orders"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="install-button"
                    >
                        {"Install Free"}
                    </a>
                    <Link<Route> to={Route::BulkDeleteOrdersScreencast} classes="details-link">
                        {"Watch the screencast"}
                    </Link<Route>>
                </div>
            </section>

            <section class="app-detail-problem">
                <h2>{"The problem"}</h2>
                <p>
                    {"Test orders, spam and migration leftovers clutter your order list and \
                      skew your reports, and Shopify only lets you delete orders one at a \
                      time, after cancelling each one by hand."}
                </p>
            </section>

            <section class="app-detail-features">
                <h2>{"What the app does"}</h2>
                <ul>
                    <li>{"Filter orders by status, date range, tag, customer or amount"}</li>
                    <li>{"Preview exactly which orders match before anything is touched"}</li>
                    <li>{"Cancels each order automatically before deleting it"}</li>
                    <li>{"Runs as a background job; close the tab and come back later"}</li>
                    <li>{"Job History keeps a report of every deletion, exportable as CSV"}</li>
                </ul>
            </section>

            <section class="app-detail-cta-footer">
                <p>{"Questions before installing?"}</p>
                <a href="/#contact" class="cta-secondary">{"Get in touch →"}</a>
            </section>
        </div>
    }
}
