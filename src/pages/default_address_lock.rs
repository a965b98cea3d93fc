use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(DefaultAddressLock)]
pub fn default_address_lock() -> Html {
    html! {
        <div class="app-detail-page">
            <section class="app-detail-hero">
                <img
                    src="/resources/default_address_lock.png"
                    alt="Default Address Lock"
                    width="96"
                    height="96"
                />
                <h1>{"Default Address Lock"}</h1>
                <p class="app-detail-tagline">
                    {"Keep customer default addresses intact after orders"}
                </p>
                <div class="app-detail-ctas">
                    <a
                        href="https://apps.shopify.com/default-address-lock"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="install-button"
                    >
                        {"Install Free"}
                    </a>
                    <Link<Route> to={Route::DefaultAddressLockScreencast} classes="details-link">
                        {"Watch the screencast"}
                    </Link<Route>>
                </div>
            </section>

            <section class="app-detail-problem">
                <h2>{"The problem"}</h2>
                <p>
                    {"Every time a customer places an order, Shopify silently replaces their \
                      default address with the order's shipping address. For gift stores, B2B \
                      accounts and anyone shipping to multiple locations, the carefully \
                      maintained default gets clobbered again and again."}
                </p>
            </section>

            <section class="app-detail-features">
                <h2>{"What the app does"}</h2>
                <ul>
                    <li>{"Watches customer updates and detects when an order overwrote the default address"}</li>
                    <li>{"Restores the previous default automatically, within seconds"}</li>
                    <li>{"Leaves deliberate, manual address changes alone"}</li>
                    <li>{"No theme changes, no storefront impact, nothing for customers to see"}</li>
                </ul>
            </section>

            <section class="app-detail-cta-footer">
                <p>{"Questions before installing?"}</p>
                <a href="/#contact" class="cta-secondary">{"Get in touch →"}</a>
            </section>
        </div>
    }
}
