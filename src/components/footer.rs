use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-column">
                    <h3>{"Gemify"}</h3>
                    <p>{"Simple, powerful apps for Shopify merchants."}</p>
                </div>
                <div class="footer-column">
                    <h4>{"Apps"}</h4>
                    <ul>
                        <li>
                            <Link<Route> to={Route::BulkDeleteOrders}>
                                {"Bulk Delete Orders"}
                            </Link<Route>>
                        </li>
                        <li>
                            <Link<Route> to={Route::DefaultAddressLock}>
                                {"Default Address Lock"}
                            </Link<Route>>
                        </li>
                    </ul>
                </div>
                <div class="footer-column">
                    <h4>{"Company"}</h4>
                    <ul>
                        <li><a href="/#about">{"About"}</a></li>
                        <li><a href="/#contact">{"Contact"}</a></li>
                        <li><Link<Route> to={Route::Faq}>{"FAQ"}</Link<Route>></li>
                        <li>
                            <Link<Route> to={Route::PrivacyPolicy}>
                                {"Privacy Policy"}
                            </Link<Route>>
                        </li>
                    </ul>
                </div>
            </div>
            <div class="footer-legal">
                {"© 2026 Gemify. All rights reserved."}
            </div>
        </footer>
    }
}
