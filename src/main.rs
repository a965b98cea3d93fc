mod components;
mod config;
mod contact;
mod pages;

use yew::prelude::*;
use yew_router::prelude::*;

use components::footer::Footer;
use components::scroll_to_hash::ScrollToHash;
use pages::bulk_delete_orders::BulkDeleteOrders;
use pages::bulk_delete_orders_screencast::BulkDeleteOrdersScreencast;
use pages::default_address_lock::DefaultAddressLock;
use pages::default_address_lock_screencast::DefaultAddressLockScreencast;
use pages::faq::Faq;
use pages::home::Home;
use pages::privacy_policy::PrivacyPolicy;

/// Exact-match route table. Every path maps to exactly one page; unknown
/// paths render nothing here and are left to the host's not-found handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/faq")]
    Faq,
    #[at("/privacy-policy")]
    PrivacyPolicy,
    #[at("/apps/default-address-lock")]
    DefaultAddressLock,
    #[at("/apps/default-address-lock/screencast")]
    DefaultAddressLockScreencast,
    #[at("/apps/bulk-delete-orders")]
    BulkDeleteOrders,
    #[at("/apps/bulk-delete-orders/screencast")]
    BulkDeleteOrdersScreencast,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! {
            <>
                <Home />
                <Footer />
            </>
        },
        Route::Faq => html! { <Faq /> },
        Route::PrivacyPolicy => html! { <PrivacyPolicy /> },
        Route::DefaultAddressLock => html! { <DefaultAddressLock /> },
        Route::DefaultAddressLockScreencast => html! { <DefaultAddressLockScreencast /> },
        Route::BulkDeleteOrders => html! { <BulkDeleteOrders /> },
        Route::BulkDeleteOrdersScreencast => html! { <BulkDeleteOrdersScreencast /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <ScrollToHash />
            <div class="site-shell">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("gemify-site starting");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::Route;
    use yew_router::Routable;

    #[test]
    fn every_defined_path_resolves_to_its_page() {
        let table = [
            ("/", Route::Home),
            ("/faq", Route::Faq),
            ("/privacy-policy", Route::PrivacyPolicy),
            ("/apps/default-address-lock", Route::DefaultAddressLock),
            (
                "/apps/default-address-lock/screencast",
                Route::DefaultAddressLockScreencast,
            ),
            ("/apps/bulk-delete-orders", Route::BulkDeleteOrders),
            (
                "/apps/bulk-delete-orders/screencast",
                Route::BulkDeleteOrdersScreencast,
            ),
        ];
        for (path, expected) in table {
            assert_eq!(Route::recognize(path), Some(expected), "path {path}");
        }
    }

    #[test]
    fn routes_render_their_own_path() {
        assert_eq!(Route::BulkDeleteOrders.to_path(), "/apps/bulk-delete-orders");
        assert_eq!(Route::Home.to_path(), "/");
    }

    #[test]
    fn unknown_paths_resolve_to_nothing() {
        assert_eq!(Route::recognize("/apps"), None);
        assert_eq!(Route::recognize("/pricing"), None);
        assert_eq!(Route::recognize("/apps/default-address-lock/docs"), None);
    }
}
