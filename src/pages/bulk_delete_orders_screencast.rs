use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(BulkDeleteOrdersScreencast)]
pub fn bulk_delete_orders_screencast() -> Html {
    html! {
        <div class="screencast-page">
            <div class="page-header">
                <h1>{"Bulk Delete Orders — Screencast"}</h1>
                <p>{"Watch a full deletion job, from filtering to the Job History report."}</p>
            </div>
            <div class="screencast-frame">
                <video
                    src="/resources/bulk_delete_orders_screencast.mp4"
                    controls={true}
                    preload="metadata"
                />
            </div>
            <Link<Route> to={Route::BulkDeleteOrders} classes="back-link">
                {"← Back to Bulk Delete Orders"}
            </Link<Route>>
        </div>
    }
}
