use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(DefaultAddressLockScreencast)]
pub fn default_address_lock_screencast() -> Html {
    html! {
        <div class="screencast-page">
            <div class="page-header">
                <h1>{"Default Address Lock — Screencast"}</h1>
                <p>{"A two-minute walkthrough of installing and using the app."}</p>
            </div>
            <div class="screencast-frame">
                <video
                    src="/resources/default_address_lock_screencast.mp4"
                    controls={true}
                    preload="metadata"
                />
            </div>
            <Link<Route> to={Route::DefaultAddressLock} classes="back-link">
                {"← Back to Default Address Lock"}
            </Link<Route>>
        </div>
    }
}
