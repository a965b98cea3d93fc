use yew::prelude::*;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="privacy-page">
            <div class="page-header">
                <h1>{"Privacy Policy"}</h1>
                <p class="last-updated">{"Last updated: January 2026"}</p>
            </div>

            <div class="policy-body">
                <section id="data-we-collect">
                    <h2>{"Data We Collect"}</h2>
                    <p>
                        {"Our apps request only the Shopify API scopes they need to function: \
                          order data for Bulk Delete Orders and customer address data for \
                          Default Address Lock. We do not collect storefront visitor data, \
                          payment details or analytics about your customers."}
                    </p>
                </section>

                <section id="how-we-use-data">
                    <h2>{"How We Use Data"}</h2>
                    <p>
                        {"Store data is processed solely to perform the action you requested \
                          inside the app, such as deleting the orders you selected or restoring \
                          a customer's default address. We never sell data or share it with \
                          third parties for marketing."}
                    </p>
                </section>

                <section id="contact-form">
                    <h2>{"Contact Form"}</h2>
                    <p>
                        {"Messages sent through our contact form are delivered to us by a form \
                          relay service. The relay receives the name, email address, subject and \
                          message you typed, and nothing else. We keep your message only as long \
                          as needed to respond to it."}
                    </p>
                </section>

                <section id="data-retention">
                    <h2>{"Data Retention"}</h2>
                    <p>
                        {"Job history inside Bulk Delete Orders is retained for 90 days so you \
                          can export reports, then deleted. Uninstalling an app removes all data \
                          associated with your store within 48 hours, per Shopify's mandatory \
                          webhooks."}
                    </p>
                </section>

                <section id="questions">
                    <h2>{"Questions"}</h2>
                    <p>
                        {"If you have questions about this policy, reach us through the "}
                        <a href="/#contact">{"contact form"}</a>
                        {"."}
                    </p>
                </section>
            </div>
        </div>
    }
}
