//! FAQ page: an accordion of questions, each addressable by id so hash links
//! like `/faq#refunds` land on the right item.

use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    id: String,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div id={props.id.clone()} class={classes!("faq-item", (*is_open).then_some("open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{props.question.clone()}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            if *is_open {
                <div class="faq-answer">
                    { for props.children.iter() }
                </div>
            }
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <div class="faq-page">
            <div class="page-header">
                <h1>{"Frequently Asked Questions"}</h1>
                <p>{"Answers about our apps, billing and support."}</p>
            </div>

            <div class="faq-list">
                <FaqItem question="Are the apps really free to install?" id="pricing">
                    <p>
                        {"Yes. Both apps install free from the Shopify App Store. Bulk Delete \
                          Orders charges only for large deletion jobs; Default Address Lock is \
                          free while in early access."}
                    </p>
                </FaqItem>

                <FaqItem question="Can deleted orders be recovered?" id="recovery">
                    <p>
                        {"No. Deletion through the Shopify API is permanent, which is why Bulk \
                          Delete Orders shows a full preview of the matched orders and asks for \
                          confirmation before any job starts."}
                    </p>
                </FaqItem>

                <FaqItem question="Does Bulk Delete Orders cancel orders first?" id="cancellation">
                    <p>
                        {"Yes. Shopify only allows deleting cancelled orders, so the app cancels \
                          each matched order automatically before deleting it. No manual steps."}
                    </p>
                </FaqItem>

                <FaqItem
                    question="Why do my customers' default addresses change after an order?"
                    id="address-overwrite"
                >
                    <p>
                        {"Shopify sets the shipping address of the most recent order as the \
                          customer's new default. For gift stores and B2B accounts that is \
                          rarely what anyone wants. Default Address Lock detects the overwrite \
                          and restores the previous default automatically."}
                    </p>
                </FaqItem>

                <FaqItem question="Will the apps slow down my storefront?" id="performance">
                    <p>
                        {"No. Both apps work entirely through Shopify's admin API in the \
                          background and inject nothing into your storefront theme."}
                    </p>
                </FaqItem>

                <FaqItem question="What data do the apps access?" id="data-access">
                    <p>
                        {"Only the scopes each app needs: orders for Bulk Delete Orders, \
                          customers for Default Address Lock. See our "}
                        <a href="/privacy-policy">{"privacy policy"}</a>
                        {" for details."}
                    </p>
                </FaqItem>

                <FaqItem question="How do I get support?" id="support">
                    <p>
                        {"Use the "}
                        <a href="/#contact">{"contact form"}</a>
                        {" and we'll get back to you, typically within 24 hours."}
                    </p>
                </FaqItem>
            </div>
        </div>
    }
}
