//! The "Get In Touch" section: Yew wiring around the contact form machine.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact::form::{ContactForm, Field, Lifecycle, MESSAGE_MAX_LEN};
use crate::contact::relay::ContactRelay;

const FAILURE_NOTICE: &str =
    "Oops! There was a problem sending your message. Please try again.";

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    /// Injected relay; defaults to the production web3forms sender.
    #[prop_or_default]
    pub relay: ContactRelay,
}

fn input_callback(
    form: &Rc<RefCell<ContactForm>>,
    version: &UseStateHandle<u32>,
    field: Field,
) -> Callback<InputEvent> {
    let form = form.clone();
    let version = version.clone();
    Callback::from(move |e: InputEvent| {
        let value = e.target_unchecked_into::<HtmlInputElement>().value();
        if form.borrow_mut().set_field(field, value) {
            version.set(*version + 1);
        }
    })
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    // The machine lives in one cell so the begin_submit guard is synchronous;
    // the version counter only drives re-renders.
    let form = use_mut_ref(ContactForm::new);
    let version = use_state(|| 0u32);

    let on_name = input_callback(&form, &version, Field::Name);
    let on_email = input_callback(&form, &version, Field::Email);
    let on_subject = input_callback(&form, &version, Field::Subject);
    let on_message = {
        let form = form.clone();
        let version = version.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            if form.borrow_mut().set_field(Field::Message, value) {
                version.set(*version + 1);
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let version = version.clone();
        let relay = props.relay.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(payload) = form.borrow_mut().begin_submit() else {
                return;
            };
            version.set(*version + 1);
            let form = form.clone();
            let version = version.clone();
            let relay = relay.clone();
            spawn_local(async move {
                let outcome = relay.submit(payload).await;
                let notify = form.borrow_mut().resolve(outcome);
                if notify {
                    if let Some(window) = window() {
                        let _ = window.alert_with_message(FAILURE_NOTICE);
                    }
                }
                version.set(*version + 1);
            });
        })
    };

    let (lifecycle, fields) = {
        let form = form.borrow();
        (form.lifecycle(), form.fields().clone())
    };
    let locked = lifecycle != Lifecycle::Editing;
    let message_len = fields.message.chars().count();

    html! {
        <section id="contact" class="contact-section">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{"Get In Touch"}</h2>
                    <p class="response-time">{"We typically respond within 24 hours"}</p>
                </div>

                <div class="contact-form-wrap">
                    if lifecycle == Lifecycle::Succeeded {
                        <div class="success-panel">
                            <div class="success-title">{"Thank You!"}</div>
                            <p>{"Your message has been sent successfully. We'll get back to you soon!"}</p>
                            <a href="#apps">{"Explore our apps while you wait →"}</a>
                        </div>
                    }

                    <form {onsubmit} class={classes!("contact-form", locked.then_some("locked"))}>
                        <div class="form-field">
                            <label>{"Name"}<span class="required-mark">{"*"}</span></label>
                            <input
                                type="text"
                                required={true}
                                placeholder="Your name"
                                value={fields.name.clone()}
                                oninput={on_name}
                                disabled={locked}
                            />
                        </div>

                        <div class="form-field">
                            <label>{"Email"}<span class="required-mark">{"*"}</span></label>
                            <input
                                type="email"
                                required={true}
                                placeholder="you@example.com"
                                value={fields.email.clone()}
                                oninput={on_email}
                                disabled={locked}
                            />
                        </div>

                        <div class="form-field">
                            <label>{"Subject"}<span class="required-mark">{"*"}</span></label>
                            <input
                                type="text"
                                required={true}
                                placeholder="How can we help?"
                                value={fields.subject.clone()}
                                oninput={on_subject}
                                disabled={locked}
                            />
                        </div>

                        <div class="form-field">
                            <div class="label-row">
                                <label>{"Message"}<span class="required-mark">{"*"}</span></label>
                                <span class="char-counter">
                                    { format!("{}/{}", message_len, MESSAGE_MAX_LEN) }
                                </span>
                            </div>
                            <textarea
                                required={true}
                                placeholder="Tell us more about your question or feedback..."
                                maxlength={MESSAGE_MAX_LEN.to_string()}
                                value={fields.message.clone()}
                                oninput={on_message}
                                disabled={locked}
                            />
                        </div>

                        <button type="submit" class="submit-button" disabled={locked}>
                            {
                                match lifecycle {
                                    Lifecycle::Editing => "Send Message",
                                    Lifecycle::Submitting => "Sending...",
                                    Lifecycle::Succeeded => "Message Sent",
                                }
                            }
                        </button>

                        <p class="privacy-note">
                            {"Your information is secure and will never be shared"}
                        </p>
                    </form>
                </div>
            </div>
        </section>
    }
}
