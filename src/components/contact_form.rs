use gloo_console::log;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::Severity;
use crate::contact::{self, FormSubmission, SubmissionEndpoint, CASE_TYPES};

const SUCCESS_MESSAGE: &str = "Thank you for your message! I will get back to you within 24 hours.";
const SEND_FAILED_MESSAGE: &str =
    "Something went wrong while sending your message. Please try again later.";

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    /// Feedback channel to the page's notification host.
    pub on_notify: Callback<(String, Severity)>,
    /// Where validated submissions go. Defaults to the simulated send.
    #[prop_or(SubmissionEndpoint::Simulated)]
    pub endpoint: SubmissionEndpoint,
}

/// Contact form controller: reads the four controls at submit time, runs the
/// fixed-order validation, and drives the sending state around the endpoint
/// call. Every outcome surfaces as exactly one notification.
#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let sending = use_state(|| false);
    let form_ref = use_node_ref();
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let case_type_ref = use_node_ref();
    let message_ref = use_node_ref();

    let onsubmit = {
        let sending = sending.clone();
        let form_ref = form_ref.clone();
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let case_type_ref = case_type_ref.clone();
        let message_ref = message_ref.clone();
        let on_notify = props.on_notify.clone();
        let endpoint = props.endpoint.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *sending {
                return;
            }

            let submission = FormSubmission {
                name: name_ref
                    .cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default(),
                email: email_ref
                    .cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default(),
                case_type: case_type_ref
                    .cast::<HtmlSelectElement>()
                    .map(|select| select.value())
                    .unwrap_or_default(),
                message: message_ref
                    .cast::<HtmlTextAreaElement>()
                    .map(|area| area.value())
                    .unwrap_or_default(),
            };

            if let Err(error) = contact::validate(&submission) {
                on_notify.emit((error.user_message().to_string(), Severity::Error));
                return;
            }

            sending.set(true);

            let sending = sending.clone();
            let form_ref = form_ref.clone();
            let on_notify = on_notify.clone();
            let endpoint = endpoint.clone();
            spawn_local(async move {
                match endpoint.send(&submission).await {
                    Ok(()) => {
                        log!("Contact submission accepted");
                        on_notify.emit((SUCCESS_MESSAGE.to_string(), Severity::Success));
                        if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                            form.reset();
                        }
                    }
                    Err(error) => {
                        // Field values are left intact so the visitor can
                        // resend; no automatic retry.
                        log!("Contact submission failed:", format!("{error:?}"));
                        on_notify.emit((SEND_FAILED_MESSAGE.to_string(), Severity::Error));
                    }
                }
                sending.set(false);
            });
        })
    };

    html! {
        <form class="contact-form" ref={form_ref} {onsubmit}>
            <div class="form-group">
                <label for="contact-name">{"Name"}</label>
                <input
                    id="contact-name"
                    name="name"
                    type="text"
                    ref={name_ref}
                    placeholder="Your full name"
                />
            </div>
            <div class="form-group">
                <label for="contact-email">{"Email"}</label>
                <input
                    id="contact-email"
                    name="email"
                    type="email"
                    ref={email_ref}
                    placeholder="you@example.com"
                />
            </div>
            <div class="form-group">
                <label for="contact-case-type">{"How can I help?"}</label>
                <select id="contact-case-type" name="case-type" ref={case_type_ref}>
                    <option value="" selected=true>{"Select a matter"}</option>
                    {
                        CASE_TYPES.iter().map(|(value, label)| html! {
                            <option key={*value} value={*value}>{*label}</option>
                        }).collect::<Html>()
                    }
                </select>
            </div>
            <div class="form-group">
                <label for="contact-message">{"Message"}</label>
                <textarea
                    id="contact-message"
                    name="message"
                    rows="6"
                    ref={message_ref}
                    placeholder="Tell me briefly about your situation"
                />
            </div>
            <button type="submit" class="btn-submit" disabled={*sending}>
                {
                    if *sending {
                        html! { <span>{"Sending..."}</span> }
                    } else {
                        html! { <span>{"Send Message"}</span> }
                    }
                }
            </button>
        </form>
    }
}
