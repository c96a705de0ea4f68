use contracts::{Budget, Field, FieldErrors, Service};
use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::footer::SOCIAL_LINKS;
use crate::components::scroll_top::use_scroll_to_top;
use crate::config::CONTACT_SUCCESS_DISMISS_MS;
use crate::contact::api;
use crate::contact::form::{ContactForm, Finish, SubmissionState, SubmitRefused};

const CONTACT_DETAILS: [(&str, &str, &str); 4] = [
    ("✉", "Email", "hello@ethovia.com"),
    ("☎", "Phone", "+1 (234) 567-890"),
    ("⌖", "Address", "123 Digital Avenue, San Francisco, CA 94103"),
    ("◷", "Business Hours", "Mon - Fri: 9:00 AM - 6:00 PM\nSat - Sun: Closed"),
];

fn field_error(errors: &FieldErrors, field: Field) -> Html {
    match errors.get(field) {
        Some(message) => html! { <p class="form-error">{ message.to_string() }</p> },
        None => html! {},
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    use_scroll_to_top();
    let form = use_mut_ref(ContactForm::new);
    let rerender = use_force_update();

    // Late transport results and dismissals must not touch an unmounted page.
    {
        let form = form.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    form.borrow_mut().invalidate();
                }
            },
            (),
        );
    }

    let edit = {
        let form = form.clone();
        let rerender = rerender.clone();
        Callback::from(move |(field, value): (Field, String)| {
            form.borrow_mut().edit(field, value);
            rerender.force_update();
        })
    };

    let onsubmit = {
        let form = form.clone();
        let rerender = rerender.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let begun = form.borrow_mut().begin_submit();
            match begun {
                Ok((request, ticket)) => {
                    rerender.force_update();
                    let form = form.clone();
                    let rerender = rerender.clone();
                    spawn_local(async move {
                        let outcome = api::submit(&request).await;
                        let finished = form.borrow_mut().finish(ticket, outcome);
                        match finished {
                            Finish::Stale => debug!("Dropping stale contact result"),
                            Finish::Failed => rerender.force_update(),
                            Finish::Succeeded(ticket) => {
                                rerender.force_update();
                                TimeoutFuture::new(CONTACT_SUCCESS_DISMISS_MS).await;
                                if form.borrow_mut().dismiss(ticket) {
                                    rerender.force_update();
                                }
                            }
                        }
                    });
                }
                Err(SubmitRefused::InFlight) => debug!("Submission already in flight"),
                Err(SubmitRefused::Invalid(errors)) => {
                    info!("Contact form rejected: {}", errors);
                    rerender.force_update();
                }
            }
        })
    };

    let current = form.borrow();
    let draft = current.draft();
    let errors = current.errors();
    let submitting = current.is_submit_disabled();

    let banner = match current.state() {
        SubmissionState::Submitted => html! {
            <div class="form-banner success" role="status">
                <span class="form-banner-icon">{"✓"}</span>
                <div>
                    <p class="form-banner-title">{"Message Sent Successfully!"}</p>
                    <p>{"We'll get back to you within 24 hours."}</p>
                </div>
            </div>
        },
        SubmissionState::Failed(message) => html! {
            <div class="form-banner failure" role="alert">
                <span class="form-banner-icon">{"!"}</span>
                <div>
                    <p class="form-banner-title">{"Message Not Sent"}</p>
                    <p>{ message.clone() }</p>
                </div>
            </div>
        },
        SubmissionState::Idle | SubmissionState::Submitting => html! {},
    };

    html! {
        <div class="contact-page">
            <section class="page-hero">
                <div class="page-hero-content fade-up">
                    <h1>{"Get in "}<span class="text-gradient">{"Touch"}</span></h1>
                    <p>{"Let's discuss your project and how we can help you achieve your goals"}</p>
                </div>
            </section>

            <section class="section light">
                <div class="container contact-layout">
                    <div class="contact-form-card fade-up">
                        <h2>{"Send Us a Message"}</h2>
                        { banner }
                        <form {onsubmit} novalidate={true}>
                            <div class="form-row">
                                <div class="form-group">
                                    <label for="name">{"Name *"}</label>
                                    <input
                                        id="name"
                                        type="text"
                                        placeholder="Your full name"
                                        value={draft.name.clone()}
                                        class={classes!(errors.get(Field::Name).is_some().then(|| "invalid"))}
                                        oninput={edit.reform(|e: InputEvent| (Field::Name, e.target_unchecked_into::<HtmlInputElement>().value()))}
                                    />
                                    { field_error(errors, Field::Name) }
                                </div>
                                <div class="form-group">
                                    <label for="email">{"Email *"}</label>
                                    <input
                                        id="email"
                                        type="email"
                                        placeholder="your@email.com"
                                        value={draft.email.clone()}
                                        class={classes!(errors.get(Field::Email).is_some().then(|| "invalid"))}
                                        oninput={edit.reform(|e: InputEvent| (Field::Email, e.target_unchecked_into::<HtmlInputElement>().value()))}
                                    />
                                    { field_error(errors, Field::Email) }
                                </div>
                            </div>

                            <div class="form-group">
                                <label for="phone">{"Phone (Optional)"}</label>
                                <input
                                    id="phone"
                                    type="tel"
                                    placeholder="+1 (234) 567-890"
                                    value={draft.field_value(Field::Phone).to_string()}
                                    oninput={edit.reform(|e: InputEvent| (Field::Phone, e.target_unchecked_into::<HtmlInputElement>().value()))}
                                />
                            </div>

                            <div class="form-row">
                                <div class="form-group">
                                    <label for="service">{"Service Interested In *"}</label>
                                    <select
                                        id="service"
                                        class={classes!(errors.get(Field::Service).is_some().then(|| "invalid"))}
                                        onchange={edit.reform(|e: Event| (Field::Service, e.target_unchecked_into::<HtmlSelectElement>().value()))}
                                    >
                                        <option value="" selected={draft.service.is_empty()}>{"Select a service"}</option>
                                        { for Service::ALL.iter().map(|service| html! {
                                            <option value={service.as_str()} selected={draft.service == service.as_str()}>
                                                { service.label() }
                                            </option>
                                        }) }
                                    </select>
                                    { field_error(errors, Field::Service) }
                                </div>
                                <div class="form-group">
                                    <label for="budget">{"Budget Range *"}</label>
                                    <select
                                        id="budget"
                                        class={classes!(errors.get(Field::Budget).is_some().then(|| "invalid"))}
                                        onchange={edit.reform(|e: Event| (Field::Budget, e.target_unchecked_into::<HtmlSelectElement>().value()))}
                                    >
                                        <option value="" selected={draft.budget.is_empty()}>{"Select budget range"}</option>
                                        { for Budget::ALL.iter().map(|budget| html! {
                                            <option value={budget.as_str()} selected={draft.budget == budget.as_str()}>
                                                { budget.label() }
                                            </option>
                                        }) }
                                    </select>
                                    { field_error(errors, Field::Budget) }
                                </div>
                            </div>

                            <div class="form-group">
                                <label for="message">{"Message *"}</label>
                                <textarea
                                    id="message"
                                    rows="6"
                                    placeholder="Tell us about your project..."
                                    value={draft.message.clone()}
                                    class={classes!(errors.get(Field::Message).is_some().then(|| "invalid"))}
                                    oninput={edit.reform(|e: InputEvent| (Field::Message, e.target_unchecked_into::<HtmlTextAreaElement>().value()))}
                                />
                                { field_error(errors, Field::Message) }
                            </div>

                            <button type="submit" class="cta-button large form-submit" disabled={submitting}>
                                {
                                    if submitting {
                                        html! { <><span class="spinner"></span>{"Sending..."}</> }
                                    } else {
                                        html! { <>{"Send Message ➤"}</> }
                                    }
                                }
                            </button>
                        </form>
                    </div>

                    <aside class="contact-sidebar fade-up">
                        <div class="contact-info-card">
                            <h3>{"Contact Information"}</h3>
                            { for CONTACT_DETAILS.iter().map(|(icon, title, value)| html! {
                                <div class="contact-info-item">
                                    <span class="contact-info-icon">{ *icon }</span>
                                    <div>
                                        <p class="contact-info-title">{ *title }</p>
                                        { for value.lines().map(|line| html! { <p>{ line }</p> }) }
                                    </div>
                                </div>
                            }) }
                        </div>
                        <div class="contact-info-card">
                            <h3>{"Follow Us"}</h3>
                            <div class="contact-social">
                                { for SOCIAL_LINKS.iter().map(|(name, glyph)| html! {
                                    <a href="#" aria-label={*name}>
                                        <span class="contact-social-glyph">{ *glyph }</span>{ *name }
                                    </a>
                                }) }
                            </div>
                        </div>
                    </aside>
                </div>
            </section>

            <style>
                {r#"
                .contact-layout {
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 2.5rem;
                    align-items: start;
                }
                .contact-form-card {
                    padding: 2.5rem;
                    border-radius: 16px;
                    background: #fff;
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.08);
                }
                .contact-form-card h2 {
                    font-size: 2rem;
                    color: #00024D;
                    margin-bottom: 1.5rem;
                }
                .form-banner {
                    display: flex;
                    gap: 1rem;
                    padding: 1rem 1.25rem;
                    border-radius: 12px;
                    margin-bottom: 1.5rem;
                    animation: fade-up 0.4s ease both;
                }
                .form-banner.success {
                    background: #ecfdf5;
                    border: 1px solid #a7f3d0;
                    color: #065f46;
                }
                .form-banner.failure {
                    background: #fef2f2;
                    border: 1px solid #fecaca;
                    color: #991b1b;
                }
                .form-banner-title {
                    font-weight: 700;
                }
                .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }
                .form-group {
                    display: flex;
                    flex-direction: column;
                    margin-bottom: 1.5rem;
                }
                .form-group label {
                    font-weight: 600;
                    color: #374151;
                    margin-bottom: 0.5rem;
                }
                .form-group input,
                .form-group select,
                .form-group textarea {
                    padding: 0.875rem 1rem;
                    border-radius: 10px;
                    border: 1px solid #d1d5db;
                    font: inherit;
                    transition: border-color 0.2s ease, box-shadow 0.2s ease;
                }
                .form-group input:focus,
                .form-group select:focus,
                .form-group textarea:focus {
                    outline: none;
                    border-color: #4A9FFF;
                    box-shadow: 0 0 0 3px rgba(74, 159, 255, 0.2);
                }
                .form-group .invalid {
                    border-color: #ef4444;
                }
                .form-error {
                    color: #ef4444;
                    font-size: 0.875rem;
                    margin-top: 0.35rem;
                }
                .form-submit {
                    width: 100%;
                    border: none;
                    cursor: pointer;
                }
                .form-submit:disabled {
                    opacity: 0.6;
                    cursor: not-allowed;
                }
                .spinner {
                    display: inline-block;
                    width: 1rem;
                    height: 1rem;
                    margin-right: 0.5rem;
                    border: 2px solid rgba(255, 255, 255, 0.4);
                    border-top-color: #fff;
                    border-radius: 50%;
                    animation: spin 0.8s linear infinite;
                    vertical-align: middle;
                }
                @keyframes spin {
                    to { transform: rotate(360deg); }
                }
                .contact-sidebar {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .contact-info-card {
                    padding: 2rem;
                    border-radius: 16px;
                    background: linear-gradient(135deg, #00024D, #1A1A2E);
                    color: #fff;
                }
                .contact-info-card h3 {
                    font-size: 1.25rem;
                    margin-bottom: 1.5rem;
                }
                .contact-info-item {
                    display: flex;
                    gap: 1rem;
                    margin-bottom: 1.25rem;
                }
                .contact-info-icon {
                    flex-shrink: 0;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 10px;
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(74, 159, 255, 0.2);
                }
                .contact-info-title {
                    font-weight: 600;
                }
                .contact-info-item p {
                    color: rgba(255, 255, 255, 0.8);
                }
                .contact-social {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                }
                .contact-social a {
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.1);
                    color: #fff;
                    text-decoration: none;
                }
                .contact-social-glyph {
                    margin-right: 0.5rem;
                    font-weight: 700;
                }
                .contact-social a:hover {
                    background: rgba(74, 159, 255, 0.4);
                }
                @media (max-width: 900px) {
                    .contact-layout,
                    .form-row {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
