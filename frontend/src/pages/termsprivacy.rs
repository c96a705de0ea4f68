use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::scroll_top::use_scroll_to_top;
use crate::Route;

const LAST_UPDATED: &str = "January 2025";

const TERMS: [(&str, &str); 5] = [
    (
        "1. Services",
        "Ethovia provides website development, paid advertising management and digital strategy services. The scope, deliverables and fees of each engagement are set out in a separate written proposal.",
    ),
    (
        "2. Client Responsibilities",
        "You agree to provide accurate information, timely feedback and access to the accounts and assets we need to deliver the agreed work.",
    ),
    (
        "3. Advertising Spend",
        "Media budgets for Google Ads and social platforms are paid directly to the respective platform and are separate from our management fees. Campaign results depend on factors outside our control and are not guaranteed.",
    ),
    (
        "4. Intellectual Property",
        "Upon full payment, you own the final deliverables created for you. We may reference the project in our portfolio unless agreed otherwise in writing.",
    ),
    (
        "5. Limitation of Liability",
        "Our liability for any claim arising from our services is limited to the fees paid for the engagement in question.",
    ),
];

const PRIVACY: [(&str, &str); 4] = [
    (
        "Information We Collect",
        "When you use our contact form we collect your name, email address, optional phone number, the service you are interested in, your budget range and your message.",
    ),
    (
        "How We Use It",
        "We use this information only to respond to your enquiry and to prepare a proposal. We do not sell or share it with third parties for marketing.",
    ),
    (
        "Retention",
        "Enquiries that do not lead to an engagement are deleted within 12 months.",
    ),
    (
        "Your Rights",
        "You can ask us at any time to access, correct or delete the information you sent us by writing to hello@ethovia.com.",
    ),
];

fn legal_page(title: &str, sections: &[(&str, &str)]) -> Html {
    html! {
        <div class="legal-page">
            <section class="page-hero">
                <div class="page-hero-content fade-up">
                    <h1>{ title.to_string() }</h1>
                    <p>{ format!("Last updated: {}", LAST_UPDATED) }</p>
                </div>
            </section>
            <section class="section">
                <div class="container narrow legal-content">
                    { for sections.iter().map(|(heading, body)| html! {
                        <>
                            <h2>{ *heading }</h2>
                            <p>{ *body }</p>
                        </>
                    }) }
                    <p class="legal-contact">
                        {"Questions? "}
                        <Link<Route> to={Route::Contact} classes="text-link">{"Get in touch"}</Link<Route>>
                    </p>
                </div>
            </section>
            <style>
                {r#"
                .legal-content h2 {
                    font-size: 1.5rem;
                    color: #00024D;
                    margin: 2.5rem 0 0.75rem;
                }
                .legal-content p {
                    color: #374151;
                    line-height: 1.8;
                }
                .legal-contact {
                    margin-top: 3rem;
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(TermsAndConditions)]
pub fn terms() -> Html {
    use_scroll_to_top();
    legal_page("Terms of Service", &TERMS)
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    use_scroll_to_top();
    legal_page("Privacy Policy", &PRIVACY)
}
