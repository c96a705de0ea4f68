use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use super::nav::NAV_LINKS;
use crate::Route;

// Anchors into the services page, so plain hrefs rather than routes.
const SERVICE_LINKS: [(&str, &str); 4] = [
    ("Website Development", "/services#web-development"),
    ("Google Ads", "/services#google-ads"),
    ("Social Media Ads", "/services#social-ads"),
    ("Digital Strategy", "/services#strategy"),
];

pub const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("LinkedIn", "in"),
    ("Twitter", "𝕏"),
    ("Facebook", "f"),
    ("Instagram", "◎"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let current_year = chrono::Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <Link<Route> to={Route::Home} classes="footer-logo">
                        <img src="/images/logo/ethovia-logo.png" alt="Ethovia - Digital Marketing Agency" width="160" height="160" />
                    </Link<Route>>
                    <p>
                        {"Digital Marketing That Delivers Results."}<br/>
                        <span>{"Empowering brands with innovative web solutions and data-driven campaigns."}</span>
                    </p>
                    <div class="footer-social">
                        { for SOCIAL_LINKS.iter().map(|(label, glyph)| html! {
                            <a href="#" aria-label={*label}>{ *glyph }</a>
                        }) }
                    </div>
                </div>
                <div>
                    <h3>{"Quick Links"}</h3>
                    <ul>
                        { for NAV_LINKS.iter().map(|(name, route)| html! {
                            <li><Link<Route> to={route.clone()}>{ *name }</Link<Route>></li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h3>{"Services"}</h3>
                    <ul>
                        { for SERVICE_LINKS.iter().map(|(name, href)| html! {
                            <li><a href={*href}>{ *name }</a></li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h3>{"Get in Touch"}</h3>
                    <ul class="footer-contact">
                        <li>{"✉ "}<a href="mailto:hello@ethovia.com">{"hello@ethovia.com"}</a></li>
                        <li>{"☎ "}<a href="tel:+1234567890">{"+1 (234) 567-890"}</a></li>
                        <li>{"⌖ "}<span>{"123 Digital Avenue"}<br/>{"San Francisco, CA 94103"}</span></li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{ format!("© {} Ethovia Marketing Agency. All rights reserved.", current_year) }</p>
                <div class="legal-links">
                    <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                    <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
                </div>
            </div>
        </footer>
    }
}
