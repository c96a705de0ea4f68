use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::scroll_top::use_scroll_to_top;
use crate::components::section_title::SectionTitle;
use crate::Route;

const VALUES: [(&str, &str, &str); 4] = [
    ("🎯", "Results-Driven", "We focus on measurable outcomes that directly impact your bottom line"),
    ("🤝", "Client-Centric", "Your success is our success. We build lasting partnerships, not just projects"),
    ("💡", "Innovation", "We stay ahead of trends and technologies to give you a competitive edge"),
    ("🏆", "Excellence", "We deliver premium quality in every project, no matter the size"),
];

const HIGHLIGHTS: [(&str, &str); 3] = [
    ("8+", "Years Experience"),
    ("50+", "Projects Delivered"),
    ("98%", "Client Satisfaction"),
];

#[function_component(About)]
pub fn about() -> Html {
    use_scroll_to_top();

    html! {
        <div class="about-page">
            <section class="page-hero tall">
                <div class="page-hero-content fade-up">
                    <h1>{"About "}<span class="text-gradient">{"Ethovia"}</span></h1>
                    <p>{"We're a team of digital marketing experts committed to transforming businesses through innovative strategies."}</p>
                </div>
            </section>

            <section class="section">
                <div class="container about-mission">
                    <div class="about-mission-text fade-up">
                        <h2>{"Our Mission"}</h2>
                        <p>
                            {"At Ethovia, we believe every business deserves a digital presence that not only looks great but drives real results. Our mission is to bridge the gap between creative excellence and data-driven performance."}
                        </p>
                        <p>
                            {"We combine cutting-edge web development with strategic paid advertising to create holistic marketing solutions that scale with your business. Whether you're a startup finding your voice or an established brand looking to dominate your market, we're here to make it happen."}
                        </p>
                        <div class="about-highlights">
                            { for HIGHLIGHTS.iter().map(|(value, label)| html! {
                                <div class="about-highlight">
                                    <div class="about-highlight-value">{ *value }</div>
                                    <div class="about-highlight-label">{ *label }</div>
                                </div>
                            }) }
                        </div>
                    </div>
                    <div class="about-mission-image fade-up">
                        <img src="/images/about/about-mission.png" alt="Our mission" loading="lazy" />
                    </div>
                </div>
            </section>

            <section class="section light">
                <div class="container">
                    <SectionTitle title="Our Values" subtitle={Some(AttrValue::from("The principles that guide everything we do"))} />
                    <div class="card-grid">
                        { for VALUES.iter().map(|(icon, title, description)| html! {
                            <div class="card fade-up">
                                <div class="card-icon">{ *icon }</div>
                                <h3>{ *title }</h3>
                                <p>{ *description }</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container narrow">
                    <SectionTitle title="Meet Our Team" subtitle={Some(AttrValue::from("Talented professionals dedicated to your success"))} />
                    <p class="about-team-text fade-up">
                        {"Our diverse team brings together experts in web development, paid advertising, SEO, content strategy, and design. We're united by our passion for helping businesses grow and our commitment to delivering exceptional results."}
                    </p>
                    <div class="about-team-note">
                        <p class="about-team-note-title">{"We're Building Something Special"}</p>
                        <p>{"Team profiles and photos coming soon. We're currently expanding our team with top talent."}</p>
                    </div>
                </div>
            </section>

            <section class="cta-section">
                <div class="cta-section-inner fade-up">
                    <h2>{"Ready to Work Together?"}</h2>
                    <p>{"Let's create something amazing. Get in touch to discuss your project."}</p>
                    <Link<Route> to={Route::Contact} classes="cta-button large">
                        {"Get Started Today"}
                    </Link<Route>>
                </div>
            </section>

            <style>
                {r#"
                .about-mission {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .about-mission-text h2 {
                    font-size: 2.5rem;
                    color: #00024D;
                    margin-bottom: 1.5rem;
                }
                .about-mission-text p {
                    color: #4b5563;
                    line-height: 1.7;
                    margin-bottom: 1.25rem;
                }
                .about-highlights {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }
                .about-highlight {
                    padding: 0.75rem 1.5rem;
                    border-radius: 10px;
                    background: linear-gradient(90deg, rgba(26, 26, 46, 0.1), rgba(74, 159, 255, 0.1));
                }
                .about-highlight-value {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #00024D;
                }
                .about-highlight-label {
                    font-size: 0.875rem;
                    color: #4b5563;
                }
                .about-mission-image img {
                    width: 100%;
                    border-radius: 16px;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.2);
                }
                .about-team-text {
                    text-align: center;
                    color: #374151;
                    font-size: 1.125rem;
                    line-height: 1.7;
                    margin-bottom: 2rem;
                }
                .about-team-note {
                    text-align: center;
                    padding: 2rem;
                    border-radius: 12px;
                    background: linear-gradient(90deg, rgba(26, 26, 46, 0.1), rgba(74, 159, 255, 0.1));
                }
                .about-team-note-title {
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: #00024D;
                }
                @media (max-width: 900px) {
                    .about-mission {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
