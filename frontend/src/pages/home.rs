use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::featured_work::FeaturedWork;
use crate::components::scroll_top::use_scroll_to_top;
use crate::components::section_title::SectionTitle;
use crate::Route;

struct Card {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const SERVICES: [Card; 4] = [
    Card {
        icon: "</>",
        title: "Website Development",
        description: "Custom websites that are fast, beautiful, and conversion-focused",
    },
    Card {
        icon: "🔍",
        title: "Google Ads Management",
        description: "Data-driven campaigns that maximize ROI and reduce cost per acquisition",
    },
    Card {
        icon: "📣",
        title: "Social Media Advertising",
        description: "Reach your audience on Facebook, TikTok, Instagram with precision targeting",
    },
    Card {
        icon: "🧭",
        title: "Digital Strategy",
        description: "Comprehensive marketing strategies aligned with your business goals",
    },
];

const PROCESS: [Card; 4] = [
    Card {
        icon: "01",
        title: "Discover",
        description: "We analyze your business, competitors, and target audience to create a solid foundation for success",
    },
    Card {
        icon: "02",
        title: "Design",
        description: "Creative concepts that align with your brand and goals, ensuring maximum impact and engagement",
    },
    Card {
        icon: "03",
        title: "Develop",
        description: "Build and optimize for performance, conversions, and exceptional user experience",
    },
    Card {
        icon: "04",
        title: "Optimize",
        description: "Continuous testing, refinement, and improvement for maximum results and sustained growth",
    },
];

const PRINCIPLES: [Card; 4] = [
    Card {
        icon: "⚡",
        title: "Speed",
        description: "Lightning-fast execution without compromising quality",
    },
    Card {
        icon: "🎯",
        title: "Precision",
        description: "Data-driven strategies that hit the mark every time",
    },
    Card {
        icon: "💡",
        title: "Innovation",
        description: "Cutting-edge solutions that set you apart",
    },
    Card {
        icon: "📈",
        title: "Growth",
        description: "Scalable systems built for exponential success",
    },
];

struct Quote {
    quote: &'static str,
    name: &'static str,
    position: &'static str,
    company: &'static str,
}

const TESTIMONIALS: [Quote; 6] = [
    Quote {
        quote: "Ethovia transformed our online presence completely. Our website traffic increased by 300% in just 3 months, and conversion rates doubled. Their strategic approach to SEO and content marketing exceeded all our expectations.",
        name: "Sarah Johnson",
        position: "CEO",
        company: "TechStart Inc.",
    },
    Quote {
        quote: "Best ROI we've ever seen from a marketing agency. The team is incredibly responsive, and their data-driven strategies consistently deliver results. Highly recommended for any serious business.",
        name: "Michael Chen",
        position: "Founder & CEO",
        company: "GrowthCo",
    },
    Quote {
        quote: "Professional, responsive, and results-driven. They truly understand digital marketing in the modern landscape. Our brand visibility has skyrocketed since partnering with Ethovia.",
        name: "Emily Rodriguez",
        position: "Marketing Director",
        company: "BrandX Solutions",
    },
    Quote {
        quote: "Working with Ethovia has been a game-changer for our e-commerce business. Their innovative campaigns and attention to detail helped us achieve a 250% increase in online sales within 6 months.",
        name: "David Park",
        position: "E-commerce Manager",
        company: "ShopFlow",
    },
    Quote {
        quote: "The level of expertise and creativity that Ethovia brings to the table is unmatched. They don't just execute campaigns; they become true partners in your business growth journey.",
        name: "Jennifer Williams",
        position: "CMO",
        company: "InnovateTech",
    },
    Quote {
        quote: "From strategy to execution, Ethovia delivers excellence. Our social media engagement increased 400%, and we're finally reaching our target audience effectively. Worth every penny!",
        name: "Robert Martinez",
        position: "Brand Manager",
        company: "NextGen Digital",
    },
];

fn initials(name: &str) -> String {
    name.split_whitespace().filter_map(|part| part.chars().next()).collect()
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-background">
                <img src="/images/hero/hero-main-3d.png" alt="Hero background" />
            </div>
            <div class="hero-overlay"></div>
            <div class="hero-content fade-up">
                <h1>
                    <span class="hero-line">{"WE MAKE"}</span>
                    <span class="hero-impact">{"IMPACT"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"For fast-moving brands that refuse to blend in."}
                    <br />
                    <span>{"High-performance websites. Data-driven campaigns."}</span>
                </p>
                <div class="hero-buttons">
                    <Link<Route> to={Route::Contact} classes="cta-button large">
                        {"Start Your Project →"}
                    </Link<Route>>
                    <Link<Route> to={Route::Work} classes="ghost-button large">
                        {"View Our Work →"}
                    </Link<Route>>
                </div>
            </div>
        </section>
    }
}

fn card_grid(cards: &[Card], class: &'static str) -> Html {
    html! {
        <div class={classes!("card-grid", class)}>
            { for cards.iter().enumerate().map(|(index, card)| html! {
                <div class="card fade-up" style={format!("animation-delay: {}ms", index * 100)}>
                    <div class="card-icon">{ card.icon }</div>
                    <h3>{ card.title }</h3>
                    <p>{ card.description }</p>
                </div>
            }) }
        </div>
    }
}

#[function_component(CtaSection)]
pub fn cta_section() -> Html {
    html! {
        <section class="cta-section">
            <div class="cta-section-inner fade-up">
                <h2>
                    {"Ready to Grow Your "}
                    <span class="text-gradient">{"Business?"}</span>
                </h2>
                <p>{"Let's discuss how we can help you achieve your marketing goals"}</p>
                <Link<Route> to={Route::Contact} classes="cta-button large">
                    {"Schedule a Free Consultation"}
                </Link<Route>>
                <div class="cta-contact">
                    <a href="mailto:hello@ethovia.com">{"hello@ethovia.com"}</a>
                    <a href="tel:+1234567890">{"+1 (234) 567-890"}</a>
                </div>
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    use_scroll_to_top();

    html! {
        <div class="home-page">
            <Hero />

            <section class="section light">
                <div class="container">
                    <SectionTitle title="What We Do" subtitle={Some(AttrValue::from("Comprehensive digital marketing solutions to grow your business"))} />
                    { card_grid(&SERVICES, "services-grid") }
                    <div class="section-action">
                        <Link<Route> to={Route::Services} classes="text-link">{"Learn More →"}</Link<Route>>
                    </div>
                </div>
            </section>

            <section class="section process">
                <div class="container">
                    <SectionTitle title="How We Work" light={true} subtitle={Some(AttrValue::from("Our proven 4-step process for delivering exceptional results that exceed expectations"))} />
                    { card_grid(&PROCESS, "process-grid") }
                </div>
            </section>

            <FeaturedWork />

            <section class="section light">
                <div class="container">
                    <SectionTitle title="Our Approach" subtitle={Some(AttrValue::from("Four core principles that drive everything we do"))} />
                    { card_grid(&PRINCIPLES, "principles-grid") }
                </div>
            </section>

            <section class="section testimonials">
                <div class="container">
                    <SectionTitle title="What Clients Say" subtitle={Some(AttrValue::from("Real results from real clients who trust us with their growth"))} />
                    <div class="testimonial-grid">
                        { for TESTIMONIALS.iter().map(|t| html! {
                            <figure class="testimonial-card fade-up">
                                <div class="testimonial-stars">{"★★★★★"}</div>
                                <blockquote>{ format!("\u{201c}{}\u{201d}", t.quote) }</blockquote>
                                <figcaption>
                                    <span class="testimonial-avatar">{ initials(t.name) }</span>
                                    <span>
                                        <strong>{ t.name }</strong>
                                        <span class="testimonial-role">{ format!("{}, {}", t.position, t.company) }</span>
                                    </span>
                                </figcaption>
                            </figure>
                        }) }
                    </div>
                    <p class="testimonial-trust">{"Trusted by innovative companies worldwide"}</p>
                </div>
            </section>

            <CtaSection />

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    background: #00024D;
                }
                .hero-background img {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, rgba(0, 0, 0, 0.6), rgba(0, 2, 77, 0.7));
                }
                .hero-content {
                    position: relative;
                    z-index: 2;
                    text-align: center;
                    padding: 0 1.5rem;
                    color: #fff;
                }
                .hero h1 {
                    font-size: clamp(3.5rem, 11vw, 9rem);
                    font-weight: 900;
                    line-height: 0.95;
                    letter-spacing: 0.02em;
                    margin-bottom: 2rem;
                }
                .hero-line {
                    display: block;
                }
                .hero-impact {
                    display: inline-block;
                    animation: wave 6s ease-in-out infinite;
                    letter-spacing: 0.05em;
                    text-shadow: 0 4px 32px rgba(0, 0, 0, 0.25), 0 1px 0 #000;
                }
                .hero-subtitle {
                    font-size: 1.5rem;
                    color: rgba(255, 255, 255, 0.9);
                    margin-bottom: 3rem;
                    text-shadow: 0 2px 10px rgba(0, 0, 0, 0.3);
                }
                .hero-subtitle span {
                    color: rgba(255, 255, 255, 0.7);
                }
                .hero-buttons {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }
                .card-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 2rem;
                }
                .process {
                    background: linear-gradient(135deg, #00024D, #1A1A2E);
                }
                .process .card {
                    background: rgba(255, 255, 255, 0.05);
                    border-color: rgba(255, 255, 255, 0.1);
                    color: #fff;
                }
                .process .card p {
                    color: rgba(255, 255, 255, 0.7);
                }
                .process .card-icon {
                    font-size: 3rem;
                    font-weight: 900;
                    color: #4A9FFF;
                }
                .section-action {
                    text-align: center;
                    margin-top: 3rem;
                }
                .testimonial-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 2rem;
                }
                .testimonial-card {
                    margin: 0;
                    padding: 2rem;
                    border-radius: 16px;
                    background: #fff;
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
                }
                .testimonial-stars {
                    color: #fbbf24;
                    margin-bottom: 1rem;
                }
                .testimonial-card blockquote {
                    margin: 0 0 1.5rem;
                    color: #4b5563;
                    line-height: 1.7;
                }
                .testimonial-card figcaption {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .testimonial-avatar {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(135deg, #00024D, #4A9FFF);
                    color: #fff;
                    font-weight: 700;
                }
                .testimonial-role {
                    display: block;
                    color: #6b7280;
                    font-size: 0.9rem;
                }
                .testimonial-trust {
                    text-align: center;
                    margin-top: 3rem;
                    color: #6b7280;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Sarah Johnson"), "SJ");
        assert_eq!(initials("Cher"), "C");
    }
}
