//! Home page: hero, apps grid, testimonials, benefits, about and contact,
//! composed in that order.

use yew::prelude::*;
use yew_router::components::Link;

use crate::contact::section::ContactSection;
use crate::Route;

#[function_component(HeroSection)]
fn hero_section() -> Html {
    html! {
        <section class="hero-section">
            <div class="hero-inner">
                <div class="social-proof-badge">
                    <span class="pulse-dot"></span>
                    {"Trusted by 500+ Shopify merchants"}
                </div>
                <h1>{"Apps That Actually Help Your Shopify Store"}</h1>
                <p class="hero-subheading">
                    {"Simple, powerful tools built by developers who understand merchant needs. \
                      No fluff, just results."}
                </p>
                <div class="hero-ctas">
                    <a href="#apps" class="cta-primary">{"Explore Our Apps"}</a>
                    <a href="#contact" class="cta-secondary">{"Get in Touch →"}</a>
                </div>
                <div class="trust-badge">
                    {"★★★★★ 5-star rated on Shopify App Store"}
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct AppCardProps {
    icon: String,
    title: String,
    tagline: String,
    features: Vec<String>,
    install_href: String,
    details_route: Route,
    #[prop_or_default]
    rating: Option<String>,
    #[prop_or_default]
    installs: Option<String>,
}

#[function_component(AppCard)]
fn app_card(props: &AppCardProps) -> Html {
    html! {
        <div class="app-card">
            <div class="app-card-header">
                <img
                    src={props.icon.clone()}
                    alt={props.title.clone()}
                    width="80"
                    height="80"
                    loading="lazy"
                />
                <div class="app-card-titles">
                    <h3>{props.title.clone()}</h3>
                    <p class="app-tagline">{props.tagline.clone()}</p>
                    <div class="app-card-meta">
                        if let Some(rating) = props.rating.as_ref() {
                            <span class="app-rating">{format!("★ {rating}")}</span>
                        }
                        if let Some(installs) = props.installs.as_ref() {
                            <span class="app-installs">{format!("{installs} installs")}</span>
                        }
                    </div>
                </div>
            </div>
            <ul class="app-features">
                { for props.features.iter().map(|feature| html! { <li>{feature.clone()}</li> }) }
            </ul>
            <div class="app-card-ctas">
                <a
                    href={props.install_href.clone()}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="install-button"
                >
                    {"Install Free"}
                </a>
                <Link<Route> to={props.details_route} classes="details-link">
                    {"Learn More"}
                </Link<Route>>
            </div>
        </div>
    }
}

#[function_component(AppsSection)]
fn apps_section() -> Html {
    html! {
        <section id="apps" class="apps-section">
            <div class="section-inner">
                <div class="section-header">
                    <span class="section-badge">{"Free to Install"}</span>
                    <h2>{"Our Shopify Apps"}</h2>
                    <p>{"Simple, powerful tools that solve real merchant problems"}</p>
                </div>
                <div class="apps-grid">
                    <AppCard
                        icon="/resources/bulk_delete_orders.png"
                        title="Bulk Delete Orders"
                        tagline="Clean up test orders and unwanted data in seconds"
                        features={vec![
                            "Filter and target specific orders for bulk deletion".to_string(),
                            "Auto-cancels orders before deletion, no manual steps".to_string(),
                            "Track jobs and export reports in Job History".to_string(),
                        ]}
                        install_href="https://apps.shopify.com/bulk-delete-orders"
                        details_route={Route::BulkDeleteOrders}
                        rating="5.0"
                        installs="200+"
                    />
                    <AppCard
                        icon="/resources/default_address_lock.png"
                        title="Default Address Lock"
                        tagline="Keep customer default addresses intact after orders"
                        features={vec![
                            "Prevent Shopify from overwriting default addresses".to_string(),
                            "Smart detection for order vs. manual changes".to_string(),
                            "Perfect for gift stores and B2B merchants".to_string(),
                        ]}
                        install_href="https://apps.shopify.com/default-address-lock"
                        details_route={Route::DefaultAddressLock}
                    />
                </div>
            </div>
        </section>
    }
}

struct Testimonial {
    quote: &'static str,
    name: &'static str,
    role: &'static str,
    url: Option<&'static str>,
    highlight: Option<&'static str>,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Your app saved my team about 8 hours of clicking buttons in Shopify, \
                and turned it into a 5 minute project.",
        name: "Jared",
        role: "Barbell Standard",
        url: Some("https://barbellstandard.com"),
        highlight: Some("8 hours → 5 minutes"),
    },
    Testimonial {
        quote: "Finally, apps that just work without complicated setup. The support team \
                is incredibly responsive too.",
        name: "Michael T.",
        role: "Shopify Plus Merchant",
        url: None,
        highlight: None,
    },
];

fn render_testimonial(testimonial: &Testimonial) -> Html {
    html! {
        <div class="testimonial-card">
            <div class="testimonial-stars">{"★★★★★"}</div>
            <blockquote>
                <p>{format!("\"{}\"", testimonial.quote)}</p>
                if let Some(highlight) = testimonial.highlight {
                    <span class="testimonial-highlight">{highlight}</span>
                }
            </blockquote>
            <div class="testimonial-author">
                <div class="author-avatar">
                    { testimonial.name.chars().next().unwrap_or('?').to_string() }
                </div>
                <div class="author-info">
                    <div class="author-name">{testimonial.name}</div>
                    {
                        match testimonial.url {
                            Some(url) => html! {
                                <a href={url} target="_blank" rel="noopener noreferrer">
                                    {testimonial.role}
                                </a>
                            },
                            None => html! { <div class="author-role">{testimonial.role}</div> },
                        }
                    }
                </div>
                <span class="verified-badge">{"Verified"}</span>
            </div>
        </div>
    }
}

#[function_component(TestimonialsSection)]
fn testimonials_section() -> Html {
    html! {
        <section class="testimonials-section">
            <div class="section-inner">
                <div class="section-header">
                    <span class="section-badge">{"5.0 on Shopify App Store"}</span>
                    <h2>{"Trusted by Merchants"}</h2>
                    <p>{"See what store owners are saying about our apps"}</p>
                </div>
                <div class="testimonials-grid">
                    { for TESTIMONIALS.iter().map(render_testimonial) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct BenefitCardProps {
    title: String,
    description: String,
}

#[function_component(BenefitCard)]
fn benefit_card(props: &BenefitCardProps) -> Html {
    html! {
        <div class="benefit-card">
            <h3>{props.title.clone()}</h3>
            <p>{props.description.clone()}</p>
        </div>
    }
}

#[function_component(WhyChooseSection)]
fn why_choose_section() -> Html {
    html! {
        <section class="why-choose-section">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{"Why Merchants Choose Gemify"}</h2>
                    <p>{"Tools built with your success in mind"}</p>
                </div>
                <div class="benefits-grid">
                    <BenefitCard
                        title="Shopify Expertise"
                        description="Built by certified Shopify experts who understand your daily challenges."
                    />
                    <BenefitCard
                        title="Enterprise Security"
                        description="Bank-grade security protecting your store data 24/7."
                    />
                    <BenefitCard
                        title="Responsive Support"
                        description="Real human support ready to help. No bots, just genuine assistance."
                    />
                </div>
            </div>
        </section>
    }
}

#[function_component(AboutSection)]
fn about_section() -> Html {
    html! {
        <section id="about" class="about-section">
            <div class="section-inner narrow">
                <h2>{"About Gemify"}</h2>
                <p>
                    {"Founded by experienced Shopify developers who understand the challenges \
                      merchants face."}
                </p>
                <p>
                    {"Our mission is simple: intuitive, reliable apps. No bloated features. \
                      No confusing interfaces. Just clean solutions that help your business thrive."}
                </p>
                <p>
                    {"Every app is built with the same care we'd demand for our own stores. \
                      When you choose Gemify, you're choosing a partner dedicated to your success."}
                </p>
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div>
            <a href="#apps" class="skip-link">{"Skip to main content"}</a>
            <HeroSection />
            <AppsSection />
            <TestimonialsSection />
            <WhyChooseSection />
            <AboutSection />
            <ContactSection />
        </div>
    }
}
