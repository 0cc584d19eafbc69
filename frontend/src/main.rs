use log::LevelFilter;
use shared::navigation::{active_section, header_is_scrolled, scroll_top_visible};
use shared::SiteConfig;
use yew::prelude::*;

mod components;
mod content;
mod hooks;
mod services;

use components::forms::{ContactForm, NewsletterForm, ReservationForm};
use components::gallery::Gallery;
use components::header::Header;
use components::menu_section::MenuSection;
use components::notification::Toast;
use components::opening_hours::OpeningHours;
use components::promo_modal::PromoModal;
use components::scroll_to_top::ScrollToTop;
use components::section_link::SectionLink;
use components::testimonials::Testimonials;
use hooks::use_notification::use_notification;
use hooks::use_scroll_position::use_scroll_position;
use hooks::use_theme::use_theme;
use services::logging::Logger;
use services::page::section_bounds;

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| SiteConfig::default());
    let scroll_y = use_scroll_position();
    let theme = use_theme();
    let toast = use_notification(config.notification_lifetime_ms());

    let sections = section_bounds(&content::section_ids());
    let current_section = active_section(&sections, scroll_y, config.section_offset_px).map(str::to_string);

    html! {
        <>
            <Header
                active_section={current_section}
                scrolled={header_is_scrolled(scroll_y, config.sticky_header_px)}
                theme={theme.theme}
                on_toggle_theme={theme.toggle}
                header_offset={config.header_offset_px}
            />
            <main>
                <section id="home" class="hero">
                    <div class="hero-content">
                        <h1>{"Zestha"}</h1>
                        <p>{"Modern Italian kitchen in the heart of the city"}</p>
                        <SectionLink href="#reservation" class="btn btn-primary" header_offset={config.header_offset_px}>
                            {"Book a Table"}
                        </SectionLink>
                    </div>
                </section>
                <section id="about" class="about-section">
                    <div class="container about-grid">
                        <div class="about-text">
                            <h2 class="section-title">{"Our Story"}</h2>
                            <p>{"Fresh pasta every morning, produce from local farms, and a wine list built over twenty years."}</p>
                        </div>
                        <OpeningHours refresh_ms={config.status_refresh_ms} />
                    </div>
                </section>
                <MenuSection />
                <Gallery />
                <Testimonials autoplay_period_ms={config.autoplay_period_ms} />
                <ReservationForm config={(*config).clone()} notify={toast.notify.clone()} />
                <section id="contact" class="contact-section">
                    <div class="container">
                        <h2 class="section-title">{"Get in Touch"}</h2>
                        <ContactForm submit_delay_ms={config.submit_delay_ms} notify={toast.notify.clone()} />
                    </div>
                </section>
            </main>
            <footer class="footer">
                <div class="container">
                    <h3>{"Newsletter"}</h3>
                    <NewsletterForm submit_delay_ms={config.submit_delay_ms} notify={toast.notify.clone()} />
                </div>
            </footer>
            <ScrollToTop visible={scroll_top_visible(scroll_y, config.scroll_top_px)} />
            <PromoModal delay_ms={config.promo_delay_ms} header_offset={config.header_offset_px} />
            <Toast notification={toast.current} />
        </>
    }
}

fn main() {
    Logger::init(LevelFilter::Debug);
    yew::Renderer::<App>::new().render();
    Logger::info_with_component("app", "🍝 Zestha Restaurant Website Loaded Successfully!");
}
