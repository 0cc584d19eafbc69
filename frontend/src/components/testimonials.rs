use shared::{AutoplayError, Carousel};
use yew::prelude::*;

use crate::content::TESTIMONIALS;
use crate::services::logging::Logger;
use crate::services::scheduler::GlooScheduler;

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub autoplay_period_ms: u32,
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let current = use_state(|| 0usize);
    let carousel = use_mut_ref(|| Option::<Carousel<GlooScheduler>>::None);

    // Built once on mount from the testimonial count; dropping it cancels autoplay
    {
        let current = current.clone();
        let carousel = carousel.clone();
        use_effect_with(props.autoplay_period_ms, move |period_ms| {
            let built = Carousel::new(TESTIMONIALS.len(), GlooScheduler, *period_ms, move |index| {
                current.set(index)
            });
            match built {
                Ok(mut slider) => {
                    if let Err(e) = slider.start() {
                        Logger::warn_with_component("testimonials", &e.to_string());
                    }
                    *carousel.borrow_mut() = Some(slider);
                }
                Err(e) => Logger::error_with_component("testimonials", &e.to_string()),
            }
            move || {
                carousel.borrow_mut().take();
            }
        });
    }

    let on_mouse_enter = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(slider) = carousel.borrow_mut().as_mut() {
                slider.pointer_enter();
            }
        })
    };

    let on_mouse_leave = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(slider) = carousel.borrow_mut().as_mut() {
                // Already live after a dot click inside the slider
                if let Err(AutoplayError::AlreadyRunning) = slider.pointer_leave() {
                    Logger::debug_with_component("testimonials", "Autoplay already running on leave");
                }
            }
        })
    };

    let slides = TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| {
        html! {
            <div class={classes!("testimonial", (index == *current).then_some("active"))}>
                <div class="stars">{ ("★".repeat(testimonial.stars)) }</div>
                <p class="quote">{testimonial.quote}</p>
                <p class="author">{format!("— {}", testimonial.author)}</p>
            </div>
        }
    });

    let dots = (0..TESTIMONIALS.len()).map(|index| {
        let onclick = {
            let carousel = carousel.clone();
            Callback::from(move |_: MouseEvent| {
                if let Some(slider) = carousel.borrow_mut().as_mut() {
                    if let Err(e) = slider.select(index) {
                        Logger::warn_with_component("testimonials", &e.to_string());
                    }
                }
            })
        };
        html! {
            <span class={classes!("dot", (index == *current).then_some("active"))} {onclick}></span>
        }
    });

    html! {
        <section id="testimonials" class="testimonials-section">
            <div class="container">
                <h2 class="section-title">{"What Our Guests Say"}</h2>
                <div class="testimonials-slider" onmouseenter={on_mouse_enter} onmouseleave={on_mouse_leave}>
                    {for slides}
                </div>
                <div class="slider-dots">
                    {for dots}
                </div>
            </div>
        </section>
    }
}
