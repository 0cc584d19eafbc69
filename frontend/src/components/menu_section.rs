use shared::MenuFilter;
use yew::prelude::*;

use crate::content::{MENU_CATEGORIES, MENU_ITEMS};

#[function_component(MenuSection)]
pub fn menu_section() -> Html {
    let filter = use_state(MenuFilter::default);

    let buttons = MENU_CATEGORIES.iter().map(|(value, label)| {
        let is_active = filter.value() == *value;
        let onclick = {
            let filter = filter.clone();
            let value = *value;
            Callback::from(move |_: MouseEvent| filter.set(MenuFilter::parse(value)))
        };
        html! {
            <button class={classes!("category-btn", is_active.then_some("active"))} data-category={*value} {onclick}>
                {*label}
            </button>
        }
    });

    let items = MENU_ITEMS.iter().map(|item| {
        let hidden = !filter.shows(item.category);
        html! {
            <div class={classes!("menu-item", hidden.then_some("hidden"))} data-category={item.category}>
                <div class="menu-item-header">
                    <h3>{item.name}</h3>
                    <span class="price">{item.price}</span>
                </div>
                <p>{item.description}</p>
            </div>
        }
    });

    html! {
        <section id="menu" class="menu-section">
            <div class="container">
                <h2 class="section-title">{"Our Menu"}</h2>
                <div class="menu-categories">
                    {for buttons}
                </div>
                <div class="menu-grid">
                    {for items}
                </div>
            </div>
        </section>
    }
}
