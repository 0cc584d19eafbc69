use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    /// Field name inside the form state
    pub name: AttrValue,
    /// DOM id; must be unique across the page
    pub id: AttrValue,
    pub label: AttrValue,
    /// Input type, or "select" / "textarea"
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    pub value: String,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub min: Option<AttrValue>,
    #[prop_or_default]
    pub max: Option<AttrValue>,
    /// (value, label) pairs for selects
    #[prop_or_default]
    pub options: Vec<(&'static str, &'static str)>,
    pub on_input: Callback<(String, String)>,
    pub on_blur: Callback<String>,
}

fn control_value(target: Option<EventTarget>) -> String {
    let Some(target) = target else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let oninput = {
        let name = props.name.to_string();
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            on_input.emit((name.clone(), control_value(e.target())));
        })
    };

    let onblur = {
        let name = props.name.to_string();
        let on_blur = props.on_blur.clone();
        Callback::from(move |_: FocusEvent| on_blur.emit(name.clone()))
    };

    let control = match props.input_type.as_str() {
        "select" => html! {
            <select id={props.id.clone()} name={props.name.clone()} required={props.required} {oninput} {onblur}>
                {for props.options.iter().map(|(value, label)| html! {
                    <option value={*value} selected={props.value == *value}>{*label}</option>
                })}
            </select>
        },
        "textarea" => html! {
            <textarea
                id={props.id.clone()}
                name={props.name.clone()}
                rows="4"
                required={props.required}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                {oninput}
                {onblur}
            />
        },
        input_type => html! {
            <input
                type={input_type.to_string()}
                id={props.id.clone()}
                name={props.name.clone()}
                required={props.required}
                placeholder={props.placeholder.clone()}
                min={props.min.clone()}
                max={props.max.clone()}
                value={props.value.clone()}
                {oninput}
                {onblur}
            />
        },
    };

    html! {
        <div class={classes!("form-group", props.error.is_some().then_some("error"))}>
            <label for={props.id.clone()}>{props.label.clone()}</label>
            {control}
            <span class="error-message">{props.error.clone().unwrap_or_default()}</span>
        </div>
    }
}
