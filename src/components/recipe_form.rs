use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::models::FormState;

pub const DIFFICULTIES: [&str; 3] = ["easy", "medium", "hard"];

#[derive(Properties, PartialEq)]
pub struct RecipeFormProps {
    pub form: FormState,
    pub is_loading: bool,
    pub on_change: Callback<FormState>,
    pub on_submit: Callback<()>,
}

#[function_component(RecipeForm)]
pub fn recipe_form(props: &RecipeFormProps) -> Html {
    let on_prompt_input = {
        let on_change = props.on_change.clone();
        let form = props.form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit(FormState { prompt: input.value(), ..form.clone() });
        })
    };

    let on_difficulty_change = {
        let on_change = props.on_change.clone();
        let form = props.form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(FormState { difficulty: select.value(), ..form.clone() });
        })
    };

    let on_wishes_input = {
        let on_change = props.on_change.clone();
        let form = props.form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit(FormState { wishes: input.value(), ..form.clone() });
        })
    };

    let on_servings_input = {
        let on_change = props.on_change.clone();
        let form = props.form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(FormState { servings: input.value(), ..form.clone() });
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let can_submit = !props.is_loading && !props.form.prompt.trim().is_empty();

    html! {
        <form class="recipe-form" onsubmit={on_submit}>
            <label class="form-label">{ "What would you like to cook?" }</label>
            <textarea class="form-textarea" value={props.form.prompt.clone()} oninput={on_prompt_input}
                placeholder="e.g. a quick pasta with spinach" style="height: 70px; resize: vertical;" />

            <div class="form-row">
                <div>
                    <label class="form-label">{ "Difficulty" }</label>
                    <select class="form-select" onchange={on_difficulty_change}>
                        { for DIFFICULTIES.iter().map(|d| html! {
                            <option value={*d} selected={props.form.difficulty == *d}>{ *d }</option>
                        }) }
                    </select>
                </div>
                <div>
                    <label class="form-label">{ "Servings" }</label>
                    <input class="form-input" type="number" min="1" value={props.form.servings.clone()} oninput={on_servings_input} />
                </div>
            </div>

            <label class="form-label">{ "Wishes" }</label>
            <textarea class="form-textarea" value={props.form.wishes.clone()} oninput={on_wishes_input}
                placeholder="vegetarian, no nuts, ..." style="height: 50px; resize: vertical;" />

            <button class="btn btn-primary" type="submit" disabled={!can_submit}>
                { if props.is_loading { "Generating..." } else { "Generate recipe" } }
            </button>
        </form>
    }
}
