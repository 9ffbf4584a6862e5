use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::Recipe;
use crate::services::drafts::{parse_servings, DEFAULT_SERVINGS};
use crate::services::scaling::update_ingredient_quantities;
use crate::utils::render_markdown;

#[derive(Properties, PartialEq)]
pub struct RecipeViewProps {
    pub recipe: Recipe,
    /// The recipe was opened from the saved collection.
    pub is_saved: bool,
    pub on_save: Callback<Recipe>,
    pub on_update: Callback<Recipe>,
}

/// The recipe as it would be stored: base quantities, plus the chosen serving count.
fn with_servings(recipe: &Recipe, servings: u32) -> Recipe {
    Recipe {
        preferred_servings: recipe.base_servings().map(|_| servings),
        ..recipe.clone()
    }
}

#[function_component(RecipeView)]
pub fn recipe_view(props: &RecipeViewProps) -> Html {
    let base = props.recipe.base_servings();
    let servings = use_state(|| props.recipe.shown_servings().unwrap_or(DEFAULT_SERVINGS));

    // A different recipe starts again at its own serving count
    {
        let servings = servings.clone();
        use_effect_with(props.recipe.clone(), move |recipe| {
            servings.set(recipe.shown_servings().unwrap_or(DEFAULT_SERVINGS));
        });
    }

    let on_servings_input = {
        let servings = servings.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            servings.set(parse_servings(&input.value()));
        })
    };

    let ingredients = update_ingredient_quantities(&props.recipe, *servings);
    let current = with_servings(&props.recipe, *servings);

    let on_save = {
        let cb = props.on_save.clone();
        let recipe = current.clone();
        Callback::from(move |_| cb.emit(recipe.clone()))
    };

    let on_update = {
        let cb = props.on_update.clone();
        let recipe = current.clone();
        Callback::from(move |_| cb.emit(recipe.clone()))
    };

    let css = r#"
        .recipe-card { border: 1px solid var(--border-color); border-radius: 8px; padding: 20px; margin-top: 20px; }
        .recipe-card h3 { margin-top: 0; }
        .recipe-card .servings { display: flex; gap: 8px; align-items: center; margin-bottom: 10px; font-size: 0.9rem; }
        .recipe-card .servings input { width: 70px; }
        .recipe-card .tip { background: var(--bg-sidebar); border-left: 3px solid var(--accent-color); padding: 8px 12px; margin: 15px 0; }
    "#;

    html! {
        <>
            <style>{ css }</style>
            <div class="recipe-card">
                <h3>{ &props.recipe.name }</h3>
                { render_markdown(&props.recipe.description) }

                if base.is_some() {
                    <div class="servings">
                        <label>{ "Servings" }</label>
                        <input class="form-input" type="number" min="1" value={servings.to_string()} oninput={on_servings_input} style="margin-bottom:0;" />
                    </div>
                }

                <h4>{ "Ingredients" }</h4>
                <ul>
                    { for ingredients.iter().map(|line| html! { <li>{ line }</li> }) }
                </ul>

                <h4>{ "Instructions" }</h4>
                <ol>
                    { for props.recipe.instructions.iter().map(|step| html! { <li>{ step }</li> }) }
                </ol>

                if let Some(tip) = &props.recipe.tip {
                    <div class="tip">{ render_markdown(tip) }</div>
                }

                if props.is_saved {
                    <button class="btn" onclick={on_update}>{ "Update saved recipe" }</button>
                } else {
                    <button class="btn btn-primary" onclick={on_save}>{ "Save recipe" }</button>
                }
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn zwiebelkuchen() -> Recipe {
        Recipe {
            name: "Zwiebelkuchen".into(),
            ingredients: vec!["1 Zwiebel".into(), "0,5l Milch".into()],
            servings: Some(3),
            ..Recipe::default()
        }
    }

    #[test]
    fn stored_recipe_keeps_base_quantities() {
        let out = with_servings(&zwiebelkuchen(), 1);
        assert_eq!(out.ingredients, vec!["1 Zwiebel", "0,5l Milch"]);
        assert_eq!(out.servings, Some(3));
        assert_eq!(out.preferred_servings, Some(1));
        assert_eq!(out.shown_servings(), Some(1));
    }

    #[test]
    fn scaling_down_and_back_is_lossless() {
        let stored = with_servings(&zwiebelkuchen(), 1);
        assert_eq!(update_ingredient_quantities(&stored, 1), vec!["0.33 Zwiebel", "0,17l Milch"]);

        let reopened = with_servings(&stored, 3);
        assert_eq!(update_ingredient_quantities(&reopened, 3), vec!["1 Zwiebel", "0,5l Milch"]);
    }

    #[test]
    fn recipe_without_base_has_no_chosen_servings() {
        let recipe = Recipe {
            name: "Brot".into(),
            ingredients: vec!["500g Mehl".into()],
            ..Recipe::default()
        };
        assert_eq!(with_servings(&recipe, 8), recipe);
        assert_eq!(recipe.shown_servings(), None);
    }
}
