use yew::prelude::*;

use crate::models::{CountBadge, Recipe};

#[derive(Properties, PartialEq)]
pub struct SavedRecipesProps {
    pub open: bool,
    pub recipes: Vec<Recipe>,
    pub badge: CountBadge,
    pub active_name: Option<String>,
    pub on_select: Callback<String>,
    pub on_delete: Callback<(MouseEvent, String)>,
    pub on_rate: Callback<(String, u8)>,
}

fn stars(name: &str, rating: Option<u8>, on_rate: &Callback<(String, u8)>) -> Html {
    let current = rating.unwrap_or(0);
    html! {
        <span class="stars">
            { for (1..=5u8).map(|value| {
                let on_rate = on_rate.clone();
                let name = name.to_string();
                let onclick = Callback::from(move |e: MouseEvent| {
                    e.stop_propagation();
                    on_rate.emit((name.clone(), value));
                });
                html! {
                    <button class="star" {onclick}>{ if value <= current { "★" } else { "☆" } }</button>
                }
            }) }
        </span>
    }
}

#[function_component(SavedRecipes)]
pub fn saved_recipes(props: &SavedRecipesProps) -> Html {
    let width = if props.open { "280px" } else { "0px" };

    let css = r#"
        .sidebar { background: var(--bg-sidebar); border-right: 1px solid var(--border-color); display: flex; flex-direction: column; transition: width 0.3s cubic-bezier(0.25, 0.8, 0.25, 1); overflow: hidden; flex-shrink: 0; }
        .sidebar-content { width: 280px; height: 100%; display: flex; flex-direction: column; padding: 10px; }
        .sidebar-title { display: flex; align-items: center; gap: 8px; font-weight: 600; padding: 6px 4px; }
        .count-badge { background: var(--accent-color); color: white; border-radius: 10px; padding: 0 8px; font-size: 0.75rem; }
        .recipe-list { flex-grow: 1; overflow-y: auto; margin-top: 10px; }
        .recipe-item { padding: 10px; border-radius: 6px; cursor: pointer; display: flex; flex-direction: column; gap: 4px; margin-bottom: 2px; font-size: 0.9rem; color: var(--text-primary); }
        .recipe-item:hover { background: #eaeaeb; }
        .recipe-item.active { background: #e0e0e0; font-weight: 500; }
        .recipe-item .row { display: flex; justify-content: space-between; align-items: center; }
        .recipe-item .del-btn { opacity: 0; border: none; background: none; color: #999; cursor: pointer; padding: 2px 6px; border-radius: 4px; }
        .recipe-item:hover .del-btn { opacity: 1; }
        .recipe-item .del-btn:hover { background: #dcdcdc; color: var(--danger-color); }
        .star { border: none; background: none; cursor: pointer; padding: 0 1px; color: #d4a017; }
        .empty-hint { color: var(--text-secondary); font-size: 0.85rem; padding: 10px 4px; }
    "#;

    html! {
        <>
            <style>{ css }</style>
            <div class="sidebar" style={format!("width: {};", width)}>
                <div class="sidebar-content">
                    <div class="sidebar-title">
                        <span>{ "Saved recipes" }</span>
                        if props.badge.visible {
                            <span class="count-badge">{ &props.badge.text }</span>
                        }
                    </div>
                    <div class="recipe-list">
                        if props.recipes.is_empty() {
                            <div class="empty-hint">{ "Nothing saved yet." }</div>
                        }
                        { for props.recipes.iter().map(|recipe| {
                            let name = recipe.name.clone();
                            let is_active = props
                                .active_name
                                .as_ref()
                                .map(|a| recipe.has_name(a))
                                .unwrap_or(false);
                            let active_class = if is_active { "active" } else { "" };
                            let on_sel = props.on_select.clone();
                            let on_del = props.on_delete.clone();
                            let name_c = name.clone();

                            html! {
                                <div class={format!("recipe-item {}", active_class)} onclick={Callback::from(move |_| on_sel.emit(name.clone()))}>
                                    <div class="row">
                                        <span style="overflow: hidden; text-overflow: ellipsis; white-space: nowrap;">{ &recipe.name }</span>
                                        <button class="del-btn" title="Delete" onclick={Callback::from(move |e| on_del.emit((e, name_c.clone())))}>{ "×" }</button>
                                    </div>
                                    { stars(&recipe.name, recipe.rating, &props.on_rate) }
                                </div>
                            }
                        })}
                    </div>
                </div>
            </div>
        </>
    }
}
