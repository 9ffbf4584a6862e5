use anyhow::{Context, Result};
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{
    draft_banner::DraftBanner, recipe_form::RecipeForm, recipe_view::RecipeView,
    saved_recipes::SavedRecipes, settings::SettingsModal,
};
use crate::error::StoreError;
use crate::logging;
use crate::models::*;
use crate::services::drafts::{request_from_form, DraftManager, DEFAULT_SERVINGS};
use crate::services::recipe_api::RecipeApi;
use crate::services::recipe_store::{RecipeStore, StoreObserver};
use crate::services::settings::{load_settings, save_settings};
use crate::services::storage::LocalStorage;
use crate::utils;

const GLOBAL_STYLES: &str = r#"
    :root {
        --bg-app: #ffffff;
        --bg-sidebar: #f9f9f9;
        --border-color: #e5e5e5;
        --text-primary: #333;
        --text-secondary: #666;
        --accent-color: #10a37f;
        --accent-hover: #1a7f64;
        --danger-color: #ef4444;
    }

    * { box-sizing: border-box; }
    body { margin: 0; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif; color: var(--text-primary); }

    .app-container { display: flex; height: 100vh; overflow: hidden; }
    .main-content { flex-grow: 1; display: flex; flex-direction: column; position: relative; background: var(--bg-app); }
    .header { padding: 10px 20px; border-bottom: 1px solid var(--border-color); display: flex; justify-content: space-between; align-items: center; height: 60px; }
    .header h2 { font-size: 1rem; margin: 0; font-weight: 600; }
    .page { flex-grow: 1; overflow-y: auto; padding: 20px; max-width: 760px; width: 100%; margin: 0 auto; }

    .btn { cursor: pointer; border: 1px solid var(--border-color); background: white; padding: 8px 12px; border-radius: 6px; font-size: 0.9rem; transition: all 0.2s; color: var(--text-primary); }
    .btn:hover { background: #f0f0f0; }
    .btn:disabled { opacity: 0.5; cursor: default; }
    .btn-primary { background: var(--accent-color); color: white; border-color: transparent; }
    .btn-primary:hover { background: var(--accent-hover); }
    .btn-icon { border: none; background: transparent; font-size: 1.2rem; padding: 5px; color: var(--text-secondary); cursor: pointer; }
    .btn-icon:hover { background: rgba(0,0,0,0.05); color: var(--text-primary); }

    .form-label { display: block; font-size: 0.85rem; font-weight: 600; margin-bottom: 5px; color: var(--text-secondary); }
    .form-input, .form-select, .form-textarea { width: 100%; padding: 8px; border: 1px solid var(--border-color); border-radius: 6px; font-family: inherit; margin-bottom: 10px; }
    .form-input:focus, .form-textarea:focus { outline: 2px solid var(--accent-color); border-color: transparent; }
    .form-row { display: flex; gap: 12px; }
    .form-row > div { flex: 1; }
    .error-box { color: var(--danger-color); font-size: 0.9rem; margin-top: 10px; }

    .markdown-body { line-height: 1.6; font-size: 1rem; }
    .markdown-body p { margin-top: 0; margin-bottom: 1em; }
"#;

/// Routes store signals into component state.
#[derive(Clone)]
struct UiSignals {
    saved: UseStateHandle<Vec<Recipe>>,
    badge: UseStateHandle<CountBadge>,
}

impl StoreObserver for UiSignals {
    fn alert(&self, message: &str) {
        utils::alert(message);
    }

    fn render_saved(&self, recipes: &[Recipe]) {
        self.saved.set(recipes.to_vec());
    }

    fn update_count(&self, badge: &CountBadge) {
        self.badge.set(badge.clone());
    }
}

async fn generate_recipe(endpoint: &str, request: &RecipeRequest) -> Result<Recipe> {
    let recipe = RecipeApi::generate(endpoint, request)
        .await
        .context("Could not generate a recipe")?;
    Ok(recipe)
}

fn empty_form(settings: &AppSettings) -> FormState {
    FormState {
        difficulty: settings.default_difficulty.clone(),
        servings: DEFAULT_SERVINGS.to_string(),
        ..FormState::default()
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let settings = use_state(|| load_settings(&LocalStorage));
    let form = use_state(|| empty_form(&settings));
    let draft = use_state(|| {
        DraftManager::new(LocalStorage)
            .check_and_offer()
            .map(|offer| offer.draft().clone())
    });
    let saved = use_state(|| RecipeStore::new(LocalStorage).list());
    let badge = use_state(|| RecipeStore::new(LocalStorage).count_badge());
    let current = use_state(|| None::<Recipe>);
    let opened_name = use_state(|| None::<String>);

    let sidebar_open = use_state(|| true);
    let show_settings = use_state(|| false);
    let is_loading = use_state(|| false);
    let error_msg = use_state(String::new);

    let signals = UiSignals {
        saved: saved.clone(),
        badge: badge.clone(),
    };

    // --- EFFECTS ---
    {
        let s = settings.clone();
        use_effect_with(s, |s| {
            save_settings(&LocalStorage, &**s);
            logging::init(&s.log_level);
        });
    }

    // --- ACTIONS ---

    let on_form_change = {
        let form = form.clone();
        Callback::from(move |next: FormState| {
            DraftManager::new(LocalStorage).save(&next);
            form.set(next);
        })
    };

    let on_restore_draft = {
        let form = form.clone();
        let draft = draft.clone();
        Callback::from(move |_| {
            if let Some(offer) = DraftManager::new(LocalStorage).check_and_offer() {
                let mut next = (*form).clone();
                offer.restore(&mut next);
                form.set(next);
            }
            draft.set(None);
        })
    };

    let on_dismiss_draft = {
        let draft = draft.clone();
        Callback::from(move |_| {
            if let Some(offer) = DraftManager::new(LocalStorage).check_and_offer() {
                offer.dismiss();
            }
            draft.set(None);
        })
    };

    let on_generate = {
        let form = form.clone();
        let settings = settings.clone();
        let loading = is_loading.clone();
        let error_msg = error_msg.clone();
        let current = current.clone();
        let opened_name = opened_name.clone();
        let draft = draft.clone();

        Callback::from(move |_| {
            let request = request_from_form(&form);
            if request.prompt.is_empty() {
                return;
            }
            loading.set(true);
            error_msg.set(String::new());

            let endpoint = settings.endpoint.clone();
            let loading = loading.clone();
            let error_msg = error_msg.clone();
            let current = current.clone();
            let opened_name = opened_name.clone();
            let draft = draft.clone();

            spawn_local(async move {
                match generate_recipe(&endpoint, &request).await {
                    Ok(recipe) => {
                        info!("generated {:?}", recipe.name);
                        DraftManager::new(LocalStorage).clear();
                        draft.set(None);
                        opened_name.set(None);
                        current.set(Some(recipe));
                    }
                    Err(e) => {
                        warn!("{:#}", e);
                        error_msg.set(format!("{:#}", e));
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_save_recipe = {
        let signals = signals.clone();
        let saved = saved.clone();
        let current = current.clone();
        let opened_name = opened_name.clone();
        let error_msg = error_msg.clone();
        Callback::from(move |recipe: Recipe| {
            let store = RecipeStore::with_observer(LocalStorage, signals.clone());
            match store.add(recipe.clone()) {
                Ok(()) => {
                    saved.set(store.list());
                    opened_name.set(Some(recipe.name.clone()));
                    current.set(Some(recipe));
                }
                // Already alerted
                Err(StoreError::DuplicateName(_)) => {}
                Err(e) => error_msg.set(e.to_string()),
            }
        })
    };

    let on_update_recipe = {
        let signals = signals.clone();
        let current = current.clone();
        let opened_name = opened_name.clone();
        Callback::from(move |recipe: Recipe| {
            let Some(name) = (*opened_name).clone() else {
                return;
            };
            RecipeStore::with_observer(LocalStorage, signals.clone()).update(&name, recipe.clone());
            opened_name.set(Some(recipe.name.clone()));
            current.set(Some(recipe));
        })
    };

    let on_select_saved = {
        let current = current.clone();
        let opened_name = opened_name.clone();
        Callback::from(move |name: String| {
            if let Some(recipe) = RecipeStore::new(LocalStorage).get(&name) {
                opened_name.set(Some(recipe.name.clone()));
                current.set(Some(recipe));
            }
        })
    };

    let on_delete_saved = {
        let signals = signals.clone();
        let opened_name = opened_name.clone();
        Callback::from(move |(e, name): (MouseEvent, String)| {
            e.stop_propagation();
            RecipeStore::with_observer(LocalStorage, signals.clone()).remove(&name);
            if (*opened_name).as_ref().map(|n| n.to_lowercase() == name.to_lowercase()).unwrap_or(false) {
                opened_name.set(None);
            }
        })
    };

    let on_rate_saved = {
        let signals = signals.clone();
        let current = current.clone();
        let opened_name = opened_name.clone();
        Callback::from(move |(name, rating): (String, u8)| {
            let store = RecipeStore::with_observer(LocalStorage, signals.clone());
            store.rate(&name, rating);
            if let Some(open) = (*opened_name).as_ref() {
                if open.to_lowercase() == name.to_lowercase() {
                    current.set(store.get(&name));
                }
            }
        })
    };

    let on_settings_save = {
        let s = settings.clone();
        Callback::from(move |next: AppSettings| s.set(next))
    };

    let on_reset_settings = {
        let settings = settings.clone();
        Callback::from(move |_| {
            let confirmed = web_sys::window()
                .map(|w| w.confirm_with_message("Reset all settings to default?").unwrap_or(false))
                .unwrap_or(false);
            if confirmed {
                settings.set(AppSettings::default());
            }
        })
    };

    let close_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_| show_settings.set(false))
    };

    let toggle_settings = show_settings.clone();
    let toggle_sidebar = sidebar_open.clone();

    html! {
        <>
            <style>{ GLOBAL_STYLES }</style>
            <div class="app-container">
                <SavedRecipes
                    open={*sidebar_open}
                    recipes={(*saved).clone()}
                    badge={(*badge).clone()}
                    active_name={(*opened_name).clone()}
                    on_select={on_select_saved}
                    on_delete={on_delete_saved}
                    on_rate={on_rate_saved}
                />

                <div class="main-content">
                    <div class="header">
                        <div style="display: flex; gap: 10px; align-items: center; min-width: 0;">
                            <button class="btn-icon" onclick={Callback::from(move |_| toggle_sidebar.set(!*toggle_sidebar))} title="Toggle saved recipes">
                                { "☰" }
                            </button>
                            <h2>{ "Recipe Assistant" }</h2>
                        </div>
                        <button class="btn-icon" onclick={Callback::from(move |_| toggle_settings.set(!*toggle_settings))} title="Settings">
                            { "⚙" }
                        </button>
                    </div>

                    if *show_settings {
                        <SettingsModal
                            settings={(*settings).clone()}
                            on_save={on_settings_save}
                            on_close={close_settings}
                            on_reset={on_reset_settings}
                        />
                    }

                    <div class="page">
                        if let Some(d) = (*draft).clone() {
                            <DraftBanner draft={d} on_restore={on_restore_draft} on_dismiss={on_dismiss_draft} />
                        }

                        <RecipeForm
                            form={(*form).clone()}
                            is_loading={*is_loading}
                            on_change={on_form_change}
                            on_submit={on_generate}
                        />

                        if !error_msg.is_empty() {
                            <div class="error-box">{ &*error_msg }</div>
                        }

                        if let Some(recipe) = (*current).clone() {
                            <RecipeView
                                recipe={recipe}
                                is_saved={opened_name.is_some()}
                                on_save={on_save_recipe}
                                on_update={on_update_recipe}
                            />
                        }
                    </div>
                </div>
            </div>
        </>
    }
}
