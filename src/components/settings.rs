use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::recipe_form::DIFFICULTIES;
use crate::models::AppSettings;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsProps {
    pub settings: AppSettings,
    pub on_save: Callback<AppSettings>,
    pub on_close: Callback<()>,
    pub on_reset: Callback<()>,
}

#[function_component(SettingsModal)]
pub fn settings_modal(props: &SettingsProps) -> Html {
    let on_endpoint_input = {
        let on_save = props.on_save.clone();
        let settings = props.settings.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_save.emit(AppSettings { endpoint: input.value(), ..settings.clone() });
        })
    };

    let on_difficulty_change = {
        let on_save = props.on_save.clone();
        let settings = props.settings.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_save.emit(AppSettings { default_difficulty: select.value(), ..settings.clone() });
        })
    };

    let on_level_change = {
        let on_save = props.on_save.clone();
        let settings = props.settings.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_save.emit(AppSettings { log_level: select.value(), ..settings.clone() });
        })
    };

    let on_reset_click = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let css = r#"
        .settings-backdrop { position: absolute; top: 0; left: 0; width: 100%; height: 100%; background: rgba(255,255,255,0.6); backdrop-filter: blur(2px); z-index: 99; cursor: pointer; }
        .settings-panel { position: absolute; top: 60px; right: 20px; width: 340px; background: white; border: 1px solid var(--border-color); border-radius: 8px; box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1); padding: 20px; z-index: 100; display: flex; flex-direction: column; gap: 15px; }
        .settings-header { display: flex; justify-content: space-between; align-items: center; border-bottom: 1px solid var(--border-color); padding-bottom: 10px; margin-bottom: 5px; }
        .settings-header h3 { margin: 0; font-size: 1.1rem; }
        .close-btn { background: none; border: none; font-size: 1.5rem; line-height: 1; cursor: pointer; color: var(--text-secondary); padding: 0 5px; }
        .close-btn:hover { color: var(--text-primary); }
        .actions { margin-top: 10px; display: flex; flex-direction: column; gap: 8px; }
    "#;

    html! {
        <>
            <style>{ css }</style>
            <div class="settings-backdrop" onclick={props.on_close.reform(|_| ())}></div>

            <div class="settings-panel">
                <div class="settings-header">
                    <h3>{ "Configuration" }</h3>
                    <button class="close-btn" onclick={props.on_close.reform(|_| ())} title="Close">{"×"}</button>
                </div>

                <div>
                    <label class="form-label">{ "Recipe service endpoint" }</label>
                    <input class="form-input" type="text" value={props.settings.endpoint.clone()} oninput={on_endpoint_input} />
                </div>

                <div>
                    <label class="form-label">{ "Default difficulty" }</label>
                    <select class="form-select" onchange={on_difficulty_change}>
                        { for DIFFICULTIES.iter().map(|d| html! {
                            <option value={*d} selected={props.settings.default_difficulty == *d}>{ *d }</option>
                        }) }
                    </select>
                </div>

                <div>
                    <label class="form-label">{ "Console log level" }</label>
                    <select class="form-select" onchange={on_level_change}>
                        { for LOG_LEVELS.iter().map(|l| html! {
                            <option value={*l} selected={props.settings.log_level == *l}>{ *l }</option>
                        }) }
                    </select>
                </div>

                <div class="actions">
                    <hr style="width: 100%; border: 0; border-top: 1px solid var(--border-color);" />
                    <button class="btn" onclick={on_reset_click}>{ "Reset Settings" }</button>
                </div>
            </div>
        </>
    }
}
