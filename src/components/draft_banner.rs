use yew::prelude::*;

use crate::models::Draft;

#[derive(Properties, PartialEq)]
pub struct DraftBannerProps {
    pub draft: Draft,
    pub on_restore: Callback<()>,
    pub on_dismiss: Callback<()>,
}

#[function_component(DraftBanner)]
pub fn draft_banner(props: &DraftBannerProps) -> Html {
    let css = r#"
        .draft-banner { display: flex; justify-content: space-between; align-items: center; gap: 10px; padding: 10px 14px; margin-bottom: 15px; border: 1px solid var(--border-color); border-radius: 6px; background: #fffbe6; font-size: 0.9rem; }
        .draft-banner .draft-text { overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
        .draft-banner .draft-actions { display: flex; gap: 8px; flex-shrink: 0; }
    "#;

    html! {
        <>
            <style>{ css }</style>
            <div class="draft-banner">
                <span class="draft-text">
                    { format!("Unsaved request: \"{}\" ({} servings)", props.draft.prompt, props.draft.servings) }
                </span>
                <div class="draft-actions">
                    <button class="btn btn-primary" onclick={props.on_restore.reform(|_| ())}>{ "Restore" }</button>
                    <button class="btn" onclick={props.on_dismiss.reform(|_| ())}>{ "Discard" }</button>
                </div>
            </div>
        </>
    }
}
