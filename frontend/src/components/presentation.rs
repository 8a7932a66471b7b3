//! One presentation in a list: name, size, date, share link, actions.

use leptos::*;
use zipslides::{format_count, format_date, format_file_size, messages, Notice, PresentationRecord};

use crate::services::copy_text;
use crate::store::{use_store, AppStore};

/// Copy a share link and toast the outcome.
pub fn copy_share_link(store: AppStore, link: String) {
    spawn_local(async move {
        match copy_text(&link).await {
            Ok(()) => store.notify(Notice::success(messages::LINK_COPIED)),
            Err(e) => {
                log::warn!("{}", e);
                store.notify(Notice::error(messages::COPY_FAILED));
            }
        }
    });
}

#[component]
pub fn PresentationCard(
    record: PresentationRecord,
    /// Show the delete button
    #[prop(optional)]
    deletable: bool,
) -> impl IntoView {
    let store = use_store();

    let link = record.share_link.clone();
    let on_copy = {
        let link = link.clone();
        move |_| copy_share_link(store, link.clone())
    };
    let on_copy_inline = {
        let link = link.clone();
        move |_| copy_share_link(store, link.clone())
    };

    let id = record.id.clone();
    let on_delete = move |_| {
        if let Some(notice) = store.mutate(|s| s.delete_presentation(&id)).flatten() {
            store.notify(notice);
        }
    };

    let mut details = vec![
        format_file_size(record.size),
        format!("📅 {}", format_date(&record.uploaded_at)),
    ];
    if let Some(views) = record.views {
        details.push(format!("👁 {}", format_count(views, "view")));
    }
    if let Some(downloads) = record.downloads {
        details.push(format!("⬇ {}", format_count(downloads, "download")));
    }

    view! {
        <div class="card presentation">
            <div class="presentation-row">
                <div class="presentation-info">
                    <div class="file-icon">"📄"</div>
                    <div>
                        <h3 class="presentation-name">{record.name.clone()}</h3>
                        <p class="presentation-details">{details.join(" • ")}</p>
                    </div>
                </div>
                <div class="presentation-actions">
                    <button class="btn btn-secondary btn-small" title="Copy link" on:click=on_copy>
                        "⧉ Copy Link"
                    </button>
                    <a
                        href=link.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn btn-primary btn-small"
                    >
                        "↗ View"
                    </a>
                    {deletable.then(|| view! {
                        <button
                            class="btn btn-danger btn-small"
                            title="Delete presentation"
                            on:click=on_delete
                        >
                            "🗑"
                        </button>
                    })}
                </div>
            </div>
            <div class="share-box">
                <p class="share-label">"Share Link:"</p>
                <div class="share-row">
                    <input
                        type="text"
                        class="input-field"
                        readonly=true
                        value=link
                        title="Share link"
                        aria-label="Share link"
                    />
                    <button
                        class="btn btn-secondary btn-small"
                        title="Copy link to clipboard"
                        on:click=on_copy_inline
                    >
                        "⧉"
                    </button>
                </div>
            </div>
        </div>
    }
}
