//! Interactivity for the new-campaign page.
//!
//! The page markup is rendered by the server; this module binds to the
//! existing elements. Every element is required: if one is missing the page is
//! left untouched rather than half-wired.

mod counter;
mod summary;
mod tags;
mod templates;

use log::info;
use web_sys::{Document, Element, Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::config;
use crate::dom::{by_id, by_selector, listen};
use crate::error::MountError;
use counter::RecipientCounter;
use tags::{TagSet, TagSelector};
use templates::TemplateManager;

struct CampaignElements {
    campaign_name: HtmlInputElement,
    tag_input: HtmlInputElement,
    selected_tags: Element,
    summary_name: Element,
    summary_tags: Element,
    summary_count: Element,
    hidden_tags: HtmlInputElement,
    anti_spam: HtmlInputElement,
    save_template: Element,
    template_select: HtmlSelectElement,
    message: HtmlTextAreaElement,
}

impl CampaignElements {
    fn locate(document: &Document) -> Result<Self, MountError> {
        Ok(Self {
            campaign_name: by_id(document, "campaign-name")?,
            tag_input: by_id(document, "target-tags")?,
            selected_tags: by_selector(document, ".selected-tags")?,
            summary_name: by_id(document, "summary-name")?,
            summary_tags: by_id(document, "summary-tags")?,
            summary_count: by_id(document, "summary-count")?,
            hidden_tags: by_id(document, "hidden-tags")?,
            anti_spam: by_id(document, "anti-spam")?,
            save_template: by_id(document, "save-template-btn")?,
            template_select: by_id(document, "template-select")?,
            message: by_id(document, "campaign-message")?,
        })
    }
}

/// Wires up the campaign form. Returns `Ok(false)` on pages without the
/// campaign root.
pub fn mount(document: &Document) -> Result<bool, MountError> {
    if document.get_element_by_id(config::CAMPAIGN_ROOT_ID).is_none() {
        return Ok(false);
    }
    let el = CampaignElements::locate(document)?;

    let counter = RecipientCounter::new(
        el.campaign_name.clone(),
        el.anti_spam.clone(),
        el.hidden_tags,
        el.summary_count,
    );

    let selector = {
        let counter = counter.clone();
        TagSelector::new(
            document.clone(),
            el.tag_input,
            el.selected_tags,
            el.summary_tags,
            move |tags: &TagSet| counter.refresh(tags),
        )
    };
    selector.attach()?;

    {
        let counter = counter.clone();
        let selector = selector.clone();
        let name_input = el.campaign_name.clone();
        let summary_name = el.summary_name;
        listen(&el.campaign_name, "input", move |_: Event| {
            summary_name.set_text_content(Some(summary::summary_name(&name_input.value())));
            counter.refresh(&selector.tags());
        })?;
    }
    {
        let counter = counter.clone();
        let selector = selector.clone();
        listen(&el.anti_spam, "change", move |_: Event| {
            counter.refresh(&selector.tags());
        })?;
    }

    let templates = TemplateManager::new(el.template_select, el.message);
    templates.attach(&el.save_template)?;

    counter.refresh(&selector.tags());
    templates.fetch_templates();

    info!("Campaign page ready");
    Ok(true)
}
